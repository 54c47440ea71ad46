//! Input validation for Pokédex mutations.
//!
//! Mutation inputs are checked before the store is touched, so a rejected
//! mutation never leaves a partial write behind. The checks are:
//!
//! - required identifiers are present and not blank
//! - type tags (on the record and on each attack move) exist in the
//!   [`TypeCatalogue`]
//! - attack damage parses as a number
//!
//! # Example
//!
//! ```ignore
//! use pokedex_core::validation::Validator;
//!
//! let mut validator = Validator::new();
//! validator.string("name", name).required();
//! validator.string("types[0]", "Grass").known_type(&catalogue);
//! let result = validator.finish();
//! ```

use crate::domain::TypeCatalogue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validation error for a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The field that failed validation, e.g. `attacks.fast[1].type`.
    pub field: String,
    /// Human-readable error message.
    pub message: String,
    /// Machine-readable error code.
    pub code: ValidationErrorCode,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        field: impl Into<String>,
        code: ValidationErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorCode {
    /// Value is required but missing or blank.
    Required,
    /// Type tag is not in the type catalogue.
    UnknownType,
    /// Value must be a number.
    InvalidNumber,
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates errors from a single error.
    pub fn single(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Adds an error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns errors for a specific field.
    pub fn for_field(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// The first offending field, if any.
    pub fn first_field(&self) -> Option<&str> {
        self.errors.first().map(|e| e.field.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

/// Inputs that can be checked against the catalogue before a write.
pub trait Validate {
    /// Validates the value and returns every error found.
    fn validate(&self, types: &TypeCatalogue) -> ValidationResult<()>;
}

/// Builder for validating input fields.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a string field with the given checks.
    pub fn string<'a>(&'a mut self, name: &str, value: &'a str) -> StringValidator<'a> {
        StringValidator {
            errors: &mut self.errors,
            name: name.to_string(),
            value,
        }
    }

    /// Adds a custom validation error.
    pub fn add_error(&mut self, field: &str, code: ValidationErrorCode, message: &str) {
        self.errors.push(ValidationError::new(field, code, message));
    }

    /// Finishes validation and returns the result.
    pub fn finish(self) -> ValidationResult<()> {
        if self.errors.has_errors() {
            Err(self.errors)
        } else {
            Ok(())
        }
    }
}

/// Validator for string fields.
pub struct StringValidator<'a> {
    errors: &'a mut ValidationErrors,
    name: String,
    value: &'a str,
}

impl StringValidator<'_> {
    /// Validates that the value is not empty after trimming.
    pub fn required(self) -> Self {
        if self.value.trim().is_empty() {
            self.errors.push(ValidationError::new(
                &self.name,
                ValidationErrorCode::Required,
                "is required",
            ));
        }
        self
    }

    /// Validates that the value names a catalogued type.
    pub fn known_type(self, types: &TypeCatalogue) -> Self {
        if !types.contains(self.value) {
            self.errors.push(ValidationError::new(
                &self.name,
                ValidationErrorCode::UnknownType,
                format!("'{}' is not a known type", self.value),
            ));
        }
        self
    }

    /// Validates that the value parses as a finite number.
    pub fn numeric(self) -> Self {
        if !self.value.trim().parse::<f64>().is_ok_and(f64::is_finite) {
            self.errors.push(ValidationError::new(
                &self.name,
                ValidationErrorCode::InvalidNumber,
                format!("'{}' is not a number", self.value),
            ));
        }
        self
    }
}
