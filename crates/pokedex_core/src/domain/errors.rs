//! Domain errors - Lookup misses and rejected input.

use crate::domain::LookupKey;
use crate::validation::{ValidationError, ValidationErrorCode, ValidationErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Pokemon not found: {0}")]
    NotFound(LookupKey),

    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationErrors),
}

impl DomainError {
    pub fn invalid(
        field: impl Into<String>,
        code: ValidationErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument(ValidationError::new(field, code, message).into())
    }

    /// Machine-readable code reported in GraphQL error extensions.
    pub const fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound(_) => "NOT_FOUND",
            DomainError::InvalidArgument(_) => "INVALID_ARGUMENT",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
