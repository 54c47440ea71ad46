//! Embedded first-generation dataset.
//!
//! The dataset is compiled into the binary and decoded once at startup; no
//! file or network access happens at runtime.

use crate::domain::{AttackCatalogue, Pokemon, TypeCatalogue};
use serde::Deserialize;
use thiserror::Error;

const POKEDEX_JSON: &str = include_str!("../data/pokedex.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to decode seed dataset: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Records and catalogues the store starts from.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub pokemon: Vec<Pokemon>,
    pub attacks: AttackCatalogue,
    pub types: TypeCatalogue,
}

impl SeedData {
    /// Decodes the dataset shipped with the crate.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(POKEDEX_JSON)
    }

    /// Decodes a dataset with the same shape as the embedded one.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }
}
