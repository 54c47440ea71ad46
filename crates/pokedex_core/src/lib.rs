//! Core of the Pokédex GraphQL server.
//!
//! This crate owns everything below the GraphQL layer:
//! - `domain`: Pokémon records, attack and type catalogues, lookup keys, errors
//! - `validation`: typed validation of mutation inputs
//! - `store`: the in-memory record store behind the `PokemonRepository` trait
//! - `seed`: the embedded first-generation dataset
//! - `service`: query and mutation operations used by the resolvers
//!
//! # Example
//!
//! ```ignore
//! use pokedex_core::{InMemoryPokemonRepository, LookupKey, PokedexService};
//! use std::sync::Arc;
//!
//! let repo = Arc::new(InMemoryPokemonRepository::with_seed_data()?);
//! let service = PokedexService::new(repo);
//! let bulbasaur = service.get_pokemon(LookupKey::by_name("Bulbasaur")).await;
//! ```

pub mod domain;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;

pub use domain::*;
pub use seed::{SeedData, SeedError};
pub use service::{DeletePokemonInput, EditPokemonInput, NewPokemonInput, PokedexService};
pub use store::{InMemoryPokemonRepository, PokemonPatch, PokemonRepository, Removal};
pub use validation::{
    Validate, ValidationError, ValidationErrorCode, ValidationErrors, ValidationResult, Validator,
};
