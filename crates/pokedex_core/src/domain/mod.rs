//! Domain layer - Pokémon records and catalogue rules.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
