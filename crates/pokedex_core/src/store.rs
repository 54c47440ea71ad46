//! Record store - in-memory repository for Pokémon records and catalogues.
//!
//! All state sits behind one `RwLock`, so every operation (including the
//! read-modify-write of `update` and `remove`) runs to completion before the
//! next one observes the store.

use crate::domain::*;
use crate::seed::{SeedData, SeedError};
use async_trait::async_trait;
use tokio::sync::RwLock;

// Repository Trait
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    async fn find_all(&self) -> Vec<Pokemon>;
    async fn find(&self, key: &LookupKey) -> Option<Pokemon>;
    async fn find_by_type(&self, type_name: &str) -> Vec<Pokemon>;
    async fn find_by_move(&self, move_name: &str) -> Vec<Pokemon>;
    async fn attacks(&self) -> AttackCatalogue;
    async fn types(&self) -> TypeCatalogue;
    async fn count(&self) -> usize;
    async fn insert(&self, pokemon: Pokemon) -> Pokemon;
    async fn update(&self, key: &LookupKey, patch: PokemonPatch) -> Option<Pokemon>;
    async fn remove(&self, key: &LookupKey) -> Removal;
}

// Update Types

/// Field-level overwrite; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub classification: Option<String>,
    pub types: Option<Vec<String>>,
}

impl PokemonPatch {
    pub fn apply(self, pokemon: &mut Pokemon) {
        if let Some(id) = self.id {
            pokemon.id = id;
        }
        if let Some(name) = self.name {
            pokemon.name = name;
        }
        if let Some(classification) = self.classification {
            pokemon.classification = Some(classification);
        }
        if let Some(types) = self.types {
            pokemon.types = types;
        }
    }
}

/// Outcome of a removal: what was removed, and how many records remain.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub removed: Option<Pokemon>,
    pub remaining: usize,
}

// In-Memory Repository
struct StoreState {
    pokemon: Vec<Pokemon>,
    attacks: AttackCatalogue,
    types: TypeCatalogue,
}

pub struct InMemoryPokemonRepository {
    state: RwLock<StoreState>,
}

impl InMemoryPokemonRepository {
    pub fn new(seed: SeedData) -> Self {
        Self {
            state: RwLock::new(StoreState {
                pokemon: seed.pokemon,
                attacks: seed.attacks,
                types: seed.types,
            }),
        }
    }

    /// Store populated from the embedded dataset.
    pub fn with_seed_data() -> Result<Self, SeedError> {
        Ok(Self::new(SeedData::embedded()?))
    }
}

#[async_trait]
impl PokemonRepository for InMemoryPokemonRepository {
    async fn find_all(&self) -> Vec<Pokemon> {
        self.state.read().await.pokemon.clone()
    }

    async fn find(&self, key: &LookupKey) -> Option<Pokemon> {
        let state = self.state.read().await;
        key.resolve(&state.pokemon)
            .map(|index| state.pokemon[index].clone())
    }

    async fn find_by_type(&self, type_name: &str) -> Vec<Pokemon> {
        self.state
            .read()
            .await
            .pokemon
            .iter()
            .filter(|p| p.has_type(type_name))
            .cloned()
            .collect()
    }

    async fn find_by_move(&self, move_name: &str) -> Vec<Pokemon> {
        self.state
            .read()
            .await
            .pokemon
            .iter()
            .filter(|p| p.knows_move(move_name))
            .cloned()
            .collect()
    }

    async fn attacks(&self) -> AttackCatalogue {
        self.state.read().await.attacks.clone()
    }

    async fn types(&self) -> TypeCatalogue {
        self.state.read().await.types.clone()
    }

    async fn count(&self) -> usize {
        self.state.read().await.pokemon.len()
    }

    async fn insert(&self, pokemon: Pokemon) -> Pokemon {
        let mut state = self.state.write().await;
        state.pokemon.push(pokemon.clone());
        pokemon
    }

    async fn update(&self, key: &LookupKey, patch: PokemonPatch) -> Option<Pokemon> {
        let mut state = self.state.write().await;
        let index = key.resolve(&state.pokemon)?;
        let pokemon = &mut state.pokemon[index];
        patch.apply(pokemon);
        Some(pokemon.clone())
    }

    async fn remove(&self, key: &LookupKey) -> Removal {
        let mut state = self.state.write().await;
        let removed = key
            .resolve(&state.pokemon)
            .map(|index| state.pokemon.remove(index));
        Removal {
            removed,
            remaining: state.pokemon.len(),
        }
    }
}
