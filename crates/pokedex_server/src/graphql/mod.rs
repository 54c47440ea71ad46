//! GraphQL schema over the Pokédex service.

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use pokedex_core::PokedexService;
use std::sync::Arc;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type PokedexSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(service: Arc<PokedexService>) -> PokedexSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}
