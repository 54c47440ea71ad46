//! GraphQL server over the in-memory Pokédex.
//!
//! - `graphql`: schema, resolvers and GraphQL types
//! - `http`: hyper transport, GraphiQL, health check
//! - `config`: command-line and environment configuration
//! - `error`: server errors and GraphQL error mapping

pub mod config;
pub mod error;
pub mod graphql;
pub mod http;

pub use config::{Args, ServerConfig};
pub use error::{IntoGraphQLError, ServerError, ServerResult};
pub use graphql::{build_schema, PokedexSchema};
pub use http::{handle_graphql_request, PokedexServer};
