//! Server errors and the mapping of domain errors onto GraphQL errors.

use async_graphql::ErrorExtensions;
use pokedex_core::{DomainError, SeedError};
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to accept connection: {0}")]
    Accept(#[source] std::io::Error),

    #[error(transparent)]
    Seed(#[from] SeedError),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Converts an error into a GraphQL error carrying `extensions.code`.
pub trait IntoGraphQLError {
    fn into_graphql_error(self) -> async_graphql::Error;
}

impl IntoGraphQLError for DomainError {
    fn into_graphql_error(self) -> async_graphql::Error {
        let code = self.code();
        let field = match &self {
            DomainError::InvalidArgument(errors) => errors.first_field().map(str::to_string),
            DomainError::NotFound(_) => None,
        };

        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", code);
            if let Some(field) = field {
                ext.set("field", field);
            }
        })
    }
}
