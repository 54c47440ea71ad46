//! `pokedex-server` - serves the Pokédex GraphQL API over HTTP.

use clap::Parser;
use pokedex_core::{InMemoryPokemonRepository, PokedexService};
use pokedex_server::{build_schema, Args, PokedexServer, ServerConfig, ServerResult};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ServerResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from(Args::parse());

    let repo = Arc::new(InMemoryPokemonRepository::with_seed_data()?);
    let service = Arc::new(PokedexService::new(repo));
    info!(records = service.count().await, "Seeded pokedex");

    PokedexServer::new(config, build_schema(service)).run().await
}
