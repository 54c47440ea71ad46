//! Server configuration.
//!
//! Values come from command-line flags, falling back to environment
//! variables (`PORT`, `HOST`, `POKEDEX_NO_PLAYGROUND`) and then to defaults.

use crate::error::{ServerError, ServerResult};
use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_ENDPOINT: &str = "/graphql";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Host to bind to.
    pub host: String,
    /// Serve GraphiQL on `GET <endpoint>`.
    pub playground: bool,
    /// Path of the GraphQL endpoint.
    pub endpoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            playground: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Sets the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Disables the GraphiQL page.
    pub fn no_playground(mut self) -> Self {
        self.playground = false;
        self
    }

    /// Address to bind; the host must be an IP literal.
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::InvalidAddress(format!("{}:{} ({})", self.host, self.port, e)))
    }
}

/// Command-line arguments of `pokedex-server`.
#[derive(Parser, Debug)]
#[command(name = "pokedex-server")]
#[command(author, version, about = "GraphQL API over an in-memory Pokédex", long_about = None)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host (IP address) to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Do not serve the GraphiQL page
    #[arg(long, env = "POKEDEX_NO_PLAYGROUND")]
    pub no_playground: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        let config = ServerConfig::new().port(args.port).host(args.host);
        if args.no_playground {
            config.no_playground()
        } else {
            config
        }
    }
}
