//! numtally server
//!
//! Serves the numtally HTTP API.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use numtally_api::{Environment, Server, ServerConfig};

/// numtally API server
#[derive(Parser, Debug)]
#[command(name = "numtally-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "NUMTALLY_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "NUMTALLY_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Deployment environment (development, production, test)
    #[arg(short, long, env = "NUMTALLY_ENV")]
    environment: Option<Environment>,

    /// Disable per-client rate limiting
    #[arg(long)]
    no_rate_limit: bool,
}

impl Args {
    fn into_config(self) -> Result<ServerConfig> {
        let mut config = ServerConfig::load(self.config.as_deref())?;
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(environment) = self.environment {
            config.environment = environment;
        }
        if self.no_rate_limit {
            config.rate_limit.enabled = false;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,numtally_api=debug,tower_http=info".into()),
        )
        .init();

    let config = Args::parse().into_config()?;
    let server = Server::new(config)?;
    server.run().await?;
    Ok(())
}
