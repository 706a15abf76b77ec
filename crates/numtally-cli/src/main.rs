#![forbid(unsafe_code)]

//! numtally CLI
//!
//! Terminal front end for the numtally API: sum a list of numbers, check
//! server health, or drive the local counter.

mod commands;
mod render;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use numtally_client::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use numtally_client::{ClientConfig, NumtallyClient};
use numtally_core::CounterAction;

/// numtally Command-Line Interface
#[derive(Parser, Debug)]
#[command(name = "numtally")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the numtally API
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum comma-separated numbers, e.g. "1, 2, 3.5"
    Sum {
        /// Numbers separated by commas
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Check that the API is up
    Health,
    /// Apply counter actions and print the value after each
    Counter {
        /// Starting (and reset) value
        #[arg(long, default_value_t = 0)]
        initial: u64,

        /// Actions: inc, dec, reset, set=N
        #[arg(allow_hyphen_values = true)]
        actions: Vec<CounterAction>,
    },
}

impl Args {
    fn client(&self) -> Result<NumtallyClient> {
        let config = ClientConfig::new(&self.api_url)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        Ok(NumtallyClient::new(config)?)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let outcome = match &args.command {
        Command::Sum { input } => commands::sum(&args.client()?, input).await,
        Command::Health => commands::health(&args.client()?).await,
        Command::Counter { initial, actions } => commands::counter(*initial, actions),
    };

    print!("{}", outcome.output);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
