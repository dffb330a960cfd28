//! jrpc CLI - Entry point
//!
//! Usage: jrpc <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jrpc::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (stderr, so stdout stays machine readable)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = cli.load_config()?;
    let format = cli.format;

    match cli.command {
        Commands::Call(args) => jrpc::cli::call::run_call(args, &config, format).await,
        Commands::Notify(args) => jrpc::cli::call::run_notify(args, &config, format).await,
        Commands::Batch(args) => jrpc::cli::batch::run(args, &config, format).await,
        Commands::Decode(args) => jrpc::cli::decode::run(args, format),
        Commands::Config(args) => jrpc::cli::config::run(args, &config),
    }
}
