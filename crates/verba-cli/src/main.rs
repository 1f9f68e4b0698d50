use anyhow::{Context, Result};
use clap::Parser;
use qdrant_client::Qdrant;
use std::sync::Arc;

use verba_cli::cli::{handle_command, CliArgs, Commands};
use verba_search::config::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger from RUST_LOG env var or default to warn
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    let config = load_config(args.config_path.as_ref()).context("Failed to load configuration")?;
    log::debug!(
        "Using collection '{}' on {}",
        config.collection_name,
        config.qdrant_url
    );

    match args.command {
        // `view` needs no running services; handle it without connecting.
        Commands::View(view_args) => verba_cli::cli::commands::view::handle_view(view_args).await,
        command => {
            let client = Qdrant::from_url(&config.qdrant_url)
                .build()
                .with_context(|| format!("Failed to connect to Qdrant at {}", config.qdrant_url))?;

            handle_command(command, &config, Arc::new(client)).await
        }
    }
}
