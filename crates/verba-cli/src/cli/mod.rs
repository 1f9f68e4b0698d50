//! Command-line interface definition and dispatch.

pub mod commands;
pub mod formatters;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use verba_search::{AppConfig, QdrantClientTrait};

/// Semantic search over video transcripts.
#[derive(Parser, Debug)]
#[command(name = "verba", version, about, long_about = None)]
pub struct CliArgs {
    /// Optional override for the configuration file path.
    #[arg(long, global = true, env = "VERBA_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a video transcript into the search collection.
    Index(commands::index::IndexArgs),
    /// Search indexed transcripts with a natural-language query.
    Query(commands::query::QueryArgs),
    /// Print a transcript file as readable timestamped lines.
    View(commands::view::ViewArgs),
    /// Delete the search collection and everything indexed in it.
    Clear(commands::clear::ClearArgs),
    /// Show collection status and point count.
    Stats(commands::stats::StatsArgs),
}

/// Dispatches a parsed command to its handler.
pub async fn handle_command<C>(command: Commands, config: &AppConfig, client: Arc<C>) -> Result<()>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    match command {
        Commands::Index(args) => commands::index::handle_index(args, config, client).await,
        Commands::Query(args) => commands::query::handle_query(args, config, client).await,
        Commands::View(args) => commands::view::handle_view(args).await,
        Commands::Clear(args) => commands::clear::handle_clear(args, config, client).await,
        Commands::Stats(args) => commands::stats::handle_stats(args, config, client).await,
    }
}
