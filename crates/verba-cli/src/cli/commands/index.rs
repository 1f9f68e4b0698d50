use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

use verba_search::{
    index_transcript, AppConfig, IndexTranscriptParams, JsonFileSource, QdrantClientTrait,
    TranscriptSource,
};

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Identifier of the video the transcript belongs to.
    #[arg(required = true)]
    pub video_id: String,

    /// Path to the caption JSON file ([{"text", "start", "duration"}, ...]).
    #[arg(short, long)]
    pub transcript: PathBuf,

    /// Override the configured chunk size.
    #[arg(long)]
    pub chunk_size: Option<usize>,
}

pub async fn handle_index<C>(args: IndexArgs, config: &AppConfig, client: Arc<C>) -> Result<()>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    let source = JsonFileSource::new(&args.transcript);
    let entries = source
        .fetch(&args.video_id)
        .await
        .with_context(|| format!("Failed to read transcript from {}", args.transcript.display()))?;

    let provider = super::build_provider(config)?;
    let chunk_size = args.chunk_size.unwrap_or(config.indexing.chunk_size);

    println!(
        "Indexing video '{}' ({} captions, chunk size {})...",
        args.video_id.cyan(),
        entries.len(),
        chunk_size
    );

    let indexed = index_transcript(IndexTranscriptParams {
        client,
        provider,
        collection_name: &config.collection_name,
        video_id: &args.video_id,
        entries: &entries,
        chunk_size,
        max_concurrent_requests: config.indexing.max_concurrent_requests,
        batch_size: config.indexing.batch_size,
    })
    .await
    .with_context(|| format!("Failed to index video '{}'", args.video_id))?;

    println!(
        "{} Indexed {} chunks for video '{}'",
        "✓".green().bold(),
        indexed,
        args.video_id.cyan()
    );
    Ok(())
}
