use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use verba_search::{format_transcript, parse_transcript_json};

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Path to the caption JSON file to display.
    #[arg(required = true)]
    pub transcript: PathBuf,
}

pub async fn handle_view(args: ViewArgs) -> Result<()> {
    let raw = tokio::fs::read_to_string(&args.transcript)
        .await
        .with_context(|| format!("Failed to read {}", args.transcript.display()))?;

    let label = args.transcript.display().to_string();
    let entries = parse_transcript_json(&label, &raw)?;
    print!("{}", format_transcript(&entries));
    Ok(())
}
