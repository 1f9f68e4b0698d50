//! Handlers for the individual CLI commands.

pub mod clear;
pub mod index;
pub mod query;
pub mod stats;
pub mod view;

use anyhow::Result;
use std::sync::Arc;
use verba_embed::{EmbeddingProvider, GeminiEmbeddingProvider};
use verba_search::AppConfig;

/// Builds the embedding provider configured for this run.
pub(crate) fn build_provider(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider = GeminiEmbeddingProvider::new(config.embedding.clone())?;
    Ok(Arc::new(provider))
}
