#![warn(missing_docs)] // Enforce documentation for all public items

//! # verba-search
//! `verba-search` is the core library powering the `verba` CLI. It turns
//! time-stamped video transcripts into retrievable, time-anchored semantic
//! units and answers natural-language queries over them:
//!
//! - **Normalization**: Parse collaborator caption lists into uniform
//!   `(text, start, duration)` records
//! - **Chunking**: Group consecutive captions into time-bounded chunks with
//!   human-readable timestamps
//! - **Embedding**: Generate document and query embeddings through the
//!   providers in `verba-embed`
//! - **Indexing**: Upsert chunk vectors and their metadata into a Qdrant
//!   collection under stable, ordinal-derived identifiers
//! - **Search**: Top-k cosine similarity search mapped back into ranked,
//!   time-anchored results
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qdrant_client::Qdrant;
//! use verba_embed::{EmbeddingConfig, GeminiEmbeddingProvider};
//! use verba_search::{search_collection, SearchParams};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(Qdrant::from_url("http://localhost:6334").build()?);
//! let provider = Arc::new(GeminiEmbeddingProvider::new(EmbeddingConfig::default())?);
//!
//! let results = search_collection(SearchParams {
//!     client,
//!     provider,
//!     collection_name: "video-search",
//!     query_text: "how does the borrow checker work",
//!     limit: 5,
//!     video_id: None,
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

// Public modules
/// Transcript chunking logic.
pub mod chunker;
/// Configuration management for the application.
pub mod config;
/// Shared constants used across the library.
pub mod constants;
/// Defines the core error types and Result alias.
pub mod error;
/// Core logic for indexing video transcripts.
pub mod indexing;
/// Trait defining the interface for a Qdrant client, enabling mocking.
pub mod qdrant_client_trait;
/// Low-level Qdrant client operations.
pub mod qdrant_ops;
/// Search module providing the result types.
pub mod search;
/// Implementation of search functionality.
pub mod search_impl;
/// Caption normalization and transcript acquisition.
pub mod transcript;

#[cfg(test)]
/// Utilities specific to testing within the core library.
pub mod test_utils;

pub use chunker::{chunk_entries, format_timestamp, TranscriptChunk};
pub use config::{
    get_config_path_or_default, load_config, save_config, AppConfig, IndexingConfig,
};
pub use constants::*;
pub use error::{Result, VerbaError};
pub use indexing::{chunk_id, index_transcript, IndexTranscriptParams};
pub use qdrant_client_trait::QdrantClientTrait;
pub use search::SearchResult;
pub use search_impl::{search_collection, SearchParams};
pub use transcript::{
    format_transcript, parse_transcript_json, CaptionEntry, JsonFileSource, TranscriptSource,
};

// Re-export from verba-embed crate for convenience
pub use verba_embed::{EmbeddingConfig, EmbeddingIntent, EmbeddingProvider};
