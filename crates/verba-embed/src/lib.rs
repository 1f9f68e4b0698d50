//! # Verba Embedding Engine
//!
//! Embedding providers for the verba transcript search pipeline. Text goes
//! in, a fixed-dimension vector comes out; everything else (which backend,
//! which model, retries, timeouts) is the provider's business.
//!
//! ## Features
//!
//! - **Remote providers**: Gemini `embedContent` over HTTPS with bounded
//!   retry and per-request timeouts
//! - **Intent-aware**: document embeddings and query embeddings are
//!   distinguished so retrieval-tuned models can apply their asymmetric
//!   transforms while staying mutually comparable
//! - **Deterministic fallback**: a hash-based provider for tests and
//!   offline runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use verba_embed::{EmbeddingConfig, EmbeddingIntent, EmbeddingProvider, GeminiEmbeddingProvider};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = GeminiEmbeddingProvider::new(EmbeddingConfig::default())?;
//! let vector = provider.embed("hello world", EmbeddingIntent::Document).await?;
//! println!("Generated a {}-dimension embedding", vector.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod provider;

// Re-export main types for convenience
pub use config::EmbeddingConfig;
pub use error::{Result, VerbaEmbedError};
pub use provider::{
    DefaultEmbeddingProvider, EmbeddingIntent, EmbeddingProvider, GeminiEmbeddingProvider,
};

/// Current version of the verba-embed crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default embedding dimension (Gemini `embedding-001`)
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 768;
