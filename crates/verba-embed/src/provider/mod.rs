//! Embedding provider implementations and traits.

use crate::error::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// Distinguishes index-time document embeddings from query-time embeddings.
///
/// Retrieval-tuned models apply an asymmetric transform depending on which
/// side of the search the text sits on. Both intents must go through the
/// same model so the resulting vectors stay comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingIntent {
    /// Text that will be stored and searched over.
    Document,
    /// Text used to query stored documents.
    Query,
}

impl EmbeddingIntent {
    /// Task type string understood by the Gemini `embedContent` API.
    pub fn as_task_type(&self) -> &'static str {
        match self {
            EmbeddingIntent::Document => "RETRIEVAL_DOCUMENT",
            EmbeddingIntent::Query => "RETRIEVAL_QUERY",
        }
    }
}

/// A trait for embedding providers, defining a common interface for turning
/// text into fixed-dimension vectors. This allows for different underlying
/// backends (remote APIs, deterministic test providers).
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Get the embedding dimension of the provider's model.
    fn dimension(&self) -> usize;

    /// Embed a single text with the given intent.
    ///
    /// Never resolves to an empty or truncated vector; any such backend
    /// response is reported as an error instead.
    async fn embed(&self, text: &str, intent: EmbeddingIntent) -> Result<Vec<f32>>;
}

// Provider modules
pub mod default;
pub mod gemini;

// Re-export commonly used types
pub use default::DefaultEmbeddingProvider;
pub use gemini::GeminiEmbeddingProvider;
