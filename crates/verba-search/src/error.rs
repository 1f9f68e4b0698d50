use std::io;
use thiserror::Error;

/// Result type for verba operations
pub type Result<T> = std::result::Result<T, VerbaError>;

/// Errors that can occur in the verba pipeline
#[derive(Error, Debug)]
pub enum VerbaError {
    /// No captions exist for the requested video (disabled or missing).
    #[error("No transcript available for video '{0}'")]
    TranscriptUnavailable(String),

    /// Error indicating that an invalid parameter was provided to a function or method.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to application configuration (e.g., missing settings, invalid values).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Error occurring during the generation of text embeddings.
    #[error("Error generating embedding: {0}")]
    EmbeddingError(String),

    /// Failure during the indexing upsert loop, identifying the failing chunk.
    #[error("Indexing failed for video '{video_id}' at chunk {ordinal}: {message}")]
    IndexingError {
        /// Identifier of the video being indexed.
        video_id: String,
        /// Zero-based ordinal of the chunk that failed.
        ordinal: usize,
        /// Description of the underlying cause.
        message: String,
    },

    /// Error occurring during a search or query operation.
    #[error("Search error: {0}")]
    SearchError(String),

    /// Error serializing or deserializing data.
    #[error("Error serializing or deserializing data: {0}")]
    SerializationError(String),

    /// Error originating from the Qdrant client
    #[error("Qdrant client error: {0}")]
    QdrantError(Box<qdrant_client::QdrantError>),

    /// Custom error during a Qdrant operation (e.g., unexpected response)
    #[error("Qdrant operation error: {0}")]
    QdrantOperationError(String),

    /// A generic I/O error, often wrapping `std::io::Error`.
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),

    /// A catch-all error type for unclassified errors, often converted from `anyhow::Error`.
    #[error("Other error: {0}")]
    Other(String),
}

// Manual From implementation for QdrantError
impl From<qdrant_client::QdrantError> for VerbaError {
    fn from(err: qdrant_client::QdrantError) -> Self {
        VerbaError::QdrantError(Box::new(err))
    }
}

impl From<serde_json::Error> for VerbaError {
    fn from(err: serde_json::Error) -> Self {
        VerbaError::SerializationError(err.to_string())
    }
}

impl From<verba_embed::error::VerbaEmbedError> for VerbaError {
    fn from(err: verba_embed::error::VerbaEmbedError) -> Self {
        VerbaError::EmbeddingError(err.to_string())
    }
}

// Custom conversion from anyhow::Error to VerbaError.
// Tries to downcast to preserve the original error type if possible.
impl From<anyhow::Error> for VerbaError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            VerbaError::IOError(io::Error::new(io_err.kind(), io_err.to_string()))
        } else {
            VerbaError::Other(err.to_string())
        }
    }
}
