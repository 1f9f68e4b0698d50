//! Error types for the verba embedding engine.

use thiserror::Error;

/// Result type alias for the embedding engine.
pub type Result<T> = std::result::Result<T, VerbaEmbedError>;

/// Errors that can occur while producing embeddings.
#[derive(Error, Debug)]
pub enum VerbaEmbedError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Provider-specific errors
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// HTTP transport errors (connect, timeout, body read)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the embedding API
    #[error("Embedding API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The embedding API asked us to slow down
    #[error("Rate limited by embedding API: {message}")]
    RateLimited { message: String },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Embedding generation errors
    #[error("Embedding generation failed: {message}")]
    EmbeddingGeneration { message: String },

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anyhow errors for compatibility
    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl VerbaEmbedError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an embedding generation error
    pub fn embedding_generation<S: Into<String>>(message: S) -> Self {
        Self::EmbeddingGeneration {
            message: message.into(),
        }
    }

    /// Whether a retry has any chance of succeeding.
    ///
    /// Rate limits, server-side failures and transport hiccups are
    /// transient; everything else (bad input, auth, config) is terminal.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            _ => false,
        }
    }
}
