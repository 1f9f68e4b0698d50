//! Configuration types for the verba embedding engine.

use crate::error::{Result, VerbaEmbedError};
use serde::{Deserialize, Serialize};

/// Base URL of the Gemini generative language API.
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default embedding model identifier.
pub const DEFAULT_GEMINI_EMBEDDING_MODEL: &str = "embedding-001";

/// Environment variable consulted when no API key is configured.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for a remote embedding provider.
///
/// The dimension is a deployment-time constant and must match the vector
/// store collection the embeddings are written to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmbeddingConfig {
    /// Base URL of the embedding API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Model identifier used for both document and query embeddings.
    #[serde(default = "default_model")]
    pub model: String,
    /// API key. Falls back to the `GEMINI_API_KEY` environment variable when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Expected embedding dimension.
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Maximum retry attempts for retryable failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Initial delay between retries in milliseconds. Doubles on each attempt.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_GEMINI_API_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_GEMINI_EMBEDDING_MODEL.to_string()
}

fn default_dimension() -> usize {
    crate::DEFAULT_EMBEDDING_DIMENSION
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key: None,
            dimension: default_dimension(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl EmbeddingConfig {
    /// Validates that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(VerbaEmbedError::configuration("api_url must not be empty"));
        }
        if self.model.is_empty() {
            return Err(VerbaEmbedError::configuration("model must not be empty"));
        }
        if self.dimension == 0 {
            return Err(VerbaEmbedError::configuration(
                "dimension must be greater than zero",
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(VerbaEmbedError::configuration(
                "request_timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Resolves the API key from the config or the environment.
    pub fn resolved_api_key(&self) -> Result<String> {
        match self.api_key.clone() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => std::env::var(GEMINI_API_KEY_ENV).map_err(|_| {
                VerbaEmbedError::configuration(format!(
                    "Embedding API key is not set. Provide it in the config or via {GEMINI_API_KEY_ENV}."
                ))
            }),
        }
    }
}
