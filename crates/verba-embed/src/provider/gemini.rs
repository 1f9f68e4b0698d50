//! Embedding provider backed by the Gemini `embedContent` REST API.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::EmbeddingConfig;
use crate::error::{Result, VerbaEmbedError};
use crate::provider::{EmbeddingIntent, EmbeddingProvider};

/// Request body for the `embedContent` endpoint.
#[derive(Debug, Clone, Serialize)]
struct EmbedContentRequest<'a> {
    /// Fully qualified model name, e.g. `models/embedding-001`.
    model: &'a str,

    /// The content to embed.
    content: Content<'a>,

    /// Retrieval task type, distinguishing documents from queries.
    #[serde(rename = "taskType")]
    task_type: &'static str,
}

/// The content of an embedding request.
#[derive(Debug, Clone, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

/// A single text part.
#[derive(Debug, Clone, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response body of the `embedContent` endpoint.
#[derive(Debug, Deserialize)]
struct EmbedContentResponse {
    embedding: Option<ContentEmbedding>,
}

/// The embedding vector carried by a response.
#[derive(Debug, Deserialize)]
struct ContentEmbedding {
    #[serde(default)]
    values: Vec<f32>,
}

/// Gemini embedding provider.
///
/// One model serves both intents; the `taskType` field tells the backend
/// which side of the retrieval the text sits on. Retryable failures (429,
/// 5xx, transport) are retried with exponential backoff up to the
/// configured attempt count; everything else surfaces immediately.
#[derive(Debug, Clone)]
pub struct GeminiEmbeddingProvider {
    /// HTTP client for API requests
    client: ReqwestClient,

    /// Provider configuration
    config: EmbeddingConfig,

    /// API key for Gemini
    api_key: String,
}

impl GeminiEmbeddingProvider {
    /// Create a new provider from the given configuration.
    ///
    /// The API key is taken from the config, falling back to the
    /// `GEMINI_API_KEY` environment variable.
    pub fn new(config: EmbeddingConfig) -> Result<Self> {
        config.validate()?;
        let api_key = config.resolved_api_key()?;

        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                VerbaEmbedError::configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the API URL for the `embedContent` endpoint.
    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:embedContent?key={}",
            self.config.api_url.trim_end_matches('/'),
            self.config.model,
            self.api_key
        )
    }

    /// One request/response round trip, no retries.
    async fn embed_once(&self, text: &str, intent: EmbeddingIntent) -> Result<Vec<f32>> {
        let model_path = format!("models/{}", self.config.model);
        let request = EmbedContentRequest {
            model: &model_path,
            content: Content {
                parts: vec![Part { text }],
            },
            task_type: intent.as_task_type(),
        };

        let response = self
            .client
            .post(self.build_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(VerbaEmbedError::RateLimited { message });
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(VerbaEmbedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: EmbedContentResponse = response.json().await?;
        let values = parsed.embedding.map(|e| e.values).unwrap_or_default();
        if values.is_empty() {
            return Err(VerbaEmbedError::embedding_generation(
                "backend returned an empty embedding",
            ));
        }
        if values.len() != self.config.dimension {
            return Err(VerbaEmbedError::DimensionMismatch {
                expected: self.config.dimension,
                actual: values.len(),
            });
        }
        Ok(values)
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    fn dimension(&self) -> usize {
        self.config.dimension
    }

    async fn embed(&self, text: &str, intent: EmbeddingIntent) -> Result<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(VerbaEmbedError::invalid_input("cannot embed empty text"));
        }

        let mut delay = Duration::from_millis(self.config.retry_delay_ms);
        let mut attempt = 0u32;
        loop {
            match self.embed_once(text, intent).await {
                Ok(values) => {
                    debug!(
                        "Generated {}-dimension {:?} embedding for {} chars of text",
                        values.len(),
                        intent,
                        text.len()
                    );
                    return Ok(values);
                }
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(
                        "Embedding request failed (attempt {attempt}/{}): {e}. Retrying in {delay:?}",
                        self.config.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
