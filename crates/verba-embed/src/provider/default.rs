//! Default embedding provider for testing and fallback scenarios.

use crate::error::{Result, VerbaEmbedError};
use crate::provider::{EmbeddingIntent, EmbeddingProvider};
use async_trait::async_trait;
use std::fmt::Debug;

/// A simple default embedding provider that generates deterministic embeddings.
/// This is used when no real backend is available (e.g., in tests or offline runs).
///
/// The intent parameter is accepted for interface parity but does not change
/// the projection: the same text always maps to the same vector, so a chunk
/// queried with its own text scores maximal similarity.
#[derive(Debug, Clone)]
pub struct DefaultEmbeddingProvider {
    dimension: usize,
}

impl DefaultEmbeddingProvider {
    /// Create a new default embedding provider with the specified dimension.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Create a default provider with the standard dimension.
    pub fn new_standard() -> Self {
        Self::new(crate::DEFAULT_EMBEDDING_DIMENSION)
    }
}

#[async_trait]
impl EmbeddingProvider for DefaultEmbeddingProvider {
    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str, _intent: EmbeddingIntent) -> Result<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(VerbaEmbedError::invalid_input("cannot embed empty text"));
        }

        // Generate a deterministic embedding: seed an xorshift generator
        // with an FNV-1a hash of the text, draw one value per dimension.
        // Distinct texts land in distinct directions, identical texts map to
        // identical vectors, so exact-text queries score maximal similarity.
        let mut state = text
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| {
                (acc ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
            });
        if state == 0 {
            state = 0x9e37_79b9_7f4a_7c15;
        }

        let mut embedding = Vec::with_capacity(self.dimension);
        for _ in 0..self.dimension {
            state ^= state >> 12;
            state ^= state << 25;
            state ^= state >> 27;
            let draw = state.wrapping_mul(0x2545_f491_4f6c_dd1d);
            let unit = (draw >> 11) as f32 / (1u64 << 53) as f32;
            embedding.push(unit * 2.0 - 1.0);
        }

        // Normalize the embedding
        let norm = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for val in embedding.iter_mut() {
                *val /= norm;
            }
        }

        Ok(embedding)
    }
}
