use serde::{Deserialize, Serialize};

/// Represents a single time-anchored passage returned by a transcript search.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResult {
    /// Identifier of the video the passage belongs to.
    pub video_id: String,
    /// Stable identifier of the matching chunk (`<video_id>_chunk_<ordinal>`).
    pub chunk_id: String,
    /// Text of the matching chunk.
    pub text: String,
    /// Start of the chunk, in seconds.
    pub start_time: f64,
    /// End of the chunk, in seconds.
    pub end_time: f64,
    /// `start_time` rendered as `H:MM:SS`.
    pub start_formatted: String,
    /// `end_time` rendered as `H:MM:SS`.
    pub end_formatted: String,
    /// Cosine similarity score reported by the vector store (higher is more relevant).
    pub score: f32,
}
