//! Shared constants for payload field names and pipeline defaults.

/// Payload field holding the source video identifier.
pub const FIELD_VIDEO_ID: &str = "video_id";
/// Payload field holding the stable chunk identifier (`<video_id>_chunk_<ordinal>`).
pub const FIELD_CHUNK_ID: &str = "chunk_id";
/// Payload field holding the chunk's zero-based position within its video.
pub const FIELD_CHUNK_ORDINAL: &str = "chunk_ordinal";
/// Payload field holding the chunk text.
pub const FIELD_TEXT: &str = "text";
/// Payload field holding the chunk start, in seconds.
pub const FIELD_START_TIME: &str = "start_time";
/// Payload field holding the chunk end, in seconds.
pub const FIELD_END_TIME: &str = "end_time";
/// Payload field holding the chunk start rendered as `H:MM:SS`.
pub const FIELD_START_FORMATTED: &str = "start_formatted";
/// Payload field holding the chunk end rendered as `H:MM:SS`.
pub const FIELD_END_FORMATTED: &str = "end_formatted";

/// Default Qdrant collection holding every indexed video.
pub const DEFAULT_COLLECTION_NAME: &str = "video-search";
/// Default number of consecutive captions merged into one chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 3;
