//! Caption normalization and the transcript acquisition seam.
//!
//! The core performs no caption fetching of its own; any backend producing
//! an ordered `(text, start, duration)` list can sit behind
//! [`TranscriptSource`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{Result, VerbaError};

/// A single time-stamped caption produced by the transcript collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEntry {
    /// Caption text.
    pub text: String,
    /// Offset of the caption from the start of the video, in seconds.
    pub start: f64,
    /// How long the caption stays on screen, in seconds.
    pub duration: f64,
}

/// Source of time-stamped captions for a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the ordered caption list for `video_id`.
    ///
    /// Fails with [`VerbaError::TranscriptUnavailable`] when the backend
    /// reports no captions (disabled or missing).
    async fn fetch(&self, video_id: &str) -> Result<Vec<CaptionEntry>>;
}

/// Parses a collaborator caption list in JSON form.
///
/// Accepts the `[{"text", "start", "duration"}, ...]` shape; a JSON `null`
/// (what caption backends emit when captions are disabled) and an empty
/// list both fail with [`VerbaError::TranscriptUnavailable`].
pub fn parse_transcript_json(video_id: &str, raw: &str) -> Result<Vec<CaptionEntry>> {
    let entries: Option<Vec<CaptionEntry>> = serde_json::from_str(raw)
        .map_err(|e| VerbaError::SerializationError(format!("Invalid transcript JSON: {e}")))?;

    match entries {
        Some(entries) if !entries.is_empty() => Ok(entries),
        _ => Err(VerbaError::TranscriptUnavailable(video_id.to_string())),
    }
}

/// Transcript source reading a caption JSON file from disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the given caption file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl TranscriptSource for JsonFileSource {
    async fn fetch(&self, video_id: &str) -> Result<Vec<CaptionEntry>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        parse_transcript_json(video_id, &raw)
    }
}

/// Renders a caption list as `[MM:SS] text` lines for human inspection.
pub fn format_transcript(entries: &[CaptionEntry]) -> String {
    if entries.is_empty() {
        return "No transcript available.".to_string();
    }

    let mut formatted = String::new();
    for entry in entries {
        let minutes = (entry.start as u64) / 60;
        let seconds = (entry.start as u64) % 60;
        let _ = writeln!(formatted, "[{minutes:02}:{seconds:02}] {}", entry.text);
    }
    formatted
}
