//! Groups caption entries into fixed-size, time-bounded text chunks.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VerbaError};
use crate::transcript::CaptionEntry;

/// A group of consecutive captions merged into one retrievable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptChunk {
    /// Space-joined text of the member captions, in order.
    pub text: String,
    /// Start of the first member caption, in seconds.
    pub start_time: f64,
    /// End of the last member caption (its start plus duration), in seconds.
    pub end_time: f64,
    /// `start_time` rendered as `H:MM:SS`.
    pub start_formatted: String,
    /// `end_time` rendered as `H:MM:SS`.
    pub end_formatted: String,
}

/// Renders integer-truncated seconds as `H:MM:SS`.
///
/// Hours are unpadded, minutes and seconds zero-padded: 125 seconds is
/// `0:02:05`, 3725 seconds is `1:02:05`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Partitions `entries` into consecutive groups of `chunk_size` captions
/// and merges each group into a [`TranscriptChunk`].
///
/// The final group may hold fewer than `chunk_size` entries; it is never
/// dropped. Empty input yields an empty chunk sequence. A `chunk_size` of
/// zero is a caller contract violation.
pub fn chunk_entries(entries: &[CaptionEntry], chunk_size: usize) -> Result<Vec<TranscriptChunk>> {
    if chunk_size == 0 {
        return Err(VerbaError::InvalidParameter(
            "chunk_size must be greater than zero".to_string(),
        ));
    }

    let chunks = entries
        .chunks(chunk_size)
        .map(|group| {
            let first = &group[0];
            let last = &group[group.len() - 1];
            let start_time = first.start;
            let end_time = last.start + last.duration;

            TranscriptChunk {
                text: group
                    .iter()
                    .map(|e| e.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                start_time,
                end_time,
                start_formatted: format_timestamp(start_time),
                end_formatted: format_timestamp(end_time),
            }
        })
        .collect();

    Ok(chunks)
}
