//! Transcript chunking for the per-video similarity index.
//!
//! Transcripts are cut into fixed word windows. Captions carry no reliable
//! per-word timing, so each chunk's position in the video is estimated from
//! its word offset.

mod window;

pub use window::{estimate_time_range, WordWindowChunker, FALLBACK_DURATION_MINUTES};

use serde::{Deserialize, Serialize};
use std::fmt;

/// An approximate span of a video, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_seconds: u32,
    pub end_seconds: u32,
}

impl TimeRange {
    pub fn new(start_seconds: u32, end_seconds: u32) -> Self {
        Self {
            start_seconds,
            end_seconds,
        }
    }
}

/// Formats as `MM:SS-MM:SS`; minutes are not wrapped into hours.
impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_seconds / 60,
            self.start_seconds % 60,
            self.end_seconds / 60,
            self.end_seconds % 60
        )
    }
}

/// A window of transcript words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Words of this window joined by single spaces.
    pub text: String,
    /// Estimated position in the video.
    pub time_range: TimeRange,
    pub word_count: usize,
    /// Order of this chunk in the transcript, from zero.
    pub sequence_index: usize,
}

impl Chunk {
    /// First `max_chars` characters of the text.
    pub fn excerpt(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}

/// Chunk a transcript with the given settings.
pub fn chunk_transcript(
    text: &str,
    duration_minutes: f64,
    settings: &crate::config::ChunkingSettings,
) -> Vec<Chunk> {
    WordWindowChunker::from_settings(settings).chunk(text, duration_minutes)
}
