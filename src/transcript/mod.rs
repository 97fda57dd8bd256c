//! Transcript and catalog collaborators.
//!
//! The crate does not fetch transcripts itself; callers plug in a
//! [`TranscriptSource`] and a [`CatalogSource`]. A JSON bundle file
//! implementation is provided for the CLI and for tests.

mod bundle;
mod video_id;

pub use bundle::{BundleLibrary, VideoBundle};
pub use video_id::{extract_video_id, resolve_video_id};

use crate::error::{Result, TutorError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single timed line of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Start time in seconds.
    #[serde(alias = "start")]
    pub start_seconds: f64,
}

impl TranscriptSegment {
    pub fn new(start_seconds: f64, text: String) -> Self {
        Self {
            text,
            start_seconds,
        }
    }
}

/// Join segment texts with single spaces.
pub fn full_text(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Total whitespace-separated words across segments.
pub fn word_count(segments: &[TranscriptSegment]) -> usize {
    segments
        .iter()
        .map(|s| s.text.split_whitespace().count())
        .sum()
}

/// One language track offered by a transcript source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTrack {
    pub language_code: String,
    /// Auto-generated captions rather than a manually created track.
    #[serde(default)]
    pub generated: bool,
    pub segments: Vec<TranscriptSegment>,
}

/// Choose a track: preferred language, else secondary, else the first
/// manually created track, else the first generated one.
pub fn select_track<'a>(
    tracks: &'a [TranscriptTrack],
    preferred: &str,
    secondary: &str,
) -> Option<&'a TranscriptTrack> {
    let by_language = |code: &str| {
        tracks
            .iter()
            .find(|t| t.language_code.eq_ignore_ascii_case(code))
    };

    by_language(preferred)
        .or_else(|| by_language(secondary))
        .or_else(|| tracks.iter().find(|t| !t.generated))
        .or_else(|| tracks.first())
}

/// Catalog facts about a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Duration in seconds, when the catalog knows it.
    #[serde(default)]
    pub duration_seconds: Option<u32>,
}

impl VideoMetadata {
    /// Duration in minutes, if known.
    pub fn duration_minutes(&self) -> Option<f64> {
        self.duration_seconds.map(|s| s as f64 / 60.0)
    }
}

/// Supplies transcript tracks for a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// All available tracks for a video.
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<TranscriptTrack>>;

    /// Fetch the segments of the track chosen by the language policy.
    async fn fetch_transcript(
        &self,
        video_id: &str,
        preferred: &str,
        secondary: &str,
    ) -> Result<Vec<TranscriptSegment>> {
        let tracks = self.list_tracks(video_id).await?;
        select_track(&tracks, preferred, secondary)
            .map(|t| t.segments.clone())
            .ok_or_else(|| TutorError::Transcript(format!("No transcript tracks for {}", video_id)))
    }
}

/// Supplies title, description and duration for a video.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(code: &str, generated: bool) -> TranscriptTrack {
        TranscriptTrack {
            language_code: code.to_string(),
            generated,
            segments: vec![TranscriptSegment::new(0.0, code.to_string())],
        }
    }

    #[test]
    fn test_select_preferred_then_secondary() {
        let tracks = vec![track("de", false), track("hi", true), track("en", true)];
        assert_eq!(select_track(&tracks, "en", "hi").unwrap().language_code, "en");

        let tracks = vec![track("de", false), track("hi", true)];
        assert_eq!(select_track(&tracks, "en", "hi").unwrap().language_code, "hi");
    }

    #[test]
    fn test_select_falls_back_to_manual_then_first() {
        let tracks = vec![track("fr", true), track("de", false)];
        assert_eq!(select_track(&tracks, "en", "hi").unwrap().language_code, "de");

        let tracks = vec![track("fr", true), track("es", true)];
        assert_eq!(select_track(&tracks, "en", "hi").unwrap().language_code, "fr");

        assert!(select_track(&[], "en", "hi").is_none());
    }

    #[test]
    fn test_full_text_and_word_count() {
        let segments = vec![
            TranscriptSegment::new(0.0, "hello there".to_string()),
            TranscriptSegment::new(2.0, "general  kenobi".to_string()),
        ];
        assert_eq!(full_text(&segments), "hello there general  kenobi");
        assert_eq!(word_count(&segments), 4);
    }

    #[test]
    fn test_segment_accepts_start_alias() {
        let seg: TranscriptSegment =
            serde_json::from_str(r#"{"text": "hi", "start": 1.5}"#).unwrap();
        assert_eq!(seg.start_seconds, 1.5);
    }
}
