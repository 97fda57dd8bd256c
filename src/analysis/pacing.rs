//! Speaking-rate estimation from timed transcript segments.

use crate::transcript::TranscriptSegment;
use serde::{Deserialize, Serialize};

/// Fewer segments than this cannot give a meaningful rate.
const MIN_SEGMENTS: usize = 10;

/// Speaking pace of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Pacing {
    Measured {
        words_per_minute: f64,
        interpretation: String,
    },
    /// Too few segments or no elapsed time.
    Unknown,
}

impl Pacing {
    /// Words per minute when measured.
    pub fn words_per_minute(&self) -> Option<f64> {
        match self {
            Pacing::Measured {
                words_per_minute, ..
            } => Some(*words_per_minute),
            Pacing::Unknown => None,
        }
    }

    pub fn interpretation(&self) -> &str {
        match self {
            Pacing::Measured { interpretation, .. } => interpretation,
            Pacing::Unknown => "Unknown",
        }
    }
}

/// Words per minute over the span up to the last segment's start time.
pub fn analyze_pacing(segments: &[TranscriptSegment]) -> Pacing {
    if segments.len() < MIN_SEGMENTS {
        return Pacing::Unknown;
    }

    let total_words: usize = segments
        .iter()
        .map(|s| s.text.split_whitespace().count())
        .sum();

    let minutes = segments
        .last()
        .map(|s| s.start_seconds / 60.0)
        .unwrap_or(0.0);

    if !minutes.is_finite() || minutes <= 0.0 {
        return Pacing::Unknown;
    }

    let wpm = (total_words as f64 / minutes).round();
    Pacing::Measured {
        words_per_minute: wpm,
        interpretation: interpret_pacing(wpm).to_string(),
    }
}

/// Pace bands.
pub fn interpret_pacing(wpm: f64) -> &'static str {
    if wpm < 160.0 {
        "Slow (Beginner-friendly)"
    } else if wpm < 200.0 {
        "Moderate (Comfortable for most learners)"
    } else {
        "Fast (For experienced learners)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(count: usize, words_each: usize, step_seconds: f64) -> Vec<TranscriptSegment> {
        (0..count)
            .map(|i| {
                TranscriptSegment::new(
                    i as f64 * step_seconds,
                    vec!["word"; words_each].join(" "),
                )
            })
            .collect()
    }

    #[test]
    fn test_too_few_segments_is_unknown() {
        assert_eq!(analyze_pacing(&segments(9, 10, 5.0)), Pacing::Unknown);
        assert_eq!(analyze_pacing(&[]), Pacing::Unknown);
    }

    #[test]
    fn test_zero_elapsed_is_unknown() {
        assert_eq!(analyze_pacing(&segments(12, 10, 0.0)), Pacing::Unknown);
    }

    #[test]
    fn test_words_per_minute() {
        // 11 segments of 15 words; last starts at 60s -> 165 wpm.
        let pacing = analyze_pacing(&segments(11, 15, 6.0));
        assert_eq!(pacing.words_per_minute(), Some(165.0));
        assert_eq!(pacing.interpretation(), "Moderate (Comfortable for most learners)");
    }

    #[test]
    fn test_bands() {
        assert_eq!(interpret_pacing(120.0), "Slow (Beginner-friendly)");
        assert_eq!(interpret_pacing(160.0), "Moderate (Comfortable for most learners)");
        assert_eq!(interpret_pacing(200.0), "Fast (For experienced learners)");
    }
}
