//! Fixed word-window chunking.

use super::{Chunk, TimeRange};
use crate::config::ChunkingSettings;
use tracing::debug;

/// Duration assumed when the catalog reports none.
pub const FALLBACK_DURATION_MINUTES: f64 = 60.0;

/// Splits whitespace-separated words into consecutive windows.
#[derive(Debug, Clone)]
pub struct WordWindowChunker {
    words_per_chunk: usize,
    padding_seconds: u32,
    min_text_chars: usize,
}

impl WordWindowChunker {
    pub fn new(words_per_chunk: usize, padding_seconds: u32, min_text_chars: usize) -> Self {
        Self {
            words_per_chunk: words_per_chunk.max(1),
            padding_seconds,
            min_text_chars,
        }
    }

    pub fn from_settings(settings: &ChunkingSettings) -> Self {
        Self::new(
            settings.words_per_chunk,
            settings.range_padding_seconds,
            settings.min_text_chars,
        )
    }

    /// Chunk `text`. Text shorter than the minimum (after trimming) yields
    /// no chunks; the last window may be shorter than the others.
    pub fn chunk(&self, text: &str, duration_minutes: f64) -> Vec<Chunk> {
        let trimmed = text.trim();
        if trimmed.chars().count() < self.min_text_chars {
            debug!("Transcript too short to chunk ({} chars)", trimmed.chars().count());
            return Vec::new();
        }

        let words: Vec<&str> = trimmed.split_whitespace().collect();
        let total_words = words.len();

        let chunks: Vec<Chunk> = words
            .chunks(self.words_per_chunk)
            .enumerate()
            .map(|(index, window)| Chunk {
                text: window.join(" "),
                time_range: estimate_time_range(
                    index * self.words_per_chunk,
                    total_words,
                    duration_minutes,
                    self.padding_seconds,
                ),
                word_count: window.len(),
                sequence_index: index,
            })
            .collect();

        debug!("Split {} words into {} chunks", total_words, chunks.len());
        chunks
    }
}

impl Default for WordWindowChunker {
    fn default() -> Self {
        Self::from_settings(&ChunkingSettings::default())
    }
}

/// Estimate where a window starting at `start_word` sits in the video:
/// its proportional position, padded on both sides and clamped to the video.
pub fn estimate_time_range(
    start_word: usize,
    total_words: usize,
    duration_minutes: f64,
    padding_seconds: u32,
) -> TimeRange {
    let minutes = if duration_minutes.is_finite() && duration_minutes > 0.0 {
        duration_minutes
    } else {
        FALLBACK_DURATION_MINUTES
    };
    let duration = (minutes * 60.0).round() as u32;

    let center = if total_words == 0 {
        0
    } else {
        (start_word as f64 / total_words as f64 * duration as f64).floor() as u32
    };

    TimeRange::new(
        center.saturating_sub(padding_seconds),
        center.saturating_add(padding_seconds).min(duration),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_chunk_count_and_sizes() {
        let chunker = WordWindowChunker::default();
        let chunks = chunker.chunk(&words(250), 10.0);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].word_count, 100);
        assert_eq!(chunks[2].word_count, 50);
        assert_eq!(
            chunks.iter().map(|c| c.sequence_index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_chunks_reproduce_word_stream() {
        let text = "  alpha beta\n gamma\tdelta ".repeat(60);
        let chunks = WordWindowChunker::default().chunk(&text, 5.0);

        let rejoined: Vec<&str> = chunks.iter().flat_map(|c| c.text.split(' ')).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_short_text_yields_nothing() {
        let chunker = WordWindowChunker::default();
        assert!(chunker.chunk("too short to index", 10.0).is_empty());
        assert!(chunker.chunk(&format!("   {}   ", "x".repeat(49)), 10.0).is_empty());
        assert_eq!(chunker.chunk(&"x".repeat(50), 10.0).len(), 1);
    }

    #[test]
    fn test_time_ranges() {
        // 10 minutes, 200 words: second window starts halfway through.
        assert_eq!(estimate_time_range(0, 200, 10.0, 22), TimeRange::new(0, 22));
        assert_eq!(estimate_time_range(100, 200, 10.0, 22), TimeRange::new(278, 322));
        // Clamped to the video's end.
        assert_eq!(estimate_time_range(199, 200, 1.0, 22), TimeRange::new(37, 60));
    }

    #[test]
    fn test_missing_duration_falls_back() {
        assert_eq!(estimate_time_range(50, 100, 0.0, 22), TimeRange::new(1778, 1822));
        assert_eq!(estimate_time_range(50, 100, -3.0, 22), TimeRange::new(1778, 1822));
        assert_eq!(estimate_time_range(50, 100, f64::NAN, 22), TimeRange::new(1778, 1822));
    }

    #[test]
    fn test_ranges_stay_inside_video() {
        let chunks = WordWindowChunker::default().chunk(&words(1000), 3.0);
        for chunk in &chunks {
            assert!(chunk.time_range.start_seconds <= chunk.time_range.end_seconds);
            assert!(chunk.time_range.end_seconds <= 180);
        }
    }
}
