//! Chapter structure from free-text video descriptions.

mod extractor;
mod summary;

pub use extractor::{is_generic_topic, ChapterExtractor};
pub use summary::{generate_learning_summary, LearningSummary, SummaryKind};

use serde::{Deserialize, Serialize};

/// A timestamped section named in a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Timestamp as written, e.g. `02:15` or `1:02:15`.
    pub time_label: String,
    pub topic: String,
    /// The trimmed description line the chapter came from.
    pub source_line: String,
}

/// Extract chapters with a default extractor.
pub fn extract_chapters(description: &str) -> Vec<Chapter> {
    ChapterExtractor::new().extract(description)
}
