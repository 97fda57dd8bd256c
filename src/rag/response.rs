//! Answer tiers and their presentation.

use super::format::clean_formatting;
use crate::chunking::TimeRange;
use crate::config::RagSettings;
use crate::vector_store::SearchResult;
use serde::{Deserialize, Serialize};

/// How much the answer can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Which tier produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    /// Written by the language model from retrieved excerpts.
    Generated,
    /// The best retrieved excerpt, quoted.
    Extractive,
    /// Nothing relevant was retrieved.
    None,
}

/// Result of the generation step, when it ran.
#[derive(Debug, Clone)]
pub enum Generation {
    Answered(String),
    Failed(String),
}

/// A question's answer with the video sections it draws on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaResponse {
    pub answer: String,
    pub cited_time_ranges: Vec<TimeRange>,
    pub confidence: Confidence,
    pub source: AnswerSource,
}

impl QaResponse {
    /// Format the response for display.
    pub fn format_for_display(&self) -> String {
        let mut lines = vec![
            "🤖 **AI Tutor Answer**".to_string(),
            String::new(),
            self.answer.clone(),
            String::new(),
        ];

        if !self.cited_time_ranges.is_empty() {
            let sections = self
                .cited_time_ranges
                .iter()
                .map(TimeRange::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("📍 **Video sections:** {}", sections));
        }

        lines.push(String::new());
        lines.push("💡 *Powered by video transcript analysis*".to_string());
        lines.join("\n")
    }
}

/// Pick the answer tier from what was retrieved and how generation went.
///
/// No retrieved chunks always gives the no-match answer. A failed or blank
/// generation falls back to quoting the best chunk.
pub fn synthesize(
    question: &str,
    video_title: &str,
    retrieved: &[SearchResult],
    generation: Option<Generation>,
    settings: &RagSettings,
) -> QaResponse {
    let Some(best) = retrieved.first() else {
        return no_match(question, video_title);
    };

    match generation {
        Some(Generation::Answered(text)) if !text.trim().is_empty() => QaResponse {
            answer: clean_formatting(&text),
            cited_time_ranges: retrieved
                .iter()
                .take(settings.cited_ranges)
                .map(|r| r.chunk.time_range)
                .collect(),
            confidence: Confidence::High,
            source: AnswerSource::Generated,
        },
        _ => QaResponse {
            answer: format!(
                "Based on the video '{}':\n\n{}...\n\nThis content appears {} in the video.",
                video_title,
                best.chunk.excerpt(settings.extractive_chars),
                best.chunk.time_range
            ),
            cited_time_ranges: vec![best.chunk.time_range],
            confidence: Confidence::Medium,
            source: AnswerSource::Extractive,
        },
    }
}

fn no_match(question: &str, video_title: &str) -> QaResponse {
    QaResponse {
        answer: format!(
            "I searched the transcript of '{}' but couldn't find specific information about '{}'. \
             Try asking about general concepts covered in the video.",
            video_title, question
        ),
        cited_time_ranges: Vec::new(),
        confidence: Confidence::Low,
        source: AnswerSource::None,
    }
}
