//! Viewer comment sentiment.
//!
//! Counts comments that say the video was clear against comments that say
//! it was confusing. English and Hinglish phrasings are both recognized.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comments fetched per video for a comparison.
pub const MAX_COMMENTS: usize = 50;

const SAMPLE_SIZE: usize = 3;

const UNDERSTANDING_KEYWORDS: &[&str] = &[
    "thanks",
    "thank you",
    "helpful",
    "understood",
    "clear",
    "explained well",
    "good explanation",
    "easy to understand",
    "samajh aa gaya",
    "achha hai",
    "bahut badhiya",
    "shukriya",
];

const CONFUSION_KEYWORDS: &[&str] = &[
    "confusing",
    "not clear",
    "difficult",
    "hard to understand",
    "did not understand",
    "can you explain",
    "samajh nahi aaya",
    "mujhe samajh nahi aaya",
    "confuse",
    "complicated",
];

/// Source of a video's top-level viewer comments.
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Up to `max` comments, most relevant first.
    async fn fetch_comments(&self, video_id: &str, max: usize) -> Result<Vec<String>>;
}

/// Overall tone of a video's comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentSentiment {
    Positive,
    Confusing,
    Mixed,
    NoComments,
}

impl fmt::Display for CommentSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommentSentiment::Positive => "Positive",
            CommentSentiment::Confusing => "Confusing",
            CommentSentiment::Mixed => "Mixed",
            CommentSentiment::NoComments => "No comments",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAnalysis {
    pub total_comments: usize,
    /// Percent of comments with an understanding phrase, one decimal.
    pub understanding_score: f64,
    /// Percent of comments with a confusion phrase, one decimal.
    pub confusion_score: f64,
    pub sentiment: CommentSentiment,
    pub sample_comments: Vec<String>,
}

/// Score comments for understanding and confusion.
///
/// Each comment counts at most once per side, and may count on both.
pub fn analyze_comments(comments: &[String]) -> CommentAnalysis {
    if comments.is_empty() {
        return CommentAnalysis {
            total_comments: 0,
            understanding_score: 0.0,
            confusion_score: 0.0,
            sentiment: CommentSentiment::NoComments,
            sample_comments: Vec::new(),
        };
    }

    let mut understanding = 0usize;
    let mut confusion = 0usize;
    for comment in comments {
        let lower = comment.to_lowercase();
        if UNDERSTANDING_KEYWORDS.iter().any(|k| lower.contains(k)) {
            understanding += 1;
        }
        if CONFUSION_KEYWORDS.iter().any(|k| lower.contains(k)) {
            confusion += 1;
        }
    }

    let total = comments.len();
    let sentiment = match understanding.cmp(&confusion) {
        std::cmp::Ordering::Greater => CommentSentiment::Positive,
        std::cmp::Ordering::Less => CommentSentiment::Confusing,
        std::cmp::Ordering::Equal => CommentSentiment::Mixed,
    };

    CommentAnalysis {
        total_comments: total,
        understanding_score: percent(understanding, total),
        confusion_score: percent(confusion, total),
        sentiment,
        sample_comments: comments.iter().take(SAMPLE_SIZE).cloned().collect(),
    }
}

fn percent(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}
