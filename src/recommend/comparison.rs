//! Ranking several analyzed videos against one target level.

use super::scorer::recommendation_score;
use crate::analysis::{AnalysisResult, SkillLevel};
use crate::comments::CommentAnalysis;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An analyzed video offered for comparison.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub video_id: String,
    pub title: String,
    pub analysis: AnalysisResult,
    /// Transcript word count.
    pub word_count: usize,
    /// Viewer comment sentiment, when comments could be fetched.
    pub comments: Option<CommentAnalysis>,
}

/// A scored, ranked video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub video_id: String,
    pub title: String,
    pub analysis: AnalysisResult,
    pub recommendation_score: f64,
    /// 1-based position after sorting.
    pub rank: usize,
    pub word_count: usize,
    #[serde(default)]
    pub comments: Option<CommentAnalysis>,
}

/// A video that could not be analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedVideo {
    pub video_id: String,
    pub reason: String,
}

/// Entries sorted best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub target: SkillLevel,
    pub entries: Vec<ComparisonEntry>,
    #[serde(default)]
    pub failed: Vec<FailedVideo>,
}

impl Comparison {
    /// The highest-scoring entry.
    pub fn recommended(&self) -> Option<&ComparisonEntry> {
        self.entries.first()
    }

    /// The best entry at the target level, or failing that the entry whose
    /// level is closest to it. Ties go to the higher score.
    pub fn best_for_level(&self) -> Option<&ComparisonEntry> {
        self.entries
            .iter()
            .find(|e| e.analysis.skill_level == self.target)
            .or_else(|| {
                self.entries
                    .iter()
                    .min_by_key(|e| e.analysis.skill_level.distance(self.target))
            })
    }

    pub fn with_failures(mut self, failed: Vec<FailedVideo>) -> Self {
        self.failed = failed;
        self
    }
}

/// Score every candidate and sort descending. Equal scores keep input order.
pub fn compare(candidates: Vec<Candidate>, target: SkillLevel) -> Comparison {
    let mut entries: Vec<ComparisonEntry> = candidates
        .into_iter()
        .map(|c| ComparisonEntry {
            recommendation_score: recommendation_score(&c.analysis, target),
            video_id: c.video_id,
            title: c.title,
            analysis: c.analysis,
            rank: 0,
            word_count: c.word_count,
            comments: c.comments,
        })
        .collect();

    entries.sort_by(|a, b| b.recommendation_score.total_cmp(&a.recommendation_score));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    debug!(
        target = %target,
        count = entries.len(),
        top = ?entries.first().map(|e| e.recommendation_score),
        "Compared videos"
    );

    Comparison {
        target,
        entries,
        failed: Vec::new(),
    }
}
