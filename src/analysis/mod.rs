//! Transcript difficulty analysis.
//!
//! The analyzer stack runs language detection, readability, jargon density
//! and pacing, then hands the results to the skill classifier. Every step
//! degrades to a neutral result instead of failing.

mod jargon;
mod language;
mod pacing;
mod readability;
mod skill;

pub use jargon::{interpret_jargon, JargonAnalysis, JargonAnalyzer};
pub use language::{detect_language, Language};
pub use pacing::{analyze_pacing, interpret_pacing, Pacing};
pub use readability::{calculate_readability, interpret_readability, Readability, NEUTRAL_READABILITY};
pub use skill::{
    EnglishRubric, HindiRubric, RubricInput, SkillAssessment, SkillClassifier, SkillLevel,
    SkillRubric,
};

use crate::config::AnalysisSettings;
use crate::transcript::{full_text, TranscriptSegment};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the analyzer stack reports for one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub language: Language,
    pub readability: Readability,
    pub jargon: JargonAnalysis,
    pub pacing: Pacing,
    pub skill_level: SkillLevel,
    pub level_score: u32,
    pub level_explanation: String,
}

/// Runs the full analyzer stack.
#[derive(Debug, Clone, Default)]
pub struct TranscriptAnalyzer {
    jargon: JargonAnalyzer,
    classifier: SkillClassifier,
}

impl TranscriptAnalyzer {
    /// Analyzer with default dictionaries and rubrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer configured from settings.
    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self {
            jargon: JargonAnalyzer::with_extra_terms(&settings.extra_technical_terms),
            classifier: SkillClassifier::new(settings.english.clone(), settings.hindi.clone()),
        }
    }

    /// Analyze timed segments.
    pub fn analyze_segments(&self, segments: &[TranscriptSegment]) -> AnalysisResult {
        let text = full_text(segments);
        self.analyze(&text, segments)
    }

    /// Analyze the joined transcript text alongside its segments.
    pub fn analyze(&self, text: &str, segments: &[TranscriptSegment]) -> AnalysisResult {
        let language = detect_language(text);
        let readability = calculate_readability(text, language);
        let jargon = self.jargon.analyze(text, language);
        let pacing = analyze_pacing(segments);

        let assessment = self.classifier.classify(
            language,
            RubricInput {
                readability: &readability,
                jargon: &jargon,
                pacing: &pacing,
            },
        );

        debug!(
            language = %language,
            score = assessment.score,
            level = %assessment.level,
            "Transcript analyzed"
        );

        AnalysisResult {
            language,
            readability,
            jargon,
            pacing,
            skill_level: assessment.level,
            level_score: assessment.score,
            level_explanation: assessment.explanation,
        }
    }
}
