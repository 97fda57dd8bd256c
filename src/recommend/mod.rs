//! Ranking videos against a learner's target level.

mod comparison;
mod explain;
mod learning_path;
mod scorer;

pub use comparison::{compare, Candidate, Comparison, ComparisonEntry, FailedVideo};
pub use explain::explain_recommendation;
pub use learning_path::{
    detect_subject, learning_path, ContentDepth, ContentProfile, ContentStyle,
};
pub use scorer::{
    content_score, level_match_score, pacing_score, recommendation_score, ScoreInputs,
    DEFAULT_JARGON, DEFAULT_WPM,
};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::analysis::{AnalysisResult, JargonAnalysis, Language, Pacing, Readability, SkillLevel};

    pub fn analysis(
        level: SkillLevel,
        readability: Readability,
        jargon: f64,
        pacing: Pacing,
    ) -> AnalysisResult {
        AnalysisResult {
            language: Language::English,
            readability,
            jargon: JargonAnalysis {
                technical_count: 0,
                total_words: 100,
                percentage: jargon,
                interpretation: String::new(),
            },
            pacing,
            skill_level: level,
            level_score: 0,
            level_explanation: String::new(),
        }
    }

    pub fn scored(normalized: f64) -> Readability {
        Readability::Scored {
            flesch_score: normalized,
            fk_grade: 6.0,
            normalized,
            interpretation: String::new(),
        }
    }

    pub fn measured(wpm: f64) -> Pacing {
        Pacing::Measured {
            words_per_minute: wpm,
            interpretation: String::new(),
        }
    }
}
