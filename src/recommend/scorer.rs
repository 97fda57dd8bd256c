//! Recommendation score for one analyzed video against a target level.

use crate::analysis::{AnalysisResult, SkillLevel, NEUTRAL_READABILITY};

/// Jargon percentage assumed when none was measured.
pub const DEFAULT_JARGON: f64 = 0.0;

/// Speaking rate assumed when pacing is unknown.
pub const DEFAULT_WPM: f64 = 150.0;

/// Speaking rates scored as ideal.
const IDEAL_WPM_MIN: f64 = 120.0;
const IDEAL_WPM_MAX: f64 = 160.0;

/// Score just outside the ideal pacing band.
const NEAR_IDEAL_PACING: f64 = 80.0;

const LEVEL_WEIGHT: f64 = 0.7;
const CONTENT_WEIGHT: f64 = 0.3;

/// How closely a video's level matches the target: 100 for the same band,
/// 70 for a neighbour, 30 otherwise.
pub fn level_match_score(level: SkillLevel, target: SkillLevel) -> f64 {
    match level.distance(target) {
        0 => 100.0,
        1 => 70.0,
        _ => 30.0,
    }
}

/// 100 inside 120..=160 wpm; outside, 80 minus the distance to the band,
/// floored at zero.
pub fn pacing_score(wpm: f64) -> f64 {
    let score = if (IDEAL_WPM_MIN..=IDEAL_WPM_MAX).contains(&wpm) {
        100.0
    } else if wpm < IDEAL_WPM_MIN {
        NEAR_IDEAL_PACING - (IDEAL_WPM_MIN - wpm)
    } else {
        NEAR_IDEAL_PACING - (wpm - IDEAL_WPM_MAX)
    };
    score.clamp(0.0, 100.0)
}

/// Blend of readability, lack of jargon and pacing.
pub fn content_score(readability: f64, jargon_percentage: f64, wpm: f64) -> f64 {
    readability * 0.5 + (100.0 - (jargon_percentage * 10.0).min(100.0)) * 0.3 + pacing_score(wpm) * 0.2
}

/// Metric values fed to the scorer, with neutral stand-ins for anything
/// unmeasured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub readability: f64,
    pub jargon_percentage: f64,
    pub words_per_minute: f64,
}

impl ScoreInputs {
    pub fn from_analysis(analysis: &AnalysisResult) -> Self {
        let readability = analysis
            .readability
            .measured()
            .filter(|r| r.is_finite())
            .unwrap_or(NEUTRAL_READABILITY);

        let jargon_percentage = Some(analysis.jargon.percentage)
            .filter(|j| j.is_finite())
            .unwrap_or(DEFAULT_JARGON);

        let words_per_minute = analysis
            .pacing
            .words_per_minute()
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(DEFAULT_WPM);

        Self {
            readability,
            jargon_percentage,
            words_per_minute,
        }
    }
}

/// Overall score in 0..=100, one decimal: 70% level match, 30% content.
pub fn recommendation_score(analysis: &AnalysisResult, target: SkillLevel) -> f64 {
    let inputs = ScoreInputs::from_analysis(analysis);
    let content = content_score(
        inputs.readability,
        inputs.jargon_percentage,
        inputs.words_per_minute,
    );
    let overall = level_match_score(analysis.skill_level, target) * LEVEL_WEIGHT
        + content * CONTENT_WEIGHT;
    (overall.clamp(0.0, 100.0) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Pacing, Readability};
    use crate::recommend::test_support::{analysis, measured, scored};

    #[test]
    fn test_level_match() {
        use SkillLevel::*;
        assert_eq!(level_match_score(Beginner, Beginner), 100.0);
        assert_eq!(level_match_score(Intermediate, Beginner), 70.0);
        assert_eq!(level_match_score(Advanced, Beginner), 30.0);
    }

    #[test]
    fn test_pacing_score_peaks_in_band() {
        assert_eq!(pacing_score(120.0), 100.0);
        assert_eq!(pacing_score(160.0), 100.0);
        assert_eq!(pacing_score(119.0), 79.0);
        assert_eq!(pacing_score(170.0), 70.0);
        assert_eq!(pacing_score(300.0), 0.0);
        assert_eq!(pacing_score(0.0), 0.0);
        for wpm in [0.0, 60.0, 110.0, 119.9, 160.1, 200.0, 400.0] {
            assert!(pacing_score(wpm) < 100.0);
        }
    }

    #[test]
    fn test_perfect_match_example() {
        let result = analysis(SkillLevel::Beginner, scored(80.0), 5.0, measured(140.0));
        // content = 40 + 15 + 20 = 75; overall = 70 + 22.5
        assert_eq!(recommendation_score(&result, SkillLevel::Beginner), 92.5);
    }

    #[test]
    fn test_missing_metrics_use_defaults() {
        let result = analysis(
            SkillLevel::Advanced,
            Readability::InsufficientData,
            f64::NAN,
            Pacing::Unknown,
        );
        let inputs = ScoreInputs::from_analysis(&result);
        assert_eq!(inputs.readability, 50.0);
        assert_eq!(inputs.jargon_percentage, 0.0);
        assert_eq!(inputs.words_per_minute, 150.0);

        // content = 25 + 30 + 20 = 75; overall = 30*0.7 + 22.5 = 43.5
        assert_eq!(recommendation_score(&result, SkillLevel::Beginner), 43.5);
    }

    #[test]
    fn test_score_bounds() {
        let worst = analysis(SkillLevel::Advanced, scored(0.0), 50.0, measured(400.0));
        let best = analysis(SkillLevel::Beginner, scored(100.0), 0.0, measured(140.0));
        let low = recommendation_score(&worst, SkillLevel::Beginner);
        let high = recommendation_score(&best, SkillLevel::Beginner);
        assert!((0.0..=100.0).contains(&low));
        assert_eq!(high, 100.0);
    }
}
