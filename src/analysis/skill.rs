//! Skill-level classification.
//!
//! Each language family has its own rubric with independently calibrated
//! constants. The classifier dispatches on the detected language; the
//! rubrics are deliberately not expressed as one shared formula.

use super::{JargonAnalysis, Language, Pacing, Readability};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse three-band difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Ordinal position (Beginner = 1).
    pub fn rank(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
        }
    }

    /// Number of bands between two levels.
    pub fn distance(&self, other: SkillLevel) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLevel::Beginner => write!(f, "Beginner"),
            SkillLevel::Intermediate => write!(f, "Intermediate"),
            SkillLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            _ => Err(format!("Unknown skill level: {}", s)),
        }
    }
}

/// Outcome of a rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub level: SkillLevel,
    pub score: u32,
    /// Localized one-line explanation.
    pub explanation: String,
}

/// Analyzer outputs a rubric votes on.
#[derive(Debug, Clone, Copy)]
pub struct RubricInput<'a> {
    pub readability: &'a Readability,
    pub jargon: &'a JargonAnalysis,
    pub pacing: &'a Pacing,
}

/// A language-specific scoring table.
pub trait SkillRubric: Send + Sync {
    fn assess(&self, input: RubricInput<'_>) -> SkillAssessment;
}

/// Rubric for English transcripts: readability, jargon and pace votes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnglishRubric {
    /// Readability at or above this earns 3 points.
    pub readability_easy: f64,
    /// Readability at or above this earns 2 points (else 1).
    pub readability_moderate: f64,
    /// Jargon below this earns 3 points.
    pub jargon_low: f64,
    /// Jargon below this earns 2 points (else 1).
    pub jargon_moderate: f64,
    /// Pace inside `[pace_min, pace_max]` earns 2 points (else 1).
    pub pace_min: f64,
    pub pace_max: f64,
    pub beginner_threshold: u32,
    pub intermediate_threshold: u32,
}

impl Default for EnglishRubric {
    fn default() -> Self {
        Self {
            readability_easy: 60.0,
            readability_moderate: 40.0,
            jargon_low: 8.0,
            jargon_moderate: 20.0,
            pace_min: 130.0,
            pace_max: 170.0,
            beginner_threshold: 6,
            intermediate_threshold: 4,
        }
    }
}

impl EnglishRubric {
    fn readability_vote(&self, readability: f64) -> u32 {
        if readability >= self.readability_easy {
            3
        } else if readability >= self.readability_moderate {
            2
        } else {
            1
        }
    }

    fn jargon_vote(&self, percentage: f64) -> u32 {
        if percentage < self.jargon_low {
            3
        } else if percentage < self.jargon_moderate {
            2
        } else {
            1
        }
    }

    fn pacing_vote(&self, pacing: &Pacing) -> u32 {
        match pacing.words_per_minute() {
            Some(wpm) if (self.pace_min..=self.pace_max).contains(&wpm) => 2,
            _ => 1,
        }
    }
}

impl SkillRubric for EnglishRubric {
    fn assess(&self, input: RubricInput<'_>) -> SkillAssessment {
        let score = self.readability_vote(input.readability.normalized())
            + self.jargon_vote(input.jargon.percentage)
            + self.pacing_vote(input.pacing);

        let (level, explanation) = if score >= self.beginner_threshold {
            (SkillLevel::Beginner, "Perfect for beginners")
        } else if score >= self.intermediate_threshold {
            (SkillLevel::Intermediate, "Best for intermediate learners")
        } else {
            (SkillLevel::Advanced, "Designed for advanced learners")
        };

        SkillAssessment {
            level,
            score,
            explanation: explanation.to_string(),
        }
    }
}

/// Rubric for Hindi transcripts.
///
/// Readability is not measured for Hindi, so pace and jargon carry the
/// votes and every video receives a fixed teaching-style bonus. These
/// values are provisional and flagged for recalibration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HindiRubric {
    /// Pace inside `[pace_ideal_min, pace_ideal_max]` earns 3 points.
    pub pace_ideal_min: f64,
    pub pace_ideal_max: f64,
    /// Pace below the ideal range or up to this ceiling earns 2 points (else 1).
    pub pace_tolerable_max: f64,
    /// Vote given when the pace could not be measured.
    pub unknown_pace_vote: u32,
    /// Jargon below this earns 3 points.
    pub jargon_low: f64,
    /// Jargon below this earns 2 points (else 1).
    pub jargon_moderate: f64,
    /// Added unconditionally.
    pub teaching_bonus: u32,
    pub beginner_threshold: u32,
    pub intermediate_threshold: u32,
}

impl Default for HindiRubric {
    fn default() -> Self {
        Self {
            pace_ideal_min: 110.0,
            pace_ideal_max: 160.0,
            pace_tolerable_max: 180.0,
            unknown_pace_vote: 2,
            jargon_low: 8.0,
            jargon_moderate: 15.0,
            teaching_bonus: 2,
            beginner_threshold: 7,
            intermediate_threshold: 5,
        }
    }
}

impl HindiRubric {
    fn pacing_vote(&self, pacing: &Pacing) -> u32 {
        let Some(wpm) = pacing.words_per_minute() else {
            return self.unknown_pace_vote;
        };

        if (self.pace_ideal_min..=self.pace_ideal_max).contains(&wpm) {
            3
        } else if wpm < self.pace_ideal_min || wpm <= self.pace_tolerable_max {
            2
        } else {
            1
        }
    }

    fn jargon_vote(&self, percentage: f64) -> u32 {
        if percentage < self.jargon_low {
            3
        } else if percentage < self.jargon_moderate {
            2
        } else {
            1
        }
    }
}

impl SkillRubric for HindiRubric {
    fn assess(&self, input: RubricInput<'_>) -> SkillAssessment {
        let score = self.pacing_vote(input.pacing)
            + self.jargon_vote(input.jargon.percentage)
            + self.teaching_bonus;

        let (level, explanation) = if score >= self.beginner_threshold {
            (
                SkillLevel::Beginner,
                "हिंदी ट्यूटोरियल - शुरुआती के लिए बिल्कुल उपयुक्त",
            )
        } else if score >= self.intermediate_threshold {
            (SkillLevel::Intermediate, "हिंदी ट्यूटोरियल - मध्यम स्तर के लिए")
        } else {
            (SkillLevel::Advanced, "हिंदी ट्यूटोरियल - उन्नत स्तर के लिए")
        };

        SkillAssessment {
            level,
            score,
            explanation: explanation.to_string(),
        }
    }
}

/// Picks the rubric for a detected language.
#[derive(Debug, Clone, Default)]
pub struct SkillClassifier {
    english: EnglishRubric,
    hindi: HindiRubric,
}

impl SkillClassifier {
    pub fn new(english: EnglishRubric, hindi: HindiRubric) -> Self {
        Self { english, hindi }
    }

    pub fn rubric_for(&self, language: Language) -> &dyn SkillRubric {
        match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
        }
    }

    pub fn classify(&self, language: Language, input: RubricInput<'_>) -> SkillAssessment {
        self.rubric_for(language).assess(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jargon(percentage: f64) -> JargonAnalysis {
        JargonAnalysis {
            technical_count: 0,
            total_words: 100,
            percentage,
            interpretation: String::new(),
        }
    }

    fn scored(normalized: f64) -> Readability {
        Readability::Scored {
            flesch_score: normalized,
            fk_grade: 8.0,
            normalized,
            interpretation: String::new(),
        }
    }

    fn pace(wpm: f64) -> Pacing {
        Pacing::Measured {
            words_per_minute: wpm,
            interpretation: String::new(),
        }
    }

    #[test]
    fn test_english_beginner_example() {
        let (r, j, p) = (scored(75.0), jargon(6.0), pace(150.0));
        let result = EnglishRubric::default().assess(RubricInput {
            readability: &r,
            jargon: &j,
            pacing: &p,
        });
        assert_eq!(result.score, 8);
        assert_eq!(result.level, SkillLevel::Beginner);
    }

    #[test]
    fn test_english_intermediate_and_advanced() {
        let rubric = EnglishRubric::default();

        let (r, j, p) = (scored(45.0), jargon(12.0), pace(210.0));
        let mid = rubric.assess(RubricInput { readability: &r, jargon: &j, pacing: &p });
        assert_eq!(mid.score, 5);
        assert_eq!(mid.level, SkillLevel::Intermediate);

        let (r, j, p) = (scored(20.0), jargon(30.0), Pacing::Unknown);
        let hard = rubric.assess(RubricInput { readability: &r, jargon: &j, pacing: &p });
        assert_eq!(hard.score, 3);
        assert_eq!(hard.level, SkillLevel::Advanced);
        assert_eq!(hard.explanation, "Designed for advanced learners");
    }

    #[test]
    fn test_hindi_rubric_includes_bonus() {
        let r = Readability::NotApplicable { language: Language::Hindi };
        let (j, p) = (jargon(5.0), pace(130.0));
        let result = HindiRubric::default().assess(RubricInput {
            readability: &r,
            jargon: &j,
            pacing: &p,
        });
        assert_eq!(result.score, 3 + 3 + 2);
        assert_eq!(result.level, SkillLevel::Beginner);
        assert!(result.explanation.contains("शुरुआती"));
    }

    #[test]
    fn test_hindi_thresholds_differ_from_english() {
        let r = Readability::NotApplicable { language: Language::Hindi };
        // pace 1 + jargon 1 + bonus 2 = 4 -> Advanced under the Hindi table.
        let (j, p) = (jargon(25.0), pace(240.0));
        let input = RubricInput { readability: &r, jargon: &j, pacing: &p };
        let result = HindiRubric::default().assess(input);
        assert_eq!(result.score, 4);
        assert_eq!(result.level, SkillLevel::Advanced);
    }

    #[test]
    fn test_hindi_unknown_pace() {
        let r = Readability::NotApplicable { language: Language::Hindi };
        let j = jargon(10.0);
        let p = Pacing::Unknown;
        let result = HindiRubric::default().assess(RubricInput {
            readability: &r,
            jargon: &j,
            pacing: &p,
        });
        assert_eq!(result.score, 2 + 2 + 2);
        assert_eq!(result.level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_classifier_dispatches_on_language() {
        let classifier = SkillClassifier::default();
        let r = Readability::NotApplicable { language: Language::Hindi };
        let (j, p) = (jargon(5.0), pace(130.0));
        let input = RubricInput { readability: &r, jargon: &j, pacing: &p };

        // English table: 2 (neutral 50) + 3 + 2 = 7; Hindi table: 3 + 3 + 2 = 8.
        assert_eq!(classifier.classify(Language::English, input).score, 7);
        assert_eq!(classifier.classify(Language::Hindi, input).score, 8);
    }

    #[test]
    fn test_level_parsing_and_distance() {
        assert_eq!("ADVANCED".parse::<SkillLevel>().unwrap(), SkillLevel::Advanced);
        assert!("expert".parse::<SkillLevel>().is_err());
        assert_eq!(SkillLevel::Beginner.distance(SkillLevel::Advanced), 2);
        assert_eq!(SkillLevel::Intermediate.distance(SkillLevel::Advanced), 1);
    }
}
