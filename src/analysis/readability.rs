//! Flesch reading-ease and grade-level estimation for English transcripts.

use super::Language;
use serde::{Deserialize, Serialize};

/// Minimum whitespace-separated words needed for a score.
const MIN_WORDS: usize = 10;

/// Normalized score reported when the metric does not apply to the language.
pub const NEUTRAL_READABILITY: f64 = 50.0;

/// Readability of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Readability {
    /// English text with enough words to score.
    Scored {
        flesch_score: f64,
        fk_grade: f64,
        /// Flesch score clamped to 0..=100.
        normalized: f64,
        interpretation: String,
    },
    /// Too little text (or a degenerate computation).
    InsufficientData,
    /// The formula is English-only.
    NotApplicable { language: Language },
}

impl Readability {
    /// Normalized 0..=100 score used by the classifier.
    ///
    /// Insufficient data maps to zero, non-English to the neutral midpoint.
    pub fn normalized(&self) -> f64 {
        match self {
            Readability::Scored { normalized, .. } => *normalized,
            Readability::InsufficientData => 0.0,
            Readability::NotApplicable { .. } => NEUTRAL_READABILITY,
        }
    }

    /// The measured score, if one exists.
    pub fn measured(&self) -> Option<f64> {
        match self {
            Readability::Scored { normalized, .. } => Some(*normalized),
            _ => None,
        }
    }

    /// Human-readable interpretation.
    pub fn interpretation(&self) -> String {
        match self {
            Readability::Scored { interpretation, .. } => interpretation.clone(),
            Readability::InsufficientData => "Not enough text".to_string(),
            Readability::NotApplicable { language } => format!(
                "Language: {} (analysis limited)",
                language.code().to_uppercase()
            ),
        }
    }
}

/// Score readability for a transcript in the given language.
pub fn calculate_readability(text: &str, language: Language) -> Readability {
    if language != Language::English {
        return Readability::NotApplicable { language };
    }

    if text.split_whitespace().count() < MIN_WORDS {
        return Readability::InsufficientData;
    }

    let stats = TextStats::from_text(text);
    if stats.words == 0 {
        return Readability::InsufficientData;
    }

    let words_per_sentence = stats.words as f64 / stats.sentences as f64;
    let syllables_per_word = stats.syllables as f64 / stats.words as f64;

    let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

    if !flesch.is_finite() || !grade.is_finite() {
        return Readability::InsufficientData;
    }

    let normalized = flesch.clamp(0.0, 100.0);
    Readability::Scored {
        flesch_score: round1(flesch),
        fk_grade: round1(grade),
        normalized: round1(normalized),
        interpretation: interpret_readability(flesch).to_string(),
    }
}

/// Standard Flesch reading-ease bands.
pub fn interpret_readability(score: f64) -> &'static str {
    if score >= 90.0 {
        "Very Easy (5th grade)"
    } else if score >= 80.0 {
        "Easy (6th-7th grade)"
    } else if score >= 70.0 {
        "Fairly Easy (8th grade)"
    } else if score >= 60.0 {
        "Standard (9th-10th grade)"
    } else if score >= 50.0 {
        "Fairly Difficult (11th-12th grade)"
    } else if score >= 30.0 {
        "Difficult (College level)"
    } else {
        "Very Difficult (Professional)"
    }
}

struct TextStats {
    sentences: usize,
    words: usize,
    syllables: usize,
}

impl TextStats {
    fn from_text(text: &str) -> Self {
        let sentences = text
            .split(['.', '!', '?'])
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .count()
            .max(1);

        let mut words = 0;
        let mut syllables = 0;
        for token in text.split_whitespace() {
            if !token.chars().any(char::is_alphanumeric) {
                continue;
            }
            words += 1;
            syllables += count_syllables(token);
        }

        Self {
            sentences,
            words,
            syllables,
        }
    }
}

/// Vowel-group syllable estimate with a silent trailing `e`.
fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    let n = letters.len();
    if n > 2 && letters[n - 1] == 'e' && letters[n - 2] != 'l' && count > 1 {
        count -= 1;
    }

    count.max(1)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
