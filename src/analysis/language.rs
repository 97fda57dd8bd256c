//! Script-ratio language detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Devanagari vowel signs and diacritics counted as Hindi evidence.
const HINDI_MARKS: &[char] = &[
    '\u{093C}', // nukta
    '\u{093D}', // avagraha
    '\u{093E}', // aa
    '\u{093F}', // i
    '\u{0940}', // ii
    '\u{0941}', // u
    '\u{0942}', // uu
    '\u{0947}', // e
    '\u{0948}', // ai
    '\u{094B}', // o
    '\u{094C}', // au
    '\u{0902}', // anusvara
    '\u{0903}', // visarga
    '\u{0901}', // candrabindu
];

const HINDI_RATIO_THRESHOLD: f64 = 0.10;
const ASCII_RATIO_THRESHOLD: f64 = 0.50;

/// Language families the analyzers distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Detect whether a transcript is English or Hindi.
///
/// Ratios are taken over the total character count. Rules apply in order:
/// Hindi marks above 10% mean Hindi, ASCII letters above 50% mean English,
/// any Hindi mark at all means Hindi, otherwise English.
pub fn detect_language(text: &str) -> Language {
    let mut total = 0usize;
    let mut hindi = 0usize;
    let mut ascii_letters = 0usize;

    for c in text.chars() {
        total += 1;
        if HINDI_MARKS.contains(&c) {
            hindi += 1;
        } else if c.is_ascii_alphabetic() {
            ascii_letters += 1;
        }
    }

    if total == 0 {
        return Language::English;
    }

    let hindi_ratio = hindi as f64 / total as f64;
    let ascii_ratio = ascii_letters as f64 / total as f64;

    if hindi_ratio > HINDI_RATIO_THRESHOLD {
        Language::Hindi
    } else if ascii_ratio > ASCII_RATIO_THRESHOLD {
        Language::English
    } else if hindi > 0 {
        Language::Hindi
    } else {
        Language::English
    }
}
