//! Technical-term density against a curated dictionary.

use super::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Built-in technical dictionary. Extended through `analysis.extra_technical_terms`.
const TECHNICAL_TERMS: &[&str] = &[
    // programming basics
    "algorithm", "variable", "function", "class", "object", "loop", "array",
    "database", "api", "framework", "syntax", "compiler", "interpreter", "debugging",
    // python
    "python", "django", "flask", "list", "dictionary", "tuple", "module", "package",
    "import", "def",
    // general concepts
    "recursion", "iteration", "inheritance", "polymorphism", "abstraction",
    "encapsulation", "complexity",
];

/// English stop words removed before counting.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
    "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now", "d",
    "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn",
    "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn",
    "weren", "won", "wouldn",
];

/// Jargon density of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JargonAnalysis {
    /// Words that matched the technical dictionary.
    pub technical_count: usize,
    /// Words left after stop-word removal.
    pub total_words: usize,
    /// `technical_count / total_words * 100`, one decimal.
    pub percentage: f64,
    pub interpretation: String,
}

/// Counts dictionary terms among the content words of a transcript.
#[derive(Debug, Clone)]
pub struct JargonAnalyzer {
    terms: HashSet<String>,
    stop_words: HashSet<&'static str>,
}

impl JargonAnalyzer {
    /// Analyzer over the built-in dictionary.
    pub fn new() -> Self {
        Self::with_extra_terms(&[])
    }

    /// Analyzer over the built-in dictionary plus `extra` terms.
    pub fn with_extra_terms(extra: &[String]) -> Self {
        let terms = TECHNICAL_TERMS
            .iter()
            .map(|t| t.to_string())
            .chain(extra.iter().map(|t| t.trim().to_lowercase()))
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            terms,
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Measure jargon density. The percentage is language-agnostic; the
    /// difficulty label is only given for English.
    pub fn analyze(&self, text: &str, language: Language) -> JargonAnalysis {
        let lowered = text.to_lowercase();
        let clean: Vec<&str> = tokenize(&lowered)
            .filter(|w| !self.stop_words.contains(w))
            .collect();

        let total_words = clean.len();
        let technical_count = clean.iter().filter(|w| self.terms.contains(**w)).count();
        let percentage = if total_words == 0 {
            0.0
        } else {
            round1(technical_count as f64 / total_words as f64 * 100.0)
        };

        let interpretation = match language {
            Language::English => interpret_jargon(percentage).to_string(),
            other => format!("Language: {}", other.code().to_uppercase()),
        };

        JargonAnalysis {
            technical_count,
            total_words,
            percentage,
            interpretation,
        }
    }
}

impl Default for JargonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Jargon bands for tutorial content.
pub fn interpret_jargon(percentage: f64) -> &'static str {
    if percentage < 8.0 {
        "Low (Beginner-friendly)"
    } else if percentage < 20.0 {
        "Moderate (Intermediate level)"
    } else {
        "High (Advanced concepts)"
    }
}

/// Split into alphanumeric runs.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_terms_after_stop_words() {
        let analyzer = JargonAnalyzer::new();
        // Content words: python, function, returns, value, quickly -> 2 of 5.
        let result = analyzer.analyze("The Python function returns a value quickly.", Language::English);
        assert_eq!(result.total_words, 5);
        assert_eq!(result.technical_count, 2);
        assert_eq!(result.percentage, 40.0);
        assert_eq!(result.interpretation, "High (Advanced concepts)");
    }

    #[test]
    fn test_empty_text() {
        let result = JargonAnalyzer::new().analyze("", Language::English);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.interpretation, "Low (Beginner-friendly)");
    }

    #[test]
    fn test_non_english_keeps_percentage_replaces_label() {
        let result = JargonAnalyzer::new().analyze("python लूप function सीखो", Language::Hindi);
        assert_eq!(result.technical_count, 2);
        assert_eq!(result.total_words, 4);
        assert_eq!(result.percentage, 50.0);
        assert_eq!(result.interpretation, "Language: HI");
    }

    #[test]
    fn test_extra_terms_extend_dictionary() {
        let text = "deploy the cluster with kubernetes today";
        let base = JargonAnalyzer::new().analyze(text, Language::English);
        let extended = JargonAnalyzer::with_extra_terms(&["Kubernetes".to_string()])
            .analyze(text, Language::English);
        assert_eq!(base.technical_count, 0);
        assert_eq!(extended.technical_count, 1);
    }

    #[test]
    fn test_bands() {
        assert_eq!(interpret_jargon(0.0), "Low (Beginner-friendly)");
        assert_eq!(interpret_jargon(7.9), "Low (Beginner-friendly)");
        assert_eq!(interpret_jargon(8.0), "Moderate (Intermediate level)");
        assert_eq!(interpret_jargon(19.9), "Moderate (Intermediate level)");
        assert_eq!(interpret_jargon(20.0), "High (Advanced concepts)");
    }
}
