//! Timestamp-prefixed chapter lines in video descriptions.

use super::Chapter;
use regex::Regex;
use tracing::debug;

/// Structural markers that never count as a chapter topic.
const GENERIC_TOPICS: &[&str] = &[
    "intro",
    "introduction",
    "outro",
    "conclusion",
    "summary",
    "recap",
    "welcome",
    "thanks",
    "thank you",
    "end",
    "start",
    "beginning",
    "closing",
];

/// Topics this short (in characters) are dropped.
const MIN_TOPIC_CHARS: usize = 4;

/// Topics with at most this many words are title-cased.
const TITLE_CASE_MAX_WORDS: usize = 5;

/// How a pattern's captures map to a time label and topic.
enum Captures {
    /// Group 1 is the label, group 2 the topic.
    Label,
    /// Groups 1 and 2 are minutes and seconds, group 3 the topic.
    MinutesSeconds,
}

/// Extracts chapters with an ordered list of patterns; the first matching
/// pattern wins for each line. The order is significant: a line can satisfy
/// several patterns with different captures.
pub struct ChapterExtractor {
    patterns: Vec<(Regex, Captures)>,
    symbols: Regex,
}

impl ChapterExtractor {
    pub fn new() -> Self {
        let patterns = [
            // 00:00 - Topic
            (r"(\d{1,3}:\d{2})\s*[-–]\s*(.+)", Captures::Label),
            // 00:00:00 - Topic
            (r"(\d{1,3}:\d{2}:\d{2})\s*[-–]\s*(.+)", Captures::Label),
            // 0:00 - Topic, 0.00 - Topic, 0 : 00 - Topic
            (r"(\d{1,3})\s*[:.]\s*(\d{2})\s*[-–]\s*(.+)", Captures::MinutesSeconds),
            // 00:00 Topic
            (r"^(\d{1,3}:\d{2})\s+(.+)", Captures::Label),
        ]
        .into_iter()
        .map(|(p, c)| (Regex::new(p).expect("Invalid chapter pattern"), c))
        .collect();

        Self {
            patterns,
            symbols: Regex::new(r"[\[\](){}|]").expect("Invalid symbol pattern"),
        }
    }

    /// Extract chapters in description order. Lines without a timestamp
    /// prefix are skipped.
    pub fn extract(&self, description: &str) -> Vec<Chapter> {
        let mut chapters = Vec::new();

        for line in description.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((time_label, raw_topic)) = self.match_line(line) else {
                continue;
            };

            let topic = self.clean_topic(&raw_topic);
            if topic.chars().count() < MIN_TOPIC_CHARS || is_generic_topic(&topic) {
                debug!("Skipping chapter line {:?}", line);
                continue;
            }

            chapters.push(Chapter {
                time_label,
                topic,
                source_line: line.to_string(),
            });
        }

        chapters
    }

    fn match_line(&self, line: &str) -> Option<(String, String)> {
        self.patterns.iter().find_map(|(regex, kind)| {
            let caps = regex.captures(line)?;
            match kind {
                Captures::Label => Some((
                    caps.get(1)?.as_str().trim().to_string(),
                    caps.get(2)?.as_str().to_string(),
                )),
                Captures::MinutesSeconds => Some((
                    format!("{}:{}", caps.get(1)?.as_str(), caps.get(2)?.as_str()),
                    caps.get(3)?.as_str().to_string(),
                )),
            }
        })
    }

    /// Strip bracket, brace and pipe symbols; title-case short topics.
    fn clean_topic(&self, topic: &str) -> String {
        let stripped = self.symbols.replace_all(topic, "");
        let words: Vec<&str> = stripped.split_whitespace().collect();

        if words.len() <= TITLE_CASE_MAX_WORDS {
            words
                .iter()
                .map(|w| capitalize(w))
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            stripped.trim().to_string()
        }
    }
}

impl Default for ChapterExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a topic is a structural marker (intro, recap, ...).
pub fn is_generic_topic(topic: &str) -> bool {
    let lowered = topic.trim().to_lowercase();
    GENERIC_TOPICS.contains(&lowered.as_str())
}

/// First letter upper-case, the rest lower-case.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
