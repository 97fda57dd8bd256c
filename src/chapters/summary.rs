//! "What you'll learn" summaries built from chapters or, failing that, from
//! the title alone.

use super::extractor::is_generic_topic;
use super::Chapter;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Chapters listed in a chapter-grounded summary.
const MAX_LISTED_CHAPTERS: usize = 7;

/// Technical terms named on the "Covers" line.
const MAX_COVERED_TERMS: usize = 3;

/// Terms recognized in chapter topics.
const TECH_TERMS: &[&str] = &[
    "python",
    "javascript",
    "react",
    "django",
    "flask",
    "html",
    "css",
    "machine learning",
    "ai",
    "data science",
    "analysis",
    "visualization",
    "langchain",
    "llm",
    "vector",
    "database",
    "api",
    "web",
    "mobile",
    "design",
    "ui",
    "ux",
    "photoshop",
    "figma",
    "excel",
    "powerpoint",
];

/// Where a summary's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    /// Built from the description's chapters.
    ChapterGrounded,
    /// Guessed from title keywords; lower confidence.
    TitleOnly,
}

/// Display-ready summary lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSummary {
    pub kind: SummaryKind,
    pub lines: Vec<String>,
}

impl LearningSummary {
    pub fn is_grounded(&self) -> bool {
        self.kind == SummaryKind::ChapterGrounded
    }

    /// Lines joined with newlines.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Build the learning summary for a video.
pub fn generate_learning_summary(chapters: &[Chapter], title: &str) -> LearningSummary {
    if chapters.is_empty() {
        return title_only_summary(title);
    }

    let mut lines = vec!["📋 **What You'll Learn (Video Chapters):**".to_string()];

    let meaningful: Vec<&Chapter> = chapters
        .iter()
        .filter(|c| !is_generic_topic(&c.topic))
        .collect();

    for chapter in meaningful.iter().take(MAX_LISTED_CHAPTERS) {
        lines.push(format!("⏱️ **{}** - {}", chapter.time_label, chapter.topic));
    }

    let terms = covered_terms(meaningful.iter().map(|c| c.topic.as_str()));
    if !terms.is_empty() {
        lines.push(format!(
            "🔧 **Covers:** {}",
            terms
                .into_iter()
                .take(MAX_COVERED_TERMS)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    let title_lower = title.to_lowercase();
    let prerequisites = if contains_any(&title_lower, &["advanced", "expert", "master"]) {
        "Solid foundational knowledge required"
    } else if contains_any(&title_lower, &["beginner", "basics", "introduction"]) {
        "No prior experience needed"
    } else {
        "Basic understanding helpful"
    };
    lines.push(format!("📝 **Prerequisites:** {}", prerequisites));

    LearningSummary {
        kind: SummaryKind::ChapterGrounded,
        lines,
    }
}

fn title_only_summary(title: &str) -> LearningSummary {
    let title_lower = title.to_lowercase();

    let (first, second) = if title_lower.contains("python") {
        ("🐍 **Python programming concepts**", "💻 **Hands-on coding examples**")
    } else if contains_any(&title_lower, &["data", "analysis"]) {
        ("📊 **Data analysis techniques**", "📈 **Practical data applications**")
    } else if title_lower.contains("web") {
        ("🌐 **Web development fundamentals**", "🖥️ **Building functional websites**")
    } else if title_lower.contains("design") {
        ("🎨 **Design principles and techniques**", "🖌️ **Creative project work**")
    } else {
        ("📚 **Core concepts and practical skills**", "🔧 **Step-by-step implementation**")
    };

    LearningSummary {
        kind: SummaryKind::TitleOnly,
        lines: vec![
            "📋 **Course Content Overview**".to_string(),
            first.to_string(),
            second.to_string(),
            "📝 **Prerequisites:** Willingness to learn and practice".to_string(),
        ],
    }
}

/// Dictionary terms appearing as whole words in the topics, first-seen order.
fn covered_terms<'a>(topics: impl Iterator<Item = &'a str>) -> Vec<&'static str> {
    let matchers: Vec<(&'static str, Regex)> = TECH_TERMS
        .iter()
        .filter_map(|term| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                .ok()
                .map(|re| (*term, re))
        })
        .collect();

    let mut found: Vec<&'static str> = Vec::new();
    for topic in topics {
        for (term, re) in &matchers {
            if !found.contains(term) && re.is_match(topic) {
                found.push(term);
            }
        }
    }
    found
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
