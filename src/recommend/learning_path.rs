//! Study guidance for a recommended video.

use crate::analysis::SkillLevel;
use crate::chapters::Chapter;
use serde::{Deserialize, Serialize};

/// How much ground a video covers, judged by transcript length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentDepth {
    Overview,
    Detailed,
    Comprehensive,
}

impl ContentDepth {
    pub fn from_word_count(word_count: usize) -> Self {
        if word_count > 20_000 {
            ContentDepth::Comprehensive
        } else if word_count > 8_000 {
            ContentDepth::Detailed
        } else {
            ContentDepth::Overview
        }
    }
}

/// Teaching style guessed from title keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentStyle {
    ProjectBased,
    Tutorial,
    Theoretical,
    QuickStart,
    General,
}

impl ContentStyle {
    pub fn from_title(title: &str) -> Self {
        let title = title.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| title.contains(w));

        if has(&["project", "build", "create", "make"]) {
            ContentStyle::ProjectBased
        } else if has(&["tutorial", "guide", "how to"]) {
            ContentStyle::Tutorial
        } else if has(&["theory", "concept", "fundamental"]) {
            ContentStyle::Theoretical
        } else if has(&["crash course", "fast", "quick"]) {
            ContentStyle::QuickStart
        } else {
            ContentStyle::General
        }
    }
}

/// Subject areas and the title keywords that signal them, in priority order.
const SUBJECTS: &[(&str, &[&str])] = &[
    ("programming", &["python", "javascript", "java", "c++", "coding", "program"]),
    ("data", &["sql", "excel", "analysis", "visualization", "power bi"]),
    ("web", &["html", "css", "react", "website", "frontend"]),
    ("ai", &["machine learning", "ai", "neural", "llm", "langchain"]),
    ("design", &["photoshop", "figma", "ui", "ux", "design"]),
    ("business", &["excel", "powerpoint", "marketing", "finance"]),
];

/// First subject area whose keywords appear in the title.
pub fn detect_subject(title: &str) -> Option<&'static str> {
    let title = title.to_lowercase();
    SUBJECTS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(subject, _)| *subject)
}

/// What the guide is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentProfile {
    pub depth: ContentDepth,
    pub style: ContentStyle,
    /// More than three chapters.
    pub has_structure: bool,
    pub chapter_count: usize,
}

impl ContentProfile {
    pub fn new(title: &str, chapters: &[Chapter], word_count: usize) -> Self {
        Self {
            depth: ContentDepth::from_word_count(word_count),
            style: ContentStyle::from_title(title),
            has_structure: chapters.len() > 3,
            chapter_count: chapters.len(),
        }
    }
}

/// Build a study guide: how to watch this video, what to do next at the
/// learner's level, general study habits and, when the title reveals it,
/// pointers for the subject area.
pub fn learning_path(
    title: &str,
    chapters: &[Chapter],
    level: SkillLevel,
    word_count: usize,
) -> Vec<String> {
    let profile = ContentProfile::new(title, chapters, word_count);
    let mut lines = vec![
        "📚 **Your Learning Journey Guide**".to_string(),
        format!("🎯 **Video:** {}", title),
    ];
    push(&mut lines, &["", "👨‍🏫 **How to Get the Most from This Video:**", ""]);

    push(&mut lines, match profile.depth {
        ContentDepth::Overview => &[
            "• **This is an overview** - Don't expect mastery",
            "• **Take notes on key concepts** - Focus on the big picture",
            "• **Identify what interests you** - Note topics to explore deeper",
        ],
        ContentDepth::Detailed => &[
            "• **This is detailed content** - Set aside focused time",
            "• **Practice as you watch** - Pause and implement",
            "• **Bookmark complex sections** - Return to them later",
        ],
        ContentDepth::Comprehensive => &[
            "• **This is comprehensive** - Break into multiple sessions",
            "• **Create a study schedule** - 30-60 minute chunks",
            "• **Review previous sections** - Before starting new ones",
        ],
    });

    if profile.has_structure {
        push(&mut lines, &[
            "• **Use the chapter timestamps** - Jump to what you need",
            "• **Focus on core chapters** - Skip intro/outro if needed",
        ]);
    }

    push(&mut lines, &[
        "",
        "🎯 **Your Next Learning Steps:**",
        "",
        "1. **Immediate Practice (Next 24 hours)**",
        "   → Apply what you learned immediately",
        "   → Even if it's small, make it complete",
        "",
        "2. **Deepen Understanding (This week)**",
    ]);

    push(&mut lines, match level {
        SkillLevel::Beginner => &[
            "   → Find 2-3 more beginner videos on this topic",
            "   → Different explanations help understanding",
        ],
        SkillLevel::Intermediate => &[
            "   → Find a project tutorial using these concepts",
            "   → Build something real, not just follow along",
        ],
        SkillLevel::Advanced => &[
            "   → Read official documentation or research papers",
            "   → Explore edge cases and limitations",
        ],
    });

    push(&mut lines, &[
        "",
        "3. **Build Portfolio (This month)**",
        "   → Create something showcase-worthy",
        "   → Document your learning journey",
        "   → Share with community for feedback",
        "",
        "💡 **Universal Learning Principles:**",
        "",
        "• **Spaced Repetition:** Review after 1 day, 1 week, 1 month",
        "• **Active Recall:** Test yourself without looking at notes",
        "• **Interleaving:** Mix different but related topics",
        "• **Deliberate Practice:** Focus on your weak areas",
        "• **Teach Others:** The best way to learn is to teach",
        "",
    ]);

    if let Some(subject) = detect_subject(title) {
        let subject = subject.to_uppercase();
        lines.push(format!("🔍 **Detected Field:** {}", subject));
        lines.push(format!("   → Search for: '{} projects for beginners'", subject));
        lines.push(format!("   → Join: '{} learning communities'", subject));
        lines.push(format!("   → Follow: Top {} educators on YouTube", subject));
    }

    lines.push(String::new());
    lines.push(
        "🌟 **Remember:** Learning is a marathon, not a sprint. Consistency > Intensity."
            .to_string(),
    );
    lines
}

fn push(lines: &mut Vec<String>, items: &[&str]) {
    lines.extend(items.iter().map(|s| s.to_string()));
}
