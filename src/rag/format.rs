//! Presentation cleanup for generated answers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines starting with these open a new answer section.
const SECTION_MARKERS: &[&str] = &["🎯", "📘", "📚", "🧠", "🚀", "💡"];

/// Lines starting with these are list items and get indented.
const BULLET_MARKERS: &[&str] = &["•", "1.", "2.", "3.", "4.", "5."];

static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Invalid blank-run pattern"));

/// Tidy model output: collapse broken bold markers, drop blank lines, put a
/// blank line before each section marker and indent list items. Only the
/// layout changes.
pub fn clean_formatting(answer: &str) -> String {
    if answer.is_empty() {
        return String::new();
    }

    let answer = answer.replace("** **", "**").replace("***", "**");

    let mut lines: Vec<String> = Vec::new();
    for line in answer.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if SECTION_MARKERS.iter().any(|m| line.starts_with(m)) {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(line.to_string());
        } else if BULLET_MARKERS.iter().any(|m| line.starts_with(m)) {
            lines.push(format!("  {}", line));
        } else {
            lines.push(line.to_string());
        }
    }

    BLANK_RUNS.replace_all(&lines.join("\n"), "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_and_bullets() {
        let raw = "🎯 **Nice!**\nGreat question.\n\n\n📘 **Quick Answer:**\nLoops repeat.\n📚 **From the Video:**\n• The instructor says: use for\n1. First\n   2. Second";
        let cleaned = clean_formatting(raw);
        assert_eq!(
            cleaned,
            "🎯 **Nice!**\nGreat question.\n\n📘 **Quick Answer:**\nLoops repeat.\n\n📚 **From the Video:**\n  • The instructor says: use for\n  1. First\n  2. Second"
        );
    }

    #[test]
    fn test_bold_markers_collapsed() {
        assert_eq!(clean_formatting("***Bold*** and ** **x"), "**Bold** and **x");
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_formatting(""), "");
        assert_eq!(clean_formatting("\n\n  \n"), "");
    }
}
