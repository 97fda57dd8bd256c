//! "Why this video" lines for a recommended entry.

use super::ComparisonEntry;
use crate::analysis::SkillLevel;
use crate::comments::{CommentAnalysis, CommentSentiment};

/// The 0..=8 scale shown to learners.
const SCALE: f64 = 8.0;

/// Explain a recommendation: score band, level fit, readability, jargon,
/// pacing, viewer comments and length. Unmeasured readability or pacing is
/// left out, as are comments that are missing or evenly split.
pub fn explain_recommendation(entry: &ComparisonEntry, target: SkillLevel) -> Vec<String> {
    let mut lines = Vec::new();
    let analysis = &entry.analysis;

    let points = ((entry.recommendation_score / 100.0 * SCALE) as u32).min(SCALE as u32);
    lines.push(if points >= 7 {
        format!(
            "🏆 **Top-rated choice** - Scored {}/8, highest among compared videos",
            points
        )
    } else if points >= 5 {
        format!("✅ **Solid pick** - Scored {}/8 based on multiple factors", points)
    } else {
        format!("⚖️ **Balanced option** - Scored {}/8, best available match", points)
    });

    let level = analysis.skill_level;
    let target_name = target.to_string().to_lowercase();
    lines.push(match level.distance(target) {
        0 => "🎯 **Perfect level match** - This video is exactly at your selected skill level"
            .to_string(),
        1 => format!(
            "🎯 **Good fit** - This {} video is close to your requested {} level",
            level, target_name
        ),
        _ => format!(
            "🎯 **Alternative option** - While you requested {}, this {} video is the closest match available",
            target_name, level
        ),
    });

    if let Some(readability) = analysis.readability.measured() {
        lines.push(
            if readability > 70.0 {
                "📚 **Easy to understand** - Uses simple language and clear explanations"
            } else if readability > 50.0 {
                "📚 **Moderate difficulty** - Balanced language suitable for learning"
            } else {
                "📚 **Challenging content** - Uses complex language, best for focused learners"
            }
            .to_string(),
        );
    }

    let jargon = analysis.jargon.percentage;
    lines.push(
        if jargon < 5.0 {
            "🔤 **Beginner-friendly terminology** - Minimal technical jargon, easy to follow"
        } else if jargon < 15.0 {
            "🔤 **Moderate technical terms** - Introduces concepts with appropriate terminology"
        } else {
            "🔤 **Technical focus** - Uses specialized terms for in-depth learning"
        }
        .to_string(),
    );

    if let Some(wpm) = analysis.pacing.words_per_minute() {
        lines.push(
            if wpm < 140.0 {
                "⏱️ **Comfortable pace** - Speaks slowly enough for beginners to follow"
            } else if wpm < 180.0 {
                "⏱️ **Balanced speed** - Good pace for most learners"
            } else {
                "⏱️ **Fast-paced** - Quick delivery, best for experienced learners"
            }
            .to_string(),
        );
    }

    if let Some(line) = entry.comments.as_ref().and_then(comment_line) {
        lines.push(line);
    }

    lines.push(
        if entry.word_count > 30_000 {
            "📏 **Comprehensive coverage** - Detailed, in-depth tutorial"
        } else if entry.word_count > 10_000 {
            "📏 **Moderate length** - Balanced coverage of topics"
        } else {
            "📏 **Concise tutorial** - Quick overview of concepts"
        }
        .to_string(),
    );

    lines
}

fn comment_line(comments: &CommentAnalysis) -> Option<String> {
    if comments.total_comments == 0 {
        return None;
    }
    match comments.sentiment {
        CommentSentiment::Positive if comments.understanding_score > 20.0 => Some(format!(
            "💬 **Highly praised** - {:.1}% of viewers found it clear and helpful",
            comments.understanding_score
        )),
        CommentSentiment::Positive => {
            Some("💬 **Positive feedback** - Viewers generally found it useful".to_string())
        }
        CommentSentiment::Confusing => Some(format!(
            "💬 **Some confusion** - {:.1}% of viewers found parts difficult",
            comments.confusion_score
        )),
        CommentSentiment::Mixed | CommentSentiment::NoComments => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Pacing, Readability};
    use crate::comments::analyze_comments;
    use crate::recommend::test_support::{analysis, measured, scored};

    fn entry(level: SkillLevel, score: f64, readability: Readability, pacing: Pacing) -> ComparisonEntry {
        ComparisonEntry {
            video_id: "v".to_string(),
            title: "Video".to_string(),
            analysis: analysis(level, readability, 3.0, pacing),
            recommendation_score: score,
            rank: 1,
            word_count: 12_000,
            comments: None,
        }
    }

    fn with_comments(texts: &[&str]) -> ComparisonEntry {
        let texts: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        ComparisonEntry {
            comments: Some(analyze_comments(&texts)),
            ..entry(SkillLevel::Beginner, 92.5, scored(80.0), measured(130.0))
        }
    }

    #[test]
    fn test_top_rated_exact_match() {
        let lines = explain_recommendation(
            &entry(SkillLevel::Beginner, 92.5, scored(80.0), measured(130.0)),
            SkillLevel::Beginner,
        );
        assert_eq!(
            lines,
            vec![
                "🏆 **Top-rated choice** - Scored 7/8, highest among compared videos",
                "🎯 **Perfect level match** - This video is exactly at your selected skill level",
                "📚 **Easy to understand** - Uses simple language and clear explanations",
                "🔤 **Beginner-friendly terminology** - Minimal technical jargon, easy to follow",
                "⏱️ **Comfortable pace** - Speaks slowly enough for beginners to follow",
                "📏 **Moderate length** - Balanced coverage of topics",
            ]
        );
    }

    #[test]
    fn test_level_mismatch_wording() {
        let near = explain_recommendation(
            &entry(SkillLevel::Intermediate, 70.0, scored(60.0), measured(150.0)),
            SkillLevel::Beginner,
        );
        assert_eq!(near[0], "✅ **Solid pick** - Scored 5/8 based on multiple factors");
        assert_eq!(
            near[1],
            "🎯 **Good fit** - This Intermediate video is close to your requested beginner level"
        );

        let far = explain_recommendation(
            &entry(SkillLevel::Advanced, 40.0, scored(30.0), measured(200.0)),
            SkillLevel::Beginner,
        );
        assert!(far[0].starts_with("⚖️ **Balanced option** - Scored 3/8"));
        assert!(far[1].starts_with("🎯 **Alternative option**"));
    }

    #[test]
    fn test_unmeasured_metrics_skipped() {
        let lines = explain_recommendation(
            &entry(SkillLevel::Beginner, 100.0, Readability::InsufficientData, Pacing::Unknown),
            SkillLevel::Beginner,
        );
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "🏆 **Top-rated choice** - Scored 8/8, highest among compared videos");
        assert!(!lines.iter().any(|l| l.starts_with("📚") || l.starts_with("⏱️")));
    }

    #[test]
    fn test_comment_lines() {
        let praised = explain_recommendation(
            &with_comments(&["Thanks, so helpful", "Understood everything", "ok"]),
            SkillLevel::Beginner,
        );
        assert_eq!(praised.len(), 7);
        assert_eq!(
            praised[5],
            "💬 **Highly praised** - 66.7% of viewers found it clear and helpful"
        );
        assert!(praised[6].starts_with("📏"));

        let lukewarm: Vec<&str> = std::iter::once("thank you")
            .chain(std::iter::repeat("first").take(9))
            .collect();
        let lines = explain_recommendation(&with_comments(&lukewarm), SkillLevel::Beginner);
        assert_eq!(lines[5], "💬 **Positive feedback** - Viewers generally found it useful");

        let confused = explain_recommendation(
            &with_comments(&["Samajh nahi aaya", "too difficult", "nice"]),
            SkillLevel::Beginner,
        );
        assert_eq!(
            confused[5],
            "💬 **Some confusion** - 66.7% of viewers found parts difficult"
        );
    }

    #[test]
    fn test_split_or_missing_comments_skipped() {
        let split = explain_recommendation(
            &with_comments(&["so helpful", "so confusing"]),
            SkillLevel::Beginner,
        );
        let empty = explain_recommendation(&with_comments(&[]), SkillLevel::Beginner);
        for lines in [split, empty] {
            assert_eq!(lines.len(), 6);
            assert!(!lines.iter().any(|l| l.starts_with("💬")));
        }
    }
}
