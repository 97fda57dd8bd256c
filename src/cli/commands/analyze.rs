//! Analyze command implementation.

use super::load_bundle;
use crate::analysis::Readability;
use crate::cli::output::format_duration;
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::VideoAnalyst;
use anyhow::Result;
use std::sync::Arc;

/// Run the analyze command.
pub async fn run_analyze(bundle: &str, json: bool, settings: Settings) -> Result<()> {
    let bundle = Arc::new(load_bundle(bundle)?);
    let analyst = VideoAnalyst::new(&settings, bundle.clone(), bundle.clone());

    let spinner = Output::spinner("Analyzing transcript...");
    let report = analyst.video_report(&bundle.metadata.id).await;
    spinner.finish_and_clear();
    let report = report?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let analysis = &report.analysis;
    Output::header(&report.metadata.title);
    Output::kv("Video", &report.metadata.id);
    if let Some(seconds) = report.metadata.duration_seconds {
        Output::kv("Duration", &format_duration(seconds));
    }
    Output::kv("Language", &analysis.language.to_string());
    Output::kv("Words", &report.word_count.to_string());

    Output::header("Difficulty");
    match &analysis.readability {
        Readability::Scored {
            flesch_score,
            fk_grade,
            ..
        } => Output::kv(
            "Readability",
            &format!(
                "{:.1} (grade {:.1}) - {}",
                flesch_score,
                fk_grade,
                analysis.readability.interpretation()
            ),
        ),
        other => Output::kv("Readability", &other.interpretation()),
    }
    Output::kv(
        "Jargon",
        &format!(
            "{:.1}% - {}",
            analysis.jargon.percentage, analysis.jargon.interpretation
        ),
    );
    match analysis.pacing.words_per_minute() {
        Some(wpm) => Output::kv(
            "Pacing",
            &format!("{:.0} wpm - {}", wpm, analysis.pacing.interpretation()),
        ),
        None => Output::kv("Pacing", analysis.pacing.interpretation()),
    }

    Output::success(&format!(
        "Skill level: {} (score {})",
        analysis.skill_level, analysis.level_score
    ));
    Output::info(&analysis.level_explanation);

    Ok(())
}
