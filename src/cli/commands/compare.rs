//! Compare command implementation.

use super::bundle_paths;
use crate::analysis::SkillLevel;
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::VideoAnalyst;
use crate::transcript::BundleLibrary;
use anyhow::Result;
use std::sync::Arc;

/// Run the compare command.
pub async fn run_compare(bundles: &[String], target: SkillLevel, settings: Settings) -> Result<()> {
    let library = Arc::new(BundleLibrary::load_all(&bundle_paths(bundles))?);
    let ids = library.ids();
    let analyst =
        VideoAnalyst::new(&settings, library.clone(), library.clone()).with_comments(library);

    let spinner = Output::spinner(&format!("Analyzing {} videos...", ids.len()));
    let report = analyst.compare(&ids, target).await;
    spinner.finish_and_clear();
    let report = report?;

    Output::header(&format!("Ranking for {} learners", target));
    for entry in &report.comparison.entries {
        Output::ranked_video(entry);
    }
    for failed in &report.comparison.failed {
        Output::warning(&format!("Skipped {}: {}", failed.video_id, failed.reason));
    }

    if let Some(best) = report.comparison.best_for_level() {
        if Some(best.video_id.as_str())
            != report.comparison.recommended().map(|e| e.video_id.as_str())
        {
            Output::info(&format!("Closest to the {} level: {}", target, best.title));
        }
    }

    if !report.why_this_video.is_empty() {
        Output::header("Why this video");
        Output::lines(&report.why_this_video);
    }
    if let Some(summary) = &report.summary {
        println!();
        println!("{}", summary.to_text());
    }
    if !report.learning_path.is_empty() {
        println!();
        Output::lines(&report.learning_path);
    }

    Ok(())
}
