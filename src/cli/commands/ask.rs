//! Ask command implementation.

use super::load_bundle;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Tutor;
use crate::rag::AnswerSource;
use anyhow::Result;
use std::sync::Arc;

/// Run the ask command.
pub async fn run_ask(bundle: &str, question: &str, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let bundle = Arc::new(load_bundle(bundle)?);
    let video_id = bundle.metadata.id.clone();
    let tutor = Tutor::new(settings, bundle.clone(), bundle)?;

    let spinner = Output::spinner("Reading the transcript...");
    let response = tutor.ask_video(&video_id, question).await;
    spinner.finish_and_clear();

    match response {
        Ok(response) => {
            println!("\n{}\n", response.format_for_display());
            match response.source {
                AnswerSource::Generated => {}
                AnswerSource::Extractive => {
                    Output::warning("Answer generation was unavailable; showing the closest excerpt.")
                }
                AnswerSource::None => {
                    Output::warning("No part of the transcript matched the question.")
                }
            }
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Failed to answer: {}", e));
            Err(e.into())
        }
    }
}
