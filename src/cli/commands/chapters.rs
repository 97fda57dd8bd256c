//! Chapters command implementation.

use super::load_bundle;
use crate::chapters::{extract_chapters, generate_learning_summary};
use crate::cli::Output;
use anyhow::Result;

/// Run the chapters command.
pub fn run_chapters(bundle: &str) -> Result<()> {
    let bundle = load_bundle(bundle)?;
    let metadata = &bundle.metadata;
    let chapters = extract_chapters(&metadata.description);

    Output::header(&metadata.title);
    if chapters.is_empty() {
        Output::warning("No chapter timestamps found in the description.");
    } else {
        for chapter in &chapters {
            Output::list_item(&format!("{}  {}", chapter.time_label, chapter.topic));
        }
    }

    println!();
    println!("{}", generate_learning_summary(&chapters, &metadata.title).to_text());
    Ok(())
}
