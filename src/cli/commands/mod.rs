//! CLI command implementations.

mod analyze;
mod ask;
mod chapters;
mod compare;
mod config;
mod serve;

pub use analyze::run_analyze;
pub use ask::run_ask;
pub use chapters::run_chapters;
pub use compare::run_compare;
pub use config::run_config;
pub use serve::{router, run_serve, AppState};

use crate::config::Settings;
use crate::transcript::VideoBundle;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Read a bundle file, expanding `~` in the path.
fn load_bundle(path: &str) -> Result<VideoBundle> {
    let path = Settings::expand_path(path);
    VideoBundle::load(&path).with_context(|| format!("Failed to read bundle {}", path.display()))
}

fn bundle_paths(paths: &[String]) -> Vec<PathBuf> {
    paths.iter().map(|p| Settings::expand_path(p)).collect()
}
