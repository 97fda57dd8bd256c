//! CLI module for tutorscope.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use crate::analysis::SkillLevel;
use clap::{Parser, Subcommand, ValueEnum};

/// tutorscope - Video transcript difficulty analysis and Q&A
///
/// Rates tutorial videos for a learner's level, outlines their chapters and
/// answers questions grounded in the transcript.
#[derive(Parser, Debug)]
#[command(name = "tutorscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a video's difficulty (language, readability, jargon, pacing, level)
    Analyze {
        /// Path to a video bundle JSON file
        bundle: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a video's chapters and learning summary
    Chapters {
        /// Path to a video bundle JSON file
        bundle: String,
    },

    /// Ask a question about a video
    Ask {
        /// Path to a video bundle JSON file
        bundle: String,

        /// The question to ask
        question: String,
    },

    /// Compare videos and recommend one for a target level
    Compare {
        /// Paths to two or more video bundle JSON files
        #[arg(required = true, num_args = 2..)]
        bundles: Vec<String>,

        /// Learner's target level
        #[arg(short, long, value_enum, default_value = "beginner")]
        target: TargetLevel,
    },

    /// Start HTTP API server for integration with other systems
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Video bundle JSON files to serve
        #[arg(short, long = "bundle")]
        bundles: Vec<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Skill level accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<TargetLevel> for SkillLevel {
    fn from(level: TargetLevel) -> Self {
        match level {
            TargetLevel::Beginner => SkillLevel::Beginner,
            TargetLevel::Intermediate => SkillLevel::Intermediate,
            TargetLevel::Advanced => SkillLevel::Advanced,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
