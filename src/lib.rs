//! tutorscope - Video transcript difficulty analysis and Q&A
//!
//! Rates tutorial videos for a learner's level and answers questions
//! grounded in their transcripts.
//!
//! # Overview
//!
//! tutorscope allows you to:
//! - Classify a transcript as Beginner, Intermediate or Advanced from its
//!   readability, jargon density and speaking pace (English and Hindi)
//! - Extract chapter timestamps from a video description and summarize them
//! - Ask questions about a video and get answers cited to time ranges
//! - Compare several videos and get a recommendation for a target level,
//!   weighing in what viewers said in the comments
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `transcript` - Transcript and catalog sources, video bundles
//! - `analysis` - Language, readability, jargon, pacing and skill level
//! - `chapters` - Chapter extraction and learning summaries
//! - `comments` - Viewer comment sentiment
//! - `chunking` - Fixed-size word windows with estimated time ranges
//! - `embedding` - Embedding generation behind a lazily loaded handle
//! - `vector_store` - Per-video similarity indexes
//! - `rag` - Question answering with generated, extractive and empty tiers
//! - `recommend` - Scoring, comparison and study guidance
//! - `orchestrator` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use tutorscope::config::Settings;
//! use tutorscope::orchestrator::Tutor;
//! use tutorscope::transcript::VideoBundle;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let bundle = Arc::new(VideoBundle::load(Path::new("python-basics.json"))?);
//!     let tutor = Tutor::new(settings, bundle.clone(), bundle.clone())?;
//!
//!     let report = tutor.video_report(&bundle.metadata.id).await?;
//!     println!("{}: {}", report.metadata.title, report.analysis.skill_level);
//!
//!     let answer = tutor.ask_video(&bundle.metadata.id, "What is a list?").await?;
//!     println!("{}", answer.format_for_display());
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod chapters;
pub mod chunking;
pub mod cli;
pub mod comments;
pub mod config;
pub mod embedding;
pub mod error;
pub mod openai;
pub mod orchestrator;
pub mod rag;
pub mod recommend;
pub mod transcript;
pub mod vector_store;

pub use error::{Result, TutorError};
