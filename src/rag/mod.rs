//! Retrieval-augmented question answering about a single video.
//!
//! Answers come from one of three tiers: a generated answer grounded in
//! retrieved excerpts, the best excerpt quoted verbatim when generation
//! fails, or an honest no-match statement when nothing was retrieved.

pub mod context;
mod engine;
mod format;
mod generator;
mod response;

pub use context::ContextBuilder;
pub use engine::RagEngine;
pub use format::clean_formatting;
pub use generator::{ChatGenerator, CompletionRequest, Generator};
pub use response::{synthesize, AnswerSource, Confidence, Generation, QaResponse};

use serde::{Deserialize, Serialize};

/// A question about one video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    pub video_id: String,
    pub video_title: String,
    /// Video length, used when the video has to be indexed first.
    #[serde(default)]
    pub duration_minutes: Option<f64>,
}
