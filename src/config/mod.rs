//! Configuration module for tutorscope.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, RagPrompts};
pub use settings::{
    AnalysisSettings, ChunkingSettings, EmbeddingSettings, GeneralSettings, GenerationSettings,
    PromptSettings, RagSettings, Settings, TranscriptSettings,
};
