//! Error types for tutorscope.

use thiserror::Error;

/// Library-level error type for tutorscope operations.
#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing configuration: {0}")]
    ConfigMissing(String),

    #[error("Transcript unavailable: {0}")]
    Transcript(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    #[error("Similarity index error: {0}")]
    Index(String),

    #[error("Answer generation failed: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Video not found: {0}")]
    VideoNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Only {processed} video(s) could be processed; at least 2 are needed to compare")]
    NotEnoughVideos {
        processed: usize,
        failed: Vec<String>,
    },
}

impl TutorError {
    /// Whether this error is a missing-credentials failure that must surface
    /// to the caller instead of degrading.
    pub fn is_config_missing(&self) -> bool {
        matches!(self, TutorError::ConfigMissing(_))
    }
}

/// Result type alias for tutorscope operations.
pub type Result<T> = std::result::Result<T, TutorError>;
