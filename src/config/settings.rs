//! Configuration settings for tutorscope.

use crate::analysis::{EnglishRubric, HindiRubric};
use crate::error::{Result, TutorError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub analysis: AnalysisSettings,
    pub chunking: ChunkingSettings,
    pub embedding: EmbeddingSettings,
    pub generation: GenerationSettings,
    pub rag: RagSettings,
    pub transcripts: TranscriptSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Analyzer and classifier settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Rubric applied to English transcripts.
    pub english: EnglishRubric,
    /// Rubric applied to Hindi transcripts. Calibrated separately; the
    /// thresholds and teaching bonus are pending recalibration.
    pub hindi: HindiRubric,
    /// Additional terms merged into the built-in technical dictionary.
    pub extra_technical_terms: Vec<String>,
}

/// Transcript chunking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    /// Words per chunk window.
    pub words_per_chunk: usize,
    /// Seconds added on each side of a chunk's estimated position.
    pub range_padding_seconds: u32,
    /// Transcripts shorter than this (trimmed, in characters) are not indexed.
    pub min_text_chars: usize,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            words_per_chunk: 100,
            range_padding_seconds: 22,
            min_text_chars: 50,
        }
    }
}

/// Embedding generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Embedding model to use. Must be multilingual (English and Hindi at least).
    pub model: String,
    /// Embedding dimensions.
    pub dimensions: u32,
    /// Base URL of the OpenAI-compatible embeddings API.
    pub api_base: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            model: "text-embedding-3-small".to_string(),
            dimensions: 1536,
            api_base: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// Answer generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Base URL of the OpenAI-compatible chat completions API.
    pub api_base: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Chat model used for answers.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum completion tokens.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.groq.com/openai/v1".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.1,
            max_tokens: 600,
            timeout_seconds: 60,
        }
    }
}

/// Retrieval and answer synthesis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RagSettings {
    /// Number of chunks retrieved per question.
    pub top_k: usize,
    /// Number of retrieved chunks placed in the prompt.
    pub context_chunks: usize,
    /// Characters kept from each prompt excerpt.
    pub excerpt_chars: usize,
    /// Time ranges cited on a generated answer.
    pub cited_ranges: usize,
    /// Characters kept from the best chunk in an extractive answer.
    pub extractive_chars: usize,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self {
            top_k: 6,
            context_chunks: 3,
            excerpt_chars: 300,
            cited_ranges: 2,
            extractive_chars: 400,
        }
    }
}

/// Transcript track selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Language tried first.
    pub preferred_language: String,
    /// Language tried when the preferred one is missing.
    pub secondary_language: String,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            preferred_language: "en".to_string(),
            secondary_language: "hi".to_string(),
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TutorError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tutorscope")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}
