//! Answer generation over an OpenAI-compatible chat completions API.

use crate::config::GenerationSettings;
use crate::error::{Result, TutorError};
use crate::openai::{api_key_from_env, create_client_with_timeout};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// A single-turn completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Produces answer text for a prompt.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Model name, for logs and display.
    fn model(&self) -> &str;
}

/// Chat completions client (Groq by default).
pub struct ChatGenerator {
    client: async_openai::Client<OpenAIConfig>,
    model: String,
}

impl ChatGenerator {
    /// Create a generator from settings, reading the API key from the
    /// configured environment variable.
    pub fn from_settings(settings: &GenerationSettings) -> Result<Self> {
        let api_key = api_key_from_env(&settings.api_key_env)?;
        let client = create_client_with_timeout(
            &settings.api_base,
            &api_key,
            Duration::from_secs(settings.timeout_seconds),
        )?;
        Ok(Self::with_client(client, &settings.model))
    }

    pub fn with_client(client: async_openai::Client<OpenAIConfig>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl Generator for ChatGenerator {
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(request.system)
                .build()
                .map_err(|e| TutorError::Generation(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(request.prompt)
                .build()
                .map_err(|e| TutorError::Generation(e.to_string()))?
                .into(),
        ];

        let completion = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(request.temperature)
            .max_completion_tokens(request.max_tokens)
            .build()
            .map_err(|e| TutorError::Generation(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(completion)
            .await
            .map_err(|e| TutorError::OpenAI(format!("Failed to generate answer: {}", e)))?;

        let answer = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| TutorError::Generation("Empty response from model".to_string()))?;

        debug!("Generated {} chars", answer.len());
        Ok(answer)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
