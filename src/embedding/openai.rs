//! Embeddings over an OpenAI-compatible API.

use super::{Embedder, EmbedderLoader};
use crate::config::EmbeddingSettings;
use crate::error::{Result, TutorError};
use crate::openai::{api_key_from_env, create_client};
use async_openai::config::OpenAIConfig;
use async_openai::types::{CreateEmbeddingRequestArgs, EmbeddingInput};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Inputs sent per API request.
const BATCH_SIZE: usize = 100;

/// OpenAI-compatible embedder.
pub struct OpenAIEmbedder {
    client: async_openai::Client<OpenAIConfig>,
    model: String,
    dimensions: usize,
}

impl OpenAIEmbedder {
    /// Create an embedder from settings, reading the API key from the
    /// configured environment variable.
    pub fn from_settings(settings: &EmbeddingSettings) -> Result<Self> {
        let api_key = api_key_from_env(&settings.api_key_env)?;
        Self::with_client(
            create_client(&settings.api_base, &api_key)?,
            &settings.model,
            settings.dimensions as usize,
        )
    }

    /// Create an embedder around an existing client.
    pub fn with_client(
        client: async_openai::Client<OpenAIConfig>,
        model: &str,
        dimensions: usize,
    ) -> Result<Self> {
        if dimensions == 0 {
            return Err(TutorError::Config(
                "Embedding dimensions must be positive".to_string(),
            ));
        }
        Ok(Self {
            client,
            model: model.to_string(),
            dimensions,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Embedder for OpenAIEmbedder {
    #[instrument(skip(self, text))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| TutorError::Embedding("Empty embedding response".to_string()))
    }

    #[instrument(skip(self, texts), fields(count = texts.len()))]
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Generating embeddings for {} texts", texts.len());
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for batch in texts.chunks(BATCH_SIZE) {
            let request = CreateEmbeddingRequestArgs::default()
                .model(&self.model)
                .input(EmbeddingInput::StringArray(batch.to_vec()))
                .dimensions(self.dimensions as u32)
                .build()
                .map_err(|e| TutorError::Embedding(format!("Failed to build request: {}", e)))?;

            let response = self
                .client
                .embeddings()
                .create(request)
                .await
                .map_err(|e| TutorError::OpenAI(format!("Embedding API error: {}", e)))?;

            let mut data = response.data;
            if data.len() != batch.len() {
                return Err(TutorError::Embedding(format!(
                    "Expected {} embeddings, got {}",
                    batch.len(),
                    data.len()
                )));
            }
            data.sort_by_key(|e| e.index);
            all_embeddings.extend(data.into_iter().map(|e| e.embedding));
        }

        debug!("Generated {} embeddings", all_embeddings.len());
        Ok(all_embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Builds an [`OpenAIEmbedder`] on first use.
pub struct OpenAIEmbedderLoader {
    settings: EmbeddingSettings,
}

impl OpenAIEmbedderLoader {
    pub fn new(settings: EmbeddingSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl EmbedderLoader for OpenAIEmbedderLoader {
    async fn load(&self) -> Result<Arc<dyn Embedder>> {
        let embedder = OpenAIEmbedder::from_settings(&self.settings)?;
        debug!("Embedding model {} ready", embedder.model());
        Ok(Arc::new(embedder))
    }

    fn dimensions(&self) -> usize {
        self.settings.dimensions as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedder_creation() {
        let client = create_client("https://api.openai.com/v1", "test-key").unwrap();
        let embedder = OpenAIEmbedder::with_client(client, "text-embedding-3-large", 3072).unwrap();
        assert_eq!(embedder.dimensions(), 3072);
        assert_eq!(embedder.model(), "text-embedding-3-large");
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let client = create_client("https://api.openai.com/v1", "test-key").unwrap();
        assert!(OpenAIEmbedder::with_client(client, "m", 0).is_err());
    }

    #[tokio::test]
    async fn test_loader_without_key_is_config_missing() {
        let settings = EmbeddingSettings {
            api_key_env: "TUTORSCOPE_EMBED_KEY_NEVER_SET".to_string(),
            ..Default::default()
        };
        let loader = OpenAIEmbedderLoader::new(settings);
        assert_eq!(loader.dimensions(), 1536);
        let err = loader.load().await.err().unwrap();
        assert!(err.is_config_missing());
    }
}
