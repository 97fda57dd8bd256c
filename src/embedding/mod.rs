//! Embedding generation for chunk retrieval.
//!
//! The embedding model is expensive to set up, so it is reached through an
//! [`EmbeddingService`] handle that loads it on first use and shares it
//! between the indexer and the question answerer.

#[cfg(test)]
mod hashing;
mod openai;

#[cfg(test)]
pub use hashing::HashingEmbedder;
pub use openai::{OpenAIEmbedder, OpenAIEmbedderLoader};

use crate::error::{Result, TutorError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

/// Trait for embedding generation.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Get the embedding dimensions.
    fn dimensions(&self) -> usize;
}

/// Constructs the embedding model when it is first needed.
#[async_trait]
pub trait EmbedderLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn Embedder>>;

    /// Dimensions of the model this loader produces.
    fn dimensions(&self) -> usize;
}

/// Lazily loaded, shared embedding model.
///
/// Construction is cheap; the loader runs on the first embed call and at
/// most once, even when several tasks ask at the same time. A failed load
/// is not cached, so a later call tries again.
pub struct EmbeddingService {
    loader: Option<Arc<dyn EmbedderLoader>>,
    model: OnceCell<Arc<dyn Embedder>>,
}

impl EmbeddingService {
    pub fn new(loader: Arc<dyn EmbedderLoader>) -> Self {
        Self {
            loader: Some(loader),
            model: OnceCell::new(),
        }
    }

    /// A service around an already constructed model.
    pub fn preloaded(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            loader: None,
            model: OnceCell::new_with(Some(embedder)),
        }
    }

    /// Whether the model has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    /// The model, loading it if needed.
    pub async fn model(&self) -> Result<&Arc<dyn Embedder>> {
        self.model
            .get_or_try_init(|| async {
                let loader = self
                    .loader
                    .as_ref()
                    .ok_or_else(|| TutorError::Embedding("No embedding model loader".to_string()))?;
                info!("Loading embedding model");
                loader.load().await
            })
            .await
    }
}

#[async_trait]
impl Embedder for EmbeddingService {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.model().await?.embed(text).await
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.model().await?.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        match (self.model.get(), &self.loader) {
            (Some(model), _) => model.dimensions(),
            (None, Some(loader)) => loader.dimensions(),
            (None, None) => 0,
        }
    }
}
