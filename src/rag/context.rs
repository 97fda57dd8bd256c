//! Context retrieval for question answering.

use crate::embedding::{Embedder, EmbeddingService};
use crate::error::Result;
use crate::vector_store::{IndexRegistry, SearchResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// Retrieves the chunks of one video most similar to a question.
pub struct ContextBuilder {
    embeddings: Arc<EmbeddingService>,
    registry: Arc<IndexRegistry>,
    max_chunks: usize,
}

impl ContextBuilder {
    pub fn new(embeddings: Arc<EmbeddingService>, registry: Arc<IndexRegistry>) -> Self {
        Self {
            embeddings,
            registry,
            max_chunks: 6,
        }
    }

    /// Set the maximum number of retrieved chunks.
    pub fn with_max_chunks(mut self, max_chunks: usize) -> Self {
        self.max_chunks = max_chunks;
        self
    }

    /// Retrieve chunks for `question`, best first.
    ///
    /// A video with no index, or an empty one, yields nothing. Embedding
    /// failures also yield nothing, except missing credentials, which are
    /// returned as errors.
    pub async fn build(&self, video_id: &str, question: &str) -> Result<Vec<SearchResult>> {
        let Some(index) = self.registry.get(video_id).await else {
            debug!("No index for video {}", video_id);
            return Ok(Vec::new());
        };
        if index.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = match self.embeddings.embed(question).await {
            Ok(embedding) => embedding,
            Err(e) if e.is_config_missing() => return Err(e),
            Err(e) => {
                warn!("Question embedding failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let mut results = index.search(&query_embedding, self.max_chunks);
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        debug!(
            "Retrieved {} chunks from index generation {}",
            results.len(),
            index.generation
        );
        Ok(results)
    }
}

/// Format retrieved chunks for the prompt: the first `max_chunks`, each as
/// `[MM:SS-MM:SS]: text` truncated to `excerpt_chars` characters.
pub fn format_context_for_prompt(
    results: &[SearchResult],
    max_chunks: usize,
    excerpt_chars: usize,
) -> String {
    results
        .iter()
        .take(max_chunks)
        .map(|r| format!("[{}]: {}", r.chunk.time_range, r.chunk.excerpt(excerpt_chars)))
        .collect::<Vec<_>>()
        .join("\n\n")
}
