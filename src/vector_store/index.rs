//! A single video's embedded chunks.

use super::{cosine_similarity, IndexSummary, IndexedChunk, SearchResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Immutable once built; a rebuild produces a new index with a new
/// generation id.
#[derive(Debug, Clone)]
pub struct VideoIndex {
    pub video_id: String,
    /// Sanitized registry key.
    pub key: String,
    pub generation: Uuid,
    pub built_at: DateTime<Utc>,
    entries: Vec<IndexedChunk>,
}

impl VideoIndex {
    pub fn new(video_id: &str, entries: Vec<IndexedChunk>) -> Self {
        Self {
            video_id: video_id.to_string(),
            key: super::sanitize_key(video_id),
            generation: Uuid::new_v4(),
            built_at: Utc::now(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexedChunk] {
        &self.entries
    }

    /// The `limit` most similar chunks, best first. Equal scores keep chunk
    /// order.
    pub fn search(&self, query_embedding: &[f32], limit: usize) -> Vec<SearchResult> {
        let mut results: Vec<SearchResult> = self
            .entries
            .iter()
            .map(|entry| SearchResult {
                chunk: entry.chunk.clone(),
                score: cosine_similarity(query_embedding, &entry.embedding),
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(limit);
        results
    }

    pub fn summary(&self) -> IndexSummary {
        IndexSummary {
            video_id: self.video_id.clone(),
            key: self.key.clone(),
            generation: self.generation,
            chunk_count: self.entries.len(),
            built_at: self.built_at,
        }
    }
}
