//! Registry owning the live index of every processed video.

use super::{IndexSummary, VideoIndex};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::debug;

/// Registry key for a video id: `vid_` followed by the id with `-` and `.`
/// replaced by `_`.
pub fn sanitize_key(video_id: &str) -> String {
    format!("vid_{}", video_id.replace(['-', '.'], "_"))
}

/// Exclusive build access for one key, from [`IndexRegistry::lock_video`].
/// Hand it back with [`IndexRegistry::release`].
pub struct BuildGuard {
    key: String,
    guard: OwnedMutexGuard<()>,
}

/// Holds at most one live index per key.
///
/// Builds for the same key are serialized through [`IndexRegistry::lock_video`].
/// A key's build lock is dropped again once no build holds or awaits it.
/// Finished indexes are swapped in whole, so readers holding an `Arc` from
/// [`IndexRegistry::get`] keep a consistent snapshot while a rebuild runs.
#[derive(Default)]
pub struct IndexRegistry {
    indexes: RwLock<HashMap<String, Arc<VideoIndex>>>,
    build_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusive build access for a video. Hold the guard from chunking
    /// until [`IndexRegistry::replace`] or [`IndexRegistry::clear`] returns.
    pub async fn lock_video(&self, video_id: &str) -> BuildGuard {
        let key = sanitize_key(video_id);
        let lock = {
            let mut locks = self.build_locks.lock().await;
            locks
                .entry(key.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        BuildGuard {
            key,
            guard: lock.lock_owned().await,
        }
    }

    /// End a build, forgetting the key's lock if nobody else holds or
    /// awaits it.
    pub async fn release(&self, build: BuildGuard) {
        let BuildGuard { key, guard } = build;
        drop(guard);

        let mut locks = self.build_locks.lock().await;
        // The map's own handle is the only one left.
        if locks.get(&key).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(&key);
        }
    }

    /// Install `index`, dropping whatever was live for its key.
    pub async fn replace(&self, index: VideoIndex) -> Arc<VideoIndex> {
        let index = Arc::new(index);
        let previous = self
            .indexes
            .write()
            .await
            .insert(index.key.clone(), index.clone());

        match previous {
            Some(old) => debug!(
                key = %index.key,
                old_generation = %old.generation,
                new_generation = %index.generation,
                chunks = index.len(),
                "Replaced index"
            ),
            None => debug!(key = %index.key, chunks = index.len(), "Created index"),
        }
        index
    }

    /// Remove a video's index. Returns whether one existed.
    pub async fn clear(&self, video_id: &str) -> bool {
        self.indexes
            .write()
            .await
            .remove(&sanitize_key(video_id))
            .is_some()
    }

    /// The live index for a video, if any.
    pub async fn get(&self, video_id: &str) -> Option<Arc<VideoIndex>> {
        self.indexes.read().await.get(&sanitize_key(video_id)).cloned()
    }

    pub async fn list(&self) -> Vec<IndexSummary> {
        let mut summaries: Vec<IndexSummary> = self
            .indexes
            .read()
            .await
            .values()
            .map(|index| index.summary())
            .collect();
        summaries.sort_by(|a, b| b.built_at.cmp(&a.built_at));
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::{Chunk, TimeRange};
    use crate::vector_store::IndexedChunk;

    fn index_with(video_id: &str, texts: &[&str]) -> VideoIndex {
        let entries = texts
            .iter()
            .enumerate()
            .map(|(i, t)| IndexedChunk {
                chunk: Chunk {
                    text: t.to_string(),
                    time_range: TimeRange::new(0, 44),
                    word_count: 1,
                    sequence_index: i,
                },
                embedding: vec![1.0, 0.0],
            })
            .collect();
        VideoIndex::new(video_id, entries)
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("dQw4w9WgXcQ"), "vid_dQw4w9WgXcQ");
        assert_eq!(sanitize_key("a-b.c_d"), "vid_a_b_c_d");
    }

    #[tokio::test]
    async fn test_replace_not_merge() {
        let registry = IndexRegistry::new();
        registry.replace(index_with("v-1", &["one", "two", "three"])).await;
        let first = registry.get("v-1").await.unwrap();

        registry.replace(index_with("v-1", &["fresh"])).await;
        let second = registry.get("v-1").await.unwrap();

        assert_eq!(second.len(), 1);
        assert_eq!(second.entries()[0].chunk.text, "fresh");
        assert_ne!(first.generation, second.generation);
        // A reader holding the old snapshot still sees it intact.
        assert_eq!(first.len(), 3);
        assert_eq!(registry.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_ids_sharing_a_key_share_an_index() {
        let registry = IndexRegistry::new();
        registry.replace(index_with("a-b", &["x"])).await;
        assert!(registry.get("a.b").await.is_some());
    }

    #[tokio::test]
    async fn test_clear() {
        let registry = IndexRegistry::new();
        assert!(!registry.clear("v").await);
        registry.replace(index_with("v", &["x"])).await;
        assert!(registry.clear("v").await);
        assert!(registry.get("v").await.is_none());
    }

    #[tokio::test]
    async fn test_builds_for_same_video_serialize() {
        let registry = Arc::new(IndexRegistry::new());
        let guard = registry.lock_video("v").await;

        let other = registry.clone();
        let waiter = tokio::spawn(async move {
            let build = other.lock_video("v").await;
            other.replace(index_with("v", &["second"])).await;
            other.release(build).await;
        });

        registry.replace(index_with("v", &["first"])).await;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(registry.get("v").await.unwrap().entries()[0].chunk.text, "first");

        // The waiter still needs the lock, so releasing keeps it.
        registry.release(guard).await;
        waiter.await.unwrap();
        assert_eq!(registry.get("v").await.unwrap().entries()[0].chunk.text, "second");
        assert!(registry.build_locks.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_release_forgets_idle_locks() {
        let registry = IndexRegistry::new();
        for id in ["a", "b", "c"] {
            let build = registry.lock_video(id).await;
            registry.replace(index_with(id, &["x"])).await;
            registry.release(build).await;
        }
        assert!(registry.build_locks.lock().await.is_empty());
        assert_eq!(registry.list().await.len(), 3);
    }
}
