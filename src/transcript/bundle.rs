//! JSON bundle holding a video's metadata and transcript tracks.
//!
//! ```json
//! {
//!   "id": "dQw4w9WgXcQ",
//!   "title": "Python for Beginners",
//!   "description": "00:00 - Intro\n02:15 - Variables",
//!   "duration_seconds": 1260,
//!   "tracks": [
//!     { "language_code": "en", "generated": false,
//!       "segments": [{ "text": "hello", "start": 0.0 }] }
//!   ],
//!   "comments": ["Thank you, very clear!"]
//! }
//! ```

use super::{resolve_video_id, CatalogSource, TranscriptSource, TranscriptTrack, VideoMetadata};
use crate::comments::CommentSource;
use crate::error::{Result, TutorError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single video's catalog entry and transcripts, read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoBundle {
    #[serde(flatten)]
    pub metadata: VideoMetadata,
    #[serde(default)]
    pub tracks: Vec<TranscriptTrack>,
    /// Top-level viewer comments, most relevant first.
    #[serde(default)]
    pub comments: Vec<String>,
}

impl VideoBundle {
    /// Read a bundle from a JSON file.
    ///
    /// The `id` field may also be a video URL; it is stored as the bare id.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut bundle: VideoBundle = serde_json::from_str(&content)?;
        bundle.metadata.id = resolve_video_id(&bundle.metadata.id)?;
        debug!(
            "Loaded bundle {} with {} tracks from {:?}",
            bundle.metadata.id,
            bundle.tracks.len(),
            path
        );
        Ok(bundle)
    }

    fn ensure_id(&self, video_id: &str) -> Result<()> {
        if self.metadata.id == video_id {
            Ok(())
        } else {
            Err(TutorError::VideoNotFound(video_id.to_string()))
        }
    }
}

#[async_trait]
impl TranscriptSource for VideoBundle {
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<TranscriptTrack>> {
        self.ensure_id(video_id)?;
        Ok(self.tracks.clone())
    }
}

#[async_trait]
impl CatalogSource for VideoBundle {
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata> {
        self.ensure_id(video_id)?;
        Ok(self.metadata.clone())
    }
}

#[async_trait]
impl CommentSource for VideoBundle {
    async fn fetch_comments(&self, video_id: &str, max: usize) -> Result<Vec<String>> {
        self.ensure_id(video_id)?;
        Ok(self.comments.iter().take(max).cloned().collect())
    }
}

/// Several bundles served by video id.
#[derive(Debug, Clone, Default)]
pub struct BundleLibrary {
    bundles: HashMap<String, VideoBundle>,
}

impl BundleLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every bundle file; a later file with the same id replaces an
    /// earlier one.
    pub fn load_all(paths: &[PathBuf]) -> Result<Self> {
        let mut library = Self::new();
        for path in paths {
            library.insert(VideoBundle::load(path)?);
        }
        Ok(library)
    }

    pub fn insert(&mut self, bundle: VideoBundle) {
        self.bundles.insert(bundle.metadata.id.clone(), bundle);
    }

    pub fn get(&self, video_id: &str) -> Option<&VideoBundle> {
        self.bundles.get(video_id)
    }

    /// Ids in sorted order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.bundles.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    fn bundle(&self, video_id: &str) -> Result<&VideoBundle> {
        self.get(video_id)
            .ok_or_else(|| TutorError::VideoNotFound(video_id.to_string()))
    }
}

#[async_trait]
impl TranscriptSource for BundleLibrary {
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<TranscriptTrack>> {
        self.bundle(video_id)?.list_tracks(video_id).await
    }
}

#[async_trait]
impl CatalogSource for BundleLibrary {
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata> {
        self.bundle(video_id)?.fetch_metadata(video_id).await
    }
}

#[async_trait]
impl CommentSource for BundleLibrary {
    async fn fetch_comments(&self, video_id: &str, max: usize) -> Result<Vec<String>> {
        self.bundle(video_id)?.fetch_comments(video_id, max).await
    }
}
