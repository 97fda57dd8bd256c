//! Pipeline coordination for tutorscope.
//!
//! Ties the transcript and catalog collaborators to the analyzer stack, the
//! per-video indexes and the question answerer.

use crate::analysis::{AnalysisResult, SkillLevel, TranscriptAnalyzer};
use crate::chapters::{extract_chapters, generate_learning_summary, Chapter, LearningSummary};
use crate::chunking::{WordWindowChunker, FALLBACK_DURATION_MINUTES};
use crate::comments::{analyze_comments, CommentAnalysis, CommentSource, MAX_COMMENTS};
use crate::config::{Prompts, Settings};
use crate::embedding::{Embedder, EmbeddingService, OpenAIEmbedderLoader};
use crate::error::{Result, TutorError};
use crate::rag::{ChatGenerator, Generator, QaResponse, QuestionRequest, RagEngine};
use crate::recommend::{
    compare, explain_recommendation, learning_path, Candidate, Comparison, FailedVideo,
};
use crate::transcript::{
    extract_video_id, full_text, resolve_video_id, word_count, CatalogSource, TranscriptSegment,
    TranscriptSource, VideoMetadata,
};
use crate::vector_store::{IndexRegistry, IndexSummary, IndexedChunk, VideoIndex};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Everything known about one video after analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoReport {
    pub metadata: VideoMetadata,
    pub analysis: AnalysisResult,
    pub chapters: Vec<Chapter>,
    pub summary: LearningSummary,
    pub word_count: usize,
}

impl VideoReport {
    /// Outline a video from its catalog entry and an analysis of its transcript.
    pub fn new(
        metadata: VideoMetadata,
        segments: &[TranscriptSegment],
        analysis: AnalysisResult,
    ) -> Self {
        let chapters = extract_chapters(&metadata.description);
        let summary = generate_learning_summary(&chapters, &metadata.title);
        Self {
            word_count: word_count(segments),
            metadata,
            analysis,
            chapters,
            summary,
        }
    }
}

/// A comparison plus guidance for its recommended video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub comparison: Comparison,
    /// Reasons the recommended video came out on top.
    pub why_this_video: Vec<String>,
    pub summary: Option<LearningSummary>,
    pub learning_path: Vec<String>,
}

/// A video fetched from the collaborators, ready to analyze.
struct LoadedVideo {
    metadata: VideoMetadata,
    segments: Vec<TranscriptSegment>,
}

/// Fetches and analyzes videos. Needs no credentials.
#[derive(Clone)]
pub struct VideoAnalyst {
    analyzer: TranscriptAnalyzer,
    preferred_language: String,
    secondary_language: String,
    transcripts: Arc<dyn TranscriptSource>,
    catalog: Arc<dyn CatalogSource>,
    comments: Option<Arc<dyn CommentSource>>,
}

impl VideoAnalyst {
    pub fn new(
        settings: &Settings,
        transcripts: Arc<dyn TranscriptSource>,
        catalog: Arc<dyn CatalogSource>,
    ) -> Self {
        Self {
            analyzer: TranscriptAnalyzer::from_settings(&settings.analysis),
            preferred_language: settings.transcripts.preferred_language.clone(),
            secondary_language: settings.transcripts.secondary_language.clone(),
            transcripts,
            catalog,
            comments: None,
        }
    }

    /// Weigh viewer comments into comparisons.
    pub fn with_comments(mut self, comments: Arc<dyn CommentSource>) -> Self {
        self.comments = Some(comments);
        self
    }

    /// Run the analyzer stack over timed segments.
    pub fn analyze_segments(&self, segments: &[TranscriptSegment]) -> AnalysisResult {
        self.analyzer.analyze_segments(segments)
    }

    /// Fetch, analyze and outline one video, given its URL or id.
    #[instrument(skip(self))]
    pub async fn video_report(&self, video: &str) -> Result<VideoReport> {
        let video_id = resolve_video_id(video)?;
        let video = self.load_video(&video_id).await?;
        let analysis = self.analyze_blocking(video.segments.clone()).await?;

        let report = VideoReport::new(video.metadata, &video.segments, analysis);
        info!(
            "Analyzed '{}': {} ({} chapters)",
            report.metadata.title,
            report.analysis.skill_level,
            report.chapters.len()
        );
        Ok(report)
    }

    /// Analyze several videos concurrently and rank them for `target`.
    ///
    /// Inputs may be URLs or bare ids. Videos that fail to resolve or load
    /// are listed in the result; fewer than two successes is an error.
    #[instrument(skip(self, videos), fields(count = videos.len()))]
    pub async fn compare(&self, videos: &[String], target: SkillLevel) -> Result<ComparisonReport> {
        let outcomes = join_all(videos.iter().map(|input| async move {
            let id = resolve_video_id(input)?;
            let video = self.load_video(&id).await?;
            let analysis = self.analyze_blocking(video.segments.clone()).await?;
            let comments = self.comment_analysis(&id).await;
            Ok::<_, TutorError>((video, analysis, comments))
        }))
        .await;

        let mut candidates = Vec::new();
        let mut descriptions = HashMap::new();
        let mut failed = Vec::new();

        for (input, outcome) in videos.iter().zip(outcomes) {
            match outcome {
                Ok((video, analysis, comments)) => {
                    descriptions.insert(video.metadata.id.clone(), video.metadata.description.clone());
                    candidates.push(Candidate {
                        video_id: video.metadata.id,
                        title: video.metadata.title,
                        word_count: word_count(&video.segments),
                        analysis,
                        comments,
                    });
                }
                Err(e) => {
                    warn!("Skipping {} in comparison: {}", input, e);
                    failed.push(FailedVideo {
                        video_id: input.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if candidates.len() < 2 {
            return Err(TutorError::NotEnoughVideos {
                processed: candidates.len(),
                failed: failed
                    .iter()
                    .map(|f| format!("{}: {}", f.video_id, f.reason))
                    .collect(),
            });
        }

        let comparison = compare(candidates, target).with_failures(failed);

        let (why_this_video, summary, path) = match comparison.recommended() {
            Some(best) => {
                let description = descriptions.get(&best.video_id).map(String::as_str).unwrap_or("");
                let chapters = extract_chapters(description);
                (
                    explain_recommendation(best, target),
                    Some(generate_learning_summary(&chapters, &best.title)),
                    learning_path(&best.title, &chapters, best.analysis.skill_level, best.word_count),
                )
            }
            None => (Vec::new(), None, Vec::new()),
        };

        Ok(ComparisonReport {
            comparison,
            why_this_video,
            summary,
            learning_path: path,
        })
    }

    /// Catalog entry for a video.
    pub async fn metadata(&self, video_id: &str) -> Result<VideoMetadata> {
        self.catalog.fetch_metadata(video_id).await
    }

    /// Comment sentiment for a video. Fetch failures leave it unknown.
    async fn comment_analysis(&self, video_id: &str) -> Option<CommentAnalysis> {
        let source = self.comments.as_ref()?;
        match source.fetch_comments(video_id, MAX_COMMENTS).await {
            Ok(comments) => Some(analyze_comments(&comments)),
            Err(e) => {
                warn!("Could not read comments for {}: {}", video_id, e);
                None
            }
        }
    }

    async fn load_video(&self, video_id: &str) -> Result<LoadedVideo> {
        let metadata = self.catalog.fetch_metadata(video_id).await?;
        let segments = self
            .transcripts
            .fetch_transcript(video_id, &self.preferred_language, &self.secondary_language)
            .await?;
        if segments.is_empty() {
            return Err(TutorError::Transcript(format!("Empty transcript for {}", video_id)));
        }
        Ok(LoadedVideo { metadata, segments })
    }

    /// Run the analyzer stack on the blocking pool.
    async fn analyze_blocking(&self, segments: Vec<TranscriptSegment>) -> Result<AnalysisResult> {
        let analyzer = self.analyzer.clone();
        tokio::task::spawn_blocking(move || analyzer.analyze_segments(&segments))
            .await
            .map_err(|e| TutorError::Transcript(format!("Analysis task failed: {}", e)))
    }
}

/// The main entry point: analysis, indexing, questions and comparison.
pub struct Tutor {
    settings: Settings,
    analyst: VideoAnalyst,
    chunker: WordWindowChunker,
    embeddings: Arc<EmbeddingService>,
    registry: Arc<IndexRegistry>,
    rag: RagEngine,
}

impl Tutor {
    /// Create a tutor backed by the configured embedding and chat APIs.
    ///
    /// Fails with [`TutorError::ConfigMissing`] when the chat API key is
    /// absent. The embedding model is only loaded on first use.
    pub fn new(
        settings: Settings,
        transcripts: Arc<dyn TranscriptSource>,
        catalog: Arc<dyn CatalogSource>,
    ) -> Result<Self> {
        let generator = Arc::new(ChatGenerator::from_settings(&settings.generation)?);
        let embeddings = Arc::new(EmbeddingService::new(Arc::new(OpenAIEmbedderLoader::new(
            settings.embedding.clone(),
        ))));
        Self::with_components(settings, transcripts, catalog, embeddings, generator)
    }

    /// Create a tutor with custom components.
    pub fn with_components(
        settings: Settings,
        transcripts: Arc<dyn TranscriptSource>,
        catalog: Arc<dyn CatalogSource>,
        embeddings: Arc<EmbeddingService>,
        generator: Arc<dyn Generator>,
    ) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let registry = Arc::new(IndexRegistry::new());
        let rag = RagEngine::new(
            embeddings.clone(),
            registry.clone(),
            generator,
            settings.rag.clone(),
            &settings.generation,
        )
        .with_prompts(prompts);

        Ok(Self {
            analyst: VideoAnalyst::new(&settings, transcripts, catalog),
            chunker: WordWindowChunker::from_settings(&settings.chunking),
            embeddings,
            registry,
            rag,
            settings,
        })
    }

    /// Weigh viewer comments into comparisons.
    pub fn with_comments(mut self, comments: Arc<dyn CommentSource>) -> Self {
        self.analyst = self.analyst.with_comments(comments);
        self
    }

    /// Get the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get the analysis half of the pipeline.
    pub fn analyst(&self) -> &VideoAnalyst {
        &self.analyst
    }

    /// Get the index registry.
    pub fn registry(&self) -> Arc<IndexRegistry> {
        self.registry.clone()
    }

    /// Fetch, analyze and outline one video, given its URL or id.
    pub async fn video_report(&self, video: &str) -> Result<VideoReport> {
        self.analyst.video_report(video).await
    }

    /// Rank several videos, given as URLs or ids, for `target`.
    pub async fn compare(&self, videos: &[String], target: SkillLevel) -> Result<ComparisonReport> {
        self.analyst.compare(videos, target).await
    }

    /// Chunk, embed and index a transcript, replacing any earlier index for
    /// the video. Returns the number of chunks indexed.
    ///
    /// Text too short to chunk clears the video's index and returns zero.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn index_video(
        &self,
        video_id: &str,
        text: &str,
        duration_minutes: f64,
    ) -> Result<usize> {
        let build = self.registry.lock_video(video_id).await;
        let result = self.build_index(video_id, text, duration_minutes).await;
        self.registry.release(build).await;
        result
    }

    /// Runs with the video's build lock held.
    async fn build_index(&self, video_id: &str, text: &str, duration_minutes: f64) -> Result<usize> {
        let chunks = self.chunker.chunk(text, duration_minutes);
        if chunks.is_empty() {
            if self.registry.clear(video_id).await {
                info!("Cleared index for {}: transcript too short", video_id);
            }
            return Ok(0);
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = self.embeddings.embed_batch(&texts).await?;
        if embeddings.len() != chunks.len() {
            return Err(TutorError::Index(format!(
                "Got {} embeddings for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        let entries: Vec<IndexedChunk> = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| IndexedChunk { chunk, embedding })
            .collect();
        let count = entries.len();

        let index = self.registry.replace(VideoIndex::new(video_id, entries)).await;
        info!("Indexed {} chunks for {} (generation {})", count, video_id, index.generation);
        Ok(count)
    }

    /// Fetch a video's transcript and index it.
    pub async fn prepare_video(&self, video_id: &str) -> Result<usize> {
        self.prepare_with_duration(video_id, None).await
    }

    /// Like [`Tutor::prepare_video`], preferring `duration_minutes` over the
    /// catalog's duration.
    async fn prepare_with_duration(&self, video_id: &str, duration_minutes: Option<f64>) -> Result<usize> {
        let video = self.analyst.load_video(video_id).await?;
        let duration = duration_minutes
            .or_else(|| video.metadata.duration_minutes())
            .unwrap_or(FALLBACK_DURATION_MINUTES);
        self.index_video(video_id, &full_text(&video.segments), duration)
            .await
    }

    /// Answer a question, indexing the video first if it has no index.
    ///
    /// Indexing problems other than missing credentials leave the video
    /// unindexed, which yields the no-match answer.
    #[instrument(skip(self, request), fields(video_id = %request.video_id))]
    pub async fn ask(&self, request: &QuestionRequest) -> Result<QaResponse> {
        let has_question = !request.question.trim().is_empty();
        if has_question && self.registry.get(&request.video_id).await.is_none() {
            match self
                .prepare_with_duration(&request.video_id, request.duration_minutes)
                .await
            {
                Ok(count) => info!("Indexed {} chunks before answering", count),
                Err(e) if e.is_config_missing() => return Err(e),
                Err(e) => warn!("Could not index {}: {}", request.video_id, e),
            }
        }

        self.rag.ask(request).await
    }

    /// Answer a question about a video given by URL or id.
    ///
    /// Input that is not a recognizable URL is used as the id as-is. When the
    /// catalog has no entry the id stands in for the title.
    #[instrument(skip(self, question))]
    pub async fn ask_video(&self, video: &str, question: &str) -> Result<QaResponse> {
        let video_id = extract_video_id(video).unwrap_or_else(|| video.trim().to_string());

        let (video_title, duration_minutes) = match self.analyst.metadata(&video_id).await {
            Ok(metadata) => {
                let duration = metadata.duration_minutes();
                (metadata.title, duration)
            }
            Err(e) if e.is_config_missing() => return Err(e),
            Err(e) => {
                warn!("No catalog entry for {}: {}", video_id, e);
                (video_id.clone(), None)
            }
        };

        self.ask(&QuestionRequest {
            question: question.to_string(),
            video_id,
            video_title,
            duration_minutes,
        })
        .await
    }

    /// Summaries of all live indexes.
    pub async fn indexes(&self) -> Vec<IndexSummary> {
        self.registry.list().await
    }
}
