//! Question answering over a video's index.

use super::context::{format_context_for_prompt, ContextBuilder};
use super::generator::{CompletionRequest, Generator};
use super::response::{synthesize, Generation, QaResponse};
use super::QuestionRequest;
use crate::config::{GenerationSettings, Prompts, RagSettings};
use crate::embedding::EmbeddingService;
use crate::error::Result;
use crate::vector_store::{IndexRegistry, SearchResult};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// RAG engine for question answering.
pub struct RagEngine {
    context_builder: ContextBuilder,
    generator: Arc<dyn Generator>,
    prompts: Prompts,
    settings: RagSettings,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl RagEngine {
    pub fn new(
        embeddings: Arc<EmbeddingService>,
        registry: Arc<IndexRegistry>,
        generator: Arc<dyn Generator>,
        settings: RagSettings,
        generation: &GenerationSettings,
    ) -> Self {
        let context_builder =
            ContextBuilder::new(embeddings, registry).with_max_chunks(settings.top_k);

        Self {
            context_builder,
            generator,
            prompts: Prompts::default(),
            settings,
            temperature: generation.temperature,
            max_tokens: generation.max_tokens,
            timeout: Duration::from_secs(generation.timeout_seconds),
        }
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Answer a question about one video.
    ///
    /// Retrieval problems and generation failures lower the answer tier;
    /// only missing credentials are errors. A blank question gets the
    /// no-match answer without touching the index.
    #[instrument(skip(self, request), fields(video_id = %request.video_id))]
    pub async fn ask(&self, request: &QuestionRequest) -> Result<QaResponse> {
        let question = request.question.trim();
        if question.is_empty() {
            info!("Blank question, nothing to retrieve");
            return Ok(synthesize(question, &request.video_title, &[], None, &self.settings));
        }
        info!("Processing question: {}", question);

        let retrieved = self.context_builder.build(&request.video_id, question).await?;

        let generation = if retrieved.is_empty() {
            None
        } else {
            Some(self.generate(question, &request.video_title, &retrieved).await)
        };

        let response = synthesize(
            question,
            &request.video_title,
            &retrieved,
            generation,
            &self.settings,
        );
        info!(source = ?response.source, chunks = retrieved.len(), "Answered question");
        Ok(response)
    }

    async fn generate(&self, question: &str, title: &str, retrieved: &[SearchResult]) -> Generation {
        let mut vars = HashMap::new();
        vars.insert("video_title".to_string(), title.to_string());
        vars.insert("question".to_string(), question.to_string());
        vars.insert(
            "context".to_string(),
            format_context_for_prompt(
                retrieved,
                self.settings.context_chunks,
                self.settings.excerpt_chars,
            ),
        );

        let request = CompletionRequest {
            system: self.prompts.render_with_custom(&self.prompts.rag.system, &vars),
            prompt: self.prompts.render_with_custom(&self.prompts.rag.user, &vars),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        match tokio::time::timeout(self.timeout, self.generator.complete(request)).await {
            Ok(Ok(text)) => Generation::Answered(text),
            Ok(Err(e)) => {
                warn!("Generation with {} failed: {}", self.generator.model(), e);
                Generation::Failed(e.to_string())
            }
            Err(_) => {
                warn!("Generation with {} timed out", self.generator.model());
                Generation::Failed("timed out".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::WordWindowChunker;
    use crate::error::TutorError;
    use crate::embedding::{Embedder, HashingEmbedder};
    use crate::rag::{AnswerSource, Confidence};
    use crate::vector_store::{IndexedChunk, VideoIndex};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedGenerator {
        reply: Result<String>,
        prompts: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedGenerator {
        fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Err(TutorError::Generation("upstream down".to_string())),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Generator for ScriptedGenerator {
        async fn complete(&self, request: CompletionRequest) -> Result<String> {
            self.prompts.lock().unwrap().push(request);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(TutorError::Generation(e.to_string())),
            }
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }

    const TRANSCRIPT: &str = "Decorators wrap a function to add behaviour without changing it. \
        You write the at sign above the function definition. Later we cover generators, \
        which yield values lazily one at a time instead of building a whole list in memory. \
        Finally we talk about context managers and the with statement for cleanup.";

    async fn indexed(embeddings: &Arc<EmbeddingService>) -> Arc<IndexRegistry> {
        let chunks = WordWindowChunker::new(12, 22, 50).chunk(TRANSCRIPT, 10.0);
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let vectors = embeddings.embed_batch(&texts).await.unwrap();
        let entries = chunks
            .into_iter()
            .zip(vectors)
            .map(|(chunk, embedding)| IndexedChunk { chunk, embedding })
            .collect();

        let registry = Arc::new(IndexRegistry::new());
        registry.replace(VideoIndex::new("py-adv", entries)).await;
        registry
    }

    fn request(question: &str) -> QuestionRequest {
        QuestionRequest {
            question: question.to_string(),
            video_id: "py-adv".to_string(),
            video_title: "Advanced Python".to_string(),
            duration_minutes: Some(10.0),
        }
    }

    fn engine(registry: Arc<IndexRegistry>, embeddings: Arc<EmbeddingService>, generator: Arc<dyn Generator>) -> RagEngine {
        RagEngine::new(
            embeddings,
            registry,
            generator,
            RagSettings::default(),
            &GenerationSettings::default(),
        )
    }

    fn embeddings() -> Arc<EmbeddingService> {
        Arc::new(EmbeddingService::preloaded(Arc::new(HashingEmbedder::new(1024))))
    }

    #[tokio::test]
    async fn test_generated_answer_uses_prompt_template() {
        let embeddings = embeddings();
        let registry = indexed(&embeddings).await;
        let generator = ScriptedGenerator::answering("🎯 **Nice!**\n📘 **Quick Answer:**\nThey wrap functions.");
        let engine = engine(registry, embeddings, generator.clone());

        let response = engine.ask(&request("How do decorators wrap a function?")).await.unwrap();
        assert_eq!(response.source, AnswerSource::Generated);
        assert_eq!(response.confidence, Confidence::High);
        assert_eq!(response.cited_time_ranges.len(), 2);
        assert!(response.answer.contains("\n\n📘"));

        let sent = generator.prompts.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].prompt.contains("VIDEO: \"Advanced Python\""));
        assert!(sent[0].prompt.contains("Decorators wrap a function"));
        assert_eq!(sent[0].max_tokens, 600);
        assert!((sent[0].temperature - 0.1).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_generation_failure_falls_back_to_extract() {
        let embeddings = embeddings();
        let registry = indexed(&embeddings).await;
        let engine = engine(registry, embeddings, ScriptedGenerator::failing());

        let response = engine.ask(&request("What do generators yield?")).await.unwrap();
        assert_eq!(response.source, AnswerSource::Extractive);
        assert_eq!(response.confidence, Confidence::Medium);
        assert!(response.answer.starts_with("Based on the video 'Advanced Python':"));
        assert_eq!(response.cited_time_ranges.len(), 1);
    }

    #[tokio::test]
    async fn test_unindexed_video_gets_no_match() {
        let embeddings = embeddings();
        let generator = ScriptedGenerator::answering("unused");
        let engine = engine(Arc::new(IndexRegistry::new()), embeddings, generator.clone());

        let response = engine.ask(&request("Anything?")).await.unwrap();
        assert_eq!(response.source, AnswerSource::None);
        assert_eq!(response.confidence, Confidence::Low);
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_question_gets_no_match() {
        let embeddings = embeddings();
        let registry = indexed(&embeddings).await;
        let generator = ScriptedGenerator::answering("unused");
        let engine = engine(registry, embeddings, generator.clone());

        let response = engine.ask(&request("   ")).await.unwrap();
        assert_eq!(response.source, AnswerSource::None);
        assert_eq!(response.confidence, Confidence::Low);
        assert!(response.cited_time_ranges.is_empty());
        assert!(generator.prompts.lock().unwrap().is_empty());
    }
}
