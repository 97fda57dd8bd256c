//! HTTP API server for integration with other systems.
//!
//! Provides JSON endpoints for analysis, chapters, indexing, questions and
//! comparison over a library of video bundles.

use super::bundle_paths;
use crate::analysis::SkillLevel;
use crate::chapters::{extract_chapters, generate_learning_summary, Chapter, LearningSummary};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::TutorError;
use crate::orchestrator::Tutor;
use crate::rag::QaResponse;
use crate::transcript::{resolve_video_id, BundleLibrary};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// Shared application state.
pub struct AppState {
    pub tutor: Tutor,
}

/// Run the HTTP API server.
pub async fn run_serve(
    host: &str,
    port: u16,
    bundles: &[String],
    settings: Settings,
) -> anyhow::Result<()> {
    if let Err(e) = preflight::check(Operation::Serve, &settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let library = Arc::new(BundleLibrary::load_all(&bundle_paths(bundles))?);
    if library.is_empty() {
        Output::warning("No bundles loaded; every video lookup will return 404.");
    }
    let video_count = library.len();

    let tutor = Tutor::new(settings, library.clone(), library.clone())?.with_comments(library);
    let app = router(Arc::new(AppState { tutor }));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("tutorscope API Server");
    println!();
    Output::success(&format!("Listening on http://{} ({} videos)", addr, video_count));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Analyze", "POST /analyze");
    Output::kv("Chapters", "POST /chapters");
    Output::kv("Index", "POST /index");
    Output::kv("Indexes", "GET  /indexes");
    Output::kv("Ask", "POST /ask");
    Output::kv("Compare", "POST /compare");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/chapters", post(chapters))
        .route("/index", post(index))
        .route("/indexes", get(indexes))
        .route("/ask", post(ask))
        .route("/compare", post(compare))
        .layer(cors)
        .with_state(state)
}

// === Request/Response Types ===

/// `video_id` fields accept a video URL or a bare id.
#[derive(Deserialize)]
struct VideoRequest {
    video_id: String,
}

#[derive(Serialize)]
struct ChaptersResponse {
    video_id: String,
    title: String,
    chapters: Vec<Chapter>,
    summary: LearningSummary,
}

#[derive(Deserialize)]
struct IndexRequest {
    video_id: String,
    /// Index this text instead of the video's stored transcript.
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    duration_minutes: Option<f64>,
}

#[derive(Serialize)]
struct IndexResponse {
    video_id: String,
    chunks_indexed: usize,
}

#[derive(Deserialize)]
struct AskRequest {
    video_id: String,
    question: String,
}

#[derive(Serialize)]
struct AskResponse {
    #[serde(flatten)]
    response: QaResponse,
    display: String,
}

#[derive(Deserialize)]
struct CompareRequest {
    video_ids: Vec<String>,
    #[serde(default = "default_target")]
    target: String,
}

fn default_target() -> String {
    "beginner".to_string()
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// HTTP status for a library error.
fn status_for(error: &TutorError) -> StatusCode {
    match error {
        TutorError::VideoNotFound(_) => StatusCode::NOT_FOUND,
        TutorError::InvalidInput(_) | TutorError::NotEnoughVideos { .. } => {
            StatusCode::BAD_REQUEST
        }
        TutorError::ConfigMissing(_) => StatusCode::SERVICE_UNAVAILABLE,
        TutorError::Transcript(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: TutorError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        warn!("Request failed: {}", error);
    }
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VideoRequest>,
) -> Response {
    match state.tutor.video_report(&req.video_id).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(e),
    }
}

async fn chapters(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VideoRequest>,
) -> Response {
    let metadata = match resolve_video_id(&req.video_id) {
        Ok(video_id) => state.tutor.analyst().metadata(&video_id).await,
        Err(e) => Err(e),
    };
    match metadata {
        Ok(metadata) => {
            let chapters = extract_chapters(&metadata.description);
            let summary = generate_learning_summary(&chapters, &metadata.title);
            Json(ChaptersResponse {
                video_id: metadata.id,
                title: metadata.title,
                chapters,
                summary,
            })
            .into_response()
        }
        Err(e) => error_response(e),
    }
}

async fn index(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IndexRequest>,
) -> Response {
    let video_id = match resolve_video_id(&req.video_id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };
    let result = match &req.text {
        Some(text) => {
            let duration = req
                .duration_minutes
                .unwrap_or(crate::chunking::FALLBACK_DURATION_MINUTES);
            state.tutor.index_video(&video_id, text, duration).await
        }
        None => state.tutor.prepare_video(&video_id).await,
    };

    match result {
        Ok(chunks_indexed) => Json(IndexResponse {
            video_id,
            chunks_indexed,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

async fn indexes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.tutor.indexes().await)
}

async fn ask(State(state): State<Arc<AppState>>, Json(req): Json<AskRequest>) -> Response {
    match state.tutor.ask_video(&req.video_id, &req.question).await {
        Ok(response) => Json(AskResponse {
            display: response.format_for_display(),
            response,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

async fn compare(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompareRequest>,
) -> Response {
    let target: SkillLevel = match req.target.parse() {
        Ok(level) => level,
        Err(e) => return error_response(TutorError::InvalidInput(e)),
    };

    match state.tutor.compare(&req.video_ids, target).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::{EmbeddingService, HashingEmbedder};
    use crate::rag::{CompletionRequest, Generator};
    use crate::transcript::{TranscriptSegment, TranscriptTrack, VideoBundle, VideoMetadata};
    use async_trait::async_trait;

    struct SilentGenerator;

    #[async_trait]
    impl Generator for SilentGenerator {
        async fn complete(&self, _request: CompletionRequest) -> crate::Result<String> {
            Ok(String::new())
        }

        fn model(&self) -> &str {
            "silent"
        }
    }

    fn state() -> Arc<AppState> {
        let mut library = BundleLibrary::new();
        for (id, title) in [("dQw4w9WgXcQ", "Loops"), ("abc123DEF45", "Functions")] {
            library.insert(VideoBundle {
                metadata: VideoMetadata {
                    id: id.to_string(),
                    title: title.to_string(),
                    description: "00:00 - Intro\n02:00 - Practice".to_string(),
                    duration_seconds: Some(300),
                },
                tracks: vec![TranscriptTrack {
                    language_code: "en".to_string(),
                    generated: false,
                    segments: (0..30)
                        .map(|i| {
                            TranscriptSegment::new(i as f64 * 10.0, "We write a small loop and run it.".to_string())
                        })
                        .collect(),
                }],
                comments: Vec::new(),
            });
        }
        let library = Arc::new(library);
        let tutor = Tutor::with_components(
            Settings::default(),
            library.clone(),
            library,
            Arc::new(EmbeddingService::preloaded(Arc::new(HashingEmbedder::new(64)))),
            Arc::new(SilentGenerator),
        )
        .unwrap();
        Arc::new(AppState { tutor })
    }

    fn video(video_id: &str) -> Json<VideoRequest> {
        Json(VideoRequest {
            video_id: video_id.to_string(),
        })
    }

    #[tokio::test]
    async fn test_routes_accept_urls() {
        let state = state();
        let response = chapters(State(state.clone()), video("https://youtu.be/dQw4w9WgXcQ")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = analyze(State(state.clone()), video("youtube.com/watch?v=abc123DEF45")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = chapters(State(state), video("https://vimeo.com/1")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compare_route_reports_bad_urls() {
        let state = state();
        let request = CompareRequest {
            video_ids: vec![
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
                "abc123DEF45".to_string(),
                "not a url".to_string(),
            ],
            target: default_target(),
        };
        let report = state
            .tutor
            .compare(&request.video_ids, request.target.parse().unwrap())
            .await
            .unwrap();
        assert_eq!(report.comparison.entries.len(), 2);
        assert_eq!(report.comparison.failed[0].video_id, "not a url");

        let response = compare(State(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&TutorError::VideoNotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&TutorError::NotEnoughVideos {
                processed: 1,
                failed: vec![]
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&TutorError::ConfigMissing("GROQ_API_KEY".to_string())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&TutorError::Generation("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_compare_request_defaults_to_beginner() {
        let req: CompareRequest = serde_json::from_str(r#"{"video_ids": ["a", "b"]}"#).unwrap();
        assert_eq!(req.target.parse::<SkillLevel>().unwrap(), SkillLevel::Beginner);
    }
}
