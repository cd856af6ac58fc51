//! API router assembly.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    ExportDocumentHandler, GenerateAssessmentHandler, GenerateLessonPlanHandler,
    GenerateTeacherQuizHandler, StructuredGenerator,
};
use crate::config::ServerConfig;
use crate::ports::{AIProvider, DocumentRenderer, ResponseValidator};

use super::assessments::{assessment_routes, AssessmentHandlers};
use super::content::{content_routes, ContentHandlers};
use super::lesson_plans::{lesson_plan_routes, LessonPlanHandlers};
use super::teacher_quiz::{teacher_quiz_routes, QuizSessionStore, TeacherQuizHandlers};

/// Adapters the API is built from.
#[derive(Clone)]
pub struct ApiDependencies {
    pub provider: Arc<dyn AIProvider>,
    pub validator: Arc<dyn ResponseValidator>,
    pub renderer: Arc<dyn DocumentRenderer>,
    /// Temperature sent with every generation request.
    pub temperature: Option<f32>,
}

/// Builds every `/api` route from the given adapters.
pub fn api_router(deps: ApiDependencies) -> Router {
    let generator = Arc::new(
        StructuredGenerator::new(deps.provider, deps.validator).with_temperature(deps.temperature),
    );
    let exporter = Arc::new(ExportDocumentHandler::new(deps.renderer));

    let content = ContentHandlers::new(exporter.clone());
    let lesson_plans = LessonPlanHandlers::new(
        Arc::new(GenerateLessonPlanHandler::new(generator.clone())),
        exporter.clone(),
    );
    let assessments = AssessmentHandlers::new(
        Arc::new(GenerateAssessmentHandler::new(generator.clone())),
        exporter,
    );
    let teacher_quiz = TeacherQuizHandlers::new(
        Arc::new(GenerateTeacherQuizHandler::new(generator)),
        QuizSessionStore::new(),
    );

    Router::new()
        .route("/health", get(health))
        .merge(content_routes(content))
        .nest("/api/lesson-plans", lesson_plan_routes(lesson_plans))
        .nest("/api/assessments", assessment_routes(assessments))
        .nest("/api/teacher-quiz/sessions", teacher_quiz_routes(teacher_quiz))
}

/// GET /health - Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// The API with request tracing, CORS and the request timeout applied.
pub fn app_router(deps: ApiDependencies, server: &ServerConfig) -> Router {
    api_router(deps)
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured; otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_DISPOSITION]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(allowed)
}
