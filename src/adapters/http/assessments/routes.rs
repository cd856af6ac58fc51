//! HTTP routes for assessment endpoints.

use axum::{routing::post, Router};

use super::handlers::{export_assessment, generate_assessment, AssessmentHandlers};

/// Creates the assessment router. Mounted at `/api/assessments`.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(generate_assessment))
        .route("/export", post(export_assessment))
        .with_state(handlers)
}
