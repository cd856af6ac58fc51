//! HTTP routes for lesson plan endpoints.

use axum::{routing::post, Router};

use super::handlers::{export_lesson_plan, generate_lesson_plan, LessonPlanHandlers};

/// Creates the lesson plan router. Mounted at `/api/lesson-plans`.
pub fn lesson_plan_routes(handlers: LessonPlanHandlers) -> Router {
    Router::new()
        .route("/", post(generate_lesson_plan))
        .route("/export", post(export_lesson_plan))
        .with_state(handlers)
}
