//! HTTP handlers for lesson plan endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::download::download_response;
use crate::adapters::http::error::{
    export_error_response, generation_error_response, validation_error_response,
};
use crate::application::handlers::{ExportDocumentHandler, GenerateLessonPlanHandler};

use super::dto::{ExportLessonPlanRequest, LessonPlanResponse, PlannerRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct LessonPlanHandlers {
    generate_handler: Arc<GenerateLessonPlanHandler>,
    exporter: Arc<ExportDocumentHandler>,
}

impl LessonPlanHandlers {
    pub fn new(
        generate_handler: Arc<GenerateLessonPlanHandler>,
        exporter: Arc<ExportDocumentHandler>,
    ) -> Self {
        Self {
            generate_handler,
            exporter,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/lesson-plans - Design a class session
pub async fn generate_lesson_plan(
    State(handlers): State<LessonPlanHandlers>,
    Json(req): Json<PlannerRequest>,
) -> Response {
    let form = match req.to_form() {
        Ok(form) => form,
        Err(e) => return validation_error_response(e),
    };

    match handlers.generate_handler.generate(&form).await {
        Ok(plan) => (
            StatusCode::OK,
            Json(LessonPlanResponse {
                form: PlannerRequest::from(&form),
                plan,
            }),
        )
            .into_response(),
        Err(e) => generation_error_response(e),
    }
}

/// POST /api/lesson-plans/export - Download a plan as a Word document
pub async fn export_lesson_plan(
    State(handlers): State<LessonPlanHandlers>,
    Json(req): Json<ExportLessonPlanRequest>,
) -> Response {
    let form = match req.form.to_form() {
        Ok(form) => form,
        Err(e) => return validation_error_response(e),
    };

    match handlers.exporter.export_lesson_plan(&req.plan, &form) {
        Ok(document) => download_response(document),
        Err(e) => export_error_response(e),
    }
}
