//! HTTP handlers for assessment endpoints.

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
use crate::application::handlers::{ExportDocumentHandler, GenerateAssessmentHandler};

use super::dto::{AssessmentRequest, AssessmentResponse, ExportAssessmentRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    generate_handler: Arc<GenerateAssessmentHandler>,
    exporter: Arc<ExportDocumentHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        generate_handler: Arc<GenerateAssessmentHandler>,
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

/// POST /api/assessments - Create a formative assessment
pub async fn generate_assessment(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<AssessmentRequest>,
) -> Response {
    let form = match req.to_form() {
        Ok(form) => form,
        Err(e) => return validation_error_response(e),
    };

    match handlers.generate_handler.generate(&form).await {
        Ok(assessment) => (
            StatusCode::OK,
            Json(AssessmentResponse {
                form: AssessmentRequest::from(&form),
                assessment,
            }),
        )
            .into_response(),
        Err(e) => generation_error_response(e),
    }
}

/// POST /api/assessments/export - Download with the teacher answer key
pub async fn export_assessment(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<ExportAssessmentRequest>,
) -> Response {
    let form = match req.form.to_form() {
        Ok(form) => form,
        Err(e) => return validation_error_response(e),
    };

    match handlers.exporter.export_assessment(&req.assessment, &form) {
        Ok(document) => download_response(document),
        Err(e) => export_error_response(e),
    }
}
