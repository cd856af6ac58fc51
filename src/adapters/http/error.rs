//! JSON error bodies shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::handlers::{ErrorKind, GenerationError};
use crate::domain::foundation::ValidationError;
use crate::domain::quiz::QuizError;
use crate::ports::ExportError;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub kind: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::new("not_found", format!("{} no encontrado: {}", resource, id))
    }

    pub fn validation(err: &ValidationError) -> Self {
        Self::new(ErrorKind::Validation.as_str(), err.user_message())
    }

    /// Pairs the body with a status code.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

pub fn validation_error_response(err: ValidationError) -> Response {
    ErrorResponse::validation(&err).with_status(StatusCode::UNPROCESSABLE_ENTITY)
}

pub fn generation_error_response(err: GenerationError) -> Response {
    let status = match err.kind() {
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Transport if err.is_temporary() => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Transport | ErrorKind::SchemaViolation => StatusCode::BAD_GATEWAY,
    };
    ErrorResponse::new(err.kind().as_str(), err.user_message()).with_status(status)
}

pub fn quiz_error_response(err: QuizError) -> Response {
    ErrorResponse::new("quiz_state", err.user_message()).with_status(StatusCode::CONFLICT)
}

pub fn export_error_response(err: ExportError) -> Response {
    match err {
        ExportError::UnknownTechnique(slug) => {
            ErrorResponse::not_found("Técnica", &slug).with_status(StatusCode::NOT_FOUND)
        }
        other => {
            tracing::error!(error = %other, "document export failed");
            ErrorResponse::new("export", "No se pudo generar el documento.")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
