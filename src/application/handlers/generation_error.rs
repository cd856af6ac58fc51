//! Errors raised while generating content.

use thiserror::Error;

use crate::domain::foundation::{SchemaValidationError, ValidationError};
use crate::ports::{AIError, Feature};

/// Shown when the model answered without text.
pub const EMPTY_REPLY_MESSAGE: &str = "No se generó respuesta de la IA";

/// Which side of the call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Local input check; the model was never called.
    Validation,
    /// The model call itself failed or returned no text.
    Transport,
    /// The reply was not JSON or did not match the declared shape.
    SchemaViolation,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Transport => "transport",
            ErrorKind::SchemaViolation => "schema_violation",
        }
    }
}

/// Failure of one generation attempt. Every variant is terminal for that attempt.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("{feature} generation failed: {source}")]
    Transport {
        feature: Feature,
        #[source]
        source: AIError,
    },

    #[error("{feature} reply rejected: {source}")]
    SchemaViolation {
        feature: Feature,
        #[source]
        source: SchemaValidationError,
    },
}

impl GenerationError {
    pub fn transport(feature: Feature, source: AIError) -> Self {
        Self::Transport { feature, source }
    }

    pub fn schema(feature: Feature, source: SchemaValidationError) -> Self {
        Self::SchemaViolation { feature, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Validation(_) => ErrorKind::Validation,
            GenerationError::Transport { .. } => ErrorKind::Transport,
            GenerationError::SchemaViolation { .. } => ErrorKind::SchemaViolation,
        }
    }

    /// True when the model service is temporarily unable to answer.
    pub fn is_temporary(&self) -> bool {
        matches!(self, GenerationError::Transport { source, .. } if source.is_temporary())
    }

    /// Message shown to the teacher, in Spanish.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Validation(err) => err.user_message(),
            GenerationError::Transport {
                source: AIError::EmptyResponse,
                ..
            } => EMPTY_REPLY_MESSAGE.to_string(),
            GenerationError::Transport { feature, .. } => failure_message(*feature).to_string(),
            GenerationError::SchemaViolation { feature, .. } => {
                unreadable_reply_message(*feature).to_string()
            }
        }
    }
}

/// Generic failure message per feature.
pub fn failure_message(feature: Feature) -> &'static str {
    match feature {
        Feature::LessonPlan => "Ocurrió un error al generar la clase. Por favor intenta de nuevo.",
        Feature::Assessment => "Error al generar la evaluación.",
        Feature::TeacherQuiz => "Error al generar las preguntas",
    }
}

/// Message for a reply that could not be turned into content.
pub fn unreadable_reply_message(feature: Feature) -> &'static str {
    match feature {
        Feature::LessonPlan => "Error al procesar el plan de clase generado.",
        Feature::Assessment => "Error al procesar la evaluación generada.",
        Feature::TeacherQuiz => "Error al procesar el cuestionario docente.",
    }
}
