//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised while checking user input, before any model call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("At least one question must be requested")]
    NoQuestionsRequested,
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Message shown next to the form.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::EmptyField { field } => {
                format!("El campo «{}» es obligatorio.", field_label(field))
            }
            ValidationError::OutOfRange { field, min, max, .. } => format!(
                "El campo «{}» debe estar entre {} y {}.",
                field_label(field),
                min,
                max
            ),
            ValidationError::InvalidFormat { field, .. } => {
                format!("El campo «{}» no tiene un valor válido.", field_label(field))
            }
            ValidationError::NoQuestionsRequested => {
                "Debes solicitar al menos una pregunta.".to_string()
            }
        }
    }
}

/// Spanish label for a form field name.
fn field_label(field: &str) -> &str {
    match field {
        "age" => "Edad",
        "subject" => "Asignatura",
        "unit" => "Unidad",
        "duration" => "Duración",
        "multiple_choice_count" => "Preguntas de Selección Múltiple",
        "open_ended_count" => "Preguntas Abiertas",
        "question_count" => "Número de preguntas",
        other => other,
    }
}

/// Errors found while checking a model reply against its declared shape.
///
/// # Security
///
/// These errors name the offending field path for logs. When returning
/// errors to clients, use `to_client_message()` for a shorter form.
#[derive(Debug, Clone, Error)]
pub enum SchemaValidationError {
    #[error("Reply is not valid JSON: {reason}")]
    NotJson { reason: String },

    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid value for field {field}: '{actual}' is not one of {allowed:?}")]
    InvalidEnum {
        field: String,
        allowed: Vec<String>,
        actual: String,
    },

    #[error("Array too short for field {field}: minimum {min}, got {actual}")]
    ArrayTooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Value out of range for field {field}: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Unexpected field {field}: {reason}")]
    Unexpected { field: String, reason: String },

    #[error("Validation errors: {0:?}")]
    Multiple(Vec<SchemaValidationError>),
}

impl SchemaValidationError {
    /// Creates a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into(),
        }
    }

    /// Creates an out of range error for an index into an options list.
    pub fn index_out_of_range(field: impl Into<String>, value: i64, len: usize) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value: value.to_string(),
            min: "0".to_string(),
            max: len.saturating_sub(1).to_string(),
        }
    }

    /// Folds a list of violations into one error. An empty list yields `None`.
    pub fn collect(mut errors: Vec<SchemaValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Convert to client-safe error message.
    pub fn to_client_message(&self) -> String {
        match self {
            SchemaValidationError::NotJson { .. } => "Reply is not valid JSON".to_string(),
            SchemaValidationError::MissingRequired { field } => {
                format!("Missing required field: {}", field)
            }
            SchemaValidationError::InvalidType {
                field, expected, ..
            } => {
                format!("Invalid type for field '{}': expected {}", field, expected)
            }
            SchemaValidationError::InvalidEnum { field, allowed, .. } => {
                format!("Field '{}' must be one of: {}", field, allowed.join(", "))
            }
            SchemaValidationError::ArrayTooShort { field, min, .. } => {
                format!("Field '{}' requires at least {} items", field, min)
            }
            SchemaValidationError::OutOfRange { field, min, max, .. } => {
                format!("Field '{}' must be between {} and {}", field, min, max)
            }
            SchemaValidationError::Unexpected { field, .. } => {
                format!("Field '{}' is not allowed here", field)
            }
            SchemaValidationError::Multiple(errors) => errors
                .first()
                .map(|e| e.to_client_message())
                .unwrap_or_else(|| "Validation failed".to_string()),
        }
    }

    /// Dotted path of the first offending field, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaValidationError::NotJson { .. } => None,
            SchemaValidationError::MissingRequired { field }
            | SchemaValidationError::InvalidType { field, .. }
            | SchemaValidationError::InvalidEnum { field, .. }
            | SchemaValidationError::ArrayTooShort { field, .. }
            | SchemaValidationError::OutOfRange { field, .. }
            | SchemaValidationError::Unexpected { field, .. } => Some(field),
            SchemaValidationError::Multiple(errors) => errors.first().and_then(|e| e.field()),
        }
    }

    /// Get the count of validation errors.
    pub fn error_count(&self) -> usize {
        match self {
            SchemaValidationError::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }
}

impl PartialEq for SchemaValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
