//! Foundation module - Shared domain primitives.
//!
//! Error types, the state machine trait, option lettering and reply
//! number parsing used by every feature.

mod errors;
mod lettering;
mod state_machine;
pub mod whole_number;

pub use errors::{SchemaValidationError, ValidationError};
pub use lettering::{assessment_label, option_letter, quiz_label, LetterCase};
pub use state_machine::{StateMachine, TransitionError};

/// Returns the trimmed value, or an `EmptyField` error when nothing is left.
pub fn require_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(trimmed.to_string())
    }
}
