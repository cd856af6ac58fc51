//! Assessment request form.

use serde::Serialize;

use crate::domain::foundation::{require_text, ValidationError};

/// Upper bound for multiple-choice questions.
pub const MAX_MULTIPLE_CHOICE: u32 = 20;
/// Upper bound for open-ended questions.
pub const MAX_OPEN_ENDED: u32 = 10;
/// Form default for multiple-choice questions.
pub const DEFAULT_MULTIPLE_CHOICE: u32 = 3;
/// Form default for open-ended questions.
pub const DEFAULT_OPEN_ENDED: u32 = 2;

/// Validated assessment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentForm {
    age: String,
    subject: String,
    unit: String,
    multiple_choice_count: u32,
    open_ended_count: u32,
}

impl AssessmentForm {
    /// Validates and builds the form.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank text field
    /// - `OutOfRange` when a count is outside 0..=20 or 0..=10
    /// - `NoQuestionsRequested` when both counts are zero
    pub fn new(
        age: &str,
        subject: &str,
        unit: &str,
        multiple_choice_count: i64,
        open_ended_count: i64,
    ) -> Result<Self, ValidationError> {
        let age = require_text("age", age)?;
        let subject = require_text("subject", subject)?;
        let unit = require_text("unit", unit)?;
        let multiple_choice_count =
            bounded_count("multiple_choice_count", multiple_choice_count, MAX_MULTIPLE_CHOICE)?;
        let open_ended_count = bounded_count("open_ended_count", open_ended_count, MAX_OPEN_ENDED)?;

        if multiple_choice_count == 0 && open_ended_count == 0 {
            return Err(ValidationError::NoQuestionsRequested);
        }

        Ok(Self {
            age,
            subject,
            unit,
            multiple_choice_count,
            open_ended_count,
        })
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn multiple_choice_count(&self) -> u32 {
        self.multiple_choice_count
    }

    pub fn open_ended_count(&self) -> u32 {
        self.open_ended_count
    }

    pub fn total_questions(&self) -> u32 {
        self.multiple_choice_count + self.open_ended_count
    }
}

fn bounded_count(field: &str, value: i64, max: u32) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| ValidationError::out_of_range(field, 0, i64::from(max), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_accepted() {
        let form = AssessmentForm::new(
            "14-15 años",
            "Biología",
            "Genética y Herencia",
            i64::from(DEFAULT_MULTIPLE_CHOICE),
            i64::from(DEFAULT_OPEN_ENDED),
        )
        .unwrap();
        assert_eq!(form.total_questions(), 5);
    }

    #[test]
    fn zero_total_is_rejected() {
        let err = AssessmentForm::new("14", "Biología", "Genética", 0, 0).unwrap_err();
        assert_eq!(err, ValidationError::NoQuestionsRequested);
    }

    #[test]
    fn one_kind_alone_is_enough() {
        assert!(AssessmentForm::new("14", "Biología", "Genética", 0, 1).is_ok());
        assert!(AssessmentForm::new("14", "Biología", "Genética", 1, 0).is_ok());
    }

    #[test]
    fn counts_are_bounded() {
        assert!(AssessmentForm::new("14", "Bio", "Gen", 20, 10).is_ok());

        let err = AssessmentForm::new("14", "Bio", "Gen", 21, 0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::out_of_range("multiple_choice_count", 0, 20, 21)
        );

        let err = AssessmentForm::new("14", "Bio", "Gen", 1, 11).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("open_ended_count", 0, 10, 11));

        assert!(AssessmentForm::new("14", "Bio", "Gen", -1, 2).is_err());
    }

    #[test]
    fn blank_text_is_reported_before_counts() {
        let err = AssessmentForm::new("14", "Bio", " ", 0, 0).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("unit"));
    }
}
