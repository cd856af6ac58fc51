//! Planner form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_text, ValidationError};

/// Session length offered by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LessonDuration {
    #[default]
    FortyFive,
    Ninety,
}

impl LessonDuration {
    pub fn minutes(self) -> u32 {
        match self {
            LessonDuration::FortyFive => 45,
            LessonDuration::Ninety => 90,
        }
    }
}

impl TryFrom<u32> for LessonDuration {
    type Error = ValidationError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            45 => Ok(LessonDuration::FortyFive),
            90 => Ok(LessonDuration::Ninety),
            other => Err(ValidationError::invalid_format(
                "duration",
                format!("{} minutes is not offered; use 45 or 90", other),
            )),
        }
    }
}

impl From<LessonDuration> for u32 {
    fn from(duration: LessonDuration) -> Self {
        duration.minutes()
    }
}

/// Validated planner input. Text fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannerForm {
    age: String,
    subject: String,
    unit: String,
    duration: LessonDuration,
}

impl PlannerForm {
    /// Validates and builds the form.
    ///
    /// # Errors
    ///
    /// `EmptyField` for the first blank text field, in form order.
    pub fn new(
        age: &str,
        subject: &str,
        unit: &str,
        duration: LessonDuration,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            age: require_text("age", age)?,
            subject: require_text("subject", subject)?,
            unit: require_text("unit", unit)?,
            duration,
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

    pub fn duration(&self) -> LessonDuration {
        self.duration
    }
}
