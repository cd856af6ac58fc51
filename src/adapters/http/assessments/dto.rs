//! HTTP DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{
    AssessmentForm, AssessmentResult, DEFAULT_MULTIPLE_CHOICE, DEFAULT_OPEN_ENDED,
};
use crate::domain::foundation::ValidationError;

fn default_multiple_choice() -> i64 {
    i64::from(DEFAULT_MULTIPLE_CHOICE)
}

fn default_open_ended() -> i64 {
    i64::from(DEFAULT_OPEN_ENDED)
}

/// Assessment form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default = "default_multiple_choice")]
    pub multiple_choice_count: i64,
    #[serde(default = "default_open_ended")]
    pub open_ended_count: i64,
}

impl AssessmentRequest {
    pub fn to_form(&self) -> Result<AssessmentForm, ValidationError> {
        AssessmentForm::new(
            &self.age,
            &self.subject,
            &self.unit,
            self.multiple_choice_count,
            self.open_ended_count,
        )
    }
}

impl From<&AssessmentForm> for AssessmentRequest {
    fn from(form: &AssessmentForm) -> Self {
        Self {
            age: form.age().to_string(),
            subject: form.subject().to_string(),
            unit: form.unit().to_string(),
            multiple_choice_count: i64::from(form.multiple_choice_count()),
            open_ended_count: i64::from(form.open_ended_count()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportAssessmentRequest {
    pub form: AssessmentRequest,
    pub assessment: AssessmentResult,
}

/// Generated assessment with the normalised form.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub form: AssessmentRequest,
    pub assessment: AssessmentResult,
}
