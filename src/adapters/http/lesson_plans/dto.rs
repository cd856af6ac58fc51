//! HTTP DTOs for lesson plan endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::lesson::{LessonDuration, LessonPlan, PlannerForm};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

fn default_duration() -> u32 {
    LessonDuration::default().minutes()
}

/// Planner form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerRequest {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub unit: String,
    /// Session length in minutes: 45 or 90.
    #[serde(default = "default_duration")]
    pub duration: u32,
}

impl PlannerRequest {
    pub fn duration(&self) -> Result<LessonDuration, ValidationError> {
        LessonDuration::try_from(self.duration)
    }

    pub fn to_form(&self) -> Result<PlannerForm, ValidationError> {
        PlannerForm::new(&self.age, &self.subject, &self.unit, self.duration()?)
    }
}

impl From<&PlannerForm> for PlannerRequest {
    fn from(form: &PlannerForm) -> Self {
        Self {
            age: form.age().to_string(),
            subject: form.subject().to_string(),
            unit: form.unit().to_string(),
            duration: form.duration().minutes(),
        }
    }
}

/// A previously generated plan together with the form that produced it.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportLessonPlanRequest {
    pub form: PlannerRequest,
    pub plan: LessonPlan,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Generated plan. `form` can be sent back unchanged to the export endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LessonPlanResponse {
    pub form: PlannerRequest,
    pub plan: LessonPlan,
}
