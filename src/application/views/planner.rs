//! Lesson planner view controller.

use std::sync::Arc;

use super::request_state::{RequestState, RequestStateError};
use crate::application::handlers::{
    ExportDocumentHandler, GenerateLessonPlanHandler, GeneratedLessonPlan, GenerationError,
};
use crate::domain::foundation::ValidationError;
use crate::domain::lesson::{LessonDuration, LessonPlan, PlannerForm};
use crate::ports::{ExportError, ExportedDocument};

/// Raw planner fields as typed by the teacher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerInput {
    pub age: String,
    pub subject: String,
    pub unit: String,
    pub duration: LessonDuration,
}

impl PlannerInput {
    pub fn to_form(&self) -> Result<PlannerForm, ValidationError> {
        PlannerForm::new(&self.age, &self.subject, &self.unit, self.duration)
    }
}

/// Planner form plus the state of its one request.
///
/// The input stays editable in every state.
pub struct PlannerView {
    handler: Arc<GenerateLessonPlanHandler>,
    pub input: PlannerInput,
    state: RequestState<GeneratedLessonPlan>,
}

impl PlannerView {
    pub fn new(handler: Arc<GenerateLessonPlanHandler>) -> Self {
        Self {
            handler,
            input: PlannerInput::default(),
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState<GeneratedLessonPlan> {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn plan(&self) -> Option<&LessonPlan> {
        self.state.result().map(|generated| &generated.plan)
    }

    /// Validates the input and marks the request in flight.
    ///
    /// Returns `None` when the input was rejected; the message is then in
    /// the failed state and no request should be sent.
    pub fn start_submission(&mut self) -> Result<Option<PlannerForm>, RequestStateError> {
        match self.input.to_form() {
            Ok(form) => {
                self.state.begin()?;
                Ok(Some(form))
            }
            Err(err) => {
                self.state.reject(err.user_message())?;
                Ok(None)
            }
        }
    }

    /// Stores the outcome of the request started by [`Self::start_submission`].
    pub fn finish_submission(
        &mut self,
        form: PlannerForm,
        outcome: Result<LessonPlan, GenerationError>,
    ) -> Result<(), RequestStateError> {
        match outcome {
            Ok(plan) => self.state.succeed(GeneratedLessonPlan { form, plan }),
            Err(err) => self.state.fail(err.user_message()),
        }
    }

    /// Validates, generates and records the outcome.
    pub async fn submit(&mut self) -> Result<(), RequestStateError> {
        let Some(form) = self.start_submission()? else {
            return Ok(());
        };
        let outcome = self.handler.generate(&form).await;
        self.finish_submission(form, outcome)
    }

    /// Word document of the current plan; `None` before a successful request.
    pub fn export(
        &self,
        exporter: &ExportDocumentHandler,
    ) -> Result<Option<ExportedDocument>, ExportError> {
        self.state
            .result()
            .map(|generated| exporter.export_lesson_plan(&generated.plan, &generated.form))
            .transpose()
    }
}
