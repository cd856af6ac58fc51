//! Assessment generator view controller.

use std::sync::Arc;

use super::request_state::{RequestState, RequestStateError};
use crate::application::handlers::{
    ExportDocumentHandler, GenerateAssessmentHandler, GeneratedAssessment, GenerationError,
};
use crate::domain::assessment::{
    AssessmentForm, AssessmentResult, DEFAULT_MULTIPLE_CHOICE, DEFAULT_OPEN_ENDED,
};
use crate::domain::foundation::ValidationError;
use crate::ports::{ExportError, ExportedDocument};

/// Toggle label while the answer key is hidden.
pub const SHOW_ANSWER_KEY_LABEL: &str = "Ver Pauta de Corrección";
/// Toggle label while the answer key is shown.
pub const HIDE_ANSWER_KEY_LABEL: &str = "Ocultar Respuestas";

/// Raw assessment fields as typed by the teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentInput {
    pub age: String,
    pub subject: String,
    pub unit: String,
    pub multiple_choice_count: i64,
    pub open_ended_count: i64,
}

impl Default for AssessmentInput {
    fn default() -> Self {
        Self {
            age: String::new(),
            subject: String::new(),
            unit: String::new(),
            multiple_choice_count: i64::from(DEFAULT_MULTIPLE_CHOICE),
            open_ended_count: i64::from(DEFAULT_OPEN_ENDED),
        }
    }
}

impl AssessmentInput {
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

/// Assessment form, request state and answer-key visibility.
pub struct AssessmentView {
    handler: Arc<GenerateAssessmentHandler>,
    pub input: AssessmentInput,
    state: RequestState<GeneratedAssessment>,
    show_answer_key: bool,
}

impl AssessmentView {
    pub fn new(handler: Arc<GenerateAssessmentHandler>) -> Self {
        Self {
            handler,
            input: AssessmentInput::default(),
            state: RequestState::Idle,
            show_answer_key: false,
        }
    }

    pub fn state(&self) -> &RequestState<GeneratedAssessment> {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn assessment(&self) -> Option<&AssessmentResult> {
        self.state.result().map(|generated| &generated.assessment)
    }

    pub fn show_answer_key(&self) -> bool {
        self.show_answer_key
    }

    pub fn toggle_answer_key(&mut self) -> bool {
        self.show_answer_key = !self.show_answer_key;
        self.show_answer_key
    }

    pub fn answer_key_toggle_label(&self) -> &'static str {
        if self.show_answer_key {
            HIDE_ANSWER_KEY_LABEL
        } else {
            SHOW_ANSWER_KEY_LABEL
        }
    }

    /// Validates the input and marks the request in flight.
    ///
    /// Returns `None` when the input was rejected.
    pub fn start_submission(&mut self) -> Result<Option<AssessmentForm>, RequestStateError> {
        match self.input.to_form() {
            Ok(form) => {
                self.state.begin()?;
                self.show_answer_key = false;
                Ok(Some(form))
            }
            Err(err) => {
                self.state.reject(err.user_message())?;
                Ok(None)
            }
        }
    }

    pub fn finish_submission(
        &mut self,
        form: AssessmentForm,
        outcome: Result<AssessmentResult, GenerationError>,
    ) -> Result<(), RequestStateError> {
        match outcome {
            Ok(assessment) => self.state.succeed(GeneratedAssessment { form, assessment }),
            Err(err) => self.state.fail(err.user_message()),
        }
    }

    pub async fn submit(&mut self) -> Result<(), RequestStateError> {
        let Some(form) = self.start_submission()? else {
            return Ok(());
        };
        let outcome = self.handler.generate(&form).await;
        self.finish_submission(form, outcome)
    }

    /// Word document with questions and answer key; `None` before a result.
    pub fn export(
        &self,
        exporter: &ExportDocumentHandler,
    ) -> Result<Option<ExportedDocument>, ExportError> {
        self.state
            .result()
            .map(|generated| exporter.export_assessment(&generated.assessment, &generated.form))
            .transpose()
    }
}
