//! GenerateAssessmentHandler - Command handler for formative assessments.

use std::sync::Arc;

use super::generation_error::GenerationError;
use super::structured_generator::{rejected, StructuredGenerator};
use crate::application::prompts::assessment_prompt;
use crate::domain::assessment::{AssessmentForm, AssessmentResult};
use crate::ports::Feature;

/// Command to create one assessment.
#[derive(Debug, Clone)]
pub struct GenerateAssessmentCommand {
    pub age: String,
    pub subject: String,
    pub unit: String,
    pub multiple_choice_count: i64,
    pub open_ended_count: i64,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedAssessment {
    pub form: AssessmentForm,
    pub assessment: AssessmentResult,
}

/// Handler for assessment generation.
pub struct GenerateAssessmentHandler {
    generator: Arc<StructuredGenerator>,
}

impl GenerateAssessmentHandler {
    pub fn new(generator: Arc<StructuredGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateAssessmentCommand,
    ) -> Result<GeneratedAssessment, GenerationError> {
        // 1. Validate counts and text fields
        let form = AssessmentForm::new(
            &cmd.age,
            &cmd.subject,
            &cmd.unit,
            cmd.multiple_choice_count,
            cmd.open_ended_count,
        )?;

        // 2. Generate
        let assessment = self.generate(&form).await?;

        Ok(GeneratedAssessment { form, assessment })
    }

    /// Generates an assessment for an already validated form.
    ///
    /// The reply is accepted even when its question counts differ from the
    /// request; the difference is logged.
    pub async fn generate(&self, form: &AssessmentForm) -> Result<AssessmentResult, GenerationError> {
        let reply = self
            .generator
            .generate(
                Feature::Assessment,
                assessment_prompt(form),
                &AssessmentResult::response_schema(),
            )
            .await?;

        let assessment =
            AssessmentResult::from_reply(reply).map_err(|e| rejected(Feature::Assessment, e))?;

        let (mc, open) = assessment.counts();
        if mc != form.multiple_choice_count() as usize || open != form.open_ended_count() as usize {
            tracing::warn!(
                requested_multiple_choice = form.multiple_choice_count(),
                requested_open_ended = form.open_ended_count(),
                received_multiple_choice = mc,
                received_open_ended = open,
                "assessment question counts differ from request"
            );
        }

        tracing::info!(title = %assessment.title, questions = assessment.questions.len(), "assessment generated");
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::validation::JsonSchemaValidator;
    use crate::domain::assessment::{ConceptFocus, QuestionFormat};
    use crate::domain::foundation::{SchemaValidationError, ValidationError};
    use crate::ports::AIError;
    use serde_json::json;

    fn handler(provider: &MockAIProvider) -> GenerateAssessmentHandler {
        let generator = StructuredGenerator::new(
            Arc::new(provider.clone()),
            Arc::new(JsonSchemaValidator::new()),
        );
        GenerateAssessmentHandler::new(Arc::new(generator))
    }

    fn command(mc: i64, open: i64) -> GenerateAssessmentCommand {
        GenerateAssessmentCommand {
            age: "3° Medio".to_string(),
            subject: "Biología".to_string(),
            unit: "Genética".to_string(),
            multiple_choice_count: mc,
            open_ended_count: open,
        }
    }

    fn mixed_reply() -> serde_json::Value {
        json!({
            "title": "Herencia y Variación",
            "instructions": "Responde con tus palabras.",
            "questions": [
                {
                    "id": 1,
                    "type": "multiple-choice",
                    "question": "¿Qué explica la variación?",
                    "options": ["Mutación", "Clima", "Azar", "Dieta"],
                    "correctOptionIndex": 0,
                    "answerKeyOrRubric": "La mutación introduce variación.",
                    "conceptFocus": "conceptual"
                },
                {
                    "id": 2,
                    "type": "open-ended",
                    "question": "¿Cómo se relacionan genes y ambiente?",
                    "answerKeyOrRubric": "Menciona interacción.",
                    "conceptFocus": "factual"
                }
            ]
        })
    }

    #[tokio::test]
    async fn generates_assessment_with_both_question_types() {
        let provider = MockAIProvider::new().with_json(mixed_reply());

        let result = handler(&provider).handle(command(1, 1)).await.unwrap();

        assert_eq!(result.assessment.counts(), (1, 1));
        assert_eq!(result.assessment.questions[0].concept_focus, ConceptFocus::Conceptual);
        assert!(matches!(
            result.assessment.questions[1].format,
            QuestionFormat::OpenEnded
        ));
        assert!(provider.get_calls()[0]
            .prompt
            .contains("- 1 preguntas de Selección Múltiple"));
    }

    #[tokio::test]
    async fn count_mismatch_is_accepted() {
        let provider = MockAIProvider::new().with_json(mixed_reply());

        let result = handler(&provider).handle(command(4, 0)).await.unwrap();

        assert_eq!(result.assessment.questions.len(), 2);
        assert_eq!(result.form.total_questions(), 4);
    }

    #[tokio::test]
    async fn zero_questions_is_rejected_locally() {
        let provider = MockAIProvider::new();

        let err = handler(&provider).handle(command(0, 0)).await.unwrap_err();

        assert!(matches!(
            err,
            GenerationError::Validation(ValidationError::NoQuestionsRequested)
        ));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn answer_index_outside_options_is_rejected() {
        let mut reply = mixed_reply();
        reply["questions"][0]["correctOptionIndex"] = json!(7);
        let provider = MockAIProvider::new().with_json(reply);

        let err = handler(&provider).handle(command(1, 1)).await.unwrap_err();

        assert!(matches!(
            err,
            GenerationError::SchemaViolation { source: SchemaValidationError::OutOfRange { .. }, .. }
        ));
        assert_eq!(err.user_message(), "Error al procesar la evaluación generada.");
    }

    #[tokio::test]
    async fn whole_float_answer_index_is_read_as_integer() {
        let mut reply = mixed_reply();
        reply["questions"][0]["correctOptionIndex"] = json!(1.0);
        let provider = MockAIProvider::new().with_json(reply);

        let result = handler(&provider).handle(command(1, 1)).await.unwrap();

        assert!(matches!(
            result.assessment.questions[0].format,
            QuestionFormat::MultipleChoice { correct_option_index: 1, .. }
        ));
    }

    #[tokio::test]
    async fn transport_failure_uses_assessment_message() {
        let provider = MockAIProvider::new().with_error(AIError::unavailable("503"));

        let err = handler(&provider).handle(command(3, 2)).await.unwrap_err();

        assert!(err.is_temporary());
        assert_eq!(err.user_message(), "Error al generar la evaluación.");
    }
}
