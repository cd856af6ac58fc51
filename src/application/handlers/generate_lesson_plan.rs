//! GenerateLessonPlanHandler - Command handler for the lesson planner.

use std::sync::Arc;

use super::generation_error::GenerationError;
use super::structured_generator::{rejected, StructuredGenerator};
use crate::application::prompts::lesson_plan_prompt;
use crate::domain::lesson::{LessonDuration, LessonPlan, PlannerForm};
use crate::ports::Feature;

/// Command to design one class session.
#[derive(Debug, Clone)]
pub struct GenerateLessonPlanCommand {
    pub age: String,
    pub subject: String,
    pub unit: String,
    pub duration: LessonDuration,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedLessonPlan {
    pub form: PlannerForm,
    pub plan: LessonPlan,
}

/// Handler for lesson plan generation.
pub struct GenerateLessonPlanHandler {
    generator: Arc<StructuredGenerator>,
}

impl GenerateLessonPlanHandler {
    pub fn new(generator: Arc<StructuredGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateLessonPlanCommand,
    ) -> Result<GeneratedLessonPlan, GenerationError> {
        // 1. Validate form input before calling the model
        let form = PlannerForm::new(&cmd.age, &cmd.subject, &cmd.unit, cmd.duration)?;

        // 2. Generate
        let plan = self.generate(&form).await?;

        Ok(GeneratedLessonPlan { form, plan })
    }

    /// Generates a plan for an already validated form.
    pub async fn generate(&self, form: &PlannerForm) -> Result<LessonPlan, GenerationError> {
        let reply = self
            .generator
            .generate(
                Feature::LessonPlan,
                lesson_plan_prompt(form),
                &LessonPlan::response_schema(),
            )
            .await?;

        let plan = LessonPlan::from_reply(reply).map_err(|e| rejected(Feature::LessonPlan, e))?;

        tracing::info!(
            title = %plan.title,
            activities = plan.activities.len(),
            "lesson plan generated"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::validation::JsonSchemaValidator;
    use crate::application::handlers::ErrorKind;
    use crate::domain::foundation::{SchemaValidationError, ValidationError};
    use serde_json::{json, Value};

    fn handler(provider: &MockAIProvider) -> GenerateLessonPlanHandler {
        let generator = StructuredGenerator::new(
            Arc::new(provider.clone()),
            Arc::new(JsonSchemaValidator::new()),
        );
        GenerateLessonPlanHandler::new(Arc::new(generator))
    }

    fn command() -> GenerateLessonPlanCommand {
        GenerateLessonPlanCommand {
            age: "12".to_string(),
            subject: "Ciencias".to_string(),
            unit: "Ecosistemas".to_string(),
            duration: LessonDuration::FortyFive,
        }
    }

    fn plan_reply(activities: Value) -> Value {
        json!({
            "title": "Redes de Vida",
            "macroConcept": "Sistemas",
            "microConcepts": ["Interdependencia", "Energía"],
            "generalization": "Los sistemas vivos dependen del flujo de energía.",
            "guidingQuestions": {
                "factual": ["¿Qué es un productor?"],
                "conceptual": ["¿Cómo afecta un cambio a la red?"],
                "debatable": ["¿Debemos intervenir los ecosistemas?"]
            },
            "activities": activities,
            "assessmentIdea": "Diseñar una red trófica local."
        })
    }

    #[tokio::test]
    async fn generates_plan_from_valid_reply() {
        let provider = MockAIProvider::new().with_json(plan_reply(json!([
            {"phase": "Enganche", "activity": "Terrario", "purpose": "Activar", "time": "10 min"},
            {"phase": "Transferir", "activity": "Caso local", "purpose": "Aplicar", "time": "35 min"}
        ])));

        let result = handler(&provider).handle(command()).await.unwrap();

        assert_eq!(result.plan.title, "Redes de Vida");
        assert_eq!(result.plan.activities.len(), 2);
        assert_eq!(result.form.unit(), "Ecosistemas");

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains("sesión de 45 minutos para estudiantes de 12 años"));
        assert_eq!(calls[0].schema, Some(LessonPlan::response_schema()));
    }

    #[tokio::test]
    async fn blank_subject_never_reaches_the_model() {
        let provider = MockAIProvider::new();
        let cmd = GenerateLessonPlanCommand {
            subject: "  ".to_string(),
            ..command()
        };

        let err = handler(&provider).handle(cmd).await.unwrap_err();

        assert!(matches!(
            err,
            GenerationError::Validation(ValidationError::EmptyField { ref field }) if field == "subject"
        ));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn plan_without_activities_is_rejected() {
        let provider = MockAIProvider::new().with_json(plan_reply(json!([])));

        let err = handler(&provider).handle(command()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
        assert!(matches!(
            err,
            GenerationError::SchemaViolation { source: SchemaValidationError::ArrayTooShort { .. }, .. }
        ));
        assert_eq!(err.user_message(), "Error al procesar el plan de clase generado.");
    }

    #[tokio::test]
    async fn empty_reply_reports_missing_answer() {
        let provider = MockAIProvider::new().with_response("");

        let err = handler(&provider).handle(command()).await.unwrap_err();

        assert_eq!(err.user_message(), "No se generó respuesta de la IA");
    }
}
