//! Teacher practice quiz view controller.

use std::sync::Arc;

use crate::application::handlers::{GenerateTeacherQuizHandler, GenerationError};
use crate::domain::foundation::quiz_label;
use crate::domain::quiz::{
    AnswerFeedback, QuizError, QuizPhase, QuizRequest, TeacherQuiz, TeacherQuizQuestion,
    DEFAULT_QUIZ_QUESTIONS,
};

/// Button label while more questions remain.
pub const NEXT_QUESTION_LABEL: &str = "Siguiente Pregunta";
/// Button label on the final question.
pub const SHOW_RESULTS_LABEL: &str = "Ver Resultados";

/// Question count picker, quiz state and the generation request.
pub struct TeacherQuizView {
    handler: Arc<GenerateTeacherQuizHandler>,
    pub question_count: i64,
    quiz: TeacherQuiz,
    busy: bool,
    error: Option<String>,
}

impl TeacherQuizView {
    pub fn new(handler: Arc<GenerateTeacherQuizHandler>) -> Self {
        Self {
            handler,
            question_count: i64::from(DEFAULT_QUIZ_QUESTIONS),
            quiz: TeacherQuiz::Setup,
            busy: false,
            error: None,
        }
    }

    pub fn quiz(&self) -> &TeacherQuiz {
        &self.quiz
    }

    pub fn phase(&self) -> QuizPhase {
        self.quiz.phase()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates the count and marks generation in flight.
    ///
    /// Returns `None` when nothing should be requested: the count was
    /// rejected, a request is already running, or the quiz is not in setup.
    pub fn start_generation(&mut self) -> Option<QuizRequest> {
        if self.busy || self.quiz.phase() != QuizPhase::Setup {
            return None;
        }
        match QuizRequest::new(self.question_count) {
            Ok(request) => {
                self.busy = true;
                self.error = None;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }

    /// Loads the generated questions, or records the failure and stays in setup.
    pub fn finish_generation(
        &mut self,
        outcome: Result<Vec<TeacherQuizQuestion>, GenerationError>,
    ) -> Result<(), QuizError> {
        self.busy = false;
        match outcome {
            Ok(questions) => {
                let started = self.quiz.start(questions);
                if let Err(err) = &started {
                    self.error = Some(err.user_message().to_string());
                }
                started
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Ok(())
            }
        }
    }

    /// Generates questions and starts the quiz.
    pub async fn start(&mut self) -> Result<(), QuizError> {
        let Some(request) = self.start_generation() else {
            return Ok(());
        };
        let outcome = self.handler.generate(request).await;
        self.finish_generation(outcome)
    }

    pub fn select_option(&mut self, option: usize) -> Result<AnswerFeedback, QuizError> {
        self.quiz.select_option(option)
    }

    pub fn next(&mut self) -> Result<QuizPhase, QuizError> {
        self.quiz.advance()
    }

    /// Back to setup with no questions and a zero score.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.quiz.restart()?;
        self.error = None;
        Ok(())
    }

    /// Label of the advance button once the current question is answered.
    pub fn next_label(&self) -> Option<&'static str> {
        if !self.quiz.is_answered() {
            return None;
        }
        Some(if self.quiz.is_last_question() {
            SHOW_RESULTS_LABEL
        } else {
            NEXT_QUESTION_LABEL
        })
    }

    /// `A`, `B`, ... for the current question's options.
    pub fn option_labels(&self) -> Vec<String> {
        self.quiz
            .current_question()
            .map(|q| (0..q.options.len()).map(quiz_label).collect())
            .unwrap_or_default()
    }

    /// `Pregunta 2 de 5` while in progress.
    pub fn progress_label(&self) -> Option<String> {
        self.quiz
            .current_index()
            .map(|i| format!("Pregunta {} de {}", i + 1, self.quiz.total()))
    }

    pub fn verdict_message(&self) -> Option<&'static str> {
        self.quiz.verdict().map(|v| v.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::validation::JsonSchemaValidator;
    use crate::application::handlers::StructuredGenerator;
    use crate::ports::AIError;
    use serde_json::{json, Value};

    fn view(provider: &MockAIProvider) -> TeacherQuizView {
        let generator = StructuredGenerator::new(
            Arc::new(provider.clone()),
            Arc::new(JsonSchemaValidator::new()),
        );
        TeacherQuizView::new(Arc::new(GenerateTeacherQuizHandler::new(Arc::new(generator))))
    }

    fn quiz_reply(answers: &[i64]) -> Value {
        let questions: Vec<Value> = answers
            .iter()
            .enumerate()
            .map(|(i, answer)| {
                json!({
                    "id": i + 1,
                    "category": "Escenarios de Aula",
                    "question": format!("Pregunta {}", i + 1),
                    "options": ["A", "B", "C", "D"],
                    "correctOptionIndex": answer,
                    "explanation": "Porque conecta conceptos."
                })
            })
            .collect();
        json!({ "questions": questions })
    }

    #[tokio::test]
    async fn scores_two_of_three_and_restarts() {
        let provider = MockAIProvider::new().with_json(quiz_reply(&[1, 0, 2]));
        let mut view = view(&provider);
        view.question_count = 3;

        view.start().await.unwrap();
        assert_eq!(view.phase(), QuizPhase::InProgress);
        assert_eq!(view.option_labels(), vec!["A", "B", "C", "D"]);
        assert_eq!(view.progress_label().as_deref(), Some("Pregunta 1 de 3"));

        for choice in [1, 0, 1] {
            assert_eq!(view.next_label(), None);
            view.select_option(choice).unwrap();
            view.next().unwrap();
        }

        assert_eq!(view.phase(), QuizPhase::Results);
        assert_eq!(view.quiz().score(), 2);
        assert_eq!(view.quiz().total(), 3);
        assert_eq!(
            view.verdict_message(),
            Some("Buen trabajo. Sigue conectando los puntos.")
        );

        view.restart().unwrap();
        assert_eq!(view.phase(), QuizPhase::Setup);
        assert_eq!(view.quiz().score(), 0);
        assert!(view.quiz().questions().is_empty());
    }

    #[tokio::test]
    async fn last_question_offers_results() {
        let provider = MockAIProvider::new().with_json(quiz_reply(&[0, 0]));
        let mut view = view(&provider);
        view.question_count = 2;
        view.start().await.unwrap();

        view.select_option(0).unwrap();
        assert_eq!(view.next_label(), Some("Siguiente Pregunta"));
        view.next().unwrap();
        view.select_option(3).unwrap();
        assert_eq!(view.next_label(), Some("Ver Resultados"));
    }

    #[tokio::test]
    async fn generation_failure_stays_in_setup() {
        let provider = MockAIProvider::new().with_error(AIError::AuthenticationFailed);
        let mut view = view(&provider);

        view.start().await.unwrap();

        assert_eq!(view.phase(), QuizPhase::Setup);
        assert!(!view.is_busy());
        assert_eq!(view.error(), Some("Error al generar las preguntas"));
    }

    #[tokio::test]
    async fn count_outside_range_is_rejected() {
        let provider = MockAIProvider::new();
        let mut view = view(&provider);
        view.question_count = 0;

        view.start().await.unwrap();

        assert!(view.error().is_some());
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn generation_in_flight_blocks_another() {
        let provider = MockAIProvider::new();
        let mut view = view(&provider);

        assert!(view.start_generation().is_some());
        assert!(view.is_busy());
        assert!(view.start_generation().is_none());
    }

    #[tokio::test]
    async fn answering_twice_is_refused() {
        let provider = MockAIProvider::new().with_json(quiz_reply(&[2]));
        let mut view = view(&provider);
        view.question_count = 1;
        view.start().await.unwrap();

        let feedback = view.select_option(2).unwrap();
        assert!(feedback.is_correct);
        assert_eq!(view.select_option(1), Err(QuizError::AlreadyAnswered));
        assert_eq!(view.quiz().score(), 1);
    }
}
