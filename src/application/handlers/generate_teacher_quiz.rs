//! GenerateTeacherQuizHandler - Command handler for teacher practice questions.

use std::sync::Arc;

use super::generation_error::GenerationError;
use super::structured_generator::{rejected, StructuredGenerator};
use crate::application::prompts::teacher_quiz_prompt;
use crate::domain::quiz::{QuizRequest, TeacherQuiz, TeacherQuizQuestion};
use crate::ports::Feature;

/// Command to generate a practice quiz.
#[derive(Debug, Clone, Copy)]
pub struct GenerateTeacherQuizCommand {
    pub question_count: i64,
}

/// Handler for teacher quiz generation.
pub struct GenerateTeacherQuizHandler {
    generator: Arc<StructuredGenerator>,
}

impl GenerateTeacherQuizHandler {
    pub fn new(generator: Arc<StructuredGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateTeacherQuizCommand,
    ) -> Result<Vec<TeacherQuizQuestion>, GenerationError> {
        let request = QuizRequest::new(cmd.question_count)?;
        self.generate(request).await
    }

    /// Generates questions for an already validated request.
    pub async fn generate(
        &self,
        request: QuizRequest,
    ) -> Result<Vec<TeacherQuizQuestion>, GenerationError> {
        let reply = self
            .generator
            .generate(
                Feature::TeacherQuiz,
                teacher_quiz_prompt(&request),
                &TeacherQuiz::response_schema(),
            )
            .await?;

        let questions = TeacherQuiz::questions_from_reply(reply)
            .map_err(|e| rejected(Feature::TeacherQuiz, e))?;

        if questions.len() != request.question_count() as usize {
            tracing::warn!(
                requested = request.question_count(),
                received = questions.len(),
                "teacher quiz length differs from request"
            );
        }

        tracing::info!(questions = questions.len(), "teacher quiz generated");
        Ok(questions)
    }
}
