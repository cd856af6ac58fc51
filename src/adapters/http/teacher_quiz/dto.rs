//! HTTP DTOs for teacher quiz endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::views::{NEXT_QUESTION_LABEL, SHOW_RESULTS_LABEL};
use crate::domain::foundation::quiz_label;
use crate::domain::quiz::{
    AnswerFeedback, QuizPhase, ResultsVerdict, TeacherQuiz, TeacherQuizQuestion,
    DEFAULT_QUIZ_QUESTIONS,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

fn default_question_count() -> i64 {
    i64::from(DEFAULT_QUIZ_QUESTIONS)
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuizSessionRequest {
    #[serde(default = "default_question_count")]
    pub question_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    /// Zero-based option index.
    pub option: usize,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct QuizOptionResponse {
    pub label: String,
    pub text: String,
}

/// The question on screen. The answer and explanation appear once answered.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionResponse {
    pub id: i64,
    pub category: String,
    pub question: String,
    pub options: Vec<QuizOptionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestionResponse {
    fn new(question: &TeacherQuizQuestion, reveal: bool) -> Self {
        Self {
            id: question.id,
            category: question.category.clone(),
            question: question.question.clone(),
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(i, text)| QuizOptionResponse {
                    label: quiz_label(i),
                    text: text.clone(),
                })
                .collect(),
            correct_option_index: reveal.then_some(question.correct_option_index),
            explanation: reveal.then(|| question.explanation.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizVerdictResponse {
    pub verdict: ResultsVerdict,
    pub message: &'static str,
}

/// Snapshot of one quiz.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSessionResponse {
    pub id: String,
    pub phase: QuizPhase,
    pub score: usize,
    pub total: usize,
    /// One-based position of the current question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuizQuestionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<QuizVerdictResponse>,
}

impl QuizSessionResponse {
    pub fn new(id: Uuid, quiz: &TeacherQuiz) -> Self {
        let answered = quiz.is_answered();
        let next_label = answered.then(|| {
            if quiz.is_last_question() {
                SHOW_RESULTS_LABEL
            } else {
                NEXT_QUESTION_LABEL
            }
        });

        Self {
            id: id.to_string(),
            phase: quiz.phase(),
            score: quiz.score(),
            total: quiz.total(),
            position: quiz.current_index().map(|i| i + 1),
            current_question: quiz
                .current_question()
                .map(|q| QuizQuestionResponse::new(q, answered)),
            selected_option: quiz.selected_option(),
            next_label,
            verdict: quiz.verdict().map(|verdict| QuizVerdictResponse {
                verdict,
                message: verdict.message(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub feedback: AnswerFeedback,
    pub session: QuizSessionResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::fixtures::questions_with_answers;

    #[test]
    fn answer_is_hidden_until_answered() {
        let mut quiz = TeacherQuiz::default();
        quiz.start(questions_with_answers(&[2, 1])).unwrap();
        let id = Uuid::new_v4();

        let before = QuizSessionResponse::new(id, &quiz);
        let question = before.current_question.unwrap();
        assert_eq!(question.correct_option_index, None);
        assert_eq!(question.options[3].label, "D");
        assert_eq!(before.next_label, None);

        quiz.select_option(0).unwrap();
        let after = QuizSessionResponse::new(id, &quiz);
        assert_eq!(after.current_question.unwrap().correct_option_index, Some(2));
        assert_eq!(after.next_label, Some("Siguiente Pregunta"));
        assert_eq!(after.position, Some(1));
    }

    #[test]
    fn results_carry_verdict() {
        let mut quiz = TeacherQuiz::default();
        quiz.start(questions_with_answers(&[0])).unwrap();
        quiz.select_option(0).unwrap();
        quiz.advance().unwrap();

        let response = QuizSessionResponse::new(Uuid::new_v4(), &quiz);
        assert_eq!(response.phase, QuizPhase::Results);
        let verdict = response.verdict.unwrap();
        assert_eq!(verdict.verdict, ResultsVerdict::Mastery);
        assert!(response.current_question.is_none());
    }
}
