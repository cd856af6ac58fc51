//! HTTP adapter for the teacher practice quiz.
//!
//! Quizzes live in memory, keyed by a random id, until restarted or until
//! the process exits.

mod dto;
mod handlers;
mod routes;
mod store;

pub use dto::{
    AnswerRequest, AnswerResponse, CreateQuizSessionRequest, QuizOptionResponse,
    QuizQuestionResponse, QuizSessionResponse, QuizVerdictResponse,
};
pub use handlers::TeacherQuizHandlers;
pub use routes::teacher_quiz_routes;
pub use store::QuizSessionStore;
