//! Teacher practice quiz: generated questions and the answering state machine.

mod question;
mod session;

pub use question::{
    QuizRequest, TeacherQuizQuestion, DEFAULT_QUIZ_QUESTIONS, MAX_QUIZ_QUESTIONS,
    MIN_QUIZ_QUESTIONS, QUIZ_OPTION_COUNT,
};
pub use session::{AnswerFeedback, QuizError, QuizPhase, ResultsVerdict, TeacherQuiz};

#[cfg(test)]
pub(crate) use question::fixtures;
