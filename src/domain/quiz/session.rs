//! Teacher practice quiz state machine.
//!
//! The quiz is one tagged value: it is either being set up, in progress on a
//! given question, or showing results. Answer state only exists while in
//! progress, so "answered during setup" cannot be represented.

use std::mem;

use serde::Serialize;
use thiserror::Error;

use super::question::TeacherQuizQuestion;
use crate::domain::foundation::{StateMachine, TransitionError};

/// Coarse phase of the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    Setup,
    InProgress,
    Results,
}

impl StateMachine for QuizPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            QuizPhase::Setup => vec![QuizPhase::InProgress],
            QuizPhase::InProgress => vec![QuizPhase::Results],
            QuizPhase::Results => vec![QuizPhase::Setup],
        }
    }
}

/// Illegal moves on the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("no question is being asked")]
    NotInProgress,

    #[error("question already answered")]
    AlreadyAnswered,

    #[error("question not answered yet")]
    NotAnswered,

    #[error("option {option} does not exist; the question has {available} options")]
    InvalidOption { option: usize, available: usize },
}

impl QuizError {
    /// Message shown to the teacher.
    pub fn user_message(&self) -> &'static str {
        match self {
            QuizError::InvalidTransition(_) | QuizError::NotInProgress => {
                "Esta acción no está disponible en este momento del entrenamiento."
            }
            QuizError::NoQuestions => "No se recibieron preguntas para el entrenamiento.",
            QuizError::AlreadyAnswered => "Ya respondiste esta pregunta.",
            QuizError::NotAnswered => "Selecciona una respuesta antes de continuar.",
            QuizError::InvalidOption { .. } => "La opción seleccionada no existe.",
        }
    }
}

/// What the teacher learns right after answering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub selected_option: usize,
    pub correct_option_index: usize,
    pub is_correct: bool,
    pub explanation: String,
}

/// Closing message on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsVerdict {
    /// Every answer correct.
    Mastery,
    /// More than half correct.
    GoodWork,
    KeepPracticing,
}

impl ResultsVerdict {
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            ResultsVerdict::Mastery
        } else if score * 2 > total {
            ResultsVerdict::GoodWork
        } else {
            ResultsVerdict::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultsVerdict::Mastery => "¡Excelente! Dominas el paradigma conceptual.",
            ResultsVerdict::GoodWork => "Buen trabajo. Sigue conectando los puntos.",
            ResultsVerdict::KeepPracticing => {
                "Sigue practicando para mover tu pensamiento de lo factual a lo conceptual."
            }
        }
    }
}

/// Teacher practice quiz.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeacherQuiz {
    #[default]
    Setup,
    InProgress {
        questions: Vec<TeacherQuizQuestion>,
        index: usize,
        score: usize,
        /// Option chosen for the current question; `Some` once answered.
        selected: Option<usize>,
    },
    Results {
        questions: Vec<TeacherQuizQuestion>,
        score: usize,
    },
}

impl TeacherQuiz {
    pub fn phase(&self) -> QuizPhase {
        match self {
            TeacherQuiz::Setup => QuizPhase::Setup,
            TeacherQuiz::InProgress { .. } => QuizPhase::InProgress,
            TeacherQuiz::Results { .. } => QuizPhase::Results,
        }
    }

    /// Loads freshly generated questions and moves to the first one.
    pub fn start(&mut self, questions: Vec<TeacherQuizQuestion>) -> Result<(), QuizError> {
        self.phase().transition_to(QuizPhase::InProgress)?;
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        *self = TeacherQuiz::InProgress {
            questions,
            index: 0,
            score: 0,
            selected: None,
        };
        Ok(())
    }

    /// Answers the current question. Scores at most once per question.
    pub fn select_option(&mut self, option: usize) -> Result<AnswerFeedback, QuizError> {
        let TeacherQuiz::InProgress {
            questions,
            index,
            score,
            selected,
        } = self
        else {
            return Err(QuizError::NotInProgress);
        };
        if selected.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        let question = &questions[*index];
        if option >= question.options.len() {
            return Err(QuizError::InvalidOption {
                option,
                available: question.options.len(),
            });
        }

        let is_correct = option == question.correct_option_index;
        if is_correct {
            *score += 1;
        }
        *selected = Some(option);

        Ok(AnswerFeedback {
            selected_option: option,
            correct_option_index: question.correct_option_index,
            is_correct,
            explanation: question.explanation.clone(),
        })
    }

    /// Moves past an answered question; after the last one, shows results.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        let TeacherQuiz::InProgress {
            questions,
            index,
            selected,
            ..
        } = self
        else {
            return Err(QuizError::NotInProgress);
        };
        if selected.is_none() {
            return Err(QuizError::NotAnswered);
        }

        if *index + 1 < questions.len() {
            *index += 1;
            *selected = None;
            return Ok(QuizPhase::InProgress);
        }

        let next = self.phase().transition_to(QuizPhase::Results)?;
        if let TeacherQuiz::InProgress {
            questions, score, ..
        } = mem::take(self)
        {
            *self = TeacherQuiz::Results { questions, score };
        }
        Ok(next)
    }

    /// Discards everything and returns to setup. Only valid from results.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.phase().transition_to(QuizPhase::Setup)?;
        *self = TeacherQuiz::Setup;
        Ok(())
    }

    pub fn score(&self) -> usize {
        match self {
            TeacherQuiz::Setup => 0,
            TeacherQuiz::InProgress { score, .. } | TeacherQuiz::Results { score, .. } => *score,
        }
    }

    /// Number of loaded questions.
    pub fn total(&self) -> usize {
        self.questions().len()
    }

    pub fn questions(&self) -> &[TeacherQuizQuestion] {
        match self {
            TeacherQuiz::Setup => &[],
            TeacherQuiz::InProgress { questions, .. } | TeacherQuiz::Results { questions, .. } => {
                questions
            }
        }
    }

    /// Zero-based position of the question being asked.
    pub fn current_index(&self) -> Option<usize> {
        match self {
            TeacherQuiz::InProgress { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&TeacherQuizQuestion> {
        match self {
            TeacherQuiz::InProgress {
                questions, index, ..
            } => questions.get(*index),
            _ => None,
        }
    }

    pub fn selected_option(&self) -> Option<usize> {
        match self {
            TeacherQuiz::InProgress { selected, .. } => *selected,
            _ => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.selected_option().is_some()
    }

    /// True while on the final question.
    pub fn is_last_question(&self) -> bool {
        match self {
            TeacherQuiz::InProgress {
                questions, index, ..
            } => *index + 1 == questions.len(),
            _ => false,
        }
    }

    pub fn verdict(&self) -> Option<ResultsVerdict> {
        match self {
            TeacherQuiz::Results { questions, score } => {
                Some(ResultsVerdict::for_score(*score, questions.len()))
            }
            _ => None,
        }
    }
}
