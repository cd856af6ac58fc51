//! Teacher practice questions and the request that asks for them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::session::TeacherQuiz;
use crate::domain::foundation::{whole_number, SchemaValidationError, ValidationError};
use crate::domain::schema::ResponseSchema;

/// Number of options every practice question carries.
pub const QUIZ_OPTION_COUNT: usize = 4;
/// Smallest quiz a teacher can ask for.
pub const MIN_QUIZ_QUESTIONS: u32 = 1;
/// Largest quiz a teacher can ask for.
pub const MAX_QUIZ_QUESTIONS: u32 = 10;
/// Slider default.
pub const DEFAULT_QUIZ_QUESTIONS: u32 = 5;

/// A multiple-choice question about concept-based teaching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherQuizQuestion {
    pub id: i64,
    /// e.g. "Escenario", "Teoría".
    pub category: String,
    pub question: String,
    /// Always four entries.
    pub options: Vec<String>,
    pub correct_option_index: usize,
    /// Feedback grounded in the theory, shown after answering.
    pub explanation: String,
}

/// How many questions to generate, 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizRequest {
    question_count: u32,
}

impl QuizRequest {
    /// # Errors
    ///
    /// `OutOfRange` outside 1..=10.
    pub fn new(question_count: i64) -> Result<Self, ValidationError> {
        u32::try_from(question_count)
            .ok()
            .filter(|n| (MIN_QUIZ_QUESTIONS..=MAX_QUIZ_QUESTIONS).contains(n))
            .map(|question_count| Self { question_count })
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "question_count",
                    i64::from(MIN_QUIZ_QUESTIONS),
                    i64::from(MAX_QUIZ_QUESTIONS),
                    question_count,
                )
            })
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }
}

impl Default for QuizRequest {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUIZ_QUESTIONS,
        }
    }
}

impl TeacherQuiz {
    /// Shape the model is asked to return.
    pub fn response_schema() -> ResponseSchema {
        ResponseSchema::object(
            [(
                "questions",
                ResponseSchema::array(ResponseSchema::object(
                    [
                        ("id", ResponseSchema::integer()),
                        (
                            "category",
                            ResponseSchema::string()
                                .describe("Categoría de la pregunta ej: Escenario, Teoría"),
                        ),
                        ("question", ResponseSchema::string()),
                        (
                            "options",
                            ResponseSchema::array(ResponseSchema::string())
                                .describe("4 opciones de respuesta"),
                        ),
                        (
                            "correctOptionIndex",
                            ResponseSchema::integer().describe("0-3 index"),
                        ),
                        (
                            "explanation",
                            ResponseSchema::string().describe("Explicación pedagógica detallada"),
                        ),
                    ],
                    &[
                        "id",
                        "question",
                        "options",
                        "correctOptionIndex",
                        "explanation",
                        "category",
                    ],
                )),
            )],
            &["questions"],
        )
    }

    /// Extracts the question list from a reply matching [`Self::response_schema`].
    ///
    /// # Errors
    ///
    /// Fails unless there is at least one question, each with exactly four
    /// options and an answer index pointing at one of them.
    pub fn questions_from_reply(
        reply: Value,
    ) -> Result<Vec<TeacherQuizQuestion>, SchemaValidationError> {
        let wire: WireQuiz =
            serde_json::from_value(reply).map_err(|e| SchemaValidationError::InvalidType {
                field: "root".to_string(),
                expected: "teacher quiz".to_string(),
                actual: e.to_string(),
            })?;

        if wire.questions.is_empty() {
            return Err(SchemaValidationError::ArrayTooShort {
                field: "questions".to_string(),
                min: 1,
                actual: 0,
            });
        }

        let mut questions = Vec::with_capacity(wire.questions.len());
        let mut errors = Vec::new();
        for (i, q) in wire.questions.into_iter().enumerate() {
            match q.into_question(&format!("questions[{}]", i)) {
                Ok(question) => questions.push(question),
                Err(e) => errors.push(e),
            }
        }
        match SchemaValidationError::collect(errors) {
            Some(err) => Err(err),
            None => Ok(questions),
        }
    }
}

#[derive(Deserialize)]
struct WireQuiz {
    questions: Vec<WireQuizQuestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireQuizQuestion {
    #[serde(deserialize_with = "whole_number::deserialize")]
    id: i64,
    category: String,
    question: String,
    options: Vec<String>,
    #[serde(deserialize_with = "whole_number::deserialize")]
    correct_option_index: i64,
    explanation: String,
}

impl WireQuizQuestion {
    fn into_question(self, path: &str) -> Result<TeacherQuizQuestion, SchemaValidationError> {
        let options_field = format!("{}.options", path);
        if self.options.len() < QUIZ_OPTION_COUNT {
            return Err(SchemaValidationError::ArrayTooShort {
                field: options_field,
                min: QUIZ_OPTION_COUNT,
                actual: self.options.len(),
            });
        }
        if self.options.len() > QUIZ_OPTION_COUNT {
            return Err(SchemaValidationError::Unexpected {
                field: options_field,
                reason: format!(
                    "expected {} options, got {}",
                    QUIZ_OPTION_COUNT,
                    self.options.len()
                ),
            });
        }

        let correct_option_index = usize::try_from(self.correct_option_index)
            .ok()
            .filter(|i| *i < QUIZ_OPTION_COUNT)
            .ok_or_else(|| {
                SchemaValidationError::index_out_of_range(
                    format!("{}.correctOptionIndex", path),
                    self.correct_option_index,
                    QUIZ_OPTION_COUNT,
                )
            })?;

        Ok(TeacherQuizQuestion {
            id: self.id,
            category: self.category,
            question: self.question,
            options: self.options,
            correct_option_index,
            explanation: self.explanation,
        })
    }
}
