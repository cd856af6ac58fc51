//! Formative assessment produced by the model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{whole_number, SchemaValidationError};
use crate::domain::schema::ResponseSchema;

/// A generated assessment: instructions plus ordered questions.
///
/// Deserialising applies the same rules as [`AssessmentResult::from_reply`],
/// so an assessment posted back for export is held to them too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireAssessment")]
pub struct AssessmentResult {
    pub title: String,
    pub instructions: String,
    pub questions: Vec<AssessmentQuestion>,
}

/// Whether a question tests recall or understanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptFocus {
    Factual,
    Conceptual,
}

impl ConceptFocus {
    /// Tag printed after the question text, e.g. `CONCEPTUAL`.
    pub fn tag(self) -> &'static str {
        match self {
            ConceptFocus::Factual => "FACTUAL",
            ConceptFocus::Conceptual => "CONCEPTUAL",
        }
    }

    /// Spanish label for on-screen badges.
    pub fn label(self) -> &'static str {
        match self {
            ConceptFocus::Factual => "Fáctico",
            ConceptFocus::Conceptual => "Conceptual",
        }
    }
}

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFormat {
    /// Options with exactly one correct entry, `correct_option_index < options.len()`.
    MultipleChoice {
        options: Vec<String>,
        correct_option_index: usize,
    },
    /// Written answer graded with a rubric.
    OpenEnded,
}

impl QuestionFormat {
    /// Heading used in the answer key.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionFormat::MultipleChoice { .. } => "Selección Múltiple",
            QuestionFormat::OpenEnded => "Abierta",
        }
    }
}

/// One assessment question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireQuestion", into = "WireQuestion")]
pub struct AssessmentQuestion {
    pub id: i64,
    pub question: String,
    pub format: QuestionFormat,
    /// Explanation for multiple choice, rubric for open-ended questions.
    pub answer_key_or_rubric: String,
    pub concept_focus: ConceptFocus,
}

impl AssessmentQuestion {
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.format, QuestionFormat::MultipleChoice { .. })
    }

    fn from_wire(wire: WireQuestion, path: &str) -> Result<Self, SchemaValidationError> {
        let format = match wire.kind {
            WireQuestionType::MultipleChoice => {
                let options = wire
                    .options
                    .ok_or_else(|| SchemaValidationError::missing(format!("{}.options", path)))?;
                if options.is_empty() {
                    return Err(SchemaValidationError::ArrayTooShort {
                        field: format!("{}.options", path),
                        min: 1,
                        actual: 0,
                    });
                }
                let index = wire.correct_option_index.ok_or_else(|| {
                    SchemaValidationError::missing(format!("{}.correctOptionIndex", path))
                })?;
                let correct_option_index = usize::try_from(index)
                    .ok()
                    .filter(|i| *i < options.len())
                    .ok_or_else(|| {
                        SchemaValidationError::index_out_of_range(
                            format!("{}.correctOptionIndex", path),
                            index,
                            options.len(),
                        )
                    })?;
                QuestionFormat::MultipleChoice {
                    options,
                    correct_option_index,
                }
            }
            WireQuestionType::OpenEnded => {
                if wire.options.as_ref().is_some_and(|o| !o.is_empty()) {
                    return Err(SchemaValidationError::Unexpected {
                        field: format!("{}.options", path),
                        reason: "open-ended questions have no options".to_string(),
                    });
                }
                if wire.correct_option_index.is_some() {
                    return Err(SchemaValidationError::Unexpected {
                        field: format!("{}.correctOptionIndex", path),
                        reason: "open-ended questions have no correct option".to_string(),
                    });
                }
                QuestionFormat::OpenEnded
            }
        };

        Ok(Self {
            id: wire.id,
            question: wire.question,
            format,
            answer_key_or_rubric: wire.answer_key_or_rubric,
            concept_focus: wire.concept_focus,
        })
    }
}

impl AssessmentResult {
    /// Shape the model is asked to return.
    pub fn response_schema() -> ResponseSchema {
        ResponseSchema::object(
            [
                ("title", ResponseSchema::string()),
                ("instructions", ResponseSchema::string()),
                (
                    "questions",
                    ResponseSchema::array(ResponseSchema::object(
                        [
                            ("id", ResponseSchema::integer()),
                            (
                                "type",
                                ResponseSchema::string_enum(&["multiple-choice", "open-ended"]),
                            ),
                            ("question", ResponseSchema::string()),
                            (
                                "options",
                                ResponseSchema::array(ResponseSchema::string()).describe(
                                    "Lista de opciones a, b, c, d. Requerido solo si type es multiple-choice",
                                ),
                            ),
                            (
                                "correctOptionIndex",
                                ResponseSchema::integer().describe(
                                    "Index 0-3 del array options, solo si es multiple-choice",
                                ),
                            ),
                            (
                                "answerKeyOrRubric",
                                ResponseSchema::string().describe(
                                    "Explicación de la respuesta correcta o criterios de evaluación para preguntas abiertas",
                                ),
                            ),
                            (
                                "conceptFocus",
                                ResponseSchema::string_enum(&["factual", "conceptual"]),
                            ),
                        ],
                        &["id", "type", "question", "answerKeyOrRubric", "conceptFocus"],
                    )),
                ),
            ],
            &["title", "instructions", "questions"],
        )
    }

    /// Builds an assessment from a reply that already matches
    /// [`Self::response_schema`], enforcing the per-format rules.
    ///
    /// # Errors
    ///
    /// - `ArrayTooShort` when no questions came back
    /// - `MissingRequired`/`OutOfRange` for incomplete multiple-choice questions
    /// - `Unexpected` for options or an answer index on an open-ended question
    pub fn from_reply(reply: Value) -> Result<Self, SchemaValidationError> {
        let wire: WireAssessment =
            serde_json::from_value(reply).map_err(|e| SchemaValidationError::InvalidType {
                field: "root".to_string(),
                expected: "assessment".to_string(),
                actual: e.to_string(),
            })?;
        Self::try_from(wire)
    }

    /// Number of (multiple-choice, open-ended) questions.
    pub fn counts(&self) -> (usize, usize) {
        let mc = self
            .questions
            .iter()
            .filter(|q| q.is_multiple_choice())
            .count();
        (mc, self.questions.len() - mc)
    }
}

#[derive(Deserialize)]
pub struct WireAssessment {
    title: String,
    instructions: String,
    questions: Vec<WireQuestion>,
}

impl TryFrom<WireAssessment> for AssessmentResult {
    type Error = SchemaValidationError;

    fn try_from(wire: WireAssessment) -> Result<Self, Self::Error> {
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
            match AssessmentQuestion::from_wire(q, &format!("questions[{}]", i)) {
                Ok(question) => questions.push(question),
                Err(e) => errors.push(e),
            }
        }
        if let Some(err) = SchemaValidationError::collect(errors) {
            return Err(err);
        }

        Ok(Self {
            title: wire.title,
            instructions: wire.instructions,
            questions,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireQuestionType {
    MultipleChoice,
    OpenEnded,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireQuestion {
    #[serde(deserialize_with = "whole_number::deserialize")]
    id: i64,
    #[serde(rename = "type")]
    kind: WireQuestionType,
    question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "whole_number::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    correct_option_index: Option<i64>,
    answer_key_or_rubric: String,
    concept_focus: ConceptFocus,
}

impl TryFrom<WireQuestion> for AssessmentQuestion {
    type Error = SchemaValidationError;

    fn try_from(wire: WireQuestion) -> Result<Self, Self::Error> {
        AssessmentQuestion::from_wire(wire, "question")
    }
}

impl From<AssessmentQuestion> for WireQuestion {
    fn from(q: AssessmentQuestion) -> Self {
        let (kind, options, correct_option_index) = match q.format {
            QuestionFormat::MultipleChoice {
                options,
                correct_option_index,
            } => (
                WireQuestionType::MultipleChoice,
                Some(options),
                Some(correct_option_index as i64),
            ),
            QuestionFormat::OpenEnded => (WireQuestionType::OpenEnded, None, None),
        };
        WireQuestion {
            id: q.id,
            kind,
            question: q.question,
            options,
            correct_option_index,
            answer_key_or_rubric: q.answer_key_or_rubric,
            concept_focus: q.concept_focus,
        }
    }
}
