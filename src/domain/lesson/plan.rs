//! Concept-based lesson plan.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::SchemaValidationError;
use crate::domain::schema::ResponseSchema;

/// A lesson plan produced by one model call.
///
/// Deserialising goes through the same checks as [`LessonPlan::from_reply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireLessonPlan")]
pub struct LessonPlan {
    pub title: String,
    pub macro_concept: String,
    pub micro_concepts: Vec<String>,
    /// Enduring understanding linking two or more concepts.
    pub generalization: String,
    pub guiding_questions: GuidingQuestions,
    /// Inquiry sequence, never empty.
    pub activities: Vec<LearningActivity>,
    pub assessment_idea: String,
}

/// Guiding questions, one list per inquiry level. All three are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidingQuestions {
    pub factual: Vec<String>,
    pub conceptual: Vec<String>,
    pub debatable: Vec<String>,
}

/// One step of the inquiry cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningActivity {
    pub phase: String,
    pub activity: String,
    pub purpose: String,
    /// Free-form estimate such as "10 min".
    pub time: String,
}

impl LessonPlan {
    /// Shape the model is asked to return.
    pub fn response_schema() -> ResponseSchema {
        let string_list = || ResponseSchema::array(ResponseSchema::string());
        ResponseSchema::object(
            [
                ("title", ResponseSchema::string()),
                ("macroConcept", ResponseSchema::string()),
                ("microConcepts", string_list()),
                (
                    "generalization",
                    ResponseSchema::string().describe(
                        "Declaración de generalización que conecta dos o más conceptos.",
                    ),
                ),
                (
                    "guidingQuestions",
                    ResponseSchema::object(
                        [
                            ("factual", string_list()),
                            ("conceptual", string_list()),
                            ("debatable", string_list()),
                        ],
                        &["factual", "conceptual", "debatable"],
                    ),
                ),
                (
                    "activities",
                    ResponseSchema::array(ResponseSchema::object(
                        [
                            (
                                "phase",
                                ResponseSchema::string()
                                    .describe("Ej: Enganche, Investigación, etc."),
                            ),
                            ("activity", ResponseSchema::string()),
                            ("purpose", ResponseSchema::string()),
                            (
                                "time",
                                ResponseSchema::string()
                                    .describe("Duración estimada, ej: '10 min'"),
                            ),
                        ],
                        &["phase", "activity", "purpose", "time"],
                    )),
                ),
                ("assessmentIdea", ResponseSchema::string()),
            ],
            &[
                "title",
                "macroConcept",
                "microConcepts",
                "generalization",
                "guidingQuestions",
                "activities",
                "assessmentIdea",
            ],
        )
    }

    /// Builds a plan from a reply that already matches [`Self::response_schema`].
    ///
    /// # Errors
    ///
    /// `ArrayTooShort` when the reply has no activities.
    pub fn from_reply(reply: Value) -> Result<Self, SchemaValidationError> {
        let wire: WireLessonPlan =
            serde_json::from_value(reply).map_err(|e| SchemaValidationError::InvalidType {
                field: "root".to_string(),
                expected: "lesson plan".to_string(),
                actual: e.to_string(),
            })?;
        Self::try_from(wire)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLessonPlan {
    title: String,
    macro_concept: String,
    micro_concepts: Vec<String>,
    generalization: String,
    guiding_questions: GuidingQuestions,
    activities: Vec<LearningActivity>,
    assessment_idea: String,
}

impl TryFrom<WireLessonPlan> for LessonPlan {
    type Error = SchemaValidationError;

    fn try_from(wire: WireLessonPlan) -> Result<Self, Self::Error> {
        if wire.activities.is_empty() {
            return Err(SchemaValidationError::ArrayTooShort {
                field: "activities".to_string(),
                min: 1,
                actual: 0,
            });
        }

        Ok(Self {
            title: wire.title,
            macro_concept: wire.macro_concept,
            micro_concepts: wire.micro_concepts,
            generalization: wire.generalization,
            guiding_questions: wire.guiding_questions,
            activities: wire.activities,
            assessment_idea: wire.assessment_idea,
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn ecosystems_plan() -> LessonPlan {
        LessonPlan {
            title: "Redes de Vida".to_string(),
            macro_concept: "Sistemas".to_string(),
            micro_concepts: vec!["Interdependencia".to_string(), "Energía".to_string()],
            generalization: "Los sistemas vivos dependen del flujo de energía.".to_string(),
            guiding_questions: GuidingQuestions {
                factual: vec!["¿Qué es un productor?".to_string()],
                conceptual: vec!["¿Cómo afecta un cambio a la red?".to_string()],
                debatable: vec![],
            },
            activities: vec![LearningActivity {
                phase: "Enganche".to_string(),
                activity: "Observar un terrario".to_string(),
                purpose: "Activar ideas previas".to_string(),
                time: "10 min".to_string(),
            }],
            assessment_idea: "Diseñar una red trófica local.".to_string(),
        }
    }
}
