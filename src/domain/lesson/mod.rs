//! Lesson planning: the generated plan and the form that requests it.

mod form;
mod plan;

pub use form::{LessonDuration, PlannerForm};
pub use plan::{GuidingQuestions, LearningActivity, LessonPlan};

#[cfg(test)]
pub(crate) use plan::fixtures;
