//! Application handlers.
//!
//! Command handlers that validate input, call the model through the
//! structured generator, and build export documents.

mod export_document;
mod generate_assessment;
mod generate_lesson_plan;
mod generate_teacher_quiz;
mod generation_error;
mod structured_generator;

pub use export_document::ExportDocumentHandler;
pub use generate_assessment::{
    GenerateAssessmentCommand, GenerateAssessmentHandler, GeneratedAssessment,
};
pub use generate_lesson_plan::{
    GenerateLessonPlanCommand, GenerateLessonPlanHandler, GeneratedLessonPlan,
};
pub use generate_teacher_quiz::{GenerateTeacherQuizCommand, GenerateTeacherQuizHandler};
pub use generation_error::{
    failure_message, unreadable_reply_message, ErrorKind, GenerationError, EMPTY_REPLY_MESSAGE,
};
pub use structured_generator::StructuredGenerator;
