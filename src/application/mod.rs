//! Application layer - Handlers, prompts and view controllers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
pub mod prompts;
pub mod views;

pub use handlers::{
    ErrorKind, ExportDocumentHandler, GenerateAssessmentCommand, GenerateAssessmentHandler,
    GenerateLessonPlanCommand, GenerateLessonPlanHandler, GenerateTeacherQuizCommand,
    GenerateTeacherQuizHandler, GeneratedAssessment, GeneratedLessonPlan, GenerationError,
    StructuredGenerator,
};
