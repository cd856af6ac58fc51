//! HTTP adapter for the assessment generator.

mod dto;
mod handlers;
mod routes;

pub use dto::{AssessmentRequest, AssessmentResponse, ExportAssessmentRequest};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
