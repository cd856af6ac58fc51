//! HTTP adapter for the lesson planner.

mod dto;
mod handlers;
mod routes;

pub use dto::{ExportLessonPlanRequest, LessonPlanResponse, PlannerRequest};
pub use handlers::LessonPlanHandlers;
pub use routes::lesson_plan_routes;
