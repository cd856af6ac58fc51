//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter; [`api_router`] mounts them all.

pub mod assessments;
pub mod content;
pub mod download;
pub mod error;
pub mod lesson_plans;
pub mod teacher_quiz;

mod router;

pub use download::{content_disposition, download_response};
pub use error::ErrorResponse;
pub use router::{api_router, app_router, ApiDependencies};
