//! HTTP adapter for navigation and static reference content.

mod dto;
mod handlers;
mod routes;

pub use dto::{ConceptsResponse, SectionResponse, SectionsResponse, TechniquesResponse};
pub use handlers::ContentHandlers;
pub use routes::content_routes;
