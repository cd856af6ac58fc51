//! HTTP routes for reference content.

use axum::{routing::get, Router};

use super::handlers::{
    download_template, get_concepts, list_sections, list_techniques, ContentHandlers,
};

/// Creates the reference content router.
pub fn content_routes(handlers: ContentHandlers) -> Router {
    Router::new()
        .route("/api/sections", get(list_sections))
        .route("/api/concepts", get(get_concepts))
        .route("/api/techniques", get(list_techniques))
        .route("/api/techniques/:slug/template", get(download_template))
        .with_state(handlers)
}
