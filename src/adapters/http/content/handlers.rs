//! HTTP handlers for reference content.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::download::download_response;
use crate::adapters::http::error::{export_error_response, ErrorResponse};
use crate::application::handlers::ExportDocumentHandler;
use crate::application::views::Section;
use crate::domain::reference::{
    techniques, FUNDAMENTALS, FUNDAMENTALS_HEADING, FUNDAMENTALS_SUBTITLE, KEY_CONCEPTS,
    KEY_CONCEPTS_HEADING, TECHNIQUES_TIP,
};

use super::dto::{ConceptsResponse, SectionsResponse, TechniquesResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ContentHandlers {
    exporter: Arc<ExportDocumentHandler>,
}

impl ContentHandlers {
    pub fn new(exporter: Arc<ExportDocumentHandler>) -> Self {
        Self { exporter }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/sections - Navigation entries in display order
pub async fn list_sections() -> Json<SectionsResponse> {
    Json(SectionsResponse {
        default: Section::default().id(),
        sections: Section::ALL.into_iter().map(Into::into).collect(),
    })
}

/// GET /api/concepts - Key concepts and model fundamentals
pub async fn get_concepts() -> Json<ConceptsResponse> {
    Json(ConceptsResponse {
        key_concepts_heading: KEY_CONCEPTS_HEADING,
        key_concepts: &KEY_CONCEPTS,
        fundamentals_heading: FUNDAMENTALS_HEADING,
        fundamentals_subtitle: FUNDAMENTALS_SUBTITLE,
        fundamentals: &FUNDAMENTALS,
    })
}

/// GET /api/techniques - Technique catalog
pub async fn list_techniques() -> Response {
    match techniques() {
        Ok(techniques) => (
            StatusCode::OK,
            Json(TechniquesResponse {
                tip: TECHNIQUES_TIP,
                techniques,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "technique catalog unavailable");
            ErrorResponse::new("catalog", "No se pudo cargar el catálogo de técnicas.")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/techniques/:slug/template - Printable worksheet download
pub async fn download_template(
    State(handlers): State<ContentHandlers>,
    Path(slug): Path<String>,
) -> Response {
    match handlers.exporter.export_worksheet(&slug) {
        Ok(document) => download_response(document),
        Err(e) => export_error_response(e),
    }
}
