//! Technique worksheet catalog.
//!
//! The catalog is embedded YAML parsed once on first use.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::export::Block;

/// A classroom routine with a printable worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    /// URL-safe identifier.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Worksheet body, without the title heading or footer.
    pub blocks: Vec<Block>,
}

/// Advice shown above the technique list.
pub const TECHNIQUES_TIP: &str = "Tip Pedagógico: No utilices estas herramientas solo como actividades de relleno. Úsalas deliberadamente para ayudar a los estudiantes a procesar hechos y extraer generalizaciones.";

static CATALOG_YAML: &str = include_str!("techniques.yaml");

static CATALOG: Lazy<Result<Vec<Technique>, String>> =
    Lazy::new(|| serde_yaml::from_str(CATALOG_YAML).map_err(|e| e.to_string()));

/// Error raised when the embedded catalog cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("technique catalog is malformed: {0}")]
pub struct CatalogError(pub String);

/// All techniques, in display order.
pub fn techniques() -> Result<&'static [Technique], CatalogError> {
    CATALOG
        .as_ref()
        .map(Vec::as_slice)
        .map_err(|e| CatalogError(e.clone()))
}

/// Looks a technique up by slug.
pub fn find_technique(slug: &str) -> Result<Option<&'static Technique>, CatalogError> {
    Ok(techniques()?.iter().find(|t| t.slug == slug))
}
