//! HTTP DTOs for reference content.

use serde::Serialize;

use crate::application::views::Section;
use crate::domain::reference::{Fundamental, KeyConcept, Technique};

/// One navigation entry.
#[derive(Debug, Clone, Serialize)]
pub struct SectionResponse {
    pub id: &'static str,
    pub label: &'static str,
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            id: section.id(),
            label: section.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionsResponse {
    pub default: &'static str,
    pub sections: Vec<SectionResponse>,
}

/// Learning section content.
#[derive(Debug, Clone, Serialize)]
pub struct ConceptsResponse {
    pub key_concepts_heading: &'static str,
    pub key_concepts: &'static [KeyConcept],
    pub fundamentals_heading: &'static str,
    pub fundamentals_subtitle: &'static str,
    pub fundamentals: &'static [Fundamental],
}

#[derive(Debug, Clone, Serialize)]
pub struct TechniquesResponse {
    pub tip: &'static str,
    pub techniques: &'static [Technique],
}
