//! Static reference content: key concepts, model fundamentals and technique
//! worksheets.

mod concepts;
mod techniques;

pub use concepts::{
    Fundamental, KeyConcept, Point, FUNDAMENTALS, FUNDAMENTALS_HEADING, FUNDAMENTALS_SUBTITLE,
    KEY_CONCEPTS, KEY_CONCEPTS_HEADING,
};
pub use techniques::{find_technique, techniques, CatalogError, Technique, TECHNIQUES_TIP};
