//! Printable documents.
//!
//! Composers turn generated content into a [`Document`]; adapters render it.

mod assessment;
mod document;
mod filename;
mod lesson_plan;
mod worksheet;

pub use assessment::assessment_document;
pub use document::{Block, Cell, Document, ListMarker, Span, SpanStyle, Stylesheet};
pub use filename::{
    assessment_filename, document_filename, lesson_plan_filename, underscore_whitespace,
    worksheet_filename, DOC_EXTENSION,
};
pub use lesson_plan::lesson_plan_document;
pub use worksheet::{worksheet_document, WORKSHEET_FOOTER};
