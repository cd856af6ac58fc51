//! Document Renderer Port - Format conversion interface.
//!
//! This port defines the contract for turning a structured [`Document`] into
//! downloadable bytes. Composition lives in the domain; adapters (like
//! `WordHtmlRenderer`) own markup, styling and escaping.

use thiserror::Error;

use crate::domain::export::Document;

/// MIME type understood by legacy word processors.
pub const WORD_CONTENT_TYPE: &str = "application/msword";

/// Port for rendering documents to a downloadable format.
///
/// # Contract
///
/// Implementations must:
/// - Escape every text node and attribute taken from the document
/// - Produce byte-identical output for identical input
/// - Report malformed documents instead of emitting broken markup
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn DocumentRenderer = get_renderer();
/// let doc = lesson_plan_document(&plan, &form);
/// let file = renderer.render(&doc, &lesson_plan_filename(&plan.title))?;
/// ```
pub trait DocumentRenderer: Send + Sync {
    /// Renders the document and attaches the given download filename.
    fn render(&self, document: &Document, filename: &str) -> Result<ExportedDocument, ExportError>;
}

/// Exported document with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: Vec<u8>, content_type: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content,
            content_type: content_type.into(),
            filename: filename.into(),
        }
    }

    /// Content size in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The document violates a structural rule of the target format.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Writing the output failed.
    #[error("Rendering failed")]
    Render(#[from] std::fmt::Error),

    /// No worksheet exists for the requested technique.
    #[error("Unknown technique: {0}")]
    UnknownTechnique(String),

    /// The embedded technique catalog could not be loaded.
    #[error("Technique catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

impl ExportError {
    /// Create an invalid document error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidDocument(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_document_reports_size() {
        let doc = ExportedDocument::new(b"<html></html>".to_vec(), WORD_CONTENT_TYPE, "a.doc");
        assert_eq!(doc.len(), 13);
        assert!(!doc.is_empty());
        assert_eq!(doc.content_type, "application/msword");
    }

    #[test]
    fn export_error_displays_messages() {
        let err = ExportError::invalid("heading level 9");
        assert_eq!(err.to_string(), "Invalid document: heading level 9");

        let err = ExportError::UnknownTechnique("nada".to_string());
        assert!(err.to_string().contains("nada"));
    }

    #[test]
    fn document_renderer_is_object_safe() {
        fn check<T: DocumentRenderer + ?Sized>() {}
        check::<dyn DocumentRenderer>();
    }
}
