//! Printable technique worksheets.

use super::document::{Block, Document, Span, Stylesheet};
use crate::domain::reference::Technique;

/// Credit line printed at the bottom of every worksheet.
pub const WORKSHEET_FOOTER: &str = "Recurso generado por Conceptos Clave App";

/// Wraps a technique's worksheet body with its title and footer.
pub fn worksheet_document(technique: &Technique) -> Document {
    let mut doc = Document::new(technique.title.clone(), Stylesheet::Worksheet);
    doc.push(Block::heading(1, technique.title.clone()))
        .extend(technique.blocks.iter().cloned())
        .extend([
            Block::Spacer,
            Block::classed_paragraph("footer", vec![Span::plain(WORKSHEET_FOOTER)]),
        ]);
    doc
}
