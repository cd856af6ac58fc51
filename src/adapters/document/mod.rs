//! Document adapters - Implementations of the document rendering port.
//!
//! - `WordHtmlRenderer` - Renders documents as Word-compatible HTML packages

mod word_html_renderer;

pub use word_html_renderer::{html_escape, WordHtmlRenderer};
