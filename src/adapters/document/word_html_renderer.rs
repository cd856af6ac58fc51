//! Word-compatible HTML renderer.
//!
//! Legacy word processors open an HTML page declaring the Office namespaces
//! as a native document when it is served as `application/msword`. This
//! adapter emits that package from a structured [`Document`].
//!
//! # Architecture
//!
//! This adapter implements the `DocumentRenderer` port. Composers in
//! `domain::export` decide what goes into a document; all markup, styling
//! and escaping decisions live here.

use std::fmt::Write;

use crate::domain::export::{Block, Cell, Document, ListMarker, Span, SpanStyle, Stylesheet};
use crate::ports::{DocumentRenderer, ExportError, ExportedDocument, WORD_CONTENT_TYPE};

/// Byte order mark so word processors detect UTF-8.
const BOM: char = '\u{feff}';

const HTML_OPEN: &str = "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
xmlns:w='urn:schemas-microsoft-com:office:word' \
xmlns='http://www.w3.org/TR/REC-html40'>";

const PAGE_BREAK: &str = "<br style=\"page-break-before: always;\">";

/// Underscores per ruled writing line.
const WRITING_LINE: &str =
    "__________________________________________________________________________________";

/// Renders documents as Word-compatible HTML.
///
/// Output is deterministic: the same document always yields the same bytes.
///
/// # Example
///
/// ```rust,ignore
/// let renderer = WordHtmlRenderer::new();
/// let file = renderer.render(&lesson_plan_document(&plan, &form), "Plan_Clase_Redes.doc")?;
/// assert_eq!(file.content_type, "application/msword");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordHtmlRenderer;

impl WordHtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders the full HTML package, BOM included.
    pub fn render_html(&self, document: &Document) -> Result<String, ExportError> {
        let mut out = String::with_capacity(4096);
        out.push(BOM);
        write!(
            out,
            "{open}<head><meta charset=\"utf-8\"><title>{title}</title><style>{css}</style></head><body>",
            open = HTML_OPEN,
            title = html_escape(&document.title),
            css = stylesheet_css(document.stylesheet),
        )?;
        for block in &document.blocks {
            write_block(&mut out, block)?;
        }
        out.push_str("</body></html>");
        Ok(out)
    }
}

impl DocumentRenderer for WordHtmlRenderer {
    fn render(&self, document: &Document, filename: &str) -> Result<ExportedDocument, ExportError> {
        let html = self.render_html(document)?;
        tracing::debug!(
            filename,
            bytes = html.len(),
            stylesheet = ?document.stylesheet,
            "rendered word document"
        );
        Ok(ExportedDocument::new(
            html.into_bytes(),
            WORD_CONTENT_TYPE,
            filename,
        ))
    }
}

fn write_block(out: &mut String, block: &Block) -> Result<(), ExportError> {
    match block {
        Block::Heading { level, text } => {
            if !(1..=3).contains(level) {
                return Err(ExportError::invalid(format!("heading level {}", level)));
            }
            write!(out, "<h{0}>{1}</h{0}>", level, html_escape(text))?;
        }
        Block::Paragraph { spans, class } => {
            out.push_str("<p");
            write_class(out, class.as_deref())?;
            out.push('>');
            write_spans(out, spans)?;
            out.push_str("</p>");
        }
        Block::List { marker, items } => {
            out.push_str(match marker {
                ListMarker::Bullet => "<ul>",
                ListMarker::None => "<ul class=\"options\">",
            });
            for item in items {
                write!(out, "<li>{}</li>", html_escape(item))?;
            }
            out.push_str("</ul>");
        }
        Block::Table { header, rows, class } => {
            out.push_str("<table");
            write_class(out, class.as_deref())?;
            out.push('>');
            if !header.is_empty() {
                out.push_str("<tr>");
                for cell in header {
                    write_cell(out, "th", cell)?;
                }
                out.push_str("</tr>");
            }
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    write_cell(out, "td", cell)?;
                }
                out.push_str("</tr>");
            }
            out.push_str("</table>");
        }
        Block::Container { class, blocks } => {
            out.push_str("<div");
            write_class(out, Some(class))?;
            out.push('>');
            for inner in blocks {
                write_block(out, inner)?;
            }
            out.push_str("</div>");
        }
        Block::WritingLines { count } => {
            if *count > 0 {
                let lines = vec![WRITING_LINE; *count].join("<br><br>");
                write!(out, "<p class=\"lines\">{}</p>", lines)?;
            }
        }
        Block::Rule => out.push_str("<hr>"),
        Block::Spacer => out.push_str("<br>"),
        Block::PageBreak => out.push_str(PAGE_BREAK),
    }
    Ok(())
}

fn write_spans(out: &mut String, spans: &[Span]) -> Result<(), ExportError> {
    for span in spans {
        let text = html_escape(&span.text);
        match span.style {
            SpanStyle::Plain => out.push_str(&text),
            SpanStyle::Strong => write!(out, "<strong>{}</strong>", text)?,
            SpanStyle::Emphasis => write!(out, "<em>{}</em>", text)?,
            SpanStyle::Muted => write!(out, "<span class=\"muted\">{}</span>", text)?,
            SpanStyle::Phase => write!(out, "<span class=\"phase\">{}</span>", text)?,
            SpanStyle::Break => out.push_str("<br>"),
        }
    }
    Ok(())
}

fn write_cell(out: &mut String, tag: &str, cell: &Cell) -> Result<(), ExportError> {
    write!(out, "<{}", tag)?;
    if let Some(span) = cell.colspan {
        if span == 0 {
            return Err(ExportError::invalid("colspan of zero"));
        }
        write!(out, " colspan=\"{}\"", span)?;
    }
    write_class(out, cell.class.as_deref())?;

    let mut style = String::new();
    if let Some(height) = cell.height {
        write!(style, "height: {}px;", height)?;
    }
    if let Some(width) = cell.width {
        if !style.is_empty() {
            style.push(' ');
        }
        write!(style, "width: {}%;", width)?;
    }
    if !style.is_empty() {
        write!(out, " style=\"{}\"", style)?;
    }

    out.push('>');
    write_spans(out, &cell.spans)?;
    write!(out, "</{}>", tag)?;
    Ok(())
}

fn write_class(out: &mut String, class: Option<&str>) -> Result<(), ExportError> {
    if let Some(class) = class {
        write!(out, " class=\"{}\"", html_escape(class))?;
    }
    Ok(())
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn stylesheet_css(stylesheet: Stylesheet) -> String {
    let specific = match stylesheet {
        Stylesheet::LessonPlan => LESSON_PLAN_CSS,
        Stylesheet::Assessment => ASSESSMENT_CSS,
        Stylesheet::Worksheet => WORKSHEET_CSS,
    };
    format!("{}{}", COMMON_CSS, specific)
}

const COMMON_CSS: &str = "\
.muted { font-size: 9pt; color: #666; font-weight: normal; } \
ul.options { list-style-type: none; } \
p.lines { color: #999; } ";

const LESSON_PLAN_CSS: &str = "\
body { font-family: 'Calibri', 'Arial', sans-serif; line-height: 1.5; } \
h1 { color: #2E5984; font-size: 24pt; border-bottom: 2px solid #2E5984; padding-bottom: 10px; } \
h2 { color: #2E5984; font-size: 18pt; margin-top: 20px; } \
h3 { color: #1F4E79; font-size: 14pt; margin-top: 15px; } \
.highlight { background-color: #E7F3FF; padding: 10px; border: 1px solid #2E5984; } \
.generalization { font-style: italic; color: #9C6500; font-size: 14pt; } \
.activity { margin-bottom: 15px; border-bottom: 1px solid #ddd; padding-bottom: 10px; } \
.phase { font-weight: bold; color: #008080; } ";

const ASSESSMENT_CSS: &str = "\
body { font-family: 'Calibri', 'Arial', sans-serif; line-height: 1.5; color: #000; } \
h1 { font-size: 18pt; text-align: center; border-bottom: 1px solid #000; padding-bottom: 5px; } \
h2 { font-size: 14pt; background-color: #f0f8ff; padding: 5px; border-left: 4px solid #2E5984; margin-top: 20px; } \
.question { margin-bottom: 15px; page-break-inside: avoid; } \
.answer { margin-bottom: 10px; } ";

const WORKSHEET_CSS: &str = "\
body { font-family: 'Arial', sans-serif; color: #333; } \
h1 { text-align: center; color: #2E5984; font-size: 20pt; } \
h2 { color: #2E5984; font-size: 14pt; } \
table { width: 100%; border-collapse: collapse; margin-bottom: 20px; } \
td, th { border: 1px solid #000; padding: 12px; vertical-align: top; } \
th { background-color: #f2f2f2; } \
.box { border: 1px solid #666; padding: 15px; margin-bottom: 15px; min-height: 80px; background-color: #fafafa; } \
.instructions { font-style: italic; color: #555; margin-bottom: 20px; background: #eef; padding: 10px; } \
table.cutouts td { border: 2px dashed #999; } \
.cut-cell { text-align: center; vertical-align: middle; } \
.concept-cell { text-align: center; font-size: 16pt; font-weight: bold; background-color: #E7F3FF; } \
.centered { text-align: center; } \
.banner { text-align: center; font-size: 16pt; font-weight: bold; border: 2px solid #2E5984; padding: 10px; } \
.canvas { border: 2px dashed #999; min-height: 300px; padding: 10px; } \
.node { border: 2px solid #2E5984; padding: 8px; text-align: center; } \
.signal-red { background-color: #f8d7da; } \
.signal-yellow { background-color: #fff3cd; } \
.signal-green { background-color: #d4edda; } \
.headline-frame { border: 3px double #000; padding: 20px; } \
.masthead { font-family: 'Times New Roman', serif; font-size: 22pt; font-weight: bold; text-align: center; border-bottom: 2px solid #000; } \
.sketch-area { border: 1px solid #666; min-height: 200px; } \
.footer { font-size: 9pt; color: #888; text-align: center; margin-top: 50px; border-top: 1px solid #ccc; padding-top: 10px; } ";
