//! Structured document model.
//!
//! Composers build a [`Document`] out of blocks and spans; a renderer turns
//! it into a concrete file format. Content never carries markup, so escaping
//! lives entirely in the renderer.

use serde::{Deserialize, Serialize};

/// Visual theme a renderer applies to the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stylesheet {
    LessonPlan,
    Assessment,
    Worksheet,
}

/// A printable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub stylesheet: Stylesheet,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>, stylesheet: Stylesheet) -> Self {
        Self {
            title: title.into(),
            stylesheet,
            blocks: Vec::new(),
        }
    }

    /// Appends a block.
    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// Appends several blocks.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) -> &mut Self {
        self.blocks.extend(blocks);
        self
    }
}

/// Inline emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanStyle {
    #[default]
    Plain,
    Strong,
    Emphasis,
    /// Small grey annotation.
    Muted,
    /// Inquiry phase label on a lesson activity.
    Phase,
    /// Line break; the span text is ignored.
    Break,
}

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub style: SpanStyle,
    #[serde(default)]
    pub text: String,
}

impl Span {
    fn styled(style: SpanStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(SpanStyle::Plain, text)
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::styled(SpanStyle::Strong, text)
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Self::styled(SpanStyle::Emphasis, text)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::styled(SpanStyle::Muted, text)
    }

    pub fn phase(text: impl Into<String>) -> Self {
        Self::styled(SpanStyle::Phase, text)
    }

    pub fn line_break() -> Self {
        Self::styled(SpanStyle::Break, "")
    }
}

/// List bullet style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    #[default]
    Bullet,
    /// Items carry their own labels, e.g. `a) ...`.
    None,
}

/// Table cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub spans: Vec<Span>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colspan: Option<u32>,
    /// Minimum height in pixels, for writing space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Width as a percentage of the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Cell {
    pub fn new(spans: Vec<Span>) -> Self {
        Self {
            spans,
            ..Default::default()
        }
    }
}

/// Block-level element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Section heading, level 1 to 3.
    Heading { level: u8, text: String },
    Paragraph {
        spans: Vec<Span>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    List {
        #[serde(default)]
        marker: ListMarker,
        items: Vec<String>,
    },
    Table {
        #[serde(default)]
        header: Vec<Cell>,
        rows: Vec<Vec<Cell>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// Styled box around nested blocks.
    Container { class: String, blocks: Vec<Block> },
    /// Blank ruled lines for handwritten answers.
    WritingLines { count: usize },
    /// Horizontal rule.
    Rule,
    /// Vertical gap.
    Spacer,
    /// Forces the following content onto a new page.
    PageBreak,
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(spans: Vec<Span>) -> Self {
        Block::Paragraph { spans, class: None }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::paragraph(vec![Span::plain(text)])
    }

    pub fn classed_paragraph(class: impl Into<String>, spans: Vec<Span>) -> Self {
        Block::Paragraph {
            spans,
            class: Some(class.into()),
        }
    }

    /// `<strong>label</strong> value` on one line.
    pub fn labelled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::paragraph(vec![
            Span::strong(label),
            Span::plain(" "),
            Span::plain(value),
        ])
    }

    pub fn bullets(items: Vec<String>) -> Self {
        Block::List {
            marker: ListMarker::Bullet,
            items,
        }
    }

    pub fn unmarked(items: Vec<String>) -> Self {
        Block::List {
            marker: ListMarker::None,
            items,
        }
    }

    pub fn container(class: impl Into<String>, blocks: Vec<Block>) -> Self {
        Block::Container {
            class: class.into(),
            blocks,
        }
    }
}
