use serde::{Deserialize, Serialize};

/// One styled run of text within a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineSegment {
    PlainText(String),
    Bold(String),
    Italic(String),
    BoldItalic(String),
    Code(String),
    /// Digits and commas that followed the currency glyph, unparsed
    Currency(String),
}

impl InlineSegment {
    /// The segment's payload without any markers or glyph.
    pub fn text(&self) -> &str {
        match self {
            InlineSegment::PlainText(s)
            | InlineSegment::Bold(s)
            | InlineSegment::Italic(s)
            | InlineSegment::BoldItalic(s)
            | InlineSegment::Code(s)
            | InlineSegment::Currency(s) => s,
        }
    }
}

/// A list entry is the formatted text after its marker
pub type ListItem = Vec<InlineSegment>;

/// Block-level elements of a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Paragraph(Vec<InlineSegment>),
    List(Vec<ListItem>),
}
