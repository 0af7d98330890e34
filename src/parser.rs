use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::block::{Block, InlineSegment, ListItem};
use crate::config::FormatConfig;
use crate::error::{Error, Result};

/// `- item`, `* item` or `• item`
static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s+(.+)$").expect("Invalid bullet regex"));

/// `1. item`
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+(.+)$").expect("Invalid numbered regex"));

static DEFAULT_FORMATTER: LazyLock<Formatter> = LazyLock::new(|| {
    Formatter::new(&FormatConfig::default()).expect("Invalid default inline regex")
});

/// Constructors for the inline pattern's capture groups, in group order.
/// Earlier alternatives win when several could match at the same position.
const SEGMENT_KINDS: [fn(String) -> InlineSegment; 5] = [
    InlineSegment::BoldItalic,
    InlineSegment::Bold,
    InlineSegment::Italic,
    InlineSegment::Code,
    InlineSegment::Currency,
];

/// Splits chat messages into blocks and styled segments.
///
/// Holds the compiled inline pattern, which depends on the currency glyph.
/// A `Formatter` keeps no per-call state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Formatter {
    inline: Regex,
}

impl Default for Formatter {
    fn default() -> Self {
        DEFAULT_FORMATTER.clone()
    }
}

impl Formatter {
    pub fn new(config: &FormatConfig) -> Result<Self> {
        if config.currency_symbol.is_empty() {
            return Err(Error::InvalidCurrencySymbol);
        }
        let pattern = format!(
            r"\*\*\*(.+?)\*\*\*|\*\*(.+?)\*\*|\*(.+?)\*|`(.+?)`|{}([0-9,]+)",
            regex::escape(&config.currency_symbol)
        );
        Ok(Self {
            inline: Regex::new(&pattern)?,
        })
    }

    /// Split a message into paragraphs and lists.
    ///
    /// Consecutive list lines share one `List` block. A line that is neither
    /// a list item nor blank closes the open list and becomes a `Paragraph`;
    /// a blank line closes the list and emits nothing.
    pub fn format_blocks(&self, text: &str) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut items: Vec<ListItem> = Vec::new();

        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);

            if let Some(item) = list_item_text(line) {
                items.push(self.format_inline(item));
                continue;
            }

            if !items.is_empty() {
                blocks.push(Block::List(std::mem::take(&mut items)));
            }
            if !line.trim().is_empty() {
                blocks.push(Block::Paragraph(self.format_inline(line)));
            }
        }

        if !items.is_empty() {
            blocks.push(Block::List(items));
        }

        tracing::debug!(
            input_len = text.len(),
            blocks = blocks.len(),
            segments = segment_count(&blocks),
            "formatted message"
        );
        blocks
    }

    /// Split one line into styled segments, scanning left to right.
    ///
    /// Text between markers becomes `PlainText`. Unterminated markers are
    /// left as plain text. Empty input gives no segments.
    pub fn format_inline(&self, text: &str) -> Vec<InlineSegment> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for caps in self.inline.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last_end {
                segments.push(InlineSegment::PlainText(
                    text[last_end..whole.start()].to_string(),
                ));
            }
            segments.push(
                segment_from_captures(&caps)
                    .unwrap_or_else(|| InlineSegment::PlainText(whole.as_str().to_string())),
            );
            last_end = whole.end();
        }

        if last_end < text.len() {
            segments.push(InlineSegment::PlainText(text[last_end..].to_string()));
        }

        segments
    }
}

fn segment_count(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|block| match block {
            Block::Paragraph(segments) => segments.len(),
            Block::List(items) => items.iter().map(Vec::len).sum(),
        })
        .sum()
}

fn segment_from_captures(caps: &Captures) -> Option<InlineSegment> {
    SEGMENT_KINDS
        .iter()
        .enumerate()
        .find_map(|(i, kind)| caps.get(i + 1).map(|m| kind(m.as_str().to_string())))
}

/// The text after a bullet or number marker, if the line is a list item.
fn list_item_text(line: &str) -> Option<&str> {
    BULLET_ITEM
        .captures(line)
        .or_else(|| NUMBERED_ITEM.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split a message into blocks using the default `₹` formatter.
pub fn format_blocks(text: &str) -> Vec<Block> {
    DEFAULT_FORMATTER.format_blocks(text)
}

/// Split one line into segments using the default `₹` formatter.
pub fn format_inline(text: &str) -> Vec<InlineSegment> {
    DEFAULT_FORMATTER.format_inline(text)
}
