//! Formatting for assistant chat messages.
//!
//! Messages use a small markdown-like dialect: `***bold italic***`,
//! `**bold**`, `*italic*`, `` `code` ``, currency amounts such as `₹1,200`,
//! and `-`/`*`/`•`/`1.` list lines. Formatting produces a [`Block`] tree;
//! rendering it is left to [`html`], [`plain`] or the caller.
//!
//! ```
//! use chatfmt::{Block, InlineSegment};
//!
//! let blocks = chatfmt::format_blocks("Due: **₹1,200**\n- oil\n- filter");
//! assert_eq!(blocks.len(), 2);
//! assert!(matches!(&blocks[1], Block::List(items) if items.len() == 2));
//! assert_eq!(
//!     chatfmt::format_inline("a **b** c"),
//!     vec![
//!         InlineSegment::PlainText("a ".into()),
//!         InlineSegment::Bold("b".into()),
//!         InlineSegment::PlainText(" c".into()),
//!     ]
//! );
//! ```

mod block;
mod config;
mod error;
pub mod html;
mod message;
mod parser;
pub mod plain;
pub mod render;

pub use block::{Block, InlineSegment, ListItem};
pub use config::{Config, FormatConfig, HtmlConfig};
pub use error::{Error, Result};
pub use message::{Content, Message, Sender, parse_transcript};
pub use parser::{Formatter, format_blocks, format_inline};
pub use render::{OutputFormat, render_message, render_transcript};

/// Format a message with the given config and render it as HTML.
///
/// ```
/// let html = chatfmt::markdown_to_html("**Total:** ₹900", &chatfmt::Config::default()).unwrap();
/// assert_eq!(html, "<p><strong>Total:</strong> <span>₹900</span></p>\n");
/// ```
pub fn markdown_to_html(text: &str, config: &Config) -> Result<String> {
    let formatter = Formatter::new(&config.format)?;
    Ok(html::message_to_html(text, &formatter, config))
}
