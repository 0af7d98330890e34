//! Output for the `chatfmt` tool: a single message or a whole transcript in
//! one of the supported formats.
//!
//! The JSON shape depends only on the input mode. A single message renders
//! as one content object; a transcript always renders as an array.

use clap::ValueEnum;
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::message::{Content, Message, Sender};
use crate::parser::Formatter;
use crate::{html, plain};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

/// A transcript entry as written to JSON.
#[derive(Debug, Serialize)]
struct RenderedMessage<'a> {
    id: u64,
    sender: Sender,
    error: bool,
    content: &'a Content,
}

/// Render one assistant message.
pub fn render_message(
    text: &str,
    formatter: &Formatter,
    format: OutputFormat,
    config: &Config,
) -> Result<String> {
    let content = Message::assistant(text).content(formatter);
    match format {
        OutputFormat::Html => Ok(html::content_to_html(&content, config)),
        OutputFormat::Text => Ok(content_to_text(&content, config)),
        OutputFormat::Json => to_json(&content),
    }
}

/// Render every message of a transcript, keeping sender and error state.
pub fn render_transcript(
    messages: &[Message],
    formatter: &Formatter,
    format: OutputFormat,
    config: &Config,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Html => messages
            .iter()
            .map(|message| html::transcript_message_to_html(message, formatter, config))
            .collect::<String>(),
        OutputFormat::Text => messages
            .iter()
            .map(|message| {
                let header = if message.error {
                    format!("{} (error):\n", message.sender.as_str())
                } else {
                    format!("{}:\n", message.sender.as_str())
                };
                header + &content_to_text(&message.content(formatter), config)
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let contents: Vec<Content> = messages
                .iter()
                .map(|message| message.content(formatter))
                .collect();
            let entries: Vec<RenderedMessage> = messages
                .iter()
                .zip(&contents)
                .map(|(message, content)| RenderedMessage {
                    id: message.id,
                    sender: message.sender,
                    error: message.error,
                    content,
                })
                .collect();
            to_json(&entries)?
        }
    };
    Ok(rendered)
}

fn content_to_text(content: &Content, config: &Config) -> String {
    match content {
        Content::Blocks(blocks) => plain::blocks_to_text(blocks, &config.format.currency_symbol),
        Content::Raw(text) => format!("{}\n", text),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(Error::Json)?;
    json.push('\n');
    Ok(json)
}
