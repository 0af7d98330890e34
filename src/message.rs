//! Chat messages as the assistant panel shows them.
//!
//! Only assistant replies carry markup. User input is displayed verbatim, and
//! an assistant reply the formatter finds nothing in is displayed raw too.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::{Error, Result};
use crate::parser::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    #[serde(rename = "ai")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

impl Sender {
    /// Wire name, as used in transcripts.
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::Assistant => "ai",
            Sender::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// Set on the fallback reply shown when the assistant request failed.
    #[serde(default)]
    pub error: bool,
}

/// What a message renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    Blocks(Vec<Block>),
    Raw(String),
}

impl Message {
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: 0,
            text: text.into(),
            sender: Sender::Assistant,
            error: false,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: 0,
            text: text.into(),
            sender: Sender::User,
            error: false,
        }
    }

    pub fn content(&self, formatter: &Formatter) -> Content {
        if self.sender == Sender::User {
            return Content::Raw(self.text.clone());
        }
        let blocks = formatter.format_blocks(&self.text);
        if blocks.is_empty() {
            Content::Raw(self.text.clone())
        } else {
            Content::Blocks(blocks)
        }
    }
}

/// Parse a JSON array of messages.
pub fn parse_transcript(json: &str) -> Result<Vec<Message>> {
    let messages: Vec<Message> = serde_json::from_str(json).map_err(Error::Transcript)?;
    tracing::debug!(messages = messages.len(), "parsed transcript");
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::InlineSegment;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_text_is_raw() {
        let message = Message::user("**not bold**");
        assert_eq!(
            message.content(&Formatter::default()),
            Content::Raw("**not bold**".to_string())
        );
    }

    #[test]
    fn assistant_text_is_formatted() {
        let message = Message::assistant("**bold**");
        assert_eq!(
            message.content(&Formatter::default()),
            Content::Blocks(vec![Block::Paragraph(vec![InlineSegment::Bold(
                "bold".to_string()
            )])])
        );
    }

    #[test]
    fn empty_assistant_text_falls_back_to_raw() {
        let message = Message::assistant("  \n");
        assert_eq!(
            message.content(&Formatter::default()),
            Content::Raw("  \n".to_string())
        );
    }

    #[test]
    fn parses_transcript() {
        let json = r#"[
            {"id": 1, "text": "Hello! I'm Maya.", "sender": "ai"},
            {"text": "Schedule a service", "sender": "user"},
            {"id": 3, "text": "Sorry, I encountered an error.", "sender": "ai", "error": true}
        ]"#;
        let messages = parse_transcript(json).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].sender, Sender::Assistant);
        assert_eq!(messages[1], Message::user("Schedule a service"));
        assert!(messages[2].error);
    }

    #[test]
    fn sender_wire_names_match_serde() {
        for sender in [Sender::Assistant, Sender::User] {
            let json = serde_json::to_string(&sender).unwrap();
            assert_eq!(json, format!("\"{}\"", sender.as_str()));
        }
    }

    #[test]
    fn rejects_unknown_sender() {
        let err = parse_transcript(r#"[{"text": "hi", "sender": "bot"}]"#).unwrap_err();
        assert!(matches!(err, Error::Transcript(_)));
    }
}
