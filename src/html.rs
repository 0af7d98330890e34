use crate::block::{Block, InlineSegment};
use crate::config::{Config, HtmlConfig};
use crate::message::{Content, Message, Sender};
use crate::parser::Formatter;

/// Convert blocks to HTML, one block per line
pub fn blocks_to_html(blocks: &[Block], config: &HtmlConfig, currency_symbol: &str) -> String {
    let mut out = String::new();
    for block in blocks {
        emit_block(block, config, currency_symbol, &mut out);
        out.push('\n');
    }
    out
}

/// Format a message and render it, falling back to the escaped raw text
/// when the formatter finds no content (e.g. whitespace-only messages).
pub fn message_to_html(text: &str, formatter: &Formatter, config: &Config) -> String {
    content_to_html(&Message::assistant(text).content(formatter), config)
}

/// Render already resolved message content. Raw text is only escaped.
pub fn content_to_html(content: &Content, config: &Config) -> String {
    match content {
        Content::Blocks(blocks) => {
            blocks_to_html(blocks, &config.html, &config.format.currency_symbol)
        }
        Content::Raw(text) => {
            let mut out = String::new();
            escape_into(text, &mut out);
            out
        }
    }
}

/// Render one transcript message as a bubble tagged with its sender.
///
/// The wrapper carries `data-sender`, `data-error` on failed replies, and the
/// sender and error classes from config.
pub fn transcript_message_to_html(
    message: &Message,
    formatter: &Formatter,
    config: &Config,
) -> String {
    let html = &config.html;
    let sender_class = match message.sender {
        Sender::Assistant => html.assistant_class.as_deref(),
        Sender::User => html.user_class.as_deref(),
    };
    let error_class = if message.error {
        html.error_class.as_deref()
    } else {
        None
    };
    let classes: Vec<&str> = [sender_class, error_class].into_iter().flatten().collect();

    let mut out = String::new();
    out.push_str("<div data-sender=\"");
    out.push_str(message.sender.as_str());
    out.push('"');
    if message.error {
        out.push_str(" data-error=\"true\"");
    }
    if !classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(&classes.join(" "), &mut out);
        out.push('"');
    }
    out.push('>');

    let content = message.content(formatter);
    if let Content::Blocks(_) = content {
        out.push('\n');
    }
    out.push_str(&content_to_html(&content, config));
    out.push_str("</div>\n");
    out
}

fn emit_block(block: &Block, config: &HtmlConfig, currency_symbol: &str, out: &mut String) {
    match block {
        Block::Paragraph(segments) => {
            open_tag("p", config.paragraph_class.as_deref(), out);
            segments_to_html(segments, config, currency_symbol, out);
            out.push_str("</p>");
        }
        Block::List(items) => {
            open_tag("ul", config.list_class.as_deref(), out);
            for item in items {
                open_tag("li", config.item_class.as_deref(), out);
                segments_to_html(item, config, currency_symbol, out);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
    }
}

fn segments_to_html(
    segments: &[InlineSegment],
    config: &HtmlConfig,
    currency_symbol: &str,
    out: &mut String,
) {
    for segment in segments {
        segment_to_html(segment, config, currency_symbol, out);
    }
}

fn segment_to_html(
    segment: &InlineSegment,
    config: &HtmlConfig,
    currency_symbol: &str,
    out: &mut String,
) {
    match segment {
        InlineSegment::PlainText(text) => escape_into(text, out),
        InlineSegment::Bold(text) => {
            wrap("strong", config.bold_class.as_deref(), text, out);
        }
        InlineSegment::Italic(text) => {
            wrap("em", config.italic_class.as_deref(), text, out);
        }
        InlineSegment::BoldItalic(text) => {
            open_tag("strong", config.bold_italic_class.as_deref(), out);
            out.push_str("<em>");
            escape_into(text, out);
            out.push_str("</em></strong>");
        }
        InlineSegment::Code(text) => {
            wrap("code", config.code_class.as_deref(), text, out);
        }
        InlineSegment::Currency(amount) => {
            open_tag("span", config.currency_class.as_deref(), out);
            escape_into(currency_symbol, out);
            escape_into(amount, out);
            out.push_str("</span>");
        }
    }
}

fn wrap(tag: &str, class: Option<&str>, text: &str, out: &mut String) {
    open_tag(tag, class, out);
    escape_into(text, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn open_tag(tag: &str, class: Option<&str>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if let Some(class) = class {
        out.push_str(" class=\"");
        escape_into(class, out);
        out.push('"');
    }
    out.push('>');
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> String {
        message_to_html(text, &Formatter::default(), &Config::default())
    }

    #[test]
    fn paragraph() {
        assert_eq!(render("Hello world"), "<p>Hello world</p>\n");
    }

    #[test]
    fn inline_styles() {
        assert_eq!(render("**bold**"), "<p><strong>bold</strong></p>\n");
        assert_eq!(render("*italic*"), "<p><em>italic</em></p>\n");
        assert_eq!(
            render("***both***"),
            "<p><strong><em>both</em></strong></p>\n"
        );
        assert_eq!(render("`code`"), "<p><code>code</code></p>\n");
        assert_eq!(render("₹1,200"), "<p><span>₹1,200</span></p>\n");
    }

    #[test]
    fn numbered_and_bulleted_lists() {
        assert_eq!(
            render("1. one\n- two"),
            "<ul><li>one</li><li>two</li></ul>\n"
        );
    }

    #[test]
    fn mixed_blocks() {
        assert_eq!(
            render("Services due:\n- Oil\n- Brakes\n\nTotal ₹3,000"),
            "<p>Services due:</p>\n<ul><li>Oil</li><li>Brakes</li></ul>\n<p>Total <span>₹3,000</span></p>\n"
        );
    }

    #[test]
    fn escapes_text() {
        assert_eq!(
            render("a < b & `<script>` \"q\" 'x'"),
            "<p>a &lt; b &amp; <code>&lt;script&gt;</code> &quot;q&quot; &#39;x&#39;</p>\n"
        );
    }

    #[test]
    fn empty_output_falls_back_to_raw_text() {
        assert_eq!(render(""), "");
        assert_eq!(render("  \n "), "  \n ");
    }

    #[test]
    fn raw_user_content_is_escaped_only() {
        let content = Message::user("**hi** <b>").content(&Formatter::default());
        assert_eq!(
            content_to_html(&content, &Config::default()),
            "**hi** &lt;b&gt;"
        );
    }

    fn bubble_config() -> Config {
        let mut config = Config::default();
        config.html.assistant_class = Some("bubble-ai".to_string());
        config.html.user_class = Some("bubble-user".to_string());
        config.html.error_class = Some("border-red".to_string());
        config
    }

    #[test]
    fn assistant_bubble() {
        let html = transcript_message_to_html(
            &Message::assistant("**a**"),
            &Formatter::default(),
            &bubble_config(),
        );
        assert_eq!(
            html,
            "<div data-sender=\"ai\" class=\"bubble-ai\">\n<p><strong>a</strong></p>\n</div>\n"
        );
    }

    #[test]
    fn user_bubble_is_raw() {
        let html = transcript_message_to_html(
            &Message::user("**hi** <3"),
            &Formatter::default(),
            &bubble_config(),
        );
        assert_eq!(
            html,
            "<div data-sender=\"user\" class=\"bubble-user\">**hi** &lt;3</div>\n"
        );
    }

    #[test]
    fn error_reply_bubble() {
        let mut message = Message::assistant("Sorry, I encountered an error.");
        message.error = true;

        let html = transcript_message_to_html(&message, &Formatter::default(), &bubble_config());
        assert_eq!(
            html,
            "<div data-sender=\"ai\" data-error=\"true\" class=\"bubble-ai border-red\">\n\
             <p>Sorry, I encountered an error.</p>\n</div>\n"
        );

        let bare = transcript_message_to_html(&message, &Formatter::default(), &Config::default());
        assert_eq!(
            bare,
            "<div data-sender=\"ai\" data-error=\"true\">\n<p>Sorry, I encountered an error.</p>\n</div>\n"
        );
    }

    #[test]
    fn classes_from_config() {
        let mut config = Config::default();
        config.html.paragraph_class = Some("mb-2".to_string());
        config.html.list_class = Some("list-disc".to_string());
        config.html.item_class = Some("ml-4".to_string());
        config.html.bold_class = Some("font-semibold".to_string());
        config.html.currency_class = Some("text-green-400".to_string());

        let html = message_to_html("**Cost** ₹500\n- item", &Formatter::default(), &config);
        assert_eq!(
            html,
            "<p class=\"mb-2\"><strong class=\"font-semibold\">Cost</strong> <span class=\"text-green-400\">₹500</span></p>\n\
             <ul class=\"list-disc\"><li class=\"ml-4\">item</li></ul>\n"
        );
    }

    #[test]
    fn custom_currency_symbol() {
        let mut config = Config::default();
        config.format.currency_symbol = "€".to_string();
        let formatter = Formatter::new(&config.format).unwrap();
        assert_eq!(
            message_to_html("€40", &formatter, &config),
            "<p><span>€40</span></p>\n"
        );
    }
}
