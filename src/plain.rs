use crate::block::{Block, InlineSegment};

/// Render blocks as marker-free text.
///
/// Paragraphs and lists are separated by a blank line and list items are
/// prefixed with `- `. Useful for previews and terminals.
pub fn blocks_to_text(blocks: &[Block], currency_symbol: &str) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match block {
            Block::Paragraph(segments) => {
                segments_to_text(segments, currency_symbol, &mut out);
                out.push('\n');
            }
            Block::List(items) => {
                for item in items {
                    out.push_str("- ");
                    segments_to_text(item, currency_symbol, &mut out);
                    out.push('\n');
                }
            }
        }
    }
    out
}

fn segments_to_text(segments: &[InlineSegment], currency_symbol: &str, out: &mut String) {
    for segment in segments {
        if let InlineSegment::Currency(_) = segment {
            out.push_str(currency_symbol);
        }
        out.push_str(segment.text());
    }
}
