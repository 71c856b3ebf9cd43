//! Inline formatting parser
//!
//! Parses the ad-hoc inline markers used in lesson content (`**bold**`,
//! `*italic*`, `` `code` ``) into a small tagged tree. Rendering walks the
//! nodes explicitly, so no raw markup ever reaches the terminal.

/// One parsed fragment of an inline-formatted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

/// Parses a single line of lesson text into inline nodes.
///
/// Markers without a matching closer are kept as literal text.
pub fn parse_inline(input: &str) -> Vec<InlineNode> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'*' && i + 1 < bytes.len() && bytes[i + 1] == b'*' {
            if let Some(end) = find_marker(input, i + 2, "**") {
                flush_text(&mut nodes, &mut text);
                nodes.push(InlineNode::Bold(input[i + 2..end].to_string()));
                i = end + 2;
                continue;
            }
        }
        if bytes[i] == b'*' {
            if let Some(end) = find_marker(input, i + 1, "*") {
                flush_text(&mut nodes, &mut text);
                nodes.push(InlineNode::Italic(input[i + 1..end].to_string()));
                i = end + 1;
                continue;
            }
        }
        if bytes[i] == b'`' {
            if let Some(end) = find_marker(input, i + 1, "`") {
                flush_text(&mut nodes, &mut text);
                nodes.push(InlineNode::Code(input[i + 1..end].to_string()));
                i = end + 1;
                continue;
            }
        }

        // Consume one whole character, not one byte.
        let ch_len = input[i..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);
        text.push_str(&input[i..i + ch_len]);
        i += ch_len;
    }

    flush_text(&mut nodes, &mut text);
    nodes
}

/// Finds the next occurrence of `marker` at or after `from`, skipping
/// zero-length spans (`**bold**` must enclose at least one character).
fn find_marker(input: &str, from: usize, marker: &str) -> Option<usize> {
    if from >= input.len() {
        return None;
    }
    input[from..]
        .find(marker)
        .filter(|offset| *offset > 0)
        .map(|offset| from + offset)
}

fn flush_text(nodes: &mut Vec<InlineNode>, text: &mut String) {
    if !text.is_empty() {
        nodes.push(InlineNode::Text(std::mem::take(text)));
    }
}
