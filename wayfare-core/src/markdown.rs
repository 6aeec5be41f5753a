//! Read-only display tree for section text.
//!
//! Resolves `[label](url)` links, lifts the first pipe table into a typed
//! block, and keeps line breaks explicit. This is a one-way renderer for
//! the info panels; it carries no round-trip obligation and does not
//! attempt general markdown.

use serde::Serialize;

use crate::flights::{find_table, split_cells};

/// Inline run within a paragraph.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    Link { label: String, url: String },
    LineBreak,
}

/// Top-level display block.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        inlines: Vec<Inline>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Render one section's raw text into display blocks.
pub fn render_section(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();

    match find_table(text) {
        Some(table) => {
            push_paragraph(&mut blocks, &text[..table.start]);
            blocks.push(Block::Table {
                headers: split_cells(table.header),
                rows: table
                    .body
                    .iter()
                    .map(|row| split_cells(row))
                    .filter(|cells| !cells.is_empty())
                    .collect(),
            });
            push_paragraph(&mut blocks, &text[table.end..]);
        }
        None => push_paragraph(&mut blocks, text),
    }

    blocks
}

fn push_paragraph(blocks: &mut Vec<Block>, text: &str) {
    if text.trim().is_empty() {
        return;
    }

    let mut inlines = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            inlines.push(Inline::LineBreak);
        }
        parse_inlines(line, &mut inlines);
    }

    blocks.push(Block::Paragraph { inlines });
}

/// Scan one line for `[label](url)` links; everything between them is plain
/// text. A `[` that does not open a complete link is left in the text.
fn parse_inlines(line: &str, out: &mut Vec<Inline>) {
    let mut rest = line;
    while let Some(open) = rest.find('[') {
        match read_link(&rest[open..]) {
            Some((label, url, consumed)) => {
                if open > 0 {
                    push_text(out, &rest[..open]);
                }
                out.push(Inline::Link { label, url });
                rest = &rest[open + consumed..];
            }
            None => {
                push_text(out, &rest[..open + 1]);
                rest = &rest[open + 1..];
            }
        }
    }
    if !rest.is_empty() {
        push_text(out, rest);
    }
}

/// Append text, coalescing with a preceding text run.
fn push_text(out: &mut Vec<Inline>, text: &str) {
    if let Some(Inline::Text { text: last }) = out.last_mut() {
        last.push_str(text);
    } else {
        out.push(Inline::Text {
            text: text.to_string(),
        });
    }
}

/// Parse `[label](url)` at the start of `s`. Labels cannot contain `]`,
/// urls cannot contain `)`, and both must be non-empty. Returns the pieces
/// plus the number of bytes consumed.
fn read_link(s: &str) -> Option<(String, String, usize)> {
    let close_label = s.find(']')?;
    if close_label < 2 {
        return None;
    }
    if s.as_bytes().get(close_label + 1) != Some(&b'(') {
        return None;
    }
    let url_len = s[close_label + 2..].find(')')?;
    if url_len == 0 {
        return None;
    }
    let label = s[1..close_label].to_string();
    let url = s[close_label + 2..close_label + 2 + url_len].to_string();
    Some((label, url, close_label + 2 + url_len + 1))
}
