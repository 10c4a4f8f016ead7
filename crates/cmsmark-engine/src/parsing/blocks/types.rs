use serde::{Deserialize, Serialize};

/// A top-level structural unit of a parsed document.
///
/// Text payloads are raw: inline styling is resolved separately by
/// [`tokenize_inline`](crate::parsing::inline::tokenize_inline) when the
/// block is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// `#` to `######` heading.
    Heading { depth: u8, text: String },
    /// Fallback block: consecutive lines that open nothing else.
    Paragraph { text: String },
    /// `>` lines with the prefix stripped, joined by newlines.
    Blockquote { text: String },
    OrderedList { items: Vec<String> },
    UnorderedList { items: Vec<String> },
    /// Literal fenced code; never inline-parsed.
    CodeBlock { lang: Option<String>, code: String },
    HorizontalRule,
    /// Pipe table. Rows are not padded or truncated to the header width.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl Block {
    /// The single text run of blocks that have one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text } | Block::Blockquote { text } => {
                Some(text)
            }
            _ => None,
        }
    }

    /// Short kind label, used in previews and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::Blockquote { .. } => "Blockquote",
            Block::OrderedList { .. } => "OrderedList",
            Block::UnorderedList { .. } => "UnorderedList",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::HorizontalRule => "HorizontalRule",
            Block::Table { .. } => "Table",
        }
    }
}
