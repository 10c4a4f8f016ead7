pub mod blocks;
pub mod cursor;
pub mod fence;
pub mod inline;
pub mod snapshot;
pub mod span;
pub mod url;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::enhance::{Card, extract_enhancements};
use blocks::{Block, parse_blocks};
use inline::{InlineNode, tokenize_inline};

/// A parsed document: the blocks of one text body, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

pub fn parse_document(text: &str) -> Document {
    Document {
        blocks: parse_blocks(text),
    }
}

/// Inline nodes for a block's single text run (headings, paragraphs, quotes).
///
/// Lists and tables have no single run; their items and cells are tokenized
/// one at a time with [`tokenize_inline`] when rendered.
pub fn inline_for_block(b: &Block) -> Vec<InlineNode> {
    b.text().map(tokenize_inline).unwrap_or_default()
}

/// Enhancement cards for a block. Only paragraphs get cards.
pub fn cards_for_block(b: &Block) -> Vec<Card> {
    match b {
        Block::Paragraph { text } => extract_enhancements(text),
        _ => vec![],
    }
}
