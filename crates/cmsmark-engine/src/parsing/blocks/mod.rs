//! # Block Parsing
//!
//! Turns text into an ordered sequence of [`Block`]s.
//!
//! ## Phases
//!
//! 1. **Fence splitting** (`parsing::fence`): triple-backtick regions become
//!    `CodeBlock`s directly and are never line-parsed.
//! 2. **Line rules** (`builder`): each remaining text segment is walked with a
//!    line cursor; rules are tried in precedence order (blank, rule, heading,
//!    quote, ordered list, unordered list, table, paragraph).
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum
//! - **`kinds`**: per-block syntax (markers, prefixes, table cells)
//! - **`builder`**: `BlockBuilder`, the line-cursor state machine
//!
//! ## Key Invariants
//!
//! - Every line of a segment is consumed by exactly one step
//! - No block is re-parsed for nested structure; list items and table cells
//!   are opaque strings here

pub mod builder;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, Step};
pub use types::Block;

use super::fence::{Segment, split_fences};

/// Parses `text` into blocks. Never fails; unrecognized input becomes
/// paragraphs and empty input yields no blocks.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = vec![];
    for segment in split_fences(text) {
        match segment {
            Segment::Code { lang, code, .. } => blocks.push(Block::CodeBlock {
                lang: lang.map(str::to_string),
                code: code.to_string(),
            }),
            Segment::Text { text, .. } => {
                blocks.extend(segment_steps(text).into_iter().filter_map(|s| s.block));
            }
        }
    }
    blocks
}

/// Runs the line rules over one text segment, keeping blank-line steps.
pub fn segment_steps(text: &str) -> Vec<Step> {
    let normalized = text.replace("\r\n", "\n");
    BlockBuilder::new(&normalized).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_only() {
        assert_eq!(parse_blocks("# Hello"), vec![Block::Heading {
            depth: 1,
            text: "Hello".into()
        }]);
    }

    #[test]
    fn valid_table() {
        assert_eq!(parse_blocks("|A|B|\n|---|---|\n|1|2|"), vec![Block::Table {
            header: vec!["A".into(), "B".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        }]);
    }

    #[test]
    fn invalid_separator_falls_back_to_paragraphs() {
        assert_eq!(parse_blocks("|A|B|\n|x|y|\n|1|2|"), vec![Block::Paragraph {
            text: "|A|B|\n|x|y|\n|1|2|".into()
        }]);
    }

    #[test]
    fn fence_label_with_trailing_space_is_not_line_parsed() {
        assert_eq!(parse_blocks("```rust \n# not a heading\n```"), vec![
            Block::CodeBlock {
                lang: Some("rust".into()),
                code: "# not a heading".into(),
            }
        ]);
    }

    #[test]
    fn code_fence_between_paragraphs() {
        assert_eq!(parse_blocks("intro\n```sh\nls -la\n```\noutro"), vec![
            Block::Paragraph {
                text: "intro".into()
            },
            Block::CodeBlock {
                lang: Some("sh".into()),
                code: "ls -la".into()
            },
            Block::Paragraph {
                text: "outro".into()
            },
        ]);
    }

    #[test]
    fn fence_body_is_not_block_parsed() {
        let blocks = parse_blocks("```\n# not a heading\n- nor a list\n```");
        assert_eq!(blocks, vec![Block::CodeBlock {
            lang: None,
            code: "# not a heading\n- nor a list".into()
        }]);
    }

    #[test]
    fn crlf_is_normalized() {
        assert_eq!(parse_blocks("line one\r\nline two\r\n\r\n## Next"), vec![
            Block::Paragraph {
                text: "line one\nline two".into()
            },
            Block::Heading {
                depth: 2,
                text: "Next".into()
            },
        ]);
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("\n \n\t\n").is_empty());
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "# T\n\n> q\n\n1. a\n\n|h|\n|---|\n|r|\n\n```\nc\n```\ntext";
        assert_eq!(parse_blocks(text), parse_blocks(text));
    }
}
