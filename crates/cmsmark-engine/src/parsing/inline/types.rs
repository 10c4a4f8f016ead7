use serde::{Deserialize, Serialize};

use crate::parsing::span::Span;

/// Which link syntax a hidden [`InlineNode::Link`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// `[button: label](url)` / `[btn: label](url)`
    Button,
    /// `[label](url)`
    Link,
    /// A bare URL in running text.
    RawUrl,
}

/// A span of one block's text after overlap resolution.
///
/// Every node keeps the source span it covers; in a tokenized sequence the
/// spans tile the input with no gaps or overlaps. Captured text is literal:
/// styled spans are not tokenized again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text between other nodes.
    Text { span: Span, text: String },
    /// `` `code` ``
    CodeSpan { span: Span, text: String },
    /// `**bold**`
    Bold { span: Span, text: String },
    /// `*italic*`
    Italic { span: Span, text: String },
    /// `![alt](url)` with the href normalized to carry a scheme.
    Image { span: Span, href: String, alt: String },
    /// A consumed link or bare URL. Never rendered inline: links surface
    /// only as enhancement cards under their paragraph.
    Link {
        span: Span,
        kind: LinkKind,
        href: String,
        label: Option<String>,
    },
}

impl InlineNode {
    /// Extracts the full span from any node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text { span, .. }
            | InlineNode::CodeSpan { span, .. }
            | InlineNode::Bold { span, .. }
            | InlineNode::Italic { span, .. }
            | InlineNode::Image { span, .. }
            | InlineNode::Link { span, .. } => *span,
        }
    }
}
