use regex::Captures;

use super::{
    kinds::TokenKind,
    types::{InlineNode, LinkKind},
};
use crate::parsing::{span::Span, url::normalize_url};

/// One pattern match before overlap resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'t> {
    pub kind: TokenKind,
    pub span: Span,
    /// Capture groups 1.., with `""` for groups that did not participate.
    pub groups: Vec<&'t str>,
    /// The whole match.
    pub matched: &'t str,
}

impl<'t> Candidate<'t> {
    fn from_captures(kind: TokenKind, caps: &Captures<'t>) -> Self {
        let whole = caps.get(0).expect("group 0 is always present");
        Self {
            kind,
            span: Span::new(whole.start(), whole.end()),
            groups: caps
                .iter()
                .skip(1)
                .map(|g| g.map_or("", |m| m.as_str()))
                .collect(),
            matched: whole.as_str(),
        }
    }

    fn group(&self, i: usize) -> &'t str {
        self.groups.get(i).copied().unwrap_or("")
    }

    /// Builds the node this candidate stands for once it has been committed.
    pub fn into_node(self) -> InlineNode {
        let span = self.span;
        match self.kind {
            TokenKind::CodeSpan => InlineNode::CodeSpan {
                span,
                text: self.group(0).to_string(),
            },
            TokenKind::Bold => InlineNode::Bold {
                span,
                text: self.group(0).to_string(),
            },
            TokenKind::Italic => InlineNode::Italic {
                span,
                text: self.group(0).to_string(),
            },
            TokenKind::Image => InlineNode::Image {
                span,
                alt: self.group(0).to_string(),
                href: normalize_url(self.group(1)),
            },
            TokenKind::ButtonLink => self.link(LinkKind::Button),
            TokenKind::Link => self.link(LinkKind::Link),
            TokenKind::RawUrl => InlineNode::Link {
                span,
                kind: LinkKind::RawUrl,
                href: normalize_url(self.matched),
                label: None,
            },
        }
    }

    fn link(&self, kind: LinkKind) -> InlineNode {
        InlineNode::Link {
            span: self.span,
            kind,
            href: normalize_url(self.group(1)),
            label: Some(self.group(0).trim().to_string()),
        }
    }
}

/// Phase 1: scans `text` once per kind and collects every match.
///
/// Candidates from different kinds may overlap; nothing is resolved here.
pub fn collect_candidates(text: &str) -> Vec<Candidate<'_>> {
    TokenKind::ALL
        .iter()
        .flat_map(|&kind| {
            kind.regex()
                .captures_iter(text)
                .map(move |caps| Candidate::from_captures(kind, &caps))
        })
        .collect()
}
