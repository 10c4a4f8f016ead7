use std::cmp::Reverse;

use super::{candidates::Candidate, types::InlineNode};
use crate::parsing::span::Span;

/// Phase 2: turns possibly-overlapping candidates into one non-overlapping
/// node sequence covering all of `text`.
///
/// Candidates are ordered by start, then longest first, then kind order. A
/// single forward pass commits each candidate that starts at or after the
/// cursor and drops the rest; gaps become `Text` nodes.
pub fn resolve(text: &str, mut candidates: Vec<Candidate<'_>>) -> Vec<InlineNode> {
    candidates.sort_by_key(|c| (c.span.start, Reverse(c.span.end), c.kind));

    let mut out = vec![];
    let mut cursor = 0usize;
    for candidate in candidates {
        if candidate.span.start < cursor {
            continue;
        }
        flush_text(&mut out, text, cursor, candidate.span.start);
        cursor = candidate.span.end;
        out.push(candidate.into_node());
    }
    flush_text(&mut out, text, cursor, text.len());
    out
}

fn flush_text(out: &mut Vec<InlineNode>, text: &str, start: usize, end: usize) {
    if end > start {
        let span = Span::new(start, end);
        out.push(InlineNode::Text {
            span,
            text: span.slice(text).to_string(),
        });
    }
}
