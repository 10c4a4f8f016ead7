//! # Fence Splitting
//!
//! Cuts triple-backtick code regions out of the input before any line-based
//! block parsing happens. Fenced regions are raw zones: their bodies are
//! never seen by the block parser or the inline tokenizer.

use super::{blocks::kinds::CodeFence, cursor::Cursor, span::Span};

/// A piece of the input, either literal code or text left for block parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Untouched text between fences.
    Text { span: Span, text: &'a str },
    /// A closed fence. `code` has trailing whitespace stripped.
    Code {
        span: Span,
        lang: Option<&'a str>,
        code: &'a str,
    },
}

impl Segment<'_> {
    pub fn span(&self) -> Span {
        match self {
            Segment::Text { span, .. } | Segment::Code { span, .. } => *span,
        }
    }
}

/// Splits `input` into text and code segments in source order.
///
/// An opening marker must be followed by an optional label and a line break.
/// An opener with no closing marker leaves the rest of the input as text.
pub fn split_fences(input: &str) -> Vec<Segment<'_>> {
    let mut out = vec![];
    let mut cur = Cursor::new(input);
    let mut last = 0usize;

    while let Some(open) = cur.seek_to(CodeFence::MARKER) {
        cur.bump_n(CodeFence::MARKER.len());

        let Some(lang) = read_opener(&mut cur) else {
            cur.reset_to(open + 1);
            continue;
        };
        let body_start = cur.pos();

        let Some(close) = cur.seek_to(CodeFence::MARKER) else {
            log::debug!("unterminated code fence at byte {open}; keeping remainder as text");
            break;
        };
        cur.bump_n(CodeFence::MARKER.len());

        if open > last {
            out.push(Segment::Text {
                span: Span::new(last, open),
                text: &input[last..open],
            });
        }
        out.push(Segment::Code {
            span: Span::new(open, cur.pos()),
            lang,
            code: input[body_start..close].trim_end(),
        });
        last = cur.pos();
    }

    if last < input.len() {
        out.push(Segment::Text {
            span: Span::new(last, input.len()),
            text: &input[last..],
        });
    }
    out
}

/// Reads the label and line break after an opening marker.
///
/// Trailing spaces and tabs after the label are skipped. Returns `Some(lang)`
/// with the cursor at the start of the body, or `None` when the rest of the
/// line is not a bare label.
fn read_opener<'a>(cur: &mut Cursor<'a>) -> Option<Option<&'a str>> {
    let label_start = cur.pos();
    let n = cur.bump_while(CodeFence::is_label_byte);
    let label = &cur.s[label_start..label_start + n];
    cur.bump_while(|b| b == b' ' || b == b'\t');

    if cur.peek() == Some(b'\r') {
        cur.bump();
    }
    if cur.bump() != Some(b'\n') {
        return None;
    }
    Some((!label.is_empty()).then_some(label))
}
