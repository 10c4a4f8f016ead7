use crate::parsing::{
    Document, cards_for_block,
    blocks::{Block, segment_steps},
    fence::{Segment, split_fences},
    inline::tokenize_inline,
    url::find_urls,
};

/// Validates parser output invariants for `text` and its parsed `doc`.
///
/// Asserts that:
/// - Fence segments tile the input and line steps tile every text segment
/// - Inline node spans tile every text run, list item and table cell
/// - Paragraphs get one card per URL; no other block gets cards
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, doc: &Document) {
    let mut pos = 0;
    for seg in split_fences(text) {
        let span = seg.span();
        assert_eq!(span.start, pos, "segment gap or overlap at byte {pos}");
        pos = span.end;

        if let Segment::Text { text, .. } = seg {
            let steps = segment_steps(text);
            let mut line = 0;
            for step in &steps {
                assert_eq!(
                    step.lines.start, line,
                    "line step gap or overlap: {step:?}"
                );
                assert!(step.lines.end > step.lines.start, "empty step: {step:?}");
                line = step.lines.end;
            }
            let line_count = text.replace("\r\n", "\n").split('\n').count();
            assert_eq!(line, line_count, "steps stop before the last line");
        }
    }
    assert_eq!(pos, text.len(), "segments stop before end of input");

    for b in &doc.blocks {
        for run in runs(b) {
            check_tiling(run);
        }
        let cards = cards_for_block(b);
        match b {
            Block::Paragraph { text } => assert_eq!(
                cards.len(),
                find_urls(text).count(),
                "paragraph card count differs from url count: {text:?}"
            ),
            _ => assert!(cards.is_empty(), "cards on non-paragraph block: {b:?}"),
        }
    }
}

fn runs(b: &Block) -> Vec<&str> {
    match b {
        Block::Heading { text, .. } | Block::Paragraph { text } | Block::Blockquote { text } => {
            vec![text.as_str()]
        }
        Block::OrderedList { items } | Block::UnorderedList { items } => {
            items.iter().map(String::as_str).collect()
        }
        Block::Table { header, rows } => header
            .iter()
            .chain(rows.iter().flatten())
            .map(String::as_str)
            .collect(),
        Block::CodeBlock { .. } | Block::HorizontalRule => vec![],
    }
}

fn check_tiling(run: &str) {
    let mut pos = 0;
    for node in tokenize_inline(run) {
        let sp = node.span();
        assert_eq!(sp.start, pos, "inline gap or overlap in {run:?}: {node:?}");
        assert!(sp.end > sp.start, "empty inline node in {run:?}: {node:?}");
        pos = sp.end;
    }
    assert_eq!(pos, run.len(), "inline nodes stop before end of {run:?}");
}
