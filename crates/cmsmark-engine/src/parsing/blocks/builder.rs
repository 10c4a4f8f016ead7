use std::ops::Range;

use super::{
    kinds::{BlockQuote, Heading, OrderedList, Paragraph, Table, ThematicBreak, UnorderedList},
    types::Block,
};

/// One application of a block rule: the lines it consumed and the block it
/// produced. Blank lines are consumed without producing a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub lines: Range<usize>,
    pub block: Option<Block>,
}

/// Line-cursor state machine over one text segment.
///
/// Rules are tried in fixed precedence at each cursor position; the first
/// that matches consumes one or more lines. Iterating yields one [`Step`] per
/// rule application until the lines are exhausted.
pub struct BlockBuilder<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> BlockBuilder<'a> {
    /// `text` should already have `\r\n` normalized to `\n`.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            pos: 0,
        }
    }

    fn next_block(&mut self) -> Option<Block> {
        let line = self.lines[self.pos];

        if line.trim().is_empty() {
            self.pos += 1;
            return None;
        }

        if ThematicBreak::matches(line) {
            self.pos += 1;
            return Some(Block::HorizontalRule);
        }

        if let Some((depth, text)) = Heading::parse(line) {
            self.pos += 1;
            return Some(Block::Heading {
                depth,
                text: text.to_string(),
            });
        }

        if BlockQuote::matches(line) {
            let quoted = self.take_run(BlockQuote::strip_prefix);
            return Some(Block::Blockquote {
                text: quoted.join("\n").trim().to_string(),
            });
        }

        if OrderedList::strip_marker(line).is_some() {
            let items = self.take_run(OrderedList::strip_marker);
            return Some(Block::OrderedList {
                items: items.into_iter().map(str::to_string).collect(),
            });
        }

        if UnorderedList::strip_marker(line).is_some() {
            let items = self.take_run(UnorderedList::strip_marker);
            return Some(Block::UnorderedList {
                items: items.into_iter().map(str::to_string).collect(),
            });
        }

        if let Some(table) = self.try_table() {
            return Some(table);
        }

        Some(self.paragraph())
    }

    /// Consumes the current line and every following line accepted by `strip`.
    fn take_run(&mut self, strip: fn(&'a str) -> Option<&'a str>) -> Vec<&'a str> {
        let mut out = vec![];
        while let Some(s) = self.lines.get(self.pos).copied().and_then(strip) {
            out.push(s);
            self.pos += 1;
        }
        out
    }

    fn try_table(&mut self) -> Option<Block> {
        let head = self.lines[self.pos];
        let next = self.lines.get(self.pos + 1).copied();
        if !Table::opens(head, next) {
            if Table::is_row(head) && next.is_some_and(Table::is_row) {
                log::trace!(
                    "line {}: table separator rejected, falling back to paragraph",
                    self.pos + 1
                );
            }
            return None;
        }

        let header = Table::cells(head);
        self.pos += 2;
        let mut rows = vec![];
        while let Some(&row) = self.lines.get(self.pos) {
            if !Table::is_row(row) {
                break;
            }
            rows.push(Table::cells(row));
            self.pos += 1;
        }
        Some(Block::Table { header, rows })
    }

    fn paragraph(&mut self) -> Block {
        let mut buf = vec![self.lines[self.pos]];
        self.pos += 1;
        while let Some(&line) = self.lines.get(self.pos) {
            let next = self.lines.get(self.pos + 1).copied();
            if !Paragraph::continues(line, next) {
                break;
            }
            buf.push(line);
            self.pos += 1;
        }
        Block::Paragraph {
            text: buf.join("\n"),
        }
    }
}

impl Iterator for BlockBuilder<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.pos >= self.lines.len() {
            return None;
        }
        let start = self.pos;
        let block = self.next_block();
        Some(Step {
            lines: start..self.pos,
            block,
        })
    }
}
