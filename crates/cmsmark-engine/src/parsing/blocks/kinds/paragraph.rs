use super::{BlockQuote, Heading, OrderedList, Table, ThematicBreak, UnorderedList};

/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the fallback when no other block
/// opener matches and run until a blank line or a line that opens another
/// block.
pub struct Paragraph;

impl Paragraph {
    /// Whether `line` can be appended to an open paragraph. `next` is the
    /// line after it, needed to tell a table header from a stray pipe.
    pub fn continues(line: &str, next: Option<&str>) -> bool {
        !line.trim().is_empty() && !Self::interrupted_by(line, next)
    }

    fn interrupted_by(line: &str, next: Option<&str>) -> bool {
        ThematicBreak::matches(line)
            || Heading::parse(line).is_some()
            || BlockQuote::matches(line)
            || OrderedList::strip_marker(line).is_some()
            || UnorderedList::strip_marker(line).is_some()
            || Table::opens(line, next)
    }
}
