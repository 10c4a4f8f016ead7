/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote prefix from a line.
    ///
    /// Leading whitespace and one whitespace character after `>` are removed.
    /// Returns `None` when the line is not a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => Some(rest),
        }
    }

    pub fn matches(line: &str) -> bool {
        Self::strip_prefix(line).is_some()
    }
}
