/// Ordered list item: decimal number, `.`, whitespace.
pub struct OrderedList;

/// Unordered list item: `-`, `*` or `+`, whitespace.
pub struct UnorderedList;

impl OrderedList {
    pub const DELIMITER: char = '.';

    /// Returns the item text with the marker and following whitespace removed.
    pub fn strip_marker(line: &str) -> Option<&str> {
        let rest = line.trim_start();
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let after = rest[digits..].strip_prefix(Self::DELIMITER)?;
        strip_required_space(after)
    }
}

impl UnorderedList {
    pub const MARKERS: [char; 3] = ['-', '*', '+'];

    /// Returns the item text with the bullet and following whitespace removed.
    pub fn strip_marker(line: &str) -> Option<&str> {
        let after = line.trim_start().strip_prefix(Self::MARKERS)?;
        strip_required_space(after)
    }
}

fn strip_required_space(s: &str) -> Option<&str> {
    s.starts_with(char::is_whitespace).then(|| s.trim_start())
}
