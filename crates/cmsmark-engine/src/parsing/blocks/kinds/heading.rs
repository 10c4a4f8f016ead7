/// ATX heading: one to six `#` followed by whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_DEPTH: usize = 6;

    /// Returns `(depth, text)` when `line` is a heading. `text` is trimmed.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start();
        let depth = rest.bytes().take_while(|&b| b == Self::MARKER).count();
        if depth == 0 || depth > Self::MAX_DEPTH {
            return None;
        }
        let after = &rest[depth..];
        if !after.starts_with(char::is_whitespace) {
            return None;
        }
        Some((depth as u8, after.trim()))
    }
}
