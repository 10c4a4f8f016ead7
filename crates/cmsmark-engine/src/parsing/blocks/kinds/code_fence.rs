/// Fenced code block syntax.
///
/// Fences are cut out of the text before line-based block parsing runs, so
/// this type only owns the delimiter and the language-label rule.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// Bytes allowed in the language label after an opening marker.
    pub fn is_label_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || matches!(b, b'_' | b'+' | b'#' | b'.' | b'-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_bytes() {
        assert!("c++".bytes().all(CodeFence::is_label_byte));
        assert!("objective-c".bytes().all(CodeFence::is_label_byte));
        assert!(!CodeFence::is_label_byte(b' '));
        assert!(!CodeFence::is_label_byte(b'`'));
        assert!(!CodeFence::is_label_byte(b'\n'));
    }
}
