use serde::{Deserialize, Serialize};

/// A byte range `[start, end)` into the parsed text.
///
/// Inline nodes and fence segments keep the span they were produced from, so
/// slicing the input with every span in order reproduces it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the slice of `text` this span covers.
    ///
    /// The span must lie on char boundaries of `text`.
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_reads_text() {
        assert_eq!(Span::new(6, 11).slice("hello world"), "world");
    }
}
