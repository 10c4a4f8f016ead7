/// A byte cursor over a string slice, used for hand-scanned syntax such as
/// code fences.
///
/// All positions are byte offsets into `s`. Callers only move the cursor onto
/// ASCII delimiters, so slicing `s` at any cursor position stays on a char
/// boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances while `pred` holds for the current byte; returns the number
    /// of bytes consumed.
    pub fn bump_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
        self.i - start
    }

    /// Moves to the next occurrence of `pat` at or after the current position.
    ///
    /// Returns the position found; on `None` the cursor is left untouched.
    pub fn seek_to(&mut self, pat: &str) -> Option<usize> {
        let found = self.s.get(self.i..)?.find(pat)? + self.i;
        self.i = found;
        Some(found)
    }

    /// Jumps to an absolute position.
    pub fn reset_to(&mut self, pos: usize) {
        self.i = pos;
    }
}
