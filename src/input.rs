//! Borrowed views into the character buffer being parsed.

use alloc::string::String;
use core::fmt;

/// An immutable window into a caller-owned character buffer.
///
/// A range never owns the characters it describes: it borrows the buffer for
/// `'buf` and pairs it with a cursor position. Ranges are cheap to produce
/// (`Copy`) — one is created at parse start over the whole buffer, and one per
/// [`advance`](crate::ScanState::advance) call to describe the span that was
/// (or would have been) matched, always referencing the same buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRange<'buf> {
    buffer: &'buf [char],
    position: usize,
}

impl<'buf> InputRange<'buf> {
    /// Creates a range covering `buffer` from the start.
    #[must_use]
    pub fn new(buffer: &'buf [char]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// The span of `length` characters starting at `start`.
    pub(crate) fn span(buffer: &'buf [char], start: usize, length: usize) -> Self {
        Self {
            buffer: &buffer[..start + length],
            position: start,
        }
    }

    /// Current offset into the underlying buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of characters between the cursor and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.position < self.buffer.len() {
            self.buffer.len() - self.position
        } else {
            0
        }
    }

    /// Whether no characters remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Copies `length` characters starting at the cursor into an owned string.
    ///
    /// A zero `length` returns an empty string without touching the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `length` exceeds [`remaining`](Self::remaining).
    #[must_use]
    pub fn materialize(&self, length: usize) -> String {
        if length == 0 {
            return String::new();
        }
        self.buffer[self.position..self.position + length]
            .iter()
            .collect()
    }

    pub(crate) fn total_len(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn buffer(&self) -> &'buf [char] {
        self.buffer
    }

    pub(crate) fn char_at_cursor(&self) -> char {
        self.buffer[self.position]
    }

    pub(crate) fn bump(&mut self) {
        self.position += 1;
    }

    pub(crate) fn rewind_to(&mut self, position: usize) {
        self.position = position;
    }
}

impl fmt::Display for InputRange<'_> {
    /// Materializes the remaining span.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.buffer[self.position.min(self.buffer.len())..] {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn remaining_shrinks_with_position() {
        let buffer = chars("hello");
        let range = InputRange::new(&buffer);
        assert_eq!(range.remaining(), 5);
        assert!(!range.is_empty());

        let tail = InputRange::span(&buffer, 3, 2);
        assert_eq!(tail.remaining(), 2);
        assert_eq!(tail.materialize(2), "lo");
    }

    #[test]
    fn empty_buffer_has_nothing_remaining() {
        let buffer = chars("");
        let range = InputRange::new(&buffer);
        assert_eq!(range.remaining(), 0);
        assert!(range.is_empty());
        assert_eq!(range.materialize(0), "");
    }

    #[test]
    fn display_materializes_the_remainder() {
        let buffer = chars("abcdef");
        assert_eq!(InputRange::new(&buffer).to_string(), "abcdef");
        assert_eq!(InputRange::span(&buffer, 2, 3).to_string(), "cde");
    }

    #[test]
    fn materialize_zero_is_empty() {
        let buffer = chars("abc");
        let range = InputRange::new(&buffer);
        assert_eq!(range.materialize(0), "");
        assert_eq!(range.materialize(2), "ab");
    }
}
