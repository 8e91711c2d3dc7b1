//! Byte cursor over an SGF document.

/// Immutable view over the unread part of the input.
///
/// Productions take a cursor by value and return an advanced copy, so a
/// failed attempt is rolled back by keeping the earlier copy. The position
/// is derived from the two slices rather than counted, which keeps it in
/// step with the remaining bytes across every rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    data: &'a [u8],
    rest: &'a [u8],
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, rest: data }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.data.len() - self.rest.len()
    }

    /// Returns the unread bytes.
    pub fn remaining(&self) -> &'a [u8] {
        self.rest
    }

    /// Returns true if all input has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Looks at the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.rest.first().copied()
    }

    /// Looks `n` bytes past the next one.
    #[inline]
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.rest.get(n).copied()
    }

    /// Drops `n` bytes, or everything left if fewer remain.
    #[inline]
    pub fn consume(self, n: usize) -> Self {
        let n = n.min(self.rest.len());
        Self {
            data: self.data,
            rest: &self.rest[n..],
        }
    }

    /// Drops leading ASCII whitespace.
    pub fn skip_whitespace(self) -> Self {
        let n = self
            .rest
            .iter()
            .take_while(|b| is_whitespace(**b))
            .count();
        self.consume(n)
    }

    /// Drops bytes while `pred` holds and returns them with the new cursor.
    pub fn take_while(self, pred: impl Fn(u8) -> bool) -> (Self, &'a [u8]) {
        let n = self.rest.iter().take_while(|b| pred(**b)).count();
        (self.consume(n), &self.rest[..n])
    }
}

/// Space, tab, LF, CR, form feed and vertical tab.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C | 0x0B)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_peek_and_consume() {
        let cursor = Cursor::new(b"(;)");
        assert_eq!(cursor.peek(), Some(b'('));
        assert_eq!(cursor.peek_at(1), Some(b';'));

        let next = cursor.consume(2);
        assert_eq!(next.peek(), Some(b')'));
        assert_eq!(next.position(), 2);
        // The original copy is untouched
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_consume_past_end() {
        let cursor = Cursor::new(b"ab").consume(10);
        assert!(cursor.at_end());
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_skip_whitespace() {
        let cursor = Cursor::new(b" \t\r\n\x0b\x0c;x").skip_whitespace();
        assert_eq!(cursor.position(), 6);
        assert_eq!(cursor.peek(), Some(b';'));

        let cursor = Cursor::new(b"   ").skip_whitespace();
        assert!(cursor.at_end());
    }

    #[test]
    fn test_take_while() {
        let (cursor, taken) = Cursor::new(b"ABc").take_while(|b| b.is_ascii_uppercase());
        assert_eq!(taken, b"AB");
        assert_eq!(cursor.remaining(), b"c");
    }

    proptest! {
        #[test]
        fn test_position_tracks_remaining(
            data in proptest::collection::vec(any::<u8>(), 0..64),
            steps in proptest::collection::vec(0usize..8, 0..16),
        ) {
            let mut cursor = Cursor::new(&data);
            for step in steps {
                let attempt = cursor.consume(step).skip_whitespace();
                prop_assert_eq!(attempt.position(), data.len() - attempt.remaining().len());
                // Alternate between keeping and discarding the attempt
                if step % 2 == 0 {
                    cursor = attempt;
                }
                prop_assert_eq!(cursor.position(), data.len() - cursor.remaining().len());
            }
        }
    }
}
