//! Scanner: the read-only cursor for one parse call.
//!
//! What it does
//! - Borrows the source text and tracks a byte offset into it together with
//!   `line/col` for error reporting.
//! - Hands out the unread tail as bytes (`rest()`) so the literal matcher and
//!   the number validator can look ahead without decoding.
//! - Skips insignificant whitespace.
//!
//! Invariants
//! - The offset only moves forward and always lands on a char boundary.
//! - `advance_ascii` is only called over bytes already inspected by the
//!   caller, all of them ASCII, so `col` can be bumped by the byte count.
//! - The scanner never copies or mutates the source.

/// A 1-based line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub line: usize,
    pub column: usize,
}

pub(crate) struct Scanner<'src> {
    src: &'src str,
    byte_idx: usize,

    // Positions
    line: usize,
    col: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            byte_idx: 0,
            line: 1,
            col: 1,
        }
    }

    /// Unread input.
    #[inline]
    pub fn rest(&self) -> &'src [u8] {
        &self.src.as_bytes()[self.byte_idx..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.byte_idx >= self.src.len()
    }

    #[inline]
    pub fn peek_byte(&self) -> Option<u8> {
        self.rest().first().copied()
    }

    /// Decodes but does not consume the next character.
    pub fn peek_char(&self) -> Option<(char, usize)> {
        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }
        let (ch, len) = bstr::decode_utf8(rest);
        // `src` is a `&str`, so decoding cannot fail on a char boundary.
        Some((ch.unwrap_or('\u{FFFD}'), len))
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.col,
        }
    }

    /// The next `len` unread bytes as text.
    ///
    /// `len` must end on a char boundary; callers only pass spans they have
    /// already validated as ASCII.
    #[inline]
    pub fn slice(&self, len: usize) -> &'src str {
        &self.src[self.byte_idx..self.byte_idx + len]
    }

    /// Consumes `len` bytes that the caller has already matched.
    #[inline]
    pub fn advance_ascii(&mut self, len: usize) {
        debug_assert!(self.rest()[..len].iter().all(|b| b.is_ascii() && *b != b'\n'));
        self.byte_idx += len;
        self.col += len;
    }

    /// Consumes one byte that the caller's dispatch has already confirmed.
    #[inline]
    pub fn expect(&mut self, b: u8) {
        debug_assert_eq!(self.peek_byte(), Some(b));
        self.advance_ascii(1);
    }

    /// Skips whitespace and returns the number of characters skipped.
    ///
    /// Without `unicode`, only the four JSON whitespace characters are
    /// skipped. With it, anything for which `char::is_whitespace` holds is,
    /// and U+0085, U+2028 and U+2029 start a new line like `\n`.
    pub fn skip_whitespace(&mut self, unicode: bool) -> usize {
        let mut skipped = 0;
        loop {
            match self.peek_byte() {
                Some(b'\n') => {
                    self.byte_idx += 1;
                    self.line += 1;
                    self.col = 1;
                }
                Some(b' ' | b'\t' | b'\r') => {
                    self.byte_idx += 1;
                    self.col += 1;
                }
                Some(_) if unicode => match self.peek_char() {
                    Some(('\u{0085}' | '\u{2028}' | '\u{2029}', len)) => {
                        self.byte_idx += len;
                        self.line += 1;
                        self.col = 1;
                    }
                    Some((ch, len)) if ch.is_whitespace() => {
                        self.byte_idx += len;
                        self.col += 1;
                    }
                    _ => break,
                },
                _ => break,
            }
            skipped += 1;
        }
        skipped
    }
}
