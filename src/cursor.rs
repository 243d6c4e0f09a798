//! Position-tracked reading over the input bytes.
//!
//! Every grammar production consumes a [`Cursor`] destructively: the read
//! position only moves forward, except for the single-byte push-back the
//! number grammar needs. Running out of input while consuming is reported as
//! [`ParseErrorKind::UnexpectedEndOfInput`].

use crate::error::{Error, ParseErrorKind, Result};

/// A read position over an immutable byte string.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Cursor { input, position: 0 }
    }

    #[inline]
    pub(crate) fn has_more(&self) -> bool {
        self.position < self.input.len()
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Returns the next `count` bytes without advancing, or an empty slice if
    /// fewer than `count` remain.
    #[inline]
    pub(crate) fn peek(&self, count: usize) -> &'a [u8] {
        match self.position.checked_add(count) {
            Some(end) if end <= self.input.len() => &self.input[self.position..end],
            _ => &[],
        }
    }

    #[inline]
    pub(crate) fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Returns `true` if the next byte is one of `candidates`.
    #[inline]
    pub(crate) fn peek_equals(&self, candidates: &[u8]) -> bool {
        self.peek_byte().is_some_and(|b| candidates.contains(&b))
    }

    /// Fails with `kind` unless the next byte is one of `candidates`. Does not
    /// advance.
    pub(crate) fn expect(&self, candidates: &[u8], kind: ParseErrorKind) -> Result<()> {
        if self.peek_equals(candidates) {
            Ok(())
        } else {
            Err(self.error(kind))
        }
    }

    pub(crate) fn consume(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(count);
        if bytes.len() != count {
            return Err(self.error(ParseErrorKind::UnexpectedEndOfInput));
        }
        self.position += count;
        Ok(bytes)
    }

    pub(crate) fn consume_byte(&mut self) -> Result<u8> {
        match self.peek_byte() {
            Some(b) => {
                self.position += 1;
                Ok(b)
            }
            None => Err(self.error(ParseErrorKind::UnexpectedEndOfInput)),
        }
    }

    pub(crate) fn discard(&mut self, count: usize) -> Result<()> {
        self.consume(count).map(|_| ())
    }

    /// Skips zero or more SP bytes.
    pub(crate) fn discard_spaces(&mut self) {
        while self.peek_byte() == Some(b' ') {
            self.position += 1;
        }
    }

    pub(crate) fn rewind(&mut self, count: usize) -> Result<()> {
        self.position = self
            .position
            .checked_sub(count)
            .ok_or(Error::CursorMisuse("rewind beyond the start of the input"))?;
        Ok(())
    }

    /// Builds a parse failure at the current position.
    #[inline]
    pub(crate) fn error(&self, kind: ParseErrorKind) -> Error {
        Error::parse(kind, self.position())
    }
}
