//! Error types for Structured Field parsing.
//!
//! Every failure aborts the whole parse: there is no partial result and no
//! recovery mode. A caller receives either a complete value tree or exactly one
//! [`Error`].
//!
//! ## Error Categories
//!
//! - **Parse failures**: the input does not match the RFC 9651 grammar. The
//!   [`ParseErrorKind`] names the failed production and its message cites the
//!   RFC section and algorithm step.
//! - **Non-ASCII input**: a byte above `0x7F` was found by the pre-check that
//!   runs before any structural parsing.
//! - **Oversized input**: the input exceeds [`ParserOptions::max_input_len`].
//! - **Type mismatches**: a typed conversion out of an [`Item`] was asked for
//!   a type the Item does not hold.
//! - **Cursor misuse**: a programming error inside the parser (such as rewinding
//!   before the start of the input). No input can trigger it.
//!
//! ## Examples
//!
//! ```rust
//! use rfc9651::{parse_list, ParseErrorKind};
//!
//! let err = parse_list("1, 2,").unwrap_err();
//! assert_eq!(err.kind(), Some(ParseErrorKind::TrailingComma));
//! assert!(err.to_string().contains("RFC 9651, 4.2.1"));
//! ```
//!
//! [`ParserOptions::max_input_len`]: crate::ParserOptions::max_input_len
//! [`Item`]: crate::Item

use std::fmt;
use thiserror::Error;

/// Represents all possible errors returned by the parser entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input does not match the grammar.
    #[error("{kind} at position {position}")]
    Parse {
        kind: ParseErrorKind,
        position: usize,
    },

    /// The input contains a byte outside the ASCII range.
    #[error("Input was not a valid ASCII string (RFC 9651, 4.2, 1): byte 0x{byte:02x} at position {position}")]
    NotAscii { position: usize, byte: u8 },

    /// The input is longer than the configured limit.
    #[error("Input of {len} bytes exceeds the limit of {max} bytes")]
    InputTooLong { len: usize, max: usize },

    /// The parser used its cursor incorrectly.
    #[error("Cursor misuse: {0}")]
    CursorMisuse(&'static str),

    /// An Item was converted into a Rust type it does not hold.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// Creates a parse failure of the given kind at a byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc9651::{Error, ParseErrorKind};
    ///
    /// let err = Error::parse(ParseErrorKind::InvalidBoolean, 1);
    /// assert_eq!(err.position(), Some(1));
    /// assert!(err.to_string().contains("4.2.8"));
    /// ```
    #[must_use]
    pub fn parse(kind: ParseErrorKind, position: usize) -> Self {
        Error::Parse { kind, position }
    }

    /// Creates the non-ASCII pre-check failure.
    #[must_use]
    pub fn not_ascii(position: usize, byte: u8) -> Self {
        Error::NotAscii { position, byte }
    }

    /// Creates the oversized-input failure.
    #[must_use]
    pub fn input_too_long(len: usize, max: usize) -> Self {
        Error::InputTooLong { len, max }
    }

    /// Creates a conversion failure between an Item type and a Rust type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc9651::Error;
    ///
    /// let err = Error::type_mismatch("integer", "token");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    #[must_use]
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Returns the grammar failure kind, or `None` for the other categories.
    #[must_use]
    pub fn kind(&self) -> Option<ParseErrorKind> {
        match self {
            Error::Parse { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the byte offset the failure was detected at, if known.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Parse { position, .. } | Error::NotAscii { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Returns `true` if the input was rejected by the ASCII pre-check.
    #[must_use]
    pub fn is_not_ascii(&self) -> bool {
        matches!(self, Error::NotAscii { .. })
    }
}

/// The grammar production that rejected the input.
///
/// The `Display` output is a human-readable message that references the
/// RFC 9651 section and algorithm step the input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    UnexpectedEndOfInput,
    // Integers and Decimals
    EmptyNumber,
    NumberMustStartWithDigit,
    TooManyIntegerDigitsBeforeDecimal,
    IntegerTooLong,
    DecimalTooLong,
    TrailingDecimalPoint,
    TooManyFractionalDigits,
    // Strings
    InvalidStringStart,
    InvalidEscape,
    IllegalStringByte,
    UnterminatedString,
    // Tokens
    InvalidTokenStart,
    // Byte Sequences
    InvalidByteSequenceStart,
    InvalidBase64,
    UnterminatedByteSequence,
    // Booleans
    InvalidBooleanStart,
    InvalidBoolean,
    // Dates
    InvalidDateStart,
    DateMustBeInteger,
    // Display Strings
    InvalidDisplayStringStart,
    IllegalDisplayStringByte,
    InvalidPercentEncoding,
    InvalidUtf8,
    UnterminatedDisplayString,
    // Items, keys and structures
    UnrecognizedItemType,
    InvalidKeyStart,
    InvalidInnerListStart,
    MissingInnerListSeparator,
    UnterminatedInnerList,
    ExpectedComma,
    TrailingComma,
    TrailingGarbage,
}

impl ParseErrorKind {
    /// Returns the message for this failure, including its RFC 9651 reference.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        use ParseErrorKind::*;

        match self {
            UnexpectedEndOfInput => "Unexpected end of input",
            EmptyNumber => "An empty integer or decimal was encountered (RFC 9651, 4.2.4, 5)",
            NumberMustStartWithDigit => {
                "The first character of an integer or decimal must be a digit (RFC 9651, 4.2.4, 6)"
            }
            TooManyIntegerDigitsBeforeDecimal => {
                "A decimal has more than 12 digits before the \".\" (RFC 9651, 4.2.4, 7.3.1)"
            }
            IntegerTooLong => "An integer has more than 15 digits (RFC 9651, 4.2.4, 7.5)",
            DecimalTooLong => "A decimal has more than 16 characters (RFC 9651, 4.2.4, 7.6)",
            TrailingDecimalPoint => "A decimal must not end with \".\" (RFC 9651, 4.2.4, 9.1)",
            TooManyFractionalDigits => {
                "A decimal has more than three digits after the \".\" (RFC 9651, 4.2.4, 9.2)"
            }
            InvalidStringStart => {
                "The first character of a string must be DQUOTE (RFC 9651, 4.2.5, 2)"
            }
            InvalidEscape => {
                "A backslash must be followed by DQUOTE or another backslash (RFC 9651, 4.2.5, 4.2.3)"
            }
            IllegalStringByte => "Strings must only consist of VCHAR or SP (RFC 9651, 4.2.5, 4.4)",
            UnterminatedString => {
                "Reached end of input without finding a closing DQUOTE (RFC 9651, 4.2.5, 5)"
            }
            InvalidTokenStart => {
                "The first character of a token must be ALPHA or \"*\" (RFC 9651, 4.2.6, 1)"
            }
            InvalidByteSequenceStart => {
                "The first character of a byte sequence must be \":\" (RFC 9651, 4.2.7, 1)"
            }
            InvalidBase64 => "Base64 decoding of a byte sequence failed (RFC 9651, 4.2.7, 6)",
            UnterminatedByteSequence => {
                "Reached end of input before the closing \":\" of a byte sequence (RFC 9651, 4.2.7, 3)"
            }
            InvalidBooleanStart => {
                "The first character of a boolean must be \"?\" (RFC 9651, 4.2.8, 1)"
            }
            InvalidBoolean => "A boolean must be either \"?1\" or \"?0\" (RFC 9651, 4.2.8, 5)",
            InvalidDateStart => "The first character of a date must be \"@\" (RFC 9651, 4.2.9, 1)",
            DateMustBeInteger => "A date must be an integer, not a decimal (RFC 9651, 4.2.9, 4)",
            InvalidDisplayStringStart => {
                "A display string must start with %\" (RFC 9651, 4.2.10, 1)"
            }
            IllegalDisplayStringByte => {
                "Display strings must only consist of VCHAR or SP (RFC 9651, 4.2.10, 4.2)"
            }
            InvalidPercentEncoding => {
                "Percent-encoding must consist of two characters in 0-9 or a-f (RFC 9651, 4.2.10, 4.3.2)"
            }
            InvalidUtf8 => {
                "A display string contained an invalid UTF-8 sequence (RFC 9651, 4.2.10, 4.4.1)"
            }
            UnterminatedDisplayString => {
                "Reached end of input without finding a closing DQUOTE (RFC 9651, 4.2.10, 5)"
            }
            UnrecognizedItemType => "The item type is unrecognized (RFC 9651, 4.2.3.1, 8)",
            InvalidKeyStart => {
                "A key must start with \"*\" or a lowercase letter (RFC 9651, 4.2.3.3, 1)"
            }
            InvalidInnerListStart => {
                "An inner list must start with \"(\" (RFC 9651, 4.2.1.2, 1)"
            }
            MissingInnerListSeparator => {
                "Inner list items must be followed by SP or \")\" (RFC 9651, 4.2.1.2, 3.5)"
            }
            UnterminatedInnerList => "End of inner list not found (RFC 9651, 4.2.1.2, 4)",
            ExpectedComma => {
                "Expected a \",\" after a list or dictionary member (RFC 9651, 4.2.1, 2.4; 4.2.2, 2.8)"
            }
            TrailingComma => "Trailing comma encountered (RFC 9651, 4.2.1, 2.6; 4.2.2, 2.10)",
            TrailingGarbage => "Unexpected characters after parsing (RFC 9651, 4.2, 7)",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse(ParseErrorKind::TrailingComma, 3);
        assert_eq!(
            err.to_string(),
            "Trailing comma encountered (RFC 9651, 4.2.1, 2.6; 4.2.2, 2.10) at position 3"
        );
    }

    #[test]
    fn test_kind_and_position() {
        let err = Error::parse(ParseErrorKind::InvalidBase64, 7);
        assert_eq!(err.kind(), Some(ParseErrorKind::InvalidBase64));
        assert_eq!(err.position(), Some(7));
        assert!(!err.is_not_ascii());

        let err = Error::not_ascii(2, 0xff);
        assert_eq!(err.kind(), None);
        assert_eq!(err.position(), Some(2));
        assert!(err.is_not_ascii());
        assert!(err.to_string().contains("0xff"));

        let err = Error::input_too_long(20, 10);
        assert_eq!(err.position(), None);
        assert!(err.to_string().contains("20 bytes"));
    }

    #[test]
    fn test_every_message_cites_the_rfc() {
        use ParseErrorKind::*;

        let kinds = [
            EmptyNumber,
            NumberMustStartWithDigit,
            TooManyIntegerDigitsBeforeDecimal,
            IntegerTooLong,
            DecimalTooLong,
            TrailingDecimalPoint,
            TooManyFractionalDigits,
            InvalidStringStart,
            InvalidEscape,
            IllegalStringByte,
            UnterminatedString,
            InvalidTokenStart,
            InvalidByteSequenceStart,
            InvalidBase64,
            UnterminatedByteSequence,
            InvalidBooleanStart,
            InvalidBoolean,
            InvalidDateStart,
            DateMustBeInteger,
            InvalidDisplayStringStart,
            IllegalDisplayStringByte,
            InvalidPercentEncoding,
            InvalidUtf8,
            UnterminatedDisplayString,
            UnrecognizedItemType,
            InvalidKeyStart,
            InvalidInnerListStart,
            MissingInnerListSeparator,
            UnterminatedInnerList,
            ExpectedComma,
            TrailingComma,
            TrailingGarbage,
        ];

        for kind in kinds {
            assert!(kind.message().contains("(RFC 9651, 4.2"), "{kind:?}");
        }
    }

}
