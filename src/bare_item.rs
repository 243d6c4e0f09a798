//! Bare Item parsers (RFC 9651, sections 4.2.3.1 to 4.2.10).
//!
//! Each parser consumes the longest prefix its grammar allows and fails on the
//! first byte that breaks it. None of them recover.

use crate::chars::{
    is_control_or_non_ascii, is_digit, is_token_char, is_token_start, lowercase_hex_value,
};
use crate::error::{ParseErrorKind, Result};
use crate::parser::Parser;
use crate::value::Item;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Standard alphabet, padded content. Padding must be complete; non-zero pad
/// bits are tolerated (RFC 9651, 4.2.7).
const PADDED_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Standard alphabet, content without any `=`.
const UNPADDED_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

const MAX_INTEGER_DIGITS: usize = 15;
const MAX_DECIMAL_CHARS: usize = 16;
const MAX_DECIMAL_INTEGER_DIGITS: usize = 12;
const MAX_FRACTIONAL_DIGITS: usize = 3;

impl Parser<'_> {
    /// Dispatches on the first byte to one of the seven bare-item grammars.
    pub(crate) fn parse_bare_item(&mut self) -> Result<Item> {
        match self.cursor.peek_byte() {
            Some(b'-' | b'0'..=b'9') => self.parse_integer_or_decimal(),
            Some(b'"') => self.parse_string(),
            Some(b'*' | b'A'..=b'Z' | b'a'..=b'z') => self.parse_token(),
            Some(b':') => self.parse_byte_sequence(),
            Some(b'?') => self.parse_boolean(),
            Some(b'@') => self.parse_date(),
            Some(b'%') => self.parse_display_string(),
            _ => Err(self.cursor.error(ParseErrorKind::UnrecognizedItemType)),
        }
    }

    /// RFC 9651, 4.2.4.
    pub(crate) fn parse_integer_or_decimal(&mut self) -> Result<Item> {
        let mut is_decimal = false;
        let mut negative = false;
        let mut number = String::with_capacity(MAX_DECIMAL_CHARS + 1);

        if self.cursor.peek_equals(b"-") {
            self.cursor.discard(1)?;
            negative = true;
        }

        match self.cursor.peek_byte() {
            None => return Err(self.cursor.error(ParseErrorKind::EmptyNumber)),
            Some(b) if !is_digit(b) => {
                return Err(self.cursor.error(ParseErrorKind::NumberMustStartWithDigit))
            }
            Some(_) => {}
        }

        while self.cursor.has_more() {
            let b = self.cursor.consume_byte()?;
            if is_digit(b) {
                number.push(char::from(b));
            } else if !is_decimal && b == b'.' {
                if number.len() > MAX_DECIMAL_INTEGER_DIGITS {
                    return Err(self
                        .cursor
                        .error(ParseErrorKind::TooManyIntegerDigitsBeforeDecimal));
                }
                number.push('.');
                is_decimal = true;
            } else {
                self.cursor.rewind(1)?;
                break;
            }

            if !is_decimal && number.len() > MAX_INTEGER_DIGITS {
                return Err(self.cursor.error(ParseErrorKind::IntegerTooLong));
            }
            if is_decimal && number.len() > MAX_DECIMAL_CHARS {
                return Err(self.cursor.error(ParseErrorKind::DecimalTooLong));
            }
        }

        if !is_decimal {
            // at most 15 digits, cannot overflow
            let magnitude = number
                .bytes()
                .fold(0i64, |acc, d| acc * 10 + i64::from(d - b'0'));
            return Ok(Item::Integer(if negative { -magnitude } else { magnitude }));
        }

        if number.ends_with('.') {
            return Err(self.cursor.error(ParseErrorKind::TrailingDecimalPoint));
        }
        let fractional_digits = number.len() - number.find('.').map_or(0, |dot| dot + 1);
        if fractional_digits > MAX_FRACTIONAL_DIGITS {
            return Err(self.cursor.error(ParseErrorKind::TooManyFractionalDigits));
        }

        let magnitude: f64 = number
            .parse()
            .map_err(|_| self.cursor.error(ParseErrorKind::NumberMustStartWithDigit))?;
        Ok(Item::Decimal(if negative { -magnitude } else { magnitude }))
    }

    /// RFC 9651, 4.2.5.
    pub(crate) fn parse_string(&mut self) -> Result<Item> {
        self.cursor.expect(b"\"", ParseErrorKind::InvalidStringStart)?;
        self.cursor.discard(1)?;

        let mut output = String::new();
        while self.cursor.has_more() {
            match self.cursor.consume_byte()? {
                b'\\' => match self.cursor.peek_byte() {
                    Some(escaped @ (b'"' | b'\\')) => {
                        self.cursor.discard(1)?;
                        output.push(char::from(escaped));
                    }
                    _ => return Err(self.cursor.error(ParseErrorKind::InvalidEscape)),
                },
                b'"' => return Ok(Item::String(output)),
                b if is_control_or_non_ascii(b) => {
                    return Err(self.cursor.error(ParseErrorKind::IllegalStringByte))
                }
                b => output.push(char::from(b)),
            }
        }

        Err(self.cursor.error(ParseErrorKind::UnterminatedString))
    }

    /// RFC 9651, 4.2.6.
    pub(crate) fn parse_token(&mut self) -> Result<Item> {
        match self.cursor.peek_byte() {
            Some(b) if is_token_start(b) => {}
            _ => return Err(self.cursor.error(ParseErrorKind::InvalidTokenStart)),
        }

        let mut output = String::new();
        output.push(char::from(self.cursor.consume_byte()?));
        while let Some(b) = self.cursor.peek_byte() {
            if !is_token_char(b) {
                break;
            }
            self.cursor.discard(1)?;
            output.push(char::from(b));
        }

        Ok(Item::Token(output))
    }

    /// RFC 9651, 4.2.7.
    pub(crate) fn parse_byte_sequence(&mut self) -> Result<Item> {
        self.cursor.expect(b":", ParseErrorKind::InvalidByteSequenceStart)?;
        self.cursor.discard(1)?;

        let mut encoded = Vec::new();
        while self.cursor.has_more() {
            match self.cursor.consume_byte()? {
                b':' => {
                    let decoded = if encoded.contains(&b'=') {
                        PADDED_ENGINE.decode(&encoded)
                    } else {
                        UNPADDED_ENGINE.decode(&encoded)
                    };
                    return decoded
                        .map(Item::ByteSequence)
                        .map_err(|_| self.cursor.error(ParseErrorKind::InvalidBase64));
                }
                b => encoded.push(b),
            }
        }

        Err(self.cursor.error(ParseErrorKind::UnterminatedByteSequence))
    }

    /// RFC 9651, 4.2.8.
    pub(crate) fn parse_boolean(&mut self) -> Result<Item> {
        self.cursor.expect(b"?", ParseErrorKind::InvalidBooleanStart)?;
        self.cursor.discard(1)?;

        let value = match self.cursor.peek_byte() {
            Some(b'1') => true,
            Some(b'0') => false,
            _ => return Err(self.cursor.error(ParseErrorKind::InvalidBoolean)),
        };
        self.cursor.discard(1)?;

        Ok(Item::Boolean(value))
    }

    /// RFC 9651, 4.2.9.
    pub(crate) fn parse_date(&mut self) -> Result<Item> {
        self.cursor.expect(b"@", ParseErrorKind::InvalidDateStart)?;
        self.cursor.discard(1)?;

        match self.parse_integer_or_decimal()? {
            Item::Integer(seconds) => Ok(Item::Date(seconds)),
            _ => Err(self.cursor.error(ParseErrorKind::DateMustBeInteger)),
        }
    }

    /// RFC 9651, 4.2.10.
    ///
    /// UTF-8 is validated once over the whole decoded byte array, so a code
    /// point may mix literal and percent-encoded bytes.
    pub(crate) fn parse_display_string(&mut self) -> Result<Item> {
        if self.cursor.peek(2) != b"%\"" {
            return Err(self.cursor.error(ParseErrorKind::InvalidDisplayStringStart));
        }
        self.cursor.discard(2)?;

        let mut bytes = Vec::new();
        while self.cursor.has_more() {
            match self.cursor.consume_byte()? {
                b if is_control_or_non_ascii(b) => {
                    return Err(self.cursor.error(ParseErrorKind::IllegalDisplayStringByte))
                }
                b'%' => {
                    let hex = self.cursor.consume(2)?;
                    match (lowercase_hex_value(hex[0]), lowercase_hex_value(hex[1])) {
                        (Some(high), Some(low)) => bytes.push((high << 4) | low),
                        _ => {
                            return Err(self.cursor.error(ParseErrorKind::InvalidPercentEncoding))
                        }
                    }
                }
                b'"' => {
                    return String::from_utf8(bytes)
                        .map(Item::DisplayString)
                        .map_err(|_| self.cursor.error(ParseErrorKind::InvalidUtf8));
                }
                b => bytes.push(b),
            }
        }

        Err(self.cursor.error(ParseErrorKind::UnterminatedDisplayString))
    }
}
