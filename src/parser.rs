//! Structural parsing: Lists, Dictionaries, Items and their Parameters.
//!
//! [`Rfc9651Parser`] is the configurable entry point. It rejects oversized and
//! non-ASCII input up front, strips surrounding SP bytes, runs one top-level
//! production and fails if anything is left over (RFC 9651, 4.2).
//!
//! ## Examples
//!
//! ```rust
//! use rfc9651::{ParserOptions, Rfc9651Parser, StructuredValueParser};
//!
//! let parser = Rfc9651Parser::new(ParserOptions::default());
//! let dict = parser.parse_dictionary(b"u=2, i").unwrap();
//!
//! assert_eq!(dict.get_item("u").and_then(|v| v.as_integer()), Some(2));
//! assert_eq!(dict.get_item("i").and_then(|v| v.as_bool()), Some(true));
//! ```

use crate::chars::{is_key_char, is_key_start};
use crate::cursor::Cursor;
use crate::error::{Error, ParseErrorKind, Result};
use crate::map::{Dictionary, Parameters};
use crate::options::ParserOptions;
use crate::value::{InnerList, Item, List, Member, Parameterized};
use tracing::{debug, trace};

/// Parses the three top-level Structured Field shapes.
///
/// Implementations receive the raw field value bytes and return either a
/// complete value tree or a single [`Error`].
pub trait StructuredValueParser {
    /// Parses a List field value (RFC 9651, 4.2.1).
    fn parse_list(&self, input: &[u8]) -> Result<List>;

    /// Parses a Dictionary field value (RFC 9651, 4.2.2).
    fn parse_dictionary(&self, input: &[u8]) -> Result<Dictionary>;

    /// Parses an Item field value (RFC 9651, 4.2.3).
    fn parse_item(&self, input: &[u8]) -> Result<Parameterized<Item>>;
}

/// The strict RFC 9651 parser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rfc9651Parser {
    options: ParserOptions,
}

impl Rfc9651Parser {
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Rfc9651Parser { options }
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    fn check_input(&self, input: &[u8]) -> Result<()> {
        if let Some(max) = self.options.max_input_len {
            if input.len() > max {
                return Err(Error::input_too_long(input.len(), max));
            }
        }
        match input.iter().position(|b| !b.is_ascii()) {
            Some(position) => Err(Error::not_ascii(position, input[position])),
            None => Ok(()),
        }
    }

    fn run<'i, T>(
        &self,
        field_type: &'static str,
        input: &'i [u8],
        production: impl FnOnce(&mut Parser<'i>) -> Result<T>,
    ) -> Result<T> {
        trace!(field_type, len = input.len(), "parsing structured field");

        let result = self.check_input(input).and_then(|()| {
            let mut parser = Parser::new(input);
            parser.cursor.discard_spaces();
            let value = production(&mut parser)?;
            parser.finish()?;
            Ok(value)
        });

        if let Err(err) = &result {
            debug!(field_type, error = %err, "rejected structured field");
        }
        result
    }
}

impl StructuredValueParser for Rfc9651Parser {
    fn parse_list(&self, input: &[u8]) -> Result<List> {
        self.run("list", input, Parser::parse_list)
    }

    fn parse_dictionary(&self, input: &[u8]) -> Result<Dictionary> {
        self.run("dictionary", input, Parser::parse_dictionary)
    }

    fn parse_item(&self, input: &[u8]) -> Result<Parameterized<Item>> {
        self.run("item", input, Parser::parse_item)
    }
}

/// Recursive-descent state over one input. Bare-item productions live in
/// `bare_item.rs`.
pub(crate) struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Parser {
            cursor: Cursor::new(input),
        }
    }

    /// Trailing SP is allowed, anything else is not.
    fn finish(&mut self) -> Result<()> {
        self.cursor.discard_spaces();
        if self.cursor.has_more() {
            return Err(self.cursor.error(ParseErrorKind::TrailingGarbage));
        }
        Ok(())
    }

    /// RFC 9651, 4.2.1.
    pub(crate) fn parse_list(&mut self) -> Result<List> {
        let mut members = Vec::new();
        while self.cursor.has_more() {
            members.push(self.parse_item_or_inner_list()?);
            if !self.next_member()? {
                break;
            }
        }
        Ok(List::new(members))
    }

    /// RFC 9651, 4.2.2. A repeated key overwrites the earlier value but keeps
    /// its position.
    pub(crate) fn parse_dictionary(&mut self) -> Result<Dictionary> {
        let mut dictionary = Dictionary::new();
        while self.cursor.has_more() {
            let key = self.parse_key()?;
            let member = if self.cursor.peek_equals(b"=") {
                self.cursor.discard(1)?;
                self.parse_item_or_inner_list()?
            } else {
                let parameters = self.parse_parameters()?;
                Parameterized::new(Member::Item(Item::Boolean(true)), parameters)
            };
            dictionary.insert(key, member);

            if !self.next_member()? {
                break;
            }
        }
        Ok(dictionary)
    }

    /// Consumes the separator after a List or Dictionary member. Returns
    /// `false` once the input is exhausted.
    fn next_member(&mut self) -> Result<bool> {
        self.cursor.discard_spaces();
        if !self.cursor.has_more() {
            return Ok(false);
        }
        self.cursor.expect(b",", ParseErrorKind::ExpectedComma)?;
        self.cursor.discard(1)?;
        self.cursor.discard_spaces();
        if !self.cursor.has_more() {
            return Err(self.cursor.error(ParseErrorKind::TrailingComma));
        }
        Ok(true)
    }

    /// RFC 9651, 4.2.1.1.
    fn parse_item_or_inner_list(&mut self) -> Result<Parameterized<Member>> {
        if self.cursor.peek_equals(b"(") {
            let (inner_list, parameters) = self.parse_inner_list()?;
            return Ok(Parameterized::new(Member::InnerList(inner_list), parameters));
        }
        let item = self.parse_item()?;
        let (value, parameters) = item.into_parts();
        Ok(Parameterized::new(Member::Item(value), parameters))
    }

    /// RFC 9651, 4.2.1.2.
    fn parse_inner_list(&mut self) -> Result<(InnerList, Parameters)> {
        self.cursor.expect(b"(", ParseErrorKind::InvalidInnerListStart)?;
        self.cursor.discard(1)?;

        let mut members = Vec::new();
        loop {
            self.cursor.discard_spaces();
            if !self.cursor.has_more() {
                break;
            }
            if self.cursor.peek_equals(b")") {
                self.cursor.discard(1)?;
                let parameters = self.parse_parameters()?;
                return Ok((InnerList::new(members), parameters));
            }

            members.push(self.parse_item()?);

            if !self.cursor.has_more() {
                break;
            }
            self.cursor.expect(b" )", ParseErrorKind::MissingInnerListSeparator)?;
        }

        Err(self.cursor.error(ParseErrorKind::UnterminatedInnerList))
    }

    /// RFC 9651, 4.2.3.
    pub(crate) fn parse_item(&mut self) -> Result<Parameterized<Item>> {
        let value = self.parse_bare_item()?;
        let parameters = self.parse_parameters()?;
        Ok(Parameterized::new(value, parameters))
    }

    /// RFC 9651, 4.2.3.2. Parameters without `=` are Boolean true.
    fn parse_parameters(&mut self) -> Result<Parameters> {
        let mut parameters = Parameters::new();
        while self.cursor.peek_equals(b";") {
            self.cursor.discard(1)?;
            self.cursor.discard_spaces();
            let key = self.parse_key()?;
            let value = if self.cursor.peek_equals(b"=") {
                self.cursor.discard(1)?;
                self.parse_bare_item()?
            } else {
                Item::Boolean(true)
            };
            parameters.insert(key, value);
        }
        Ok(parameters)
    }

    /// RFC 9651, 4.2.3.3.
    fn parse_key(&mut self) -> Result<String> {
        match self.cursor.peek_byte() {
            Some(b) if is_key_start(b) => {}
            _ => return Err(self.cursor.error(ParseErrorKind::InvalidKeyStart)),
        }

        let mut key = String::new();
        while let Some(b) = self.cursor.peek_byte() {
            if !is_key_char(b) {
                break;
            }
            self.cursor.discard(1)?;
            key.push(char::from(b));
        }
        Ok(key)
    }
}
