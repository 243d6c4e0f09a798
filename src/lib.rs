//! # rfc9651
//!
//! A strict parser for RFC 9651 Structured Field Values for HTTP.
//!
//! ## What are Structured Fields?
//!
//! Structured Fields give HTTP field values a common, typed grammar. A field
//! is defined as a List, a Dictionary or an Item, and its members are
//! Integers, Decimals, Strings, Tokens, Byte Sequences, Booleans, Dates and
//! Display Strings, each optionally carrying Parameters.
//!
//! ## Key Features
//!
//! - **Strict**: the first deviation from the grammar fails the whole field,
//!   and the error names the failed production with its RFC section
//! - **Owned Value Tree**: results hold no borrows into the input and cannot be
//!   mutated after parsing
//! - **Dual Access**: Parameters and Dictionaries are addressable by key and by
//!   insertion index, both views sharing one entry
//! - **Serde Output**: every value serializes to the JSON shape used by the
//!   httpwg structured-field test suite
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rfc9651 = "0.1"
//! ```
//!
//! ### Parsing a List
//!
//! ```rust
//! use rfc9651::parse_list;
//!
//! let list = parse_list("text/html;q=1.0, application/json;q=0.5").unwrap();
//!
//! let first = list.get(0).unwrap();
//! assert_eq!(first.value().as_item().and_then(|i| i.as_str()), Some("text/html"));
//! assert_eq!(first.parameters().get("q").and_then(|v| v.as_decimal()), Some(1.0));
//! ```
//!
//! ### Parsing a Dictionary
//!
//! ```rust
//! use rfc9651::parse_dictionary;
//!
//! let priority = parse_dictionary("u=1, i").unwrap();
//!
//! assert_eq!(priority.get_item("u").and_then(|v| v.as_integer()), Some(1));
//! assert_eq!(priority.get_item("i").and_then(|v| v.as_bool()), Some(true));
//! assert_eq!(priority.value_at(0), priority.get("u"));
//! ```
//!
//! ### Parsing an Item
//!
//! ```rust
//! use rfc9651::{parse_item, Item};
//!
//! let item = parse_item(":cHJldGVuZCB0aGlzIGlzIGJpbmFyeQ==:;v=?1").unwrap();
//!
//! assert_eq!(item.value(), &Item::ByteSequence(b"pretend this is binary".to_vec()));
//! assert_eq!(item.parameters().get("v"), Some(&Item::Boolean(true)));
//! ```
//!
//! ### Handling Errors
//!
//! ```rust
//! use rfc9651::{parse_item, ParseErrorKind};
//!
//! let err = parse_item("1.").unwrap_err();
//! assert_eq!(err.kind(), Some(ParseErrorKind::TrailingDecimalPoint));
//! assert_eq!(err.position(), Some(2));
//! ```
//!
//! ## Logging
//!
//! Entry points emit `tracing` events: a `TRACE` event when parsing starts and
//! a `DEBUG` event when a field is rejected. Install any `tracing` subscriber
//! to see them. Nothing is logged inside the grammar productions.
//!
//! ## Grammar
//!
//! See the [`grammar`] module for the accepted syntax.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`priority.rs`** - Reading the `Priority` header (RFC 9218)
//! - **`inspect.rs`** - Dumping any field as JSON
//!
//! Run any example with: `cargo run --example <name> -- <field-value>`

mod bare_item;
mod chars;
mod cursor;
pub mod error;
pub mod grammar;
pub mod map;
pub mod options;
pub mod parser;
pub mod value;

pub use error::{Error, ParseErrorKind, Result};
pub use map::{Dictionary, OrderedMap, Parameters};
pub use options::{ParserOptions, DEFAULT_MAX_INPUT_LEN};
pub use parser::{Rfc9651Parser, StructuredValueParser};
pub use value::{InnerList, Item, List, Member, Parameterized};

/// Parses a List field value with default options.
///
/// # Examples
///
/// ```rust
/// use rfc9651::parse_list;
///
/// let list = parse_list("1, (2 3);a, ?0").unwrap();
/// assert_eq!(list.len(), 3);
/// assert!(list.get(1).unwrap().value().is_inner_list());
///
/// assert!(parse_list("").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Returns an error if the input is longer than [`DEFAULT_MAX_INPUT_LEN`],
/// contains non-ASCII bytes, or does not match the List grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_list(input: impl AsRef<[u8]>) -> Result<List> {
    parse_list_with_options(input, ParserOptions::default())
}

/// Parses a List field value with custom options.
///
/// # Errors
///
/// See [`parse_list`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_list_with_options(input: impl AsRef<[u8]>, options: ParserOptions) -> Result<List> {
    Rfc9651Parser::new(options).parse_list(input.as_ref())
}

/// Parses a Dictionary field value with default options.
///
/// # Examples
///
/// ```rust
/// use rfc9651::parse_dictionary;
///
/// let dict = parse_dictionary("a=?0, b, c;foo=bar").unwrap();
/// assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// assert_eq!(dict.get_item("b").and_then(|v| v.as_bool()), Some(true));
/// ```
///
/// # Errors
///
/// Returns an error if the input is longer than [`DEFAULT_MAX_INPUT_LEN`],
/// contains non-ASCII bytes, or does not match the Dictionary grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_dictionary(input: impl AsRef<[u8]>) -> Result<Dictionary> {
    parse_dictionary_with_options(input, ParserOptions::default())
}

/// Parses a Dictionary field value with custom options.
///
/// # Errors
///
/// See [`parse_dictionary`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_dictionary_with_options(
    input: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<Dictionary> {
    Rfc9651Parser::new(options).parse_dictionary(input.as_ref())
}

/// Parses an Item field value with default options.
///
/// # Examples
///
/// ```rust
/// use rfc9651::{parse_item, Item};
///
/// let item = parse_item("@1659578233").unwrap();
/// assert_eq!(item.value(), &Item::Date(1_659_578_233));
///
/// assert!(parse_item("").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the input is longer than [`DEFAULT_MAX_INPUT_LEN`],
/// contains non-ASCII bytes, or does not match the Item grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_item(input: impl AsRef<[u8]>) -> Result<Parameterized<Item>> {
    parse_item_with_options(input, ParserOptions::default())
}

/// Parses an Item field value with custom options.
///
/// # Errors
///
/// See [`parse_item`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_item_with_options(
    input: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<Parameterized<Item>> {
    Rfc9651Parser::new(options).parse_item(input.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_str_and_bytes() {
        assert_eq!(parse_list("a, b").unwrap().len(), 2);
        assert_eq!(parse_list(b"a, b").unwrap().len(), 2);
        assert_eq!(parse_list(String::from("a, b")).unwrap().len(), 2);
        assert_eq!(parse_list(vec![b'a']).unwrap().len(), 1);
    }

    #[test]
    fn test_free_functions_match_parser() {
        let parser = Rfc9651Parser::default();
        let input = "a=1, b=(x y);z, c";
        assert_eq!(
            parse_dictionary(input).unwrap(),
            parser.parse_dictionary(input.as_bytes()).unwrap()
        );
        assert_eq!(
            parse_item("?1;a").unwrap(),
            parser.parse_item(b"?1;a").unwrap()
        );
    }

    #[test]
    fn test_options_are_applied() {
        let options = ParserOptions::new().with_max_input_len(2);
        assert!(parse_list_with_options("1", options.clone()).is_ok());
        assert!(parse_list_with_options("1, 2", options.clone()).is_err());
        assert!(parse_dictionary_with_options("a, b", options.clone()).is_err());
        assert!(parse_item_with_options("123", options).is_err());
    }

    #[test]
    fn test_same_input_different_shapes() {
        let input = "a, b";
        assert_eq!(parse_list(input).unwrap().len(), 2);
        assert_eq!(parse_dictionary(input).unwrap().len(), 2);
        assert_eq!(
            parse_item(input).unwrap_err().kind(),
            Some(ParseErrorKind::TrailingGarbage)
        );
    }

    #[test]
    fn test_error_type_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Error>();
        assert_send_sync::<List>();
        assert_send_sync::<Dictionary>();
    }
}
