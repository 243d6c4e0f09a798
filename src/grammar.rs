//! Structured Field Values Grammar
//!
//! This module documents the RFC 9651 grammar as accepted by this library. It
//! contains no code.
//!
//! # Overview
//!
//! A Structured Field is an HTTP field value with one of three top-level
//! shapes, chosen by the field's definition rather than by the input:
//!
//! - **List**: a comma-separated sequence of Items and Inner Lists
//! - **Dictionary**: a comma-separated sequence of `key=value` members
//! - **Item**: a single Bare Item with Parameters
//!
//! Parsing is strict: any deviation fails the whole field. There is no
//! recovery and no partial result.
//!
//! # Top-Level Rules
//!
//! ```text
//! sf-list       = list-member *( OWS "," OWS list-member )
//! list-member   = sf-item / inner-list
//! inner-list    = "(" *SP [ sf-item *( 1*SP sf-item ) *SP ] ")" parameters
//! sf-dictionary = dict-member *( OWS "," OWS dict-member )
//! dict-member   = member-key ( parameters / ( "=" member-value ))
//! member-value  = sf-item / inner-list
//! sf-item       = bare-item parameters
//! parameters    = *( ";" *SP parameter )
//! parameter     = param-key [ "=" param-value ]
//! key           = ( lcalpha / "*" ) *( lcalpha / DIGIT / "_" / "-" / "." / "*" )
//! ```
//!
//! **Rules**:
//! - Surrounding SP bytes are discarded before and after the top-level value.
//!   Anything else left over fails with
//!   [`TrailingGarbage`](crate::ParseErrorKind::TrailingGarbage).
//! - `OWS` is accepted as SP only. A horizontal tab is not whitespace here.
//! - An empty input is an empty List or an empty Dictionary, but never an Item.
//! - A trailing comma fails the parse.
//! - A Dictionary member or Parameter without `=` is Boolean `true`.
//! - A repeated key replaces the earlier value in place. The entry keeps the
//!   position of its first occurrence.
//! - Inner Lists do not nest.
//!
//! # Bare Items
//!
//! The first byte selects the type:
//!
//! | First byte | Type | Example | Rust value |
//! |------------|------|---------|------------|
//! | `-`, `0`-`9` | Integer or Decimal | `42`, `-1.5` | `Item::Integer(i64)`, `Item::Decimal(f64)` |
//! | `"` | String | `"hello"` | `Item::String(String)` |
//! | `A`-`Z`, `a`-`z`, `*` | Token | `text/html` | `Item::Token(String)` |
//! | `:` | Byte Sequence | `:aGk=:` | `Item::ByteSequence(Vec<u8>)` |
//! | `?` | Boolean | `?1` | `Item::Boolean(bool)` |
//! | `@` | Date | `@1659578233` | `Item::Date(i64)` |
//! | `%` | Display String | `%"f%c3%bc"` | `Item::DisplayString(String)` |
//!
//! Any other first byte fails with
//! [`UnrecognizedItemType`](crate::ParseErrorKind::UnrecognizedItemType).
//!
//! ## Numbers
//!
//! - An Integer has at most 15 digits, so every value fits in an `i64`.
//! - A Decimal has at most 12 digits before the point and 1 to 3 after it,
//!   16 characters in total.
//! - The sign is applied after parsing the magnitude, so `-0.0` is a negative
//!   zero.
//! - Leading zeros are allowed: `007` is `7`.
//!
//! ## Strings
//!
//! Printable ASCII (`%x20-7E`) only. The escapes are `\"` and `\\`; any other
//! byte after a backslash fails.
//!
//! ## Tokens
//!
//! A letter or `*`, then any run of `tchar`, `:` or `/`. `tchar` includes
//! digits and `!#$%&'*+-.^_`|~`.
//!
//! ## Byte Sequences
//!
//! Standard base64 between colons. Padding may be omitted, but padding that
//! is present must be complete. Non-zero trailing bits are tolerated.
//!
//! ## Dates
//!
//! `@` followed by an Integer counting seconds since the Unix epoch. A Decimal
//! fails. The value is kept as-is, and
//! [`Item::to_datetime`](crate::Item::to_datetime) converts it when it is in
//! the range `chrono` can represent.
//!
//! ## Display Strings
//!
//! `%"` followed by printable ASCII and `%xx` escapes, closed by `"`. The hex
//! digits must be lowercase. The decoded bytes are validated as UTF-8 once, at
//! the closing quote.
//!
//! # Input Checks
//!
//! Before any grammar rule runs, the input is checked for:
//!
//! 1. Length, against [`ParserOptions::max_input_len`](crate::ParserOptions::max_input_len)
//! 2. Non-ASCII bytes (any byte above `0x7F`)
//!
//! Both checks scan the raw input, so they fire even when an earlier byte would
//! already fail the grammar.
//!
//! # References
//!
//! - RFC 9651, Structured Field Values for HTTP: <https://www.rfc-editor.org/rfc/rfc9651>
//! - RFC 9110, section 5.6.2 (`tchar`): <https://www.rfc-editor.org/rfc/rfc9110#section-5.6.2>
//! - RFC 4648, section 4 (base64): <https://www.rfc-editor.org/rfc/rfc4648#section-4>
