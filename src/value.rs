//! The typed value tree produced by the parser.
//!
//! ## Core Types
//!
//! - [`Item`]: one typed scalar (Integer, Decimal, String, Token, Byte Sequence,
//!   Boolean, Date or Display String)
//! - [`InnerList`]: a parenthesized sequence of parameterized Items
//! - [`Member`]: either an Item or an Inner List, the member type of Lists and
//!   Dictionaries
//! - [`Parameterized`]: a value paired with its [`Parameters`]
//! - [`List`]: a top-level List field value
//!
//! Every value is built once by a successful parse and is read-only afterwards.
//!
//! ## Usage Patterns
//!
//! ### Type Checking
//!
//! ```rust
//! use rfc9651::parse_item;
//!
//! let item = parse_item("42").unwrap();
//! assert!(item.value().is_integer());
//! assert!(!item.value().is_decimal());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use rfc9651::parse_list;
//!
//! let list = parse_list("text/html;q=0.9, *").unwrap();
//! let first = list.get(0).unwrap();
//!
//! assert_eq!(first.value().as_item().and_then(|i| i.as_str()), Some("text/html"));
//! assert_eq!(first.parameters().get("q").and_then(|q| q.as_decimal()), Some(0.9));
//! ```
//!
//! ### Lenient Conversions
//!
//! ```rust
//! use rfc9651::parse_item;
//!
//! let item = parse_item("\"12\"").unwrap().into_value();
//! assert_eq!(item.as_integer(), None);
//! assert_eq!(item.to_i64(), Some(12));
//! ```

use crate::map::Parameters;
use crate::{Error, Result};
use base64::prelude::*;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::borrow::Cow;

/// A bare Item: one typed scalar without its Parameters.
///
/// # Examples
///
/// ```rust
/// use rfc9651::{parse_item, Item};
///
/// assert_eq!(parse_item("?1").unwrap().into_value(), Item::Boolean(true));
/// assert_eq!(parse_item("@0").unwrap().into_value(), Item::Date(0));
/// assert_eq!(parse_item("foo").unwrap().into_value(), Item::Token("foo".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// At most 15 digits, so always within `±999_999_999_999_999`.
    Integer(i64),
    /// At most 12 integer digits and 3 fractional digits.
    Decimal(f64),
    /// Printable ASCII (`0x20..=0x7E`) with escapes removed.
    String(String),
    Token(String),
    ByteSequence(Vec<u8>),
    Boolean(bool),
    /// Seconds since the Unix epoch.
    Date(i64),
    /// Unicode text decoded from percent-encoded UTF-8.
    DisplayString(String),
}

impl Item {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Item::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Item::Decimal(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Item::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, Item::Token(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_byte_sequence(&self) -> bool {
        matches!(self, Item::ByteSequence(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Item::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Item::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_display_string(&self) -> bool {
        matches!(self, Item::DisplayString(_))
    }

    /// Returns the RFC 9651 name of this Item's type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc9651::Item;
    ///
    /// assert_eq!(Item::ByteSequence(vec![]).type_name(), "byte sequence");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Item::Integer(_) => "integer",
            Item::Decimal(_) => "decimal",
            Item::String(_) => "string",
            Item::Token(_) => "token",
            Item::ByteSequence(_) => "byte sequence",
            Item::Boolean(_) => "boolean",
            Item::Date(_) => "date",
            Item::DisplayString(_) => "display string",
        }
    }

    /// If the Item is an Integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Item::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the Item is a Decimal, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Item::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the text of a String, Token or Display String.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc9651::Item;
    ///
    /// assert_eq!(Item::Token("gzip".to_string()).as_str(), Some("gzip"));
    /// assert_eq!(Item::Integer(1).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Item::String(s) | Item::Token(s) | Item::DisplayString(s) => Some(s),
            _ => None,
        }
    }

    /// If the Item is a Byte Sequence, returns its decoded bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Item::ByteSequence(b) => Some(b),
            _ => None,
        }
    }

    /// If the Item is a Boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Item::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the Item is a Date, returns its seconds since the epoch.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<i64> {
        match self {
            Item::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the Item as an integer, truncating Decimals and parsing
    /// numeric Strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc9651::Item;
    ///
    /// assert_eq!(Item::Decimal(2.75).to_i64(), Some(2));
    /// assert_eq!(Item::String("-3".to_string()).to_i64(), Some(-3));
    /// assert_eq!(Item::Token("3".to_string()).to_i64(), None);
    /// ```
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Item::Integer(i) => Some(*i),
            Item::Decimal(d) => Some(*d as i64),
            Item::String(s) => s
                .parse::<i64>()
                .ok()
                .or_else(|| numeric_str(s).map(|f| f as i64)),
            _ => None,
        }
    }

    /// Returns the Item as a float, widening Integers and parsing numeric
    /// Strings.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Item::Integer(i) => Some(*i as f64),
            Item::Decimal(d) => Some(*d),
            Item::String(s) => numeric_str(s),
            _ => None,
        }
    }

    /// Returns the Item as text: Strings, Tokens and Display Strings as-is,
    /// Integers and Decimals formatted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc9651::Item;
    ///
    /// assert_eq!(Item::Decimal(1.5).to_text().as_deref(), Some("1.5"));
    /// assert_eq!(Item::Boolean(true).to_text(), None);
    /// ```
    #[must_use]
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Item::String(s) | Item::Token(s) | Item::DisplayString(s) => Some(Cow::Borrowed(s)),
            Item::Integer(i) => Some(Cow::Owned(i.to_string())),
            Item::Decimal(d) => Some(Cow::Owned(d.to_string())),
            _ => None,
        }
    }

    /// Returns the Item as a boolean; non-zero numbers count as `true`.
    #[must_use]
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Item::Boolean(b) => Some(*b),
            Item::Integer(i) => Some(*i != 0),
            Item::Decimal(d) => Some(*d != 0.0),
            _ => None,
        }
    }

    /// Returns a Date as a UTC timestamp, or `None` if it is not a Date or is
    /// outside the range `chrono` can represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc9651::Item;
    ///
    /// let date = Item::Date(1_659_578_233).to_datetime().unwrap();
    /// assert_eq!(date.to_rfc3339(), "2022-08-04T01:57:13+00:00");
    /// ```
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Item::Date(seconds) => DateTime::<Utc>::from_timestamp(*seconds, 0),
            _ => None,
        }
    }
}

fn numeric_str(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let looks_numeric = !bytes.is_empty()
        && bytes
            .iter()
            .all(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E'));
    if !looks_numeric {
        return None;
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

impl TryFrom<Item> for i64 {
    type Error = Error;

    fn try_from(item: Item) -> Result<Self> {
        match item {
            Item::Integer(i) => Ok(i),
            other => Err(Error::type_mismatch("integer", other.type_name())),
        }
    }
}

impl TryFrom<Item> for f64 {
    type Error = Error;

    fn try_from(item: Item) -> Result<Self> {
        match item {
            Item::Decimal(d) => Ok(d),
            Item::Integer(i) => Ok(i as f64),
            other => Err(Error::type_mismatch("decimal", other.type_name())),
        }
    }
}

impl TryFrom<Item> for bool {
    type Error = Error;

    fn try_from(item: Item) -> Result<Self> {
        match item {
            Item::Boolean(b) => Ok(b),
            other => Err(Error::type_mismatch("boolean", other.type_name())),
        }
    }
}

impl TryFrom<Item> for String {
    type Error = Error;

    fn try_from(item: Item) -> Result<Self> {
        match item {
            Item::String(s) | Item::Token(s) | Item::DisplayString(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl TryFrom<Item> for Vec<u8> {
    type Error = Error;

    fn try_from(item: Item) -> Result<Self> {
        match item {
            Item::ByteSequence(b) => Ok(b),
            other => Err(Error::type_mismatch("byte sequence", other.type_name())),
        }
    }
}

/// A value paired with the Parameters that followed it.
///
/// `T` is [`Item`] for top-level Items and Inner List members, and
/// [`Member`] for List and Dictionary members.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameterized<T> {
    value: T,
    parameters: Parameters,
}

impl<T> Parameterized<T> {
    pub(crate) fn new(value: T, parameters: Parameters) -> Self {
        Parameterized { value, parameters }
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    #[must_use]
    pub fn into_parts(self) -> (T, Parameters) {
        (self.value, self.parameters)
    }
}

/// A List or Dictionary member: an Item or an Inner List.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    Item(Item),
    InnerList(InnerList),
}

impl Member {
    #[inline]
    #[must_use]
    pub const fn is_item(&self) -> bool {
        matches!(self, Member::Item(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_inner_list(&self) -> bool {
        matches!(self, Member::InnerList(_))
    }

    #[inline]
    #[must_use]
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Member::Item(item) => Some(item),
            Member::InnerList(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_inner_list(&self) -> Option<&InnerList> {
        match self {
            Member::InnerList(list) => Some(list),
            Member::Item(_) => None,
        }
    }
}

macro_rules! sequence_type {
    ($(#[$meta:meta])* $name:ident, $member:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Default)]
        pub struct $name(Vec<$member>);

        impl $name {
            pub(crate) fn new(members: Vec<$member>) -> Self {
                $name(members)
            }

            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            #[must_use]
            pub fn get(&self, index: usize) -> Option<&$member> {
                self.0.get(index)
            }

            #[must_use]
            pub fn as_slice(&self) -> &[$member] {
                &self.0
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $member> {
                self.0.iter()
            }
        }

        impl IntoIterator for $name {
            type Item = $member;
            type IntoIter = std::vec::IntoIter<$member>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $member;
            type IntoIter = std::slice::Iter<'a, $member>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut seq = serializer.serialize_seq(Some(self.len()))?;
                for member in self.iter() {
                    seq.serialize_element(member)?;
                }
                seq.end()
            }
        }
    };
}

sequence_type!(
    /// An Inner List: a fixed, ordered sequence of parameterized Items.
    InnerList,
    Parameterized<Item>
);

sequence_type!(
    /// A top-level List field value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc9651::parse_list;
    ///
    /// let list = parse_list("1, 2, (1 2)").unwrap();
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.get(2).and_then(|m| m.value().as_inner_list()).map(|l| l.len()), Some(2));
    /// ```
    List,
    Parameterized<Member>
);

// Non-JSON Item types are wrapped as `{"__type": ..., "value": ...}`.
fn serialize_typed<S, V>(
    serializer: S,
    type_name: &str,
    value: &V,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize + ?Sized,
{
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("__type", type_name)?;
    map.serialize_entry("value", value)?;
    map.end()
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Item::Integer(i) => serializer.serialize_i64(*i),
            Item::Decimal(d) => serializer.serialize_f64(*d),
            Item::String(s) => serializer.serialize_str(s),
            Item::Boolean(b) => serializer.serialize_bool(*b),
            Item::Token(t) => serialize_typed(serializer, "token", t.as_str()),
            Item::ByteSequence(b) => {
                serialize_typed(serializer, "binary", &BASE64_STANDARD.encode(b))
            }
            Item::Date(d) => serialize_typed(serializer, "date", d),
            Item::DisplayString(s) => serialize_typed(serializer, "displaystring", s.as_str()),
        }
    }
}

impl Serialize for Member {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Member::Item(item) => item.serialize(serializer),
            Member::InnerList(list) => list.serialize(serializer),
        }
    }
}

impl<T: Serialize> Serialize for Parameterized<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.value, &self.parameters).serialize(serializer)
    }
}
