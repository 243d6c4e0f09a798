//! Ordered, key-unique maps for Parameters and Dictionaries.
//!
//! This module provides [`OrderedMap`], a wrapper around [`IndexMap`] keyed by
//! the lowercase keys of the grammar. [`Parameters`] and [`Dictionary`] are
//! both instances of it.
//!
//! ## Why IndexMap?
//!
//! RFC 9651 requires both maps to be accessible by key and by insertion index.
//! `IndexMap` stores entries in one index-ordered vector with a hash table
//! pointing into it, so:
//!
//! - **Dual access**: [`OrderedMap::get`] and [`OrderedMap::value_at`] return
//!   references to the same stored value.
//! - **Overwrite in place**: inserting a key that already exists replaces its
//!   value but keeps the entry at its original index.
//! - **Iteration order**: entries are iterated in insertion order.
//!
//! Maps are only built by the parser. Callers receive them read-only.
//!
//! ## Examples
//!
//! ```rust
//! use rfc9651::parse_item;
//!
//! let item = parse_item("token;a=1;b=2;c").unwrap();
//! let params = item.parameters();
//!
//! assert_eq!(params.len(), 3);
//! assert!(std::ptr::eq(params.get("b").unwrap(), params.value_at(1).unwrap()));
//! assert_eq!(params.get("c").and_then(|v| v.as_bool()), Some(true));
//! ```

use crate::value::{Item, Member, Parameterized};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// An insertion-ordered map of unique lowercase keys to values.
///
/// # Examples
///
/// ```rust
/// use rfc9651::parse_dictionary;
///
/// let dict = parse_dictionary("b=1, a=2, b=3").unwrap();
///
/// // `b` keeps its first position but holds the last value
/// let keys: Vec<_> = dict.keys().collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(dict.get_item("b").and_then(|v| v.as_integer()), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(IndexMap<String, V>);

/// Parameters attached to an Item or Inner List.
pub type Parameters = OrderedMap<Item>;

/// A top-level Dictionary field value.
pub type Dictionary = OrderedMap<Parameterized<Member>>;

impl<V> OrderedMap<V> {
    pub(crate) fn new() -> Self {
        OrderedMap(IndexMap::new())
    }

    /// Inserts or overwrites in place. Returns the previous value, if any.
    pub(crate) fn insert(&mut self, key: String, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns the key and value at insertion index `index`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, &V)> {
        self.0.get_index(index).map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the value at insertion index `index`.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.0.get_index(index).map(|(_, v)| v)
    }

    /// Returns the insertion index of `key`.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.0.get_index_of(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, V> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.0.iter()
    }
}

impl Parameters {
    /// Returns the Boolean parameter under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc9651::parse_item;
    ///
    /// let item = parse_item("abc;a;b=?0;q=0.5").unwrap();
    /// assert_eq!(item.parameters().get_bool("a"), Some(true));
    /// assert_eq!(item.parameters().get_bool("b"), Some(false));
    /// assert_eq!(item.parameters().get_bool("q"), None);
    /// ```
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Item::as_bool)
    }

    #[must_use]
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Item::as_integer)
    }

    #[must_use]
    pub fn get_decimal(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Item::as_decimal)
    }

    /// Returns the String, Token or Display String parameter under `key`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Item::as_str)
    }
}

impl Dictionary {
    /// Returns the member under `key` if it is a bare Item.
    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<&Item> {
        self.get(key).and_then(|member| member.value().as_item())
    }

    /// Returns the member under `key` if it is an Inner List.
    #[must_use]
    pub fn get_inner_list(&self, key: &str) -> Option<&crate::InnerList> {
        self.get(key).and_then(|member| member.value().as_inner_list())
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Serialized as a sequence of `[key, value]` pairs so order survives formats
// whose maps are unordered.
impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (key, value) in self.iter() {
            seq.serialize_element(&(key, value))?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderedMap<Item> {
        let mut map = OrderedMap::new();
        map.insert("a".to_string(), Item::Integer(1));
        map.insert("b".to_string(), Item::Integer(2));
        map.insert("c".to_string(), Item::Boolean(true));
        map
    }

    #[test]
    fn test_key_and_index_views_share_entries() {
        let map = sample();
        for (index, key) in ["a", "b", "c"].into_iter().enumerate() {
            let by_key = map.get(key).unwrap();
            let by_index = map.value_at(index).unwrap();
            assert!(std::ptr::eq(by_key, by_index));
            assert_eq!(map.get_index(index).map(|(k, _)| k), Some(key));
            assert_eq!(map.index_of(key), Some(index));
        }
        assert_eq!(map.value_at(3), None);
        assert_eq!(map.get("d"), None);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = sample();
        let previous = map.insert("a".to_string(), Item::Integer(10));
        assert_eq!(previous, Some(Item::Integer(1)));
        assert_eq!(map.len(), 3);
        assert_eq!(map.index_of("a"), Some(0));
        assert_eq!(map.value_at(0), Some(&Item::Integer(10)));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_iteration_order() {
        let map = sample();
        let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        assert_eq!(
            pairs,
            vec![
                ("a", Item::Integer(1)),
                ("b", Item::Integer(2)),
                ("c", Item::Boolean(true)),
            ]
        );

        let owned: Vec<_> = map.into_iter().map(|(k, _)| k).collect();
        assert_eq!(owned, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_typed_parameter_getters() {
        let mut params = sample();
        params.insert("d".to_string(), Item::Decimal(0.5));
        params.insert("t".to_string(), Item::Token("gzip".to_string()));

        assert_eq!(params.get_integer("a"), Some(1));
        assert_eq!(params.get_bool("c"), Some(true));
        assert_eq!(params.get_decimal("d"), Some(0.5));
        assert_eq!(params.get_str("t"), Some("gzip"));
        assert_eq!(params.get_bool("a"), None);
        assert_eq!(params.get_integer("missing"), None);
    }

    #[test]
    fn test_empty() {
        let map: Parameters = OrderedMap::default();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(!map.contains_key("a"));
        assert_eq!(map.iter().count(), 0);
    }
}
