//! Property-based tests over generated field values.
//!
//! These complement the conformance tables by checking invariants that must
//! hold for every input: the parser never panics, valid members always parse
//! to the value they were built from, and non-ASCII input is always rejected.

use proptest::prelude::*;
use rfc9651::{parse_dictionary, parse_item, parse_list, Item};

fn token_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z*][A-Za-z0-9!#$%&'*+.^_`|~:/-]{0,12}"
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z*][a-z0-9_.*-]{0,8}"
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

proptest! {
    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = parse_list(&bytes);
        let _ = parse_dictionary(&bytes);
        let _ = parse_item(&bytes);
    }

    #[test]
    fn prop_grammar_bytes_never_panic(input in "[ -~]{0,48}") {
        let _ = parse_list(&input);
        let _ = parse_dictionary(&input);
        let _ = parse_item(&input);
    }

    #[test]
    fn prop_parsing_is_idempotent(input in "[a-z0-9 ,;=()?\"*.:-]{0,32}") {
        if let Ok(first) = parse_list(&input) {
            prop_assert_eq!(parse_list(&input).unwrap(), first);
        }
        if let Ok(first) = parse_dictionary(&input) {
            prop_assert_eq!(parse_dictionary(&input).unwrap(), first);
        }
    }

    #[test]
    fn prop_integers(n in -999_999_999_999_999i64..=999_999_999_999_999) {
        let item = parse_item(n.to_string()).unwrap();
        prop_assert_eq!(item.value(), &Item::Integer(n));
    }

    #[test]
    fn prop_decimals(int_part in 0i64..=999_999_999_999, frac in 0u32..1000, negative in any::<bool>()) {
        let text = format!("{}{}.{:03}", if negative { "-" } else { "" }, int_part, frac);
        let expected: f64 = text.parse().unwrap();
        let item = parse_item(&text).unwrap();
        prop_assert_eq!(item.value(), &Item::Decimal(expected));
    }

    #[test]
    fn prop_strings(s in "[ -~]{0,32}") {
        let item = parse_item(quote(&s)).unwrap();
        prop_assert_eq!(item.value(), &Item::String(s));
    }

    #[test]
    fn prop_tokens(t in token_strategy()) {
        let item = parse_item(&t).unwrap();
        prop_assert_eq!(item.value(), &Item::Token(t));
    }

    #[test]
    fn prop_display_strings(s in "\\PC{0,16}") {
        let mut encoded = String::from("%\"");
        for b in s.bytes() {
            if (0x20..0x7f).contains(&b) && b != b'%' && b != b'"' {
                encoded.push(char::from(b));
            } else {
                encoded.push_str(&format!("%{b:02x}"));
            }
        }
        encoded.push('"');
        let item = parse_item(&encoded).unwrap();
        prop_assert_eq!(item.value(), &Item::DisplayString(s));
    }

    #[test]
    fn prop_list_member_count(tokens in prop::collection::vec(token_strategy(), 1..10), sep in "(, ?| ,|,)") {
        let input = tokens.join(&sep);
        let list = parse_list(&input).unwrap();
        prop_assert_eq!(list.len(), tokens.len());
    }

    #[test]
    fn prop_dictionary_keeps_first_position_and_last_value(
        keys in prop::collection::vec(key_strategy(), 1..12)
    ) {
        let input = keys
            .iter()
            .enumerate()
            .map(|(i, k)| format!("{k}={i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let dict = parse_dictionary(&input).unwrap();

        let mut first_seen: Vec<&str> = Vec::new();
        for key in &keys {
            if !first_seen.contains(&key.as_str()) {
                first_seen.push(key);
            }
        }
        prop_assert_eq!(dict.keys().collect::<Vec<_>>(), first_seen);

        for key in &keys {
            let last = keys.iter().rposition(|k| k == key).unwrap() as i64;
            prop_assert_eq!(dict.get_item(key).and_then(Item::as_integer), Some(last));
        }
    }

    #[test]
    fn prop_non_ascii_always_rejected(prefix in "[ -~]{0,16}", c in "[^\\x00-\\x7f]", suffix in "[ -~]{0,16}") {
        let input = format!("{prefix}{c}{suffix}");
        let err = parse_list(&input).unwrap_err();
        prop_assert!(err.is_not_ascii());
        prop_assert_eq!(err.position(), Some(prefix.len()));
    }

    #[test]
    fn prop_surrounding_spaces_ignored(n in any::<i32>(), leading in 0usize..4, trailing in 0usize..4) {
        let input = format!("{}{}{}", " ".repeat(leading), n, " ".repeat(trailing));
        let item = parse_item(&input).unwrap();
        prop_assert_eq!(item.value(), &Item::Integer(i64::from(n)));
    }
}
