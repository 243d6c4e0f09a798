//! Reading the `Priority` header from RFC 9218 (Extensible Prioritization).
//!
//! Run with: cargo run --example priority -- "u=1, i"

use rfc9651::{parse_dictionary, Dictionary, Item};
use std::error::Error;

const DEFAULT_URGENCY: i64 = 3;

#[derive(Debug, PartialEq)]
struct Priority {
    urgency: i64,
    incremental: bool,
}

impl Priority {
    /// Unknown members and out-of-range or mistyped values fall back to the
    /// defaults (RFC 9218, section 4).
    fn from_dictionary(dict: &Dictionary) -> Self {
        let urgency = dict
            .get_item("u")
            .and_then(Item::as_integer)
            .filter(|u| (0..=7).contains(u))
            .unwrap_or(DEFAULT_URGENCY);
        let incremental = dict.get_item("i").and_then(Item::as_bool).unwrap_or(false);

        Priority {
            urgency,
            incremental,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let inputs: Vec<String> = match std::env::args().nth(1) {
        Some(arg) => vec![arg],
        None => ["u=1, i", "i", "u=9", "u=\"2\", foo=bar", ""]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    for input in &inputs {
        match parse_dictionary(input) {
            Ok(dict) => println!("{:<20} -> {:?}", input, Priority::from_dictionary(&dict)),
            // an unparseable field is ignored, so the defaults apply
            Err(e) => println!("{:<20} -> ignored ({})", input, e),
        }
    }

    Ok(())
}
