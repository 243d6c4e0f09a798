//! Parsing any Structured Field and dumping it as JSON.
//!
//! Run with: cargo run --example inspect -- <list|dictionary|item> <field-value>

use rfc9651::{parse_dictionary, parse_item, parse_list};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let (field_type, value) = match (args.next(), args.next()) {
        (Some(field_type), Some(value)) => (field_type, value),
        _ => (
            "dictionary".to_string(),
            r#"sig1=("@method" "@path");created=1618884473;keyid="test-key""#.to_string(),
        ),
    };

    let json = match field_type.as_str() {
        "list" => serde_json::to_string_pretty(&parse_list(&value)?)?,
        "dictionary" => serde_json::to_string_pretty(&parse_dictionary(&value)?)?,
        "item" => serde_json::to_string_pretty(&parse_item(&value)?)?,
        other => return Err(format!("unknown field type {other:?}").into()),
    };

    println!("{field_type}: {value}");
    println!("{json}");
    Ok(())
}
