//! JSON output in the shape of the httpwg structured-field-tests suite.

use rfc9651::{parse_dictionary, parse_item, parse_list};
use serde_json::{json, to_value};

#[test]
fn test_plain_json_items() {
    assert_eq!(to_value(parse_item("42").unwrap()).unwrap(), json!([42, []]));
    assert_eq!(to_value(parse_item("-1.5").unwrap()).unwrap(), json!([-1.5, []]));
    assert_eq!(
        to_value(parse_item("\"hi there\"").unwrap()).unwrap(),
        json!(["hi there", []])
    );
    assert_eq!(to_value(parse_item("?0").unwrap()).unwrap(), json!([false, []]));
}

#[test]
fn test_typed_items() {
    assert_eq!(
        to_value(parse_item("text/html").unwrap()).unwrap(),
        json!([{"__type": "token", "value": "text/html"}, []])
    );
    assert_eq!(
        to_value(parse_item(":aGVsbG8:").unwrap()).unwrap(),
        json!([{"__type": "binary", "value": "aGVsbG8="}, []])
    );
    assert_eq!(
        to_value(parse_item("@1659578233").unwrap()).unwrap(),
        json!([{"__type": "date", "value": 1_659_578_233i64}, []])
    );
    assert_eq!(
        to_value(parse_item("%\"f%c3%bc\"").unwrap()).unwrap(),
        json!([{"__type": "displaystring", "value": "fü"}, []])
    );
}

#[test]
fn test_parameters_keep_order() {
    let item = parse_item("1;b=2;a;c=x").unwrap();
    assert_eq!(
        to_value(&item).unwrap(),
        json!([1, [["b", 2], ["a", true], ["c", {"__type": "token", "value": "x"}]]])
    );
}

#[test]
fn test_list_shape() {
    let list = parse_list("1;a, (2 3);b=?0, ()").unwrap();
    assert_eq!(
        to_value(&list).unwrap(),
        json!([
            [1, [["a", true]]],
            [[[2, []], [3, []]], [["b", false]]],
            [[], []]
        ])
    );
    assert_eq!(to_value(parse_list("").unwrap()).unwrap(), json!([]));
}

#[test]
fn test_dictionary_shape() {
    let dict = parse_dictionary("z=1, a=(x);p, b").unwrap();
    assert_eq!(
        to_value(&dict).unwrap(),
        json!([
            ["z", [1, []]],
            ["a", [[[{"__type": "token", "value": "x"}, []]], [["p", true]]]],
            ["b", [true, []]]
        ])
    );
}

#[test]
fn test_to_string_is_stable() {
    let dict = parse_dictionary("u=3, i").unwrap();
    let text = serde_json::to_string(&dict).unwrap();
    assert_eq!(text, r#"[["u",[3,[]]],["i",[true,[]]]]"#);
}
