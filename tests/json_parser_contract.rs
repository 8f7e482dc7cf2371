//! Purpose: Lock codec contract expectations with corpus + differential coverage.
//! Exports: Integration tests only (no runtime exports).
//! Role: Catch semantic drift between `JsonValue` decoding and the serde_json::Value baseline.
//! Invariants: parse(stringify(v)) == v for every finite value in the corpus.
//! Invariants: One parse/stringify pass normalizes; a second pass is the identity.

use typedjson::{JsonObject, JsonValue, is_array, is_object, parse, stringify};

fn assert_differential_parity(input: &str) {
    let ours = parse(input).map_err(|err| err.to_string());
    let baseline = serde_json::from_str::<serde_json::Value>(input).map_err(|err| err.to_string());
    match (ours, baseline) {
        (Ok(a), Ok(b)) => assert_eq!(a, JsonValue::from(b), "parser value mismatch"),
        (Err(_), Err(_)) => {}
        (left, right) => panic!("parser outcome mismatch: ours={left:?}, serde={right:?}"),
    }
}

fn object(entries: Vec<(&str, JsonValue)>) -> JsonValue {
    let mut map = JsonObject::new();
    for (key, value) in entries {
        map.insert(key.to_string(), value);
    }
    JsonValue::Object(map)
}

#[test]
fn corpus_valid_payloads_match_serde() {
    let corpus = [
        r#"{"a":1,"b":"ok"}"#,
        r#"[1,2,3,{"x":true}]"#,
        r#"{"nested":{"arr":[{"k":"v"}]}}"#,
        r#"{"unicode":"\u2603"}"#,
        r#"{"n":18446744073709551616}"#,
        r#"[-0,0.5,-1.25e-3,1E2]"#,
        "null",
        "\"\"",
    ];

    for case in corpus {
        assert_differential_parity(case);
    }
}

#[test]
fn parse_scenario_object_with_array() {
    let value = parse(r#"{"a":1,"b":[true,null,"x"]}"#).expect("parse");
    let expected = object(vec![
        ("a", JsonValue::from(1)),
        (
            "b",
            JsonValue::from(vec![
                JsonValue::Bool(true),
                JsonValue::Null,
                JsonValue::from("x"),
            ]),
        ),
    ]);
    assert_eq!(value, expected);
}

#[test]
fn stringify_scenario_is_compact() {
    let value = object(vec![
        ("a", JsonValue::from(1)),
        (
            "b",
            JsonValue::from(vec![
                JsonValue::Bool(true),
                JsonValue::Null,
                JsonValue::from("x"),
            ]),
        ),
    ]);
    assert_eq!(
        stringify(&value).expect("stringify"),
        r#"{"a":1,"b":[true,null,"x"]}"#
    );
}

#[test]
fn duplicate_keys_are_last_write_wins() {
    let value = parse(r#"{"a":1,"b":2,"a":3}"#).expect("parse");
    assert_eq!(value.get("a"), Some(&JsonValue::Number(3.0)));
    let keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(stringify(&value).expect("stringify"), r#"{"a":3,"b":2}"#);
}

#[test]
fn constructed_values_round_trip() {
    let values = [
        JsonValue::Null,
        JsonValue::from(true),
        JsonValue::from(0.1),
        JsonValue::from(-1e-7),
        JsonValue::from(123_456.789),
        JsonValue::from(f64::MAX),
        JsonValue::from(5e-324),
        JsonValue::from(9_007_199_254_740_993u64),
        JsonValue::from("tab\tquote\"snow☃"),
        JsonValue::from(Vec::<JsonValue>::new()),
        object(vec![]),
        object(vec![
            ("z", JsonValue::from(vec![1, 2, 3])),
            ("a", object(vec![("deep", JsonValue::from(vec![Some(1.5), None]))])),
        ]),
    ];

    for value in values {
        let text = stringify(&value).expect("stringify");
        assert_eq!(parse(&text).expect("reparse"), value, "text: {text}");
    }
}

#[test]
fn deeply_nested_values_round_trip() {
    for depth in [127usize, 128, 200] {
        let mut value = JsonValue::from(vec![1]);
        for level in 1..depth {
            value = if level % 2 == 0 {
                JsonValue::from(vec![value])
            } else {
                object(vec![("k", value)])
            };
        }
        let text = stringify(&value).expect("stringify");
        let back = parse(&text).unwrap_or_else(|err| panic!("depth {depth}: {err}"));
        assert_eq!(back, value, "depth {depth}");
    }
}

#[test]
fn one_round_trip_normalizes() {
    let inputs = [
        " { \"b\" : [ 1.0 , 2e0 ] , \"a\" : \"\\u0041\" } ",
        "[1e2, -0.0, 10.50]",
        r#"{"a":{"a":{"a":[]}}}"#,
    ];

    for input in inputs {
        let first = stringify(&parse(input).expect("parse")).expect("stringify");
        let reparsed = parse(&first).expect("reparse");
        assert_eq!(reparsed, parse(input).expect("parse"));
        assert_eq!(stringify(&reparsed).expect("stringify"), first);
    }
}

#[test]
fn predicates_on_decoded_values() {
    let array = parse("[1,2]").expect("parse");
    assert!(!is_object(&array));
    assert!(is_array(&array));

    let object = parse("{}").expect("parse");
    assert!(is_object(&object));
    assert!(!is_array(&object));

    for scalar in ["null", "true", "0", "\"s\""] {
        let value = parse(scalar).expect("parse");
        assert!(!is_object(&value), "scalar: {scalar}");
        assert!(!is_array(&value), "scalar: {scalar}");
    }
}
