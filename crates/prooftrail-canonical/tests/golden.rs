//! Golden tests for the canonical encoding.

use prooftrail_canonical::{canonical_bytes, canonical_string, sha256_hex};
use serde_json::{json, Map, Value};

#[test]
fn scalar_forms_are_unambiguous() {
    assert_eq!(canonical_string(&json!(null)).unwrap(), "null");
    assert_eq!(canonical_string(&json!(true)).unwrap(), "true");
    assert_eq!(canonical_string(&json!(42)).unwrap(), "42");
    assert_eq!(canonical_string(&json!("a\"b")).unwrap(), r#""a\"b""#);
}

#[test]
fn no_whitespace_is_inserted() {
    let s = canonical_string(&json!({"a": [1, 2], "b": {"c": null}})).unwrap();
    assert!(!s.contains(' '));
    assert_eq!(s, r#"{"a":[1,2],"b":{"c":null}}"#);
}

#[test]
fn insertion_order_does_not_change_bytes() {
    let mut forward = Map::new();
    forward.insert("alpha".to_string(), json!({"x": 1, "y": 2}));
    forward.insert("beta".to_string(), json!([1, 2, 3]));
    forward.insert("gamma".to_string(), json!("g"));

    let mut reverse = Map::new();
    reverse.insert("gamma".to_string(), json!("g"));
    reverse.insert("beta".to_string(), json!([1, 2, 3]));
    let mut nested = Map::new();
    nested.insert("y".to_string(), json!(2));
    nested.insert("x".to_string(), json!(1));
    reverse.insert("alpha".to_string(), Value::Object(nested));

    let a = canonical_bytes(&Value::Object(forward)).unwrap();
    let b = canonical_bytes(&Value::Object(reverse)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn array_order_is_preserved() {
    let a = canonical_string(&json!([1, 2, 3])).unwrap();
    let b = canonical_string(&json!([3, 2, 1])).unwrap();
    assert_ne!(a, b);
}

#[test]
fn equal_values_hash_identically() {
    let one = json!({"b": {"d": 4, "c": 3}, "a": 1});
    let two = json!({"a": 1, "b": {"c": 3, "d": 4}});
    let h1 = sha256_hex(&canonical_bytes(&one).unwrap());
    let h2 = sha256_hex(&canonical_bytes(&two).unwrap());
    assert_eq!(h1, h2);
}
