//! Classifier contract tests: the key-shape rules that drive every
//! normalization decision.

use serde_json::json;
use strukt_core::{is_associative, is_sequential, is_walkable, Key, Record, Value};

fn v(json: serde_json::Value) -> Value {
    Value::from_json(&json)
}

/// Record exposing one of its two fields.
struct Credentials {
    user: String,
    #[allow(dead_code)]
    password: String,
}

impl Record for Credentials {
    fn fields(&self) -> Vec<(String, Value)> {
        vec![("user".to_string(), Value::Str(self.user.clone()))]
    }
}

fn sample_record() -> Value {
    Value::record(&Credentials {
        user: "alice".to_string(),
        password: "s3cret".to_string(),
    })
}

// ============================================================================
// is_associative
// ============================================================================

#[test]
fn scalars_are_not_associative() {
    assert!(!is_associative(&Value::Int(23)));
    assert!(!is_associative(&Value::Str("Hello string".to_string())));
    assert!(!is_associative(&Value::Null));
    assert!(!is_associative(&Value::Opaque("handle")));
}

#[test]
fn canonical_maps_are_not_associative() {
    // Maps are the object side of the duality; the key-shape rule only
    // applies to raw tables.
    assert!(!is_associative(&v(json!({"a": 1, "b": 2}))));
    assert!(!is_associative(&sample_record()));
}

#[test]
fn index_only_tables_are_not_associative() {
    assert!(!is_associative(&Value::Table(vec![])));
    assert!(!is_associative(&Value::Table(vec![
        (Key::Idx(0), Value::Int(1)),
        (Key::Idx(1), Value::Int(2)),
        (Key::Idx(2), Value::Int(3)),
    ])));
    // Sparse and out-of-order indices are still not associative.
    assert!(!is_associative(&Value::Table(vec![
        (Key::Idx(1), "A".into()),
        (Key::Idx(5), "B".into()),
        (Key::Idx(2), "C".into()),
    ])));
}

#[test]
fn any_named_key_makes_a_table_associative() {
    assert!(is_associative(&Value::Table(vec![
        (Key::Name("a".to_string()), Value::Int(1)),
        (Key::Name("b".to_string()), Value::Int(2)),
    ])));
    assert!(is_associative(&Value::Table(vec![
        (Key::Idx(0), Value::Int(1)),
        (Key::Idx(1), Value::Int(2)),
        (Key::Name("a".to_string()), Value::Int(3)),
    ])));
}

// ============================================================================
// is_sequential
// ============================================================================

#[test]
fn scalars_and_maps_are_not_sequential() {
    assert!(!is_sequential(&Value::Int(23)));
    assert!(!is_sequential(&Value::Str("Hello string".to_string())));
    assert!(!is_sequential(&Value::Null));
    assert!(!is_sequential(&v(json!({"a": 1, "b": 2}))));
    assert!(!is_sequential(&sample_record()));
}

#[test]
fn dense_zero_based_tables_are_sequential() {
    assert!(is_sequential(&Value::Table(vec![])));
    assert!(is_sequential(&Value::Table(vec![
        (Key::Idx(0), "A".into()),
        (Key::Idx(1), "B".into()),
        (Key::Idx(2), "C".into()),
    ])));
}

#[test]
fn canonical_sequences_are_sequential_by_construction() {
    assert!(is_sequential(&v(json!([]))));
    assert!(is_sequential(&v(json!([1, 2, 3]))));
}

#[test]
fn gapped_or_named_tables_are_not_sequential() {
    assert!(!is_sequential(&Value::Table(vec![
        (Key::Idx(1), "A".into()),
        (Key::Idx(2), "B".into()),
        (Key::Idx(3), "C".into()),
    ])));
    assert!(!is_sequential(&Value::Table(vec![
        (Key::Name("a".to_string()), Value::Int(1)),
        (Key::Name("b".to_string()), Value::Int(2)),
    ])));
    assert!(!is_sequential(&Value::Table(vec![
        (Key::Idx(0), Value::Int(1)),
        (Key::Idx(1), Value::Int(2)),
        (Key::Name("a".to_string()), Value::Int(3)),
    ])));
    // Dense but out of order.
    assert!(!is_sequential(&Value::Table(vec![
        (Key::Idx(1), "B".into()),
        (Key::Idx(0), "A".into()),
    ])));
}

// ============================================================================
// Complement property
// ============================================================================

#[test]
fn named_key_tables_are_associative_iff_not_sequential() {
    let mixed = Value::Table(vec![
        (Key::Idx(0), Value::Int(1)),
        (Key::Name("a".to_string()), Value::Int(3)),
    ]);
    assert!(is_associative(&mixed));
    assert!(!is_sequential(&mixed));
}

// ============================================================================
// is_walkable
// ============================================================================

#[test]
fn scalars_are_not_walkable() {
    assert!(!is_walkable(&Value::Int(23)));
    assert!(!is_walkable(&Value::Str("Hello string".to_string())));
    assert!(!is_walkable(&Value::Null));
    assert!(!is_walkable(&Value::Opaque("closure")));
}

#[test]
fn containers_are_walkable() {
    assert!(is_walkable(&v(json!([1, 2, 3]))));
    assert!(is_walkable(&v(json!({"a": 1, "b": 2}))));
    assert!(is_walkable(&v(json!({}))));
    assert!(is_walkable(&Value::Table(vec![(Key::Idx(1), "A".into())])));
    assert!(is_walkable(&sample_record()));
}
