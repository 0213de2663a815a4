//! Property-based laws for the four operations.
//!
//! Uses `proptest` to generate random values — canonical and raw — and
//! verify the algebraic laws hand-written tests can only spot-check:
//! idempotent canonicalization, merge identity and append arithmetic,
//! intersection key subsets, and filter idempotence.
//!
//! Floats are excluded from the generators: IEEE NaN breaks reflexivity
//! of equality, which every law here relies on.

use proptest::prelude::*;
use strukt_core::{
    convert_deep, filter, filter_with, intersect, intersect_deep, merge, Key, Predicate, Value,
};

// ============================================================================
// Strategies
// ============================================================================

/// Scalar values (no floats; see module docs).
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000i64..1_000).prop_map(Value::Int),
        "[a-z]{0,8}".prop_map(Value::Str),
    ]
}

/// Map key names: short, lowercase, non-empty.
fn arb_name() -> impl Strategy<Value = String> {
    "[a-d][a-z0-9]{0,3}".prop_filter("key must not be empty", |s| !s.is_empty())
}

/// Push entries while keeping keys unique (first occurrence wins).
fn dedupe_entries(pairs: Vec<(String, Value)>) -> Vec<(String, Value)> {
    let mut entries: Vec<(String, Value)> = Vec::new();
    for (key, value) in pairs {
        if !entries.iter().any(|(existing, _)| *existing == key) {
            entries.push((key, value));
        }
    }
    entries
}

/// Canonical values with bounded nesting.
fn arb_canonical(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_scalar().boxed()
    } else {
        prop_oneof![
            4 => arb_scalar(),
            2 => prop::collection::vec(arb_canonical(depth - 1), 0..4).prop_map(Value::Seq),
            2 => prop::collection::vec((arb_name(), arb_canonical(depth - 1)), 0..4)
                .prop_map(|pairs| Value::Map(dedupe_entries(pairs))),
        ]
        .boxed()
    }
}

/// Canonical maps (for key-set laws).
fn arb_map(depth: u32) -> impl Strategy<Value = Value> {
    prop::collection::vec((arb_name(), arb_canonical(depth)), 0..5)
        .prop_map(|pairs| Value::Map(dedupe_entries(pairs)))
}

/// Raw values: canonical content plus tables and opaque leaves.
fn arb_raw(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        prop_oneof![
            5 => arb_scalar(),
            1 => Just(Value::Opaque("handle")),
        ]
        .boxed()
    } else {
        let key = prop_oneof![
            (0usize..6).prop_map(Key::Idx),
            arb_name().prop_map(Key::Name),
        ];
        prop_oneof![
            3 => arb_scalar(),
            1 => Just(Value::Opaque("handle")),
            2 => prop::collection::vec(arb_raw(depth - 1), 0..4).prop_map(Value::Seq),
            2 => prop::collection::vec((arb_name(), arb_raw(depth - 1)), 0..4)
                .prop_map(|pairs| Value::Map(dedupe_entries(pairs))),
            2 => prop::collection::vec((key, arb_raw(depth - 1)), 0..4).prop_map(|pairs| {
                let mut entries: Vec<(Key, Value)> = Vec::new();
                for (key, value) in pairs {
                    if !entries.iter().any(|(existing, _)| *existing == key) {
                        entries.push((key, value));
                    }
                }
                Value::Table(entries)
            }),
        ]
        .boxed()
    }
}

/// Top-level map key names, as a set.
fn key_names(value: &Value) -> Vec<String> {
    match value {
        Value::Map(entries) => entries.iter().map(|(key, _)| key.clone()).collect(),
        _ => Vec::new(),
    }
}

// ============================================================================
// Laws
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Canonicalization is idempotent: a second pass changes nothing.
    #[test]
    fn convert_deep_is_idempotent(value in arb_raw(3)) {
        let once = convert_deep(&value).unwrap();
        let twice = convert_deep(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Canonical values are fixpoints of canonicalization.
    #[test]
    fn canonical_values_are_fixpoints(value in arb_canonical(3)) {
        prop_assert_eq!(convert_deep(&value).unwrap(), value);
    }

    /// Merging a single value is identity up to canonicalization.
    #[test]
    fn merge_identity(value in arb_raw(3)) {
        prop_assert_eq!(
            merge([value.clone()]).unwrap(),
            convert_deep(&value).unwrap()
        );
    }

    /// Merging never modifies its inputs.
    #[test]
    fn merge_preserves_inputs(a in arb_canonical(3), b in arb_canonical(3)) {
        let a_snapshot = a.clone();
        let b_snapshot = b.clone();
        let _ = merge([a.clone(), b.clone()]).unwrap();
        prop_assert_eq!(a, a_snapshot);
        prop_assert_eq!(b, b_snapshot);
    }

    /// Sequence merge is concatenation: lengths add up, left comes first.
    #[test]
    fn merge_appends_sequences(
        a in prop::collection::vec(arb_scalar(), 0..6),
        b in prop::collection::vec(arb_scalar(), 0..6),
    ) {
        let merged = merge([Value::Seq(a.clone()), Value::Seq(b.clone())]).unwrap();
        let mut expected = a;
        expected.extend(b);
        prop_assert_eq!(merged, Value::Seq(expected));
    }

    /// Map merge covers the union of both key sets.
    #[test]
    fn merge_covers_both_key_sets(a in arb_map(2), b in arb_map(2)) {
        let merged = merge([a.clone(), b.clone()]).unwrap();
        let merged_keys = key_names(&merged);
        for key in key_names(&a).iter().chain(key_names(&b).iter()) {
            prop_assert!(merged_keys.contains(key), "missing key {key}");
        }
        prop_assert_eq!(
            merged_keys.len(),
            {
                let mut union = key_names(&a);
                for key in key_names(&b) {
                    if !union.contains(&key) {
                        union.push(key);
                    }
                }
                union.len()
            }
        );
    }

    /// Intersecting a value with itself is identity up to canonicalization.
    #[test]
    fn intersect_self_identity(value in arb_raw(3)) {
        prop_assert_eq!(
            intersect(&value, &value).unwrap(),
            convert_deep(&value).unwrap()
        );
    }

    /// Deep intersection of maps never invents keys: every result key
    /// exists on both sides.
    #[test]
    fn intersect_keys_are_common_keys(a in arb_map(2), b in arb_map(2)) {
        let common = intersect_deep(&a, &b).unwrap();
        let a_keys = key_names(&a);
        let b_keys = key_names(&b);
        for key in key_names(&common) {
            prop_assert!(a_keys.contains(&key), "key {key} not in left operand");
            prop_assert!(b_keys.contains(&key), "key {key} not in right operand");
        }
    }

    /// Default filtering is idempotent.
    #[test]
    fn filter_default_is_idempotent(value in arb_raw(3)) {
        let once = filter(&value).unwrap();
        let twice = filter(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Filtering with a pure value predicate is idempotent.
    #[test]
    fn filter_by_value_is_idempotent(value in arb_canonical(3)) {
        let drop_nulls = Predicate::by_value(|value: &Value| !value.is_null());
        let once = filter_with(&value, &drop_nulls).unwrap();
        let twice = filter_with(&once, &drop_nulls).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Filtering never modifies its input.
    #[test]
    fn filter_preserves_input(value in arb_raw(3)) {
        let snapshot = value.clone();
        let _ = filter(&value).unwrap();
        prop_assert_eq!(value, snapshot);
    }
}
