//! Structural intersection, one-level and deep.
//!
//! The one-level [`intersect`] and the recursive [`intersect_deep`] are
//! deliberately distinct operations: the shallow rule compares nested
//! entries by whole-value equality, the deep rule re-intersects them. Both
//! canonicalize their operands first and only ever emit canonical values.
//!
//! ```
//! use strukt_core::{intersect, Value};
//! use serde_json::json;
//!
//! let a = Value::from_json(&json!([1, 2, 3, 4]));
//! let b = Value::from_json(&json!([0, 2, 4, 6]));
//! assert_eq!(intersect(&a, &b).unwrap(), Value::from_json(&json!([2, 4])));
//!
//! // A lone scalar meets a sequence as a one-element sequence.
//! assert_eq!(
//!     intersect(&Value::Int(4), &b).unwrap(),
//!     Value::from_json(&json!([4])),
//! );
//! ```

use crate::convert::convert_deep_with;
use crate::error::{Limits, Result};
use crate::value::Value;
use crate::walk::zip_map_with;

/// One-level intersection. Uses the default [`Limits`].
///
/// After canonicalizing both operands: equal operands return the left
/// normalization; a lone scalar against a sequence is lifted into a
/// one-element sequence (either direction); sequences keep the left
/// operand's elements (order and duplicates preserved) that equal some
/// element of the right; maps keep the left operand's entries whose key
/// exists on the right with an equal value; any other pairing is null.
pub fn intersect(a: &Value, b: &Value) -> Result<Value> {
    intersect_with(a, b, Limits::default())
}

/// [`intersect`] with explicit limits.
pub fn intersect_with(a: &Value, b: &Value, limits: Limits) -> Result<Value> {
    let a = convert_deep_with(a, limits)?;
    let b = convert_deep_with(b, limits)?;
    Ok(intersect_canonical(&a, &b))
}

/// Deep intersection: intersect both directions, then walk the two results
/// together, re-intersecting paired containers so nested structures are
/// intersected by content rather than whole-value equality. Uses the
/// default [`Limits`].
pub fn intersect_deep(a: &Value, b: &Value) -> Result<Value> {
    intersect_deep_with(a, b, Limits::default())
}

/// [`intersect_deep`] with explicit limits.
pub fn intersect_deep_with(a: &Value, b: &Value, limits: Limits) -> Result<Value> {
    intersect_deep_at(a, b, 0, &limits)
}

fn intersect_deep_at(a: &Value, b: &Value, depth: usize, limits: &Limits) -> Result<Value> {
    limits.check(depth)?;
    let forward = intersect_with(a, b, *limits)?;
    let reverse = intersect_with(b, a, *limits)?;
    zip_map_with(
        &forward,
        &reverse,
        |_, ours, theirs| {
            if ours.is_container() && theirs.is_container() {
                intersect_deep_at(ours, theirs, depth + 1, limits)
            } else {
                Ok(ours.clone())
            }
        },
        *limits,
    )
}

fn intersect_canonical(a: &Value, b: &Value) -> Value {
    if a == b {
        return a.clone();
    }
    match (a, b) {
        (scalar, Value::Seq(_)) if scalar.is_scalar() => {
            intersect_canonical(&Value::Seq(vec![scalar.clone()]), b)
        }
        (Value::Seq(_), scalar) if scalar.is_scalar() => {
            intersect_canonical(a, &Value::Seq(vec![scalar.clone()]))
        }
        (Value::Seq(items), Value::Seq(others)) => Value::Seq(
            items
                .iter()
                .filter(|item| others.contains(item))
                .cloned()
                .collect(),
        ),
        (Value::Map(entries), Value::Map(others)) => Value::Map(
            entries
                .iter()
                .filter(|(key, value)| {
                    others
                        .iter()
                        .any(|(other_key, other_value)| other_key == key && other_value == value)
                })
                .cloned()
                .collect(),
        ),
        _ => Value::Null,
    }
}
