//! Recursive merge of two or more values.
//!
//! A left fold with a running result. At every level the rule is the same:
//!
//! - either side scalar, or container kinds differ → the right side
//!   overwrites wholesale;
//! - map ⊕ map → key-wise merge, recursing into equal-kind containers;
//!   keys only present on the left move through untouched, new keys append
//!   in the right operand's order;
//! - sequence ⊕ sequence → append, never positional.
//!
//! Inputs are canonicalized before folding, so the raw table duality is
//! resolved once up front. The working value is owned throughout: children
//! that no rule touches are moved into the result, not copied.
//!
//! ```
//! use strukt_core::{merge, Value};
//! use serde_json::json;
//!
//! let merged = merge([
//!     Value::from_json(&json!([1, 3, 5, 7])),
//!     Value::from_json(&json!([2, 4])),
//!     Value::from_json(&json!([2, 6])),
//! ]).unwrap();
//! assert_eq!(merged, Value::from_json(&json!([1, 3, 5, 7, 2, 4, 2, 6])));
//! ```

use crate::convert::convert_deep_with;
use crate::error::{Limits, Result};
use crate::value::{map_entries_eq, Value};

/// Merge any number of values; no values merge to null, a single value
/// merges to its canonical form. Uses the default [`Limits`].
pub fn merge<I>(values: I) -> Result<Value>
where
    I: IntoIterator<Item = Value>,
{
    merge_with(values, Limits::default())
}

/// [`merge`] with explicit limits.
pub fn merge_with<I>(values: I, limits: Limits) -> Result<Value>
where
    I: IntoIterator<Item = Value>,
{
    let mut iter = values.into_iter();
    let mut result = match iter.next() {
        Some(first) => convert_deep_with(&first, limits)?,
        None => return Ok(Value::Null),
    };
    for value in iter {
        let value = convert_deep_with(&value, limits)?;
        result = combine(result, value, 0, &limits)?;
    }
    Ok(result)
}

/// Combine one level. Equal-kind containers recurse; everything else is
/// a wholesale overwrite by the right side.
fn combine(result: Value, value: Value, depth: usize, limits: &Limits) -> Result<Value> {
    limits.check(depth)?;
    match (result, value) {
        (Value::Map(a), Value::Map(b)) => merge_maps(a, b, depth, limits),
        (Value::Seq(mut a), Value::Seq(b)) => {
            a.extend(b);
            Ok(Value::Seq(a))
        }
        // Scalars and mismatched container kinds overwrite wholesale.
        (_, value) => Ok(value),
    }
}

fn merge_maps(
    mut a: Vec<(String, Value)>,
    b: Vec<(String, Value)>,
    depth: usize,
    limits: &Limits,
) -> Result<Value> {
    // Structurally equal operands need no work.
    if map_entries_eq(&a, &b) {
        return Ok(Value::Map(a));
    }
    for (key, incoming) in b {
        match a.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => {
                let current = std::mem::replace(slot, Value::Null);
                *slot = combine(current, incoming, depth + 1, limits)?;
            }
            None => a.push((key, incoming)),
        }
    }
    Ok(Value::Map(a))
}
