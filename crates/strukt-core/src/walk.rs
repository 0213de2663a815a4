//! The uniform traversal primitive shared by every operation.
//!
//! [`walk`] is plain key-ordered visitation; [`zip_map`] pairs two values
//! key-by-key and rebuilds the primary. Both go through
//! [`Value::entries`], the single point of contact with the container
//! representation.

use crate::convert::convert_deep_with;
use crate::error::{Limits, Result};
use crate::value::{Key, Value};

/// Visit every key/value pair of a walkable value in insertion order.
///
/// Maps yield named keys, sequences yield indices, raw tables yield their
/// keys as-is. Non-walkable input is a no-op, not an error.
///
/// ```
/// use strukt_core::{walk, Value};
/// use serde_json::json;
///
/// let value = Value::from_json(&json!({"a": 1, "b": 2}));
/// let mut seen = Vec::new();
/// walk(&value, |key, _| seen.push(key.to_string()));
/// assert_eq!(seen, ["a", "b"]);
///
/// // Scalars have nothing to visit.
/// walk(&Value::Int(23), |_, _| unreachable!());
/// ```
pub fn walk<F>(subject: &Value, mut visit: F)
where
    F: FnMut(&Key, &Value),
{
    for (key, value) in subject.entries() {
        visit(&key, value);
    }
}

/// Map over `primary`'s entries while pairing each with `secondary`'s
/// entry at the same key, or null on a miss — misses are never an error.
///
/// Both arguments are canonicalized first; the result preserves
/// `primary`'s container kind (map keys for maps, indices for sequences).
/// A scalar primary is returned unchanged without invoking the combiner.
/// Uses the default [`Limits`].
pub fn zip_map<F>(primary: &Value, secondary: &Value, combine: F) -> Result<Value>
where
    F: FnMut(&Key, &Value, &Value) -> Result<Value>,
{
    zip_map_with(primary, secondary, combine, Limits::default())
}

/// [`zip_map`] with explicit limits.
pub fn zip_map_with<F>(
    primary: &Value,
    secondary: &Value,
    mut combine: F,
    limits: Limits,
) -> Result<Value>
where
    F: FnMut(&Key, &Value, &Value) -> Result<Value>,
{
    let primary = convert_deep_with(primary, limits)?;
    let secondary = convert_deep_with(secondary, limits)?;
    match primary {
        Value::Seq(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let other = secondary.get_index(i).unwrap_or(&Value::Null);
                out.push(combine(&Key::Idx(i), item, other)?);
            }
            Ok(Value::Seq(out))
        }
        Value::Map(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (name, value) in &entries {
                let other = secondary.get(name).unwrap_or(&Value::Null);
                out.push((name.clone(), combine(&Key::Name(name.clone()), value, other)?));
            }
            Ok(Value::Map(out))
        }
        scalar => Ok(scalar),
    }
}
