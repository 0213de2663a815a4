//! Canonicalizing conversion — maps any raw value into the canonical model.
//!
//! Rules, in priority order:
//!
//! 1. Scalars (null included) pass through unchanged.
//! 2. Associative tables become `Map`s: keys stringified (indices in
//!    decimal), order preserved.
//! 3. Non-associative tables become `Seq`s: re-indexed `0..len`, original
//!    keys discarded, order preserved.
//! 4. Opaque values become null.
//! 5. Canonical `Map`/`Seq` input passes through (conversion is
//!    idempotent).
//!
//! Record-like host objects enter the model through [`Value::record`],
//! already projected to their exposed fields, so the normalizer never sees
//! one.

use crate::classify::table_is_associative;
use crate::error::{Limits, Result};
use crate::value::{Key, Value};

/// Canonicalize a single level. Total; children are carried over as-is.
pub fn convert(subject: &Value) -> Value {
    convert_owned(subject.clone())
}

/// Recursively canonicalize: children first, then reclassify the converted
/// container (post-order). Uses the default [`Limits`].
pub fn convert_deep(subject: &Value) -> Result<Value> {
    convert_deep_with(subject, Limits::default())
}

/// [`convert_deep`] with explicit limits.
pub fn convert_deep_with(subject: &Value, limits: Limits) -> Result<Value> {
    convert_at(subject, 0, &limits)
}

/// Recursively promote associative tables to canonical maps, leaving
/// sequential and sparse tables untouched — keys are kept, nothing is
/// re-indexed. Uses the default [`Limits`].
pub fn to_maps(subject: &Value) -> Result<Value> {
    to_maps_with(subject, Limits::default())
}

/// [`to_maps`] with explicit limits.
pub fn to_maps_with(subject: &Value, limits: Limits) -> Result<Value> {
    to_maps_at(subject, 0, &limits)
}

fn convert_owned(subject: Value) -> Value {
    match subject {
        Value::Table(entries) => {
            if table_is_associative(&entries) {
                Value::Map(stringify_keys(entries))
            } else {
                Value::Seq(entries.into_iter().map(|(_, value)| value).collect())
            }
        }
        Value::Opaque(_) => Value::Null,
        other => other,
    }
}

pub(crate) fn convert_at(subject: &Value, depth: usize, limits: &Limits) -> Result<Value> {
    limits.check(depth)?;
    match subject {
        Value::Seq(items) => Ok(Value::Seq(
            items
                .iter()
                .map(|item| convert_at(item, depth + 1, limits))
                .collect::<Result<_>>()?,
        )),
        Value::Map(entries) => Ok(Value::Map(
            entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), convert_at(value, depth + 1, limits)?)))
                .collect::<Result<_>>()?,
        )),
        Value::Table(entries) => {
            let converted = entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), convert_at(value, depth + 1, limits)?)))
                .collect::<Result<Vec<_>>>()?;
            Ok(convert_owned(Value::Table(converted)))
        }
        other => Ok(convert_owned(other.clone())),
    }
}

fn to_maps_at(subject: &Value, depth: usize, limits: &Limits) -> Result<Value> {
    limits.check(depth)?;
    match subject {
        Value::Seq(items) => Ok(Value::Seq(
            items
                .iter()
                .map(|item| to_maps_at(item, depth + 1, limits))
                .collect::<Result<_>>()?,
        )),
        Value::Map(entries) => Ok(Value::Map(
            entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), to_maps_at(value, depth + 1, limits)?)))
                .collect::<Result<_>>()?,
        )),
        Value::Table(entries) => {
            let converted = entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), to_maps_at(value, depth + 1, limits)?)))
                .collect::<Result<Vec<_>>>()?;
            if table_is_associative(&converted) {
                Ok(Value::Map(stringify_keys(converted)))
            } else {
                Ok(Value::Table(converted))
            }
        }
        other => Ok(other.clone()),
    }
}

/// Render table keys as map keys. Stringification can collide (`Idx(1)`
/// vs `Name("1")`); the last occurrence wins while keeping the first
/// occurrence's position, matching loose-key coercion semantics.
fn stringify_keys(entries: Vec<(Key, Value)>) -> Vec<(String, Value)> {
    let mut out: Vec<(String, Value)> = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let name = key.to_string();
        match out.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => out.push((name, value)),
        }
    }
    out
}
