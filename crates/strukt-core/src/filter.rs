//! Predicate-driven recursive filtering.
//!
//! Filtering is post-order: every child is filtered before its parent's
//! entries are evaluated, so a predicate always sees already-filtered
//! nested content. The borrowed input is never modified; the result is a
//! freshly built canonical value.
//!
//! Surviving sequence entries keep their original indices: a still-dense
//! 0-based run stays a sequence, gapped survivors become a decimal-keyed
//! map. Nothing is ever re-indexed.
//!
//! ```
//! use strukt_core::{filter, Value};
//! use serde_json::json;
//!
//! let subject = Value::from_json(&json!([1, null, 0, [], "a"]));
//! let kept = filter(&subject).unwrap();
//! // Gaps at 1..3 turn the survivors into an index-keyed map.
//! assert_eq!(kept, Value::from_json(&json!({"0": 1, "4": "a"})));
//! ```

use crate::convert::convert_deep_with;
use crate::error::{Limits, Result};
use crate::value::{Key, Value};

/// Decides which entries survive a [`filter_with`] pass.
///
/// The call shape is fixed by the variant chosen at the call site; there
/// is no runtime mode flag to inspect.
pub enum Predicate<'a> {
    /// Keep entries whose key satisfies the closure.
    ByKey(Box<dyn Fn(&Key) -> bool + 'a>),
    /// Keep entries whose (already filtered) value satisfies the closure.
    ByValue(Box<dyn Fn(&Value) -> bool + 'a>),
    /// Keep entries judged on both value and key.
    ByBoth(Box<dyn Fn(&Value, &Key) -> bool + 'a>),
}

impl<'a> Predicate<'a> {
    /// Predicate over keys only.
    pub fn by_key(f: impl Fn(&Key) -> bool + 'a) -> Self {
        Predicate::ByKey(Box::new(f))
    }

    /// Predicate over values only.
    pub fn by_value(f: impl Fn(&Value) -> bool + 'a) -> Self {
        Predicate::ByValue(Box::new(f))
    }

    /// Predicate over value and key.
    pub fn by_both(f: impl Fn(&Value, &Key) -> bool + 'a) -> Self {
        Predicate::ByBoth(Box::new(f))
    }

    fn keep(&self, key: &Key, value: &Value) -> bool {
        match self {
            Predicate::ByKey(f) => f(key),
            Predicate::ByValue(f) => f(value),
            Predicate::ByBoth(f) => f(value, key),
        }
    }
}

/// Filter with the default rule: drop entries whose post-recursion value
/// is empty — null, `false`, zero, the empty string, or an empty
/// container. Scalar subjects pass through untouched. Uses the default
/// [`Limits`].
pub fn filter(subject: &Value) -> Result<Value> {
    filter_with_limits(subject, None, Limits::default())
}

/// Filter with an explicit predicate. Uses the default [`Limits`].
pub fn filter_with(subject: &Value, predicate: &Predicate<'_>) -> Result<Value> {
    filter_with_limits(subject, Some(predicate), Limits::default())
}

/// [`filter`] / [`filter_with`] with explicit limits; `None` applies the
/// default emptiness rule.
pub fn filter_with_limits(
    subject: &Value,
    predicate: Option<&Predicate<'_>>,
    limits: Limits,
) -> Result<Value> {
    let canonical = convert_deep_with(subject, limits)?;
    filter_at(canonical, predicate, 0, &limits)
}

fn filter_at(
    subject: Value,
    predicate: Option<&Predicate<'_>>,
    depth: usize,
    limits: &Limits,
) -> Result<Value> {
    limits.check(depth)?;
    match subject {
        Value::Map(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (name, value) in entries {
                let value = filter_at(value, predicate, depth + 1, limits)?;
                if keep(predicate, &Key::Name(name.clone()), &value) {
                    out.push((name, value));
                }
            }
            Ok(Value::Map(out))
        }
        Value::Seq(items) => {
            let mut survivors = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                let item = filter_at(item, predicate, depth + 1, limits)?;
                if keep(predicate, &Key::Idx(i), &item) {
                    survivors.push((i, item));
                }
            }
            // A still-dense run keeps its sequence kind; gapped survivors
            // keep their original indices as map keys.
            if survivors.iter().enumerate().all(|(pos, (i, _))| pos == *i) {
                Ok(Value::Seq(
                    survivors.into_iter().map(|(_, item)| item).collect(),
                ))
            } else {
                Ok(Value::Map(
                    survivors
                        .into_iter()
                        .map(|(i, item)| (i.to_string(), item))
                        .collect(),
                ))
            }
        }
        scalar => Ok(scalar),
    }
}

fn keep(predicate: Option<&Predicate<'_>>, key: &Key, value: &Value) -> bool {
    match predicate {
        Some(predicate) => predicate.keep(key, value),
        None => !is_empty(value),
    }
}

/// The default emptiness rule.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Int(i) => *i == 0,
        Value::Float(f) => *f == 0.0,
        Value::Str(s) => s.is_empty(),
        Value::Seq(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Table(entries) => entries.is_empty(),
        Value::Opaque(_) => false,
    }
}
