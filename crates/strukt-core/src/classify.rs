//! Key-shape classification driving every normalization decision.
//!
//! Classification runs on raw, not-yet-normalized values: only `Table`
//! carries the array/object ambiguity these rules resolve. Canonical maps
//! mirror the object side of the duality and canonical sequences are dense
//! by construction, so both answer trivially. All three functions are
//! total and side-effect free.

use crate::value::{Key, Value};

/// True for raw tables carrying at least one named key.
///
/// Scalars, opaque values, sequences, and canonical maps are never
/// associative.
pub fn is_associative(subject: &Value) -> bool {
    match subject {
        Value::Table(entries) => table_is_associative(entries),
        _ => false,
    }
}

/// True for containers whose keys are exactly `0..len` in order,
/// the empty table included.
pub fn is_sequential(subject: &Value) -> bool {
    match subject {
        Value::Seq(_) => true,
        Value::Table(entries) => entries
            .iter()
            .enumerate()
            .all(|(i, (key, _))| matches!(key, Key::Idx(idx) if *idx == i)),
        _ => false,
    }
}

/// True for any value admitting key/value iteration.
pub fn is_walkable(subject: &Value) -> bool {
    subject.is_container()
}

/// The associative rule on bare table entries, shared with the normalizer.
pub(crate) fn table_is_associative(entries: &[(Key, Value)]) -> bool {
    entries.iter().any(|(key, _)| matches!(key, Key::Name(_)))
}
