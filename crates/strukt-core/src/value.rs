//! The dynamic value model shared by every strukt operation.
//!
//! `Value` covers both the raw, host-facing domain and the canonical domain
//! the recursive operations work on:
//!
//! - **Scalars** (`Null`, `Bool`, `Int`, `Float`, `Str`) belong to both.
//! - **`Seq`** and **`Map`** are the canonical containers produced by the
//!   normalizer; maps use `Vec<(String, Value)>` to maintain insertion order
//!   without depending on `IndexMap`.
//! - **`Table`** is the raw dual container (integer *or* string keys, in any
//!   shape) that models loosely-typed array/object duality. It only exists
//!   ahead of normalization; no operation ever emits one.
//! - **`Opaque`** stands in for host values the model cannot represent
//!   (callables, I/O handles, resources). The normalizer turns it into null.

use std::fmt;

use serde_json::Value as Json;

/// A container key: a sequence index or a map name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Non-negative integer index.
    Idx(usize),
    /// String name.
    Name(String),
}

impl Key {
    /// The index, if this is an index key.
    pub fn as_idx(&self) -> Option<usize> {
        match self {
            Key::Idx(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// The name, if this is a name key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Idx(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

/// Renders the key the way it would appear as a canonical map key:
/// indices in decimal, names as-is.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Idx(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(idx: usize) -> Self {
        Key::Idx(idx)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

/// A dynamic structural value.
///
/// Equality is structural: scalars compare by value (strictly per variant,
/// no numeric coercion, IEEE semantics for floats), sequences positionally,
/// and maps/tables by key set and per-key value — insertion order is
/// preserved for iteration but irrelevant for equality.
#[derive(Debug, Clone)]
pub enum Value {
    /// Null / absent value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// 64-bit signed integer scalar.
    Int(i64),
    /// 64-bit float scalar.
    Float(f64),
    /// UTF-8 string scalar.
    Str(String),
    /// Canonical dense sequence; indices are always `0..len`.
    Seq(Vec<Value>),
    /// Canonical ordered map; keys are unique strings.
    Map(Vec<(String, Value)>),
    /// Raw keyed container with mixed index/name keys, in any shape.
    Table(Vec<(Key, Value)>),
    /// Unrepresentable host value; the tag is a debug label only.
    Opaque(&'static str),
}

impl Value {
    /// True for `Null`, `Bool`, `Int`, `Float`, and `Str`.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)
        )
    }

    /// True for `Seq`, `Map`, and `Table`.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Seq(_) | Value::Map(_) | Value::Table(_))
    }

    /// True for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The variant name as a string, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
            Value::Table(_) => "table",
            Value::Opaque(_) => "opaque",
        }
    }

    /// Number of entries for containers; scalars report zero.
    pub fn len(&self) -> usize {
        match self {
            Value::Seq(items) => items.len(),
            Value::Map(entries) => entries.len(),
            Value::Table(entries) => entries.len(),
            _ => 0,
        }
    }

    /// True when `len` is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry at a name key, for maps and tables.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            Value::Table(entries) => entries
                .iter()
                .find(|(k, _)| k.as_name() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Entry at an index key, for sequences and tables.
    pub fn get_index(&self, idx: usize) -> Option<&Value> {
        match self {
            Value::Seq(items) => items.get(idx),
            Value::Table(entries) => entries
                .iter()
                .find(|(k, _)| k.as_idx() == Some(idx))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Entry at a key of either shape.
    pub fn lookup(&self, key: &Key) -> Option<&Value> {
        match key {
            Key::Idx(i) => self.get_index(*i),
            Key::Name(name) => self.get(name),
        }
    }

    /// Key/value iteration in insertion order.
    ///
    /// This iterator is the single point of contact with the container
    /// representation: sequences yield `Key::Idx`, maps yield `Key::Name`,
    /// tables yield their keys as-is. Scalars and opaque values yield
    /// nothing.
    pub fn entries(&self) -> Entries<'_> {
        let inner = match self {
            Value::Seq(items) => EntriesInner::Seq(items.iter().enumerate()),
            Value::Map(entries) => EntriesInner::Map(entries.iter()),
            Value::Table(entries) => EntriesInner::Table(entries.iter()),
            _ => EntriesInner::Empty,
        };
        Entries { inner }
    }

    /// Build a `Map` from a record's exposed fields.
    ///
    /// See [`Record`]: only the fields the implementation lists cross the
    /// boundary, so private state never leaks into the value model.
    pub fn record<R: Record + ?Sized>(record: &R) -> Value {
        Value::Map(record.fields())
    }

    /// Build a value from a `serde_json::Value` tree.
    ///
    /// Arrays become sequences and objects become maps (both already
    /// canonical — JSON cannot express the raw table duality). Unsigned
    /// integers beyond `i64::MAX` fall back to floats.
    pub fn from_json(json: &Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Float(u as f64)
                } else {
                    n.as_f64().map(Value::Float).unwrap_or(Value::Null)
                }
            }
            Json::String(s) => Value::Str(s.clone()),
            Json::Array(items) => Value::Seq(items.iter().map(Value::from_json).collect()),
            Json::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Render as a `serde_json::Value` tree. Total: raw tables render as
    /// objects with stringified keys, opaque values and non-finite floats
    /// render as null.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null | Value::Opaque(_) => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(i) => Json::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Value::Str(s) => Json::String(s.clone()),
            Value::Seq(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(entries) => {
                let mut map = serde_json::Map::new();
                for (k, v) in entries {
                    map.insert(k.clone(), v.to_json());
                }
                Json::Object(map)
            }
            Value::Table(entries) => {
                let mut map = serde_json::Map::new();
                for (k, v) in entries {
                    map.insert(k.to_string(), v.to_json());
                }
                Json::Object(map)
            }
        }
    }
}

/// Iterator over a value's key/value pairs; see [`Value::entries`].
pub struct Entries<'a> {
    inner: EntriesInner<'a>,
}

enum EntriesInner<'a> {
    Empty,
    Seq(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Map(std::slice::Iter<'a, (String, Value)>),
    Table(std::slice::Iter<'a, (Key, Value)>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Empty => None,
            EntriesInner::Seq(it) => it.next().map(|(i, v)| (Key::Idx(i), v)),
            EntriesInner::Map(it) => it.next().map(|(k, v)| (Key::Name(k.clone()), v)),
            EntriesInner::Table(it) => it.next().map(|(k, v)| (k.clone(), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Empty => (0, Some(0)),
            EntriesInner::Seq(it) => it.size_hint(),
            EntriesInner::Map(it) => it.size_hint(),
            EntriesInner::Table(it) => it.size_hint(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => map_entries_eq(a, b),
            (Value::Table(a), Value::Table(b)) => table_entries_eq(a, b),
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

/// Key-set plus per-key value equality; relies on the unique-keys invariant.
pub(crate) fn map_entries_eq(a: &[(String, Value)], b: &[(String, Value)]) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, value)| {
            b.iter()
                .find(|(other, _)| other == key)
                .is_some_and(|(_, other_value)| other_value == value)
        })
}

fn table_entries_eq(a: &[(Key, Value)], b: &[(Key, Value)]) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, value)| {
            b.iter()
                .find(|(other, _)| other == key)
                .is_some_and(|(_, other_value)| other_value == value)
        })
}

/// Opt-in projection of a host record type into the value model.
///
/// The normalizer consumes only what `fields` returns; it never touches
/// methods or private state. Listing a field here is what makes it
/// "publicly enumerable" — an encapsulation boundary, not a container
/// adapter.
///
/// ```
/// use strukt_core::{Record, Value};
///
/// struct Account {
///     name: String,
///     // never exposed
///     token: String,
/// }
///
/// impl Record for Account {
///     fn fields(&self) -> Vec<(String, Value)> {
///         vec![("name".to_string(), Value::Str(self.name.clone()))]
///     }
/// }
///
/// let account = Account { name: "alice".into(), token: "s3cret".into() };
/// let value = Value::record(&account);
/// assert_eq!(value.get("name"), Some(&Value::Str("alice".into())));
/// assert_eq!(value.get("token"), None);
/// ```
pub trait Record {
    /// The publicly enumerable fields, in declaration order.
    fn fields(&self) -> Vec<(String, Value)>;
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(entries: Vec<(String, Value)>) -> Self {
        Value::Map(entries)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::from_json(&json)
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}
