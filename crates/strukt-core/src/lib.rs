//! # strukt-core
//!
//! Structural-data toolkit over a dynamic value model that unifies
//! associative maps and ordered sequences under one container abstraction.
//! Four recursive operations — canonicalizing conversion, deep merge, deep
//! intersection, and predicate-driven filtering — share a single traversal
//! primitive and a single set of key-shape classification rules.
//!
//! ## Quick start
//!
//! ```rust
//! use strukt_core::{filter, intersect, merge, Value};
//! use serde_json::json;
//!
//! // Deep merge: maps merge key-wise, sequences append.
//! let merged = merge([
//!     Value::from_json(&json!({"a": 1, "c": 3})),
//!     Value::from_json(&json!({"b": 2, "c": 44})),
//! ]).unwrap();
//! assert_eq!(merged, Value::from_json(&json!({"a": 1, "c": 44, "b": 2})));
//!
//! // Intersection keeps what both sides agree on.
//! let common = intersect(
//!     &Value::from_json(&json!({"a": 1, "b": 2})),
//!     &Value::from_json(&json!({"a": 1, "b": 3})),
//! ).unwrap();
//! assert_eq!(common, Value::from_json(&json!({"a": 1})));
//!
//! // Default filtering prunes empty entries, recursively.
//! let pruned = filter(&Value::from_json(&json!({"a": 1, "b": null}))).unwrap();
//! assert_eq!(pruned, Value::from_json(&json!({"a": 1})));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` model, keys, entry iteration, host interop
//! - [`classify`] — associative / sequential / walkable key-shape rules
//! - [`convert`] — canonicalizing conversion (`convert`, `convert_deep`,
//!   `to_maps`)
//! - [`walk`] — the shared traversal primitive (`walk`, `zip_map`)
//! - [`merge`] — recursive merge under the overwrite-vs-recurse policy
//! - [`intersect`] — one-level and deep structural intersection
//! - [`filter`] — predicate-driven pruning with a closed predicate set
//! - [`error`] — the `DepthExceeded` condition and recursion `Limits`
//!
//! ## Purity
//!
//! Every operation is pure with respect to its borrowed inputs and
//! synchronous; there is no shared state across calls. Recursion is
//! bounded by [`Limits`] (`_with` variants), reporting
//! [`StruktError::DepthExceeded`] instead of exhausting the stack on
//! pathologically deep input.

pub mod classify;
pub mod convert;
pub mod error;
pub mod filter;
pub mod intersect;
pub mod merge;
pub mod value;
pub mod walk;

pub use classify::{is_associative, is_sequential, is_walkable};
pub use convert::{convert, convert_deep, convert_deep_with, to_maps, to_maps_with};
pub use error::{Limits, Result, StruktError};
pub use filter::{filter, filter_with, filter_with_limits, Predicate};
pub use intersect::{intersect, intersect_deep, intersect_deep_with, intersect_with};
pub use merge::{merge, merge_with};
pub use value::{Entries, Key, Record, Value};
pub use walk::{walk, zip_map, zip_map_with};
