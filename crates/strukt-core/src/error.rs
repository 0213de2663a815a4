//! Error type and recursion limits for the recursive operations.

use thiserror::Error;

/// Errors reported by strukt-core.
///
/// Classification and shallow conversion are total functions and never
/// fail; only the recursive operations can error, and only on depth.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StruktError {
    /// A recursive operation descended past the configured depth limit.
    ///
    /// The owned value model cannot be cyclic, so this only triggers on
    /// pathologically deep input — reported instead of overflowing the
    /// stack.
    #[error("maximum recursion depth {limit} exceeded")]
    DepthExceeded {
        /// The limit that was in effect.
        limit: usize,
    },
}

/// Convenience alias used throughout strukt-core.
pub type Result<T> = std::result::Result<T, StruktError>;

/// Recursion limits for the deep operations.
///
/// Every recursive entry point has a `_with` variant taking `Limits`; the
/// plain variants use [`Limits::default`] (depth 128).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth before `DepthExceeded` is reported.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

impl Limits {
    /// Limits with the given maximum depth.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Fails with `DepthExceeded` once `depth` passes the limit.
    pub(crate) fn check(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            Err(StruktError::DepthExceeded {
                limit: self.max_depth,
            })
        } else {
            Ok(())
        }
    }
}
