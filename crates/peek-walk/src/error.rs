//! Walk error types.

use thiserror::Error;

/// The only failure a walk can produce.
///
/// Rendering edge cases (unreadable fields, invalid nodes, nil
/// referents) degrade to placeholder callbacks instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// Recursion went deeper than the walker's configured ceiling.
    #[error("visit depth limit {limit} exceeded at `{path}`")]
    DepthExceeded { path: String, limit: usize },
}

/// Result alias for walk operations.
pub type WalkResult<T> = Result<T, WalkError>;
