//! Error types for the core.
//!
//! Almost nothing in this crate is fallible in the `Result`-propagating
//! sense: SAT and the mover degrade to `None`/unchanged-position rather
//! than erroring (see the module docs on `sat` and `mover`). The one
//! exception is polygon authoring, where a caller can hand in a degenerate
//! or non-convex vertex list and needs to find out about it.

use thiserror::Error;

/// Errors raised while authoring or extending a [`Polygon`](crate::primitives::polygon::Polygon).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GeomError {
    /// The polygon does not have enough vertices, or is not convex, so an
    /// extend-range (the contiguous arc of vertices facing a direction)
    /// could not be found.
    #[error("cannot extend polygon: {reason}")]
    InvalidPolygon {
        /// Human-readable reason, for logging.
        reason: &'static str,
    },
}

/// Convenience alias for the core's one fallible family of operations.
pub type GeomResult<T> = Result<T, GeomError>;
