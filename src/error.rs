//! Errors raised while building a scene from its configuration.
//!
//! Runtime degeneracies (coincident bodies, a ball sitting on the container
//! center) are never errors: the resolvers skip them for that frame and tell
//! the [`StepObserver`](crate::observer::StepObserver).

use thiserror::Error;

/// Configuration problems detected at scene construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A length, radius, mass or timestep must be positive and finite.
    #[error("{field} must be positive and finite")]
    NonPositive { field: &'static str },
    /// A coefficient must be zero or greater and finite.
    #[error("{field} must be non-negative and finite")]
    Negative { field: &'static str },
    /// A vector parameter contains NaN or infinity.
    #[error("{field} must have finite components")]
    NonFinite { field: &'static str },
    /// A ball does not fit inside the container.
    #[error("container radius must exceed ball radius")]
    ContainerTooSmall,
    /// Grid dimensions must be at least 2x2.
    #[error("cloth grid must be at least 2x2, got {cols}x{rows}")]
    InvalidGridDimensions { cols: usize, rows: usize },
    /// Soft body perimeter point count outside the supported range.
    #[error("soft body needs between {min} and {max} perimeter points, got {count}")]
    PointCountOutOfRange { count: usize, min: usize, max: usize },
    /// Constraint relaxation needs at least one pass.
    #[error("relaxation iterations must be at least 1")]
    NoIterations,
    /// Unknown scene identifier passed to the dispatch table.
    #[error("unknown scene `{0}`")]
    UnknownScene(alloc::string::String),
}
