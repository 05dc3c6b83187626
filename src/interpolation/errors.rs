//! Interpolation error types.
//!
//! ┌ table validation (builder, before any computation)
//! │   ├ unequal x/y lengths
//! │   ├ fewer than three data points
//! │   ├ non-finite table entries
//! │   └ duplicate or non-increasing x-values
//! │
//! └ evaluation (the fitted spline stays valid and reusable)
//!     ├ query outside the table range
//!     ├ non-finite query
//!     └ interval search miss (internal invariant violation)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("insufficient points: got {got}, need at least 3")]
    InsufficientPoints { got: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("evaluation point must be finite, got {got}")]
    NonFiniteQuery { got: f64 },

    #[error("no interval brackets evaluation point {got}")]
    NoBracketingInterval { got: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },
}
