//! src/graph/error.rs
//!
//! Validation errors raised at the graph boundary (create, resize, new sample).
//!
//! Nothing past the boundary fails: degenerate but valid input (zero width,
//! zero height, an all-zero window) is handled by clamping during rendering.

use std::fmt;

use thiserror::Error;

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Which display dimension a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("sample values must be non-negative, got {0}")]
    NegativeSample(i64),

    #[error("{axis} must be non-negative, got {value}")]
    NegativeDimension { axis: Axis, value: i64 },

    #[error("{axis} {value} exceeds the maximum of {max}", max = MAX_DIMENSION)]
    DimensionTooLarge { axis: Axis, value: i64 },

    #[error("{width}x{height} cells do not fit in memory on this platform")]
    AreaTooLarge { width: usize, height: usize },
}

/// Largest width or height accepted, matching the range of a terminal cell
/// coordinate. `MAX_DIMENSION * MAX_DIMENSION` fits in a 32-bit `usize`.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Validate a raw sample coming from the caller.
pub fn sample(value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| GraphError::NegativeSample(value))
}

/// Validate a raw display dimension coming from the caller.
pub fn dimension(axis: Axis, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(GraphError::NegativeDimension { axis, value });
    }
    usize::try_from(value)
        .ok()
        .filter(|&v| v <= MAX_DIMENSION)
        .ok_or(GraphError::DimensionTooLarge { axis, value })
}

/// Validate a raw `width`×`height` display area coming from the caller.
pub fn dimensions(width: i64, height: i64) -> Result<(usize, usize)> {
    let width = dimension(Axis::Width, width)?;
    let height = dimension(Axis::Height, height)?;
    width
        .checked_mul(height)
        .ok_or(GraphError::AreaTooLarge { width, height })?;
    Ok((width, height))
}
