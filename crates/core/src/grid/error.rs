//! Errors raised while constructing a grid

use std::fmt;

/// Grid axis named in a dimension error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Number of columns
    Width,
    /// Number of rows
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// Errors that can occur when validating a grid configuration
///
/// Out-of-bounds cell access is never an error; these only cover geometry that
/// would make the transforms meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// Width or height is zero
    ZeroDimension {
        /// Offending axis
        axis: Axis,
    },
    /// Width or height cannot be addressed with `i32` cell indices
    DimensionTooLarge {
        /// Offending axis
        axis: Axis,
        /// Requested size
        value: usize,
    },
    /// Cell size is zero, negative, NaN or infinite
    InvalidCellSize(f32),
    /// A component of the origin is NaN or infinite
    NonFiniteOrigin,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroDimension { axis } => write!(f, "Grid {axis} must be positive"),
            GridError::DimensionTooLarge { axis, value } => write!(
                f,
                "Grid {axis} {value} exceeds maximum of {}",
                i32::MAX
            ),
            GridError::InvalidCellSize(size) => {
                write!(f, "Cell size must be positive and finite, got {size}")
            }
            GridError::NonFiniteOrigin => write!(f, "Grid origin must be finite"),
        }
    }
}

impl std::error::Error for GridError {}
