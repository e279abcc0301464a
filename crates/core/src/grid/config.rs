//! Grid geometry configuration

use crate::core_types::Vec3;
use crate::grid::error::{Axis, GridError};
use serde::{Deserialize, Serialize};

/// Dimensions and transform parameters shared by every grid variant
///
/// Only geometry lives here; payloads are never part of the configuration.
/// Hosts can deserialize this from their own settings files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of cells along the first axis (world X)
    pub width: usize,
    /// Number of cells along the second axis (world Y or Z)
    pub height: usize,
    /// Edge length of a cell in world units
    pub cell_size: f32,
    /// World-space anchor of cell `(0, 0)`
    pub origin: Vec3,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            cell_size: 1.0,
            origin: Vec3::zeros(),
        }
    }
}

impl GridConfig {
    /// Create a configuration from explicit geometry
    pub fn new(width: usize, height: usize, cell_size: f32, origin: Vec3) -> Self {
        Self {
            width,
            height,
            cell_size,
            origin,
        }
    }

    /// Check the preconditions the transforms rely on
    ///
    /// # Errors
    /// Returns the first violated precondition: a zero or oversized dimension,
    /// a cell size that is not strictly positive and finite, or a non-finite
    /// origin.
    pub fn validate(&self) -> Result<(), GridError> {
        check_dimension(Axis::Width, self.width)?;
        check_dimension(Axis::Height, self.height)?;

        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(self.cell_size));
        }
        if !self.origin.iter().all(|c| c.is_finite()) {
            return Err(GridError::NonFiniteOrigin);
        }
        Ok(())
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

fn check_dimension(axis: Axis, value: usize) -> Result<(), GridError> {
    if value == 0 {
        return Err(GridError::ZeroDimension { axis });
    }
    if i32::try_from(value).is_err() {
        return Err(GridError::DimensionTooLarge { axis, value });
    }
    Ok(())
}
