//! Discrete cell coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer coordinate of a single cell.
///
/// The second component is named `y` for every tessellation. On the X-Y grid it
/// follows world Y; on the ground-plane grids (rectangular and hex) it addresses
/// world Z. Coordinates may be negative or past the grid's extent: resolving a
/// world position outside the grid yields such a coordinate, which then fails
/// the bounds check on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct CellCoord {
    /// Column index
    pub x: i32,
    /// Row index (world Y or world Z depending on the plane)
    pub y: i32,
}

impl CellCoord {
    /// Create a new cell coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        CellCoord { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`, saturating at the `i32` range
    ///
    /// Resolving a far-away world position already yields saturated
    /// components, so their neighbours must not overflow.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        CellCoord::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        CellCoord::new(x, y)
    }
}

impl From<CellCoord> for (i32, i32) {
    fn from(coord: CellCoord) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
