//! Offset-row hexagonal grid in the X-Z ground plane
//!
//! Rows run along world X and are stacked along world Z. Hexagons in adjacent
//! rows overlap vertically, so consecutive rows are only `0.75 * cell_size`
//! apart, and every odd row is pushed right by half a cell to interlock with
//! its neighbours:
//!
//! ```text
//!   row 2:   0   1   2   3
//!   row 1:     0   1   2   3
//!   row 0:   0   1   2   3
//! ```
//!
//! The forward transform is closed-form. Its inverse is not, because the
//! horizontal shift depends on the row, so resolution takes a rough estimate
//! that ignores the shift and then picks the nearest centre among the estimate
//! and its six offset-row neighbours.

use super::{CellLayout, SnapPolicy};
use crate::core_types::{CellCoord, Vec3};
use tracing::trace;

/// Vertical distance between consecutive rows as a fraction of `cell_size`
pub const HEX_ROW_SPACING: f32 = 0.75;

/// Horizontal shift of odd rows as a fraction of `cell_size`
pub const HEX_ODD_ROW_SHIFT: f32 = 0.5;

/// Neighbour offsets around a cell in an even row
///
/// Order: left, right, upper diagonal, up, lower diagonal, down. Resolution
/// breaks distance ties by this order.
const EVEN_ROW_NEIGHBOURS: [(i32, i32); 6] = [(-1, 0), (1, 0), (-1, 1), (0, 1), (-1, -1), (0, -1)];

/// Neighbour offsets around a cell in an odd (right-shifted) row
const ODD_ROW_NEIGHBOURS: [(i32, i32); 6] = [(-1, 0), (1, 0), (1, 1), (0, 1), (1, -1), (0, -1)];

/// Whether a row index is odd, counting negative rows by absolute value
#[inline]
const fn is_odd_row(row: i32) -> bool {
    row.rem_euclid(2) == 1
}

/// Hexagonal tessellation of the X-Z plane with odd rows shifted right
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexHorizontal {
    cell_size: f32,
    origin: Vec3,
}

impl HexHorizontal {
    /// Offset-unaware first guess for a world position
    #[inline]
    fn rough_estimate(&self, position: Vec3) -> CellCoord {
        let local = position - self.origin;
        CellCoord::new(
            SnapPolicy::Nearest.snap(local.x / self.cell_size),
            SnapPolicy::Nearest.snap(local.z / (self.cell_size * HEX_ROW_SPACING)),
        )
    }

    /// The six cells adjacent to `cell`, parity-corrected
    fn neighbours(cell: CellCoord) -> [CellCoord; 6] {
        let offsets = if is_odd_row(cell.y) {
            ODD_ROW_NEIGHBOURS
        } else {
            EVEN_ROW_NEIGHBOURS
        };
        offsets.map(|(dx, dy)| cell.offset(dx, dy))
    }

    #[inline]
    fn distance_to_centre(&self, position: Vec3, cell: CellCoord) -> f32 {
        (position - self.cell_to_world(cell)).norm()
    }
}

impl CellLayout for HexHorizontal {
    const NAME: &'static str = "hex-horizontal";

    fn new(cell_size: f32, origin: Vec3) -> Self {
        HexHorizontal { cell_size, origin }
    }

    fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Centre of a hex cell
    #[inline]
    fn cell_to_world(&self, cell: CellCoord) -> Vec3 {
        let shift = if is_odd_row(cell.y) {
            HEX_ODD_ROW_SHIFT
        } else {
            0.0
        };
        Vec3::new(
            (cell.x as f32 + shift) * self.cell_size,
            0.0,
            cell.y as f32 * self.cell_size * HEX_ROW_SPACING,
        ) + self.origin
    }

    /// Hex whose centre is nearest to `position`
    ///
    /// Evaluates exactly seven centres: the rough estimate first, then its
    /// neighbours in `*_ROW_NEIGHBOURS` order. A candidate wins only when
    /// strictly closer, so ties keep the earliest.
    fn world_to_cell(&self, position: Vec3) -> CellCoord {
        let rough = self.rough_estimate(position);

        let mut closest = rough;
        let mut closest_distance = self.distance_to_centre(position, rough);
        for candidate in Self::neighbours(rough) {
            let distance = self.distance_to_centre(position, candidate);
            if distance < closest_distance {
                closest = candidate;
                closest_distance = distance;
            }
        }

        trace!(%rough, %closest, closest_distance, "Resolved hex cell");
        closest
    }
}
