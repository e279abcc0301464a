//! Cell layouts: the pure world <-> cell transforms
//!
//! A layout knows nothing about payloads. It holds the cell size and origin of
//! one tessellation and converts between continuous world positions and
//! discrete cell coordinates. `CellGrid` pairs a layout with payload storage.
//!
//! Two snapping policies exist and are kept deliberately distinct:
//! - [`SnapPolicy::Floor`]: a position resolves to the cell whose lower corner
//!   lies at or below it (X-Y grid).
//! - [`SnapPolicy::Nearest`]: a position resolves to the nearest cell anchor,
//!   ties rounding half to even (X-Z grid and the hex grid's rough estimate).

pub mod hex_horizontal;
pub mod rect_horizontal;
pub mod rect_vertical;

pub use hex_horizontal::HexHorizontal;
pub use rect_horizontal::RectHorizontal;
pub use rect_vertical::RectVertical;

use crate::core_types::{CellCoord, Vec3};

/// Transform between world space and cell coordinates for one tessellation
///
/// Implementations are cheap value types. `cell_size` is validated positive and
/// finite before a layout is built by `CellGrid`; building one directly with a
/// zero or negative size yields meaningless (but non-panicking) results.
pub trait CellLayout {
    /// Short human-readable name used in log output
    const NAME: &'static str;

    /// Create the layout for the given cell size and world-space origin
    fn new(cell_size: f32, origin: Vec3) -> Self;

    /// Edge length of a cell in world units
    fn cell_size(&self) -> f32;

    /// World-space anchor of cell `(0, 0)`
    fn origin(&self) -> Vec3;

    /// World-space anchor of a cell
    ///
    /// Pure: works for any coordinate, in bounds or not.
    fn cell_to_world(&self, cell: CellCoord) -> Vec3;

    /// Cell containing (or nearest to) a world position
    ///
    /// The result is not bounds-checked; callers test it against their grid.
    fn world_to_cell(&self, position: Vec3) -> CellCoord;
}

/// Rule for snapping a continuous cell-space value to an integer index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapPolicy {
    /// Round toward negative infinity
    Floor,
    /// Round to nearest, exact halves to the even neighbour
    Nearest,
}

impl SnapPolicy {
    /// Snap a value already expressed in cell units
    ///
    /// Finite values past the `i32` range saturate. NaN and infinities map to
    /// `i32::MIN`, which no grid contains, so such positions never resolve to
    /// a real cell.
    #[inline]
    pub fn snap(self, cells: f32) -> i32 {
        if !cells.is_finite() {
            return i32::MIN;
        }
        match self {
            SnapPolicy::Floor => cells.floor() as i32,
            SnapPolicy::Nearest => cells.round_ties_even() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_goes_toward_negative_infinity() {
        assert_eq!(SnapPolicy::Floor.snap(2.0), 2);
        assert_eq!(SnapPolicy::Floor.snap(2.999), 2);
        assert_eq!(SnapPolicy::Floor.snap(-0.001), -1);
        assert_eq!(SnapPolicy::Floor.snap(-1.0), -1);
    }

    #[test]
    fn test_nearest_ties_to_even() {
        assert_eq!(SnapPolicy::Nearest.snap(0.49), 0);
        assert_eq!(SnapPolicy::Nearest.snap(0.5), 0);
        assert_eq!(SnapPolicy::Nearest.snap(1.5), 2);
        assert_eq!(SnapPolicy::Nearest.snap(2.5), 2);
        assert_eq!(SnapPolicy::Nearest.snap(-0.5), 0);
        assert_eq!(SnapPolicy::Nearest.snap(-1.5), -2);
        assert_eq!(SnapPolicy::Nearest.snap(-0.51), -1);
    }

    #[test]
    fn test_snap_saturates() {
        assert_eq!(SnapPolicy::Nearest.snap(1.0e12), i32::MAX);
        assert_eq!(SnapPolicy::Floor.snap(-1.0e12), i32::MIN);
    }

    #[test]
    fn test_non_finite_snaps_out_of_range() {
        for policy in [SnapPolicy::Floor, SnapPolicy::Nearest] {
            assert_eq!(policy.snap(f32::NAN), i32::MIN);
            assert_eq!(policy.snap(f32::INFINITY), i32::MIN);
            assert_eq!(policy.snap(f32::NEG_INFINITY), i32::MIN);
        }
    }
}
