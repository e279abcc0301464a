//! Axis-aligned grid in the X-Y plane

use super::{CellLayout, SnapPolicy};
use crate::core_types::{CellCoord, Vec3};

/// Rectangular tessellation of the X-Y plane
///
/// A cell's anchor is its lower-left corner: `(x, y, 0) * cell_size + origin`.
/// World positions resolve with [`SnapPolicy::Floor`], so every point inside
/// the half-open square `[anchor, anchor + cell_size)` maps to that cell and
/// points left of or below the origin map to negative indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectVertical {
    cell_size: f32,
    origin: Vec3,
}

impl CellLayout for RectVertical {
    const NAME: &'static str = "rect-vertical";

    fn new(cell_size: f32, origin: Vec3) -> Self {
        RectVertical { cell_size, origin }
    }

    fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    fn cell_to_world(&self, cell: CellCoord) -> Vec3 {
        Vec3::new(cell.x as f32, cell.y as f32, 0.0) * self.cell_size + self.origin
    }

    #[inline]
    fn world_to_cell(&self, position: Vec3) -> CellCoord {
        let local = position - self.origin;
        CellCoord::new(
            SnapPolicy::Floor.snap(local.x / self.cell_size),
            SnapPolicy::Floor.snap(local.y / self.cell_size),
        )
    }
}
