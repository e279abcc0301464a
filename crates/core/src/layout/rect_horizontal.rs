//! Axis-aligned grid in the X-Z ground plane

use super::{CellLayout, SnapPolicy};
use crate::core_types::{CellCoord, Vec3};

/// Rectangular tessellation of the X-Z plane
///
/// The cell's second index runs along world Z and the anchor keeps the
/// origin's Y: `(x, 0, z) * cell_size + origin`. World positions resolve with
/// [`SnapPolicy::Nearest`], so the anchor acts as the cell centre and the
/// boundary between two cells sits half a cell from each anchor. This is
/// intentionally different from [`RectVertical`](super::RectVertical).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectHorizontal {
    cell_size: f32,
    origin: Vec3,
}

impl CellLayout for RectHorizontal {
    const NAME: &'static str = "rect-horizontal";

    fn new(cell_size: f32, origin: Vec3) -> Self {
        RectHorizontal { cell_size, origin }
    }

    fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    fn cell_to_world(&self, cell: CellCoord) -> Vec3 {
        Vec3::new(cell.x as f32, 0.0, cell.y as f32) * self.cell_size + self.origin
    }

    #[inline]
    fn world_to_cell(&self, position: Vec3) -> CellCoord {
        let local = position - self.origin;
        CellCoord::new(
            SnapPolicy::Nearest.snap(local.x / self.cell_size),
            SnapPolicy::Nearest.snap(local.z / self.cell_size),
        )
    }
}
