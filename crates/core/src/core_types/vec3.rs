//! Vector type alias for world-space positions.

use nalgebra::Vector3;

/// 3D vector type for world positions and cell anchors.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`. Vertical grids use the
/// X and Y components, ground-plane grids use X and Z and carry the origin's Y.
pub type Vec3 = Vector3<f32>;
