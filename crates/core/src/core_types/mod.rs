//! Core types and utilities

pub mod coord;
pub mod vec3;

pub use coord::CellCoord;
pub use vec3::Vec3;
