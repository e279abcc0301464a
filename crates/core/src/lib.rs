//! Grid Core Library
//!
//! Maps continuous world positions to discrete cells on three tessellations
//! and stores one payload per cell:
//!
//! - [`RectGridVertical`]: square cells in the X-Y plane, floor-based snapping
//! - [`RectGridHorizontal`]: square cells in the X-Z ground plane, snapping to
//!   the nearest cell centre
//! - [`HexGridHorizontal`]: offset-row hexagons in the X-Z ground plane,
//!   resolved by nearest-centre search over a cell and its six neighbours
//!
//! All three are `CellGrid<T, L>` with a different [`CellLayout`]. Reads and
//! writes are bounds-checked by policy rather than by error: out-of-range reads
//! return `None`, out-of-range writes are ignored. Successful writes notify
//! subscribed observers synchronously, in registration order.
//!
//! ```
//! use grids_core::{CellCoord, GridConfig, RectGridVertical, Vec3};
//!
//! let mut grid: RectGridVertical<&str> =
//!     RectGridVertical::with_default(GridConfig::new(5, 5, 1.0, Vec3::zeros()))?;
//! grid.set(2, 3, "A");
//! assert_eq!(grid.get(2, 3), Some(&"A"));
//! assert_eq!(grid.resolve_cell(Vec3::new(2.4, 3.9, 0.0)), CellCoord::new(2, 3));
//! # Ok::<(), grids_core::GridError>(())
//! ```
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the host application.

// Core types and utilities
pub mod core_types;

// Transforms and payload storage
pub mod grid;
pub mod layout;

// Re-export core types
pub use core_types::{CellCoord, Vec3};

// Re-export grid types
pub use grid::{Axis, CellChanged, CellGrid, GridConfig, GridError, ObserverId};
pub use layout::{CellLayout, HexHorizontal, RectHorizontal, RectVertical, SnapPolicy};

/// Square cells in the X-Y plane, resolved with floor snapping
pub type RectGridVertical<T> = CellGrid<T, RectVertical>;

/// Square cells in the X-Z plane, resolved to the nearest cell centre
pub type RectGridHorizontal<T> = CellGrid<T, RectHorizontal>;

/// Offset-row hexagons in the X-Z plane
pub type HexGridHorizontal<T> = CellGrid<T, HexHorizontal>;
