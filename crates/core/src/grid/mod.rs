//! Payload grids: storage, configuration, errors and change notification

pub mod cell_grid;
pub mod config;
pub mod error;
pub mod observer;

// Re-export main types
pub use cell_grid::CellGrid;
pub use config::GridConfig;
pub use error::{Axis, GridError};
pub use observer::{CellChanged, CellObserver, ObserverId, ObserverList};
