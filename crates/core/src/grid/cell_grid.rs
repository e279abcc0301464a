//! Dense payload grid over a cell layout
//!
//! `CellGrid<T, L>` stores exactly one `T` per cell of a `width × height`
//! grid and delegates every world <-> cell conversion to its layout `L`.
//!
//! Storage is one flat `Vec<T>` addressed as `index = x * height + y`. That is
//! also the order in which the factory runs during construction (x outer,
//! y inner), so the vector is filled by pushing and a cell counts as built
//! exactly when its index is below the current length. Factories therefore see
//! every earlier cell and read later ones as empty.
//!
//! Out-of-bounds access is routine input (a click just outside the grid), not
//! an error: reads return the empty sentinel and writes are ignored.

use crate::core_types::{CellCoord, Vec3};
use crate::grid::config::GridConfig;
use crate::grid::error::GridError;
use crate::grid::observer::{CellChanged, ObserverId, ObserverList};
use crate::layout::CellLayout;
use std::fmt;
use tracing::{debug, trace, warn};

/// Payload container bound to one tessellation
pub struct CellGrid<T, L> {
    width: i32,
    height: i32,
    layout: L,
    cells: Vec<T>,
    observers: ObserverList<CellGrid<T, L>>,
}

impl<T, L: CellLayout> CellGrid<T, L> {
    /// Build a grid, calling `factory(&grid, x, y)` once per cell
    ///
    /// The factory runs `width * height` times in row-major order (x outer,
    /// y inner). It receives the grid under construction: cells earlier in
    /// that order hold their final payloads, later ones read as empty. No
    /// change notification is fired during construction.
    ///
    /// # Errors
    /// Returns [`GridError`] if the configuration fails
    /// [`GridConfig::validate`].
    pub fn new<F>(config: GridConfig, mut factory: F) -> Result<Self, GridError>
    where
        F: FnMut(&Self, i32, i32) -> T,
    {
        if let Err(e) = config.validate() {
            warn!("Rejected {} grid configuration: {e}", L::NAME);
            return Err(e);
        }

        // Dimensions fit i32 after validation
        let width = config.width as i32;
        let height = config.height as i32;

        let mut grid = Self {
            width,
            height,
            layout: L::new(config.cell_size, config.origin),
            cells: Vec::with_capacity(config.cell_count()),
            observers: ObserverList::new(),
        };

        for x in 0..width {
            for y in 0..height {
                let payload = factory(&grid, x, y);
                grid.cells.push(payload);
            }
        }

        debug!(
            "Created {} grid: {}x{} cells, cell_size={}, origin=({}, {}, {})",
            L::NAME,
            width,
            height,
            config.cell_size,
            config.origin.x,
            config.origin.y,
            config.origin.z
        );

        Ok(grid)
    }

    /// Build a grid with every payload set to `T::default()`
    ///
    /// # Errors
    /// Returns [`GridError`] if the configuration is invalid.
    pub fn with_default(config: GridConfig) -> Result<Self, GridError>
    where
        T: Default,
    {
        Self::new(config, |_, _, _| T::default())
    }

    /// Number of columns
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Edge length of a cell in world units
    pub fn cell_size(&self) -> f32 {
        self.layout.cell_size()
    }

    /// World-space anchor of cell `(0, 0)`
    pub fn origin(&self) -> Vec3 {
        self.layout.origin()
    }

    /// The transform this grid uses
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// World-space anchor of cell `(x, y)`
    ///
    /// Lower-left corner on the X-Y grid, cell centre on the ground-plane
    /// grids. Defined for any coordinate, in bounds or not.
    pub fn world_position(&self, x: i32, y: i32) -> Vec3 {
        self.layout.cell_to_world(CellCoord::new(x, y))
    }

    /// Cell coordinate for a world position, not bounds-checked
    pub fn resolve_cell(&self, position: Vec3) -> CellCoord {
        self.layout.world_to_cell(position)
    }

    /// Whether `(x, y)` lies inside the grid
    #[inline]
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// [`is_valid`](Self::is_valid) for a [`CellCoord`]
    #[inline]
    pub fn is_valid_coord(&self, coord: CellCoord) -> bool {
        self.is_valid(coord.x, coord.y)
    }

    /// Nearest in-bounds coordinate, clamping each component independently
    pub fn clamp(&self, coord: CellCoord) -> CellCoord {
        CellCoord::new(
            coord.x.clamp(0, self.width - 1),
            coord.y.clamp(0, self.height - 1),
        )
    }

    /// Storage index of an in-bounds cell
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.is_valid(x, y)
            .then(|| x as usize * self.height as usize + y as usize)
    }

    /// Payload at `(x, y)`
    ///
    /// Returns `None` (the empty sentinel) when the coordinate is out of
    /// bounds, or during construction when the cell is not built yet.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).and_then(|i| self.cells.get(i))
    }

    /// Payload at `(x, y)`, or `T::default()` as the empty value
    pub fn get_or_default(&self, x: i32, y: i32) -> T
    where
        T: Clone + Default,
    {
        self.get(x, y).cloned().unwrap_or_default()
    }

    /// Payload of the cell containing `position`
    pub fn get_at(&self, position: Vec3) -> Option<&T> {
        let cell = self.resolve_cell(position);
        self.get(cell.x, cell.y)
    }

    /// Replace the payload at `(x, y)` and notify observers
    ///
    /// Silently ignored when out of bounds: nothing is written and no
    /// notification fires.
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        let Some(slot) = self.index(x, y).and_then(|i| self.cells.get_mut(i)) else {
            trace!("Ignored write outside {} grid at ({}, {})", L::NAME, x, y);
            return;
        };
        *slot = value;
        trace!("Wrote {} grid cell ({}, {})", L::NAME, x, y);
        self.notify(CellCoord::new(x, y));
    }

    /// [`set`](Self::set) on the cell containing `position`
    pub fn set_at(&mut self, position: Vec3, value: T) {
        let cell = self.resolve_cell(position);
        self.set(cell.x, cell.y, value);
    }

    /// Mutate the payload at `(x, y)` in place and notify observers
    ///
    /// Returns `false` without calling `f` when out of bounds.
    pub fn update<F>(&mut self, x: i32, y: i32, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let Some(slot) = self.index(x, y).and_then(|i| self.cells.get_mut(i)) else {
            return false;
        };
        f(slot);
        self.notify(CellCoord::new(x, y));
        true
    }

    /// Fire the change notification for `(x, y)` without writing
    ///
    /// For payloads mutated through interior mutability. Only in-bounds cells
    /// notify; the return value says whether observers ran.
    pub fn trigger_cell_changed(&mut self, x: i32, y: i32) -> bool {
        if !self.is_valid(x, y) {
            return false;
        }
        self.notify(CellCoord::new(x, y));
        true
    }

    /// Register an observer for cell writes
    ///
    /// Observers run synchronously in registration order, after the write,
    /// and receive the grid mutably so they can read the new payload or write
    /// other cells. Events from such nested writes are queued and delivered
    /// after the current one, before the outermost write returns.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&mut Self, CellChanged) + 'static,
    {
        let id = self.observers.subscribe(Box::new(observer));
        debug!("Subscribed observer {} to {} grid", id.raw(), L::NAME);
        id
    }

    /// Remove an observer, returning whether it was registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let removed = self.observers.unsubscribe(id);
        debug!(
            "Unsubscribed observer {} from {} grid (found={})",
            id.raw(),
            L::NAME,
            removed
        );
        removed
    }

    /// Number of registered observers, including one that is running
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Every cell with its payload, in storage order (x outer, y inner)
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &T)> + '_ {
        let height = self.height;
        self.cells.iter().enumerate().map(move |(i, payload)| {
            let i = i as i32;
            (CellCoord::new(i / height, i % height), payload)
        })
    }

    fn observers_mut(&mut self) -> &mut ObserverList<Self> {
        &mut self.observers
    }

    fn notify(&mut self, cell: CellCoord) {
        if self.observers.is_empty() {
            return;
        }
        trace!(
            "Notifying {} observers of {} grid change at {} (nested={})",
            self.observers.len(),
            L::NAME,
            cell,
            self.observers.is_delivering()
        );
        ObserverList::dispatch(self, Self::observers_mut, CellChanged { cell });
    }
}

impl<T: fmt::Debug, L: fmt::Debug> fmt::Debug for CellGrid<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("layout", &self.layout)
            .field("cells", &self.cells)
            .field("observers", &self.observers)
            .finish()
    }
}
