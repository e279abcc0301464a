//! Cell-changed notifications
//!
//! Observers are plain boxed closures kept in registration order. Delivery is
//! synchronous: `CellGrid::set` returns only after every observer has run.
//!
//! Observers receive the grid mutably and may write to it. A write made
//! during delivery does not recurse: its event is queued and delivered, to
//! every observer registered at that point, once the current event has
//! reached all of its observers. The outermost write returns after the queue
//! drains, so an observer that keeps writing unconditionally never returns.

use crate::core_types::CellCoord;
use std::collections::VecDeque;
use std::fmt;

/// Unique identifier for a registered observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

impl ObserverId {
    /// Get the raw ID value
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Payload of the "cell changed" notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellChanged {
    /// Cell whose payload was written
    pub cell: CellCoord,
}

/// Observer callback for a grid of type `G`
///
/// Receives the grid after the write, so it can read the new payload or
/// write further cells.
pub type CellObserver<G> = Box<dyn FnMut(&mut G, CellChanged)>;

/// Registered observers of one grid, in registration order
pub struct ObserverList<G> {
    next_id: u32,
    // `None` while that observer is running
    entries: Vec<(ObserverId, Option<CellObserver<G>>)>,
    pending: VecDeque<CellChanged>,
    delivering: bool,
}

impl<G> ObserverList<G> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            pending: VecDeque::new(),
            delivering: false,
        }
    }

    /// Register an observer; it runs after all previously registered ones
    ///
    /// An observer registered during delivery misses the event being
    /// delivered and receives every queued one after it.
    pub fn subscribe(&mut self, observer: CellObserver<G>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, Some(observer)));
        id
    }

    /// Remove an observer, returning whether it was registered
    ///
    /// An observer may remove itself; it finishes its current call and is
    /// then dropped.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of registered observers, including one that is running
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no observer is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an event is being delivered right now
    pub fn is_delivering(&self) -> bool {
        self.delivering
    }

    /// Deliver `event` to the observers stored in `host`
    ///
    /// `list` locates this list inside its host so that each observer can be
    /// handed the host mutably. Called while a delivery is already running on
    /// the same host, the event is queued instead and this returns at once.
    pub fn dispatch(host: &mut G, list: fn(&mut G) -> &mut Self, event: CellChanged) {
        let observers = list(host);
        if observers.delivering {
            observers.pending.push_back(event);
            return;
        }
        if observers.entries.is_empty() {
            return;
        }
        observers.delivering = true;
        observers.pending.push_back(event);

        while let Some(event) = list(host).pending.pop_front() {
            let ids: Vec<ObserverId> = list(host).entries.iter().map(|(id, _)| *id).collect();
            for id in ids {
                let Some(mut observer) = list(host).detach(id) else {
                    continue;
                };
                observer(host, event);
                list(host).reattach(id, observer);
            }
        }

        list(host).delivering = false;
    }

    fn detach(&mut self, id: ObserverId) -> Option<CellObserver<G>> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .and_then(|(_, slot)| slot.take())
    }

    fn reattach(&mut self, id: ObserverId, observer: CellObserver<G>) {
        // Gone if it unsubscribed while running
        if let Some((_, slot)) = self.entries.iter_mut().find(|(entry_id, _)| *entry_id == id) {
            *slot = Some(observer);
        }
    }
}

impl<G> Default for ObserverList<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> fmt::Debug for ObserverList<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("next_id", &self.next_id)
            .field("observers", &self.entries.len())
            .field("pending", &self.pending.len())
            .field("delivering", &self.delivering)
            .finish()
    }
}
