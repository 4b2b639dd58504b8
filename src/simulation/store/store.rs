//! Grid store - owner of the authoritative snapshot
//!
//! `replace` publishes in a fixed order: install the new snapshot, notify
//! subscribers (the renderer), then return it to the caller. Anything chained
//! after `replace` therefore reads exactly the snapshot it was chained to.

use std::sync::Arc;

use crate::core::grid::Grid;

/// Renderer hook: receives each committed snapshot and its version
pub type Subscriber = Box<dyn FnMut(&Grid, u64)>;

pub struct GridStore {
    current: Arc<Grid>,
    version: u64,
    subscribers: Vec<Subscriber>,
}

impl GridStore {
    /// Store holding a grid built cell by cell from `fill_rule(row, col)`
    pub fn initialize<F>(width: u32, height: u32, fill_rule: F) -> Self
    where
        F: FnMut(u32, u32) -> u32,
    {
        Self {
            current: Arc::new(Grid::from_fn(width, height, fill_rule)),
            version: 0,
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot (cheap clone of the handle)
    #[inline]
    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.current)
    }

    /// Borrow the current snapshot without bumping the refcount
    #[inline]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of snapshots committed since creation
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Install `update(&current)` as the new snapshot and notify subscribers.
    /// Returns the committed snapshot.
    pub fn replace<U>(&mut self, update: U) -> Arc<Grid>
    where
        U: FnOnce(&Grid) -> Grid,
    {
        let next = update(&self.current);
        debug_assert!(
            next.width() == self.current.width() && next.height() == self.current.height(),
            "replace: snapshot resized from {}x{} to {}x{}",
            self.current.width(),
            self.current.height(),
            next.width(),
            next.height()
        );

        self.current = Arc::new(next);
        self.version += 1;

        let committed = Arc::clone(&self.current);
        for subscriber in self.subscribers.iter_mut() {
            subscriber(committed.as_ref(), self.version);
        }
        committed
    }

    /// `replace`, then run `continuation` on the committed snapshot.
    pub fn replace_then<U, K, R>(&mut self, update: U, continuation: K) -> R
    where
        U: FnOnce(&Grid) -> Grid,
        K: FnOnce(&Grid) -> R,
    {
        let committed = self.replace(update);
        continuation(committed.as_ref())
    }
}
