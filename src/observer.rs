//! Observation port fired once per cell update.
//!
//! The engine and the policy extractor report each cell they touch through
//! this trait so an interactive front end can redraw as the solve runs.
//! Observers see a snapshot by shared reference and cannot mutate the grid;
//! core correctness never depends on them.

use crate::grid::Cell;

/// Receiver for per-cell update notifications during a solve.
pub trait CellObserver {
    /// Called synchronously after a cell's value (during value iteration)
    /// or action (during policy extraction) has been written.
    fn cell_updated(&mut self, cell: &Cell);
}

/// Observer that discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CellObserver for NoopObserver {
    fn cell_updated(&mut self, _cell: &Cell) {}
}

// Closures work directly as observers.
impl<F: FnMut(&Cell)> CellObserver for F {
    fn cell_updated(&mut self, cell: &Cell) {
        self(cell)
    }
}
