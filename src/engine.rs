//! Value iteration over the grid.
//!
//! Sweeps apply the Bellman optimality update to every Open cell in raster
//! order until the largest value change in a sweep drops below `theta` or
//! the sweep count exceeds `max_iterations`. Updates are written in place,
//! so cells visited later in a sweep see values already updated earlier in
//! the same sweep (Gauss-Seidel iteration). This is deliberate and affects
//! the convergence trajectory; reproducing runs requires the same raster
//! order.

use crate::direction::Direction;
use crate::error::Result;
use crate::grid::{CellKind, Grid};
use crate::observer::{CellObserver, NoopObserver};
use crate::params::SolverParams;
use crate::transition::expected_backup;

/// Dynamic-programming engine applying the Bellman optimality update.
///
/// # Example
///
/// ```rust
/// use gridsolve::engine::ValueIterationEngine;
/// use gridsolve::grid::{CellKind, Grid};
/// use gridsolve::params::SolverParams;
///
/// let mut grid = Grid::new(3, 1).unwrap();
/// grid.set_kind(2, 0, CellKind::Goal).unwrap();
///
/// let engine = ValueIterationEngine::new(SolverParams::default()).unwrap();
/// let iterations = engine.solve(&mut grid);
/// assert!(iterations <= SolverParams::default().max_iterations + 1);
/// ```
pub struct ValueIterationEngine {
    params: SolverParams,
}

impl ValueIterationEngine {
    /// Create an engine; fails on invalid parameters so a solve never
    /// starts with them.
    pub fn new(params: SolverParams) -> Result<Self> {
        params.validate()?;
        Ok(ValueIterationEngine { params })
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Run sweeps until convergence or the iteration cap, returning the
    /// number of sweeps executed.
    ///
    /// Hitting the cap is not an error: the grid is left holding the
    /// best-effort values of the final sweep, and the returned count lets
    /// the caller tell "converged early" from "stopped at the cap". The cap
    /// check is strictly greater-than, so up to `max_iterations + 1` sweeps
    /// run; a cap of 0 runs exactly one.
    pub fn solve(&self, grid: &mut Grid) -> usize {
        self.solve_observed(grid, &mut NoopObserver)
    }

    /// Like [`ValueIterationEngine::solve`], reporting every cell update
    /// through `observer`.
    pub fn solve_observed(&self, grid: &mut Grid, observer: &mut dyn CellObserver) -> usize {
        let mut iterations = 0;
        loop {
            let delta = self.sweep(grid, observer);
            iterations += 1;

            if delta < self.params.theta || iterations > self.params.max_iterations {
                return iterations;
            }
        }
    }

    /// One raster pass updating every Open cell in place, returning the
    /// largest absolute value change seen in the pass.
    ///
    /// For each cell the eight action backups are evaluated and the maximum
    /// is written; the first action seeds the running maximum and only a
    /// strictly greater backup replaces it, so ties resolve to the lowest
    /// action index.
    pub fn sweep(&self, grid: &mut Grid, observer: &mut dyn CellObserver) -> f32 {
        let mut delta = 0.0f32;

        for x in 0..grid.cols() {
            for y in 0..grid.rows() {
                if grid.cell(x, y).kind != CellKind::Open {
                    continue;
                }

                let old_value = grid.cell(x, y).value;
                let mut best = 0.0f32;
                for (i, &direction) in Direction::ALL.iter().enumerate() {
                    let backup = expected_backup(grid, &self.params, x, y, direction);
                    if i == 0 || backup > best {
                        best = backup;
                    }
                }

                grid.cell_mut(x, y).value = best;

                let change = (old_value - best).abs();
                if change > delta {
                    delta = change;
                }

                observer.cell_updated(grid.cell(x, y));
            }
        }

        delta
    }
}
