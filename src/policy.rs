//! Policy extraction from a converged value function.

use crate::direction::Direction;
use crate::error::Result;
use crate::grid::{CellKind, Grid};
use crate::observer::{CellObserver, NoopObserver};
use crate::params::SolverParams;
use crate::transition::expected_backup;

/// One-pass arg-max policy extraction.
///
/// Runs the same eight-action evaluation as the engine against the frozen
/// values and writes the best direction into each Open cell. Values are
/// never altered, so extraction is idempotent. Meant to run after
/// [`ValueIterationEngine::solve`](crate::engine::ValueIterationEngine::solve);
/// on a fresh grid it is well-defined but yields a degenerate
/// first-index policy.
pub struct PolicyExtractor {
    params: SolverParams,
}

impl PolicyExtractor {
    /// Create an extractor; fails on invalid parameters.
    pub fn new(params: SolverParams) -> Result<Self> {
        params.validate()?;
        Ok(PolicyExtractor { params })
    }

    /// Write the arg-max action into every Open cell.
    pub fn extract(&self, grid: &mut Grid) {
        self.extract_observed(grid, &mut NoopObserver)
    }

    /// Like [`PolicyExtractor::extract`], reporting every cell update
    /// through `observer`.
    ///
    /// Tie-break matches the engine: the first action seeds the maximum and
    /// only a strictly greater backup replaces it, so the lowest action
    /// index wins.
    pub fn extract_observed(&self, grid: &mut Grid, observer: &mut dyn CellObserver) {
        for x in 0..grid.cols() {
            for y in 0..grid.rows() {
                if grid.cell(x, y).kind != CellKind::Open {
                    continue;
                }

                let mut best = 0.0f32;
                let mut best_action = Direction::North;
                for (i, &direction) in Direction::ALL.iter().enumerate() {
                    let backup = expected_backup(grid, &self.params, x, y, direction);
                    if i == 0 || backup > best {
                        best = backup;
                        best_action = direction;
                    }
                }

                grid.cell_mut(x, y).action = Some(best_action);

                observer.cell_updated(grid.cell(x, y));
            }
        }
    }
}
