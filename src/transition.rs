//! Stochastic one-step transition model.
//!
//! Executing an action from an Open cell realizes one of three outcomes:
//! the intended direction with probability `p`, or either ±45° neighbour
//! with probability `(1 − p) / 2` each. Moves that would leave the grid or
//! enter an Obstruction are cancelled (the agent stays in place) but still
//! collect their reward.

use crate::direction::Direction;
use crate::grid::{CellKind, Grid};
use crate::params::SolverParams;

/// Diagonal steps cost 1.4× the movement penalty.
const DIAGONAL_FACTOR: f32 = 1.4;

/// Expected Bellman backup contribution of taking `intended` from the Open
/// cell at (x, y), using the values currently stored in `grid`.
///
/// Reward resolution per realized direction:
/// - off-grid target: movement penalty (×1.4 if diagonal), no movement;
/// - Obstruction target: collision penalty, never ×1.4, no movement;
/// - otherwise: movement penalty (×1.4 if diagonal), move to the target.
pub fn expected_backup(
    grid: &Grid,
    params: &SolverParams,
    x: usize,
    y: usize,
    intended: Direction,
) -> f32 {
    let mut sum = 0.0;

    for deviation in -1..=1 {
        let probability = if deviation == 0 {
            params.probability
        } else {
            (1.0 - params.probability) / 2.0
        };

        let realized = intended.rotated(deviation);
        let (dx, dy) = realized.delta();
        let tx = x as i32 + dx;
        let ty = y as i32 + dy;

        let (reward, vx, vy) = if !grid.in_bounds(tx, ty) {
            (step_reward(params, realized), x, y)
        } else if grid.cell(tx as usize, ty as usize).kind == CellKind::Obstruction {
            (params.collision_penalty, x, y)
        } else {
            (step_reward(params, realized), tx as usize, ty as usize)
        };

        sum += probability * (reward + params.gamma * grid.cell(vx, vy).value);
    }

    sum
}

fn step_reward(params: &SolverParams, realized: Direction) -> f32 {
    if realized.is_diagonal() {
        DIAGONAL_FACTOR * params.movement_penalty
    } else {
        params.movement_penalty
    }
}
