//! # Gridsolve - Grid-World Value Iteration
//!
//! Gridsolve solves a discounted Markov Decision Process on a finite 2-D
//! grid by dynamic-programming value iteration, then derives a
//! deterministic policy from the converged value function.
//!
//! An agent on the grid picks one of eight compass directions per step, but
//! execution is noisy: the intended direction happens with probability `p`
//! and either ±45° neighbour with probability `(1 − p) / 2`. Goal and Hole
//! cells hold fixed terminal values (+100 / −100); Obstructions cancel
//! movement at a penalty. The engine sweeps the grid with the Bellman
//! optimality update until the largest per-sweep change falls below `theta`
//! or the sweep cap is hit, and a final pass extracts the arg-max action
//! for every Open cell.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridsolve::engine::ValueIterationEngine;
//! use gridsolve::grid::{CellKind, Grid};
//! use gridsolve::params::SolverParams;
//! use gridsolve::policy::PolicyExtractor;
//!
//! let mut grid = Grid::new(20, 20).unwrap();
//! grid.set_kind(10, 10, CellKind::Goal).unwrap();
//!
//! let params = SolverParams::default();
//! let engine = ValueIterationEngine::new(params).unwrap();
//! let iterations = engine.solve(&mut grid);
//!
//! let extractor = PolicyExtractor::new(params).unwrap();
//! extractor.extract(&mut grid);
//!
//! println!("converged after {iterations} sweeps");
//! ```
//!
//! ## Module Organization
//!
//! - [`direction`] - The eight compass directions and their grid deltas
//! - [`engine`] - The value iteration engine (Bellman sweeps, convergence)
//! - [`error`] - Error types and result handling
//! - [`grid`] - Cells, cell kinds and the grid arena
//! - [`observer`] - Per-cell-update observation port for front ends
//! - [`params`] - Solver parameters and their builder
//! - [`policy`] - Arg-max policy extraction
//! - [`transition`] - The stochastic one-step transition model

pub mod direction;
pub mod engine;
pub mod error;
pub mod grid;
pub mod observer;
pub mod params;
pub mod policy;
pub mod transition;

pub use direction::Direction;
pub use engine::ValueIterationEngine;
pub use error::{Result, SolverError};
pub use grid::{Cell, CellKind, Grid};
pub use observer::{CellObserver, NoopObserver};
pub use params::{SolverParams, SolverParamsBuilder};
pub use policy::PolicyExtractor;

#[cfg(test)]
mod tests;
