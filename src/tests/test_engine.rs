use crate::engine::ValueIterationEngine;
use crate::grid::{Cell, CellKind, Grid};
use crate::params::{SolverParams, SolverParamsBuilder};

fn corridor_with_goal_right() -> Grid {
    let mut grid = Grid::new(3, 1).unwrap();
    grid.set_kind(2, 0, CellKind::Goal).unwrap();
    grid
}

fn deterministic() -> SolverParams {
    SolverParamsBuilder::new().probability(1.0).build().unwrap()
}

#[test]
fn test_corridor_converges_to_expected_values() {
    let mut grid = corridor_with_goal_right();
    let engine = ValueIterationEngine::new(deterministic()).unwrap();
    let iterations = engine.solve(&mut grid);

    assert!(iterations <= 100, "did not converge: {iterations} sweeps");
    assert!((grid.get(1, 0).unwrap().value - 90.0).abs() < 1e-3);
    assert!((grid.get(0, 0).unwrap().value - 80.0).abs() < 1e-3);
    // The terminal cell is never touched.
    assert_eq!(grid.get(2, 0).unwrap().value, 100.0);
}

#[test]
fn test_cap_zero_runs_exactly_one_sweep() {
    let mut grid = corridor_with_goal_right();
    let params = SolverParamsBuilder::new()
        .probability(1.0)
        .max_iterations(0)
        .build()
        .unwrap();
    let engine = ValueIterationEngine::new(params).unwrap();
    let iterations = engine.solve(&mut grid);

    assert_eq!(iterations, 1);
    // Single-step backups, not converged values: (0,0) has only a zero
    // neighbour when it is visited.
    assert!((grid.get(0, 0).unwrap().value - (-10.0)).abs() < 1e-5);
    assert!((grid.get(1, 0).unwrap().value - 90.0).abs() < 1e-5);
}

#[test]
fn test_cap_is_strictly_greater_than() {
    // An all-Open grid with the default −10 movement penalty never meets
    // theta; the engine stops once the count exceeds the cap.
    let mut grid = Grid::new(4, 4).unwrap();
    let params = SolverParamsBuilder::new().max_iterations(5).build().unwrap();
    let engine = ValueIterationEngine::new(params).unwrap();
    let iterations = engine.solve(&mut grid);
    assert_eq!(iterations, 6);
}

#[test]
fn test_in_place_updates_propagate_within_a_sweep() {
    // Goal on the left; the raster visits (1,0) before (2,0), so (2,0)
    // already sees the 90 written moments earlier in the same sweep.
    let mut grid = Grid::new(3, 1).unwrap();
    grid.set_kind(0, 0, CellKind::Goal).unwrap();

    let params = SolverParamsBuilder::new()
        .probability(1.0)
        .max_iterations(0)
        .build()
        .unwrap();
    let engine = ValueIterationEngine::new(params).unwrap();
    let iterations = engine.solve(&mut grid);

    assert_eq!(iterations, 1);
    assert!((grid.get(1, 0).unwrap().value - 90.0).abs() < 1e-5);
    assert!((grid.get(2, 0).unwrap().value - 80.0).abs() < 1e-5);
}

#[test]
fn test_degenerate_grid_converges_immediately_with_zero_penalty() {
    let mut grid = Grid::new(5, 5).unwrap();
    let params = SolverParamsBuilder::new()
        .movement_penalty(0.0)
        .build()
        .unwrap();
    let engine = ValueIterationEngine::new(params).unwrap();
    let iterations = engine.solve(&mut grid);

    assert_eq!(iterations, 1);
    for cell in grid.iter() {
        assert_eq!(cell.value, 0.0);
    }
}

#[test]
fn test_observer_fires_once_per_open_cell_per_sweep() {
    let mut grid = corridor_with_goal_right();
    let engine = ValueIterationEngine::new(deterministic()).unwrap();

    let mut updates: Vec<Cell> = Vec::new();
    let mut observer = |cell: &Cell| updates.push(*cell);
    let iterations = engine.solve_observed(&mut grid, &mut observer);

    // Two Open cells, one notification each per sweep.
    assert_eq!(updates.len(), 2 * iterations);
    // Snapshots carry the freshly written value.
    assert!((updates[1].value - 90.0).abs() < 1e-5);
    assert!(updates.iter().all(|c| c.kind == CellKind::Open));
}

#[test]
fn test_invalid_params_rejected_before_solving() {
    let params = SolverParams {
        probability: 1.5,
        ..SolverParams::default()
    };
    assert!(ValueIterationEngine::new(params).is_err());
}

#[test]
fn test_non_open_cells_never_overwritten() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set_kind(0, 0, CellKind::Goal).unwrap();
    grid.set_kind(1, 1, CellKind::Hole).unwrap();
    grid.set_kind(2, 2, CellKind::Obstruction).unwrap();

    let engine = ValueIterationEngine::new(SolverParams::default()).unwrap();
    engine.solve(&mut grid);

    assert_eq!(grid.get(0, 0).unwrap().value, 100.0);
    assert_eq!(grid.get(1, 1).unwrap().value, -100.0);
    assert_eq!(grid.get(2, 2).unwrap().value, 0.0);
}
