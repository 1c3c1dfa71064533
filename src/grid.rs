use crate::direction::Direction;
use crate::error::{Result, SolverError};
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed value of a Goal cell.
pub const GOAL_VALUE: f32 = 100.0;
/// Fixed value of a Hole cell.
pub const HOLE_VALUE: f32 = -100.0;
/// Fraction of cells turned into obstructions by random placement.
pub const OBSTRUCTION_FRACTION: f32 = 0.1;

/// Classification of a grid cell.
///
/// Only `Open` cells are updated by the solver; the other kinds hold a
/// fixed value and are never overwritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Open,
    Goal,
    Hole,
    Obstruction,
}

impl CellKind {
    /// The value a cell takes on when it becomes this kind.
    pub fn fixed_value(self) -> f32 {
        match self {
            CellKind::Open => 0.0,
            CellKind::Goal => GOAL_VALUE,
            CellKind::Hole => HOLE_VALUE,
            CellKind::Obstruction => 0.0,
        }
    }
}

/// One grid cell: position, classification, current value estimate and the
/// extracted policy action (None until a policy has been extracted).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub kind: CellKind,
    pub value: f32,
    pub action: Option<Direction>,
}

/// A cols × rows grid of cells, the sole state the solver reads and writes.
///
/// Lookup is by (x, y) index only; the raster iteration order used
/// throughout the crate is x ascending outer, y ascending inner.
///
/// # Example
///
/// ```rust
/// use gridsolve::grid::{CellKind, Grid};
///
/// let mut grid = Grid::new(20, 20).unwrap();
/// grid.edit_cell(5, 5).unwrap(); // Open -> Goal
/// assert_eq!(grid.get(5, 5).unwrap().kind, CellKind::Goal);
/// assert_eq!(grid.get(5, 5).unwrap().value, 100.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid of all-Open cells with value 0 and no policy.
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(SolverError::invalid_parameter(
                "dimensions",
                "grid dimensions must be positive",
            ));
        }

        let cells = Array2::from_shape_fn((cols, rows), |(x, y)| Cell {
            x,
            y,
            kind: CellKind::Open,
            value: 0.0,
            action: None,
        });

        Ok(Grid { cells })
    }

    /// Create an all-Open grid, then turn ~10% of the cells into
    /// obstructions at random positions.
    pub fn with_random_obstructions<R: Rng>(cols: usize, rows: usize, rng: &mut R) -> Result<Self> {
        let mut grid = Grid::new(cols, rows)?;
        grid.place_obstructions(rng);
        Ok(grid)
    }

    /// Reinitialize every cell to Open and place a fresh random
    /// obstruction set.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            cell.kind = CellKind::Open;
            cell.value = 0.0;
            cell.action = None;
        }
        self.place_obstructions(rng);
    }

    fn place_obstructions<R: Rng>(&mut self, rng: &mut R) {
        let (cols, rows) = self.cells.dim();
        let mut to_place = (cols as f32 * rows as f32 * OBSTRUCTION_FRACTION) as usize;
        while to_place > 0 {
            let x = rng.gen_range(0..cols);
            let y = rng.gen_range(0..rows);
            let cell = &mut self.cells[[x, y]];
            if cell.kind == CellKind::Open {
                cell.kind = CellKind::Obstruction;
                cell.value = 0.0;
                to_place -= 1;
            }
        }
    }

    pub fn cols(&self) -> usize {
        self.cells.dim().0
    }

    pub fn rows(&self) -> usize {
        self.cells.dim().1
    }

    /// Whether a (possibly negative) coordinate pair lands on the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.cols() && y >= 0 && (y as usize) < self.rows()
    }

    /// Bounds-checked cell lookup.
    pub fn get(&self, x: usize, y: usize) -> Result<&Cell> {
        self.cells
            .get((x, y))
            .ok_or_else(|| SolverError::out_of_bounds(x, y, self.cols(), self.rows()))
    }

    /// Bounds-checked mutable cell lookup.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell> {
        let (cols, rows) = self.cells.dim();
        self.cells
            .get_mut((x, y))
            .ok_or_else(|| SolverError::out_of_bounds(x, y, cols, rows))
    }

    /// Unchecked lookup for positions already validated with
    /// [`Grid::in_bounds`]; used on the solver's hot path.
    pub(crate) fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[[x, y]]
    }

    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[[x, y]]
    }

    /// Cycle a cell's kind: Open → Goal → Hole → Obstruction → Open.
    ///
    /// The cell's value is reset to the fixed value of its new kind
    /// (0 for Open). A previously extracted action is left in place; it is
    /// only meaningful again after the next policy extraction.
    pub fn edit_cell(&mut self, x: usize, y: usize) -> Result<CellKind> {
        let cell = self.get_mut(x, y)?;
        let next = match cell.kind {
            CellKind::Open => CellKind::Goal,
            CellKind::Goal => CellKind::Hole,
            CellKind::Hole => CellKind::Obstruction,
            CellKind::Obstruction => CellKind::Open,
        };
        cell.kind = next;
        cell.value = next.fixed_value();
        Ok(next)
    }

    /// Set a cell to a specific kind, resetting its value accordingly.
    pub fn set_kind(&mut self, x: usize, y: usize, kind: CellKind) -> Result<()> {
        let cell = self.get_mut(x, y)?;
        cell.kind = kind;
        cell.value = kind.fixed_value();
        Ok(())
    }

    /// Iterate cells in raster order (x ascending outer, y ascending inner).
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of Open cells currently on the grid.
    pub fn open_cells(&self) -> usize {
        self.iter().filter(|c| c.kind == CellKind::Open).count()
    }
}
