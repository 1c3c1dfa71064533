use std::fmt;

/// Result type for gridsolve operations
pub type Result<T> = std::result::Result<T, SolverError>;

/// Main error type for the gridsolve library
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Position addressed outside the grid
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            SolverError::OutOfBounds { x, y, cols, rows } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} grid",
                    x, y, cols, rows
                )
            }
        }
    }
}

impl std::error::Error for SolverError {}

// Helper functions for common error patterns
impl SolverError {
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        SolverError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn out_of_bounds(x: usize, y: usize, cols: usize, rows: usize) -> Self {
        SolverError::OutOfBounds { x, y, cols, rows }
    }
}
