use crate::error::{Result, SolverError};
use serde::{Deserialize, Serialize};

/// Parameters for one solve, immutable for its duration.
///
/// `max_iterations` is a `usize`: a cap of 0 is legal and causes exactly one
/// sweep to run before stopping (the cap check is strictly-greater-than).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    /// Convergence threshold on the max absolute value change per sweep.
    pub theta: f32,
    /// Probability that the executed action matches the chosen action; the
    /// remainder is split evenly between the two ±45° neighbours.
    pub probability: f32,
    /// Discount factor.
    pub gamma: f32,
    /// Hard cap on sweeps.
    pub max_iterations: usize,
    /// Reward for a move that lands on an Open/Goal/Hole cell or off-grid.
    /// Diagonal moves multiply this by 1.4.
    pub movement_penalty: f32,
    /// Reward when the move targets an Obstruction (movement is cancelled).
    /// Never multiplied by 1.4.
    pub collision_penalty: f32,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            theta: 1e-6,
            probability: 0.8,
            gamma: 1.0,
            max_iterations: 100,
            movement_penalty: -10.0,
            collision_penalty: -50.0,
        }
    }
}

impl SolverParams {
    /// Check parameter ranges; a solve never starts on invalid parameters.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(SolverError::invalid_parameter(
                "probability",
                "must be within [0, 1]",
            ));
        }
        if !(self.theta > 0.0) {
            return Err(SolverError::invalid_parameter(
                "theta",
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Builder for SolverParams
///
/// Starts from the defaults; `build` validates the result.
pub struct SolverParamsBuilder {
    params: SolverParams,
}

impl SolverParamsBuilder {
    /// Create a new builder seeded with the default parameters
    pub fn new() -> Self {
        SolverParamsBuilder {
            params: SolverParams::default(),
        }
    }

    /// Set the convergence threshold
    pub fn theta(mut self, theta: f32) -> Self {
        self.params.theta = theta;
        self
    }

    /// Set the intended-action probability
    pub fn probability(mut self, probability: f32) -> Self {
        self.params.probability = probability;
        self
    }

    /// Set the discount factor
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.params.gamma = gamma;
        self
    }

    /// Set the sweep cap
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.params.max_iterations = max_iterations;
        self
    }

    /// Set the movement penalty
    pub fn movement_penalty(mut self, movement_penalty: f32) -> Self {
        self.params.movement_penalty = movement_penalty;
        self
    }

    /// Set the collision penalty
    pub fn collision_penalty(mut self, collision_penalty: f32) -> Self {
        self.params.collision_penalty = collision_penalty;
        self
    }

    /// Build the parameters, validating ranges
    pub fn build(self) -> Result<SolverParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}

impl Default for SolverParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
