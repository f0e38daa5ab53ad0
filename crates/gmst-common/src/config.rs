// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::api::error::{GmstError, Result};

/// Parameters shared by the randomized and reactive solvers.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Fraction of the edge list disturbed by the randomized solver, in
    /// `[0, 1]` (default: 0.5)
    pub alpha: f64,

    /// Rounds run by the reactive controller (default: 50)
    pub rounds: usize,

    /// Probability of picking the greedy solver before any round has
    /// failed (default: 0.5)
    pub initial_probability: f64,

    /// Seed for the random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            rounds: 50,
            initial_probability: 0.5,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Checks that every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.alpha)?;
        validate_rounds(self.rounds)?;
        validate_probability(self.initial_probability)
    }
}

pub fn validate_alpha(alpha: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(GmstError::invalid_argument(
            "alpha",
            format!("must be within [0, 1], got {alpha}"),
        ));
    }
    Ok(())
}

pub fn validate_rounds(rounds: usize) -> Result<()> {
    if rounds == 0 {
        return Err(GmstError::invalid_argument(
            "rounds",
            "at least one round is required",
        ));
    }
    Ok(())
}

pub fn validate_probability(probability: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(GmstError::invalid_argument(
            "initial_probability",
            format!("must be within [0, 1], got {probability}"),
        ));
    }
    Ok(())
}
