// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core solver trait and the three GMST strategies.

use gmst_common::{Graph, Result};
use rand::Rng;

/// Core trait for all GMST solvers.
pub trait Solver {
    /// Solver parameters.
    type Config: Default + Clone + Send + 'static;
    /// Result type.
    type Output: Send + 'static;

    /// Solver identifier.
    fn name() -> &'static str;

    /// Run the solver. Deterministic solvers ignore `rng`.
    fn solve<G, R>(graph: &G, config: Self::Config, rng: &mut R) -> Result<Self::Output>
    where
        G: Graph + ?Sized,
        R: Rng + ?Sized;
}

mod greedy;
pub use greedy::{Greedy, GreedyConfig};

mod randomized;
pub use randomized::{Randomized, RandomizedConfig};

mod reactive;
pub use reactive::{Reactive, ReactiveConfig, ReactiveResult};
