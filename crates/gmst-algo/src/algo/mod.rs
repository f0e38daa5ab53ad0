// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Generalized Minimum Spanning Tree engine.
//!
//! Vertices with exactly equal weight form a cluster; a solution connects the
//! clusters, not the vertices, using one edge per cluster merge.
//!
//! # Architecture
//!
//! ```text
//! Graph ──► collect_edges ──► Greedy / Randomized ──► Reactive
//!                                  │
//!                    ClusterAssignment + DisjointSets
//!                      (fresh for every solver call)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use gmst_algo::{Strategy, solve_greedy};
//! use gmst_common::SolverConfig;
//!
//! let solution = solve_greedy(&graph)?;
//! println!("{} edges, cost {}", solution.edge_count(), solution.total_cost());
//!
//! let config = SolverConfig { seed: Some(7), ..Default::default() };
//! let solution = Strategy::Reactive.run(&graph, &config)?;
//! ```

mod clusters;
mod edges;
mod solution;
mod union_find;

pub mod algorithms;

pub use clusters::ClusterAssignment;
pub use edges::{Edge, collect_edges};
pub use solution::Solution;
pub use union_find::DisjointSets;

#[cfg(test)]
pub mod test_utils;

use algorithms::{
    Greedy, Randomized, RandomizedConfig, Reactive, ReactiveConfig, ReactiveResult, Solver,
};
use gmst_common::{GmstError, Graph, Result, SolverConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Random source for a run: seeded when `seed` is given, otherwise from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Minimum-cost cluster spanning selection (deterministic).
pub fn solve_greedy<G: Graph + ?Sized>(graph: &G) -> Result<Solution> {
    Greedy::run(graph)
}

/// Randomized selection; `alpha` is the shuffled share of the edge list.
pub fn solve_randomized<G, R>(graph: &G, alpha: f64, rng: &mut R) -> Result<Solution>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    Randomized::solve(graph, RandomizedConfig { alpha }, rng)
}

/// Best solution of a reactive search. An empty solution means none was found.
pub fn solve_reactive<G, R>(
    graph: &G,
    rounds: usize,
    initial_probability: f64,
    rng: &mut R,
) -> Result<Solution>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    let config = ReactiveConfig {
        rounds,
        initial_probability,
        ..Default::default()
    };
    Ok(Reactive::solve(graph, config, rng)?.solution)
}

/// Solver selection used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Greedy,
    Randomized,
    Reactive,
}

impl Strategy {
    pub fn all() -> [Strategy; 3] {
        [Strategy::Greedy, Strategy::Randomized, Strategy::Reactive]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => Greedy::name(),
            Strategy::Randomized => Randomized::name(),
            Strategy::Reactive => Reactive::name(),
        }
    }

    /// Runs the strategy with parameters and seed taken from `config`.
    pub fn run<G: Graph + ?Sized>(&self, graph: &G, config: &SolverConfig) -> Result<Solution> {
        Ok(self.run_detailed(graph, config)?.0)
    }

    /// Like [`Strategy::run`], also returning the reactive report when applicable.
    pub fn run_detailed<G: Graph + ?Sized>(
        &self,
        graph: &G,
        config: &SolverConfig,
    ) -> Result<(Solution, Option<ReactiveResult>)> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        match self {
            Strategy::Greedy => Ok((Greedy::run(graph)?, None)),
            Strategy::Randomized => Ok((solve_randomized(graph, config.alpha, &mut rng)?, None)),
            Strategy::Reactive => {
                let reactive = ReactiveConfig {
                    rounds: config.rounds,
                    initial_probability: config.initial_probability,
                    alpha: config.alpha,
                };
                let result = Reactive::solve(graph, reactive, &mut rng)?;
                Ok((result.solution.clone(), Some(result)))
            }
        }
    }
}

impl FromStr for Strategy {
    type Err = GmstError;

    /// Accepts the strategy names, or the menu numbers 1-3.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" | "1" => Ok(Strategy::Greedy),
            "randomized" | "random" | "2" => Ok(Strategy::Randomized),
            "reactive" | "3" => Ok(Strategy::Reactive),
            other => Err(GmstError::invalid_argument(
                "algorithm",
                format!("expected greedy, randomized or reactive, got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
