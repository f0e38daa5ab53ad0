// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Reactive GMST search.
//!
//! A two-armed adaptive loop over the greedy and randomized solvers. Each
//! round picks greedy with probability `p` and keeps the solution if it beats
//! the best cost so far. A round that does not improve counts as a failure for
//! the strategy that ran, and once any failure exists `p` becomes
//! `1 - failures_greedy / (failures_greedy + failures_random)`.
//!
//! `p` is not clamped: it can reach 0 or 1 and stay there while one counter
//! dominates.

use crate::algo::algorithms::{Greedy, Randomized, RandomizedConfig, Solver};
use crate::algo::solution::Solution;
use gmst_common::config::{validate_alpha, validate_probability, validate_rounds};
use gmst_common::{Graph, Result};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument};

pub struct Reactive;

#[derive(Debug, Clone)]
pub struct ReactiveConfig {
    /// Number of rounds (default: 50)
    pub rounds: usize,
    /// Greedy probability before the first failure (default: 0.5)
    pub initial_probability: f64,
    /// Alpha passed to the randomized solver (default: 0.5)
    pub alpha: f64,
}

impl Default for ReactiveConfig {
    fn default() -> Self {
        Self {
            rounds: 50,
            initial_probability: 0.5,
            alpha: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactiveResult {
    /// Best solution retained; empty if no round produced any edge
    pub solution: Solution,
    /// Cost of `solution`, or +infinity if none was found
    pub best_cost: f64,
    /// Greedy probability after the last round
    pub greedy_probability: f64,
    pub failures_greedy: usize,
    pub failures_random: usize,
    pub greedy_rounds: usize,
    pub random_rounds: usize,
}

impl ReactiveResult {
    pub fn found_solution(&self) -> bool {
        self.best_cost.is_finite()
    }
}

impl Solver for Reactive {
    type Config = ReactiveConfig;
    type Output = ReactiveResult;

    fn name() -> &'static str {
        "reactive"
    }

    #[instrument(skip_all, fields(rounds = config.rounds))]
    fn solve<G, R>(graph: &G, config: Self::Config, rng: &mut R) -> Result<ReactiveResult>
    where
        G: Graph + ?Sized,
        R: Rng + ?Sized,
    {
        validate_rounds(config.rounds)?;
        validate_probability(config.initial_probability)?;
        validate_alpha(config.alpha)?;

        let randomized = RandomizedConfig {
            alpha: config.alpha,
        };

        let mut p = config.initial_probability;
        let mut best: Option<Solution> = None;
        let mut best_cost = f64::INFINITY;
        let mut failures_greedy = 0usize;
        let mut failures_random = 0usize;
        let mut greedy_rounds = 0usize;
        let mut random_rounds = 0usize;
        let mut cluster_count = 0usize;
        // Greedy is deterministic; solve once and reuse.
        let mut greedy_cache: Option<Solution> = None;

        for round in 0..config.rounds {
            let use_greedy = rng.gen_range(0.0..1.0) < p;

            let solution = if use_greedy {
                greedy_rounds += 1;
                let solution = match greedy_cache.take() {
                    Some(cached) => cached,
                    None => Greedy::run(graph)?,
                };
                greedy_cache = Some(solution.clone());
                solution
            } else {
                random_rounds += 1;
                Randomized::solve(graph, randomized.clone(), rng)?
            };
            cluster_count = solution.cluster_count();

            let cost = solution.total_cost();
            if !solution.is_empty() && cost < best_cost {
                best_cost = cost;
                best = Some(solution);
            } else if use_greedy {
                failures_greedy += 1;
            } else {
                failures_random += 1;
            }

            let failures = failures_greedy + failures_random;
            if failures > 0 {
                p = 1.0 - failures_greedy as f64 / failures as f64;
            }

            debug!(round, use_greedy, cost, best_cost, p, "Reactive round");
        }

        info!(
            best_cost,
            greedy_rounds, random_rounds, failures_greedy, failures_random, "Reactive search done"
        );

        Ok(ReactiveResult {
            solution: best.unwrap_or_else(|| Solution::empty(cluster_count)),
            best_cost,
            greedy_probability: p,
            failures_greedy,
            failures_random,
            greedy_rounds,
            random_rounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::TestGraph;
    use gmst_common::GmstError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_graph() -> TestGraph {
        TestGraph::undirected(&[1.0, 2.0, 3.0, 1.0, 2.0, 4.0])
            .edge(1, 2, 9.0)
            .edge(1, 3, 2.0)
            .edge(2, 3, 4.0)
            .edge(3, 4, 1.0)
            .edge(4, 5, 3.0)
            .edge(5, 6, 8.0)
            .edge(2, 6, 5.0)
            .edge(1, 6, 7.0)
    }

    fn config(rounds: usize, initial_probability: f64) -> ReactiveConfig {
        ReactiveConfig {
            rounds,
            initial_probability,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_round_greedy() {
        let g = sample_graph();
        let mut rng = StdRng::seed_from_u64(5);
        let result = Reactive::solve(&g, config(1, 1.0), &mut rng).unwrap();

        assert_eq!(result.solution, Greedy::run(&g).unwrap());
        assert_eq!(result.greedy_rounds, 1);
        assert_eq!(result.random_rounds, 0);
        assert_eq!(result.greedy_probability, 1.0);
    }

    #[test]
    fn test_single_round_randomized() {
        let g = sample_graph();
        let result = Reactive::solve(&g, config(1, 0.0), &mut StdRng::seed_from_u64(9)).unwrap();

        // Same draws: one coin flip, then the randomized solver.
        let mut rng = StdRng::seed_from_u64(9);
        let _coin: f64 = rng.gen_range(0.0..1.0);
        let expected = Randomized::solve(&g, RandomizedConfig::default(), &mut rng).unwrap();

        assert_eq!(result.solution, expected);
        assert_eq!(result.random_rounds, 1);
    }

    #[test]
    fn test_greedy_failure_shifts_probability() {
        let g = sample_graph();
        let mut rng = StdRng::seed_from_u64(0);
        // Round 1 improves on +inf, round 2 repeats the same cost.
        let result = Reactive::solve(&g, config(2, 1.0), &mut rng).unwrap();

        assert_eq!(result.failures_greedy, 1);
        assert_eq!(result.failures_random, 0);
        assert_eq!(result.greedy_probability, 0.0);
    }

    #[test]
    fn test_matches_greedy_cost_once_greedy_ran() {
        let g = sample_graph();
        let greedy = Greedy::run(&g).unwrap();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = Reactive::solve(&g, ReactiveConfig::default(), &mut rng).unwrap();
            if result.greedy_rounds > 0 {
                assert_eq!(result.best_cost, greedy.total_cost());
            }
            assert!(result.best_cost >= greedy.total_cost());
            assert_eq!(
                result.greedy_rounds + result.random_rounds,
                ReactiveConfig::default().rounds
            );
        }
    }

    #[test]
    fn test_no_edges_means_no_solution() {
        let g = TestGraph::undirected(&[1.0, 2.0, 3.0]);
        let mut rng = StdRng::seed_from_u64(1);
        let result = Reactive::solve(&g, config(10, 0.5), &mut rng).unwrap();

        assert!(!result.found_solution());
        assert!(result.best_cost.is_infinite());
        assert!(result.solution.is_empty());
        assert_eq!(result.solution.cluster_count(), 3);
        assert_eq!(result.failures_greedy + result.failures_random, 10);
    }

    #[test]
    fn test_same_seed_same_result() {
        let g = sample_graph();
        let a = Reactive::solve(&g, ReactiveConfig::default(), &mut StdRng::seed_from_u64(21));
        let b = Reactive::solve(&g, ReactiveConfig::default(), &mut StdRng::seed_from_u64(21));
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn test_invalid_parameters() {
        let g = sample_graph();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Reactive::solve(&g, config(0, 0.5), &mut rng),
            Err(GmstError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Reactive::solve(&g, config(5, 1.5), &mut rng),
            Err(GmstError::InvalidArgument { .. })
        ));
    }
}
