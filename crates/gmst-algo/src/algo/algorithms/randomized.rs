// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Randomized GMST.
//!
//! Runs the same cluster sweep as the greedy solver, but over the edges in
//! scan order (not sorted by weight) after a partial Fisher-Yates shuffle of
//! the first `max(1, ⌊alpha · |E|⌋)` positions. Costs are usually higher than
//! greedy's; the point is structural diversity for the reactive search.

use crate::algo::algorithms::Solver;
use crate::algo::clusters::ClusterAssignment;
use crate::algo::edges::{Edge, collect_edges};
use crate::algo::solution::{Solution, connect_clusters};
use gmst_common::config::validate_alpha;
use gmst_common::{Graph, Result};
use rand::Rng;
use tracing::{debug, instrument};

pub struct Randomized;

#[derive(Debug, Clone)]
pub struct RandomizedConfig {
    /// Share of the edge list that is shuffled, in `[0, 1]`.
    pub alpha: f64,
}

impl Default for RandomizedConfig {
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}

/// Shuffles the first `max(1, ⌊alpha · len⌋)` positions in place, each
/// swapped with a uniform pick from the remaining tail. `alpha == 0` leaves
/// the order untouched. Returns the number of positions shuffled.
fn partial_shuffle<R: Rng + ?Sized>(edges: &mut [Edge], alpha: f64, rng: &mut R) -> usize {
    let len = edges.len();
    if len == 0 || alpha == 0.0 {
        return 0;
    }
    let k = ((alpha * len as f64) as usize).clamp(1, len);
    for i in 0..k {
        let r = rng.gen_range(i..len);
        edges.swap(i, r);
    }
    k
}

impl Randomized {
    /// Keeps the cheapest non-empty solution out of `runs` randomized runs.
    ///
    /// Returns an empty solution if every run came back empty.
    #[instrument(skip_all, fields(runs = runs))]
    pub fn best_of<G, R>(
        graph: &G,
        config: RandomizedConfig,
        runs: usize,
        rng: &mut R,
    ) -> Result<Solution>
    where
        G: Graph + ?Sized,
        R: Rng + ?Sized,
    {
        let mut best: Option<Solution> = None;
        let mut last = None;
        for _ in 0..runs {
            let solution = Self::solve(graph, config.clone(), rng)?;
            if !solution.is_empty()
                && best
                    .as_ref()
                    .is_none_or(|b| solution.total_cost() < b.total_cost())
            {
                best = Some(solution);
            } else {
                last = Some(solution);
            }
        }
        match best.or(last) {
            Some(solution) => Ok(solution),
            None => Ok(Solution::empty(
                ClusterAssignment::from_graph(graph)?.cluster_count(),
            )),
        }
    }
}

impl Solver for Randomized {
    type Config = RandomizedConfig;
    type Output = Solution;

    fn name() -> &'static str {
        "randomized"
    }

    fn solve<G, R>(graph: &G, config: Self::Config, rng: &mut R) -> Result<Solution>
    where
        G: Graph + ?Sized,
        R: Rng + ?Sized,
    {
        validate_alpha(config.alpha)?;

        let mut edges = collect_edges(graph)?;
        let clusters = ClusterAssignment::from_graph(graph)?;

        let shuffled = partial_shuffle(&mut edges, config.alpha, rng);

        let solution = connect_clusters(edges, &clusters);
        debug!(
            alpha = config.alpha,
            shuffled,
            clusters = clusters.cluster_count(),
            edges = solution.edge_count(),
            cost = solution.total_cost(),
            "Randomized solution"
        );
        Ok(solution)
    }
}
