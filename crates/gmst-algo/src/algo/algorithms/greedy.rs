// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Greedy GMST.
//!
//! Kruskal's algorithm with clusters in place of vertices: edges are sorted by
//! weight (stable, so ties keep scan order) and each edge joining two clusters
//! not yet connected is taken. The exchange argument behind Kruskal carries
//! over to the contracted cluster graph, so the result has minimum cost.

use crate::algo::algorithms::Solver;
use crate::algo::clusters::ClusterAssignment;
use crate::algo::edges::collect_edges;
use crate::algo::solution::{Solution, connect_clusters};
use gmst_common::{Graph, Result};
use rand::Rng;
use tracing::debug;

pub struct Greedy;

#[derive(Debug, Clone, Default)]
pub struct GreedyConfig {}

impl Greedy {
    /// Runs the greedy solver; no random source is needed.
    pub fn run<G: Graph + ?Sized>(graph: &G) -> Result<Solution> {
        let mut edges = collect_edges(graph)?;
        let clusters = ClusterAssignment::from_graph(graph)?;

        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let solution = connect_clusters(edges, &clusters);
        debug!(
            clusters = clusters.cluster_count(),
            edges = solution.edge_count(),
            cost = solution.total_cost(),
            "Greedy solution"
        );
        Ok(solution)
    }
}

impl Solver for Greedy {
    type Config = GreedyConfig;
    type Output = Solution;

    fn name() -> &'static str {
        "greedy"
    }

    fn solve<G, R>(graph: &G, _config: Self::Config, _rng: &mut R) -> Result<Solution>
    where
        G: Graph + ?Sized,
        R: Rng + ?Sized,
    {
        Self::run(graph)
    }
}
