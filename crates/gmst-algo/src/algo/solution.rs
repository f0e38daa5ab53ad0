// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::clusters::ClusterAssignment;
use crate::algo::edges::Edge;
use crate::algo::union_find::DisjointSets;
use serde::Serialize;

/// Edges selected by a solver, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    edges: Vec<Edge>,
    total_cost: f64,
    /// Number of clusters in the graph the solution was built for
    cluster_count: usize,
}

impl Solution {
    /// Solution with no edges.
    pub fn empty(cluster_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            total_cost: 0.0,
            cluster_count,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of selected edge weights.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether all clusters ended up in one component (`k - 1` edges).
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.cluster_count.saturating_sub(1)
    }

    fn push(&mut self, edge: Edge) {
        self.total_cost += edge.weight;
        self.edges.push(edge);
    }
}

/// Kruskal sweep over clusters.
///
/// Takes edges in the given order and keeps each one whose endpoints lie in
/// clusters not yet joined, stopping at `k - 1` edges.
pub(crate) fn connect_clusters<I>(edges: I, clusters: &ClusterAssignment) -> Solution
where
    I: IntoIterator<Item = Edge>,
{
    let target = clusters.spanning_edge_count();
    let mut solution = Solution::empty(clusters.cluster_count());
    if target == 0 {
        return solution;
    }

    let mut forest = DisjointSets::new(clusters.cluster_count());
    for edge in edges {
        let cu = clusters.cluster_of(edge.origin);
        let cv = clusters.cluster_of(edge.destination);
        if forest.union(cu, cv) {
            solution.push(edge);
            if solution.edge_count() == target {
                break;
            }
        }
    }
    solution
}
