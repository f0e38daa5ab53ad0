// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use gmst_common::{Graph, Neighbor, Vid};

/// In-memory adjacency-list graph for unit tests.
pub struct TestGraph {
    directed: bool,
    weights: Vec<Option<f64>>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl TestGraph {
    pub fn undirected(weights: &[f64]) -> Self {
        Self::new(false, weights)
    }

    pub fn directed(weights: &[f64]) -> Self {
        Self::new(true, weights)
    }

    fn new(directed: bool, weights: &[f64]) -> Self {
        Self {
            directed,
            weights: weights.iter().copied().map(Some).collect(),
            adjacency: vec![Vec::new(); weights.len()],
        }
    }

    /// Adds an edge; undirected edges are visible from both endpoints.
    pub fn edge(mut self, u: u32, v: u32, weight: f64) -> Self {
        let (u, v) = (Vid::new(u), Vid::new(v));
        self.adjacency[u.slot()].push(Neighbor::new(v, weight));
        if !self.directed && u != v {
            self.adjacency[v.slot()].push(Neighbor::new(u, weight));
        }
        self
    }

    /// Adds a one-way arc without checking `v`, so it may point past `order`.
    pub fn dangling_arc(mut self, u: u32, v: u32, weight: f64) -> Self {
        self.adjacency[Vid::new(u).slot()].push(Neighbor::new(Vid::new(v), weight));
        self
    }

    /// Drops the weight of vertex `v` so lookups fail.
    pub fn without_weight(mut self, v: u32) -> Self {
        self.weights[Vid::new(v).slot()] = None;
        self
    }
}

impl Graph for TestGraph {
    fn order(&self) -> usize {
        self.weights.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_vertex_weighted(&self) -> bool {
        true
    }

    fn is_edge_weighted(&self) -> bool {
        true
    }

    fn vertex_weight(&self, vid: Vid) -> Option<f64> {
        self.weights.get(vid.slot()).copied().flatten()
    }

    fn neighbors(&self, vid: Vid) -> Vec<Neighbor> {
        self.adjacency[vid.slot()].clone()
    }

    fn edge_exists(&self, src: Vid, dst: Vid) -> bool {
        self.adjacency[src.slot()]
            .iter()
            .any(|n| n.destination == dst)
    }
}
