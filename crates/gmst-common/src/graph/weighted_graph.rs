// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Vertex- and edge-weighted graph view consumed by the solvers.
//!
//! Storage backends (adjacency matrix, adjacency list) implement [`Graph`];
//! algorithms only ever see this trait. Structural queries common to every
//! storage (degree, completeness) are provided methods built on top of
//! `neighbors` and `edge_exists`.

use crate::core::id::Vid;
use serde::Serialize;

/// Outgoing arc as reported by [`Graph::neighbors`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub destination: Vid,
    pub weight: f64,
}

impl Neighbor {
    pub fn new(destination: Vid, weight: f64) -> Self {
        Self {
            destination,
            weight,
        }
    }
}

/// Read-only graph with weighted vertices and arcs.
///
/// Vertices are the dense range `1..=order()`. For undirected graphs every
/// edge is reported from both endpoints.
pub trait Graph {
    /// Number of vertices.
    fn order(&self) -> usize;

    fn is_directed(&self) -> bool;

    fn is_vertex_weighted(&self) -> bool;

    fn is_edge_weighted(&self) -> bool;

    /// Weight of `vid`, or `None` if the vertex is absent.
    fn vertex_weight(&self, vid: Vid) -> Option<f64>;

    /// Arcs leaving `vid` (incident arcs for undirected graphs), in storage order.
    fn neighbors(&self, vid: Vid) -> Vec<Neighbor>;

    fn edge_exists(&self, src: Vid, dst: Vid) -> bool;

    /// Maximum vertex degree. Directed graphs count both out- and in-arcs.
    fn degree(&self) -> usize {
        let n = self.order();
        let mut max_degree = 0;
        for vid in Vid::range(n) {
            let mut degree = self.neighbors(vid).len();
            if self.is_directed() {
                degree += Vid::range(n)
                    .filter(|&other| self.edge_exists(other, vid))
                    .count();
            }
            max_degree = max_degree.max(degree);
        }
        max_degree
    }

    /// Whether every ordered pair of distinct vertices is joined.
    ///
    /// For undirected graphs an arc in either direction is enough.
    fn is_complete(&self) -> bool {
        let n = self.order();
        for i in Vid::range(n) {
            for j in Vid::range(n) {
                if i == j || self.edge_exists(i, j) {
                    continue;
                }
                if self.is_directed() || !self.edge_exists(j, i) {
                    return false;
                }
            }
        }
        true
    }
}

/// Summary printed by `gmst describe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
    pub degree: usize,
    pub order: usize,
    pub directed: bool,
    pub vertex_weighted: bool,
    pub edge_weighted: bool,
    pub complete: bool,
}

impl GraphDescription {
    pub fn of<G: Graph + ?Sized>(graph: &G) -> Self {
        Self {
            degree: graph.degree(),
            order: graph.order(),
            directed: graph.is_directed(),
            vertex_weighted: graph.is_vertex_weighted(),
            edge_weighted: graph.is_edge_weighted(),
            complete: graph.is_complete(),
        }
    }
}
