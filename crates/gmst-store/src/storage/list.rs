// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use super::{
    GraphStorage, check_edge_weight, check_order, check_vertex, check_weight, filled,
};
use gmst_common::{Graph, Neighbor, Result, Vid};

/// Adjacency list keeping arcs in insertion order.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    directed: bool,
    vertex_weighted: bool,
    edge_weighted: bool,
    vertex_weights: Vec<f64>,
    /// Outgoing arcs per vertex slot
    adjacency: Vec<Vec<Neighbor>>,
}

impl AdjacencyList {
    /// Total number of stored arcs (undirected edges count twice, self-loops once).
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(|arcs| arcs.len()).sum()
    }
}

impl GraphStorage for AdjacencyList {
    fn with_order(
        order: usize,
        directed: bool,
        vertex_weighted: bool,
        edge_weighted: bool,
    ) -> Result<Self> {
        check_order(order)?;
        Ok(Self {
            directed,
            vertex_weighted,
            edge_weighted,
            vertex_weights: filled(order, 0.0, order)?,
            adjacency: filled(order, Vec::new(), order)?,
        })
    }

    fn set_vertex_weight(&mut self, vid: Vid, weight: f64) -> Result<()> {
        check_vertex(vid, self.order())?;
        check_weight(vid, weight)?;
        self.vertex_weights[vid.slot()] = weight;
        Ok(())
    }

    fn add_edge(&mut self, src: Vid, dst: Vid, weight: f64) -> Result<()> {
        check_vertex(src, self.order())?;
        check_vertex(dst, self.order())?;
        check_edge_weight(src, dst, weight)?;
        self.adjacency[src.slot()].push(Neighbor::new(dst, weight));
        if !self.directed && src != dst {
            self.adjacency[dst.slot()].push(Neighbor::new(src, weight));
        }
        Ok(())
    }
}

impl Graph for AdjacencyList {
    fn order(&self) -> usize {
        self.adjacency.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_vertex_weighted(&self) -> bool {
        self.vertex_weighted
    }

    fn is_edge_weighted(&self) -> bool {
        self.edge_weighted
    }

    fn vertex_weight(&self, vid: Vid) -> Option<f64> {
        self.vertex_weights.get(vid.slot()).copied()
    }

    fn neighbors(&self, vid: Vid) -> Vec<Neighbor> {
        self.adjacency
            .get(vid.slot())
            .cloned()
            .unwrap_or_default()
    }

    fn edge_exists(&self, src: Vid, dst: Vid) -> bool {
        self.adjacency
            .get(src.slot())
            .is_some_and(|arcs| arcs.iter().any(|n| n.destination == dst))
    }
}
