// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Edge collection.
//!
//! One pass over the adjacency of vertices `1..=n` materializes the candidate
//! edges. Undirected storages report every edge from both endpoints, so only
//! the `origin <= destination` direction is kept. Parallel arcs are kept as
//! separate edges.

use gmst_common::{Graph, GmstError, Result, Vid};
use serde::Serialize;

/// Candidate or selected edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub origin: Vid,
    pub destination: Vid,
    pub weight: f64,
}

impl Edge {
    pub fn new(origin: Vid, destination: Vid, weight: f64) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }
}

/// Collects every eligible edge of `graph` in scan order.
///
/// Fails, yielding nothing, if a vertex has no weight or an arc points outside
/// `1..=order`.
pub fn collect_edges<G: Graph + ?Sized>(graph: &G) -> Result<Vec<Edge>> {
    let n = graph.order();
    let directed = graph.is_directed();
    let mut edges = Vec::new();

    for u in Vid::range(n) {
        if graph.vertex_weight(u).is_none() {
            return Err(GmstError::MissingVertexWeight { vertex: u });
        }
        for neighbor in graph.neighbors(u) {
            let v = neighbor.destination;
            if v.slot() >= n {
                return Err(GmstError::VertexOutOfRange {
                    vertex: v.as_u32(),
                    order: n,
                });
            }
            if !directed && u > v {
                continue;
            }
            edges.push(Edge::new(u, v, neighbor.weight));
        }
    }

    Ok(edges)
}
