// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Cluster partitioning by equal vertex weight.
//!
//! Cluster ids are dense (`0..k`) and handed out in order of first occurrence
//! while scanning vertices `1..=n`. The greedy solver's output depends on this
//! order only through tie-breaking, but keeping it fixed makes every solver
//! reproducible for a given graph and seed.

use fxhash::FxHashMap;
use gmst_common::{Graph, GmstError, Result, Vid};

/// Mapping from vertex to cluster id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterAssignment {
    /// Vertex slot -> cluster id
    cluster_of: Vec<u32>,
    cluster_count: usize,
}

/// Hash key for exact weight equality. `-0.0 == 0.0`, so both map to one key.
#[inline]
fn weight_key(weight: f64) -> u64 {
    if weight == 0.0 {
        0.0f64.to_bits()
    } else {
        weight.to_bits()
    }
}

impl ClusterAssignment {
    /// Partitions the vertices of `graph`.
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Result<Self> {
        let weights = Vid::range(graph.order())
            .map(|vid| -> Result<f64> {
                let weight = graph
                    .vertex_weight(vid)
                    .ok_or(GmstError::MissingVertexWeight { vertex: vid })?;
                if weight.is_nan() {
                    return Err(GmstError::InvalidWeight { vertex: vid });
                }
                Ok(weight)
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(Self::from_weights(&weights))
    }

    /// Partitions vertices whose weights are given in slot order.
    pub fn from_weights(weights: &[f64]) -> Self {
        let mut ids: FxHashMap<u64, u32> = FxHashMap::default();
        let cluster_of = weights
            .iter()
            .map(|&w| {
                let next = ids.len() as u32;
                *ids.entry(weight_key(w)).or_insert(next)
            })
            .collect();

        Self {
            cluster_of,
            cluster_count: ids.len(),
        }
    }

    /// Cluster id of `vid`.
    #[inline]
    pub fn cluster_of(&self, vid: Vid) -> u32 {
        self.cluster_of[vid.slot()]
    }

    /// Number of distinct clusters, `k`.
    #[inline]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Edges in a spanning selection: `k - 1`, or 0 for an empty graph.
    #[inline]
    pub fn spanning_edge_count(&self) -> usize {
        self.cluster_count.saturating_sub(1)
    }

    pub fn vertex_count(&self) -> usize {
        self.cluster_of.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::TestGraph;

    /// Pairwise scan over earlier vertices, reusing the first match.
    fn quadratic_reference(weights: &[f64]) -> Vec<u32> {
        let mut ids = vec![0u32; weights.len()];
        let mut next = 0;
        for i in 0..weights.len() {
            match (0..i).find(|&j| weights[j] == weights[i]) {
                Some(j) => ids[i] = ids[j],
                None => {
                    ids[i] = next;
                    next += 1;
                }
            }
        }
        ids
    }

    #[test]
    fn test_first_occurrence_order() {
        let clusters = ClusterAssignment::from_weights(&[20.0, 10.0, 20.0, 30.0, 10.0]);
        assert_eq!(clusters.cluster_count(), 3);
        let ids: Vec<u32> = Vid::range(5).map(|v| clusters.cluster_of(v)).collect();
        assert_eq!(ids, vec![0, 1, 0, 2, 1]);
        assert_eq!(clusters.spanning_edge_count(), 2);
    }

    #[test]
    fn test_matches_pairwise_scan() {
        let weights = [3.0, -0.0, 1.5, 0.0, 3.0, 1.5, 7.25, -2.0];
        let clusters = ClusterAssignment::from_weights(&weights);
        let ids: Vec<u32> = Vid::range(weights.len())
            .map(|v| clusters.cluster_of(v))
            .collect();
        assert_eq!(ids, quadratic_reference(&weights));
    }

    #[test]
    fn test_no_tolerance() {
        let clusters = ClusterAssignment::from_weights(&[0.1 + 0.2, 0.3]);
        assert_eq!(clusters.cluster_count(), 2);
    }

    #[test]
    fn test_empty() {
        let clusters = ClusterAssignment::from_weights(&[]);
        assert_eq!(clusters.cluster_count(), 0);
        assert_eq!(clusters.spanning_edge_count(), 0);
    }

    #[test]
    fn test_nan_vertex_weight_is_rejected() {
        let g = TestGraph::directed(&[1.0, f64::NAN, 1.0]);
        let err = ClusterAssignment::from_graph(&g).unwrap_err();
        assert!(matches!(err, GmstError::InvalidWeight { vertex } if vertex == Vid::new(2)));
    }
}
