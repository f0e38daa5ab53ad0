// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph storages.
//!
//! Two interchangeable backends implement [`Graph`]:
//!
//! - [`AdjacencyMatrix`]: dense `n × n` weight cells. O(1) `edge_exists`,
//!   O(n) neighbor scan. Repeated arcs overwrite each other.
//! - [`AdjacencyList`]: per-vertex neighbor vectors in insertion order.
//!   O(degree) neighbor scan, parallel arcs are kept.
//!
//! Undirected edges are stored in both directions, a self-loop once.

mod list;
mod matrix;

pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;

use gmst_common::{Graph, GmstError, Result, Vid};
use std::fmt;
use std::str::FromStr;

/// Which backend to build a graph into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    #[default]
    Matrix,
    List,
}

impl FromStr for StorageKind {
    type Err = GmstError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "matrix" | "m" => Ok(StorageKind::Matrix),
            "list" | "l" => Ok(StorageKind::List),
            other => Err(GmstError::invalid_argument(
                "storage",
                format!("expected 'matrix' or 'list', got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Matrix => write!(f, "matrix"),
            StorageKind::List => write!(f, "list"),
        }
    }
}

/// Mutable side of a storage, used by the loader.
pub trait GraphStorage: Graph + Sized {
    /// Creates a graph with `order` vertices, all of weight 0, and no arcs.
    ///
    /// Fails with `InvalidArgument` when `order` exceeds the `Vid` range or
    /// the backing buffers cannot be allocated.
    fn with_order(
        order: usize,
        directed: bool,
        vertex_weighted: bool,
        edge_weighted: bool,
    ) -> Result<Self>;

    /// Sets the weight of an existing vertex.
    fn set_vertex_weight(&mut self, vid: Vid, weight: f64) -> Result<()>;

    /// Inserts an arc (both directions for undirected graphs).
    fn add_edge(&mut self, src: Vid, dst: Vid, weight: f64) -> Result<()>;
}

/// Largest vertex count addressable by `Vid`.
pub const MAX_ORDER: usize = u32::MAX as usize;

fn order_too_large(order: usize) -> GmstError {
    GmstError::invalid_argument(
        "order",
        format!("{order} vertices cannot be stored (maximum {MAX_ORDER})"),
    )
}

pub(crate) fn check_order(order: usize) -> Result<()> {
    if order > MAX_ORDER {
        return Err(order_too_large(order));
    }
    Ok(())
}

/// `vec![value; len]` that reports allocation failure instead of aborting.
pub(crate) fn filled<T: Clone>(len: usize, value: T, order: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| order_too_large(order))?;
    buf.resize(len, value);
    Ok(buf)
}

pub(crate) fn check_vertex(vid: Vid, order: usize) -> Result<()> {
    if vid.slot() >= order {
        return Err(GmstError::VertexOutOfRange {
            vertex: vid.as_u32(),
            order,
        });
    }
    Ok(())
}

pub(crate) fn check_edge_weight(src: Vid, dst: Vid, weight: f64) -> Result<()> {
    if !weight.is_finite() {
        return Err(GmstError::invalid_argument(
            "weight",
            format!("edge {src}-{dst} has non-finite weight {weight}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_weight(vid: Vid, weight: f64) -> Result<()> {
    if !weight.is_finite() {
        return Err(GmstError::InvalidWeight { vertex: vid });
    }
    Ok(())
}
