// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use super::{
    GraphStorage, check_edge_weight, check_order, check_vertex, check_weight, filled,
};
use gmst_common::GmstError;
use gmst_common::{Graph, Neighbor, Result, Vid};

/// Dense adjacency matrix.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    order: usize,
    directed: bool,
    vertex_weighted: bool,
    edge_weighted: bool,
    vertex_weights: Vec<f64>,
    /// Row-major `order × order` cells; `None` means no arc.
    cells: Vec<Option<f64>>,
}

impl AdjacencyMatrix {
    #[inline]
    fn cell(&self, src: Vid, dst: Vid) -> Option<f64> {
        self.cells[src.slot() * self.order + dst.slot()]
    }

    #[inline]
    fn set_cell(&mut self, src: Vid, dst: Vid, weight: f64) {
        let idx = src.slot() * self.order + dst.slot();
        self.cells[idx] = Some(weight);
    }
}

impl GraphStorage for AdjacencyMatrix {
    fn with_order(
        order: usize,
        directed: bool,
        vertex_weighted: bool,
        edge_weighted: bool,
    ) -> Result<Self> {
        check_order(order)?;
        let cell_count = order.checked_mul(order).ok_or_else(|| {
            GmstError::invalid_argument("order", format!("{order}x{order} matrix overflows"))
        })?;
        // cells first: the larger buffer fails before anything is touched
        let cells = filled(cell_count, None, order)?;
        Ok(Self {
            order,
            directed,
            vertex_weighted,
            edge_weighted,
            vertex_weights: filled(order, 0.0, order)?,
            cells,
        })
    }

    fn set_vertex_weight(&mut self, vid: Vid, weight: f64) -> Result<()> {
        check_vertex(vid, self.order)?;
        check_weight(vid, weight)?;
        self.vertex_weights[vid.slot()] = weight;
        Ok(())
    }

    fn add_edge(&mut self, src: Vid, dst: Vid, weight: f64) -> Result<()> {
        check_vertex(src, self.order)?;
        check_vertex(dst, self.order)?;
        check_edge_weight(src, dst, weight)?;
        self.set_cell(src, dst, weight);
        if !self.directed {
            self.set_cell(dst, src, weight);
        }
        Ok(())
    }
}

impl Graph for AdjacencyMatrix {
    fn order(&self) -> usize {
        self.order
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
        if vid.slot() >= self.order {
            return Vec::new();
        }
        let row = &self.cells[vid.slot() * self.order..(vid.slot() + 1) * self.order];
        row.iter()
            .enumerate()
            .filter_map(|(slot, cell)| cell.map(|w| Neighbor::new(Vid::from_slot(slot), w)))
            .collect()
    }

    fn edge_exists(&self, src: Vid, dst: Vid) -> bool {
        src.slot() < self.order && dst.slot() < self.order && self.cell(src, dst).is_some()
    }
}
