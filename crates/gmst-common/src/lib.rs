// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod core {
    pub mod id;
}

pub mod graph {
    pub mod weighted_graph;
}

// Re-exports for convenience
pub use crate::api::error::{GmstError, Result};
pub use crate::config::SolverConfig;
pub use crate::core::id::Vid;
pub use crate::graph::weighted_graph::{Graph, GraphDescription, Neighbor};
