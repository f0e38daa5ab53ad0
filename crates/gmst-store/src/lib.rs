// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod loader;
pub mod storage;

pub use loader::{GraphHeader, load_graph, load_graph_as, parse_graph};
pub use storage::{AdjacencyList, AdjacencyMatrix, GraphStorage, MAX_ORDER, StorageKind};
