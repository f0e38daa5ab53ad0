// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{
    Greedy, GreedyConfig, Randomized, RandomizedConfig, Reactive, ReactiveConfig, ReactiveResult,
    Solver,
};
pub use algo::{
    ClusterAssignment, DisjointSets, Edge, Solution, Strategy, collect_edges, rng_from_seed,
    solve_greedy, solve_randomized, solve_reactive,
};
