// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! GMST Solver Benchmarks
//!
//! Run with:
//! cargo bench --bench solver_benchmarks

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gmst_algo::{
    Greedy, Randomized, RandomizedConfig, Reactive, ReactiveConfig, Solver, rng_from_seed,
};
use gmst_common::Vid;
use gmst_store::{AdjacencyList, GraphStorage};
use rand::Rng;
use std::env;

#[derive(Clone, Debug)]
struct SolverBenchConfig {
    nodes: usize,
    edges_per_node: usize,
    clusters: usize,
}

impl SolverBenchConfig {
    fn from_env() -> Self {
        let read = |key: &str, default: usize| {
            env::var(key)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default)
        };
        Self {
            nodes: read("BENCH_NODES", 1000),
            edges_per_node: read("BENCH_EDGES_PER_NODE", 5),
            clusters: read("BENCH_CLUSTERS", 50),
        }
    }

    fn label(&self) -> String {
        format!(
            "{}n_{}deg_{}c",
            self.nodes, self.edges_per_node, self.clusters
        )
    }
}

fn random_graph(config: &SolverBenchConfig) -> AdjacencyList {
    let mut rng = rng_from_seed(Some(0xB3AC));
    let mut graph = AdjacencyList::with_order(config.nodes, false, true, true).unwrap();
    for vid in Vid::range(config.nodes) {
        let cluster = rng.gen_range(0..config.clusters) as f64;
        graph.set_vertex_weight(vid, cluster).unwrap();
    }
    for u in Vid::range(config.nodes) {
        for _ in 0..config.edges_per_node {
            let v = Vid::new(rng.gen_range(1..=config.nodes as u32));
            let w = rng.gen_range(1..1000) as f64;
            graph.add_edge(u, v, w).unwrap();
        }
    }
    graph
}

fn bench_solvers(c: &mut Criterion) {
    let config = SolverBenchConfig::from_env();
    let graph = random_graph(&config);
    let label = config.label();

    let mut group = c.benchmark_group("gmst");
    group.bench_with_input(BenchmarkId::new("greedy", &label), &graph, |b, g| {
        b.iter(|| Greedy::run(g).unwrap())
    });
    group.bench_with_input(BenchmarkId::new("randomized", &label), &graph, |b, g| {
        let mut rng = rng_from_seed(Some(1));
        b.iter(|| Randomized::solve(g, RandomizedConfig::default(), &mut rng).unwrap())
    });
    group.sample_size(10);
    group.bench_with_input(BenchmarkId::new("reactive", &label), &graph, |b, g| {
        let mut rng = rng_from_seed(Some(2));
        b.iter(|| Reactive::solve(g, ReactiveConfig::default(), &mut rng).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
