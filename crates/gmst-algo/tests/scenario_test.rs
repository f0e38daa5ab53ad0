// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! End-to-end solver scenarios over both storage backends.

use anyhow::Result;
use gmst_algo::{
    Greedy, Randomized, RandomizedConfig, Reactive, ReactiveConfig, Solver, Strategy,
    rng_from_seed, solve_greedy,
};
use gmst_common::{Graph, SolverConfig, Vid};
use gmst_store::{AdjacencyList, AdjacencyMatrix, parse_graph};

fn both_storages(input: &str) -> Result<Vec<Box<dyn Graph>>> {
    let matrix: Box<dyn Graph> = Box::new(parse_graph::<AdjacencyMatrix>(input)?);
    let list: Box<dyn Graph> = Box::new(parse_graph::<AdjacencyList>(input)?);
    Ok(vec![matrix, list])
}

#[test]
fn test_triangle_with_distinct_weights() -> Result<()> {
    let input = "3 0 1 1\n1 2 3\n1 2 1\n2 3 2\n1 3 3\n";
    for graph in both_storages(input)? {
        let solution = solve_greedy(graph.as_ref())?;
        assert_eq!(solution.edge_count(), 2);
        assert_eq!(solution.total_cost(), 3.0);
        assert!(solution.is_spanning());
    }
    Ok(())
}

#[test]
fn test_two_weight_classes_need_one_edge() -> Result<()> {
    let input = "4 0 1 1\n10 10 20 20\n1 2 1\n3 4 1\n1 3 5\n2 4 8\n";
    for graph in both_storages(input)? {
        let solution = solve_greedy(graph.as_ref())?;
        assert_eq!(solution.edge_count(), 1);
        let edge = solution.edges()[0];
        assert_eq!(edge.weight, 5.0);
        assert_eq!((edge.origin, edge.destination), (Vid::new(1), Vid::new(3)));
    }
    Ok(())
}

#[test]
fn test_edgeless_graph_yields_empty_solutions() -> Result<()> {
    let input = "3 0 1 0\n1 2 3\n";
    for graph in both_storages(input)? {
        let config = SolverConfig {
            seed: Some(4),
            ..Default::default()
        };
        for strategy in Strategy::all() {
            let solution = strategy.run(graph.as_ref(), &config)?;
            assert!(solution.is_empty(), "{strategy} returned edges");
            assert_eq!(solution.total_cost(), 0.0);
            assert_eq!(solution.cluster_count(), 3);
            assert!(!solution.is_spanning());
        }
    }
    Ok(())
}

#[test]
fn test_disconnected_cluster_graph_is_partial() -> Result<()> {
    // clusters {1}, {2}, {3,4}; nothing reaches vertex 2
    let input = "4 0 1 1\n1 2 3 3\n1 3 4\n3 4 1\n";
    let graph: AdjacencyList = parse_graph(input)?;
    let solution = Greedy::run(&graph)?;
    assert_eq!(solution.edge_count(), 1);
    assert_eq!(solution.cluster_count(), 3);
    assert!(!solution.is_spanning());
    Ok(())
}

#[test]
fn test_unweighted_vertices_form_one_cluster() -> Result<()> {
    let graph: AdjacencyMatrix = parse_graph("3 0 0 1\n1 2 4\n2 3 1\n")?;
    let solution = solve_greedy(&graph)?;
    assert!(solution.is_empty());
    assert!(solution.is_spanning());
    Ok(())
}

#[test]
fn test_reactive_not_worse_than_baselines() -> Result<()> {
    let input = "\
6 0 1 1
1 2 3 1 2 4
1 2 9
1 3 2
2 3 4
3 4 1
4 5 3
5 6 8
2 6 5
1 6 7
";
    let graph: AdjacencyList = parse_graph(input)?;
    let greedy = Greedy::run(&graph)?;
    let randomized = Randomized::best_of(
        &graph,
        RandomizedConfig::default(),
        50,
        &mut rng_from_seed(Some(8)),
    )?;
    let baseline = greedy.total_cost().min(randomized.total_cost());

    let result = Reactive::solve(
        &graph,
        ReactiveConfig::default(),
        &mut rng_from_seed(Some(8)),
    )?;
    assert!(result.greedy_rounds > 0);
    assert!(result.best_cost <= baseline);
    assert_eq!(result.solution.total_cost(), result.best_cost);
    Ok(())
}

#[test]
fn test_directed_graph_collects_each_arc() -> Result<()> {
    // 2->1 is the only cheap arc between the two classes
    let graph: AdjacencyList = parse_graph("3 1 1 1\n1 2 2\n1 2 6\n2 1 1\n3 1 4\n")?;
    let solution = solve_greedy(&graph)?;
    assert_eq!(solution.edge_count(), 1);
    assert_eq!(solution.edges()[0].origin, Vid::new(2));
    assert_eq!(solution.total_cost(), 1.0);
    Ok(())
}

#[test]
fn test_solution_serializes_to_json() -> Result<()> {
    let graph: AdjacencyList = parse_graph("2 0 1 1\n1 2\n1 2 3\n")?;
    let solution = solve_greedy(&graph)?;
    let json = serde_json::to_value(&solution)?;
    assert_eq!(json["total_cost"], 3.0);
    assert_eq!(json["edges"][0]["origin"], 1);
    assert_eq!(json["edges"][0]["destination"], 2);
    Ok(())
}
