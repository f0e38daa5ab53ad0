// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use colored::*;
use gmst_algo::{ReactiveResult, Solution, Strategy};
use gmst_common::GraphDescription;
use gmst_store::StorageKind;
use prettytable::{Cell, Row, Table};
use serde_json::{Value, json};
use std::time::Duration;

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn print_description(desc: &GraphDescription) {
    let mut table = Table::new();
    let rows = [
        ("Degree", desc.degree.to_string()),
        ("Order", desc.order.to_string()),
        ("Directed", yes_no(desc.directed).to_string()),
        ("Vertex weighted", yes_no(desc.vertex_weighted).to_string()),
        ("Edge weighted", yes_no(desc.edge_weighted).to_string()),
        ("Complete", yes_no(desc.complete).to_string()),
    ];
    for (name, value) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name).style_spec("b"),
            Cell::new(&value),
        ]));
    }
    table.printstd();
}

pub fn print_solution(
    strategy: Strategy,
    solution: &Solution,
    reactive: Option<&ReactiveResult>,
    elapsed: Duration,
) {
    println!(
        "{} {} ({} edges)",
        "GMST".bold(),
        strategy.name().cyan(),
        solution.edge_count()
    );

    if !solution.is_empty() {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Origin").style_spec("bf"),
            Cell::new("Destination").style_spec("bf"),
            Cell::new("Weight").style_spec("bf"),
        ]));
        for edge in solution.edges() {
            table.add_row(Row::new(vec![
                Cell::new(&edge.origin.to_string()),
                Cell::new(&edge.destination.to_string()),
                Cell::new(&edge.weight.to_string()),
            ]));
        }
        table.printstd();
    }

    println!("Total cost: {}", solution.total_cost());
    println!("Elapsed: {:.6}s", elapsed.as_secs_f64());

    if let Some(report) = reactive {
        println!(
            "Reactive: {} greedy / {} randomized rounds, {} / {} failures, final p = {:.3}",
            report.greedy_rounds,
            report.random_rounds,
            report.failures_greedy,
            report.failures_random,
            report.greedy_probability
        );
    }

    if solution.is_empty() && solution.cluster_count() > 1 {
        eprintln!("{} no solution found", "Warning:".yellow());
    } else if !solution.is_spanning() {
        eprintln!(
            "{} only {} of {} cluster links found; the cluster graph is disconnected",
            "Warning:".yellow(),
            solution.edge_count(),
            solution.cluster_count() - 1
        );
    }
}

pub fn solution_json(
    strategy: Strategy,
    storage: StorageKind,
    solution: &Solution,
    reactive: Option<&ReactiveResult>,
    elapsed: Duration,
) -> Value {
    let mut value = json!({
        "algorithm": strategy.name(),
        "storage": storage.to_string(),
        "edge_count": solution.edge_count(),
        "spanning": solution.is_spanning(),
        "solution": solution,
        "elapsed_secs": elapsed.as_secs_f64(),
    });
    if let Some(report) = reactive {
        value["reactive"] = json!({
            "best_cost": report.best_cost.is_finite().then_some(report.best_cost),
            "greedy_probability": report.greedy_probability,
            "failures_greedy": report.failures_greedy,
            "failures_random": report.failures_random,
            "greedy_rounds": report.greedy_rounds,
            "random_rounds": report.random_rounds,
        });
    }
    value
}
