// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gmst_algo::Strategy;
use gmst_common::{GraphDescription, SolverConfig};
use gmst_store::{StorageKind, load_graph};
use std::path::PathBuf;
use std::time::Instant;

pub mod report;

#[derive(Parser)]
#[command(name = "gmst")]
#[command(about = "GMST solver over vertex-weight clusters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print order, degree, flags and completeness of a graph
    Describe {
        /// Graph file
        file: PathBuf,
        /// Storage backend (matrix or list)
        #[arg(long, short, default_value = "matrix")]
        storage: StorageKind,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Solve the GMST of a graph
    Solve {
        /// Graph file
        file: PathBuf,
        /// Storage backend (matrix or list)
        #[arg(long, short, default_value = "matrix")]
        storage: StorageKind,
        /// Solver (greedy, randomized or reactive)
        #[arg(long, short, default_value = "greedy")]
        algorithm: Strategy,
        /// Shuffled share of the edge list for the randomized solver
        #[arg(long, default_value_t = 0.5)]
        alpha: f64,
        /// Reactive rounds
        #[arg(long, default_value_t = 50)]
        rounds: usize,
        /// Initial greedy probability of the reactive solver
        #[arg(long, default_value_t = 0.5)]
        initial_probability: f64,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Describe {
            file,
            storage,
            format,
        } => {
            let graph = load_graph(&file, storage)?;
            let description = GraphDescription::of(graph.as_ref());
            match format {
                OutputFormat::Table => report::print_description(&description),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&description)?)
                }
            }
        }
        Commands::Solve {
            file,
            storage,
            algorithm,
            alpha,
            rounds,
            initial_probability,
            seed,
            format,
        } => {
            let config = SolverConfig {
                alpha,
                rounds,
                initial_probability,
                seed,
            };
            config.validate()?;

            let graph = load_graph(&file, storage)?;
            tracing::info!(%algorithm, %storage, ?seed, "Solving");

            let started = Instant::now();
            let (solution, reactive) = algorithm.run_detailed(graph.as_ref(), &config)?;
            let elapsed = started.elapsed();

            match format {
                OutputFormat::Table => {
                    report::print_solution(algorithm, &solution, reactive.as_ref(), elapsed)
                }
                OutputFormat::Json => {
                    let value = report::solution_json(
                        algorithm,
                        storage,
                        &solution,
                        reactive.as_ref(),
                        elapsed,
                    );
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
            }
        }
    }

    Ok(())
}
