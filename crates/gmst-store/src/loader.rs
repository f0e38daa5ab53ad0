// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph file loader.
//!
//! The format is a stream of whitespace-separated tokens:
//!
//! ```text
//! <order> <directed 0|1> <vertex_weighted 0|1> <edge_weighted 0|1>
//! <w_1> ... <w_order>          (only when vertex_weighted)
//! <u> <v> [<w>]                (until end of file; <w> only when edge_weighted)
//! ```
//!
//! Vertex weights default to 0 when absent, which puts every vertex in a
//! single cluster. Edge weights default to 0.

use crate::storage::{AdjacencyList, AdjacencyMatrix, GraphStorage, MAX_ORDER, StorageKind};
use gmst_common::{Graph, GmstError, Result, Vid};
use std::path::Path;
use tracing::{debug, info, instrument};

/// First line of a graph file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphHeader {
    pub order: usize,
    pub directed: bool,
    pub vertex_weighted: bool,
    pub edge_weighted: bool,
}

/// Token cursor that remembers the line each token came from.
struct Tokens<'a> {
    tokens: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let tokens = input
            .lines()
            .enumerate()
            .flat_map(|(idx, line)| line.split_whitespace().map(move |tok| (idx + 1, tok)))
            .collect();
        Self { tokens, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Line of the next token, or of the last one at end of input.
    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |(line, _)| *line)
    }

    fn next(&mut self, what: &str) -> Result<(usize, &'a str)> {
        let tok = self.tokens.get(self.pos).copied().ok_or_else(|| GmstError::Parse {
            message: format!("unexpected end of file, expected {what}"),
            line: self.line(),
        })?;
        self.pos += 1;
        Ok(tok)
    }

    fn parse<T: std::str::FromStr>(&mut self, what: &str) -> Result<(usize, T)> {
        let (line, tok) = self.next(what)?;
        let value = tok.parse::<T>().map_err(|_| GmstError::Parse {
            message: format!("invalid {what} '{tok}'"),
            line,
        })?;
        Ok((line, value))
    }

    fn flag(&mut self, what: &str) -> Result<bool> {
        match self.next(what)? {
            (_, "0") => Ok(false),
            (_, "1") => Ok(true),
            (line, tok) => Err(GmstError::Parse {
                message: format!("{what} must be 0 or 1, got '{tok}'"),
                line,
            }),
        }
    }

    fn weight(&mut self, what: &str) -> Result<f64> {
        let (line, w) = self.parse::<f64>(what)?;
        if !w.is_finite() {
            return Err(GmstError::Parse {
                message: format!("{what} must be a finite number, got {w}"),
                line,
            });
        }
        Ok(w)
    }

    fn vertex(&mut self, order: usize, what: &str) -> Result<Vid> {
        let (line, id) = self.parse::<u32>(what)?;
        if id == 0 || id as usize > order {
            return Err(GmstError::Parse {
                message: format!("{what} {id} is outside 1..={order}"),
                line,
            });
        }
        Ok(Vid::new(id))
    }
}

/// Parses graph text into storage `S`.
pub fn parse_graph<S: GraphStorage>(input: &str) -> Result<S> {
    let mut tokens = Tokens::new(input);

    let (line, order) = tokens.parse::<usize>("vertex count")?;
    if order > MAX_ORDER {
        return Err(GmstError::Parse {
            message: format!("vertex count {order} exceeds {MAX_ORDER}"),
            line,
        });
    }
    let header = GraphHeader {
        order,
        directed: tokens.flag("directed flag")?,
        vertex_weighted: tokens.flag("vertex-weighted flag")?,
        edge_weighted: tokens.flag("edge-weighted flag")?,
    };

    let mut graph = S::with_order(
        header.order,
        header.directed,
        header.vertex_weighted,
        header.edge_weighted,
    )
    .map_err(|e| GmstError::Parse {
        message: e.to_string(),
        line,
    })?;

    if header.vertex_weighted {
        for vid in Vid::range(header.order) {
            let weight = tokens.weight("vertex weight")?;
            graph.set_vertex_weight(vid, weight)?;
        }
    }

    let mut edge_count = 0usize;
    while !tokens.is_empty() {
        let src = tokens.vertex(header.order, "edge origin")?;
        let dst = tokens.vertex(header.order, "edge destination")?;
        let weight = if header.edge_weighted {
            tokens.weight("edge weight")?
        } else {
            0.0
        };
        graph.add_edge(src, dst, weight)?;
        edge_count += 1;
    }

    debug!(?header, edge_count, "Parsed graph");
    Ok(graph)
}

/// Loads a graph file into storage `S`.
pub fn load_graph_as<S: GraphStorage>(path: impl AsRef<Path>) -> Result<S> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GmstError::NotFound {
            path: path.to_path_buf(),
        },
        _ => GmstError::Io(e),
    })?;
    parse_graph(&input)
}

/// Loads a graph file into the storage selected by `kind`.
#[instrument(skip_all, fields(path = %path.as_ref().display(), kind = ?kind))]
pub fn load_graph(path: impl AsRef<Path>, kind: StorageKind) -> Result<Box<dyn Graph>> {
    let graph: Box<dyn Graph> = match kind {
        StorageKind::Matrix => Box::new(load_graph_as::<AdjacencyMatrix>(&path)?),
        StorageKind::List => Box::new(load_graph_as::<AdjacencyList>(&path)?),
    };
    info!(order = graph.order(), "Graph loaded");
    Ok(graph)
}
