// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::id::Vid;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GmstError {
    #[error("Graph file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Parse error at line {line}: {message}")]
    Parse { message: String, line: usize },

    /// Arc endpoint outside the dense `1..=order` range
    #[error("Vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: u32, order: usize },

    /// Weight lookup failed for a vertex the graph claims to contain
    #[error("Vertex {vertex} has no weight")]
    MissingVertexWeight { vertex: Vid },

    #[error("Vertex {vertex} has a non-finite weight")]
    InvalidWeight { vertex: Vid },

    #[error("Argument '{arg}' is invalid: {message}")]
    InvalidArgument { arg: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl GmstError {
    pub fn invalid_argument(arg: &str, message: impl Into<String>) -> Self {
        GmstError::InvalidArgument {
            arg: arg.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GmstError>;
