//! Error types for cfgdraw operations.
//!
//! This module provides the main error type [`CfgDrawError`] which wraps
//! the error conditions of every stage: graph construction, traversal,
//! primitive construction and output.

use thiserror::Error;

use cfgdraw_core::error::{GeometryError, PrimitiveError, SinkError};

/// Invalid graph structure or a failed traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("unknown vertex `{0}`")]
    UnknownVertex(String),

    #[error("duplicate vertex `{0}`")]
    DuplicateVertex(String),

    #[error("graph has no root vertex")]
    MissingRoot,

    #[error("cycle detected: vertex `{0}` is revisited on the same path")]
    Cycle(String),

    #[error("path exceeds the maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    #[error("path tree has more than {max_paths} paths")]
    TooManyPaths { max_paths: usize },
}

/// The main error type for cfgdraw operations.
#[derive(Debug, Error)]
pub enum CfgDrawError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    #[error("Output error: {0}")]
    Sink(#[from] SinkError),
}
