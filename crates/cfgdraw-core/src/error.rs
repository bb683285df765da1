//! Error types for geometry, primitive construction and serialization.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Degenerate geometric input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("arrow endpoints coincide at ({x}, {y})")]
    CoincidentPoints { x: f32, y: f32 },
}

/// Malformed primitive data, reported at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrimitiveError {
    #[error("curve must contain at least one segment")]
    EmptyCurve,

    #[error("curve segment {index} does not start where the previous segment ends")]
    DiscontinuousCurve { index: usize },

    #[error("invalid circle radius: {0}")]
    InvalidRadius(f32),

    #[error("text must contain at least one run")]
    EmptyText,

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// The output destination could not be written.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to create `{}`: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write SVG output: {0}")]
    Write(#[from] io::Error),
}
