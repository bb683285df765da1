//! Error types for the cfgdraw CLI.

use std::{io, ops::Range, path::PathBuf};

use thiserror::Error;

use cfgdraw::{CfgDrawError, GraphError};

/// A TOML document that failed to deserialize.
///
/// Keeps the document text so the failing span can be shown in reports.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TomlError {
    message: String,
    src: String,
    span: Option<Range<usize>>,
}

impl TomlError {
    pub fn new(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self {
            message: err.message().to_string(),
            src: src.into(),
            span: err.span(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }
}

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read configuration `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(TomlError),
}

/// The error type of [`run`](crate::run).
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read input `{}`: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid graph description: {0}")]
    InvalidInput(TomlError),

    #[error(transparent)]
    Render(#[from] CfgDrawError),
}

impl From<GraphError> for CliError {
    fn from(err: GraphError) -> Self {
        Self::Render(CfgDrawError::Graph(err))
    }
}
