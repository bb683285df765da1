//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! TOML failures in the configuration or the graph description carry their
//! source text and are rendered with a labeled snippet. Everything else is
//! rendered as a plain error with a code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use cfgdraw::{CfgDrawError, GraphError};

use crate::error::{CliError, ConfigError, TomlError};

/// Adapter for a TOML deserialization failure.
pub struct TomlDiagnostic<'a> {
    err: &'a TomlError,
    /// Source code for displaying snippets
    src: &'a str,
    code: &'static str,
}

impl<'a> TomlDiagnostic<'a> {
    pub fn new(err: &'a TomlError, code: &'static str) -> Self {
        Self {
            err,
            src: err.src(),
            code,
        }
    }
}

impl fmt::Debug for TomlDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TomlDiagnostic")
            .field("message", &self.err.message())
            .field("span", &self.err.span())
            .finish()
    }
}

impl fmt::Display for TomlDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl std::error::Error for TomlDiagnostic<'_> {}

impl MietteDiagnostic for TomlDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            span,
        ))))
    }
}

/// Adapter for [`CliError`] variants without source text.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Config(_) => "cfgdraw::config",
            CliError::Input { .. } => "cfgdraw::io",
            CliError::InvalidInput(_) => "cfgdraw::input",
            CliError::Render(CfgDrawError::Graph(_)) => "cfgdraw::graph",
            CliError::Render(CfgDrawError::Geometry(_)) => "cfgdraw::geometry",
            CliError::Render(CfgDrawError::Primitive(_)) => "cfgdraw::primitive",
            CliError::Render(CfgDrawError::Sink(_)) => "cfgdraw::output",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CliError::Render(CfgDrawError::Graph(GraphError::Cycle(_))) => {
                "path trees need an acyclic graph; render it with `--mode direct` instead"
            }
            CliError::Render(CfgDrawError::Graph(GraphError::DepthExceeded { .. })) => {
                "raise `path_tree.max_depth` in the configuration"
            }
            CliError::Render(CfgDrawError::Graph(GraphError::TooManyPaths { .. })) => {
                "raise `path_tree.max_paths` in the configuration, or render with `--mode direct`"
            }
            CliError::Render(CfgDrawError::Geometry(_)) => {
                "an edge joins two vertices placed at the same position"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A TOML failure with its source snippet.
    Toml(TomlDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Toml(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Toml(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Toml(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Toml(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Toml(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Toml(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a list of reportable errors.
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    let reportable = match err {
        CliError::Config(ConfigError::Parse(toml_err)) => {
            Reportable::Toml(TomlDiagnostic::new(toml_err, "cfgdraw::config"))
        }
        CliError::InvalidInput(toml_err) => {
            Reportable::Toml(TomlDiagnostic::new(toml_err, "cfgdraw::input"))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    };
    vec![reportable]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toml_error(source: &str) -> TomlError {
        let err = toml::from_str::<toml::Table>(source).unwrap_err();
        TomlError::new(&err, source)
    }

    #[test]
    fn test_input_error_has_label() {
        let err = CliError::InvalidInput(toml_error("root = \n"));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let Reportable::Toml(diag) = &reportables[0] else {
            panic!("Expected Toml");
        };
        assert_eq!(diag.code().unwrap().to_string(), "cfgdraw::input");
        assert!(diag.source_code().is_some());
        assert_eq!(diag.labels().unwrap().count(), 1);
    }

    #[test]
    fn test_config_parse_error_code() {
        let err = CliError::Config(ConfigError::Parse(toml_error("[glyph")));

        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "cfgdraw::config"
        );
    }

    #[test]
    fn test_graph_error() {
        let err = CliError::from(GraphError::Cycle("b".to_string()));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.code().unwrap().to_string(), "cfgdraw::graph");
                assert!(e.help().is_some());
                assert!(e.labels().is_none());
            }
            Reportable::Toml(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_too_many_paths_points_at_config() {
        let err = CliError::from(GraphError::TooManyPaths { max_paths: 4 });
        let reportables = to_reportables(&err);
        let help = reportables[0].help().expect("help").to_string();
        assert!(help.contains("path_tree.max_paths"));
    }

    #[test]
    fn test_missing_root_has_no_help() {
        let err = CliError::from(GraphError::MissingRoot);
        let reportables = to_reportables(&err);
        assert!(reportables[0].help().is_none());
        assert_eq!(reportables[0].to_string(), err.to_string());
    }
}
