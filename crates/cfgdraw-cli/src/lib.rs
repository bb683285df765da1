//! CLI logic for the cfgdraw diagram tool.
//!
//! Reads a TOML graph description, renders it directly or as a path tree and
//! writes the SVG to a file or standard output.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod input;

pub use args::{Args, Mode};
pub use error::{CliError, ConfigError, TomlError};
pub use input::GraphFile;

use std::{fs, io};

use log::info;

use cfgdraw::{CfgDrawError, DiagramBuilder, RenderMode};

/// Output path that selects standard output.
pub const STDOUT: &str = "-";

/// Run the cfgdraw CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Unreadable or malformed input
/// - Graph errors (unknown vertices, cycles in path mode)
/// - Output errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        mode:? = args.mode;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input).map_err(|source| CliError::Input {
        path: args.input.clone().into(),
        source,
    })?;
    let (graph, origin) = GraphFile::parse(&source)
        .map_err(CliError::InvalidInput)?
        .into_graph()?;

    let mode = match args.mode {
        Mode::Direct => RenderMode::Direct,
        Mode::Paths => RenderMode::Paths { origin },
    };

    let builder = DiagramBuilder::new(app_config);
    if args.output == STDOUT {
        let repr = builder.representation(&graph, mode)?;
        builder
            .document(&repr)?
            .serialize(io::stdout().lock())
            .map_err(CfgDrawError::from)?;
    } else {
        builder.render_to_file(&graph, mode, &args.output)?;
        info!(output_file = args.output; "SVG exported successfully");
    }

    Ok(())
}
