//! Command-line argument definitions for the cfgdraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the rendering mode,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// How the input graph is drawn
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Vertices and edges as placed
    #[default]
    Direct,
    /// One column per path from the root to a leaf
    Paths,
}

/// Command-line arguments for the cfgdraw diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph description (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file, or `-` for standard output
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Rendering mode
    #[arg(short, long, value_enum, default_value_t = Mode::Direct)]
    pub mode: Mode,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
