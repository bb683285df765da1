//! cfgdraw - Control-flow graph and path-tree diagrams rendered to SVG.
//!
//! Diagrams are authored on a unit grid: vertices, edges and free glyphs are
//! placed by the caller, never laid out automatically. A [`graph::Graph`]
//! renders either as placed or as a path tree with one column per path, and
//! the result is expanded into an SVG document sized to fit its content.

pub mod config;
pub mod glyph;
pub mod graph;

mod error;

pub use cfgdraw_core::{color, draw, geometry};

pub use error::{CfgDrawError, GraphError};

use std::path::Path;

use log::{debug, info};

use cfgdraw_core::{draw::Document, geometry::Vector};

use config::AppConfig;
use glyph::Representation;
use graph::Graph;

/// How a graph is turned into glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderMode {
    /// Vertices and edges as placed, with self-loops on terminal vertices.
    Direct,
    /// One column per root-to-leaf path, laid out right of `origin`.
    Paths { origin: Vector },
}

/// Builder for rendering cfgdraw diagrams.
///
/// # Examples
///
/// ```rust
/// use cfgdraw::{
///     DiagramBuilder, RenderMode,
///     config::AppConfig,
///     geometry::Vector,
///     graph::{Edge, Graph, Vertex},
/// };
///
/// let mut graph = Graph::new();
/// graph
///     .add_vertices([
///         Vertex::new("0", Vector::new(6.0, 2.0)),
///         Vertex::new("1", Vector::new(2.0, 6.0)).with_terminal(true),
///     ])
///     .expect("unique vertex ids");
/// graph.add_edge(Edge::new("0", "1")).expect("known vertices");
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let svg = builder
///     .render_svg(&graph, RenderMode::Direct)
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Turn a graph into glyphs.
    ///
    /// # Errors
    ///
    /// Returns `CfgDrawError` for graph errors (missing root, cycles, depth)
    /// and for edges between coincident vertices.
    pub fn representation(
        &self,
        graph: &Graph,
        mode: RenderMode,
    ) -> Result<Representation, CfgDrawError> {
        match mode {
            RenderMode::Direct => graph.render_direct(),
            RenderMode::Paths { origin } => graph.render_paths(origin, self.config.path_tree()),
        }
    }

    /// Expand a representation into a document using the configured glyph
    /// geometry and canvas settings.
    pub fn document(&self, repr: &Representation) -> Result<Document, CfgDrawError> {
        let document = repr.to_document(&self.config)?;
        debug!(
            primitives = document.len(),
            width = document.canvas().width(),
            height = document.canvas().height();
            "Document built"
        );
        Ok(document)
    }

    /// Render a graph to an SVG string.
    pub fn render_svg(&self, graph: &Graph, mode: RenderMode) -> Result<String, CfgDrawError> {
        info!(mode:? = mode; "Rendering diagram");
        let repr = self.representation(graph, mode)?;
        let svg = self.document(&repr)?.to_svg_string();
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render a graph into an SVG file at `path`.
    ///
    /// # Errors
    ///
    /// In addition to the rendering errors, returns `CfgDrawError::Sink` when
    /// the file cannot be created or written.
    pub fn render_to_file(
        &self,
        graph: &Graph,
        mode: RenderMode,
        path: impl AsRef<Path>,
    ) -> Result<(), CfgDrawError> {
        info!(mode:? = mode; "Rendering diagram");
        let repr = self.representation(graph, mode)?;
        self.document(&repr)?.save(path)?;
        Ok(())
    }
}
