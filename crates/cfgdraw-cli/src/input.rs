//! TOML graph descriptions.
//!
//! ```toml
//! root = "0"
//! origin = [20.0, 0.0]
//!
//! [title]
//! text = "G"
//! index = "0"
//! x = 6.0
//! y = 12.0
//!
//! [[vertex]]
//! id = "0"
//! x = 6.0
//! y = 2.0
//!
//! [[vertex]]
//! id = "1"
//! x = 2.0
//! y = 6.0
//! terminal = true
//! loop_angle = 180.0
//!
//! [[edge]]
//! from = "0"
//! to = "1"
//! ```

use log::debug;
use serde::Deserialize;

use cfgdraw::{
    GraphError,
    draw::{TextAnchor, TextRun},
    geometry::Vector,
    glyph::Caption,
    graph::{Edge, Graph, Vertex},
};

use crate::error::TomlError;

/// A graph as written in an input file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    root: Option<String>,
    title: Option<TitleSpec>,
    origin: Option<[f32; 2]>,
    #[serde(default, rename = "vertex")]
    vertices: Vec<VertexSpec>,
    #[serde(default, rename = "edge")]
    edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct TitleSpec {
    text: String,
    index: Option<String>,
    x: f32,
    y: f32,
    align: Option<TextAnchor>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct VertexSpec {
    id: String,
    x: f32,
    y: f32,
    #[serde(default)]
    terminal: bool,
    #[serde(default = "default_feasible")]
    feasible: bool,
    /// Degrees from the positive x axis, clockwise on screen (y grows downward).
    loop_angle: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeSpec {
    from: String,
    to: String,
    #[serde(default = "default_feasible")]
    feasible: bool,
}

fn default_feasible() -> bool {
    true
}

impl GraphFile {
    /// Parses a graph description.
    pub fn parse(source: &str) -> Result<Self, TomlError> {
        toml::from_str(source).map_err(|err| TomlError::new(&err, source))
    }

    /// Builds the graph and returns it along with the path-tree origin.
    ///
    /// Without an explicit `origin`, path columns start one grid unit right of
    /// the rightmost vertex.
    pub fn into_graph(self) -> Result<(Graph, Vector), GraphError> {
        let mut graph = Graph::new();

        let mut right_edge = 0.0_f32;
        for spec in self.vertices {
            right_edge = right_edge.max(spec.x);
            let mut vertex = Vertex::new(spec.id, Vector::new(spec.x, spec.y))
                .with_terminal(spec.terminal)
                .with_feasible(spec.feasible);
            if let Some(degrees) = spec.loop_angle {
                vertex = vertex.with_loop_angle(degrees.to_radians());
            }
            graph.add_vertex(vertex)?;
        }

        graph.add_edges(
            self.edges
                .into_iter()
                .map(|spec| Edge::new(spec.from, spec.to).with_feasible(spec.feasible)),
        )?;

        if let Some(root) = &self.root {
            graph.set_root(root)?;
        }

        if let Some(title) = self.title {
            let position = Vector::new(title.x, title.y);
            let caption = match title.index {
                Some(index) => Caption::indexed(position, &title.text, index),
                None => Caption::new(position, vec![TextRun::italic(title.text)]),
            };
            graph.set_title(caption.with_alignment(title.align.unwrap_or(TextAnchor::Middle)));
        }

        let origin = match self.origin {
            Some([x, y]) => Vector::new(x, y),
            None => Vector::new(right_edge + 1.0, 0.0),
        };
        debug!(origin:? = origin, vertices = graph.vertices().count(); "Graph description loaded");

        Ok((graph, origin))
    }
}
