//! Control-flow graph model and its two renderings.
//!
//! A [`Graph`] holds vertices placed on the authoring grid and directed edges
//! between them. It renders either as drawn ([`Graph::render_direct`]) or as a
//! path tree ([`Graph::render_paths`]) that lays out one column per path from
//! the root to a leaf.
//!
//! Vertices are kept in insertion order, which is also their drawing order.

use indexmap::IndexMap;
use log::{debug, info, trace};

use cfgdraw_core::geometry::Vector;

use crate::{
    config::PathTreeConfig,
    error::{CfgDrawError, GraphError},
    glyph::{Arrow, Caption, Loop, Node, Representation},
};

/// A graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: String,
    position: Vector,
    terminal: bool,
    feasible: bool,
    loop_angle: Option<f32>,
    children: Vec<String>,
}

impl Vertex {
    /// Creates a feasible, non-terminal vertex at a grid position.
    pub fn new(id: impl Into<String>, position: Vector) -> Self {
        Self {
            id: id.into(),
            position,
            terminal: false,
            feasible: true,
            loop_angle: None,
            children: Vec::new(),
        }
    }

    /// Terminal vertices are drawn with an inner ring and a self-loop.
    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn with_feasible(mut self, feasible: bool) -> Self {
        self.feasible = feasible;
        self
    }

    /// Overrides the base angle of this vertex's self-loop, in radians.
    pub fn with_loop_angle(mut self, angle: f32) -> Self {
        self.loop_angle = Some(angle);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    pub fn loop_angle(&self) -> Option<f32> {
        self.loop_angle
    }

    /// Successor ids in edge insertion order.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    fn node_at(&self, position: Vector) -> Node {
        Node::new(position, self.id.as_str())
            .with_terminal(self.terminal)
            .with_feasible(self.feasible)
    }
}

/// A directed edge between two vertex ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: String,
    to: String,
    feasible: bool,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            feasible: true,
        }
    }

    /// Infeasible edges are dashed.
    pub fn with_feasible(mut self, feasible: bool) -> Self {
        self.feasible = feasible;
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn is_feasible(&self) -> bool {
        self.feasible
    }
}

/// A control-flow graph.
///
/// # Examples
///
/// ```
/// use cfgdraw::graph::{Edge, Graph, Vertex};
/// use cfgdraw_core::geometry::Vector;
///
/// let mut graph = Graph::new();
/// graph.add_vertex(Vertex::new("0", Vector::new(6.0, 2.0))).unwrap();
/// graph
///     .add_vertex(Vertex::new("1", Vector::new(6.0, 7.0)).with_terminal(true))
///     .unwrap();
/// graph.add_edge(Edge::new("0", "1")).unwrap();
///
/// assert_eq!(graph.root(), Some("0"));
/// let repr = graph.render_direct().unwrap();
/// assert_eq!(repr.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    vertices: IndexMap<String, Vertex>,
    edges: Vec<Edge>,
    root: Option<String>,
    title: Option<Caption>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex. The first vertex added becomes the root unless
    /// [`Graph::set_root`] picks another one.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if the id is already present.
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        if self.vertices.contains_key(&vertex.id) {
            return Err(GraphError::DuplicateVertex(vertex.id));
        }
        trace!(id = vertex.id; "Adding vertex");

        if self.root.is_none() {
            self.root = Some(vertex.id.clone());
        }
        self.vertices.insert(vertex.id.clone(), vertex);
        Ok(())
    }

    /// Adds vertices in order, stopping at the first failure.
    pub fn add_vertices(
        &mut self,
        vertices: impl IntoIterator<Item = Vertex>,
    ) -> Result<(), GraphError> {
        vertices
            .into_iter()
            .try_for_each(|vertex| self.add_vertex(vertex))
    }

    /// Adds an edge between two existing vertices and records the
    /// destination as the next child of the source.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if either endpoint is missing.
    /// Vertices are never created implicitly.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if !self.vertices.contains_key(&edge.to) {
            return Err(GraphError::UnknownVertex(edge.to));
        }
        let Some(source) = self.vertices.get_mut(&edge.from) else {
            return Err(GraphError::UnknownVertex(edge.from));
        };
        trace!(from = edge.from, to = edge.to; "Adding edge");

        source.children.push(edge.to.clone());
        self.edges.push(edge);
        Ok(())
    }

    /// Adds edges in order, stopping at the first failure.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) -> Result<(), GraphError> {
        edges.into_iter().try_for_each(|edge| self.add_edge(edge))
    }

    /// Selects the vertex path trees start from.
    pub fn set_root(&mut self, id: &str) -> Result<(), GraphError> {
        if !self.vertices.contains_key(id) {
            return Err(GraphError::UnknownVertex(id.to_string()));
        }
        self.root = Some(id.to_string());
        Ok(())
    }

    /// Sets a caption drawn after everything else by [`Graph::render_direct`].
    pub fn set_title(&mut self, title: Caption) {
        self.title = Some(title);
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn title(&self) -> Option<&Caption> {
        self.title.as_ref()
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn lookup(&self, id: &str) -> Result<&Vertex, GraphError> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::UnknownVertex(id.to_string()))
    }

    fn edge_feasible(&self, from: &str, to: &str) -> bool {
        self.edges
            .iter()
            .find(|edge| edge.from == from && edge.to == to)
            .is_none_or(Edge::is_feasible)
    }

    /// Draws the graph as placed: a node per vertex, then an arrow per edge,
    /// then a self-loop per terminal vertex, then the title.
    ///
    /// # Errors
    ///
    /// Fails with a geometry error when an edge joins two vertices at the
    /// same grid position.
    pub fn render_direct(&self) -> Result<Representation, CfgDrawError> {
        info!(vertices = self.vertices.len(), edges = self.edges.len(); "Rendering graph");

        let mut repr = Representation::new();
        for vertex in self.vertices.values() {
            repr.add(vertex.node_at(vertex.position));
        }

        for edge in &self.edges {
            let from = self.lookup(&edge.from)?;
            let to = self.lookup(&edge.to)?;
            repr.add(Arrow::new(from.position, to.position)?.with_feasible(edge.feasible));
        }

        for vertex in self.vertices.values().filter(|v| v.terminal) {
            let self_loop = Loop::new(vertex.position);
            repr.add(match vertex.loop_angle {
                Some(angle) => self_loop.with_angle(angle),
                None => self_loop,
            });
        }

        if let Some(title) = &self.title {
            repr.add(title.clone());
        }

        debug!(glyphs = repr.len(); "Graph rendered");
        Ok(repr)
    }

    /// Enumerates every path from the root to a leaf and draws each as a
    /// column, left to right in depth-first order.
    ///
    /// Path `k` sits at grid x = `origin.x + column_step * (k + 1)`. Its
    /// label sits at `origin.y` and its nodes start `label_gap` below,
    /// `row_step` apart, joined by arrows.
    ///
    /// # Errors
    ///
    /// - [`GraphError::MissingRoot`] for an empty graph
    /// - [`GraphError::Cycle`] when a vertex is reached again on the path
    ///   that is currently open
    /// - [`GraphError::DepthExceeded`] when a path is longer than
    ///   `max_depth` edges
    /// - [`GraphError::TooManyPaths`] when the graph has more than
    ///   `max_paths` root-to-leaf paths
    pub fn render_paths(
        &self,
        origin: Vector,
        config: &PathTreeConfig,
    ) -> Result<Representation, CfgDrawError> {
        let root = self.lookup(self.root.as_deref().ok_or(GraphError::MissingRoot)?)?;
        info!(root = root.id; "Rendering path tree");

        let mut repr = Representation::new();
        let mut path: Vec<&Vertex> = vec![root];
        // Index of the next child to visit, per vertex on `path`
        let mut cursors: Vec<usize> = vec![0];
        let mut path_index = 0;

        while let Some(&vertex) = path.last() {
            let top = path.len() - 1;
            if vertex.children.is_empty() {
                if path_index >= config.max_paths() {
                    return Err(GraphError::TooManyPaths {
                        max_paths: config.max_paths(),
                    }
                    .into());
                }
                self.add_column(&mut repr, &path, path_index, origin, config)?;
                path_index += 1;
                path.pop();
                cursors.pop();
                continue;
            }

            let Some(child_id) = vertex.children.get(cursors[top]) else {
                path.pop();
                cursors.pop();
                continue;
            };
            cursors[top] += 1;

            let child = self.lookup(child_id)?;
            if path.iter().any(|open| open.id == child.id) {
                return Err(GraphError::Cycle(child.id.clone()).into());
            }
            if path.len() > config.max_depth() {
                return Err(GraphError::DepthExceeded {
                    max_depth: config.max_depth(),
                }
                .into());
            }
            path.push(child);
            cursors.push(0);
        }

        debug!(paths = path_index, glyphs = repr.len(); "Path tree rendered");
        Ok(repr)
    }

    fn add_column(
        &self,
        repr: &mut Representation,
        path: &[&Vertex],
        index: usize,
        origin: Vector,
        config: &PathTreeConfig,
    ) -> Result<(), CfgDrawError> {
        trace!(index = index, length = path.len(); "Adding path column");

        let x = origin.x() + config.column_step() * (index + 1) as f32;
        repr.add(Caption::indexed(
            Vector::new(x, origin.y()),
            config.label(),
            index,
        ));

        let row = |position: usize| {
            Vector::new(
                x,
                origin.y() + config.label_gap() + config.row_step() * position as f32,
            )
        };
        for (position, vertex) in path.iter().enumerate() {
            repr.add(vertex.node_at(row(position)));
            if let Some(next) = path.get(position + 1) {
                let feasible = self.edge_feasible(&vertex.id, &next.id);
                repr.add(Arrow::new(row(position), row(position + 1))?.with_feasible(feasible));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::glyph::Glyph;

    fn vertex(id: &str, x: f32, y: f32) -> Vertex {
        Vertex::new(id, Vector::new(x, y))
    }

    /// root -> [A, B -> [C]]
    fn branching_graph() -> Graph {
        let mut graph = Graph::new();
        graph
            .add_vertices([
                vertex("root", 0.0, 0.0),
                vertex("A", -4.0, 4.0),
                vertex("B", 4.0, 4.0),
                vertex("C", 4.0, 9.0),
            ])
            .unwrap();
        graph
            .add_edges([Edge::new("root", "A"), Edge::new("root", "B"), Edge::new("B", "C")])
            .unwrap();
        graph
    }

    fn nodes(repr: &Representation) -> Vec<&Node> {
        repr.glyphs()
            .iter()
            .filter_map(|glyph| match glyph {
                Glyph::Node(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_first_vertex_is_root() {
        let graph = branching_graph();
        assert_eq!(graph.root(), Some("root"));
        assert_eq!(graph.vertex("B").unwrap().children(), ["C".to_string()]);
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let mut graph = branching_graph();
        let err = graph.add_vertex(vertex("A", 1.0, 1.0)).unwrap_err();
        assert_eq!(err, GraphError::DuplicateVertex("A".to_string()));
        assert_eq!(graph.vertex("A").unwrap().position(), Vector::new(-4.0, 4.0));
    }

    #[test]
    fn test_unknown_edge_endpoint_rejected() {
        let mut graph = branching_graph();
        assert_eq!(
            graph.add_edge(Edge::new("root", "Z")).unwrap_err(),
            GraphError::UnknownVertex("Z".to_string())
        );
        assert_eq!(
            graph.add_edge(Edge::new("Y", "A")).unwrap_err(),
            GraphError::UnknownVertex("Y".to_string())
        );
        assert_eq!(graph.edges().len(), 3);
        assert!(graph.vertex("Y").is_none());
    }

    #[test]
    fn test_set_root() {
        let mut graph = branching_graph();
        graph.set_root("B").unwrap();
        assert_eq!(graph.root(), Some("B"));
        assert!(graph.set_root("missing").is_err());
    }

    #[test]
    fn test_render_direct_order() {
        let mut graph = Graph::new();
        graph
            .add_vertices([vertex("0", 0.0, 0.0), vertex("1", 0.0, 5.0).with_terminal(true)])
            .unwrap();
        graph.add_edge(Edge::new("0", "1")).unwrap();

        let repr = graph.render_direct().unwrap();
        let kinds: Vec<&str> = repr.glyphs().iter().map(Glyph::kind).collect();
        assert_eq!(kinds, vec!["node", "node", "arrow", "loop"]);
    }

    #[test]
    fn test_render_direct_title_last() {
        let mut graph = branching_graph();
        graph.set_title(Caption::indexed(Vector::new(0.0, -2.0), "G", 1));

        let repr = graph.render_direct().unwrap();
        assert!(matches!(repr.glyphs().last(), Some(Glyph::Caption(_))));
    }

    #[test]
    fn test_render_direct_loop_angle_override() {
        let mut graph = Graph::new();
        graph
            .add_vertex(vertex("0", 0.0, 0.0).with_terminal(true).with_loop_angle(PI))
            .unwrap();

        let repr = graph.render_direct().unwrap();
        let Some(Glyph::Loop(self_loop)) = repr.glyphs().last() else {
            panic!("expected a loop");
        };
        assert_eq!(self_loop.angle(), Some(PI));
    }

    #[test]
    fn test_render_direct_edge_feasibility() {
        let mut graph = branching_graph();
        graph
            .add_edge(Edge::new("A", "C").with_feasible(false))
            .unwrap();

        let repr = graph.render_direct().unwrap();
        let feasibility: Vec<bool> = repr
            .glyphs()
            .iter()
            .filter_map(|glyph| match glyph {
                Glyph::Arrow(arrow) => Some(arrow.is_feasible()),
                _ => None,
            })
            .collect();
        assert_eq!(feasibility, vec![true, true, true, false]);
    }

    #[test]
    fn test_render_direct_coincident_vertices() {
        let mut graph = Graph::new();
        graph
            .add_vertices([vertex("0", 1.0, 1.0), vertex("1", 1.0, 1.0)])
            .unwrap();
        graph.add_edge(Edge::new("0", "1")).unwrap();

        assert!(matches!(
            graph.render_direct(),
            Err(CfgDrawError::Geometry(_))
        ));
    }

    #[test]
    fn test_render_paths_columns() {
        let graph = branching_graph();
        let repr = graph
            .render_paths(Vector::new(0.0, 0.0), &PathTreeConfig::default())
            .unwrap();

        let captions: Vec<&Caption> = repr
            .glyphs()
            .iter()
            .filter_map(|glyph| match glyph {
                Glyph::Caption(caption) => Some(caption),
                _ => None,
            })
            .collect();
        assert_eq!(captions.len(), 2);
        assert_eq!(captions[0].position(), Vector::new(5.0, 0.0));
        assert_eq!(captions[0].runs()[1].content(), "0");
        assert_eq!(captions[1].position(), Vector::new(10.0, 0.0));
        assert_eq!(captions[1].runs()[1].content(), "1");

        let chain: Vec<(&str, Vector)> = nodes(&repr)
            .iter()
            .map(|node| (node.index(), node.position()))
            .collect();
        assert_eq!(
            chain,
            vec![
                ("root", Vector::new(5.0, 4.0)),
                ("A", Vector::new(5.0, 9.0)),
                ("root", Vector::new(10.0, 4.0)),
                ("B", Vector::new(10.0, 9.0)),
                ("C", Vector::new(10.0, 14.0)),
            ]
        );

        let arrows = repr
            .glyphs()
            .iter()
            .filter(|glyph| matches!(glyph, Glyph::Arrow(_)))
            .count();
        assert_eq!(arrows, 3);
    }

    #[test]
    fn test_render_paths_single_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex(vertex("0", 3.0, 3.0).with_terminal(true)).unwrap();

        let repr = graph
            .render_paths(Vector::new(1.0, 2.0), &PathTreeConfig::default())
            .unwrap();
        let kinds: Vec<&str> = repr.glyphs().iter().map(Glyph::kind).collect();
        assert_eq!(kinds, vec!["caption", "node"]);
        assert!(nodes(&repr)[0].is_terminal());
        assert_eq!(nodes(&repr)[0].position(), Vector::new(6.0, 6.0));
    }

    #[test]
    fn test_render_paths_requires_root() {
        let err = Graph::new()
            .render_paths(Vector::ZERO, &PathTreeConfig::default())
            .unwrap_err();
        assert!(matches!(err, CfgDrawError::Graph(GraphError::MissingRoot)));
    }

    #[test]
    fn test_render_paths_detects_cycle() {
        let mut graph = branching_graph();
        graph.add_edge(Edge::new("C", "B")).unwrap();

        let err = graph
            .render_paths(Vector::ZERO, &PathTreeConfig::default())
            .unwrap_err();
        assert!(matches!(err, CfgDrawError::Graph(GraphError::Cycle(id)) if id == "B"));
    }

    #[test]
    fn test_render_paths_allows_shared_descendants() {
        // Diamond: both branches reach D, which is not a cycle
        let mut graph = Graph::new();
        graph
            .add_vertices([
                vertex("0", 0.0, 0.0),
                vertex("L", -2.0, 2.0),
                vertex("R", 2.0, 2.0),
                vertex("D", 0.0, 4.0),
            ])
            .unwrap();
        graph
            .add_edges([
                Edge::new("0", "L"),
                Edge::new("0", "R"),
                Edge::new("L", "D"),
                Edge::new("R", "D"),
            ])
            .unwrap();

        let repr = graph
            .render_paths(Vector::ZERO, &PathTreeConfig::default())
            .unwrap();
        assert_eq!(nodes(&repr).len(), 6);
    }

    #[test]
    fn test_render_paths_depth_limit() {
        let mut graph = Graph::new();
        graph
            .add_vertices((0..5).map(|i| vertex(&i.to_string(), 0.0, i as f32)))
            .unwrap();
        graph
            .add_edges((0..4).map(|i| Edge::new(i.to_string(), (i + 1).to_string())))
            .unwrap();

        let config = PathTreeConfig::default().with_max_depth(3);
        let err = graph.render_paths(Vector::ZERO, &config).unwrap_err();
        assert!(matches!(
            err,
            CfgDrawError::Graph(GraphError::DepthExceeded { max_depth: 3 })
        ));

        let config = PathTreeConfig::default().with_max_depth(4);
        assert!(graph.render_paths(Vector::ZERO, &config).is_ok());
    }

    #[test]
    fn test_render_paths_path_limit() {
        // Four stacked diamonds: every join doubles the path count, 16 in all
        let mut graph = Graph::new();
        graph.add_vertex(vertex("j0", 0.0, 0.0)).unwrap();
        for level in 1..=4 {
            let y = (level * 4) as f32;
            let above = format!("j{}", level - 1);
            let left = format!("l{level}");
            let right = format!("r{level}");
            let join = format!("j{level}");
            graph
                .add_vertices([
                    vertex(&left, -2.0, y - 2.0),
                    vertex(&right, 2.0, y - 2.0),
                    vertex(&join, 0.0, y),
                ])
                .unwrap();
            graph
                .add_edges([
                    Edge::new(above.clone(), left.clone()),
                    Edge::new(above, right.clone()),
                    Edge::new(left, join.clone()),
                    Edge::new(right, join),
                ])
                .unwrap();
        }

        let config = PathTreeConfig::default().with_max_paths(15);
        let err = graph.render_paths(Vector::ZERO, &config).unwrap_err();
        assert!(matches!(
            err,
            CfgDrawError::Graph(GraphError::TooManyPaths { max_paths: 15 })
        ));

        let config = PathTreeConfig::default().with_max_paths(16);
        let repr = graph.render_paths(Vector::ZERO, &config).unwrap();
        // Each path visits the root, then two vertices per diamond
        assert_eq!(nodes(&repr).len(), 16 * 9);
    }

    #[test]
    fn test_render_paths_uses_edge_feasibility() {
        let mut graph = Graph::new();
        graph
            .add_vertices([vertex("0", 0.0, 0.0), vertex("1", 0.0, 5.0).with_feasible(false)])
            .unwrap();
        graph
            .add_edge(Edge::new("0", "1").with_feasible(false))
            .unwrap();

        let repr = graph
            .render_paths(Vector::ZERO, &PathTreeConfig::default())
            .unwrap();
        let Some(Glyph::Arrow(arrow)) = repr
            .glyphs()
            .iter()
            .find(|glyph| matches!(glyph, Glyph::Arrow(_)))
        else {
            panic!("expected an arrow");
        };
        assert!(!arrow.is_feasible());
        assert!(!nodes(&repr)[1].is_feasible());
    }
}
