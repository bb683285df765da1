//! Configuration types for cfgdraw diagram rendering.
//!
//! This module provides configuration structures that control glyph geometry,
//! path-tree layout and document framing. All types implement
//! [`serde::Deserialize`] for loading from external sources, and every field
//! falls back to its default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`GlyphConfig`] - Node, arrow and loop geometry plus typography.
//! - [`PathTreeConfig`] - Column and row spacing of path-tree diagrams.
//! - [`DocumentConfig`] - Canvas margin and debug frame.
//!
//! # Example
//!
//! ```
//! # use cfgdraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.glyph().node_radius(), 7.5);
//! assert_eq!(config.path_tree().column_step(), 5.0);
//! ```

use std::f32::consts::{FRAC_PI_2, PI};

use serde::Deserialize;

use cfgdraw_core::draw::{DEFAULT_MARGIN, StrokeStyle};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Glyph geometry section.
    #[serde(default)]
    glyph: GlyphConfig,

    /// Path-tree layout section.
    #[serde(default)]
    path_tree: PathTreeConfig,

    /// Document section.
    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(glyph: GlyphConfig, path_tree: PathTreeConfig, document: DocumentConfig) -> Self {
        Self {
            glyph,
            path_tree,
            document,
        }
    }

    /// Returns the glyph configuration.
    pub fn glyph(&self) -> &GlyphConfig {
        &self.glyph
    }

    /// Returns the path-tree configuration.
    pub fn path_tree(&self) -> &PathTreeConfig {
        &self.path_tree
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }
}

/// Geometry and typography of graph glyphs.
///
/// Lengths are canvas units, angles are radians.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    node_radius: f32,
    ring_gap: f32,
    stroke_width: f32,
    label_offset: f32,
    font_size: f32,
    font_family: String,
    node_name: String,
    loop_angle: f32,
    loop_spread: f32,
    loop_reach: f32,
    infeasible_dash: StrokeStyle,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            node_radius: 7.5,
            ring_gap: 1.0,
            stroke_width: 0.5,
            label_offset: 2.0,
            font_size: 10.0,
            font_family: "CMU Serif".to_string(),
            node_name: "s".to_string(),
            loop_angle: FRAC_PI_2,
            loop_spread: PI / 9.0,
            loop_reach: 20.0,
            infeasible_dash: StrokeStyle::Dotted,
        }
    }
}

impl GlyphConfig {
    /// Radius of node circles; arrows are shortened by it at both ends.
    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    pub fn with_node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius;
        self
    }

    /// Radius of the inner ring of terminal nodes.
    pub fn inner_ring_radius(&self) -> f32 {
        self.node_radius - self.ring_gap
    }

    /// Stroke width of circles, arrows and loops.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Distance of a node label's baseline below the node center.
    pub fn label_offset(&self) -> f32 {
        self.label_offset
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Italic name printed in front of every node index.
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Base direction of self-loops drawn on terminal vertices.
    pub fn loop_angle(&self) -> f32 {
        self.loop_angle
    }

    /// Half of the angle between a loop's two ends.
    pub fn loop_spread(&self) -> f32 {
        self.loop_spread
    }

    /// Distance of a loop's control points from the node center.
    pub fn loop_reach(&self) -> f32 {
        self.loop_reach
    }

    /// Dash pattern of infeasible nodes and edges.
    pub fn infeasible_dash(&self) -> &StrokeStyle {
        &self.infeasible_dash
    }
}

/// Spacing of path-tree diagrams, in grid units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathTreeConfig {
    column_step: f32,
    row_step: f32,
    label_gap: f32,
    label: String,
    max_depth: usize,
    max_paths: usize,
}

impl Default for PathTreeConfig {
    fn default() -> Self {
        Self {
            column_step: 5.0,
            row_step: 5.0,
            label_gap: 4.0,
            label: "P".to_string(),
            max_depth: 256,
            max_paths: 4096,
        }
    }
}

impl PathTreeConfig {
    /// Horizontal distance between adjacent path columns.
    pub fn column_step(&self) -> f32 {
        self.column_step
    }

    /// Vertical distance between consecutive nodes of a path.
    pub fn row_step(&self) -> f32 {
        self.row_step
    }

    /// Distance from a column's label to its first node.
    pub fn label_gap(&self) -> f32 {
        self.label_gap
    }

    /// Italic label printed above each column, followed by the path index.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Longest path, in edges, the traversal accepts.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Most columns a path tree may have. Stacked branch-and-join
    /// regions double the path count each, so this bounds the output size.
    pub fn max_paths(&self) -> usize {
        self.max_paths
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }
}

/// Canvas settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    margin: f32,
    frame: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            frame: false,
        }
    }
}

impl DocumentConfig {
    /// Margin added around the content bounds.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Whether a debug frame is drawn along the canvas edges.
    pub fn frame(&self) -> bool {
        self.frame
    }

    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }
}
