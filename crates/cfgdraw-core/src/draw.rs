//! Scene-graph primitives and the document that serializes them to SVG.
//!
//! Every primitive owns a [`Style`] and a [`BoundingBox`](crate::geometry::BoundingBox)
//! computed at construction time. A [`Document`] collects primitives in
//! drawing order and sizes its canvas to fit them.

mod document;
mod primitive;
mod style;

pub use document::{DEFAULT_MARGIN, Document};
pub use primitive::{
    CHAR_WIDTH_FACTOR, CIRCLE_CONTROL_FACTOR, Circle, CubicSegment, Curve, CurveBuilder,
    DEFAULT_FONT_SIZE, Line, Primitive, SUBSCRIPT_SCALE, Text, TextRun, arrowhead,
};
pub use style::{StrokeStyle, Style, TextAnchor, overlay};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;
