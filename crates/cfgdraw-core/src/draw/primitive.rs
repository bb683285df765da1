//! Renderable scene-graph primitives.
//!
//! Every primitive takes canvas coordinates, owns a [`Style`] and computes its
//! [`BoundingBox`] once, at construction. Construction validates the input, so
//! a value that exists can always be serialized.
//!
//! All outlines serialize to SVG `path` elements. Circles are emitted as four
//! cubic Bézier arcs rather than as native `circle` elements.

use log::trace;
use svg::node::{Blob, element as svg_element};

use crate::{
    apply_style,
    draw::{
        SvgNode,
        style::{Style, TextAnchor, overlay},
    },
    error::PrimitiveError,
    geometry::{BoundingBox, Vector},
};

/// Offset of a Bézier control point from its anchor, as a fraction of the
/// radius, when approximating a quarter circle.
pub const CIRCLE_CONTROL_FACTOR: f32 = 0.577;

/// Font size assumed for width estimation when a text style sets none.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Estimated advance of one character, as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Relative size of subscript runs.
pub const SUBSCRIPT_SCALE: f32 = 0.65;

/// Extent of text below its baseline, as a fraction of the font size.
pub const DESCENT_FACTOR: f32 = 0.3;

const CONTINUITY_TOLERANCE: f32 = 1e-3;

fn ensure_finite(points: &[Vector], what: &'static str) -> Result<(), PrimitiveError> {
    if points.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(PrimitiveError::NonFinite(what))
    }
}

/// Formats a sequence of contiguous cubic segments as SVG path data.
fn cubic_path_data(segments: &[CubicSegment]) -> String {
    let mut data = String::new();
    if let Some(first) = segments.first() {
        data.push_str(&format!("M {} {}", first.start.x(), first.start.y()));
    }
    for segment in segments {
        data.push_str(&format!(
            " C {} {}, {} {}, {} {}",
            segment.control1.x(),
            segment.control1.y(),
            segment.control2.x(),
            segment.control2.y(),
            segment.end.x(),
            segment.end.y(),
        ));
    }
    data
}

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    from: Vector,
    to: Vector,
    style: Style,
    bounds: BoundingBox,
}

impl Line {
    /// Creates a line between two canvas points with the outline base style.
    pub fn new(from: Vector, to: Vector) -> Result<Self, PrimitiveError> {
        ensure_finite(&[from, to], "line")?;
        Ok(Self {
            from,
            to,
            style: Style::outline(),
            bounds: BoundingBox::from_corners(from, to),
        })
    }

    /// Returns a copy with `patch` overlaid on the current style.
    pub fn with_style(self, patch: &Style) -> Self {
        Self {
            style: overlay(&self.style, patch),
            ..self
        }
    }

    /// Start point.
    pub fn from(&self) -> Vector {
        self.from
    }

    /// End point.
    pub fn to(&self) -> Vector {
        self.to
    }

    fn path_data(&self) -> String {
        format!(
            "M {} {} L {} {}",
            self.from.x(),
            self.from.y(),
            self.to.x(),
            self.to.y()
        )
    }
}

/// One cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    start: Vector,
    control1: Vector,
    control2: Vector,
    end: Vector,
}

impl CubicSegment {
    /// Builds a segment from its end points and two control points.
    pub fn new(start: Vector, control1: Vector, control2: Vector, end: Vector) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Point the segment starts at.
    pub fn start(&self) -> Vector {
        self.start
    }

    /// Control point pulling away from the start.
    pub fn control1(&self) -> Vector {
        self.control1
    }

    /// Control point pulling into the end.
    pub fn control2(&self) -> Vector {
        self.control2
    }

    /// Point the segment ends at.
    pub fn end(&self) -> Vector {
        self.end
    }

    /// Returns the four defining points in order.
    pub fn points(&self) -> [Vector; 4] {
        [self.start, self.control1, self.control2, self.end]
    }
}

/// A circle approximated by four cubic arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Vector,
    radius: f32,
    style: Style,
    bounds: BoundingBox,
}

impl Circle {
    /// Creates a circle with the outline base style.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveError::InvalidRadius`] when the radius is negative
    /// or not finite.
    pub fn new(center: Vector, radius: f32) -> Result<Self, PrimitiveError> {
        ensure_finite(&[center], "circle")?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(PrimitiveError::InvalidRadius(radius));
        }
        let extent = Vector::new(radius, radius);
        Ok(Self {
            center,
            radius,
            style: Style::outline(),
            bounds: BoundingBox::from_corners(center - extent, center + extent),
        })
    }

    /// Returns a copy with `patch` overlaid on the current style.
    pub fn with_style(self, patch: &Style) -> Self {
        Self {
            style: overlay(&self.style, patch),
            ..self
        }
    }

    /// Center of the circle.
    pub fn center(&self) -> Vector {
        self.center
    }

    /// Radius in canvas units.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The four arcs, running counterclockwise on screen from the bottom of
    /// the circle: bottom, left, top, right and back to the bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgdraw_core::draw::Circle;
    /// use cfgdraw_core::geometry::Vector;
    ///
    /// let circle = Circle::new(Vector::new(10.0, 10.0), 2.0).unwrap();
    /// let arcs = circle.arcs();
    /// assert_eq!(arcs[0].start(), Vector::new(10.0, 12.0));
    /// assert_eq!(arcs[0].end(), Vector::new(8.0, 10.0));
    /// assert_eq!(arcs[3].end(), arcs[0].start());
    /// ```
    pub fn arcs(&self) -> [CubicSegment; 4] {
        let Self { center: c, radius: r, .. } = *self;
        let k = r * CIRCLE_CONTROL_FACTOR;

        let bottom = c + Vector::new(0.0, r);
        let left = c - Vector::new(r, 0.0);
        let top = c - Vector::new(0.0, r);
        let right = c + Vector::new(r, 0.0);

        [
            CubicSegment::new(
                bottom,
                bottom - Vector::new(k, 0.0),
                left + Vector::new(0.0, k),
                left,
            ),
            CubicSegment::new(
                left,
                left - Vector::new(0.0, k),
                top - Vector::new(k, 0.0),
                top,
            ),
            CubicSegment::new(
                top,
                top + Vector::new(k, 0.0),
                right - Vector::new(0.0, k),
                right,
            ),
            CubicSegment::new(
                right,
                right + Vector::new(0.0, k),
                bottom + Vector::new(k, 0.0),
                bottom,
            ),
        ]
    }
}

/// An open path of contiguous cubic segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    segments: Vec<CubicSegment>,
    style: Style,
    bounds: BoundingBox,
}

impl Curve {
    /// Creates a curve from its segments with the outline base style.
    ///
    /// # Errors
    ///
    /// - [`PrimitiveError::EmptyCurve`] if `segments` is empty
    /// - [`PrimitiveError::DiscontinuousCurve`] if a segment does not start
    ///   where the previous one ends
    /// - [`PrimitiveError::NonFinite`] for NaN or infinite points
    pub fn new(segments: Vec<CubicSegment>) -> Result<Self, PrimitiveError> {
        let points: Vec<Vector> = segments.iter().flat_map(CubicSegment::points).collect();
        ensure_finite(&points, "curve")?;

        for (index, pair) in segments.windows(2).enumerate() {
            if pair[0].end.distance(pair[1].start) > CONTINUITY_TOLERANCE {
                return Err(PrimitiveError::DiscontinuousCurve { index: index + 1 });
            }
        }

        let bounds = BoundingBox::from_points(points).ok_or(PrimitiveError::EmptyCurve)?;
        Ok(Self {
            segments,
            style: Style::outline(),
            bounds,
        })
    }

    /// Starts a curve at `start`; segments appended through the builder are
    /// contiguous by construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgdraw_core::draw::Curve;
    /// use cfgdraw_core::geometry::Vector;
    ///
    /// let curve = Curve::starting_at(Vector::ZERO)
    ///     .cubic_to(Vector::new(0.0, 5.0), Vector::new(5.0, 10.0), Vector::new(10.0, 10.0))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(curve.segments().len(), 1);
    /// ```
    pub fn starting_at(start: Vector) -> CurveBuilder {
        CurveBuilder {
            cursor: start,
            segments: Vec::new(),
        }
    }

    /// Same as [`Line::with_style`].
    pub fn with_style(self, patch: &Style) -> Self {
        Self {
            style: overlay(&self.style, patch),
            ..self
        }
    }

    /// Segments in drawing order.
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Start point of the first segment.
    pub fn start(&self) -> Vector {
        self.segments[0].start
    }

    /// End point of the last segment.
    pub fn end(&self) -> Vector {
        self.segments[self.segments.len() - 1].end
    }
}

/// Incremental builder for [`Curve`].
#[derive(Debug, Clone)]
pub struct CurveBuilder {
    cursor: Vector,
    segments: Vec<CubicSegment>,
}

impl CurveBuilder {
    /// Appends a segment from the current end point.
    pub fn cubic_to(mut self, control1: Vector, control2: Vector, end: Vector) -> Self {
        self.segments
            .push(CubicSegment::new(self.cursor, control1, control2, end));
        self.cursor = end;
        self
    }

    /// Finishes the curve; fails like [`Curve::new`] when no segment was added.
    pub fn build(self) -> Result<Curve, PrimitiveError> {
        Curve::new(self.segments)
    }
}

/// Builds the open "V" arrowhead whose tip is at `tip`, pointing along
/// `direction`.
///
/// With `n` the unit direction and `m` the direction rotated by -90 degrees,
/// the head is two cubic segments running `tip - 3n - 3m` to `tip` and back
/// out to `tip - 3n + 3m`.
///
/// # Errors
///
/// Fails with a [`GeometryError::ZeroLength`](crate::error::GeometryError)
/// when `direction` has no length.
pub fn arrowhead(tip: Vector, direction: Vector) -> Result<Curve, PrimitiveError> {
    let n = direction.normalize()?;
    // n rotated by -90 degrees
    let m = Vector::new(n.y(), -n.x());

    Curve::starting_at(tip - n * 3.0 - m * 3.0)
        .cubic_to(tip - n * 2.5 - m * 1.5, tip - n * 1.5 - m * 0.5, tip)
        .cubic_to(tip - n * 1.5 + m * 0.5, tip - n * 2.5 + m * 1.5, tip - n * 3.0 + m * 3.0)
        .build()
}

/// A run of text sharing italic and subscript flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    content: String,
    italic: bool,
    subscript: bool,
}

impl TextRun {
    /// Upright, full-size text.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            italic: false,
            subscript: false,
        }
    }

    /// Italic text, used for identifiers.
    pub fn italic(content: impl Into<String>) -> Self {
        Self::plain(content).with_italic(true)
    }

    /// Upright text at subscript size and baseline.
    pub fn subscript(content: impl Into<String>) -> Self {
        Self::plain(content).with_subscript(true)
    }

    /// Switches italics on or off.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Switches subscript placement on or off.
    pub fn with_subscript(mut self, subscript: bool) -> Self {
        self.subscript = subscript;
        self
    }

    /// The raw characters of the run.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the run is set in italics.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Whether the run is lowered and shrunk as a subscript.
    pub fn is_subscript(&self) -> bool {
        self.subscript
    }

    /// Estimated advance width at the given font size.
    pub fn estimated_width(&self, font_size: f32) -> f32 {
        let scale = if self.subscript { SUBSCRIPT_SCALE } else { 1.0 };
        self.content.chars().count() as f32 * CHAR_WIDTH_FACTOR * font_size * scale
    }

    fn to_tspan(&self) -> svg_element::TSpan {
        let mut tspan = svg_element::TSpan::new(self.content.as_str());
        if self.italic {
            tspan = tspan.set("font-style", "italic");
        }
        if self.subscript {
            tspan = tspan
                .set("font-size", "65%")
                .set("baseline-shift", "sub");
        }
        tspan
    }
}

/// A line of styled text runs placed at an anchor point on the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    anchor: Vector,
    runs: Vec<TextRun>,
    style: Style,
    bounds: BoundingBox,
}

impl Text {
    /// Creates text with the ink base style and the given alignment.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveError::EmptyText`] when `runs` is empty.
    pub fn new(
        anchor: Vector,
        runs: Vec<TextRun>,
        alignment: TextAnchor,
    ) -> Result<Self, PrimitiveError> {
        ensure_finite(&[anchor], "text")?;
        if runs.is_empty() {
            return Err(PrimitiveError::EmptyText);
        }
        let style = Style::ink().with_text_anchor(alignment);
        let bounds = Self::estimate_bounds(anchor, &runs, &style);
        Ok(Self {
            anchor,
            runs,
            style,
            bounds,
        })
    }

    /// Returns a copy with `patch` overlaid on the current style. The bounds
    /// are re-estimated since font size and alignment may change.
    pub fn with_style(self, patch: &Style) -> Self {
        let style = overlay(&self.style, patch);
        let bounds = Self::estimate_bounds(self.anchor, &self.runs, &style);
        Self {
            style,
            bounds,
            ..self
        }
    }

    /// Canvas point the text is aligned to.
    pub fn anchor(&self) -> Vector {
        self.anchor
    }

    /// Runs in reading order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Horizontal placement relative to [`Text::anchor`].
    pub fn alignment(&self) -> TextAnchor {
        self.style.text_anchor().unwrap_or_default()
    }

    fn estimate_bounds(anchor: Vector, runs: &[TextRun], style: &Style) -> BoundingBox {
        let font_size = style.font_size().unwrap_or(DEFAULT_FONT_SIZE);
        let width: f32 = runs.iter().map(|run| run.estimated_width(font_size)).sum();
        let (left, right) = style.text_anchor().unwrap_or_default().split_width(width);

        BoundingBox::from_corners(
            Vector::new(anchor.x() - left, anchor.y() - font_size),
            Vector::new(anchor.x() + right, anchor.y() + DESCENT_FACTOR * font_size),
        )
    }
}

/// Any renderable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(Line),
    Circle(Circle),
    Curve(Curve),
    Text(Text),
}

impl Primitive {
    /// Canvas extent of the primitive, including estimated text width.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Self::Line(line) => line.bounds,
            Self::Circle(circle) => circle.bounds,
            Self::Curve(curve) => curve.bounds,
            Self::Text(text) => text.bounds,
        }
    }

    /// Presentation attributes after the base style and any patches.
    pub fn style(&self) -> &Style {
        match self {
            Self::Line(line) => &line.style,
            Self::Circle(circle) => &circle.style,
            Self::Curve(curve) => &curve.style,
            Self::Text(text) => &text.style,
        }
    }

    /// Short name of the variant, used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
            Self::Curve(_) => "curve",
            Self::Text(_) => "text",
        }
    }

    /// Converts the primitive into its SVG markup.
    pub fn to_svg_node(&self) -> SvgNode {
        trace!(kind = self.kind(); "Rendering primitive");
        match self {
            Self::Line(line) => {
                let path = svg_element::Path::new().set("d", line.path_data());
                Box::new(apply_style!(path, &line.style))
            }
            Self::Circle(circle) => {
                let path = svg_element::Path::new().set("d", cubic_path_data(&circle.arcs()));
                Box::new(apply_style!(path, &circle.style))
            }
            Self::Curve(curve) => {
                let path = svg_element::Path::new().set("d", cubic_path_data(&curve.segments));
                Box::new(apply_style!(path, &curve.style))
            }
            Self::Text(text) => {
                let mut element = svg_element::Text::new("")
                    .set("x", text.anchor.x())
                    .set("y", text.anchor.y());
                element = apply_style!(element, &text.style);

                // Runs are written back to back: whitespace between tspans
                // would render as a visible gap.
                let runs: String = text
                    .runs
                    .iter()
                    .map(|run| run.to_tspan().to_string())
                    .collect();
                Box::new(element.add(Blob::new(runs)))
            }
        }
    }
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Circle> for Primitive {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Curve> for Primitive {
    fn from(curve: Curve) -> Self {
        Self::Curve(curve)
    }
}

impl From<Text> for Primitive {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}
