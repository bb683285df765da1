//! Composite diagram glyphs.
//!
//! Glyphs are the top-level elements of a diagram. They are placed on the
//! authoring grid and expand into scene-graph primitives on canvas when a
//! [`Representation`] is turned into a [`Document`].
//!
//! # Overview
//!
//! - [`Node`]: circled vertex with an italic name and subscripted index
//! - [`Arrow`]: edge between two nodes with a "V" head
//! - [`Loop`]: self-loop arc with a "V" head
//! - [`Ellipsis`]: three dots continuing a sequence
//! - [`Caption`]: free text
//!
//! Geometry that is a visual-tuning choice (node radius, loop reach, fonts)
//! comes from [`GlyphConfig`] at expansion time.

use log::{debug, trace};

use cfgdraw_core::{
    color::Paint,
    draw::{Circle, Curve, Document, Line, Primitive, Style, Text, TextAnchor, TextRun, arrowhead},
    error::{GeometryError, PrimitiveError},
    geometry::{Vector, grid_to_canvas},
};

use crate::config::{AppConfig, GlyphConfig};

/// Distance between consecutive nodes of a chain, in grid units.
pub const CHAIN_STEP: f32 = 5.0;

const DOT_RADIUS: f32 = 0.6;
const DOT_OFFSETS: [f32; 3] = [-4.0, 0.0, 4.0];

fn outline_style(config: &GlyphConfig, feasible: bool) -> Style {
    let style = Style::new().with_stroke_width(config.stroke_width());
    if feasible {
        style
    } else {
        style.with_dash(config.infeasible_dash().clone())
    }
}

fn text_style(config: &GlyphConfig) -> Style {
    Style::new()
        .with_font_size(config.font_size())
        .with_font_family(config.font_family())
}

/// A vertex drawn as a circle with a label such as *s*₁.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    position: Vector,
    name: Option<String>,
    index: String,
    terminal: bool,
    feasible: bool,
}

impl Node {
    /// Creates a feasible, non-terminal node at a grid position.
    pub fn new(position: Vector, index: impl Into<String>) -> Self {
        Self {
            position,
            name: None,
            index: index.into(),
            terminal: false,
            feasible: true,
        }
    }

    /// Overrides the configured node name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Terminal nodes get an inner ring.
    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    /// Infeasible nodes are dashed.
    pub fn with_feasible(mut self, feasible: bool) -> Self {
        self.feasible = feasible;
        self
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    fn emit(&self, config: &GlyphConfig, out: &mut Vec<Primitive>) -> Result<(), PrimitiveError> {
        let center = grid_to_canvas(self.position);
        let outline = outline_style(config, self.feasible);

        out.push(
            Circle::new(center, config.node_radius())?
                .with_style(&outline)
                .into(),
        );
        if self.terminal {
            out.push(
                Circle::new(center, config.inner_ring_radius())?
                    .with_style(&outline)
                    .into(),
            );
        }

        let name = self.name.as_deref().unwrap_or(config.node_name());
        let label = Text::new(
            center + Vector::new(0.0, config.label_offset()),
            vec![TextRun::italic(name), TextRun::subscript(self.index.as_str())],
            TextAnchor::Middle,
        )?;
        out.push(label.with_style(&text_style(config)).into());

        Ok(())
    }
}

/// A directed edge between two grid points.
///
/// The line is shortened by the node radius at both ends so it touches the
/// node circles, and the head sits at the shortened destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    from: Vector,
    to: Vector,
    feasible: bool,
}

impl Arrow {
    /// Creates a feasible arrow between two grid points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentPoints`] when both ends are equal.
    pub fn new(from: Vector, to: Vector) -> Result<Self, GeometryError> {
        if from == to {
            return Err(GeometryError::CoincidentPoints {
                x: from.x(),
                y: from.y(),
            });
        }
        Ok(Self {
            from,
            to,
            feasible: true,
        })
    }

    /// Infeasible arrows are dashed, head included.
    pub fn with_feasible(mut self, feasible: bool) -> Self {
        self.feasible = feasible;
        self
    }

    pub fn from(&self) -> Vector {
        self.from
    }

    pub fn to(&self) -> Vector {
        self.to
    }

    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Shortens the canvas segment `a`-`b` by `radius` at both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgdraw::glyph::Arrow;
    /// use cfgdraw_core::geometry::Vector;
    ///
    /// let (start, end) =
    ///     Arrow::canvas_segment(Vector::new(0.0, 0.0), Vector::new(10.0, 0.0), 2.0).unwrap();
    /// assert_eq!(start, Vector::new(2.0, 0.0));
    /// assert_eq!(end, Vector::new(8.0, 0.0));
    /// ```
    pub fn canvas_segment(
        a: Vector,
        b: Vector,
        radius: f32,
    ) -> Result<(Vector, Vector), GeometryError> {
        let n = (b - a)
            .normalize()
            .map_err(|_| GeometryError::CoincidentPoints { x: a.x(), y: a.y() })?;
        Ok((a + n * radius, b - n * radius))
    }

    fn emit(&self, config: &GlyphConfig, out: &mut Vec<Primitive>) -> Result<(), PrimitiveError> {
        let a = grid_to_canvas(self.from);
        let b = grid_to_canvas(self.to);
        let (start, end) = Self::canvas_segment(a, b, config.node_radius())?;
        let style = outline_style(config, self.feasible);

        out.push(Line::new(start, end)?.with_style(&style).into());
        out.push(arrowhead(end, b - a)?.with_style(&style).into());

        Ok(())
    }
}

/// A self-loop drawn next to a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    position: Vector,
    angle: Option<f32>,
}

impl Loop {
    /// Creates a loop on the node at a grid position, pointing at the
    /// configured base angle.
    pub fn new(position: Vector) -> Self {
        Self {
            position,
            angle: None,
        }
    }

    /// Overrides the base angle, in radians.
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn angle(&self) -> Option<f32> {
        self.angle
    }

    fn emit(&self, config: &GlyphConfig, out: &mut Vec<Primitive>) -> Result<(), PrimitiveError> {
        let center = grid_to_canvas(self.position);
        let angle = self.angle.unwrap_or(config.loop_angle());
        let n1 = Vector::from_angle(angle + config.loop_spread());
        let n2 = Vector::from_angle(angle - config.loop_spread());

        let start = center + n1 * config.node_radius();
        let control1 = center + n1 * config.loop_reach();
        let control2 = center + n2 * config.loop_reach();
        let end = center + n2 * config.node_radius();

        let style = outline_style(config, true);
        let arc = Curve::starting_at(start)
            .cubic_to(control1, control2, end)
            .build()?;
        out.push(arc.with_style(&style).into());
        out.push(arrowhead(end, end - control2)?.with_style(&style).into());

        Ok(())
    }
}

/// Three dots along a direction, centered on a grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsis {
    position: Vector,
    direction: Vector,
}

impl Ellipsis {
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] when `direction` has no length.
    pub fn new(position: Vector, direction: Vector) -> Result<Self, GeometryError> {
        Ok(Self {
            position,
            direction: direction.normalize()?,
        })
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    fn emit(&self, out: &mut Vec<Primitive>) -> Result<(), PrimitiveError> {
        let center = grid_to_canvas(self.position);
        let style = Style::new()
            .with_stroke(Paint::None)
            .with_fill(Paint::black());

        for offset in DOT_OFFSETS {
            let dot = Circle::new(center + self.direction * offset, DOT_RADIUS)?;
            out.push(dot.with_style(&style).into());
        }
        Ok(())
    }
}

/// Free text at a grid point, such as a diagram title.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    position: Vector,
    runs: Vec<TextRun>,
    alignment: TextAnchor,
}

impl Caption {
    /// Creates a centered caption.
    pub fn new(position: Vector, runs: Vec<TextRun>) -> Self {
        Self {
            position,
            runs,
            alignment: TextAnchor::Middle,
        }
    }

    /// A caption like *P*₀: an italic label followed by a subscripted index.
    pub fn indexed(position: Vector, label: &str, index: impl ToString) -> Self {
        Self::new(
            position,
            vec![TextRun::italic(label), TextRun::subscript(index.to_string())],
        )
    }

    pub fn with_alignment(mut self, alignment: TextAnchor) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn alignment(&self) -> TextAnchor {
        self.alignment
    }

    fn emit(&self, config: &GlyphConfig, out: &mut Vec<Primitive>) -> Result<(), PrimitiveError> {
        let text = Text::new(
            grid_to_canvas(self.position),
            self.runs.clone(),
            self.alignment,
        )?;
        out.push(text.with_style(&text_style(config)).into());
        Ok(())
    }
}

/// A top-level diagram element.
#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    Node(Node),
    Arrow(Arrow),
    Loop(Loop),
    Ellipsis(Ellipsis),
    Caption(Caption),
}

impl Glyph {
    /// Short name of the variant, used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Node(_) => "node",
            Self::Arrow(_) => "arrow",
            Self::Loop(_) => "loop",
            Self::Ellipsis(_) => "ellipsis",
            Self::Caption(_) => "caption",
        }
    }

    /// Expands the glyph into canvas primitives.
    pub fn emit(&self, config: &GlyphConfig) -> Result<Vec<Primitive>, PrimitiveError> {
        let mut out = Vec::new();
        match self {
            Self::Node(node) => node.emit(config, &mut out)?,
            Self::Arrow(arrow) => arrow.emit(config, &mut out)?,
            Self::Loop(self_loop) => self_loop.emit(config, &mut out)?,
            Self::Ellipsis(ellipsis) => ellipsis.emit(&mut out)?,
            Self::Caption(caption) => caption.emit(config, &mut out)?,
        }
        trace!(kind = self.kind(), primitives = out.len(); "Glyph expanded");
        Ok(out)
    }
}

impl From<Node> for Glyph {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Arrow> for Glyph {
    fn from(arrow: Arrow) -> Self {
        Self::Arrow(arrow)
    }
}

impl From<Loop> for Glyph {
    fn from(self_loop: Loop) -> Self {
        Self::Loop(self_loop)
    }
}

impl From<Ellipsis> for Glyph {
    fn from(ellipsis: Ellipsis) -> Self {
        Self::Ellipsis(ellipsis)
    }
}

impl From<Caption> for Glyph {
    fn from(caption: Caption) -> Self {
        Self::Caption(caption)
    }
}

/// Direction in which a chain grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainDirection {
    /// Downward (default)
    #[default]
    Vertical,
    /// Rightward
    Horizontal,
}

impl ChainDirection {
    fn step(self) -> Vector {
        match self {
            Self::Vertical => Vector::new(0.0, CHAIN_STEP),
            Self::Horizontal => Vector::new(CHAIN_STEP, 0.0),
        }
    }
}

/// An ordered list of glyphs forming one diagram.
///
/// Glyphs are drawn in insertion order, so later glyphs cover earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Representation {
    glyphs: Vec<Glyph>,
}

impl Representation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a glyph.
    pub fn add(&mut self, glyph: impl Into<Glyph>) {
        self.glyphs.push(glyph.into());
    }

    /// Appends every glyph of another representation, keeping its order.
    pub fn append(&mut self, other: Representation) {
        self.glyphs.extend(other.glyphs);
    }

    /// Adds a straight chain of nodes joined by arrows, starting at `start`
    /// and stepping [`CHAIN_STEP`] grid units per node. With `terminated`
    /// set, the last node is terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgdraw::glyph::{ChainDirection, Glyph, Representation};
    /// use cfgdraw_core::geometry::Vector;
    ///
    /// let mut repr = Representation::new();
    /// repr.add_chain(Vector::new(2.0, 2.0), &["0", "1", "2"], ChainDirection::Vertical, true)
    ///     .unwrap();
    ///
    /// // Three nodes and two arrows
    /// assert_eq!(repr.len(), 5);
    /// assert!(matches!(&repr.glyphs()[4], Glyph::Node(node) if node.is_terminal()));
    /// ```
    pub fn add_chain<S: AsRef<str>>(
        &mut self,
        start: Vector,
        indices: &[S],
        direction: ChainDirection,
        terminated: bool,
    ) -> Result<(), GeometryError> {
        let mut point = start;
        for (position, index) in indices.iter().enumerate() {
            let last = position + 1 == indices.len();
            self.add(Node::new(point, index.as_ref()).with_terminal(terminated && last));
            if position > 0 {
                self.add(Arrow::new(point - direction.step(), point)?);
            }
            point = point + direction.step();
        }
        Ok(())
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Expands every glyph into a new document.
    ///
    /// # Errors
    ///
    /// Returns the first [`PrimitiveError`] raised by a glyph.
    pub fn to_document(&self, config: &AppConfig) -> Result<Document, PrimitiveError> {
        debug!(glyphs = self.glyphs.len(); "Expanding representation");

        let mut document = Document::new()
            .with_margin(config.document().margin())
            .with_frame(config.document().frame());
        for glyph in &self.glyphs {
            document.extend(glyph.emit(config.glyph())?);
        }

        debug!(primitives = document.len(); "Representation expanded");
        Ok(document)
    }
}

impl<G: Into<Glyph>> Extend<G> for Representation {
    fn extend<I: IntoIterator<Item = G>>(&mut self, iter: I) {
        self.glyphs.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use float_cmp::{approx_eq, assert_approx_eq};

    use super::*;

    fn config() -> GlyphConfig {
        GlyphConfig::default()
    }

    fn circles(primitives: &[Primitive]) -> Vec<&Circle> {
        primitives
            .iter()
            .filter_map(|primitive| match primitive {
                Primitive::Circle(circle) => Some(circle),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_node_primitives() {
        let primitives = Glyph::from(Node::new(Vector::new(1.0, 2.0), "3"))
            .emit(&config())
            .unwrap();
        assert_eq!(primitives.len(), 2);

        let rings = circles(&primitives);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].center(), Vector::new(7.5, 12.5));
        assert_eq!(rings[0].radius(), 7.5);
        assert_eq!(primitives[0].style().stroke_width(), Some(0.5));
        assert_eq!(primitives[0].style().dasharray(), None);

        let Primitive::Text(label) = &primitives[1] else {
            panic!("expected a label, got {:?}", primitives[1]);
        };
        assert_eq!(label.anchor(), Vector::new(7.5, 14.5));
        assert_eq!(label.alignment(), TextAnchor::Middle);
        assert_eq!(label.runs()[0], TextRun::italic("s"));
        assert_eq!(label.runs()[1], TextRun::subscript("3"));
        assert_eq!(primitives[1].style().font_size(), Some(10.0));
        assert_eq!(primitives[1].style().font_family(), Some("CMU Serif"));
    }

    #[test]
    fn test_terminal_node_has_inner_ring() {
        let primitives = Glyph::from(Node::new(Vector::ZERO, "1").with_terminal(true))
            .emit(&config())
            .unwrap();

        let radii: Vec<f32> = circles(&primitives).iter().map(|c| c.radius()).collect();
        assert_eq!(radii, vec![7.5, 6.5]);
    }

    #[test]
    fn test_infeasible_node_is_dashed() {
        let primitives = Glyph::from(
            Node::new(Vector::ZERO, "1")
                .with_terminal(true)
                .with_feasible(false),
        )
        .emit(&config())
        .unwrap();

        for circle in circles(&primitives) {
            let style = Primitive::from(circle.clone()).style().clone();
            assert_eq!(style.dasharray(), Some("1,1".to_string()));
        }
    }

    #[test]
    fn test_node_name_override() {
        let primitives = Glyph::from(Node::new(Vector::ZERO, "0").with_name("q"))
            .emit(&config())
            .unwrap();
        let Primitive::Text(label) = &primitives[1] else {
            panic!("expected a label");
        };
        assert_eq!(label.runs()[0].content(), "q");
    }

    #[test]
    fn test_arrow_canvas_segment_is_shortened() {
        let r = 7.5;
        let (start, end) =
            Arrow::canvas_segment(Vector::ZERO, Vector::new(10.0, 0.0), r).unwrap();
        assert_eq!(start, Vector::new(r, 0.0));
        assert_eq!(end, Vector::new(10.0 - r, 0.0));
    }

    #[test]
    fn test_arrow_rejects_coincident_points() {
        let err = Arrow::new(Vector::new(1.0, 1.0), Vector::new(1.0, 1.0)).unwrap_err();
        assert_eq!(err, GeometryError::CoincidentPoints { x: 1.0, y: 1.0 });

        let err = Arrow::canvas_segment(Vector::ZERO, Vector::ZERO, 1.0).unwrap_err();
        assert_eq!(err, GeometryError::CoincidentPoints { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_arrow_primitives() {
        // Grid (0,0) -> (0,5) is canvas (2.5,2.5) -> (2.5,27.5)
        let arrow = Arrow::new(Vector::ZERO, Vector::new(0.0, 5.0)).unwrap();
        let primitives = Glyph::from(arrow).emit(&config()).unwrap();
        assert_eq!(primitives.len(), 2);

        let Primitive::Line(line) = &primitives[0] else {
            panic!("expected a line");
        };
        assert_eq!(line.from(), Vector::new(2.5, 10.0));
        assert_eq!(line.to(), Vector::new(2.5, 20.0));

        let Primitive::Curve(head) = &primitives[1] else {
            panic!("expected an arrowhead");
        };
        assert_eq!(head.segments()[0].end(), Vector::new(2.5, 20.0));
        assert_eq!(primitives[1].style().fill(), Some(Paint::None));
    }

    #[test]
    fn test_infeasible_arrow_dashes_head() {
        let arrow = Arrow::new(Vector::ZERO, Vector::new(5.0, 0.0))
            .unwrap()
            .with_feasible(false);
        let primitives = Glyph::from(arrow).emit(&config()).unwrap();
        for primitive in &primitives {
            assert_eq!(primitive.style().dasharray(), Some("1,1".to_string()));
        }
    }

    #[test]
    fn test_loop_geometry() {
        let primitives = Glyph::from(Loop::new(Vector::ZERO)).emit(&config()).unwrap();
        assert_eq!(primitives.len(), 2);

        let Primitive::Curve(arc) = &primitives[0] else {
            panic!("expected a loop arc");
        };
        let center = Vector::new(2.5, 2.5);
        let segment = arc.segments()[0];
        assert_approx_eq!(f32, segment.start().distance(center), 7.5, epsilon = 1e-4);
        assert_approx_eq!(f32, segment.control1().distance(center), 20.0, epsilon = 1e-4);
        assert_approx_eq!(f32, segment.control2().distance(center), 20.0, epsilon = 1e-4);
        assert_approx_eq!(f32, segment.end().distance(center), 7.5, epsilon = 1e-4);

        // The default loop hangs below the node, symmetric about the vertical
        assert!(segment.control1().y() > center.y());
        assert!(approx_eq!(
            f32,
            segment.start().x() - center.x(),
            center.x() - segment.end().x(),
            epsilon = 1e-4
        ));

        let Primitive::Curve(head) = &primitives[1] else {
            panic!("expected an arrowhead");
        };
        assert_eq!(head.segments()[0].end(), segment.end());
    }

    #[test]
    fn test_loop_angle_override() {
        let glyph = Glyph::from(Loop::new(Vector::ZERO).with_angle(-FRAC_PI_2));
        let primitives = glyph.emit(&config()).unwrap();
        let Primitive::Curve(arc) = &primitives[0] else {
            panic!("expected a loop arc");
        };
        assert!(arc.segments()[0].control1().y() < 2.5);
    }

    #[test]
    fn test_ellipsis_dots() {
        let ellipsis = Ellipsis::new(Vector::new(1.0, 1.0), Vector::new(0.0, 2.0)).unwrap();
        let primitives = Glyph::from(ellipsis).emit(&config()).unwrap();

        let centers: Vec<Vector> = circles(&primitives).iter().map(|c| c.center()).collect();
        assert_eq!(
            centers,
            vec![
                Vector::new(7.5, 3.5),
                Vector::new(7.5, 7.5),
                Vector::new(7.5, 11.5)
            ]
        );
        for primitive in &primitives {
            assert_eq!(primitive.style().fill(), Some(Paint::black()));
            assert_eq!(primitive.style().stroke(), Some(Paint::None));
        }
        assert_eq!(
            Ellipsis::new(Vector::ZERO, Vector::ZERO).unwrap_err(),
            GeometryError::ZeroLength
        );
    }

    #[test]
    fn test_caption() {
        let caption = Caption::indexed(Vector::new(2.0, 0.0), "P", 3).with_alignment(TextAnchor::Start);
        let primitives = Glyph::from(caption).emit(&config()).unwrap();

        let Primitive::Text(text) = &primitives[0] else {
            panic!("expected text");
        };
        assert_eq!(text.anchor(), Vector::new(12.5, 2.5));
        assert_eq!(text.alignment(), TextAnchor::Start);
        assert_eq!(text.runs()[1], TextRun::subscript("3"));
    }

    #[test]
    fn test_horizontal_chain() {
        let mut repr = Representation::new();
        repr.add_chain(Vector::ZERO, &["a", "b"], ChainDirection::Horizontal, false)
            .unwrap();

        let kinds: Vec<&str> = repr.glyphs().iter().map(Glyph::kind).collect();
        assert_eq!(kinds, vec!["node", "node", "arrow"]);

        let Glyph::Arrow(arrow) = &repr.glyphs()[2] else {
            panic!("expected an arrow");
        };
        assert_eq!(arrow.from(), Vector::ZERO);
        assert_eq!(arrow.to(), Vector::new(5.0, 0.0));
        assert!(
            repr.glyphs()
                .iter()
                .all(|glyph| !matches!(glyph, Glyph::Node(node) if node.is_terminal()))
        );
    }

    #[test]
    fn test_to_document_expands_in_order() {
        let mut repr = Representation::new();
        repr.add(Node::new(Vector::ZERO, "0"));
        repr.add(Loop::new(Vector::ZERO));

        let document = repr.to_document(&AppConfig::default()).unwrap();
        let kinds: Vec<&str> = document.elements().iter().map(Primitive::kind).collect();
        assert_eq!(kinds, vec!["circle", "text", "curve", "curve"]);
        assert_eq!(document.margin(), 5.0);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut first = Representation::new();
        first.add(Node::new(Vector::ZERO, "0"));
        let mut second = Representation::new();
        second.extend([Node::new(Vector::new(5.0, 0.0), "1")]);

        first.append(second);
        assert_eq!(first.len(), 2);
        let Glyph::Node(node) = &first.glyphs()[1] else {
            panic!("expected a node");
        };
        assert_eq!(node.index(), "1");
    }
}
