//! The SVG document container.
//!
//! A [`Document`] accumulates primitives in drawing order and sizes its canvas
//! to fit them when it is serialized. Later elements draw over earlier ones.

use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, error, info};
use svg::node::element as svg_element;

use crate::{
    apply_style,
    draw::{Style, primitive::Primitive},
    error::SinkError,
    geometry::{BoundingBox, Vector},
};

/// Canvas margin around the content bounds.
pub const DEFAULT_MARGIN: f32 = 5.0;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

const FRAME_STROKE_WIDTH: f32 = 0.25;

/// An ordered collection of primitives that renders to one SVG file.
///
/// # Examples
///
/// ```
/// use cfgdraw_core::draw::{Circle, Document};
/// use cfgdraw_core::geometry::Vector;
///
/// let mut doc = Document::new();
/// doc.add(Circle::new(Vector::new(10.0, 10.0), 7.5).unwrap());
///
/// let (bounds, bytes) = doc.finalize();
/// assert_eq!(bounds.max(), Vector::new(17.5, 17.5));
/// assert!(String::from_utf8(bytes).unwrap().contains("<path"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    elements: Vec<Primitive>,
    margin: f32,
    frame: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            margin: DEFAULT_MARGIN,
            frame: false,
        }
    }
}

impl Document {
    /// Creates an empty document with the default margin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the margin added around the content bounds.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Enables the debug frame drawn along the canvas edges.
    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }

    /// Appends a primitive on top of everything added so far.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.elements.push(primitive.into());
    }

    pub fn elements(&self) -> &[Primitive] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Union of every primitive's bounds, seeded at the origin.
    ///
    /// An empty document is the degenerate box at the origin.
    pub fn bounds(&self) -> BoundingBox {
        self.elements
            .iter()
            .fold(BoundingBox::from_point(Vector::ZERO), |acc, primitive| {
                acc.union(&primitive.bounds())
            })
    }

    /// The serialized canvas: the content bounds expanded by the margin.
    pub fn canvas(&self) -> BoundingBox {
        self.bounds().expand(self.margin)
    }

    /// Computes the bounds and serializes the document in one pass.
    pub fn finalize(&self) -> (BoundingBox, Vec<u8>) {
        let bounds = self.bounds();
        let markup = self.render(bounds.expand(self.margin));
        (bounds, markup.into_bytes())
    }

    /// Renders the document into an in-memory string.
    pub fn to_svg_string(&self) -> String {
        self.render(self.canvas())
    }

    /// Writes the document to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Write`] when the sink rejects the bytes.
    pub fn serialize<W: Write>(&self, mut sink: W) -> Result<(), SinkError> {
        let (_, bytes) = self.finalize();
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }

    /// Serializes the document into the file at `path`, creating or truncating
    /// it. The file is closed before returning on every path.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Create`] when the file cannot be opened and
    /// [`SinkError::Write`] when writing fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SinkError> {
        let path = path.as_ref();
        info!(path:? = path; "Creating SVG file");

        let file = File::create(path).map_err(|err| {
            error!(path:? = path, err:err; "Failed to create SVG file");
            SinkError::Create {
                path: path.to_path_buf(),
                source: err,
            }
        })?;

        if let Err(err) = self.serialize(BufWriter::new(file)) {
            error!(path:? = path, err:err; "Failed to write SVG content");
            return Err(err);
        }

        Ok(())
    }

    fn render(&self, canvas: BoundingBox) -> String {
        debug!(
            elements = self.elements.len(),
            width = canvas.width(),
            height = canvas.height();
            "Serializing document"
        );

        let mut svg_doc = svg::Document::new()
            .set("version", "1.1")
            .set("baseProfile", "full")
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set(
                "viewBox",
                (
                    canvas.min().x(),
                    canvas.min().y(),
                    canvas.width(),
                    canvas.height(),
                ),
            );

        for primitive in &self.elements {
            svg_doc = svg_doc.add(primitive.to_svg_node());
        }

        if self.frame {
            for (from, to) in frame_edges(canvas) {
                svg_doc = svg_doc.add(frame_line(from, to));
            }
        }

        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{XML_DECLARATION}");
        let _ = write!(out, "{svg_doc}");
        out
    }
}

impl<P: Into<Primitive>> Extend<P> for Document {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

fn frame_edges(canvas: BoundingBox) -> [(Vector, Vector); 4] {
    let (min, max) = (canvas.min(), canvas.max());
    let top_right = Vector::new(max.x(), min.y());
    let bottom_left = Vector::new(min.x(), max.y());
    [
        (min, top_right),
        (top_right, max),
        (max, bottom_left),
        (bottom_left, min),
    ]
}

fn frame_line(from: Vector, to: Vector) -> svg_element::Path {
    let style = Style::outline().with_stroke_width(FRAME_STROKE_WIDTH);
    let path = svg_element::Path::new().set(
        "d",
        format!("M {} {} L {} {}", from.x(), from.y(), to.x(), to.y()),
    );
    apply_style!(path, &style)
}
