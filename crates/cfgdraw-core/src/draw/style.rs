//! Presentation attributes for scene-graph primitives.
//!
//! # Overview
//!
//! - [`Style`]: optional presentation attributes carried by every primitive
//! - [`StrokeStyle`]: dash patterns
//! - [`TextAnchor`]: horizontal text alignment
//! - [`overlay`]: pure merge of a partial style over a base style
//! - [`apply_style!`](crate::apply_style!): applies a style to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Field          | SVG Attribute      | Example Values   |
//! |----------------|--------------------|------------------|
//! | `stroke`       | `stroke`           | `"black"`, `"none"` |
//! | `stroke_width` | `stroke-width`     | `0.5`            |
//! | `dash`         | `stroke-dasharray` | `"1,1"`          |
//! | `fill`         | `fill`             | `"none"`         |
//! | `font_size`    | `font-size`        | `10`             |
//! | `font_family`  | `font-family`      | `"CMU Serif"`    |
//! | `text_anchor`  | `text-anchor`      | `"middle"`       |
//!
//! Fields that are `None` are not written at all.

use std::str::FromStr;

use serde::Deserialize;

use crate::color::Paint;

/// Dash pattern of a stroke.
///
/// # SVG Mapping
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "3,3"
/// - `Dotted`: "1,1"
/// - `Custom(pattern)`: Uses the provided pattern string
///
/// Deserializes from the same strings [`FromStr`] accepts, so a bad pattern
/// in a configuration file is rejected when the file is loaded.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashes with equal dash and gap lengths
    Dashed,
    /// Fine dots, used for infeasible transitions
    Dotted,
    /// Custom SVG dasharray pattern, e.g. "4,1,1,1"
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "" => Err("empty stroke style".to_string()),
            // Any other value must be a dasharray of non-negative lengths
            _ => {
                let valid = s
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|part| !part.is_empty())
                    .all(|part| part.parse::<f32>().is_ok_and(|n| n.is_finite() && n >= 0.0));
                if valid {
                    Ok(Self::Custom(s.to_string()))
                } else {
                    Err(format!(
                        "invalid stroke style `{s}`, expected solid, dashed, dotted or a dasharray such as \"2,1\""
                    ))
                }
            }
        }
    }
}

impl TryFrom<String> for StrokeStyle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("3,3".to_string()),
            Self::Dotted => Some("1,1".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Text starts at the anchor (SVG default)
    #[default]
    Start,
    /// Text is centered on the anchor
    Middle,
    /// Text ends at the anchor
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }

    /// Splits an estimated text width into the extents left and right of the anchor.
    pub fn split_width(self, width: f32) -> (f32, f32) {
        match self {
            Self::Start => (0.0, width),
            Self::Middle => (width / 2.0, width / 2.0),
            Self::End => (width, 0.0),
        }
    }
}

/// Optional presentation attributes of a primitive.
///
/// Styles are values: the `with_*` methods return a modified copy and
/// [`overlay`] merges two styles into a new one.
///
/// # Examples
///
/// ```
/// use cfgdraw_core::color::Paint;
/// use cfgdraw_core::draw::{Style, StrokeStyle, overlay};
///
/// let base = Style::outline();
/// let patch = Style::new().with_stroke_width(0.5).with_dash(StrokeStyle::Dotted);
///
/// let merged = overlay(&base, &patch);
/// assert_eq!(merged.stroke(), Some(Paint::black()));
/// assert_eq!(merged.stroke_width(), Some(0.5));
/// assert_eq!(merged.fill(), Some(Paint::None));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    stroke: Option<Paint>,
    stroke_width: Option<f32>,
    dash: Option<StrokeStyle>,
    fill: Option<Paint>,
    font_size: Option<f32>,
    font_family: Option<String>,
    text_anchor: Option<TextAnchor>,
}

impl Style {
    /// Creates a style with every attribute absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Base style of outlines (lines, circles, curves): a solid black
    /// 1-unit stroke with no fill.
    pub fn outline() -> Self {
        Self::new()
            .with_stroke(Paint::black())
            .with_stroke_width(1.0)
            .with_fill(Paint::None)
    }

    /// Base style of text: filled black with no stroke.
    pub fn ink() -> Self {
        Self::new().with_fill(Paint::black()).with_stroke(Paint::None)
    }

    pub fn with_stroke(mut self, stroke: Paint) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_dash(mut self, dash: StrokeStyle) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    pub fn with_text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.text_anchor = Some(anchor);
        self
    }

    pub fn stroke(&self) -> Option<Paint> {
        self.stroke
    }

    pub fn stroke_width(&self) -> Option<f32> {
        self.stroke_width
    }

    pub fn dash(&self) -> Option<&StrokeStyle> {
        self.dash.as_ref()
    }

    pub fn fill(&self) -> Option<Paint> {
        self.fill
    }

    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn text_anchor(&self) -> Option<TextAnchor> {
        self.text_anchor
    }

    /// Returns the dasharray to emit, if any. Solid dashes emit nothing.
    pub fn dasharray(&self) -> Option<String> {
        self.dash.as_ref().and_then(StrokeStyle::to_svg_value)
    }
}

/// Merges `patch` over `base`: every attribute present in `patch` replaces
/// the one in `base`, absent attributes keep the base value.
pub fn overlay(base: &Style, patch: &Style) -> Style {
    Style {
        stroke: patch.stroke.or(base.stroke),
        stroke_width: patch.stroke_width.or(base.stroke_width),
        dash: patch.dash.clone().or_else(|| base.dash.clone()),
        fill: patch.fill.or(base.fill),
        font_size: patch.font_size.or(base.font_size),
        font_family: patch
            .font_family
            .clone()
            .or_else(|| base.font_family.clone()),
        text_anchor: patch.text_anchor.or(base.text_anchor),
    }
}

/// Apply every present style attribute to an SVG element.
///
/// # Examples
///
/// ```
/// use cfgdraw_core::draw::Style;
/// use svg::node::element as svg_element;
///
/// let style = Style::outline().with_stroke_width(0.5);
/// let path = svg_element::Path::new().set("d", "M 0 0 L 10 0");
///
/// let path = cfgdraw_core::apply_style!(path, &style);
/// assert!(path.to_string().contains(r#"stroke-width="0.5""#));
/// ```
#[macro_export]
macro_rules! apply_style {
    ($element:expr, $style:expr) => {{
        let style: &$crate::draw::Style = $style;
        let mut elem = $element;

        if let Some(stroke) = style.stroke() {
            elem = elem.set("stroke", stroke);
        }
        if let Some(width) = style.stroke_width() {
            elem = elem.set("stroke-width", width);
        }
        if let Some(dasharray) = style.dasharray() {
            elem = elem.set("stroke-dasharray", dasharray);
        }
        if let Some(fill) = style.fill() {
            elem = elem.set("fill", fill);
        }
        if let Some(size) = style.font_size() {
            elem = elem.set("font-size", size);
        }
        if let Some(family) = style.font_family() {
            elem = elem.set("font-family", family);
        }
        if let Some(anchor) = style.text_anchor() {
            elem = elem.set("text-anchor", anchor.to_svg_value());
        }

        elem
    }};
}
