//! Color handling for cfgdraw diagrams
//!
//! [`Color`] wraps `DynamicColor` from the color crate. [`Paint`] adds the
//! explicit `none` paint used for unfilled outlines and unstroked text.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#ff0000" or "red".
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgdraw_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// What a stroke or fill is painted with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Paint {
    /// Nothing is painted (`none`)
    None,
    /// A solid color
    Color(Color),
}

impl Paint {
    /// Solid black, the default ink for outlines and text
    pub fn black() -> Self {
        Self::Color(Color::default())
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Color(color) => color.fmt(f),
        }
    }
}

impl From<Paint> for svg::node::Value {
    fn from(paint: Paint) -> Self {
        Self::from(paint.to_string())
    }
}
