//! Geometric primitives for diagram placement and auto-sizing.
//!
//! # Overview
//!
//! - [`Vector`] - A 2D vector used both as a position and as a direction
//! - [`BoundingBox`] - An axis-aligned box defined by its min and max corners
//! - [`grid_to_canvas`] - The fixed affine map from authoring grid to canvas
//!
//! # Coordinate System
//!
//! Canvas coordinates follow SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Diagram authors work on an abstract unit grid. Grid point `(x, y)` lands on
//! canvas point `(2.5 + 5x, 2.5 + 5y)`.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::GeometryError;

/// Canvas offset of the grid origin.
pub const GRID_OFFSET: f32 = 2.5;

/// Canvas distance between two adjacent grid lines.
pub const GRID_STEP: f32 = 5.0;

/// A 2D vector in diagram space.
///
/// Vectors are immutable values. Arithmetic is available through the standard
/// operators; `*` scales by an `f32`.
///
/// # Examples
///
/// ```
/// # use cfgdraw_core::geometry::Vector;
/// let a = Vector::new(1.0, 2.0);
/// let b = Vector::new(3.0, 4.0);
///
/// let sum = a + b;
/// assert_eq!(sum, Vector::new(4.0, 6.0));
/// assert_eq!((b - a) * 2.0, Vector::new(4.0, 4.0));
/// assert_eq!(Vector::new(3.0, 4.0).length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    x: f32,
    y: f32,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Creates a new vector with the specified components
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a unit vector pointing at `angle` radians from the +X axis.
    ///
    /// Positive angles turn toward +Y, which is downward on the canvas.
    pub fn from_angle(angle: f32) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    /// Returns the x component
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y component
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both components are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks that neither component is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Multiplies both components by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean length of the vector.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Distance between two points.
    pub fn distance(self, other: Vector) -> f32 {
        (other - self).length()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] when the vector has no direction.
    /// No fallback direction is substituted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cfgdraw_core::geometry::Vector;
    /// let unit = Vector::new(0.0, 10.0).normalize().unwrap();
    /// assert_eq!(unit, Vector::new(0.0, 1.0));
    ///
    /// assert!(Vector::ZERO.normalize().is_err());
    /// ```
    pub fn normalize(self) -> Result<Self, GeometryError> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Err(GeometryError::ZeroLength);
        }
        Ok(Self {
            x: self.x / length,
            y: self.y / length,
        })
    }

    /// Rotates the vector by `angle` radians using the standard 2D rotation.
    pub fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Maps a grid coordinate to its canvas position: `(2.5 + 5x, 2.5 + 5y)`.
///
/// # Examples
///
/// ```
/// # use cfgdraw_core::geometry::{Vector, grid_to_canvas};
/// assert_eq!(grid_to_canvas(Vector::new(0.0, 0.0)), Vector::new(2.5, 2.5));
/// assert_eq!(grid_to_canvas(Vector::new(2.0, 1.0)), Vector::new(12.5, 7.5));
/// ```
pub fn grid_to_canvas(point: Vector) -> Vector {
    Vector::new(
        GRID_OFFSET + GRID_STEP * point.x,
        GRID_OFFSET + GRID_STEP * point.y,
    )
}

/// An axis-aligned bounding box.
///
/// The corners are kept ordered: `min.x <= max.x` and `min.y <= max.y` hold
/// after every operation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    min: Vector,
    max: Vector,
}

impl BoundingBox {
    /// Creates a degenerate box containing a single point
    pub fn from_point(point: Vector) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Creates the smallest box containing both corners, in any order.
    pub fn from_corners(a: Vector, b: Vector) -> Self {
        Self::from_point(a).absorb(b)
    }

    /// Creates the smallest box containing every point of the iterator.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vector>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), Self::absorb))
    }

    /// Returns the minimum corner
    pub fn min(self) -> Vector {
        self.min
    }

    /// Returns the maximum corner
    pub fn max(self) -> Vector {
        self.max
    }

    /// Returns the width of the box
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    /// Returns the height of the box
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the center of the box
    pub fn center(self) -> Vector {
        (self.min + self.max) * 0.5
    }

    /// Grows the box to include `point`.
    pub fn absorb(self, point: Vector) -> Self {
        Self {
            min: Vector::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Vector::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Grows the box to include another box.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cfgdraw_core::geometry::{BoundingBox, Vector};
    /// let a = BoundingBox::from_corners(Vector::new(0.0, 0.0), Vector::new(10.0, 5.0));
    /// let b = BoundingBox::from_corners(Vector::new(5.0, -5.0), Vector::new(20.0, 2.0));
    ///
    /// let combined = a.union(&b);
    /// assert_eq!(combined.min(), Vector::new(0.0, -5.0));
    /// assert_eq!(combined.max(), Vector::new(20.0, 5.0));
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        self.absorb(other.min).absorb(other.max)
    }

    /// Expands the box by `margin` on every side.
    ///
    /// Negative margins shrink the box but never invert it.
    pub fn expand(&self, margin: f32) -> Self {
        let offset = Vector::new(margin, margin);
        let center = self.center();
        let (min, max) = (self.min - offset, self.max + offset);
        Self {
            min: Vector::new(min.x.min(center.x), min.y.min(center.y)),
            max: Vector::new(max.x.max(center.x), max.y.max(center.y)),
        }
    }

    /// Checks whether `point` lies inside or on the border of the box
    pub fn contains_point(&self, point: Vector) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Checks whether `other` lies entirely inside this box
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn vector_strategy() -> impl Strategy<Value = Vector> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Vector::new(x, y))
    }

    fn non_zero_vector_strategy() -> impl Strategy<Value = Vector> {
        vector_strategy().prop_filter("vector must have a direction", |v| v.length() > 1e-3)
    }

    fn bbox_strategy() -> impl Strategy<Value = BoundingBox> {
        (vector_strategy(), vector_strategy()).prop_map(|(a, b)| BoundingBox::from_corners(a, b))
    }

    fn angle_strategy() -> impl Strategy<Value = f32> {
        -10.0f32..10.0
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Normalized vectors have unit length.
    fn check_normalize_has_unit_length(v: Vector) -> Result<(), TestCaseError> {
        let unit = v.normalize().expect("non-zero vector");
        prop_assert!(approx_eq!(f32, unit.length(), 1.0, epsilon = 1e-5));
        Ok(())
    }

    /// Rotation preserves length.
    fn check_rotate_preserves_length(v: Vector, angle: f32) -> Result<(), TestCaseError> {
        let rotated = v.rotate(angle);
        prop_assert!(approx_eq!(
            f32,
            rotated.length(),
            v.length(),
            epsilon = 1e-2
        ));
        Ok(())
    }

    /// The grid mapping is exactly `2.5 + 5p`.
    fn check_grid_mapping_is_exact(p: Vector) -> Result<(), TestCaseError> {
        let canvas = grid_to_canvas(p);
        prop_assert_eq!(canvas.x(), 2.5 + 5.0 * p.x());
        prop_assert_eq!(canvas.y(), 2.5 + 5.0 * p.y());
        Ok(())
    }

    /// Corners stay ordered after absorbing any point.
    fn check_absorb_keeps_corners_ordered(
        bbox: BoundingBox,
        p: Vector,
    ) -> Result<(), TestCaseError> {
        let grown = bbox.absorb(p);
        prop_assert!(grown.min().x() <= grown.max().x());
        prop_assert!(grown.min().y() <= grown.max().y());
        prop_assert!(grown.contains_point(p));
        prop_assert!(grown.contains(&bbox));
        Ok(())
    }

    /// Union is commutative.
    fn check_union_is_commutative(a: BoundingBox, b: BoundingBox) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.union(&b), b.union(&a));
        Ok(())
    }

    /// Union is associative.
    fn check_union_is_associative(
        a: BoundingBox,
        b: BoundingBox,
        c: BoundingBox,
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn normalize_has_unit_length(v in non_zero_vector_strategy()) {
            check_normalize_has_unit_length(v)?;
        }

        #[test]
        fn rotate_preserves_length(v in vector_strategy(), angle in angle_strategy()) {
            check_rotate_preserves_length(v, angle)?;
        }

        #[test]
        fn grid_mapping_is_exact(p in vector_strategy()) {
            check_grid_mapping_is_exact(p)?;
        }

        #[test]
        fn absorb_keeps_corners_ordered(bbox in bbox_strategy(), p in vector_strategy()) {
            check_absorb_keeps_corners_ordered(bbox, p)?;
        }

        #[test]
        fn union_is_commutative(a in bbox_strategy(), b in bbox_strategy()) {
            check_union_is_commutative(a, b)?;
        }

        #[test]
        fn union_is_associative(a in bbox_strategy(), b in bbox_strategy(), c in bbox_strategy()) {
            check_union_is_associative(a, b, c)?;
        }
    }
}
