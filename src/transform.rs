//! Affine transforms of shape geometry.
//!
//! Every transform rewrites the shape's points (and the radius, for scaling
//! circles) and refreshes the cached bounding box in the same call.
//!
//! # Conventions
//!
//! - Rotation angles are in degrees and follow the mathematical
//!   counter-clockwise sense. Because y grows downwards on screen, a positive
//!   angle *looks* clockwise to the user.
//! - [`Pivot::BoundingBoxCenter`] is resolved per shape, from that shape's
//!   own bounding box at the time of the call, for every shape kind.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::shape::{Geometry, Shape};

/// Fixed point for scaling and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pivot {
    /// Center of each shape's bounding box.
    #[default]
    BoundingBoxCenter,
    /// An explicit point shared by all shapes.
    At(Point),
}

impl Pivot {
    /// Concrete pivot point for `shape`.
    #[must_use]
    pub fn resolve(self, shape: &Shape) -> Point {
        match self {
            Self::BoundingBoxCenter => shape.bbox().center(),
            Self::At(p) => p,
        }
    }
}

/// Mirror axis for reflections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Axis {
    /// Vertical line `x = cx`: `x' = 2cx - x`.
    VerticalAt(f64),
    /// Horizontal line `y = cy`: `y' = 2cy - y`.
    HorizontalAt(f64),
    /// Point reflection through `(cx, cy)`.
    PointAt(f64, f64),
}

/// A transform applied to every selected shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Move by `(dx, dy)`.
    Translate {
        /// Horizontal offset.
        dx: f64,
        /// Vertical offset.
        dy: f64,
    },
    /// Uniform scaling about a pivot; `factor` must be finite and positive.
    Scale {
        /// Scale factor.
        factor: f64,
        /// Fixed point.
        pivot: Pivot,
    },
    /// Rotation about a pivot.
    Rotate {
        /// Angle in degrees (counter-clockwise in math terms).
        degrees: f64,
        /// Fixed point.
        pivot: Pivot,
    },
    /// Mirror across an axis.
    Reflect(Axis),
}

impl Transform {
    /// Translation shorthand.
    #[must_use]
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self::Translate { dx, dy }
    }

    /// Scaling about each shape's bounding-box center.
    #[must_use]
    pub const fn scale(factor: f64) -> Self {
        Self::Scale { factor, pivot: Pivot::BoundingBoxCenter }
    }

    /// Rotation about each shape's bounding-box center.
    #[must_use]
    pub const fn rotate(degrees: f64) -> Self {
        Self::Rotate { degrees, pivot: Pivot::BoundingBoxCenter }
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransform`] for non-finite parameters or a
    /// scale factor that is not strictly positive.
    pub fn validate(&self) -> Result<()> {
        let pivot_ok = |pivot: &Pivot| match pivot {
            Pivot::BoundingBoxCenter => true,
            Pivot::At(p) => p.is_finite(),
        };

        let ok = match self {
            Self::Translate { dx, dy } => dx.is_finite() && dy.is_finite(),
            Self::Scale { factor, pivot } => {
                if factor.is_finite() && *factor <= 0.0 {
                    return Err(Error::InvalidTransform(format!(
                        "scale factor must be positive, got {factor}"
                    )));
                }
                factor.is_finite() && pivot_ok(pivot)
            }
            Self::Rotate { degrees, pivot } => degrees.is_finite() && pivot_ok(pivot),
            Self::Reflect(Axis::VerticalAt(c) | Axis::HorizontalAt(c)) => c.is_finite(),
            Self::Reflect(Axis::PointAt(cx, cy)) => cx.is_finite() && cy.is_finite(),
        };

        if ok {
            Ok(())
        } else {
            Err(Error::InvalidTransform(format!("non-finite parameter in {self:?}")))
        }
    }

    /// Apply to one shape. The transform must already be validated.
    fn apply_to(&self, shape: &mut Shape) {
        match *self {
            Self::Translate { dx, dy } => translate_points(shape, dx, dy),
            Self::Scale { factor, pivot } => scale_geometry(shape, factor, pivot),
            Self::Rotate { degrees, pivot } => rotate_points(shape, degrees, pivot),
            Self::Reflect(axis) => reflect_points(shape, axis),
        }
    }
}

/// Move every point (or the circle center) by `(dx, dy)`.
///
/// # Errors
///
/// Returns [`Error::InvalidTransform`] for a non-finite offset; the shape is
/// left untouched.
pub fn translate(shape: &mut Shape, dx: f64, dy: f64) -> Result<()> {
    apply_transform(std::iter::once(shape), &Transform::translate(dx, dy))
}

/// Scale about `pivot`: `p' = pivot + (p - pivot) * factor`.
///
/// A circle's radius is multiplied by `factor` as well.
///
/// # Errors
///
/// Returns [`Error::InvalidTransform`] unless `factor` is finite and
/// positive; the shape is left untouched.
pub fn scale(shape: &mut Shape, factor: f64, pivot: Pivot) -> Result<()> {
    apply_transform(std::iter::once(shape), &Transform::Scale { factor, pivot })
}

/// Rotate about `pivot` by `degrees` (see the module docs for the sign).
///
/// # Errors
///
/// Returns [`Error::InvalidTransform`] for a non-finite angle or pivot.
pub fn rotate(shape: &mut Shape, degrees: f64, pivot: Pivot) -> Result<()> {
    apply_transform(std::iter::once(shape), &Transform::Rotate { degrees, pivot })
}

/// Mirror across `axis`.
///
/// # Errors
///
/// Returns [`Error::InvalidTransform`] for a non-finite axis.
pub fn reflect(shape: &mut Shape, axis: Axis) -> Result<()> {
    apply_transform(std::iter::once(shape), &Transform::Reflect(axis))
}

fn translate_points(shape: &mut Shape, dx: f64, dy: f64) {
    map_points(shape, |p| Point::new(p.x + dx, p.y + dy));
}

fn scale_geometry(shape: &mut Shape, factor: f64, pivot: Pivot) {
    let c = pivot.resolve(shape);
    shape.edit_geometry(|geometry| {
        for p in geometry.points_mut() {
            *p = Point::new(c.x + (p.x - c.x) * factor, c.y + (p.y - c.y) * factor);
        }
        if let Geometry::Circle { radius, .. } = geometry {
            *radius *= factor;
        }
    });
}

fn rotate_points(shape: &mut Shape, degrees: f64, pivot: Pivot) {
    let c = pivot.resolve(shape);
    let (sin, cos) = degrees.to_radians().sin_cos();
    map_points(shape, |p| {
        let (x, y) = (p.x - c.x, p.y - c.y);
        Point::new(c.x + x * cos - y * sin, c.y + x * sin + y * cos)
    });
}

fn reflect_points(shape: &mut Shape, axis: Axis) {
    map_points(shape, |p| match axis {
        Axis::VerticalAt(cx) => Point::new(2.0 * cx - p.x, p.y),
        Axis::HorizontalAt(cy) => Point::new(p.x, 2.0 * cy - p.y),
        Axis::PointAt(cx, cy) => Point::new(2.0 * cx - p.x, 2.0 * cy - p.y),
    });
}

fn map_points(shape: &mut Shape, f: impl Fn(Point) -> Point) {
    shape.edit_geometry(|geometry| {
        for p in geometry.points_mut() {
            *p = f(*p);
        }
    });
}

/// Apply `transform` to every shape yielded by `shapes`.
///
/// The transform is validated first, so an invalid transform leaves every
/// shape untouched. An empty iterator is a no-op.
///
/// # Errors
///
/// Returns [`Error::InvalidTransform`] if validation fails.
pub fn apply_transform<'a, I>(shapes: I, transform: &Transform) -> Result<()>
where
    I: IntoIterator<Item = &'a mut Shape>,
{
    transform.validate()?;

    let mut count = 0usize;
    for shape in shapes {
        transform.apply_to(shape);
        trace!("transformed {} -> bbox {:?}", shape.kind(), shape.bbox());
        count += 1;
    }
    debug!("applied {transform:?} to {count} shape(s)");
    Ok(())
}
