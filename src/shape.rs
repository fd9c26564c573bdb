//! Shape model: kind-specific geometry plus drawing attributes.
//!
//! Geometry is a closed tagged union so that a circle can only ever carry a
//! center and a radius and a line exactly two endpoints. Every [`Shape`]
//! caches its bounding box; the cache is private and refreshed by each
//! mutating method so it always equals [`compute_bbox`] of the geometry.

use std::fmt;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, Point};
use crate::render::MAX_THICKNESS;

/// Discriminant of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Straight segment between two points.
    Line,
    /// Circle given by center and radius.
    Circle,
    /// Open chain of segments.
    Polyline,
    /// Closed chain of segments.
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

/// Shape geometry with kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Segment `[start, end]`.
    Line([Point; 2]),
    /// Circle; `radius` is finite and non-negative.
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// At least two points.
    Polyline(Vec<Point>),
    /// At least three vertices; the closing edge is implicit.
    Polygon(Vec<Point>),
}

impl Geometry {
    /// Line between two points.
    #[must_use]
    pub const fn line(start: Point, end: Point) -> Self {
        Self::Line([start, end])
    }

    /// Circle geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] for a negative or non-finite radius.
    pub fn circle(center: Point, radius: f64) -> Result<Self> {
        let geometry = Self::Circle { center, radius };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Polyline geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] with fewer than two points.
    pub fn polyline(points: Vec<Point>) -> Result<Self> {
        let geometry = Self::Polyline(points);
        geometry.validate()?;
        Ok(geometry)
    }

    /// Polygon geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] with fewer than three vertices.
    pub fn polygon(points: Vec<Point>) -> Result<Self> {
        let geometry = Self::Polygon(points);
        geometry.validate()?;
        Ok(geometry)
    }

    /// Kind tag of this geometry.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Line(_) => ShapeKind::Line,
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Polyline(_) => ShapeKind::Polyline,
            Self::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Defining points (the center alone for a circle).
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Line(ends) => ends,
            Self::Circle { center, .. } => std::slice::from_ref(center),
            Self::Polyline(points) | Self::Polygon(points) => points,
        }
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        match self {
            Self::Line(ends) => ends,
            Self::Circle { center, .. } => std::slice::from_mut(center),
            Self::Polyline(points) | Self::Polygon(points) => points,
        }
    }

    /// Check point counts, radius and coordinate finiteness.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let (min, expected) = match self {
            Self::Line(_) | Self::Circle { .. } => (0, ""),
            Self::Polyline(_) => (2, "at least 2"),
            Self::Polygon(_) => (3, "at least 3"),
        };
        let got = self.points().len();
        if got < min {
            return Err(Error::InvalidGeometry { kind: self.kind(), expected, got });
        }

        if let Self::Circle { radius, .. } = self {
            if !radius.is_finite() || *radius < 0.0 {
                return Err(Error::InvalidRadius(Some(*radius)));
            }
        }

        match self.points().iter().find(|p| !p.is_finite()) {
            Some(p) => Err(Error::NonFiniteCoordinate { x: p.x, y: p.y }),
            None => Ok(()),
        }
    }
}

/// Bounding box of a geometry.
///
/// Point-based kinds use the min/max over their points; a circle uses the
/// square of side `2 * radius` centered on its center.
#[must_use]
pub fn compute_bbox(geometry: &Geometry) -> BoundingBox {
    match geometry {
        Geometry::Circle { center, radius } => BoundingBox {
            min: Point::new(center.x - radius, center.y - radius),
            max: Point::new(center.x + radius, center.y + radius),
        },
        // Constructors guarantee at least one point.
        other => BoundingBox::from_points(other.points()).unwrap_or_default(),
    }
}

/// A drawn shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    bbox: BoundingBox,
    /// Stroke color.
    pub color: Rgba,
    /// Stroke thickness in logical pixels (brush diameter).
    pub thickness: u32,
    /// Whether the shape is part of the current selection.
    pub selected: bool,
}

impl Shape {
    /// Create a shape from already-built geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry fails [`Geometry::validate`], or
    /// [`Error::InvalidThickness`] above [`MAX_THICKNESS`].
    pub fn new(geometry: Geometry, thickness: u32, color: Rgba) -> Result<Self> {
        if thickness > MAX_THICKNESS {
            return Err(Error::InvalidThickness(thickness));
        }
        geometry.validate()?;
        let bbox = compute_bbox(&geometry);
        Ok(Self { geometry, bbox, color, thickness, selected: false })
    }

    /// Geometry of the shape.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Cached bounding box.
    #[must_use]
    pub const fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Kind of the shape.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Defining points (see [`Geometry::points`]).
    #[must_use]
    pub fn points(&self) -> &[Point] {
        self.geometry.points()
    }

    /// Replace the geometry (e.g. with a clipping result).
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the shape untouched if the new geometry
    /// is invalid.
    pub fn set_geometry(&mut self, geometry: Geometry) -> Result<()> {
        geometry.validate()?;
        self.bbox = compute_bbox(&geometry);
        self.geometry = geometry;
        Ok(())
    }

    /// Mutate the geometry in place and refresh the bounding box.
    pub(crate) fn edit_geometry(&mut self, edit: impl FnOnce(&mut Geometry)) {
        edit(&mut self.geometry);
        self.bbox = compute_bbox(&self.geometry);
    }
}

/// Build a shape from the raw output of a drawing gesture.
///
/// `points` must hold exactly 2 points for a line, exactly 1 (the center)
/// for a circle, at least 2 for a polyline and at least 3 for a polygon.
/// `radius` is only read for circles.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] on a point count mismatch,
/// [`Error::InvalidRadius`] for a circle without a valid radius,
/// [`Error::InvalidThickness`] above [`MAX_THICKNESS`] and
/// [`Error::NonFiniteCoordinate`] for NaN or infinite coordinates.
pub fn make_shape(
    kind: ShapeKind,
    points: Vec<Point>,
    radius: Option<f64>,
    thickness: u32,
    color: Rgba,
) -> Result<Shape> {
    let got = points.len();
    let mismatch = |expected: &'static str| Error::InvalidGeometry { kind, expected, got };

    let geometry = match kind {
        ShapeKind::Line => match points.as_slice() {
            [a, b] => Geometry::line(*a, *b),
            _ => return Err(mismatch("exactly 2")),
        },
        ShapeKind::Circle => match (points.as_slice(), radius) {
            ([center], Some(r)) => Geometry::Circle { center: *center, radius: r },
            ([_], None) => return Err(Error::InvalidRadius(None)),
            _ => return Err(mismatch("exactly 1")),
        },
        ShapeKind::Polyline => Geometry::Polyline(points),
        ShapeKind::Polygon => Geometry::Polygon(points),
    };

    Shape::new(geometry, thickness, color)
}

/// Coarse hit test: the point lies inside the shape's bounding box.
///
/// This deliberately ignores the exact outline, so clicking inside the empty
/// corner of a circle's box still selects the circle.
#[must_use]
pub fn hit_test(point: Point, shape: &Shape) -> bool {
    shape.bbox.contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_make_line() {
        let shape =
            make_shape(ShapeKind::Line, pts(&[(10.0, 20.0), (0.0, 5.0)]), None, 1, Rgba::BLACK)
                .unwrap();
        assert_eq!(shape.kind(), ShapeKind::Line);
        assert_eq!(shape.bbox().min, Point::new(0.0, 5.0));
        assert_eq!(shape.bbox().max, Point::new(10.0, 20.0));
        assert!(!shape.selected);
    }

    #[test]
    fn test_make_line_wrong_count() {
        let err = make_shape(ShapeKind::Line, pts(&[(0.0, 0.0)]), None, 1, Rgba::BLACK);
        assert!(matches!(err, Err(Error::InvalidGeometry { got: 1, .. })));
    }

    #[test]
    fn test_make_circle() {
        let shape =
            make_shape(ShapeKind::Circle, pts(&[(50.0, 40.0)]), Some(10.0), 1, Rgba::RED).unwrap();
        assert_eq!(shape.bbox().min, Point::new(40.0, 30.0));
        assert_eq!(shape.bbox().max, Point::new(60.0, 50.0));
        assert_eq!(shape.points(), &[Point::new(50.0, 40.0)]);
    }

    #[test]
    fn test_make_circle_requires_radius() {
        let missing = make_shape(ShapeKind::Circle, pts(&[(0.0, 0.0)]), None, 1, Rgba::RED);
        assert!(matches!(missing, Err(Error::InvalidRadius(None))));

        let negative = make_shape(ShapeKind::Circle, pts(&[(0.0, 0.0)]), Some(-1.0), 1, Rgba::RED);
        assert!(matches!(negative, Err(Error::InvalidRadius(Some(_)))));

        let two_points =
            make_shape(ShapeKind::Circle, pts(&[(0.0, 0.0), (1.0, 1.0)]), Some(3.0), 1, Rgba::RED);
        assert!(matches!(two_points, Err(Error::InvalidGeometry { .. })));
    }

    #[test]
    fn test_polygon_needs_three_vertices() {
        let err = make_shape(ShapeKind::Polygon, pts(&[(0.0, 0.0), (1.0, 1.0)]), None, 1, Rgba::RED);
        assert!(matches!(err, Err(Error::InvalidGeometry { kind: ShapeKind::Polygon, .. })));

        let ok = make_shape(
            ShapeKind::Polygon,
            pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]),
            None,
            1,
            Rgba::RED,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_polyline_needs_two_points() {
        assert!(make_shape(ShapeKind::Polyline, pts(&[(0.0, 0.0)]), None, 1, Rgba::RED).is_err());
        assert!(
            make_shape(ShapeKind::Polyline, pts(&[(0.0, 0.0), (1.0, 0.0)]), None, 1, Rgba::RED)
                .is_ok()
        );
    }

    #[test]
    fn test_thickness_upper_bound() {
        let line = || pts(&[(0.0, 0.0), (4.0, 0.0)]);
        assert!(make_shape(ShapeKind::Line, line(), None, MAX_THICKNESS, Rgba::RED).is_ok());

        let err = make_shape(ShapeKind::Line, line(), None, MAX_THICKNESS + 1, Rgba::RED);
        assert!(matches!(err, Err(Error::InvalidThickness(65))));
        let err = make_shape(ShapeKind::Line, line(), None, u32::MAX, Rgba::RED);
        assert!(matches!(err, Err(Error::InvalidThickness(u32::MAX))));
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = make_shape(
            ShapeKind::Line,
            pts(&[(0.0, 0.0), (f64::INFINITY, 1.0)]),
            None,
            1,
            Rgba::RED,
        );
        assert!(matches!(err, Err(Error::NonFiniteCoordinate { .. })));
    }

    #[test]
    fn test_set_geometry_refreshes_bbox() {
        let mut shape =
            make_shape(ShapeKind::Line, pts(&[(0.0, 0.0), (1.0, 1.0)]), None, 1, Rgba::RED)
                .unwrap();
        shape.set_geometry(Geometry::line(Point::new(5.0, 5.0), Point::new(9.0, 7.0))).unwrap();
        assert_eq!(shape.bbox(), compute_bbox(shape.geometry()));
        assert_eq!(shape.bbox().max, Point::new(9.0, 7.0));
    }

    #[test]
    fn test_set_geometry_rejects_invalid() {
        let mut shape =
            make_shape(ShapeKind::Line, pts(&[(0.0, 0.0), (1.0, 1.0)]), None, 1, Rgba::RED)
                .unwrap();
        let before = shape.clone();
        assert!(shape.set_geometry(Geometry::Polygon(pts(&[(0.0, 0.0), (1.0, 0.0)]))).is_err());
        assert_eq!(shape, before);
    }

    #[test]
    fn test_hit_test_uses_bbox() {
        let circle =
            make_shape(ShapeKind::Circle, pts(&[(50.0, 50.0)]), Some(10.0), 1, Rgba::RED).unwrap();
        // Corner of the box lies outside the circle itself but still hits.
        assert!(hit_test(Point::new(59.0, 59.0), &circle));
        assert!(hit_test(Point::new(50.0, 50.0), &circle));
        assert!(!hit_test(Point::new(61.0, 50.0), &circle));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ShapeKind::Polyline.to_string(), "polyline");
    }
}
