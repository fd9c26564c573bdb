//! Geometric primitives for the drawing kernel.
//!
//! Coordinates follow screen conventions: x grows to the right, y grows
//! downwards. Shape geometry is stored as `f64` so that repeated transforms
//! keep sub-pixel precision; values are rounded only when rasterized.

use crate::error::{Error, Result};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Nearest pixel (halfway cases round away from zero).
    #[must_use]
    pub fn round(self) -> PixelCoord {
        PixelCoord::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// An integer pixel coordinate on the logical drawing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PixelCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelCoord {
    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, saturating at the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<PixelCoord> for Point {
    fn from(p: PixelCoord) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// Axis-aligned bounding box given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Top-left corner (smallest x and y).
    pub min: Point,
    /// Bottom-right corner (largest x and y).
    pub max: Point,
}

impl BoundingBox {
    /// Create a bounding box from two corners (normalized so `min <= max`).
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest box enclosing every point, `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self { min: *first, max: *first };
        for p in rest {
            bbox.min.x = bbox.min.x.min(p.x);
            bbox.min.y = bbox.min.y.min(p.y);
            bbox.max.x = bbox.max.x.max(p.x);
            bbox.max.y = bbox.max.y.max(p.y);
        }
        Some(bbox)
    }

    /// Width of the box.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the center point of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        self.min.lerp(self.max, 0.5)
    }

    /// Check if a point is inside the box (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Rectangular clipping window.
///
/// `top` is the smaller y value since y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl ClipRect {
    /// Create a clip rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidClipRect`] if `left > right`, `top > bottom`
    /// or any bound is not finite.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self> {
        let finite = [left, right, top, bottom].iter().all(|v| v.is_finite());
        if !finite || left > right || top > bottom {
            return Err(Error::InvalidClipRect { left, right, top, bottom });
        }
        Ok(Self { left, right, top, bottom })
    }

    /// Clip rectangle spanning two arbitrary corners (e.g. a drag gesture).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidClipRect`] if a corner is not finite.
    pub fn from_corners(a: Point, b: Point) -> Result<Self> {
        Self::new(a.x.min(b.x), a.x.max(b.x), a.y.min(b.y), a.y.max(b.y))
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.right
    }

    /// Top edge (smallest y).
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.top
    }

    /// Bottom edge (largest y).
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Check if a point is inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.as_bbox().contains(point)
    }

    /// The rectangle as a bounding box.
    #[must_use]
    pub fn as_bbox(&self) -> BoundingBox {
        BoundingBox {
            min: Point::new(self.left, self.top),
            max: Point::new(self.right, self.bottom),
        }
    }
}

/// Axis-aligned intersection test between a bounding box and a clip window.
///
/// Touching edges count as overlapping.
#[must_use]
pub fn overlaps(bbox: &BoundingBox, rect: &ClipRect) -> bool {
    bbox.min.x <= rect.right
        && bbox.max.x >= rect.left
        && bbox.min.y <= rect.bottom
        && bbox.max.y >= rect.top
}
