//! Sutherland-Hodgman polygon clipping.

use crate::geometry::{ClipRect, Point};

/// One side of the clip window; the inside is the half-plane containing the
/// window.
#[derive(Debug, Clone, Copy)]
enum HalfPlane {
    Left(f64),
    Right(f64),
    Top(f64),
    Bottom(f64),
}

impl HalfPlane {
    fn inside(self, p: Point) -> bool {
        match self {
            Self::Left(x) => p.x >= x,
            Self::Right(x) => p.x <= x,
            Self::Top(y) => p.y >= y,
            Self::Bottom(y) => p.y <= y,
        }
    }

    /// Intersection of `a -> b` with the boundary line.
    ///
    /// An edge parallel to the boundary uses `t = 0`, i.e. returns `a`.
    fn intersect(self, a: Point, b: Point) -> Point {
        let (num, den) = match self {
            Self::Left(x) | Self::Right(x) => (x - a.x, b.x - a.x),
            Self::Top(y) | Self::Bottom(y) => (y - a.y, b.y - a.y),
        };
        let t = if den == 0.0 { 0.0 } else { num / den };
        // The clipped coordinate is pinned to the boundary, the other one is
        // kept within the edge's extent.
        match self {
            Self::Left(x) | Self::Right(x) => Point::new(x, lerp_within(a.y, b.y, t)),
            Self::Top(y) | Self::Bottom(y) => Point::new(lerp_within(a.x, b.x, t), y),
        }
    }

    fn clip(self, input: &[Point]) -> Vec<Point> {
        let Some(&last) = input.last() else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(input.len() + 2);
        let mut prev = last;
        for &curr in input {
            match (self.inside(prev), self.inside(curr)) {
                (true, true) => out.push(curr),
                (false, true) => {
                    out.push(self.intersect(prev, curr));
                    out.push(curr);
                }
                (true, false) => out.push(self.intersect(prev, curr)),
                (false, false) => {}
            }
            prev = curr;
        }
        out
    }
}

fn lerp_within(a: f64, b: f64, t: f64) -> f64 {
    (a + (b - a) * t).clamp(a.min(b), a.max(b))
}

/// Clip a polygon to `rect` (Sutherland-Hodgman).
///
/// The vertex list is treated as cyclic and clipped against the left, right,
/// top and bottom half-planes in that order. Vertex order, and therefore
/// winding, is preserved. Boundaries are inclusive. A result with fewer than
/// three vertices means nothing visible remains.
#[must_use]
pub fn clip_polygon(points: &[Point], rect: &ClipRect) -> Vec<Point> {
    let planes = [
        HalfPlane::Left(rect.left()),
        HalfPlane::Right(rect.right()),
        HalfPlane::Top(rect.top()),
        HalfPlane::Bottom(rect.bottom()),
    ];

    let mut current = points.to_vec();
    for plane in planes {
        if current.is_empty() {
            break;
        }
        current = plane.clip(&current);
    }
    current
}

/// Twice the signed area (shoelace); the sign gives the winding.
#[must_use]
pub fn signed_area2(points: &[Point]) -> f64 {
    let Some(&last) = points.last() else {
        return 0.0;
    };
    let mut prev = last;
    points.iter().fold(0.0, |acc, &p| {
        let term = prev.x * p.y - p.x * prev.y;
        prev = p;
        acc + term
    })
}
