//! Clipping of shape geometry against an axis-aligned window.
//!
//! # Algorithms
//!
//! - **Cohen-Sutherland**: outcode-driven line clipping
//! - **Liang-Barsky**: parametric line clipping
//! - **Sutherland-Hodgman**: polygon clipping against four half-planes
//!
//! # References
//!
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line clipping."
//!   *ACM Transactions on Graphics*, 3(1), 1-22.
//! - Sutherland, I. E., & Hodgman, G. W. (1974). "Reentrant polygon clipping."
//!   *Communications of the ACM*, 17(1), 32-42.

mod line;
mod polygon;

pub use line::{
    clip_line, cohen_sutherland, liang_barsky, ClipAlgorithm, Outcode, MAX_CLIP_PASSES,
};
pub use polygon::{clip_polygon, signed_area2};

use crate::error::Result;
use crate::geometry::{overlaps, ClipRect, Point};
use crate::shape::{Geometry, Shape};

/// Outcome of clipping one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipResult {
    /// The visible geometry (possibly identical to the input).
    NewGeometry(Geometry),
    /// A polyline whose visible part is several disjoint runs.
    Split(Vec<Geometry>),
    /// Nothing is visible; the caller deletes the shape.
    Removed,
}

impl ClipResult {
    /// Visible pieces in drawing order (empty when removed).
    #[must_use]
    pub fn into_pieces(self) -> Vec<Geometry> {
        match self {
            Self::NewGeometry(geometry) => vec![geometry],
            Self::Split(pieces) => pieces,
            Self::Removed => Vec::new(),
        }
    }

    /// Whether the shape disappears.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// Clip a shape to `rect`.
///
/// Lines use the selected line algorithm and polygons Sutherland-Hodgman.
/// Polylines are clipped segment by segment and consecutive visible
/// segments are joined into runs. Circles are not cut: a circle whose
/// bounding box misses the window is removed, any other circle is kept
/// whole.
///
/// A polygon that only touches the window at a vertex or along an edge
/// clips to a zero-area outline and is removed. A polygon that already had
/// zero area is judged by its vertex count alone.
#[must_use]
pub fn clip(shape: &Shape, rect: &ClipRect, algorithm: ClipAlgorithm) -> ClipResult {
    match shape.geometry() {
        Geometry::Line([a, b]) => match clip_line(*a, *b, rect, algorithm) {
            Some((a, b)) => ClipResult::NewGeometry(Geometry::line(a, b)),
            None => ClipResult::Removed,
        },
        Geometry::Circle { .. } => {
            if overlaps(&shape.bbox(), rect) {
                ClipResult::NewGeometry(shape.geometry().clone())
            } else {
                ClipResult::Removed
            }
        }
        Geometry::Polyline(points) => clip_polyline(points, rect, algorithm),
        Geometry::Polygon(points) => {
            let clipped = clip_polygon(points, rect);
            let collapsed = signed_area2(&clipped) == 0.0 && signed_area2(points) != 0.0;
            if clipped.len() < 3 || collapsed {
                ClipResult::Removed
            } else {
                ClipResult::NewGeometry(Geometry::Polygon(clipped))
            }
        }
    }
}

/// Shapes that replace `shape` after clipping.
///
/// Every visible piece becomes a copy of `shape` (stroke and selection kept)
/// with the piece as geometry and a recomputed bounding box. A removed shape
/// yields no shapes.
///
/// # Errors
///
/// Returns an error if a piece fails geometry validation.
pub fn apply_clip(shape: &Shape, result: ClipResult) -> Result<Vec<Shape>> {
    result
        .into_pieces()
        .into_iter()
        .map(|piece| {
            let mut kept = shape.clone();
            kept.set_geometry(piece)?;
            Ok(kept)
        })
        .collect()
}

fn clip_polyline(points: &[Point], rect: &ClipRect, algorithm: ClipAlgorithm) -> ClipResult {
    let mut runs: Vec<Vec<Point>> = Vec::new();

    for w in points.windows(2) {
        let Some((a, b)) = clip_line(w[0], w[1], rect, algorithm) else {
            continue;
        };
        // A segment that only grazes a corner contributes nothing drawable.
        if a == b && w[0] != w[1] {
            continue;
        }

        match runs.last_mut() {
            Some(run) if run.last() == Some(&a) => run.push(b),
            _ => runs.push(vec![a, b]),
        }
    }

    let mut pieces: Vec<Geometry> = runs
        .into_iter()
        .map(|run| match run.as_slice() {
            [a, b] => Geometry::line(*a, *b),
            _ => Geometry::Polyline(run),
        })
        .collect();

    match pieces.len() {
        0 => ClipResult::Removed,
        1 => ClipResult::NewGeometry(pieces.remove(0)),
        _ => ClipResult::Split(pieces),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::shape::{make_shape, ShapeKind};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn window() -> ClipRect {
        ClipRect::new(0.0, 100.0, 0.0, 100.0).unwrap()
    }

    fn shape(kind: ShapeKind, coords: &[(f64, f64)], radius: Option<f64>) -> Shape {
        make_shape(kind, pts(coords), radius, 1, Rgba::BLACK).unwrap()
    }

    #[test]
    fn test_clip_line_shape() {
        let line = shape(ShapeKind::Line, &[(-10.0, 50.0), (50.0, 50.0)], None);
        for algorithm in [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky] {
            assert_eq!(
                clip(&line, &window(), algorithm),
                ClipResult::NewGeometry(Geometry::line(Point::new(0.0, 50.0), Point::new(50.0, 50.0)))
            );
        }
    }

    #[test]
    fn test_clip_line_shape_removed() {
        let line = shape(ShapeKind::Line, &[(150.0, 10.0), (200.0, 10.0)], None);
        assert!(clip(&line, &window(), ClipAlgorithm::LiangBarsky).is_removed());
    }

    #[test]
    fn test_clip_polygon_shape() {
        let inside = shape(ShapeKind::Polygon, &[(10.0, 10.0), (90.0, 20.0), (50.0, 80.0)], None);
        assert_eq!(
            clip(&inside, &window(), ClipAlgorithm::default()),
            ClipResult::NewGeometry(inside.geometry().clone())
        );

        let outside =
            shape(ShapeKind::Polygon, &[(110.0, 10.0), (190.0, 20.0), (150.0, 80.0)], None);
        assert!(clip(&outside, &window(), ClipAlgorithm::default()).is_removed());
    }

    #[test]
    fn test_clip_polygon_touching_window_is_removed() {
        let corner = shape(ShapeKind::Polygon, &[(0.0, 50.0), (-20.0, 40.0), (-20.0, 60.0)], None);
        assert!(clip(&corner, &window(), ClipAlgorithm::default()).is_removed());

        let edge = shape(ShapeKind::Polygon, &[(0.0, 40.0), (0.0, 60.0), (-20.0, 50.0)], None);
        assert!(clip(&edge, &window(), ClipAlgorithm::default()).is_removed());

        // Already flat and fully inside: kept as drawn.
        let flat = shape(ShapeKind::Polygon, &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)], None);
        assert_eq!(
            clip(&flat, &window(), ClipAlgorithm::default()),
            ClipResult::NewGeometry(flat.geometry().clone())
        );
    }

    #[test]
    fn test_clip_circle_shape() {
        let visible = shape(ShapeKind::Circle, &[(100.0, 50.0)], Some(20.0));
        assert_eq!(
            clip(&visible, &window(), ClipAlgorithm::default()),
            ClipResult::NewGeometry(visible.geometry().clone())
        );

        let hidden = shape(ShapeKind::Circle, &[(150.0, 50.0)], Some(20.0));
        assert!(clip(&hidden, &window(), ClipAlgorithm::default()).is_removed());
    }

    #[test]
    fn test_clip_polyline_single_run() {
        let polyline =
            shape(ShapeKind::Polyline, &[(-10.0, 10.0), (50.0, 10.0), (50.0, 50.0)], None);
        let result = clip(&polyline, &window(), ClipAlgorithm::CohenSutherland);
        assert_eq!(
            result,
            ClipResult::NewGeometry(Geometry::Polyline(pts(&[(0.0, 10.0), (50.0, 10.0), (50.0, 50.0)])))
        );
    }

    #[test]
    fn test_clip_polyline_split() {
        // Goes out through the right edge and comes back in.
        let polyline = shape(
            ShapeKind::Polyline,
            &[(50.0, 10.0), (150.0, 10.0), (150.0, 90.0), (50.0, 90.0)],
            None,
        );
        let result = clip(&polyline, &window(), ClipAlgorithm::LiangBarsky);
        let ClipResult::Split(pieces) = result else {
            panic!("expected split, got {result:?}");
        };
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], Geometry::line(Point::new(50.0, 10.0), Point::new(100.0, 10.0)));
        assert_eq!(pieces[1], Geometry::line(Point::new(100.0, 90.0), Point::new(50.0, 90.0)));
    }

    #[test]
    fn test_apply_clip_keeps_stroke_and_refreshes_bbox() {
        let mut polyline = shape(
            ShapeKind::Polyline,
            &[(50.0, 10.0), (150.0, 10.0), (150.0, 90.0), (50.0, 90.0)],
            None,
        );
        polyline.thickness = 3;
        polyline.selected = true;

        let result = clip(&polyline, &window(), ClipAlgorithm::CohenSutherland);
        let pieces = apply_clip(&polyline, result).unwrap();
        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            assert_eq!(piece.thickness, 3);
            assert!(piece.selected);
            assert!(piece.bbox().max.x <= 100.0);
        }
        assert!(apply_clip(&polyline, ClipResult::Removed).unwrap().is_empty());
    }

    #[test]
    fn test_into_pieces() {
        assert!(ClipResult::Removed.into_pieces().is_empty());
        let g = Geometry::line(Point::ORIGIN, Point::new(1.0, 1.0));
        assert_eq!(ClipResult::NewGeometry(g.clone()).into_pieces(), vec![g]);
    }
}
