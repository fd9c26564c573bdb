//! Shape rasterization.
//!
//! Turns a [`Shape`] into the pixel sequence a renderer paints: centerline
//! pixels from the line or circle algorithms, stamped with the brush that
//! matches the stroke thickness.

use crate::geometry::{PixelCoord, Point};
use crate::shape::{Geometry, Shape};

use super::brush::{Brush, BrushShape};
use super::circle::rasterize_circle;
use super::line::{rasterize_line, LineAlgorithm};

/// Rasterize a shape with the default disk brush.
#[must_use]
pub fn rasterize(shape: &Shape, algorithm: LineAlgorithm) -> Vec<PixelCoord> {
    rasterize_with_brush(shape, algorithm, BrushShape::default())
}

/// Rasterize a shape, stamping `brush` according to its thickness.
#[must_use]
pub fn rasterize_with_brush(
    shape: &Shape,
    algorithm: LineAlgorithm,
    brush: BrushShape,
) -> Vec<PixelCoord> {
    let centerline = rasterize_geometry(shape.geometry(), algorithm);
    Brush::for_thickness(brush, shape.thickness).stamp(&centerline)
}

/// Centerline pixels of a geometry, one pixel wide.
#[must_use]
pub fn rasterize_geometry(geometry: &Geometry, algorithm: LineAlgorithm) -> Vec<PixelCoord> {
    match geometry {
        Geometry::Line([a, b]) => rasterize_line(*a, *b, algorithm),
        Geometry::Circle { center, radius } => rasterize_circle(*center, *radius),
        Geometry::Polyline(points) => rasterize_path(points, false, algorithm),
        Geometry::Polygon(points) => rasterize_path(points, true, algorithm),
    }
}

/// Consecutive segments; the joint pixel shared by two segments is kept once.
fn rasterize_path(points: &[Point], closed: bool, algorithm: LineAlgorithm) -> Vec<PixelCoord> {
    let closing = if closed && points.len() > 2 {
        points.last().zip(points.first())
    } else {
        None
    };

    let mut out: Vec<PixelCoord> = Vec::new();
    let segments = points.windows(2).map(|w| (w[0], w[1])).chain(closing.map(|(a, b)| (*a, *b)));
    for (a, b) in segments {
        let segment = rasterize_line(a, b, algorithm);
        let skip = usize::from(out.last() == segment.first());
        out.extend_from_slice(&segment[skip..]);
    }

    // The closing edge ends on the very first pixel.
    if closing.is_some() && out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::shape::{make_shape, ShapeKind};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_rasterize_line_shape() {
        let shape =
            make_shape(ShapeKind::Line, pts(&[(0.0, 0.0), (5.0, 0.0)]), None, 1, Rgba::BLACK)
                .unwrap();
        for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
            let pixels = rasterize(&shape, algorithm);
            assert_eq!(pixels.len(), 6);
            assert_eq!(pixels[0], PixelCoord::new(0, 0));
            assert_eq!(pixels[5], PixelCoord::new(5, 0));
        }
    }

    #[test]
    fn test_polyline_joints_not_repeated() {
        let shape = make_shape(
            ShapeKind::Polyline,
            pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0)]),
            None,
            1,
            Rgba::BLACK,
        )
        .unwrap();
        let pixels = rasterize(&shape, LineAlgorithm::Bresenham);
        assert_eq!(pixels.len(), 7);
        assert_eq!(pixels.iter().filter(|p| **p == PixelCoord::new(3, 0)).count(), 1);
    }

    #[test]
    fn test_polygon_closes() {
        let shape = make_shape(
            ShapeKind::Polygon,
            pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
            None,
            1,
            Rgba::BLACK,
        )
        .unwrap();
        let pixels = rasterize(&shape, LineAlgorithm::Dda);
        // Perimeter of a 4x4 square outline.
        assert_eq!(pixels.len(), 16);
        assert!(pixels.contains(&PixelCoord::new(0, 2)));
        assert_eq!(pixels[0], PixelCoord::new(0, 0));
    }

    #[test]
    fn test_circle_shape() {
        let shape =
            make_shape(ShapeKind::Circle, pts(&[(20.0, 20.0)]), Some(5.0), 1, Rgba::BLACK).unwrap();
        let pixels = rasterize(&shape, LineAlgorithm::Dda);
        assert_eq!(pixels, rasterize_circle(Point::new(20.0, 20.0), 5.0));
    }

    #[test]
    fn test_zero_radius_circle_shape_is_empty() {
        let shape =
            make_shape(ShapeKind::Circle, pts(&[(20.0, 20.0)]), Some(0.0), 3, Rgba::BLACK).unwrap();
        assert!(rasterize(&shape, LineAlgorithm::Dda).is_empty());
    }

    #[test]
    fn test_thickness_uses_same_brush_for_all_kinds() {
        let line =
            make_shape(ShapeKind::Line, pts(&[(10.0, 10.0), (10.0, 10.0)]), None, 3, Rgba::BLACK)
                .unwrap();
        let disk = rasterize(&line, LineAlgorithm::Dda);
        assert_eq!(disk.len(), 5);

        let square = rasterize_with_brush(&line, LineAlgorithm::Dda, BrushShape::Square);
        assert_eq!(square.len(), 9);
    }
}
