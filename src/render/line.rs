//! Line rasterization: DDA and Bresenham.
//!
//! Both algorithms round their endpoints to the nearest pixel first, so for
//! the same input they share the first and last pixel and emit exactly
//! `max(|dx|, |dy|) + 1` pixels, one per step along the major axis.

use serde::{Deserialize, Serialize};

use crate::geometry::{PixelCoord, Point};

/// Line rasterization algorithm, selectable per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAlgorithm {
    /// Digital Differential Analyzer (floating-point increments).
    #[default]
    Dda,
    /// Bresenham's integer decision-variable algorithm.
    Bresenham,
}

/// Rasterize the segment `p0 -> p1` with the chosen algorithm.
#[must_use]
pub fn rasterize_line(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Vec<PixelCoord> {
    let (start, end) = (p0.round(), p1.round());
    match algorithm {
        LineAlgorithm::Dda => dda(start, end),
        LineAlgorithm::Bresenham => bresenham(start, end),
    }
}

/// DDA between two pixels.
///
/// Sample `i` is computed as `start + i * increment` rather than by repeated
/// addition, so there is no accumulated drift on long lines.
#[must_use]
pub fn dda(start: PixelCoord, end: PixelCoord) -> Vec<PixelCoord> {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![start];
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let (x0, y0) = (f64::from(start.x), f64::from(start.y));

    (0..=steps)
        .map(|i| {
            let i = i as f64;
            PixelCoord::new((x0 + x_inc * i).round() as i32, (y0 + y_inc * i).round() as i32)
        })
        .collect()
}

/// Bresenham between two pixels, valid in all octants.
///
/// Terminates exactly when the current pixel equals `end`.
#[must_use]
pub fn bresenham(start: PixelCoord, end: PixelCoord) -> Vec<PixelCoord> {
    let (x1, y1) = (i64::from(end.x), i64::from(end.y));
    let mut x = i64::from(start.x);
    let mut y = i64::from(start.y);

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut out = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        out.push(PixelCoord::new(x as i32, y as i32));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(x: i32, y: i32) -> PixelCoord {
        PixelCoord::new(x, y)
    }

    #[test]
    fn test_dda_horizontal() {
        let line = dda(px(10, 50), px(14, 50));
        assert_eq!(line, vec![px(10, 50), px(11, 50), px(12, 50), px(13, 50), px(14, 50)]);
    }

    #[test]
    fn test_bresenham_vertical_upwards() {
        let line = bresenham(px(3, 5), px(3, 1));
        assert_eq!(line, vec![px(3, 5), px(3, 4), px(3, 3), px(3, 2), px(3, 1)]);
    }

    #[test]
    fn test_diagonal_both_algorithms() {
        let expected: Vec<_> = (0..=4).map(|i| px(i, i)).collect();
        assert_eq!(dda(px(0, 0), px(4, 4)), expected);
        assert_eq!(bresenham(px(0, 0), px(4, 4)), expected);
    }

    #[test]
    fn test_bresenham_shallow_slope() {
        let line = bresenham(px(0, 0), px(6, 2));
        assert_eq!(line.len(), 7);
        assert_eq!(line.first(), Some(&px(0, 0)));
        assert_eq!(line.last(), Some(&px(6, 2)));
        // 8-connected: every step moves by at most one unit per axis.
        for w in line.windows(2) {
            assert_eq!(w[1].x - w[0].x, 1);
            assert!((w[1].y - w[0].y).abs() <= 1);
        }
    }

    #[test]
    fn test_zero_length_line_emits_one_point() {
        let p = Point::new(7.2, 3.9);
        assert_eq!(rasterize_line(p, p, LineAlgorithm::Dda), vec![px(7, 4)]);
        assert_eq!(rasterize_line(p, p, LineAlgorithm::Bresenham), vec![px(7, 4)]);
    }

    #[test]
    fn test_sub_pixel_endpoints_are_rounded() {
        let line = rasterize_line(Point::new(0.4, 0.6), Point::new(3.2, 0.7), LineAlgorithm::Dda);
        assert_eq!(line, vec![px(0, 1), px(1, 1), px(2, 1), px(3, 1)]);
    }

    #[test]
    fn test_algorithm_default_is_dda() {
        assert_eq!(LineAlgorithm::default(), LineAlgorithm::Dda);
    }
}
