//! Midpoint (Bresenham) circle rasterization.

use crate::geometry::{PixelCoord, Point};

use super::dedup_in_order;

/// Rasterize a circle outline.
///
/// Center and radius are rounded to whole pixels. A rounded radius of zero
/// or less (or a NaN radius) yields no pixels. The decision variable starts
/// at `d = 3 - 2r` and is updated from the pre-step `x` and `y`:
/// `d += 4(x - y) + 10` when `y` steps inwards, `d += 4x + 6` otherwise.
/// Each step emits the 8-way symmetric set; points that coincide on the axes
/// or diagonals are emitted once.
#[must_use]
pub fn rasterize_circle(center: Point, radius: f64) -> Vec<PixelCoord> {
    let r = radius.round();
    if r.is_nan() || r < 1.0 {
        return Vec::new();
    }

    let c = center.round();
    let r = r.min(f64::from(i32::MAX)) as i64;

    let mut x: i64 = 0;
    let mut y: i64 = r;
    let mut d: i64 = 3 - 2 * r;
    let mut out = Vec::with_capacity((r as usize).saturating_mul(6));

    while y >= x {
        let (xi, yi) = (x as i32, y as i32);
        out.extend_from_slice(&[
            c.offset(xi, yi),
            c.offset(yi, xi),
            c.offset(-xi, yi),
            c.offset(-yi, xi),
            c.offset(xi, -yi),
            c.offset(yi, -xi),
            c.offset(-xi, -yi),
            c.offset(-yi, -xi),
        ]);

        if d > 0 {
            d += 4 * (x - y) + 10;
            y -= 1;
        } else {
            d += 4 * x + 6;
        }
        x += 1;
    }

    dedup_in_order(out)
}
