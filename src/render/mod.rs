//! Rasterization of shape geometry into pixel sequences.
//!
//! # Algorithms
//!
//! - **DDA**: incremental floating-point line rasterization
//! - **Bresenham's Line**: integer decision-variable line rasterization
//! - **Midpoint Circle**: 8-way symmetric circle outline
//!
//! Pixel sequences are finite `Vec`s, so they can be replayed any number of
//! times by the renderer.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

use std::collections::HashSet;

use crate::geometry::PixelCoord;

mod brush;
mod circle;
mod line;
mod primitives;

pub use brush::{Brush, BrushShape, MAX_THICKNESS};
pub use circle::rasterize_circle;
pub use line::{bresenham, dda, rasterize_line, LineAlgorithm};
pub use primitives::{rasterize, rasterize_geometry, rasterize_with_brush};

/// Drop repeated pixels, keeping the first occurrence of each.
pub(crate) fn dedup_in_order(pixels: Vec<PixelCoord>) -> Vec<PixelCoord> {
    let mut seen = HashSet::with_capacity(pixels.len());
    pixels.into_iter().filter(|p| seen.insert(*p)).collect()
}
