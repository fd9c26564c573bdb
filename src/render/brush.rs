//! Brush stamping for stroke thickness.
//!
//! A stroke of thickness `t` stamps a brush of radius `t / 2` (integer
//! division) on every centerline pixel. Thickness 0 and 1 leave the
//! centerline as is. The same brush applies to every shape kind.

use serde::{Deserialize, Serialize};

use crate::geometry::PixelCoord;

use super::dedup_in_order;

/// Thickest stroke a brush will stamp, in logical pixels.
pub const MAX_THICKNESS: u32 = 64;

/// Footprint of the brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushShape {
    /// Pixels with `i*i + j*j <= r*r`.
    #[default]
    Disk,
    /// Pixels with `|i| <= r` and `|j| <= r`.
    Square,
}

/// Fixed-shape brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    shape: BrushShape,
    radius: u32,
}

impl Brush {
    /// Brush with an explicit radius, capped at `MAX_THICKNESS / 2`.
    #[must_use]
    pub const fn new(shape: BrushShape, radius: u32) -> Self {
        let cap = MAX_THICKNESS / 2;
        Self { shape, radius: if radius > cap { cap } else { radius } }
    }

    /// Brush for a stroke thickness (`radius = thickness / 2`).
    #[must_use]
    pub const fn for_thickness(shape: BrushShape, thickness: u32) -> Self {
        Self::new(shape, thickness / 2)
    }

    /// Brush radius.
    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// Offsets covered by the brush, row by row.
    #[must_use]
    pub fn offsets(&self) -> Vec<(i32, i32)> {
        let r = self.radius as i32;
        let r2 = i64::from(r) * i64::from(r);
        let mut offsets = Vec::new();
        for j in -r..=r {
            for i in -r..=r {
                let inside = match self.shape {
                    BrushShape::Square => true,
                    BrushShape::Disk => i64::from(i) * i64::from(i) + i64::from(j) * i64::from(j) <= r2,
                };
                if inside {
                    offsets.push((i, j));
                }
            }
        }
        offsets
    }

    /// Stamp the brush on every pixel; output has no duplicates.
    #[must_use]
    pub fn stamp(&self, pixels: &[PixelCoord]) -> Vec<PixelCoord> {
        if self.radius == 0 {
            return dedup_in_order(pixels.to_vec());
        }

        let offsets = self.offsets();
        let stamped = pixels
            .iter()
            .flat_map(|p| offsets.iter().map(move |&(i, j)| p.offset(i, j)))
            .collect();
        dedup_in_order(stamped)
    }
}
