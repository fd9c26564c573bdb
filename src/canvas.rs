//! Fixed-scale pixel canvas.
//!
//! The kernel works on a logical grid of "fat" pixels; the canvas maps each
//! logical pixel onto a `cell_size x cell_size` block of RGBA device pixels,
//! which is what a windowing backend blits to screen.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, PixelCoord};
use crate::render::bresenham;

/// RGBA device buffer addressed through a logical pixel grid.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Logical columns.
    columns: u32,
    /// Logical rows.
    rows: u32,
    /// Device pixels per logical pixel, per axis.
    cell_size: u32,
    /// RGBA pixels in row-major order.
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas of `columns x rows` logical pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero or the device buffer would
    /// not fit in memory addressing.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit::canvas::Canvas;
    ///
    /// let canvas = Canvas::new(160, 120, 5).unwrap();
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.height(), 600);
    /// ```
    pub fn new(columns: u32, rows: u32, cell_size: u32) -> Result<Self> {
        let invalid = || Error::InvalidDimensions { width: columns, height: rows };
        if columns == 0 || rows == 0 || cell_size == 0 {
            return Err(invalid());
        }

        let width = columns.checked_mul(cell_size).ok_or_else(invalid)?;
        let height = rows.checked_mul(cell_size).ok_or_else(invalid)?;
        let size = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(invalid)?;

        Ok(Self { columns, rows, cell_size, pixels: vec![0; size] })
    }

    /// Logical columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Logical rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Device pixels per logical pixel.
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Width in device pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.columns * self.cell_size
    }

    /// Height in device pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.rows * self.cell_size
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the canvas to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a rectangular region of device pixels.
    ///
    /// Coordinates are clamped to canvas bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let (width, height) = (self.width(), self.height());
        let x1 = x.min(width);
        let y1 = y.min(height);
        let x2 = x.saturating_add(w).min(width);
        let y2 = y.saturating_add(h).min(height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        let stride = width as usize * 4;
        for row_y in y1..y2 {
            let start = row_y as usize * stride + x1 as usize * 4;
            let end = start + (x2 - x1) as usize * 4;
            for chunk in self.pixels[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color of a device pixel, `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = self.pixel_index(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(rgba))
    }

    /// Paint one logical pixel. Coordinates outside the grid are ignored.
    pub fn plot(&mut self, coord: PixelCoord, color: Rgba) {
        let Some((col, row)) = self.cell_index(coord) else {
            return;
        };
        let s = self.cell_size;
        self.fill_rect(col * s, row * s, s, s, color);
    }

    /// Paint a sequence of logical pixels in one color.
    pub fn plot_all(&mut self, coords: &[PixelCoord], color: Rgba) {
        for &coord in coords {
            self.plot(coord, color);
        }
    }

    /// Color of a logical pixel (its top-left device pixel).
    #[must_use]
    pub fn cell(&self, coord: PixelCoord) -> Option<Rgba> {
        let (col, row) = self.cell_index(coord)?;
        self.get_pixel(col * self.cell_size, row * self.cell_size)
    }

    /// Draw one-device-pixel grid lines along every cell's top and left edge.
    ///
    /// Skipped for `cell_size < 3`, where the grid would hide the drawing.
    pub fn draw_grid(&mut self, color: Rgba) {
        if self.cell_size < 3 {
            return;
        }
        let (width, height) = (self.width(), self.height());
        for col in 0..self.columns {
            self.fill_rect(col * self.cell_size, 0, 1, height, color);
        }
        for row in 0..self.rows {
            self.fill_rect(0, row * self.cell_size, width, 1, color);
        }
    }

    /// Outline a bounding box on the logical grid (selection marker).
    pub fn outline_bbox(&mut self, bbox: &BoundingBox, color: Rgba) {
        let min = bbox.min.round();
        let max = bbox.max.round();
        let corners = [
            min,
            PixelCoord::new(max.x, min.y),
            max,
            PixelCoord::new(min.x, max.y),
        ];
        for i in 0..corners.len() {
            let edge = bresenham(corners[i], corners[(i + 1) % corners.len()]);
            self.plot_all(&edge, color);
        }
    }

    fn cell_index(&self, coord: PixelCoord) -> Option<(u32, u32)> {
        let col = u32::try_from(coord.x).ok()?;
        let row = u32::try_from(coord.y).ok()?;
        (col < self.columns && row < self.rows).then_some((col, row))
    }

    /// Calculate the byte index for a device pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width() as usize + x as usize) * 4
    }
}
