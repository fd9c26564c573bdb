//! Terminal output encoder (ASCII/Unicode/ANSI).
//!
//! Renders the logical grid of a [`Canvas`] as text, one character cell per
//! logical pixel (two stacked pixels per cell in half-block mode).
//! Supports multiple rendering modes:
//! - ASCII: background cells are blank, ink is mapped through ` .:-=+*#%@`
//! - Unicode: half-block characters (▀) with ANSI colors, 2x vertical density
//! - ANSI: 24-bit background color per cell

use std::fmt::Write as FmtWrite;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::geometry::PixelCoord;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII characters (widest compatibility)
    #[default]
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    UnicodeHalfBlock,
    /// Spaces with ANSI 24-bit background color
    AnsiTrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    background: Rgba,
    invert: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII ramp from faint to dense ink (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder with default settings (ASCII on white).
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), background: Rgba::WHITE, invert: false }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Color treated as empty paper in ASCII mode.
    #[must_use]
    pub fn background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Invert the output (light ink reads dense instead of dark ink).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a canvas to a string.
    #[must_use]
    pub fn render(&self, canvas: &Canvas) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(canvas),
            TerminalMode::UnicodeHalfBlock => self.render_unicode_half_block(canvas),
            TerminalMode::AnsiTrueColor => self.render_ansi_true_color(canvas),
        }
    }

    fn render_ascii(&self, canvas: &Canvas) -> String {
        let mut output =
            String::with_capacity((canvas.columns() as usize + 1) * canvas.rows() as usize);

        for y in 0..canvas.rows() {
            for x in 0..canvas.columns() {
                let color = Self::cell(canvas, x, y);
                if color == self.background {
                    output.push(' ');
                } else {
                    output.push(Self::ASCII_RAMP[self.ink_index(color)]);
                }
            }
            output.push('\n');
        }

        output
    }

    /// Each character represents 2 vertical logical pixels using ▀ (upper half).
    fn render_unicode_half_block(&self, canvas: &Canvas) -> String {
        let mut output = String::new();

        for y in (0..canvas.rows()).step_by(2) {
            for x in 0..canvas.columns() {
                let top = self.shade(Self::cell(canvas, x, y));
                let bottom = if y + 1 < canvas.rows() {
                    self.shade(Self::cell(canvas, x, y + 1))
                } else {
                    self.shade(self.background)
                };
                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                );
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }

    fn render_ansi_true_color(&self, canvas: &Canvas) -> String {
        let mut output = String::new();

        for y in 0..canvas.rows() {
            for x in 0..canvas.columns() {
                let Rgba { r, g, b, .. } = self.shade(Self::cell(canvas, x, y));
                let _ = write!(output, "\x1b[48;2;{r};{g};{b}m ");
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }

    fn cell(canvas: &Canvas, x: u32, y: u32) -> Rgba {
        let coord = PixelCoord::new(x as i32, y as i32);
        canvas.cell(coord).unwrap_or_default()
    }

    fn shade(&self, color: Rgba) -> Rgba {
        if self.invert {
            Rgba::new(255 - color.r, 255 - color.g, 255 - color.b, color.a)
        } else {
            color
        }
    }

    /// Ramp index for a non-background cell; never the blank level.
    fn ink_index(&self, color: Rgba) -> usize {
        let luma = color.luminance() / 255.0;
        let density = if self.invert { luma } else { 1.0 - luma };
        let last = Self::ASCII_RAMP.len() - 1;
        ((density * last as f32).round() as usize).clamp(1, last)
    }

    /// Write output directly to stdout.
    pub fn print(&self, canvas: &Canvas) {
        print!("{}", self.render(canvas));
    }
}
