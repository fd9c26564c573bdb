//! # rasterkit
//!
//! Pixel-level 2D drawing kernel for a "fat pixel" raster editor.
//!
//! rasterkit turns vector shapes (lines, circles, polylines, polygons) into
//! the discrete pixels of a coarse logical grid, clips them against a
//! rectangular window and applies affine transforms to selected shapes.
//!
//! ## Features
//!
//! - **Rasterization**: DDA and Bresenham lines, midpoint circles, disk/square brushes
//! - **Clipping**: Cohen-Sutherland and Liang-Barsky lines, Sutherland-Hodgman polygons
//! - **Transforms**: translate, scale, rotate and reflect about a pivot
//! - **Editor**: selection, keyboard-style commands and undo/redo
//! - **Output**: fixed-scale RGBA canvas and terminal (ASCII/ANSI) rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use rasterkit::prelude::*;
//!
//! let line = make_shape(
//!     ShapeKind::Line,
//!     vec![Point::new(0.0, 0.0), Point::new(8.0, 3.0)],
//!     None,
//!     1,
//!     Rgba::BLUE,
//! )?;
//! let pixels = rasterize(&line, LineAlgorithm::Bresenham);
//! assert_eq!(pixels.len(), 9);
//!
//! let window = ClipRect::new(0.0, 4.0, 0.0, 4.0)?;
//! assert!(!clip(&line, &window, ClipAlgorithm::LiangBarsky).is_removed());
//! # Ok::<(), rasterkit::Error>(())
//! ```
//!
//! ## Coordinate System
//!
//! Logical pixel coordinates with the origin at the top-left and y growing
//! downwards. Shape coordinates are `f64` and rounded to the nearest pixel
//! (halves away from zero) when rasterized.
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line clipping."
//!   *ACM Transactions on Graphics*, 3(1), 1-22.
//! - Sutherland, I. E., & Hodgman, G. W. (1974). "Reentrant polygon clipping."
//!   *Communications of the ACM*, 17(1), 32-42.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Geometric primitives (points, pixel coordinates, boxes, clip windows).
pub mod geometry;

/// Shape model and construction.
pub mod shape;

// ============================================================================
// Kernel Modules
// ============================================================================

/// Rasterization of lines, circles and shapes.
pub mod render;

/// Line and polygon clipping.
pub mod clip;

/// Affine transforms of shapes.
pub mod transform;

// ============================================================================
// Session and Output Modules
// ============================================================================

/// Editing session with selection and undo.
pub mod editor;

/// Fixed-scale pixel canvas.
pub mod canvas;

/// Output encoders (terminal).
pub mod output;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterkit operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use rasterkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::clip::{apply_clip, clip, clip_line, clip_polygon, ClipAlgorithm, ClipResult};
    pub use crate::color::Rgba;
    pub use crate::config::EditorConfig;
    pub use crate::editor::{Command, Editor, History, SnapshotHistory};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{BoundingBox, ClipRect, PixelCoord, Point};
    pub use crate::output::{TerminalEncoder, TerminalMode};
    pub use crate::render::{
        rasterize, rasterize_circle, rasterize_line, BrushShape, LineAlgorithm,
    };
    pub use crate::shape::{compute_bbox, hit_test, make_shape, Geometry, Shape, ShapeKind};
    pub use crate::transform::{apply_transform, Axis, Pivot, Transform};
}
