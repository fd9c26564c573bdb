//! Error types for rasterkit operations.

use std::io;
use thiserror::Error;

use crate::shape::ShapeKind;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterkit operations.
///
/// Kernel operations that can only "fail" geometrically (a line outside the
/// window, a zero radius) do not use this type; they return empty results.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Point count does not match the shape kind.
    #[error("Invalid {kind} geometry: expected {expected}, got {got} points")]
    InvalidGeometry {
        /// Shape kind being constructed.
        kind: ShapeKind,
        /// Human readable expectation (e.g. "exactly 2").
        expected: &'static str,
        /// Number of points supplied.
        got: usize,
    },

    /// Circle radius missing, negative or not finite.
    #[error("Invalid circle radius: {0:?}")]
    InvalidRadius(Option<f64>),

    /// Stroke thickness above [`crate::render::MAX_THICKNESS`].
    #[error("Invalid stroke thickness: {0} (max {max})", max = crate::render::MAX_THICKNESS)]
    InvalidThickness(u32),

    /// A coordinate is NaN or infinite.
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate {
        /// X value.
        x: f64,
        /// Y value.
        y: f64,
    },

    /// Clip rectangle with inverted or non-finite bounds.
    #[error("Invalid clip rectangle: left={left}, right={right}, top={top}, bottom={bottom}")]
    InvalidClipRect {
        /// Left edge.
        left: f64,
        /// Right edge.
        right: f64,
        /// Top edge.
        top: f64,
        /// Bottom edge.
        bottom: f64,
    },

    /// Transform parameter out of range (e.g. zero scale factor).
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}
