//! Editor configuration.
//!
//! YAML file with every field optional; missing keys fall back to the
//! defaults of an 800x600 drawing window made of 5-pixel cells.

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::clip::ClipAlgorithm;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::render::{BrushShape, LineAlgorithm, MAX_THICKNESS};

/// Canvas geometry and paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Logical columns.
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Logical rows.
    #[serde(default = "default_rows")]
    pub rows: u32,

    /// Device pixels per logical pixel.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Paper color.
    #[serde(default = "default_background")]
    pub background: Rgba,

    /// Draw cell grid lines.
    #[serde(default = "default_grid")]
    pub grid: bool,
}

fn default_columns() -> u32 {
    160
}
fn default_rows() -> u32 {
    120
}
fn default_cell_size() -> u32 {
    5
}
fn default_background() -> Rgba {
    Rgba::WHITE
}
fn default_grid() -> bool {
    true
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            cell_size: default_cell_size(),
            background: default_background(),
            grid: default_grid(),
        }
    }
}

/// Stroke settings for new shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Line rasterizer (`dda` or `bresenham`).
    #[serde(default)]
    pub line_algorithm: LineAlgorithm,

    /// Line clipper (`cohen_sutherland` or `liang_barsky`).
    #[serde(default)]
    pub clip_algorithm: ClipAlgorithm,

    /// Brush footprint (`disk` or `square`).
    #[serde(default)]
    pub brush: BrushShape,

    /// Stroke thickness in logical pixels.
    #[serde(default = "default_thickness")]
    pub thickness: u32,

    /// Stroke color.
    #[serde(default = "default_color")]
    pub color: Rgba,

    /// Selection outline color.
    #[serde(default = "default_selection_color")]
    pub selection_color: Rgba,
}

fn default_thickness() -> u32 {
    1
}
fn default_color() -> Rgba {
    Rgba::BLUE
}
fn default_selection_color() -> Rgba {
    Rgba::RED
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            line_algorithm: LineAlgorithm::default(),
            clip_algorithm: ClipAlgorithm::default(),
            brush: BrushShape::default(),
            thickness: default_thickness(),
            color: default_color(),
            selection_color: default_selection_color(),
        }
    }
}

/// Step sizes of the editing commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Translation per `Translate` command, `[dx, dy]`.
    #[serde(default = "default_translate_step")]
    pub translate_step: (f64, f64),

    /// Factor of `ScaleUp`; `ScaleDown` uses its inverse.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,

    /// Angle of the rotate commands, in degrees.
    #[serde(default = "default_rotate_degrees")]
    pub rotate_degrees: f64,
}

fn default_translate_step() -> (f64, f64) {
    (5.0, 5.0)
}
fn default_scale_factor() -> f64 {
    1.5
}
fn default_rotate_degrees() -> f64 {
    45.0
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            translate_step: default_translate_step(),
            scale_factor: default_scale_factor(),
            rotate_degrees: default_rotate_degrees(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing settings.
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Command settings.
    #[serde(default)]
    pub commands: CommandConfig,

    /// Number of undo snapshots kept.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_version() -> u32 {
    1
}
fn default_history_limit() -> usize {
    100
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            drawing: DrawingConfig::default(),
            commands: CommandConfig::default(),
            history_limit: default_history_limit(),
        }
    }
}

impl EditorConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/rasterkit/config.yaml`, when the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rasterkit").join("config.yaml"))
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] for out-of-range values.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("using default configuration: {e}");
                Self::default()
            }
        }
    }

    /// Check value ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let invalid = |key: &str, message: &str| {
            Err(Error::ConfigInvalid { key: key.to_string(), message: message.to_string() })
        };

        let canvas = &self.canvas;
        if canvas.columns == 0 || canvas.rows == 0 {
            return invalid("canvas", "columns and rows must be positive");
        }
        if canvas.cell_size == 0 {
            return invalid("canvas.cell_size", "must be positive");
        }
        if self.drawing.thickness == 0 || self.drawing.thickness > MAX_THICKNESS {
            return invalid("drawing.thickness", "must be between 1 and 64");
        }

        let commands = &self.commands;
        if !(commands.translate_step.0.is_finite() && commands.translate_step.1.is_finite()) {
            return invalid("commands.translate_step", "must be finite");
        }
        if !commands.scale_factor.is_finite() || commands.scale_factor <= 0.0 {
            return invalid("commands.scale_factor", "must be a positive number");
        }
        if !commands.rotate_degrees.is_finite() {
            return invalid("commands.rotate_degrees", "must be finite");
        }
        if self.history_limit == 0 {
            return invalid("history_limit", "must be positive");
        }
        Ok(())
    }
}
