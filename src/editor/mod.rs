//! Editing session: the shape list plus the state the keyboard used to drive.
//!
//! The [`Editor`] owns every drawn shape, the selected rasterization and
//! clipping algorithms, and an undo history. Interactive front ends translate
//! key presses into [`Command`]s and mouse gestures into the selection and
//! drawing methods.
//!
//! # Example
//!
//! ```
//! use rasterkit::prelude::*;
//!
//! let mut editor = Editor::new(&EditorConfig::default());
//! editor
//!     .draw_shape(ShapeKind::Line, vec![Point::new(0.0, 0.0), Point::new(10.0, 4.0)], None)
//!     .unwrap();
//! editor.select_at(Point::new(5.0, 2.0));
//! editor.run(Command::Translate).unwrap();
//! assert_eq!(editor.shapes()[0].points()[0], Point::new(5.0, 5.0));
//!
//! assert!(editor.undo());
//! assert_eq!(editor.shapes()[0].points()[0], Point::new(0.0, 0.0));
//! ```

mod history;

pub use history::{History, SnapshotHistory};

use log::debug;

use crate::canvas::Canvas;
use crate::clip::{apply_clip, clip, ClipAlgorithm};
use crate::color::Rgba;
use crate::config::{CanvasConfig, CommandConfig, EditorConfig};
use crate::error::Result;
use crate::geometry::{overlaps, ClipRect, PixelCoord, Point};
use crate::render::{rasterize_with_brush, BrushShape, LineAlgorithm};
use crate::shape::{hit_test, make_shape, Shape, ShapeKind};
use crate::transform::{apply_transform, Transform};

/// Editing commands, one per key of the classic drawing program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the selection by the configured step (T).
    Translate,
    /// Grow the selection by the configured factor (E).
    ScaleUp,
    /// Shrink the selection by the inverse factor.
    ScaleDown,
    /// Rotate the selection clockwise as seen on screen (R).
    RotateClockwise,
    /// Rotate the selection counter-clockwise as seen on screen.
    RotateCounterClockwise,
    /// Rasterize lines with DDA (D).
    UseDda,
    /// Rasterize lines with Bresenham (B).
    UseBresenham,
    /// Clip lines with Cohen-Sutherland.
    UseCohenSutherland,
    /// Clip lines with Liang-Barsky.
    UseLiangBarsky,
    /// Undo the last change.
    Undo,
    /// Redo the last undone change.
    Redo,
}

/// The editing session.
#[derive(Debug)]
pub struct Editor {
    shapes: Vec<Shape>,
    line_algorithm: LineAlgorithm,
    clip_algorithm: ClipAlgorithm,
    brush: BrushShape,
    thickness: u32,
    color: Rgba,
    selection_color: Rgba,
    canvas: CanvasConfig,
    commands: CommandConfig,
    history: Box<dyn History>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Editor {
    /// Create an empty session with a [`SnapshotHistory`] of
    /// `config.history_limit` entries.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_history(config, Box::new(SnapshotHistory::new(config.history_limit)))
    }

    /// Create an empty session with a custom history backend.
    #[must_use]
    pub fn with_history(config: &EditorConfig, history: Box<dyn History>) -> Self {
        let drawing = &config.drawing;
        Self {
            shapes: Vec::new(),
            line_algorithm: drawing.line_algorithm,
            clip_algorithm: drawing.clip_algorithm,
            brush: drawing.brush,
            thickness: drawing.thickness,
            color: drawing.color,
            selection_color: drawing.selection_color,
            canvas: config.canvas.clone(),
            commands: config.commands.clone(),
            history,
        }
    }

    /// Shapes in drawing order (last is topmost).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Current line rasterizer.
    #[must_use]
    pub const fn line_algorithm(&self) -> LineAlgorithm {
        self.line_algorithm
    }

    /// Switch the line rasterizer. Not an undoable change.
    pub fn set_line_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.line_algorithm = algorithm;
    }

    /// Current line clipper.
    #[must_use]
    pub const fn clip_algorithm(&self) -> ClipAlgorithm {
        self.clip_algorithm
    }

    /// Switch the line clipper. Not an undoable change.
    pub fn set_clip_algorithm(&mut self, algorithm: ClipAlgorithm) {
        self.clip_algorithm = algorithm;
    }

    /// Current brush footprint.
    #[must_use]
    pub const fn brush(&self) -> BrushShape {
        self.brush
    }

    /// Switch the brush footprint.
    pub fn set_brush(&mut self, brush: BrushShape) {
        self.brush = brush;
    }

    /// Append a shape on top of the others.
    pub fn add_shape(&mut self, shape: Shape) {
        self.history.record(&self.shapes);
        debug!("add {} (#{})", shape.kind(), self.shapes.len());
        self.shapes.push(shape);
    }

    /// Build a shape with the configured stroke and add it.
    ///
    /// Returns the index of the new shape.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`make_shape`]; nothing is
    /// recorded when the shape is rejected.
    pub fn draw_shape(
        &mut self,
        kind: ShapeKind,
        points: Vec<Point>,
        radius: Option<f64>,
    ) -> Result<usize> {
        let shape = make_shape(kind, points, radius, self.thickness, self.color)?;
        self.add_shape(shape);
        Ok(self.shapes.len() - 1)
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        if self.shapes.is_empty() {
            return;
        }
        self.history.record(&self.shapes);
        self.shapes.clear();
    }

    /// Select the topmost shape whose bounding box contains `point`.
    ///
    /// Any previous selection is dropped, also when nothing is hit.
    pub fn select_at(&mut self, point: Point) -> Option<usize> {
        self.clear_selection();
        let index = self.shapes.iter().rposition(|shape| hit_test(point, shape))?;
        self.shapes[index].selected = true;
        Some(index)
    }

    /// Select every shape whose bounding box overlaps `rect`.
    ///
    /// Returns the number of selected shapes.
    pub fn select_in_rect(&mut self, rect: &ClipRect) -> usize {
        let mut count = 0;
        for shape in &mut self.shapes {
            shape.selected = overlaps(&shape.bbox(), rect);
            count += usize::from(shape.selected);
        }
        count
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.selected = false;
        }
    }

    /// Number of selected shapes.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.shapes.iter().filter(|shape| shape.selected).count()
    }

    /// Apply a transform to the selected shapes.
    ///
    /// An empty selection is a no-op and leaves no undo entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTransform`] without touching any shape
    /// or the history.
    pub fn transform_selected(&mut self, transform: &Transform) -> Result<()> {
        if self.selected_count() == 0 {
            return Ok(());
        }
        transform.validate()?;
        self.history.record(&self.shapes);
        apply_transform(self.shapes.iter_mut().filter(|shape| shape.selected), transform)
    }

    /// Move the selection by the drag vector `to - from`.
    ///
    /// # Errors
    ///
    /// Fails for non-finite positions.
    pub fn drag_selected(&mut self, from: Point, to: Point) -> Result<()> {
        self.transform_selected(&Transform::translate(to.x - from.x, to.y - from.y))
    }

    /// Clip every shape against `rect` with the current clip algorithm.
    ///
    /// Fully hidden shapes are deleted; polylines that leave and re-enter the
    /// window become one shape per visible run, each keeping the original
    /// stroke and selection state.
    ///
    /// # Errors
    ///
    /// Returns an error if a clipped piece fails validation; the shape list
    /// is left unchanged in that case.
    pub fn clip_all(&mut self, rect: &ClipRect) -> Result<()> {
        if self.shapes.is_empty() {
            return Ok(());
        }

        let mut clipped = Vec::with_capacity(self.shapes.len());
        let mut removed = 0usize;
        for shape in &self.shapes {
            let result = clip(shape, rect, self.clip_algorithm);
            removed += usize::from(result.is_removed());
            clipped.extend(apply_clip(shape, result)?);
        }

        debug!(
            "clipped {} shape(s) with {:?}: {} removed, {} remaining",
            self.shapes.len(),
            self.clip_algorithm,
            removed,
            clipped.len()
        );
        self.history.record(&self.shapes);
        self.shapes = clipped;
        Ok(())
    }

    /// Execute one editing command.
    ///
    /// # Errors
    ///
    /// Fails only when the configured command steps make an invalid
    /// transform.
    pub fn run(&mut self, command: Command) -> Result<()> {
        let step = &self.commands;
        let transform = match command {
            Command::Translate => Transform::translate(step.translate_step.0, step.translate_step.1),
            Command::ScaleUp => Transform::scale(step.scale_factor),
            Command::ScaleDown => Transform::scale(1.0 / step.scale_factor),
            // Positive angles read clockwise on a y-down screen.
            Command::RotateClockwise => Transform::rotate(step.rotate_degrees),
            Command::RotateCounterClockwise => Transform::rotate(-step.rotate_degrees),
            Command::UseDda => {
                self.line_algorithm = LineAlgorithm::Dda;
                return Ok(());
            }
            Command::UseBresenham => {
                self.line_algorithm = LineAlgorithm::Bresenham;
                return Ok(());
            }
            Command::UseCohenSutherland => {
                self.clip_algorithm = ClipAlgorithm::CohenSutherland;
                return Ok(());
            }
            Command::UseLiangBarsky => {
                self.clip_algorithm = ClipAlgorithm::LiangBarsky;
                return Ok(());
            }
            Command::Undo => {
                self.undo();
                return Ok(());
            }
            Command::Redo => {
                self.redo();
                return Ok(());
            }
        };
        debug!("{command:?}");
        self.transform_selected(&transform)
    }

    /// Restore the state before the last change. Returns `false` when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = std::mem::take(&mut self.shapes);
        match self.history.undo(current) {
            Some(previous) => {
                debug!("undo -> {} shape(s)", previous.len());
                self.shapes = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone change. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = std::mem::take(&mut self.shapes);
        match self.history.redo(current) {
            Some(next) => {
                debug!("redo -> {} shape(s)", next.len());
                self.shapes = next;
                true
            }
            None => false,
        }
    }

    /// Whether [`Editor::undo`] would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`Editor::redo`] would change anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Every painted pixel with its color, in drawing order.
    #[must_use]
    pub fn rasterize_all(&self) -> Vec<(PixelCoord, Rgba)> {
        self.shapes
            .iter()
            .flat_map(|shape| {
                rasterize_with_brush(shape, self.line_algorithm, self.brush)
                    .into_iter()
                    .map(move |pixel| (pixel, shape.color))
            })
            .collect()
    }

    /// A blank canvas sized from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] for zero dimensions.
    pub fn new_canvas(&self) -> Result<Canvas> {
        Canvas::new(self.canvas.columns, self.canvas.rows, self.canvas.cell_size)
    }

    /// Repaint `canvas`: paper, grid, shapes, then selection outlines.
    pub fn render(&self, canvas: &mut Canvas) {
        canvas.clear(self.canvas.background);
        if self.canvas.grid {
            canvas.draw_grid(Rgba::LIGHT_GRAY);
        }
        for (pixel, color) in self.rasterize_all() {
            canvas.plot(pixel, color);
        }
        for shape in self.shapes.iter().filter(|shape| shape.selected) {
            canvas.outline_bbox(&shape.bbox(), self.selection_color);
        }
    }
}
