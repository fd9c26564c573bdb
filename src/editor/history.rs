//! Undo/redo storage for the shape list.

use std::collections::VecDeque;

use crate::shape::Shape;

/// Undo/redo store for the editor's shape list.
///
/// The editor calls [`History::record`] with the state *before* each
/// mutation; `undo` and `redo` exchange the current state for a stored one.
pub trait History: std::fmt::Debug + Send {
    /// Remember `shapes` as an undo point and forget the redo chain.
    fn record(&mut self, shapes: &[Shape]);

    /// Step back. `current` is kept for redo. Returns `None` (dropping
    /// `current`) when there is nothing to undo; check [`History::can_undo`].
    fn undo(&mut self, current: Vec<Shape>) -> Option<Vec<Shape>>;

    /// Step forward again after an undo.
    fn redo(&mut self, current: Vec<Shape>) -> Option<Vec<Shape>>;

    /// Whether [`History::undo`] would succeed.
    fn can_undo(&self) -> bool;

    /// Whether [`History::redo`] would succeed.
    fn can_redo(&self) -> bool;

    /// Forget everything.
    fn clear(&mut self);
}

/// Full deep-copy snapshots, bounded like a ring buffer.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    undo: VecDeque<Vec<Shape>>,
    redo: Vec<Vec<Shape>>,
    /// Maximum number of undo snapshots (oldest dropped first).
    limit: usize,
}

impl SnapshotHistory {
    /// Create a history keeping at most `limit` undo snapshots.
    ///
    /// A `limit` of 0 is treated as 1.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self { undo: VecDeque::with_capacity(limit), redo: Vec::new(), limit }
    }

    /// Number of stored undo snapshots.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of stored redo snapshots.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    fn push_undo(&mut self, snapshot: Vec<Shape>) {
        if self.undo.len() >= self.limit {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(100)
    }
}

impl History for SnapshotHistory {
    fn record(&mut self, shapes: &[Shape]) {
        self.push_undo(shapes.to_vec());
        self.redo.clear();
    }

    fn undo(&mut self, current: Vec<Shape>) -> Option<Vec<Shape>> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    fn redo(&mut self, current: Vec<Shape>) -> Option<Vec<Shape>> {
        let next = self.redo.pop()?;
        self.push_undo(current);
        Some(next)
    }

    fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
