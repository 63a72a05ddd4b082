//! Bounded undo/redo history over pipeline snapshots.

use tracing::{debug, trace};

use crate::operation::Pipeline;

/// Maximum number of snapshots kept; the oldest is evicted beyond this
pub const HISTORY_LIMIT: usize = 50;

/// Snapshot stack with a cursor.
///
/// Every snapshot is an owned deep copy, so nothing is shared between
/// history entries or with the live pipeline. The cursor always points at
/// an existing snapshot.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Pipeline>,
    index: usize,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Pipeline::new())
    }
}

impl History {
    /// History whose only snapshot is `initial`
    pub fn new(initial: Pipeline) -> Self {
        Self::with_limit(initial, HISTORY_LIMIT)
    }

    pub fn with_limit(initial: Pipeline, limit: usize) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
            limit: limit.max(1),
        }
    }

    /// Record `pipeline` as the newest snapshot.
    ///
    /// Anything after the cursor is discarded first, so redo is no longer
    /// possible after a commit.
    pub fn commit(&mut self, pipeline: &Pipeline) {
        let discarded = self.snapshots.len() - (self.index + 1);
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(pipeline.clone());
        self.index = self.snapshots.len() - 1;

        if self.snapshots.len() > self.limit {
            let overflow = self.snapshots.len() - self.limit;
            self.snapshots.drain(..overflow);
            self.index -= overflow;
            trace!(evicted = overflow, "History limit reached");
        }

        debug!(
            index = self.index,
            len = self.snapshots.len(),
            discarded,
            "History commit"
        );
    }

    /// Step back one snapshot, returning a copy of it
    pub fn undo(&mut self) -> Option<Pipeline> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        debug!(index = self.index, "History undo");
        Some(self.snapshots[self.index].clone())
    }

    /// Step forward one snapshot, returning a copy of it
    pub fn redo(&mut self) -> Option<Pipeline> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        debug!(index = self.index, "History redo");
        Some(self.snapshots[self.index].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// The snapshot under the cursor
    pub fn current(&self) -> &Pipeline {
        &self.snapshots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
