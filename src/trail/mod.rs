// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every change the search makes to trail-tracked state records the slot it
//! touched and the value it held before. Rewinding to a checkpoint replays
//! those records in reverse, restoring the state exactly as it was when the
//! checkpoint was taken.
//!
//! The trail only stores the records; restoring values is done by the owner
//! of the state (see [`SearchContext::rewind_to`](crate::context::SearchContext::rewind_to)).

/// A piece of trail-tracked search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A board square, by row-major index.
    Square(usize),
    /// The square the knight currently stands on.
    Position,
    /// The order value of the most recent placement.
    Step,
}

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailEntry {
    pub slot: Slot,
    /// The value before the change.
    pub old_value: u64,
}

/// Record of state changes, in the order they were made.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Current position, to be passed back to [`Trail::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record a state change.
    pub fn record_change(&mut self, slot: Slot, old_value: u64) {
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Remove every entry recorded since `checkpoint`, most recent first.
    ///
    /// The caller must restore each returned entry to undo the changes.
    /// A checkpoint at or beyond the current length yields nothing.
    pub fn rewind_to(&mut self, checkpoint: usize) -> impl Iterator<Item = TrailEntry> + '_ {
        let start = checkpoint.min(self.entries.len());
        self.entries.drain(start..).rev()
    }

    /// Discard all entries without restoring them.
    ///
    /// Used once a search has finished and its changes become permanent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
