// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (trail-tracked).

use crate::board::{Board, Cell};
use crate::trail::{Slot, TrailEntry};

/// Mutable search state.
///
/// This data changes during search and every change made by a predicate is
/// recorded on the trail, so that backtracking restores it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicState {
    /// Visit order of every square.
    pub board: Board,

    /// Square the knight currently stands on.
    pub position: Cell,

    /// Order value of the square at `position`.
    ///
    /// Zero until the knight has been placed.
    pub step: u64,
}

impl DynamicState {
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            position: Cell::new(0, 0),
            step: 0,
        }
    }

    /// Current raw value of a slot, as recorded on the trail.
    pub(crate) fn slot_value(&self, slot: Slot) -> u64 {
        match slot {
            Slot::Square(index) => self.board.raw(index),
            Slot::Position => self.board.index(self.position) as u64,
            Slot::Step => self.step,
        }
    }

    /// Put back the value a trail entry recorded.
    pub(crate) fn restore(&mut self, entry: TrailEntry) {
        match entry.slot {
            Slot::Square(index) => self.board.store(index, entry.old_value),
            Slot::Position => self.position = self.board.cell_at(entry.old_value as usize),
            Slot::Step => self.step = entry.old_value,
        }
    }
}
