// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: everything a predicate may read or change.
//!
//! The SearchContext combines:
//! - the trail, recording changes for backtracking
//! - the dynamic state (board, knight position, current step)
//! - statistics, which survive backtracking
//! - the random number generator used for tie-breaking
//!
//! All changes to the dynamic state made during search must go through the
//! trail-recording methods here, so that [`SearchContext::rewind_to`] can undo
//! them.

mod dynamic;

pub use dynamic::DynamicState;

use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::board::{Board, Cell};
use crate::config::TourConfig;
use crate::state::Statistics;
use crate::trail::{Slot, Trail};

/// Trail entries written per placement (square, position, step).
const ENTRIES_PER_PLACEMENT: usize = 3;

/// Search context passed to every predicate.
///
/// # Example
///
/// ```
/// use knight_tour::context::SearchContext;
/// use knight_tour::board::Cell;
/// use knight_tour::config::TourConfig;
///
/// let mut ctx = SearchContext::with_seed(&TourConfig::new(5), 7);
/// ctx.start_at(Cell::new(0, 0), 1);
///
/// let checkpoint = ctx.trail.checkpoint();
/// ctx.place(Cell::new(1, 2), 2);
/// assert_eq!(ctx.step(), 2);
///
/// ctx.rewind_to(checkpoint);
/// assert_eq!(ctx.step(), 1);
/// assert_eq!(ctx.board().get(1, 2), None);
/// ```
pub struct SearchContext {
    /// Trail for backtracking
    pub trail: Trail,
    /// Mutable search state
    pub state: DynamicState,
    /// Counters, not restored on backtracking
    pub statistics: Statistics,
    rng: Box<dyn RngCore>,
}

impl SearchContext {
    /// Create a context for `config`, seeding from `config.seed`, or from
    /// entropy when no seed is given.
    pub fn new(config: &TourConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config, seed),
            None => Self::with_rng(config, Box::new(StdRng::from_entropy())),
        }
    }

    /// Create a context whose tie-breaking is reproducible from `seed`.
    pub fn with_seed(config: &TourConfig, seed: u64) -> Self {
        debug!("[SearchContext] Seeding tie-breaks with {}", seed);
        Self::with_rng(config, Box::new(StdRng::seed_from_u64(seed)))
    }

    /// Create a context drawing tie-breaks from the given generator.
    pub fn with_rng(config: &TourConfig, rng: Box<dyn RngCore>) -> Self {
        let cells = config.size * config.size;
        debug!(
            "[SearchContext] Initialized {}x{} board",
            config.size, config.size
        );
        Self {
            trail: Trail::with_capacity(cells * ENTRIES_PER_PLACEMENT),
            state: DynamicState::new(config.size),
            statistics: Statistics::new(),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Square the knight currently stands on.
    pub fn position(&self) -> Cell {
        self.state.position
    }

    /// Order value of the current square.
    pub fn step(&self) -> u64 {
        self.state.step
    }

    /// Random number generator for tie-breaking.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        self.rng.as_mut()
    }

    /// Place the knight without recording on the trail.
    ///
    /// Used for the start square, which is never backtracked over.
    pub fn start_at(&mut self, cell: Cell, step: u64) {
        self.state.board.set(cell.row, cell.col, step);
        self.state.position = cell;
        self.state.step = step;
    }

    /// Move the knight to `cell`, marking it with `order` (trail-tracked).
    pub fn place(&mut self, cell: Cell, order: u64) {
        let index = self.state.board.index(cell);
        self.record(Slot::Square(index));
        self.record(Slot::Position);
        self.record(Slot::Step);

        self.state.board.set(cell.row, cell.col, order);
        self.state.position = cell;
        self.state.step = order;
    }

    /// Undo every trail-tracked change made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        for entry in self.trail.rewind_to(checkpoint) {
            self.state.restore(entry);
        }
    }

    fn record(&mut self, slot: Slot) {
        let old_value = self.state.slot_value(slot);
        self.trail.record_change(slot, old_value);
    }
}

impl fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchContext")
            .field("trail", &self.trail)
            .field("state", &self.state)
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}
