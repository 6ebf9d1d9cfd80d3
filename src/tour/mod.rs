// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knight's tour search.
//!
//! [`KnightsTour`] owns a [`SearchContext`] and runs the predicate program
//!
//! ```text
//! Tour -> [ClosedTour] -> Counting(Tours) -> Suspend
//! ```
//!
//! on it. `Tour` extends the path one square per round, `ClosedTour` (closed
//! tours only) rejects endings that do not return to the start, and `Suspend`
//! stops the engine with the finished tour on the board. If every choice is
//! exhausted the engine backtracks past `Tour` and the board is left exactly as
//! it was before the search.

pub mod verify;

pub use verify::{is_closed, verify, TourViolation};

use log::{debug, info};
use rand::RngCore;

use crate::board::{Board, Cell};
use crate::config::{ConfigError, TourConfig, TourKind};
use crate::context::{DynamicState, SearchContext};
use crate::engine::{EngineBuilder, Predicate};
use crate::predicates::{ClosedTourPredicate, SuspendPredicate, TourPredicate};
use crate::state::{Counters, Statistics};
use crate::warnsdorff::{self, Candidate};

/// Outcome of [`KnightsTour::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Whether a tour was found.
    pub solved: bool,
    /// Search frames entered, counted like calls of a recursive search.
    pub calls: u64,
    /// Predicate evaluations made by the engine.
    pub tries: u64,
    /// Choices the engine tried.
    pub retries: u64,
    pub statistics: Statistics,
}

/// Warnsdorff search with random tie-breaking and backtracking.
///
/// # Example
///
/// ```
/// use knight_tour::config::TourConfig;
/// use knight_tour::tour::{verify, KnightsTour};
///
/// let mut tour = KnightsTour::new(TourConfig::new(5).with_seed(1)).unwrap();
/// let report = tour.solve();
/// assert!(report.solved);
/// assert!(verify(tour.board()).is_ok());
/// ```
#[derive(Debug)]
pub struct KnightsTour {
    config: TourConfig,
    ctx: SearchContext,
    last_run: (u64, u64),
}

impl KnightsTour {
    /// Create a search for a validated configuration.
    pub fn new(config: TourConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ctx = SearchContext::new(&config);
        Ok(Self::with_context(config, ctx))
    }

    /// Create a search that breaks ties with the given generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: TourConfig, rng: Box<dyn RngCore>) -> Result<Self, ConfigError> {
        config.validate()?;
        let ctx = SearchContext::with_rng(&config, rng);
        Ok(Self::with_context(config, ctx))
    }

    fn with_context(config: TourConfig, ctx: SearchContext) -> Self {
        Self {
            config,
            ctx,
            last_run: (0, 0),
        }
    }

    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        self.ctx.board()
    }

    pub fn context(&self) -> &SearchContext {
        &self.ctx
    }

    /// Mutable access to the context, e.g. to mark squares before a search.
    pub fn context_mut(&mut self) -> &mut SearchContext {
        &mut self.ctx
    }

    /// Search frames entered so far.
    pub fn calls(&self) -> u64 {
        self.ctx.statistics.get(Counters::SearchCalls)
    }

    /// Number of onward moves from `(row, col)` on the current board.
    pub fn degree_of(&self, row: usize, col: usize) -> usize {
        warnsdorff::degree_of(self.ctx.board(), Cell::new(row, col))
    }

    /// Minimum-degree moves from `(row, col)` on the current board.
    pub fn candidates(&self, row: usize, col: usize) -> Vec<Candidate> {
        warnsdorff::candidates(self.ctx.board(), Cell::new(row, col))
    }

    /// Complete the tour from `(row, col)`, which must already hold `step`.
    ///
    /// A closed tour must end one move from the square holding the lowest
    /// order on the board, where the path began.
    ///
    /// Returns `true` with the tour on the board, or `false` with the board
    /// unchanged when every continuation has been exhausted.
    pub fn search(&mut self, row: usize, col: usize, step: u64) -> bool {
        debug_assert_eq!(
            self.ctx.board().get(row, col),
            Some(step),
            "search must start from the knight's marked square"
        );
        self.ctx.state.position = Cell::new(row, col);
        self.ctx.state.step = step;

        let closing: Option<Box<dyn Predicate>> = match self.config.kind {
            TourKind::Open => None,
            TourKind::Closed => {
                let first = first_square(self.ctx.board()).unwrap_or(Cell::new(row, col));
                Some(Box::new(ClosedTourPredicate::new(first)))
            }
        };
        let mut engine = EngineBuilder::new()
            .add(Box::new(TourPredicate::new()))
            .add_if(closing)
            .add(Statistics::counting_predicate(Counters::Tours, None))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let solved = engine.run(&mut self.ctx);
        self.last_run = engine.statistics();
        if solved {
            self.ctx.trail.clear();
        }
        solved
    }

    /// Place the knight on the configured start square and search for a tour.
    ///
    /// Starts from an empty board and zeroed statistics each time; the random
    /// generator carries on from earlier runs.
    pub fn solve(&mut self) -> SearchReport {
        let TourConfig { size, start, start_step, .. } = self.config;
        self.ctx.state = DynamicState::new(size);
        self.ctx.trail.clear();
        self.ctx.statistics.reset();
        self.last_run = (0, 0);

        info!(
            "Searching {:?} tour on {}x{} board from {} at step {}",
            self.config.kind, size, size, start, start_step
        );
        self.ctx.start_at(start, start_step);
        let solved = self.search(start.row, start.col, start_step);

        let report = SearchReport {
            solved,
            calls: self.calls(),
            tries: self.last_run.0,
            retries: self.last_run.1,
            statistics: self.ctx.statistics.clone(),
        };
        if solved {
            info!("Found a tour after {} recursive calls", report.calls);
        } else {
            info!("No tour after {} recursive calls", report.calls);
        }
        debug!("Statistics: {}", report.statistics);
        report
    }
}

/// Square holding the lowest order value, where the path began.
fn first_square(board: &Board) -> Option<Cell> {
    board
        .iter()
        .filter_map(|(cell, value)| value.map(|v| (v, cell)))
        .min()
        .map(|(_, cell)| cell)
}
