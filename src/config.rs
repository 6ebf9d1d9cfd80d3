// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use thiserror::Error;

use crate::board::{Cell, DEFAULT_SIZE};

/// Whether the tour must return to a square one move from its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourKind {
    /// Any path visiting every square once.
    #[default]
    Open,
    /// The last square must be a knight move away from the first.
    Closed,
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("a {size}x{size} board has more squares than can be addressed")]
    BoardTooLarge { size: usize },

    #[error("start square ({row}, {col}) is off the {size}x{size} board")]
    StartOutOfBounds { row: usize, col: usize, size: usize },

    #[error("start step must be at least 1")]
    ZeroStartStep,

    #[error("order values from {start_step} overflow on a {size}x{size} board")]
    StepOverflow { start_step: u64, size: usize },

    #[error("a closed tour needs an even number of squares, {size}x{size} has an odd count")]
    OddClosedTour { size: usize },
}

/// Parameters of a single tour search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    /// Side length of the board.
    pub size: usize,
    /// Square the knight starts on.
    pub start: Cell,
    /// Order value given to the start square.
    pub start_step: u64,
    pub kind: TourKind,
    /// Seed for tie-breaking. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            start: Cell::new(0, 0),
            start_step: 1,
            kind: TourKind::Open,
            seed: None,
        }
    }
}

impl TourConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, row: usize, col: usize) -> Self {
        self.start = Cell::new(row, col);
        self
    }

    pub fn with_start_step(mut self, start_step: u64) -> Self {
        self.start_step = start_step;
        self
    }

    pub fn with_kind(mut self, kind: TourKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of squares, or `None` if it does not fit in a `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.size.checked_mul(self.size)
    }

    /// Check the configuration describes a searchable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let cells = self
            .cell_count()
            .ok_or(ConfigError::BoardTooLarge { size: self.size })?;
        if self.start.row >= self.size || self.start.col >= self.size {
            return Err(ConfigError::StartOutOfBounds {
                row: self.start.row,
                col: self.start.col,
                size: self.size,
            });
        }
        if self.start_step == 0 {
            return Err(ConfigError::ZeroStartStep);
        }
        u64::try_from(cells - 1)
            .ok()
            .and_then(|rest| self.start_step.checked_add(rest))
            .ok_or(ConfigError::StepOverflow {
                start_step: self.start_step,
                size: self.size,
            })?;
        if self.kind == TourKind::Closed && self.size % 2 == 1 {
            return Err(ConfigError::OddClosedTour { size: self.size });
        }
        Ok(())
    }
}
