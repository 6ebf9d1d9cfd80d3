// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board state: an N×N grid recording the order in which squares are visited.
//!
//! Each square is either unvisited or holds a positive order value. Order
//! values are stored as `u64` with [`EMPTY`] as the unvisited sentinel, so that
//! a square can be recorded on the [`Trail`](crate::trail::Trail) and restored
//! verbatim on backtracking.

pub mod cell;
pub mod render;

pub use cell::{Cell, KNIGHT_DELTAS, NMOVES};

/// Default side length of the board.
pub const DEFAULT_SIZE: usize = 8;

/// Raw value of an unvisited square.
pub const EMPTY: u64 = 0;

/// Square grid of visit orders.
///
/// Invariant: `visited` equals the number of squares not holding [`EMPTY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u64>,
    visited: usize,
}

impl Board {
    /// Create a `size`×`size` board with every square unvisited.
    ///
    /// `size` is validated by [`TourConfig`](crate::config::TourConfig);
    /// a zero-sized board is never constructed by the search.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY; size * size],
            visited: 0,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of squares.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of squares currently visited.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// True once every square has been visited.
    pub fn is_full(&self) -> bool {
        self.visited == self.cells.len()
    }

    /// True iff `(row, col)` lies on the board and is unvisited.
    ///
    /// Coordinates are signed so that the result of adding a knight delta
    /// can be tested without a separate bounds check.
    pub fn is_valid(&self, row: isize, col: isize) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.size
            && (col as usize) < self.size
            && self.cells[row as usize * self.size + col as usize] == EMPTY
    }

    /// The on-board, unvisited square at `(row, col)`, if any.
    pub fn valid_cell(&self, row: isize, col: isize) -> Option<Cell> {
        self.is_valid(row, col)
            .then(|| Cell::new(row as usize, col as usize))
    }

    /// Visit order of a square, or `None` if unvisited.
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        match self.cells[self.index(Cell::new(row, col))] {
            EMPTY => None,
            order => Some(order),
        }
    }

    /// Mark a square visited with the given order.
    ///
    /// The caller must have checked the square with [`Board::is_valid`].
    pub fn set(&mut self, row: usize, col: usize, order: u64) {
        debug_assert!(order != EMPTY, "order values start at 1");
        let index = self.index(Cell::new(row, col));
        debug_assert_eq!(self.cells[index], EMPTY, "square ({}, {}) already visited", row, col);
        self.store(index, order);
    }

    /// Revert a square to unvisited.
    pub fn clear(&mut self, row: usize, col: usize) {
        let index = self.index(Cell::new(row, col));
        self.store(index, EMPTY);
    }

    /// Largest order value on the board, or `None` when nothing is visited.
    pub fn max_value(&self) -> Option<u64> {
        self.cells.iter().copied().filter(|&v| v != EMPTY).max()
    }

    /// Iterate over every square in row-major order with its visit order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<u64>)> + '_ {
        self.cells.iter().enumerate().map(move |(index, &value)| {
            let cell = self.cell_at(index);
            (cell, (value != EMPTY).then_some(value))
        })
    }

    /// Row-major index of a square.
    pub(crate) fn index(&self, cell: Cell) -> usize {
        debug_assert!(cell.row < self.size && cell.col < self.size);
        cell.row * self.size + cell.col
    }

    /// Square at a row-major index.
    pub(crate) fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.size, index % self.size)
    }

    /// Raw stored value of a square, [`EMPTY`] if unvisited.
    pub(crate) fn raw(&self, index: usize) -> u64 {
        self.cells[index]
    }

    /// Overwrite a square's raw value, keeping the visited count in step.
    pub(crate) fn store(&mut self, index: usize, value: u64) {
        let was_empty = self.cells[index] == EMPTY;
        let is_empty = value == EMPTY;
        match (was_empty, is_empty) {
            (true, false) => self.visited += 1,
            (false, true) => self.visited -= 1,
            _ => {}
        }
        self.cells[index] = value;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
