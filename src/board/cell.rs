// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board coordinates and knight move geometry.

use std::fmt;

/// Number of distinct knight moves.
pub const NMOVES: usize = 8;

/// Row/column offsets of the eight knight moves.
///
/// The order fixes the order in which neighbours are enumerated, and hence
/// the order of candidates before random tie-breaking.
pub const KNIGHT_DELTAS: [(isize, isize); NMOVES] = [
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
];

/// A row/column pair identifying a square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a (row, col) offset, returning signed coordinates.
    ///
    /// The result may lie off the board; callers check it with
    /// [`Board::is_valid`](crate::board::Board::is_valid).
    #[inline]
    pub fn offset(self, (dr, dc): (isize, isize)) -> (isize, isize) {
        (self.row as isize + dr, self.col as isize + dc)
    }

    /// True if `other` is exactly one knight move away.
    pub fn is_knight_move_to(self, other: Cell) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
