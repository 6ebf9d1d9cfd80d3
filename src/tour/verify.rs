// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Checking that a board holds a knight's tour.

use thiserror::Error;

use crate::board::{Board, Cell};

/// Why a board is not a knight's tour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourViolation {
    #[error("square {cell} was never visited")]
    Unvisited { cell: Cell },

    #[error("order {order} appears on both {first} and {second}")]
    Duplicate { order: u64, first: Cell, second: Cell },

    #[error("no square holds order {order}")]
    Gap { order: u64 },

    #[error("{from} to {to} (order {order}) is not a knight move")]
    NotAKnightMove { from: Cell, to: Cell, order: u64 },
}

/// Check that every square is visited, orders are consecutive from the
/// smallest one, and consecutive orders are a knight move apart.
///
/// Returns the squares in visit order.
pub fn verify(board: &Board) -> Result<Vec<Cell>, TourViolation> {
    let mut path = Vec::with_capacity(board.cell_count());
    for (cell, value) in board.iter() {
        let order = value.ok_or(TourViolation::Unvisited { cell })?;
        path.push((order, cell));
    }
    path.sort_unstable();

    for pair in path.windows(2) {
        let (order, from) = pair[0];
        let (next, to) = pair[1];
        if next == order {
            return Err(TourViolation::Duplicate { order, first: from, second: to });
        }
        if next != order + 1 {
            return Err(TourViolation::Gap { order: order + 1 });
        }
        if !from.is_knight_move_to(to) {
            return Err(TourViolation::NotAKnightMove { from, to, order });
        }
    }

    Ok(path.into_iter().map(|(_, cell)| cell).collect())
}

/// True if the path ends a knight move away from where it began.
pub fn is_closed(path: &[Cell]) -> bool {
    match (path.first(), path.last()) {
        (Some(&first), Some(&last)) if path.len() > 1 => last.is_knight_move_to(first),
        _ => false,
    }
}
