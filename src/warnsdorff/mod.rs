// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Warnsdorff's heuristic.
//!
//! The knight always moves to a square from which it has the fewest onward
//! moves. A square's *degree* is the number of knight moves from it that land
//! on the board on an unvisited square. It is not a fixed property of the
//! square: it drops as the tour visits its neighbours.

use crate::board::{Board, Cell, KNIGHT_DELTAS};

/// A square the knight may move to, with its degree at the time of the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub cell: Cell,
    pub degree: usize,
}

/// Unvisited on-board squares one knight move from `cell`, in delta order.
pub fn neighbours(board: &Board, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    KNIGHT_DELTAS.iter().filter_map(move |&delta| {
        let (row, col) = cell.offset(delta);
        board.valid_cell(row, col)
    })
}

/// Number of onward moves from `cell`. Always in `0..=8`.
pub fn degree_of(board: &Board, cell: Cell) -> usize {
    KNIGHT_DELTAS
        .iter()
        .filter(|&&delta| {
            let (row, col) = cell.offset(delta);
            board.is_valid(row, col)
        })
        .count()
}

/// The neighbours of `cell` that have the minimum degree, ties included.
///
/// Empty when the knight at `cell` has nowhere to go.
pub fn candidates(board: &Board, cell: Cell) -> Vec<Candidate> {
    let scored: Vec<Candidate> = neighbours(board, cell)
        .map(|cell| Candidate {
            cell,
            degree: degree_of(board, cell),
        })
        .collect();

    let Some(min_degree) = scored.iter().map(|c| c.degree).min() else {
        return scored;
    };
    scored
        .into_iter()
        .filter(|c| c.degree == min_degree)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_on_empty_board() {
        let board = Board::new(8);
        assert_eq!(degree_of(&board, Cell::new(0, 0)), 2);
        assert_eq!(degree_of(&board, Cell::new(0, 1)), 3);
        assert_eq!(degree_of(&board, Cell::new(1, 1)), 4);
        assert_eq!(degree_of(&board, Cell::new(3, 3)), 8);
        assert_eq!(degree_of(&board, Cell::new(7, 7)), 2);
    }

    #[test]
    fn test_degree_drops_as_neighbours_are_visited() {
        let mut board = Board::new(8);
        board.set(1, 2, 1);
        assert_eq!(degree_of(&board, Cell::new(0, 0)), 1);
        board.set(2, 1, 2);
        assert_eq!(degree_of(&board, Cell::new(0, 0)), 0);
    }

    #[test]
    fn test_degree_ignores_own_square() {
        let mut board = Board::new(8);
        board.set(3, 3, 1);
        assert_eq!(degree_of(&board, Cell::new(3, 3)), 8);
    }

    #[test]
    fn test_degree_zero_on_tiny_boards() {
        assert_eq!(degree_of(&Board::new(1), Cell::new(0, 0)), 0);
        assert_eq!(degree_of(&Board::new(2), Cell::new(1, 0)), 0);
        assert_eq!(degree_of(&Board::new(3), Cell::new(1, 1)), 0);
    }

    #[test]
    fn test_neighbours_in_delta_order() {
        let board = Board::new(8);
        let found: Vec<Cell> = neighbours(&board, Cell::new(0, 0)).collect();
        assert_eq!(found, vec![Cell::new(1, 2), Cell::new(2, 1)]);
    }

    #[test]
    fn test_candidates_keep_only_minimum_degree() {
        let board = Board::new(8);
        // From (2, 2): (0, 1) and (1, 0) have degree 3; every other neighbour has more.
        let found = candidates(&board, Cell::new(2, 2));
        assert_eq!(
            found,
            vec![
                Candidate { cell: Cell::new(1, 0), degree: 3 },
                Candidate { cell: Cell::new(0, 1), degree: 3 },
            ]
        );
    }

    #[test]
    fn test_candidates_from_corner_tie() {
        let mut board = Board::new(8);
        board.set(0, 0, 1);
        let found = candidates(&board, Cell::new(0, 0));
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|c| c.degree == 5));
    }

    #[test]
    fn test_candidates_empty_when_trapped() {
        let mut board = Board::new(8);
        board.set(0, 0, 1);
        board.set(1, 2, 2);
        board.set(2, 1, 3);
        assert!(candidates(&board, Cell::new(0, 0)).is_empty());
    }

    #[test]
    fn test_candidates_are_valid_squares() {
        let mut board = Board::new(6);
        for (i, cell) in [(0, 0), (1, 2), (2, 4), (4, 5), (3, 3)].into_iter().enumerate() {
            board.set(cell.0, cell.1, i as u64 + 1);
        }
        for row in 0..6 {
            for col in 0..6 {
                for candidate in candidates(&board, Cell::new(row, col)) {
                    let c = candidate.cell;
                    assert!(c.row < 6 && c.col < 6);
                    assert_eq!(board.get(c.row, c.col), None);
                    assert!(candidate.degree <= 8);
                }
            }
        }
    }
}
