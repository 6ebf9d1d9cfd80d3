// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use knight_tour::board::Board;
use knight_tour::tour::verify;
use knight_tour::{Cell, KnightsTour, SearchReport, TourConfig};

/// Solve from `start` on a `size`×`size` board with a fixed seed.
pub fn solve_seeded(size: usize, start: (usize, usize), seed: u64) -> (KnightsTour, SearchReport) {
    let config = TourConfig::new(size)
        .with_start(start.0, start.1)
        .with_seed(seed);
    let mut tour = KnightsTour::new(config).expect("valid configuration");
    let report = tour.solve();
    (tour, report)
}

/// Assert that `board` holds a complete tour starting at `start` with
/// order `first`, and return the path.
pub fn assert_tour(board: &Board, start: Cell, first: u64) -> Vec<Cell> {
    let path = match verify(board) {
        Ok(path) => path,
        Err(violation) => panic!("not a tour: {}\n{}", violation, board),
    };
    assert_eq!(path.len(), board.cell_count());
    assert_eq!(path[0], start);
    assert_eq!(board.get(start.row, start.col), Some(first));
    assert_eq!(board.max_value(), Some(first + board.cell_count() as u64 - 1));
    path
}
