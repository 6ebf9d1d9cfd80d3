// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering of a board.

use std::fmt;

use super::Board;

/// Marker used for unvisited squares by the `Display` impl.
pub const DEFAULT_MARKER: char = '*';

/// Render the board one row per line.
///
/// Every square is padded to the width of the largest order value and
/// followed by a single space. Unvisited squares print `marker` repeated to
/// that width.
pub fn render(board: &Board, marker: char) -> String {
    let width = board
        .max_value()
        .map(|max| max.to_string().len())
        .unwrap_or(1);
    let blank: String = std::iter::repeat(marker).take(width).collect();

    let mut out = String::with_capacity(board.cell_count() * (width + 1) + board.size());
    for (cell, value) in board.iter() {
        match value {
            Some(order) => out.push_str(&format!("{:<width$} ", order, width = width)),
            None => {
                out.push_str(&blank);
                out.push(' ');
            }
        }
        if cell.col + 1 == board.size() {
            out.push('\n');
        }
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, DEFAULT_MARKER))
    }
}
