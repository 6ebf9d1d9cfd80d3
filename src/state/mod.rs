// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search state that lives outside the board.
//!
//! - `statistics`: counters kept across backtracking

pub mod statistics;

pub use statistics::{Counters, Statistics};
