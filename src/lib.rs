// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knight's tours by Warnsdorff's heuristic with backtracking.
//!
//! A knight's tour visits every square of an N×N board exactly once. The
//! search follows Warnsdorff's rule: always move to the reachable unvisited
//! square that has the fewest onward moves. Ties are broken at random, and
//! when the heuristic runs into a dead end the search backtracks and tries
//! the next candidate, so a tour is found whenever the heuristic's search
//! tree contains one.
//!
//! # Architecture
//!
//! The search runs on a generic non-deterministic engine:
//!
//! - [`engine`]: runs a sequence of predicates, handling choices and
//!   backtracking with an explicit stack rather than recursion
//! - [`trail`]: records every change to the search state so that
//!   backtracking restores it exactly
//! - [`context`]: the board, knight position, statistics and random number
//!   generator, passed to every predicate
//! - [`predicates`]: the tour predicate (one round per move), the closed
//!   tour filter and the terminal predicates
//! - [`warnsdorff`]: square degrees and minimum-degree candidates
//! - [`tour`]: [`KnightsTour`], which assembles and runs the program, and
//!   tour verification
//!
//! # Example
//!
//! ```
//! use knight_tour::{KnightsTour, TourConfig};
//!
//! let mut tour = KnightsTour::new(TourConfig::new(8).with_seed(2025)).unwrap();
//! let report = tour.solve();
//! assert!(report.solved);
//! println!("One solution after {} recursive calls:\n{}", report.calls, tour.board());
//! ```

pub mod board;
pub mod config;
pub mod context;
pub mod engine;
pub mod predicates;
pub mod state;
pub mod tour;
pub mod trail;
pub mod warnsdorff;

// Re-export commonly used types
pub use board::{Board, Cell};
pub use config::{ConfigError, TourConfig, TourKind};
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use tour::{KnightsTour, SearchReport};
pub use trail::Trail;
