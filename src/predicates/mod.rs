// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `tour`: TourPredicate, one round per knight move
//! - `closed`: ClosedTourPredicate, filter for closed tours
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod closed;
pub mod tour;

pub use closed::ClosedTourPredicate;
pub use tour::TourPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it explores the whole search space, leaving the context as it started.
///
/// # Example
///
/// ```
/// use knight_tour::board::Cell;
/// use knight_tour::config::TourConfig;
/// use knight_tour::context::SearchContext;
/// use knight_tour::engine::EngineBuilder;
/// use knight_tour::predicates::{FailPredicate, TourPredicate};
///
/// // No tour of a 3x3 board exists; the engine exhausts and restores the board.
/// let mut ctx = SearchContext::with_seed(&TourConfig::new(3), 5);
/// ctx.start_at(Cell::new(0, 0), 1);
/// let engine = EngineBuilder::new()
///     .add(Box::new(TourPredicate::new()))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.board().visited(), 1);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution, keeping the solution in the context.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
