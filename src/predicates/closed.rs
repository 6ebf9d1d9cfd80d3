// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ClosedTourPredicate - rejects tours that do not return to their start.

use crate::board::Cell;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// Succeeds only if the knight's final square is one move from `start`.
///
/// Placed after [`TourPredicate`](super::TourPredicate): failing here makes
/// the engine backtrack into the tour and look for another ending.
#[derive(Debug)]
pub struct ClosedTourPredicate {
    start: Cell,
}

impl ClosedTourPredicate {
    pub fn new(start: Cell) -> Self {
        Self { start }
    }
}

impl Predicate for ClosedTourPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.position().is_knight_move_to(self.start) {
            PredicateResult::Success
        } else {
            ctx.statistics.increment_counter(Counters::OpenTours);
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "ClosedTour"
    }
}
