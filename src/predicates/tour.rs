// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! TourPredicate - moves the knight one square per round.
//!
//! Round `r` extends the tour from the knight's current square. The predicate
//! offers the Warnsdorff candidates as choices, in a random order drawn
//! afresh for every round, and each choice places the knight and continues
//! with the next round. The engine rewinds the trail between choices, so a
//! failed placement is cleared before the next one is tried.

use log::trace;
use rand::seq::SliceRandom;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;
use crate::warnsdorff::{self, Candidate};

/// Extends the tour until the board is full.
///
/// Each round is one search frame: it succeeds at once on a full board,
/// fails on a dead end, and otherwise offers the shuffled minimum-degree
/// candidates.
#[derive(Debug, Default)]
pub struct TourPredicate {
    /// Shuffled candidates, indexed by round.
    ///
    /// A round's entry stays valid while the engine is retrying its choices,
    /// because deeper rounds only write to later entries.
    choices: Vec<Vec<Candidate>>,
}

impl TourPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates offered in `round`, in the order they are tried.
    pub fn choices(&self, round: usize) -> &[Candidate] {
        self.choices.get(round).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Predicate for TourPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        ctx.statistics.increment_counter(Counters::SearchCalls);

        if ctx.board().is_full() {
            return PredicateResult::Success;
        }

        let mut found = warnsdorff::candidates(ctx.board(), ctx.position());
        if found.is_empty() {
            ctx.statistics.increment_counter(Counters::DeadEnds);
            trace!("dead end at {} after step {}", ctx.position(), ctx.step());
            return PredicateResult::Failure;
        }
        found.shuffle(ctx.rng());

        if self.choices.len() <= round {
            self.choices.resize_with(round + 1, Vec::new);
        }
        let count = found.len();
        self.choices[round] = found;
        PredicateResult::Choices(count)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        let Some(candidate) = self.choices(round).get(choice).copied() else {
            return PredicateResult::Failure;
        };
        let order = ctx.step() + 1;
        ctx.place(candidate.cell, order);
        ctx.statistics.increment_counter(Counters::Placements);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Tour"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::config::TourConfig;

    fn started(size: usize, start: Cell) -> SearchContext {
        let mut ctx = SearchContext::with_seed(&TourConfig::new(size), 11);
        ctx.start_at(start, 1);
        ctx
    }

    #[test]
    fn test_full_board_succeeds() {
        let mut ctx = started(1, Cell::new(0, 0));
        let mut pred = TourPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.statistics.get(Counters::SearchCalls), 1);
    }

    #[test]
    fn test_dead_end_fails() {
        let mut ctx = started(3, Cell::new(1, 1));
        let mut pred = TourPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(ctx.statistics.get(Counters::DeadEnds), 1);
    }

    #[test]
    fn test_offers_minimum_degree_candidates() {
        let mut ctx = started(8, Cell::new(0, 0));
        let mut pred = TourPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(2));

        let mut offered: Vec<Cell> = pred.choices(0).iter().map(|c| c.cell).collect();
        offered.sort();
        assert_eq!(offered, vec![Cell::new(1, 2), Cell::new(2, 1)]);
    }

    #[test]
    fn test_retry_places_next_step() {
        let mut ctx = started(8, Cell::new(0, 0));
        let mut pred = TourPredicate::new();
        pred.try_pred(&mut ctx, 0);
        let first = pred.choices(0)[0].cell;

        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.position(), first);
        assert_eq!(ctx.step(), 2);
        assert_eq!(ctx.board().get(first.row, first.col), Some(2));
        assert_eq!(ctx.statistics.get(Counters::Placements), 1);
    }

    #[test]
    fn test_retry_past_choices_fails() {
        let mut ctx = started(8, Cell::new(0, 0));
        let mut pred = TourPredicate::new();
        pred.try_pred(&mut ctx, 0);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 2), PredicateResult::Failure);
        assert_eq!(ctx.board().visited(), 1);
    }
}
