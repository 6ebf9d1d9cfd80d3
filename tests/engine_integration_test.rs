// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure
//! - Restores state via trail
//! - Supports SuccessSamePredicate for multi-round predicates
//! - Suspends execution when requested

use knight_tour::engine::{EngineBuilder, Predicate, PredicateResult};
use knight_tour::predicates::{FailPredicate, SuspendPredicate, TourPredicate};
use knight_tour::state::{Counters, Statistics};
use knight_tour::{Cell, SearchContext, TourConfig};

fn started(size: usize, start: Cell, seed: u64) -> SearchContext {
    let mut ctx = SearchContext::with_seed(&TourConfig::new(size), seed);
    ctx.start_at(start, 1);
    ctx
}

/// Walks the knight along a fixed path, one square per round.
#[derive(Debug)]
struct FixedPath(Vec<Cell>);

impl Predicate for FixedPath {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        match self.0.get(round) {
            Some(&cell) => {
                let order = ctx.step() + 1;
                ctx.place(cell, order);
                PredicateResult::SuccessSamePredicate
            }
            None => PredicateResult::Success,
        }
    }
}

/// Fails unless the board has exactly `n` visited squares.
#[derive(Debug)]
struct RequireVisited(usize);

impl Predicate for RequireVisited {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.board().visited() == self.0 {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }
}

#[test]
fn test_multi_round_path() {
    let mut ctx = started(5, Cell::new(0, 0), 0);
    let engine = EngineBuilder::new()
        .add(Box::new(FixedPath(vec![Cell::new(1, 2), Cell::new(2, 4), Cell::new(4, 3)])))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).expect("suspends after the path");
    // FixedPath rounds 0..=3 + Suspend
    assert_eq!(engine.statistics(), (5, 0));
    assert_eq!(ctx.position(), Cell::new(4, 3));
    assert_eq!(ctx.step(), 4);
    assert_eq!(ctx.board().get(2, 4), Some(3));
}

#[test]
fn test_failure_after_path_restores_board() {
    let mut ctx = started(5, Cell::new(0, 0), 0);
    let before = ctx.state.clone();
    let engine = EngineBuilder::new()
        .add(Box::new(FixedPath(vec![Cell::new(1, 2), Cell::new(2, 4)])))
        .add(Box::new(RequireVisited(10)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.state, before);
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_tour_then_fail_exhausts_and_restores() {
    // No 4x4 tour exists, so forcing failure after the tour explores the
    // whole tree and must leave only the start square.
    let mut ctx = started(4, Cell::new(0, 0), 6);
    let before = ctx.state.clone();
    let engine = EngineBuilder::new()
        .add(Box::new(TourPredicate::new()))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.state, before);
    assert!(ctx.statistics.get(Counters::SearchCalls) > 1);
    assert_eq!(
        ctx.statistics.get(Counters::SearchCalls),
        ctx.statistics.get(Counters::Placements) + 1
    );
}

#[test]
fn test_tour_program_suspends_with_full_board() {
    let mut ctx = started(5, Cell::new(0, 0), 13);
    let engine = EngineBuilder::new()
        .add(Box::new(TourPredicate::new()))
        .add(Statistics::counting_predicate(Counters::Tours, None))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).expect("5x5 tour from the corner");
    assert!(ctx.board().is_full());
    assert_eq!(ctx.step(), 25);
    assert_eq!(ctx.statistics.get(Counters::Tours), 1);

    let (tries, retries) = engine.statistics();
    // Every placement is one retry; tries add the final frame, Counting and Suspend.
    assert_eq!(retries, ctx.statistics.get(Counters::Placements));
    assert!(tries >= 27);
}

#[test]
fn test_counting_predicate_with_filter() {
    let mut ctx = started(3, Cell::new(0, 0), 0);
    let engine = EngineBuilder::new()
        .add(Statistics::counting_predicate(Counters::Tours, Some(|ctx| ctx.board().is_full())))
        .add(Statistics::counting_predicate(Counters::OpenTours, None))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_some());
    assert_eq!(ctx.statistics.get(Counters::Tours), 0);
    assert_eq!(ctx.statistics.get(Counters::OpenTours), 1);
}

#[test]
fn test_terminal_only_program() {
    let mut ctx = started(3, Cell::new(0, 0), 0);
    let engine = EngineBuilder::new()
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_some());
}
