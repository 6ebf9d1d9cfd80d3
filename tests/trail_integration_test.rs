// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the trail-based backtracking system.
//!
//! These tests verify that the trail works correctly when integrated with
//! SearchContext: every placement is undone exactly by rewinding.

use knight_tour::warnsdorff;
use knight_tour::{Cell, SearchContext, TourConfig};

fn context(size: usize) -> SearchContext {
    SearchContext::with_seed(&TourConfig::new(size), 99)
}

#[test]
fn test_search_context_simple_backtracking() {
    let mut ctx = context(8);
    ctx.start_at(Cell::new(0, 0), 1);

    let checkpoint = ctx.trail.checkpoint();
    ctx.place(Cell::new(2, 1), 2);
    assert_eq!(ctx.board().get(2, 1), Some(2));
    assert_eq!(ctx.trail.len(), 3);

    ctx.rewind_to(checkpoint);
    assert_eq!(ctx.board().get(2, 1), None);
    assert_eq!(ctx.position(), Cell::new(0, 0));
    assert_eq!(ctx.step(), 1);
    assert_eq!(ctx.trail.len(), 0);
}

#[test]
fn test_nested_checkpoints() {
    let mut ctx = context(8);
    ctx.start_at(Cell::new(0, 0), 1);

    let cp1 = ctx.trail.checkpoint();
    ctx.place(Cell::new(1, 2), 2);
    ctx.place(Cell::new(0, 4), 3);

    let cp2 = ctx.trail.checkpoint();
    let snapshot = ctx.state.clone();
    ctx.place(Cell::new(2, 5), 4);
    ctx.place(Cell::new(4, 6), 5);
    assert_eq!(ctx.board().visited(), 5);

    ctx.rewind_to(cp2);
    assert_eq!(ctx.state, snapshot);

    ctx.rewind_to(cp1);
    assert_eq!(ctx.board().visited(), 1);
    assert_eq!(ctx.board().max_value(), Some(1));
}

#[test]
fn test_degrees_recover_after_rewind() {
    let mut ctx = context(6);
    ctx.start_at(Cell::new(2, 2), 1);
    let probe = Cell::new(0, 1);
    let degree_before = warnsdorff::degree_of(ctx.board(), probe);

    let checkpoint = ctx.trail.checkpoint();
    ctx.place(Cell::new(1, 3), 2);
    ctx.place(Cell::new(2, 1), 3);
    assert!(warnsdorff::degree_of(ctx.board(), probe) < degree_before);

    ctx.rewind_to(checkpoint);
    assert_eq!(warnsdorff::degree_of(ctx.board(), probe), degree_before);
}

#[test]
fn test_independent_search_contexts() {
    let mut ctx1 = context(5);
    let mut ctx2 = context(5);
    ctx1.start_at(Cell::new(0, 0), 1);
    ctx2.start_at(Cell::new(0, 0), 1);

    ctx1.place(Cell::new(1, 2), 2);
    assert_eq!(ctx1.board().visited(), 2);
    assert_eq!(ctx2.board().visited(), 1);
    assert!(ctx2.trail.is_empty());
}
