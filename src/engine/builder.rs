// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Builder that assembles a predicate program.
//!
//! A program is a sequence of predicates ending in a terminal predicate.
//! The builder only exposes `build` after `terminal` has been called, so an
//! engine without a terminal predicate cannot be constructed.

use super::{Predicate, SearchEngine, TerminalPredicate};

/// Collects the non-terminal predicates of a program.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

/// A complete program, ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append a predicate if `predicate` is `Some`.
    pub fn add_if(self, predicate: Option<Box<dyn Predicate>>) -> Self {
        match predicate {
            Some(predicate) => self.add(predicate),
            None => self,
        }
    }

    /// End the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
