//! Budgeted outer loop around [`Tree::grow`].
//!
//! The driver calls `grow` until either the wall-clock duration or the
//! iteration limit runs out. Both limits are only checked between calls;
//! a single growth step is never interrupted.

use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::sampler::SampleSource;
use crate::tree::Tree;

/// How long the driver keeps growing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Budget {
    pub duration: Option<Duration>,
    pub max_iterations: Option<u64>,
}

impl Budget {
    pub fn iterations(n: u64) -> Self {
        Self {
            duration: None,
            max_iterations: Some(n),
        }
    }

    pub fn duration(d: Duration) -> Self {
        Self {
            duration: Some(d),
            max_iterations: None,
        }
    }

    /// ### Errors
    /// [`Error::UnboundedBudget`] if neither limit is set.
    pub fn validate(&self) -> Result<()> {
        if self.duration.is_none() && self.max_iterations.is_none() {
            return Err(Error::UnboundedBudget);
        }
        Ok(())
    }

    fn exhausted(&self, iterations: u64, elapsed: Duration) -> bool {
        self.max_iterations.is_some_and(|max| iterations >= max)
            || self.duration.is_some_and(|d| elapsed >= d)
    }
}

/// Summary of a driver run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthReport {
    /// Number of `grow` calls made.
    pub iterations: u64,
    /// Number of calls that added a branch.
    pub accepted: u64,
    pub elapsed: Duration,
}

impl GrowthReport {
    pub fn rejected(&self) -> u64 {
        self.iterations - self.accepted
    }
}

/// Runs growth steps on a tree under a [`Budget`].
#[derive(Clone, Copy, Debug)]
pub struct Driver {
    budget: Budget,
    progress_every: u64,
}

impl Driver {
    /// ### Errors
    /// [`Error::UnboundedBudget`] if `budget` sets no limit.
    pub fn new(budget: Budget) -> Result<Self> {
        budget.validate()?;
        Ok(Self {
            budget,
            progress_every: 1000,
        })
    }

    /// Emits a progress event every `n` iterations (`0` disables it).
    pub fn with_progress_every(mut self, n: u64) -> Self {
        self.progress_every = n;
        self
    }

    /// Grows `tree` until the budget is exhausted.
    ///
    /// ### Parameters
    /// - `tree` - The tree to extend in place.
    /// - `source` - Sample source handed to every [`Tree::grow`] call.
    ///
    /// ### Returns
    /// A [`GrowthReport`] with call and acceptance counts.
    ///
    /// ### Errors
    /// Propagates any precondition violation from [`Tree::grow`].
    pub fn run(&self, tree: &mut Tree, source: &mut impl SampleSource) -> Result<GrowthReport> {
        let start = Instant::now();
        let mut iterations = 0u64;
        let mut accepted = 0u64;

        tracing::info!(
            max_iterations = ?self.budget.max_iterations,
            duration = ?self.budget.duration,
            branches = tree.len(),
            "growth started"
        );

        while !self.budget.exhausted(iterations, start.elapsed()) {
            if tree.grow(source)?.is_some() {
                accepted += 1;
            }
            iterations += 1;

            if self.progress_every > 0 && iterations % self.progress_every == 0 {
                tracing::debug!(iterations, accepted, branches = tree.len(), "growth progress");
            }
        }

        let report = GrowthReport {
            iterations,
            accepted,
            elapsed: start.elapsed(),
        };
        tracing::info!(
            iterations,
            accepted,
            branches = tree.len(),
            elapsed = ?report.elapsed,
            "growth finished"
        );
        Ok(report)
    }
}
