//! Conservation-law solver.
//!
//! # Responsibility
//! - Capture the conserved totals of one input state.
//! - Reconstruct candidate product states from one leading species value.
//!
//! # Invariants
//! - A solver is built from one input and never changes afterwards.
//! - Every state returned by `solve` is non-negative and reproduces the
//!   input's twelve totals.
//! - Solving never panics; failures are absent results.

pub mod chain;
pub mod totals;

use crate::model::species::Species;
use crate::model::state::ParticleState;
use chain::{bounding_totals, run_chain, ChainSolution};
use totals::ConservedTotals;

/// Solver bound to the conserved totals of one input state.
#[derive(Debug, Clone)]
pub struct ConservationSolver {
    totals: ConservedTotals,
}

impl ConservationSolver {
    /// Captures the totals of `input`.
    ///
    /// Returns `None` when the totals overflow `i64`.
    pub fn new(input: &ParticleState) -> Option<Self> {
        ConservedTotals::compute(input).map(|totals| Self { totals })
    }

    pub fn totals(&self) -> &ConservedTotals {
        &self.totals
    }

    /// Upper bound for trial values of `leading`: `max(0, t1, t2, t3)`.
    ///
    /// Heuristic, not a feasibility proof.
    pub fn max_leading_value(&self, leading: Species) -> i64 {
        bounding_totals(leading)
            .into_iter()
            .map(|total| self.totals.get(total))
            .fold(0, i64::max)
    }

    /// Runs the substitution chain without folding.
    pub fn solve_raw(&self, leading: Species, value: i64) -> Option<ChainSolution> {
        run_chain(&self.totals, leading, value)
    }

    /// Reconstructs a non-negative product state for `leading = value`.
    pub fn solve(&self, leading: Species, value: i64) -> Option<ParticleState> {
        self.solve_raw(leading, value)?.fold()
    }

    /// Returns whether `state` reproduces every total of this solver's input.
    pub fn conserves(&self, state: &ParticleState) -> bool {
        ConservedTotals::compute(state).is_some_and(|totals| totals == self.totals)
    }
}
