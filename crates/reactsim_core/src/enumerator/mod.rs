//! Reaction enumerator.
//!
//! # Responsibility
//! - Drive the conservation solver over every leading species and value.
//! - Deduplicate products, score them by rest-mass energy and rank them.
//!
//! # Invariants
//! - Every product signature appears at most once per pass.
//! - Output is ordered by non-increasing energy delta; ties keep discovery
//!   order (leading species order, then ascending leading value).
//! - A pass owns all its state; identical inputs give identical outputs.

mod energy;

pub use energy::{mass_energy, Reaction};

use crate::conservation::ConservationSolver;
use crate::model::species::Species;
use crate::model::state::{ParticleState, Signature};
use log::{debug, warn};
use std::collections::HashSet;

/// Per-pass counters reported in diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    pub trials: u64,
    pub skipped: u64,
    pub duplicates: u64,
}

/// Enumerates and ranks every distinct product state reachable from `input`.
///
/// Returns an empty list when the input's conserved totals overflow.
pub fn enumerate_reactions(input: &ParticleState) -> Vec<Reaction> {
    enumerate_with_stats(input).0
}

/// Same as [`enumerate_reactions`], also returning pass counters.
pub fn enumerate_with_stats(input: &ParticleState) -> (Vec<Reaction>, EnumerationStats) {
    let mut stats = EnumerationStats::default();
    let Some(solver) = ConservationSolver::new(input) else {
        warn!("event=enumerate module=enumerator status=error reason=totals_overflow");
        return (Vec::new(), stats);
    };

    let input_energy = mass_energy(input);
    let mut seen: HashSet<Signature> = HashSet::new();
    let mut reactions = Vec::new();

    for leading in Species::ALL {
        for value in 0..=solver.max_leading_value(leading) {
            stats.trials += 1;
            let Some(products) = solver.solve(leading, value) else {
                stats.skipped += 1;
                continue;
            };
            if !seen.insert(products.signature()) {
                stats.duplicates += 1;
                continue;
            }
            reactions.push(Reaction {
                energy_delta_mev: input_energy - mass_energy(&products),
                products,
                leading,
                leading_value: value,
            });
        }
    }

    // Stable: equal deltas keep discovery order.
    reactions.sort_by(|a, b| b.energy_delta_mev.total_cmp(&a.energy_delta_mev));

    debug!(
        "event=enumerate module=enumerator status=ok trials={} skipped={} duplicates={} reactions={}",
        stats.trials,
        stats.skipped,
        stats.duplicates,
        reactions.len()
    );
    (reactions, stats)
}
