//! Core domain logic for reactsim.
//! Conservation-law solving and reaction enumeration over a fixed set of
//! leptons, baryons and their antiparticles.

pub mod conservation;
pub mod enumerator;
pub mod logging;
pub mod model;
pub mod render;
pub mod selection;

pub use conservation::chain::ChainSolution;
pub use conservation::totals::{ConservedTotal, ConservedTotals};
pub use conservation::ConservationSolver;
pub use enumerator::{
    enumerate_reactions, enumerate_with_stats, mass_energy, EnumerationStats, Reaction,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::species::{Species, SpeciesError, PHOTON_REST_MASS_MEV, PHOTON_SYMBOL};
pub use model::state::{ParticleState, Signature, StateError, StateResult};
pub use render::{format_reaction, format_terms, RenderStyle};
pub use selection::{
    evaluate_selection, ReactionOutcome, SelectionBoard, SelectionEntry, SelectionError,
    SELECTION_COUNT_MAX,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
