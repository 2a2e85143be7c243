//! Particle domain model.
//!
//! # Responsibility
//! - Define the species catalog and the per-species count vector shared by
//!   the solver, the enumerator and presentation glue.
//!
//! # Invariants
//! - Species order is fixed; every count vector and signature uses it.

pub mod species;
pub mod state;
