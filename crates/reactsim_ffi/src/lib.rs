//! UI-facing bindings for reactsim core.

pub mod api;
