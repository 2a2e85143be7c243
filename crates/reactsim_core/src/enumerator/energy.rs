//! Rest-mass energy accounting.

use crate::model::species::Species;
use crate::model::state::ParticleState;
use serde::{Deserialize, Serialize};

/// Total rest-mass energy of `state` in MeV.
///
/// Species with a zero or negative count contribute nothing.
pub fn mass_energy(state: &ParticleState) -> f64 {
    state
        .present()
        .map(|(species, count)| species.rest_mass_mev() * count as f64)
        .sum()
}

/// One candidate reaction for a fixed input state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// `mass_energy(input) - mass_energy(products)`; positive releases energy.
    pub energy_delta_mev: f64,
    pub products: ParticleState,
    /// Leading species of the trial that first produced `products`.
    pub leading: Species,
    pub leading_value: i64,
}

impl Reaction {
    /// Returns whether the reaction releases energy.
    pub fn is_exothermic(&self) -> bool {
        self.energy_delta_mev > 0.0
    }

    /// Magnitude of the energy released or absorbed.
    pub fn energy_magnitude_mev(&self) -> f64 {
        self.energy_delta_mev.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::mass_energy;
    use crate::model::species::Species;
    use crate::model::state::ParticleState;

    #[test]
    fn mass_energy_of_non_positive_state_is_exactly_zero() {
        let state = ParticleState::new()
            .with(Species::Proton, -2)
            .with(Species::Positron, -1);
        assert_eq!(mass_energy(&state), 0.0);
        assert_eq!(mass_energy(&ParticleState::new()), 0.0);
    }

    #[test]
    fn mass_energy_ignores_negative_entries_and_scales_positive_ones() {
        let state = ParticleState::new()
            .with(Species::Neutron, 2)
            .with(Species::Antiproton, -1);
        assert!((mass_energy(&state) - 2.0 * 939.565).abs() < 1e-9);
    }
}
