//! Substitution chains for reconstructing product vectors.
//!
//! # Responsibility
//! - Store, per leading species, the ordered substitution steps and the
//!   three totals that bound the leading value.
//! - Interpret a chain into a raw signed vector and fold it into counts.
//!
//! # Invariants
//! - Each chain assigns the seven non-leading species exactly once, and every
//!   step's source is the leading species or an earlier target.
//! - A raw solution assigns each antiparticle the negation of its partner.

use crate::conservation::totals::{ConservedTotal, ConservedTotals};
use crate::model::species::{Species, SPECIES_COUNT};
use crate::model::state::{ParticleState, Signature};

use crate::conservation::totals::ConservedTotal as T;
use crate::model::species::Species as S;

/// Steps per chain: every species but the leading one.
pub const CHAIN_LEN: usize = SPECIES_COUNT - 1;

/// One `target = total - source` assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionStep {
    pub target: Species,
    pub total: ConservedTotal,
    pub source: Species,
}

const fn step(target: Species, total: ConservedTotal, source: Species) -> SubstitutionStep {
    SubstitutionStep {
        target,
        total,
        source,
    }
}

const CHAINS: [[SubstitutionStep; CHAIN_LEN]; SPECIES_COUNT] = [
    // p
    [
        step(S::Neutron, T::PN, S::Proton),
        step(S::Electron, T::NEMinus, S::Neutron),
        step(S::ElectronNeutrino, T::PNuE, S::Proton),
        step(S::Positron, T::PEPlus, S::Proton),
        step(S::Antiproton, T::EMinusAntiP, S::Electron),
        step(S::Antineutron, T::AntiNNuE, S::ElectronNeutrino),
        step(S::ElectronAntineutrino, T::NAntiNuE, S::Neutron),
    ],
    // n
    [
        step(S::Proton, T::PN, S::Neutron),
        step(S::Electron, T::NEMinus, S::Neutron),
        step(S::ElectronNeutrino, T::PNuE, S::Proton),
        step(S::Positron, T::PEPlus, S::Proton),
        step(S::Antiproton, T::EMinusAntiP, S::Electron),
        step(S::Antineutron, T::AntiNNuE, S::ElectronNeutrino),
        step(S::ElectronAntineutrino, T::NAntiNuE, S::Neutron),
    ],
    // e_minus
    [
        step(S::Neutron, T::NEMinus, S::Electron),
        step(S::Proton, T::PN, S::Neutron),
        step(S::ElectronNeutrino, T::PNuE, S::Proton),
        step(S::Positron, T::PEPlus, S::Proton),
        step(S::Antiproton, T::EMinusAntiP, S::Electron),
        step(S::Antineutron, T::AntiNNuE, S::ElectronNeutrino),
        step(S::ElectronAntineutrino, T::NAntiNuE, S::Neutron),
    ],
    // nu_e
    [
        step(S::Proton, T::PNuE, S::ElectronNeutrino),
        step(S::Neutron, T::PN, S::Proton),
        step(S::Electron, T::NEMinus, S::Neutron),
        step(S::Positron, T::PEPlus, S::Proton),
        step(S::Antiproton, T::EMinusAntiP, S::Electron),
        step(S::Antineutron, T::AntiNNuE, S::ElectronNeutrino),
        step(S::ElectronAntineutrino, T::NAntiNuE, S::Neutron),
    ],
    // e_plus
    [
        step(S::Proton, T::PEPlus, S::Positron),
        step(S::Neutron, T::PN, S::Proton),
        step(S::Electron, T::NEMinus, S::Neutron),
        step(S::ElectronNeutrino, T::PNuE, S::Proton),
        step(S::Antiproton, T::EMinusAntiP, S::Electron),
        step(S::Antineutron, T::AntiNNuE, S::ElectronNeutrino),
        step(S::ElectronAntineutrino, T::NAntiNuE, S::Neutron),
    ],
    // anti_p
    [
        step(S::Electron, T::EMinusAntiP, S::Antiproton),
        step(S::Neutron, T::NEMinus, S::Electron),
        step(S::Proton, T::PN, S::Neutron),
        step(S::Positron, T::PEPlus, S::Proton),
        step(S::ElectronNeutrino, T::PNuE, S::Proton),
        step(S::Antineutron, T::AntiNNuE, S::ElectronNeutrino),
        step(S::ElectronAntineutrino, T::NAntiNuE, S::Neutron),
    ],
    // anti_n
    [
        step(S::ElectronNeutrino, T::AntiNNuE, S::Antineutron),
        step(S::Proton, T::PNuE, S::ElectronNeutrino),
        step(S::Neutron, T::PN, S::Proton),
        step(S::Electron, T::NEMinus, S::Neutron),
        step(S::Positron, T::PEPlus, S::Proton),
        step(S::Antiproton, T::EMinusAntiP, S::Electron),
        step(S::ElectronAntineutrino, T::NAntiNuE, S::Neutron),
    ],
    // anti_nu_e
    [
        step(S::Neutron, T::NAntiNuE, S::ElectronAntineutrino),
        step(S::Proton, T::PN, S::Neutron),
        step(S::ElectronNeutrino, T::PNuE, S::Proton),
        step(S::Electron, T::NEMinus, S::Neutron),
        step(S::Positron, T::PEPlus, S::Proton),
        step(S::Antiproton, T::EMinusAntiP, S::Electron),
        step(S::Antineutron, T::AntiNNuE, S::ElectronNeutrino),
    ],
];

const LEADING_BOUNDS: [[ConservedTotal; 3]; SPECIES_COUNT] = [
    [T::PN, T::PEPlus, T::PNuE],
    [T::PN, T::NEMinus, T::NAntiNuE],
    [T::NEMinus, T::EMinusAntiP, T::EMinusNuE],
    [T::PNuE, T::EMinusNuE, T::AntiNNuE],
    [T::PEPlus, T::EPlusAntiN, T::EPlusAntiNuE],
    [T::EMinusAntiP, T::AntiPAntiN, T::AntiPAntiNuE],
    [T::EPlusAntiN, T::AntiPAntiN, T::AntiNNuE],
    [T::NAntiNuE, T::EPlusAntiNuE, T::AntiPAntiNuE],
];

/// Ordered substitution steps when `leading` is the free variable.
pub fn chain_for(leading: Species) -> &'static [SubstitutionStep; CHAIN_LEN] {
    &CHAINS[leading.index()]
}

/// The three totals whose maximum bounds the leading value of `leading`.
pub fn bounding_totals(leading: Species) -> [ConservedTotal; 3] {
    LEADING_BOUNDS[leading.index()]
}

/// Raw signed vector produced by one chain run.
///
/// Slots may be negative: the chain resolves each particle/antiparticle pair
/// to a net value and writes its negation into the partner slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainSolution {
    pub leading: Species,
    pub leading_value: i64,
    values: Signature,
}

impl ChainSolution {
    pub fn get(&self, species: Species) -> i64 {
        self.values[species.index()]
    }

    pub fn values(&self) -> Signature {
        self.values
    }

    pub fn has_negative_slot(&self) -> bool {
        self.values.iter().any(|value| *value < 0)
    }

    /// Folds each pair's net value onto the particle or antiparticle side.
    ///
    /// Returns `None` when a pair is not mirrored.
    pub fn fold(&self) -> Option<ParticleState> {
        let mut state = ParticleState::new();
        for particle in Species::PARTICLES {
            let partner = particle.antiparticle();
            let net = self.get(particle);
            if self.get(partner) != net.checked_neg()? {
                return None;
            }
            if net > 0 {
                state.set(particle, net);
            } else if net < 0 {
                state.set(partner, net.checked_neg()?);
            }
        }
        Some(state)
    }
}

/// Runs the chain for `leading = value`.
///
/// Returns `None` when any step overflows.
pub fn run_chain(totals: &ConservedTotals, leading: Species, value: i64) -> Option<ChainSolution> {
    let mut values: Signature = [0; SPECIES_COUNT];
    values[leading.index()] = value;
    for step in chain_for(leading) {
        values[step.target.index()] = totals
            .get(step.total)
            .checked_sub(values[step.source.index()])?;
    }
    Some(ChainSolution {
        leading,
        leading_value: value,
        values,
    })
}
