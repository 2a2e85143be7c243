//! Pairwise conserved totals.
//!
//! # Responsibility
//! - Name the twelve conserved combinations and their species terms.
//! - Evaluate all twelve over a particle state with overflow checks.
//!
//! # Invariants
//! - Each total is `(plus[0] + plus[1]) - (minus[0] + minus[1])`.
//! - Each total is a linear combination of baryon number, lepton number and
//!   charge, so equal B/L/Q implies equal totals.

use crate::model::species::Species;
use crate::model::state::ParticleState;

/// Number of pairwise conserved totals.
pub const TOTAL_COUNT: usize = 12;

/// One named pairwise conserved combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConservedTotal {
    PN,
    PEPlus,
    PNuE,
    NEMinus,
    NAntiNuE,
    EMinusAntiP,
    EMinusNuE,
    EPlusAntiN,
    EPlusAntiNuE,
    AntiPAntiN,
    AntiPAntiNuE,
    AntiNNuE,
}

impl ConservedTotal {
    pub const ALL: [ConservedTotal; TOTAL_COUNT] = [
        ConservedTotal::PN,
        ConservedTotal::PEPlus,
        ConservedTotal::PNuE,
        ConservedTotal::NEMinus,
        ConservedTotal::NAntiNuE,
        ConservedTotal::EMinusAntiP,
        ConservedTotal::EMinusNuE,
        ConservedTotal::EPlusAntiN,
        ConservedTotal::EPlusAntiNuE,
        ConservedTotal::AntiPAntiN,
        ConservedTotal::AntiPAntiNuE,
        ConservedTotal::AntiNNuE,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name built from the two species the total couples.
    pub const fn name(self) -> &'static str {
        match self {
            ConservedTotal::PN => "p_n",
            ConservedTotal::PEPlus => "p_e_plus",
            ConservedTotal::PNuE => "p_nu_e",
            ConservedTotal::NEMinus => "n_e_minus",
            ConservedTotal::NAntiNuE => "n_anti_nu_e",
            ConservedTotal::EMinusAntiP => "e_minus_anti_p",
            ConservedTotal::EMinusNuE => "e_minus_nu_e",
            ConservedTotal::EPlusAntiN => "e_plus_anti_n",
            ConservedTotal::EPlusAntiNuE => "e_plus_anti_nu_e",
            ConservedTotal::AntiPAntiN => "anti_p_anti_n",
            ConservedTotal::AntiPAntiNuE => "anti_p_anti_nu_e",
            ConservedTotal::AntiNNuE => "anti_n_nu_e",
        }
    }

    /// Species added into the total.
    pub const fn plus(self) -> [Species; 2] {
        use Species::*;
        match self {
            ConservedTotal::PN => [Proton, Neutron],
            ConservedTotal::PEPlus => [Proton, Positron],
            ConservedTotal::PNuE => [Proton, ElectronNeutrino],
            ConservedTotal::NEMinus => [Neutron, Electron],
            ConservedTotal::NAntiNuE => [Neutron, ElectronAntineutrino],
            ConservedTotal::EMinusAntiP => [Electron, Antiproton],
            ConservedTotal::EMinusNuE => [Electron, ElectronNeutrino],
            ConservedTotal::EPlusAntiN => [Positron, Antineutron],
            ConservedTotal::EPlusAntiNuE => [Positron, ElectronAntineutrino],
            ConservedTotal::AntiPAntiN => [Antiproton, Antineutron],
            ConservedTotal::AntiPAntiNuE => [Antiproton, ElectronAntineutrino],
            ConservedTotal::AntiNNuE => [Antineutron, ElectronNeutrino],
        }
    }

    /// Species subtracted from the total.
    pub const fn minus(self) -> [Species; 2] {
        use Species::*;
        match self {
            ConservedTotal::PN => [Antiproton, Antineutron],
            ConservedTotal::PEPlus => [Electron, Antiproton],
            ConservedTotal::PNuE => [Antiproton, ElectronAntineutrino],
            ConservedTotal::NEMinus => [Positron, Antineutron],
            ConservedTotal::NAntiNuE => [ElectronNeutrino, Antineutron],
            ConservedTotal::EMinusAntiP => [Proton, Positron],
            ConservedTotal::EMinusNuE => [Positron, ElectronAntineutrino],
            ConservedTotal::EPlusAntiN => [Electron, Neutron],
            ConservedTotal::EPlusAntiNuE => [Electron, ElectronNeutrino],
            ConservedTotal::AntiPAntiN => [Proton, Neutron],
            ConservedTotal::AntiPAntiNuE => [Proton, ElectronNeutrino],
            ConservedTotal::AntiNNuE => [Neutron, ElectronAntineutrino],
        }
    }

    /// Evaluates this total over `state`, `None` on overflow.
    pub fn evaluate(self, state: &ParticleState) -> Option<i64> {
        let [a, b] = self.plus();
        let [c, d] = self.minus();
        let plus = state.get(a).checked_add(state.get(b))?;
        let minus = state.get(c).checked_add(state.get(d))?;
        plus.checked_sub(minus)
    }
}

/// The twelve totals of one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConservedTotals {
    values: [i64; TOTAL_COUNT],
}

impl ConservedTotals {
    /// Computes all totals, `None` when any of them overflows.
    pub fn compute(state: &ParticleState) -> Option<Self> {
        let mut values = [0_i64; TOTAL_COUNT];
        for total in ConservedTotal::ALL {
            values[total.index()] = total.evaluate(state)?;
        }
        Some(Self { values })
    }

    pub fn get(&self, total: ConservedTotal) -> i64 {
        self.values[total.index()]
    }

    /// Iterates `(total, value)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ConservedTotal, i64)> + '_ {
        ConservedTotal::ALL
            .into_iter()
            .map(move |total| (total, self.get(total)))
    }
}
