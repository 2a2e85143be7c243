//! Species catalog.
//!
//! # Responsibility
//! - Define the fixed set of eight species the solver works over.
//! - Own per-species physical constants (rest mass, quantum numbers).
//!
//! # Invariants
//! - `Species::ALL` order is the canonical signature order and never changes.
//! - Every species has exactly one antiparticle partner, and the pairing is
//!   an involution.
//! - The photon is reserved: it has a symbol and a mass but is not a
//!   `Species` and is never produced.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of species tracked by particle states.
pub const SPECIES_COUNT: usize = 8;

/// Reserved photon symbol. Parsed only to reject it with a precise error.
pub const PHOTON_SYMBOL: &str = "gamma";
/// Photon rest mass in MeV.
pub const PHOTON_REST_MASS_MEV: f64 = 0.0;

/// One of the eight supported particle species.
///
/// Declaration order is the canonical signature order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    #[serde(rename = "p")]
    Proton,
    #[serde(rename = "n")]
    Neutron,
    #[serde(rename = "e_minus")]
    Electron,
    #[serde(rename = "nu_e")]
    ElectronNeutrino,
    #[serde(rename = "e_plus")]
    Positron,
    #[serde(rename = "anti_p")]
    Antiproton,
    #[serde(rename = "anti_n")]
    Antineutron,
    #[serde(rename = "anti_nu_e")]
    ElectronAntineutrino,
}

impl Species {
    /// All species in canonical signature order.
    pub const ALL: [Species; SPECIES_COUNT] = [
        Species::Proton,
        Species::Neutron,
        Species::Electron,
        Species::ElectronNeutrino,
        Species::Positron,
        Species::Antiproton,
        Species::Antineutron,
        Species::ElectronAntineutrino,
    ];

    /// The four particles whose partners are the four antiparticles.
    pub const PARTICLES: [Species; 4] = [
        Species::Proton,
        Species::Neutron,
        Species::Electron,
        Species::ElectronNeutrino,
    ];

    /// Position of this species in signature order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case symbol used on the wire and in ASCII output.
    pub const fn symbol(self) -> &'static str {
        match self {
            Species::Proton => "p",
            Species::Neutron => "n",
            Species::Electron => "e_minus",
            Species::ElectronNeutrino => "nu_e",
            Species::Positron => "e_plus",
            Species::Antiproton => "anti_p",
            Species::Antineutron => "anti_n",
            Species::ElectronAntineutrino => "anti_nu_e",
        }
    }

    /// Unicode symbol for human-facing output.
    pub const fn display_symbol(self) -> &'static str {
        match self {
            Species::Proton => "p",
            Species::Neutron => "n",
            Species::Electron => "e⁻",
            Species::ElectronNeutrino => "νₑ",
            Species::Positron => "e⁺",
            Species::Antiproton => "p̄",
            Species::Antineutron => "n̄",
            Species::ElectronAntineutrino => "ν̄ₑ",
        }
    }

    /// Long-form label, e.g. for a checkbox caption.
    pub const fn label(self) -> &'static str {
        match self {
            Species::Proton => "Proton",
            Species::Neutron => "Neutron",
            Species::Electron => "Electron",
            Species::ElectronNeutrino => "Electron neutrino",
            Species::Positron => "Positron",
            Species::Antiproton => "Antiproton",
            Species::Antineutron => "Antineutron",
            Species::ElectronAntineutrino => "Electron antineutrino",
        }
    }

    /// Rest mass in MeV.
    pub const fn rest_mass_mev(self) -> f64 {
        match self {
            Species::Proton | Species::Antiproton => 938.272,
            Species::Neutron | Species::Antineutron => 939.565,
            Species::Electron | Species::Positron => 0.511,
            Species::ElectronNeutrino | Species::ElectronAntineutrino => 0.0000022,
        }
    }

    pub const fn baryon_number(self) -> i64 {
        match self {
            Species::Proton | Species::Neutron => 1,
            Species::Antiproton | Species::Antineutron => -1,
            _ => 0,
        }
    }

    /// Electron-flavour lepton number.
    pub const fn lepton_number(self) -> i64 {
        match self {
            Species::Electron | Species::ElectronNeutrino => 1,
            Species::Positron | Species::ElectronAntineutrino => -1,
            _ => 0,
        }
    }

    /// Electric charge in units of the elementary charge.
    pub const fn charge(self) -> i64 {
        match self {
            Species::Proton | Species::Positron => 1,
            Species::Electron | Species::Antiproton => -1,
            _ => 0,
        }
    }

    pub const fn antiparticle(self) -> Species {
        match self {
            Species::Proton => Species::Antiproton,
            Species::Neutron => Species::Antineutron,
            Species::Electron => Species::Positron,
            Species::ElectronNeutrino => Species::ElectronAntineutrino,
            Species::Positron => Species::Electron,
            Species::Antiproton => Species::Proton,
            Species::Antineutron => Species::Neutron,
            Species::ElectronAntineutrino => Species::ElectronNeutrino,
        }
    }

    /// Returns whether this species is the antimatter side of its pair.
    ///
    /// The positron counts as the antiparticle of the electron.
    pub const fn is_antiparticle(self) -> bool {
        matches!(
            self,
            Species::Positron
                | Species::Antiproton
                | Species::Antineutron
                | Species::ElectronAntineutrino
        )
    }

    /// Resolves a snake_case symbol.
    pub fn from_symbol(symbol: &str) -> Result<Self, SpeciesError> {
        let trimmed = symbol.trim();
        if trimmed == PHOTON_SYMBOL {
            return Err(SpeciesError::Reserved(trimmed.to_string()));
        }
        Species::ALL
            .into_iter()
            .find(|species| species.symbol() == trimmed)
            .ok_or_else(|| SpeciesError::Unknown(trimmed.to_string()))
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Species {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

/// Symbol lookup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeciesError {
    /// Symbol is not part of the catalog.
    Unknown(String),
    /// Symbol is known but reserved and cannot take part in reactions.
    Reserved(String),
}

impl Display for SpeciesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(symbol) => write!(
                f,
                "unknown species `{symbol}`; expected p|n|e_minus|nu_e|e_plus|anti_p|anti_n|anti_nu_e"
            ),
            Self::Reserved(symbol) => {
                write!(f, "species `{symbol}` is reserved and cannot be used as input")
            }
        }
    }
}

impl Error for SpeciesError {}
