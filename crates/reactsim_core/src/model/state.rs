//! Particle multiplicity state.
//!
//! # Responsibility
//! - Hold one signed count per species in canonical order.
//! - Build validated input states from symbol/count pairs or term text.
//!
//! # Invariants
//! - Input states built through the fallible constructors are non-negative.
//! - `signature()` is the exact deduplication key for reaction products.
//! - Serialized form omits zero counts and rejects negative ones.

use crate::model::species::{Species, SpeciesError, SPECIES_COUNT};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static TERM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)?\s*([a-z_]+)$").expect("valid term regex"));

/// Fixed-order count vector used as a deduplication key.
pub type Signature = [i64; SPECIES_COUNT];

/// Result type for state construction.
pub type StateResult<T> = Result<T, StateError>;

/// State construction/validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    Species(SpeciesError),
    NegativeCount { species: Species, count: i64 },
    MalformedTerm(String),
    CountOverflow(Species),
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Species(err) => write!(f, "{err}"),
            Self::NegativeCount { species, count } => {
                write!(f, "count for `{species}` must be >= 0, got {count}")
            }
            Self::MalformedTerm(term) => {
                write!(f, "malformed term `{term}`; expected `[count]symbol`")
            }
            Self::CountOverflow(species) => write!(f, "count for `{species}` overflows"),
        }
    }
}

impl Error for StateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Species(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpeciesError> for StateError {
    fn from(value: SpeciesError) -> Self {
        Self::Species(value)
    }
}

/// Count per species for one side of a reaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<Species, i64>",
    try_from = "BTreeMap<Species, i64>"
)]
pub struct ParticleState {
    counts: Signature,
}

impl ParticleState {
    /// Creates an all-zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a raw count vector in canonical order without validation.
    pub const fn from_signature(counts: Signature) -> Self {
        Self { counts }
    }

    /// Returns a copy with `species` set to `count`.
    pub fn with(mut self, species: Species, count: i64) -> Self {
        self.set(species, count);
        self
    }

    /// Builds an input state from `(symbol, count)` pairs.
    ///
    /// Repeated symbols accumulate.
    ///
    /// # Errors
    /// - Unknown or reserved symbols.
    /// - Negative counts.
    /// - Accumulated counts that overflow `i64`.
    pub fn from_symbol_counts<'a, I>(entries: I) -> StateResult<Self>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut state = Self::new();
        for (symbol, count) in entries {
            let species = Species::from_symbol(symbol)?;
            state.accumulate(species, count)?;
        }
        Ok(state)
    }

    /// Parses a term list such as `2n + e_minus`.
    ///
    /// Blank input yields the empty state.
    pub fn parse_terms(text: &str) -> StateResult<Self> {
        let mut state = Self::new();
        if text.trim().is_empty() {
            return Ok(state);
        }

        for raw_term in text.split('+') {
            let term = raw_term.trim();
            let captures = TERM_RE
                .captures(term)
                .ok_or_else(|| StateError::MalformedTerm(term.to_string()))?;
            let species = Species::from_symbol(&captures[2])?;
            let count = match captures.get(1) {
                Some(digits) => digits
                    .as_str()
                    .parse::<i64>()
                    .map_err(|_| StateError::CountOverflow(species))?,
                None => 1,
            };
            state.accumulate(species, count)?;
        }
        Ok(state)
    }

    pub fn get(&self, species: Species) -> i64 {
        self.counts[species.index()]
    }

    pub fn set(&mut self, species: Species, count: i64) {
        self.counts[species.index()] = count;
    }

    /// Exact deduplication key.
    pub fn signature(&self) -> Signature {
        self.counts
    }

    /// Iterates all eight `(species, count)` entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Species, i64)> + '_ {
        Species::ALL
            .into_iter()
            .map(move |species| (species, self.get(species)))
    }

    /// Iterates entries with a positive count, in canonical order.
    pub fn present(&self) -> impl Iterator<Item = (Species, i64)> + '_ {
        self.iter().filter(|(_, count)| *count > 0)
    }

    /// Returns whether every count is zero.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    pub fn has_negative(&self) -> bool {
        self.counts.iter().any(|count| *count < 0)
    }

    /// Checks that no count is negative.
    pub fn validate(&self) -> StateResult<()> {
        match self.iter().find(|(_, count)| *count < 0) {
            Some((species, count)) => Err(StateError::NegativeCount { species, count }),
            None => Ok(()),
        }
    }

    /// Net baryon number, `None` on overflow.
    pub fn baryon_number(&self) -> Option<i64> {
        self.weighted_sum(Species::baryon_number)
    }

    /// Net electron-flavour lepton number, `None` on overflow.
    pub fn lepton_number(&self) -> Option<i64> {
        self.weighted_sum(Species::lepton_number)
    }

    /// Net electric charge, `None` on overflow.
    pub fn charge(&self) -> Option<i64> {
        self.weighted_sum(Species::charge)
    }

    fn weighted_sum(&self, weight: fn(Species) -> i64) -> Option<i64> {
        self.iter().try_fold(0_i64, |acc, (species, count)| {
            acc.checked_add(weight(species).checked_mul(count)?)
        })
    }

    fn accumulate(&mut self, species: Species, count: i64) -> StateResult<()> {
        if count < 0 {
            return Err(StateError::NegativeCount { species, count });
        }
        let next = self
            .get(species)
            .checked_add(count)
            .ok_or(StateError::CountOverflow(species))?;
        self.set(species, next);
        Ok(())
    }
}

impl From<ParticleState> for BTreeMap<Species, i64> {
    fn from(value: ParticleState) -> Self {
        value.iter().filter(|(_, count)| *count != 0).collect()
    }
}

impl TryFrom<BTreeMap<Species, i64>> for ParticleState {
    type Error = StateError;

    fn try_from(value: BTreeMap<Species, i64>) -> Result<Self, Self::Error> {
        let mut state = Self::new();
        for (species, count) in value {
            state.set(species, count);
        }
        state.validate()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::{ParticleState, StateError};
    use crate::model::species::{Species, SpeciesError};

    #[test]
    fn parse_terms_reads_coefficients_and_accumulates() {
        let state = ParticleState::parse_terms("2n + e_minus + n").expect("valid terms");
        assert_eq!(state.get(Species::Neutron), 3);
        assert_eq!(state.get(Species::Electron), 1);
        assert_eq!(state.get(Species::Proton), 0);
    }

    #[test]
    fn parse_terms_accepts_blank_input() {
        let state = ParticleState::parse_terms("   ").expect("blank is empty");
        assert!(state.is_empty());
    }

    #[test]
    fn parse_terms_rejects_dangling_plus() {
        let err = ParticleState::parse_terms("p + ").unwrap_err();
        assert_eq!(err, StateError::MalformedTerm(String::new()));
    }

    #[test]
    fn parse_terms_rejects_photon() {
        let err = ParticleState::parse_terms("gamma").unwrap_err();
        assert_eq!(
            err,
            StateError::Species(SpeciesError::Reserved("gamma".to_string()))
        );
    }

    #[test]
    fn from_symbol_counts_rejects_negative_counts() {
        let err = ParticleState::from_symbol_counts([("p", 1), ("nu_e", -2)]).unwrap_err();
        assert_eq!(
            err,
            StateError::NegativeCount {
                species: Species::ElectronNeutrino,
                count: -2,
            }
        );
    }

    #[test]
    fn accumulate_reports_overflow() {
        let err = ParticleState::from_symbol_counts([("p", i64::MAX), ("p", 1)]).unwrap_err();
        assert_eq!(err, StateError::CountOverflow(Species::Proton));
    }

    #[test]
    fn quantum_numbers_sum_over_counts() {
        let state = ParticleState::new()
            .with(Species::Proton, 2)
            .with(Species::Electron, 1)
            .with(Species::ElectronAntineutrino, 3);
        assert_eq!(state.baryon_number(), Some(2));
        assert_eq!(state.lepton_number(), Some(-2));
        assert_eq!(state.charge(), Some(1));
    }
}
