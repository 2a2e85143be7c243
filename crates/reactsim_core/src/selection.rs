//! Per-species selection board kept by presentation layers.
//!
//! # Responsibility
//! - Remember which species are toggled on and their counts between renders.
//! - Turn the board into an input state, distinguishing "nothing selected"
//!   from "computed".
//!
//! # Invariants
//! - Defaults are unchecked with count 1; `reset` restores them for all
//!   species at once.
//! - Counts are always within `1..=SELECTION_COUNT_MAX`; disabled species
//!   keep their count but are excluded from the input state.

use crate::enumerator::{enumerate_reactions, Reaction};
use crate::model::species::{Species, SPECIES_COUNT};
use crate::model::state::ParticleState;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Count assigned to a species that has never been edited.
pub const DEFAULT_SELECTION_COUNT: u32 = 1;

/// Largest count accepted for one species.
///
/// Enumeration work grows linearly with the counts, so front ends must stop
/// larger inputs before they reach the enumerator.
pub const SELECTION_COUNT_MAX: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    ZeroCount(Species),
    CountTooLarge { species: Species, count: i64 },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCount(species) => write!(f, "count for `{species}` must be >= 1"),
            Self::CountTooLarge { species, count } => write!(
                f,
                "count {count} for `{species}` exceeds the maximum of {SELECTION_COUNT_MAX}"
            ),
        }
    }
}

impl Error for SelectionError {}

/// Toggle and count for one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEntry {
    pub enabled: bool,
    pub count: u32,
}

impl Default for SelectionEntry {
    fn default() -> Self {
        Self {
            enabled: false,
            count: DEFAULT_SELECTION_COUNT,
        }
    }
}

/// Selection state for all eight species.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionBoard {
    entries: [SelectionEntry; SPECIES_COUNT],
}

impl SelectionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, species: Species) -> SelectionEntry {
        self.entries[species.index()]
    }

    pub fn set_enabled(&mut self, species: Species, enabled: bool) {
        self.entries[species.index()].enabled = enabled;
    }

    /// Builds a board with every species present in `state` selected.
    pub fn from_state(state: &ParticleState) -> Result<Self, SelectionError> {
        let mut board = Self::new();
        for (species, count) in state.present() {
            let count = u32::try_from(count)
                .map_err(|_| SelectionError::CountTooLarge { species, count })?;
            board.select(species, count)?;
        }
        Ok(board)
    }

    /// Sets the count for `species`, rejecting zero and counts above
    /// [`SELECTION_COUNT_MAX`].
    pub fn set_count(&mut self, species: Species, count: u32) -> Result<(), SelectionError> {
        if count == 0 {
            return Err(SelectionError::ZeroCount(species));
        }
        if count > SELECTION_COUNT_MAX {
            return Err(SelectionError::CountTooLarge {
                species,
                count: i64::from(count),
            });
        }
        self.entries[species.index()].count = count;
        Ok(())
    }

    /// Enables `species` with `count` in one step.
    pub fn select(&mut self, species: Species, count: u32) -> Result<(), SelectionError> {
        self.set_count(species, count)?;
        self.set_enabled(species, true);
        Ok(())
    }

    /// Restores every species to its default entry.
    pub fn reset(&mut self) {
        self.entries = [SelectionEntry::default(); SPECIES_COUNT];
    }

    pub fn has_selection(&self) -> bool {
        self.entries.iter().any(|entry| entry.enabled)
    }

    /// Builds the input state from enabled species.
    ///
    /// Returns `None` when no species is enabled.
    pub fn to_input_state(&self) -> Option<ParticleState> {
        if !self.has_selection() {
            return None;
        }
        let state = Species::ALL
            .into_iter()
            .filter(|species| self.entry(*species).enabled)
            .fold(ParticleState::new(), |state, species| {
                state.with(species, i64::from(self.entry(species).count))
            });
        Some(state)
    }
}

/// Result of evaluating a selection board.
#[derive(Debug, Clone, PartialEq)]
pub enum ReactionOutcome {
    /// Nothing is toggled on; the enumerator was not invoked.
    NoSelection,
    Computed {
        input: ParticleState,
        reactions: Vec<Reaction>,
    },
}

/// Enumerates reactions for the board, bypassing the enumerator when empty.
pub fn evaluate_selection(board: &SelectionBoard) -> ReactionOutcome {
    match board.to_input_state() {
        None => ReactionOutcome::NoSelection,
        Some(input) => {
            let reactions = enumerate_reactions(&input);
            ReactionOutcome::Computed { input, reactions }
        }
    }
}
