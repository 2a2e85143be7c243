//! Plain-text rendering of states and reactions.
//!
//! # Invariants
//! - Species with a count <= 0 are never printed.
//! - A coefficient of 1 is omitted.
//! - The energy term sits on the side that receives the energy: after the
//!   products when the reaction releases energy, after the inputs otherwise.
//! - ASCII output of a state parses back with `ParticleState::parse_terms`.

use crate::enumerator::Reaction;
use crate::model::species::Species;
use crate::model::state::ParticleState;

/// Symbol set used for output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Snake_case symbols and `->`.
    Ascii,
    /// Particle-physics symbols and `→`.
    #[default]
    Unicode,
}

impl RenderStyle {
    fn symbol(self, species: Species) -> &'static str {
        match self {
            RenderStyle::Ascii => species.symbol(),
            RenderStyle::Unicode => species.display_symbol(),
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            RenderStyle::Ascii => "->",
            RenderStyle::Unicode => "→",
        }
    }
}

/// Formats a state as `2n + e_minus`; empty when nothing is present.
pub fn format_terms(state: &ParticleState, style: RenderStyle) -> String {
    state
        .present()
        .map(|(species, count)| {
            let symbol = style.symbol(species);
            if count == 1 {
                symbol.to_string()
            } else {
                format!("{count}{symbol}")
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Formats one reaction as an equation annotated with `|delta| MeV`.
pub fn format_reaction(input: &ParticleState, reaction: &Reaction, style: RenderStyle) -> String {
    let lhs = format_terms(input, style);
    let rhs = format_terms(&reaction.products, style);
    let energy = format!("{:.3} MeV", reaction.energy_magnitude_mev());

    if reaction.energy_delta_mev >= 0.0 {
        format!("{lhs} {} {}", style.arrow(), with_energy(&rhs, &energy))
    } else {
        format!("{} {} {rhs}", with_energy(&lhs, &energy), style.arrow())
            .trim_end()
            .to_string()
    }
}

fn with_energy(side: &str, energy: &str) -> String {
    if side.is_empty() {
        energy.to_string()
    } else {
        format!("{side} + {energy}")
    }
}
