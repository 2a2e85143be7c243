//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI via FRB.
//! - Translate core errors into response envelopes instead of panics.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - "Nothing selected" and "computed with no reactions" have distinct
//!   statuses.

use log::{info, warn};
use reactsim_core::{
    core_version as core_version_inner, enumerate_reactions, format_reaction, format_terms,
    init_logging as init_logging_inner, ping as ping_inner, ParticleState, Reaction,
    RenderStyle, SelectionBoard, Species,
};

const REACTION_DEFAULT_LIMIT: u32 = 50;
const REACTION_LIMIT_MAX: u32 = 500;

const STATUS_OK: &str = "ok";
const STATUS_NO_SELECTION: &str = "no_selection";
const STATUS_INVALID_INPUT: &str = "invalid_input";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Static description of one selectable species.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesInfo {
    /// Stable snake_case symbol used in requests.
    pub symbol: String,
    pub label: String,
    pub display_symbol: String,
    pub rest_mass_mev: f64,
    /// Symbol of the antiparticle partner, for paired layouts.
    pub partner_symbol: String,
}

/// One checkbox + count control value sent by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesSelection {
    pub symbol: String,
    pub enabled: bool,
    pub count: u32,
}

/// One ranked reaction prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionItem {
    /// Unicode equation with the energy term on the receiving side.
    pub equation: String,
    pub energy_delta_mev: f64,
    pub exothermic: bool,
    /// ASCII product term list (parseable).
    pub products: String,
}

/// Response envelope for reaction computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionResponse {
    /// `ok`, `no_selection` or `invalid_input`.
    pub status: String,
    pub items: Vec<ReactionItem>,
    /// Number of reactions before the limit was applied.
    pub total: u32,
    pub applied_limit: u32,
    /// Human-readable summary for display.
    pub message: String,
}

impl ReactionResponse {
    fn without_items(status: &str, message: impl Into<String>, applied_limit: u32) -> Self {
        Self {
            status: status.to_string(),
            items: Vec::new(),
            total: 0,
            applied_limit,
            message: message.into(),
        }
    }
}

/// Lists every selectable species in canonical order.
#[flutter_rust_bridge::frb(sync)]
pub fn species_catalog() -> Vec<SpeciesInfo> {
    Species::ALL
        .into_iter()
        .map(|species| SpeciesInfo {
            symbol: species.symbol().to_string(),
            label: species.label().to_string(),
            display_symbol: species.display_symbol().to_string(),
            rest_mass_mev: species.rest_mass_mev(),
            partner_symbol: species.antiparticle().symbol().to_string(),
        })
        .collect()
}

/// Computes ranked reactions for the UI's current selection.
///
/// # FFI contract
/// - Sync call; pure computation, no I/O.
/// - Never panics.
/// - Disabled entries are ignored; an all-disabled selection returns
///   `no_selection` without running the enumerator.
/// - Enabled counts above `SELECTION_COUNT_MAX` return `invalid_input`
///   without running the enumerator.
#[flutter_rust_bridge::frb(sync)]
pub fn compute_reactions(selection: Vec<SpeciesSelection>, limit: Option<u32>) -> ReactionResponse {
    let applied_limit = normalize_reaction_limit(limit);
    let board = match build_board(&selection) {
        Ok(board) => board,
        Err(message) => {
            warn!("event=compute_reactions module=ffi status=error reason=invalid_input");
            return ReactionResponse::without_items(STATUS_INVALID_INPUT, message, applied_limit);
        }
    };

    let Some(input) = board.to_input_state() else {
        return ReactionResponse::without_items(
            STATUS_NO_SELECTION,
            "No particles selected.",
            applied_limit,
        );
    };

    let reactions = enumerate_reactions(&input);
    let total = u32::try_from(reactions.len()).unwrap_or(u32::MAX);
    let items = reactions
        .iter()
        .take(applied_limit as usize)
        .map(|reaction| to_reaction_item(&input, reaction))
        .collect::<Vec<_>>();
    info!(
        "event=compute_reactions module=ffi status=ok total={} returned={}",
        total,
        items.len()
    );

    ReactionResponse {
        status: STATUS_OK.to_string(),
        items,
        total,
        applied_limit,
        message: format!("{total} reactions calculated"),
    }
}

fn build_board(selection: &[SpeciesSelection]) -> Result<SelectionBoard, String> {
    let mut board = SelectionBoard::new();
    for entry in selection {
        let species = Species::from_symbol(&entry.symbol).map_err(|err| err.to_string())?;
        if entry.enabled {
            board
                .select(species, entry.count)
                .map_err(|err| err.to_string())?;
        }
    }
    Ok(board)
}

fn normalize_reaction_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) | None => REACTION_DEFAULT_LIMIT,
        Some(value) if value > REACTION_LIMIT_MAX => REACTION_LIMIT_MAX,
        Some(value) => value,
    }
}

fn to_reaction_item(input: &ParticleState, reaction: &Reaction) -> ReactionItem {
    ReactionItem {
        equation: format_reaction(input, reaction, RenderStyle::Unicode),
        energy_delta_mev: reaction.energy_delta_mev,
        exothermic: reaction.is_exothermic(),
        products: format_terms(&reaction.products, RenderStyle::Ascii),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        compute_reactions, core_version, init_logging, ping, species_catalog, SpeciesSelection,
    };
    use reactsim_core::SELECTION_COUNT_MAX;

    fn selected(symbol: &str, count: u32) -> SpeciesSelection {
        SpeciesSelection {
            symbol: symbol.to_string(),
            enabled: true,
            count,
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/reactsim-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn species_catalog_pairs_every_species_with_its_partner() {
        let catalog = species_catalog();
        assert_eq!(catalog.len(), 8);
        for info in &catalog {
            let partner = catalog
                .iter()
                .find(|other| other.symbol == info.partner_symbol)
                .expect("partner is listed");
            assert_eq!(partner.partner_symbol, info.symbol);
            assert_eq!(partner.rest_mass_mev, info.rest_mass_mev);
        }
    }

    #[test]
    fn empty_and_disabled_selections_report_no_selection() {
        let empty = compute_reactions(Vec::new(), None);
        assert_eq!(empty.status, "no_selection");
        assert!(empty.items.is_empty());

        let mut disabled = selected("p", 2);
        disabled.enabled = false;
        let response = compute_reactions(vec![disabled], None);
        assert_eq!(response.status, "no_selection");
        assert_eq!(response.message, "No particles selected.");
    }

    #[test]
    fn neutron_selection_returns_beta_decay_first() {
        let response = compute_reactions(vec![selected("n", 1)], None);
        assert_eq!(response.status, "ok");
        assert_eq!(response.total, 2);
        assert_eq!(response.applied_limit, 50);

        let first = &response.items[0];
        assert_eq!(first.products, "p + e_minus + anti_nu_e");
        assert_eq!(first.equation, "n → p + e⁻ + ν̄ₑ + 0.782 MeV");
        assert!(first.exothermic);
    }

    #[test]
    fn limit_is_capped_and_truncates_items() {
        let response = compute_reactions(vec![selected("n", 2)], Some(1));
        assert_eq!(response.total, 3);
        assert_eq!(response.items.len(), 1);

        let capped = compute_reactions(vec![selected("n", 1)], Some(10_000));
        assert_eq!(capped.applied_limit, 500);
    }

    #[test]
    fn invalid_symbols_and_zero_counts_are_rejected() {
        let unknown = compute_reactions(vec![selected("muon", 1)], None);
        assert_eq!(unknown.status, "invalid_input");
        assert!(unknown.message.contains("muon"));

        let zero = compute_reactions(vec![selected("p", 0)], None);
        assert_eq!(zero.status, "invalid_input");

        let photon = compute_reactions(vec![selected("gamma", 1)], None);
        assert!(photon.message.contains("reserved"));
    }

    #[test]
    fn counts_above_the_cap_are_rejected_before_enumeration() {
        let at_cap = compute_reactions(vec![selected("e_minus", SELECTION_COUNT_MAX)], Some(1));
        assert_eq!(at_cap.status, "ok");

        let response = compute_reactions(vec![selected("p", u32::MAX)], None);
        assert_eq!(response.status, "invalid_input");
        assert_eq!(response.total, 0);
        assert!(response.items.is_empty());
        assert!(response.message.contains("exceeds the maximum"));

        let mut disabled = selected("n", u32::MAX);
        disabled.enabled = false;
        let ignored = compute_reactions(vec![disabled], None);
        assert_eq!(ignored.status, "no_selection");
    }
}
