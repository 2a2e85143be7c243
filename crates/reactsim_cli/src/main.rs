//! Command-line front end for reaction enumeration.
//!
//! # Responsibility
//! - Parse a term list such as `2n + e_minus` into an input state.
//! - Print the ranked reactions as text or JSON.

use clap::{ArgAction, Parser};
use log::debug;
use reactsim_core::{
    default_log_level, enumerate_reactions, format_reaction, init_logging, ParticleState,
    RenderStyle, SelectionBoard,
};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "reactsim",
    version,
    about = "Enumerate particle reactions that conserve baryon number, lepton number and charge"
)]
struct Cli {
    /// Input particles, e.g. `2n + e_minus` (symbols: p n e_minus nu_e e_plus anti_p anti_n anti_nu_e)
    terms: Vec<String>,

    /// Show at most this many reactions
    #[arg(long)]
    limit: Option<usize>,

    /// Print reactions as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Use ASCII symbols instead of Unicode
    #[arg(long, action = ArgAction::SetTrue)]
    ascii: bool,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("reactsim: {err}");
            return ExitCode::from(2);
        }
    }

    let input = match read_input(&cli.terms) {
        Ok(Some(input)) => input,
        Ok(None) => {
            println!("No particles selected.");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("reactsim: {err}");
            return ExitCode::from(2);
        }
    };

    let mut reactions = enumerate_reactions(&input);
    let total = reactions.len();
    if let Some(limit) = cli.limit {
        reactions.truncate(limit);
    }
    debug!(
        "event=cli_run module=cli status=ok total={} shown={}",
        total,
        reactions.len()
    );

    if cli.json {
        return match serde_json::to_string_pretty(&reactions) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("reactsim: failed to encode reactions: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let style = if cli.ascii {
        RenderStyle::Ascii
    } else {
        RenderStyle::Unicode
    };
    for reaction in &reactions {
        println!("{}", format_reaction(&input, reaction, style));
    }
    println!("{total} reactions calculated");
    ExitCode::SUCCESS
}

/// Parses the term list and routes it through the selection board, so the
/// same count limits apply as in the UI. `None` means nothing was selected.
fn read_input(terms: &[String]) -> Result<Option<ParticleState>, String> {
    let parsed = ParticleState::parse_terms(&terms.join(" ")).map_err(|err| err.to_string())?;
    let board = SelectionBoard::from_state(&parsed).map_err(|err| err.to_string())?;
    Ok(board.to_input_state())
}
