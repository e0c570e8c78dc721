//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the validate-and-compute pipeline
//! - prints the summary or the per-field errors
//! - writes the optional assessment export
//! - launches the TUI

use clap::Parser;

use crate::cli::{CalcArgs, Command};
use crate::domain::RawInput;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cvr` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `cvr` to behave like `cvr tui`. Clap requires a subcommand
    // name, so we do a small, explicit rewrite of the argv list before
    // parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Calc(args) => handle_calc(args),
        Command::Tui => crate::tui::run(),
    }
}

fn handle_calc(args: CalcArgs) -> Result<(), AppError> {
    let raw = raw_input_from_args(&args);
    let run = pipeline::evaluate(&raw);

    let (Some(inputs), Some(assessment)) = (run.inputs, run.assessment) else {
        eprint!("{}", crate::report::format_errors(&run.errors));
        return Err(AppError::usage("Input validation failed."));
    };

    print!(
        "{}",
        crate::report::format_run_summary(&inputs, &assessment)
    );

    if let Some(path) = &args.export {
        crate::io::export::write_assessment_json(path, &inputs, &assessment)?;
        println!("Wrote assessment: {}", path.display());
    }

    Ok(())
}

pub fn raw_input_from_args(args: &CalcArgs) -> RawInput {
    RawInput {
        alpha_gal: args.alpha_gal.clone().unwrap_or_default(),
        h2fpef: args.h2fpef.clone().unwrap_or_default(),
        hospitalization: args.hospitalization.clone().unwrap_or_default(),
        smoking: args.smoking.clone().unwrap_or_default(),
        e_eprime: args.e_eprime.clone().unwrap_or_default(),
    }
}

/// Rewrite argv so `cvr` defaults to `cvr tui`.
///
/// Rules:
/// - `cvr`            -> `cvr tui`
/// - anything else    -> unchanged (clap handles help/version/subcommands
///   and reports unknown arguments itself)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    if argv.len() == 1 {
        argv.push("tui".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["cvr"])), argv(&["cvr", "tui"]));
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["cvr", "calc", "--h2fpef", "5"])),
            argv(&["cvr", "calc", "--h2fpef", "5"])
        );
        assert_eq!(rewrite_args(argv(&["cvr", "--help"])), argv(&["cvr", "--help"]));
    }
}
