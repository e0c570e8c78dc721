//! Command-line parsing for the risk calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the validation/scoring code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "cvr",
    version,
    about = "12-month cardiovascular hospitalization risk calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the five inputs, print the risk summary, optionally export JSON.
    Calc(CalcArgs),
    /// Launch the interactive TUI form.
    ///
    /// This uses the same underlying pipeline as `cvr calc`, but renders the
    /// form and result in a terminal UI using Ratatui.
    Tui,
}

/// Raw field values for a one-shot calculation.
///
/// Values pass through the same normalization/validation path as the TUI
/// form, so `--h2fpef 5,5` and `--h2fpef 5.5` are equivalent and an omitted
/// flag reports the same error as an empty form field.
#[derive(Debug, Parser, Clone)]
pub struct CalcArgs {
    /// Alpha-galactosidase A activity (0-1000).
    #[arg(long = "alpha-gal", value_name = "VALUE")]
    pub alpha_gal: Option<String>,

    /// H2FPEF score (0-9).
    #[arg(long, value_name = "VALUE")]
    pub h2fpef: Option<String>,

    /// Prior cardiovascular hospitalization (1 = yes, 0 = no).
    #[arg(long, value_name = "0|1")]
    pub hospitalization: Option<String>,

    /// Active smoking (1 = yes, 0 = no).
    #[arg(long, value_name = "0|1")]
    pub smoking: Option<String>,

    /// E/e' ratio (0-100).
    #[arg(long = "e-eprime", value_name = "VALUE")]
    pub e_eprime: Option<String>,

    /// Export the assessment (inputs + z + probability) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
