//! CLI argument definitions for the csvcheck validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvcheck",
    version,
    about = "Validate CSV-style text data against per-column rules",
    long_about = "Validate delimited text data against a declaratively configured\n\
                  set of per-column rules, reporting every failing row with its\n\
                  row number, column position, and message."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a data file against a rule configuration.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the delimited data file to validate.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Path to the validator configuration JSON.
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Stop after this many failing rows.
    #[arg(long = "max-errors", value_name = "N")]
    pub max_errors: Option<usize>,
}
