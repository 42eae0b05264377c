//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::calculate::CalculateArgs;
use crate::commands::record::RecordArgs;

/// Federal service computation date calculator.
///
/// Computes leave, retirement, TSP vesting and RIF dates from an entry-on-duty
/// date and service adjustments, using OPM's 360-day year.
#[derive(Debug, Parser)]
#[command(name = "scd", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute SCDs from command-line inputs.
    Calculate(CalculateArgs),

    /// Compute SCDs from a JSON or TOML service record.
    Record(RecordArgs),

    /// Convert between calendar dates and OPM day counts.
    #[command(subcommand)]
    Opm(OpmAction),
}

/// OPM calendar conversions.
#[derive(Debug, Subcommand)]
pub enum OpmAction {
    /// Convert a calendar date (YYYY-MM-DD) to OPM days.
    To {
        /// The date to convert.
        date: String,
    },

    /// Convert an OPM day count to a calendar date.
    From {
        /// The OPM day count.
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
}
