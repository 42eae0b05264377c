//! CLI subcommand implementations.

pub mod calculate;
pub mod opm;
pub mod record;
pub mod report;
mod util;
