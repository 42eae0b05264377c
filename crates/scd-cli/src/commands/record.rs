//! Record command for computing SCDs from a service record file.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use figment::Figment;
use figment::providers::{Format, Json, Toml};
use scd_core::ServiceRecord;

use super::report;
use crate::Config;

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Path to the service record (.json or .toml).
    pub path: PathBuf,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Reads a service record, as TOML if the extension says so and JSON otherwise.
pub fn load_record(path: &Path) -> Result<ServiceRecord> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let figment = if path.extension().is_some_and(|ext| ext == "toml") {
        Figment::from(Toml::string(&contents))
    } else {
        Figment::from(Json::string(&contents))
    };

    figment
        .extract()
        .with_context(|| format!("failed to parse service record {}", path.display()))
}

pub fn run<W: Write>(writer: &mut W, args: &RecordArgs, config: &Config) -> Result<()> {
    let record = load_record(&args.path)?;
    tracing::debug!(path = %args.path.display(), ?record, "loaded service record");
    let result = record.evaluate(config.calculation.clone())?;
    report::write_result(writer, &result, args.json)
}
