//! Shared utilities for CLI commands.

use anyhow::{Context, Result, bail};
use scd_core::{LwopRecord, MilitaryRecord};

/// Splits a `START..END` period into its two dates.
///
/// The dates themselves are validated later by the calculator.
fn split_period(arg: &str) -> Result<(&str, &str)> {
    arg.split_once("..")
        .with_context(|| format!("invalid period {arg:?}: expected START..END"))
}

/// Parses a military period: `START..END[:buyback][:combat]`.
pub fn parse_military(arg: &str) -> Result<MilitaryRecord> {
    let mut parts = arg.split(':');
    let (start, end) = split_period(parts.next().unwrap_or_default())?;
    let mut record = MilitaryRecord {
        start: start.to_string(),
        end: end.to_string(),
        ..MilitaryRecord::default()
    };

    for flag in parts {
        match flag.trim() {
            "buyback" => record.buyback_paid = true,
            "combat" => record.combat_zone = true,
            other => bail!("unknown military flag {other:?} in {arg:?}: expected buyback or combat"),
        }
    }

    Ok(record)
}

/// Parses an LWOP period: `START..END`.
pub fn parse_lwop(arg: &str) -> Result<LwopRecord> {
    let (start, end) = split_period(arg)?;
    Ok(LwopRecord {
        start: start.to_string(),
        end: end.to_string(),
    })
}
