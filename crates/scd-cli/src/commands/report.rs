//! Rendering of calculation results.
//!
//! Human-readable output is the results table with the factors behind each
//! date, followed by the adjustments applied and advisory notes.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use scd_core::{CreditSummary, ScdKind, ScdResult};

/// Advisory notes printed under every report.
const NOTES: [&str; 3] = [
    "Combat zone service requires manual verification for buyback exceptions",
    "LWOP adjustments calculated per OPM 360-day year",
    "Always confirm with your HR specialist",
];

// ========== Text Output ==========

/// Formats a result as the human-readable report.
pub fn format_report(result: &ScdResult) -> String {
    let mut output = String::new();

    writeln!(output, "Computation Results").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "{:<18}{:<16}Key Factors", "SCD Type", "Estimated Date").unwrap();
    for kind in ScdKind::ALL {
        let date = result.date(kind).to_string();
        writeln!(output, "{:<18}{date:<16}{}", kind.label(), kind.key_factors()).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "Adjustments").unwrap();
    for (label, value) in adjustment_lines(&result.credits) {
        writeln!(output, "  {label:<31}{value}").unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "Important Notes").unwrap();
    for note in NOTES {
        writeln!(output, "- {note}").unwrap();
    }

    output
}

fn adjustment_lines(credits: &CreditSummary) -> [(&'static str, String); 5] {
    [
        (
            "Military credit (leave):",
            format!("{} OPM days", credits.leave_credit_days),
        ),
        (
            "Military credit (retirement):",
            format!("{} OPM days", credits.retirement_credit_days),
        ),
        (
            "LWOP forfeited:",
            format!("{} days", credits.lwop_forfeited_days),
        ),
        (
            "Break in service:",
            format!("{} months", credits.break_adjustment_months),
        ),
        (
            "RIF performance credit:",
            format!("{} OPM days", credits.rif_credit_days),
        ),
    ]
}

// ========== Public Interface ==========

/// Writes a result as the text report or pretty JSON.
pub fn write_result<W: Write>(writer: &mut W, result: &ScdResult, json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(result)?)?;
    } else {
        write!(writer, "{}", format_report(result))?;
    }
    Ok(())
}
