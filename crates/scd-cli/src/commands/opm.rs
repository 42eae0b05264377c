//! OPM command for inspecting the 360-day calendar mapping.

use std::io::Write;

use anyhow::{Context, Result};
use scd_core::{InputRef, OpmDays, from_opm_days, parse_date, to_opm_days};

use crate::{Config, OpmAction};

pub fn run<W: Write>(writer: &mut W, action: &OpmAction, config: &Config) -> Result<()> {
    match action {
        OpmAction::To { date } => {
            let date = parse_date(date, InputRef::Calculation, "date")?;
            let days = to_opm_days(date);
            let parts = from_opm_days(days);
            writeln!(
                writer,
                "{date} = {days} OPM days (year {}, month index {}, day {})",
                parts.year, parts.month_index, parts.day_of_month
            )?;
        }
        OpmAction::From { days } => {
            let days = OpmDays::new(*days);
            let date = from_opm_days(days)
                .to_calendar(&config.calculation)
                .with_context(|| format!("{days} OPM days is outside the supported calendar range"))?;
            writeln!(writer, "{days} OPM days = {date}")?;
        }
    }
    Ok(())
}
