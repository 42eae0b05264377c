//! Plain input records from the presentation layer.
//!
//! A [`ServiceRecord`] carries dates as strings exactly as they were entered.
//! Building it validates every field in order and reports the first failure
//! with the entry and field it belongs to.

use serde::{Deserialize, Serialize};

use crate::calculator::{ScdCalculator, ScdResult};
use crate::calendar::CalendarDate;
use crate::config::CalculationConfig;
use crate::entry::{LwopEntry, MilitaryEntry};
use crate::error::ScdError;
use crate::types::{BreakDays, InputRef, PerformanceRating, ValidationError, parse_date};

/// A military service row as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilitaryRecord {
    pub start: String,
    pub end: String,
    pub buyback_paid: bool,
    pub combat_zone: bool,
}

/// An LWOP row as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LwopRecord {
    pub start: String,
    pub end: String,
}

/// Everything needed for one calculation, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRecord {
    pub federal_eod: String,
    pub break_days: f64,
    pub performance_rating: f64,
    pub military: Vec<MilitaryRecord>,
    pub lwop: Vec<LwopRecord>,
}

/// Validated scalar inputs to [`ScdCalculator::calculate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationInput {
    pub federal_eod: CalendarDate,
    pub break_days: BreakDays,
    pub performance: PerformanceRating,
}

impl ServiceRecord {
    /// Validates the record and loads its entries into a calculator.
    pub fn build(
        &self,
        config: CalculationConfig,
    ) -> Result<(ScdCalculator, CalculationInput), ValidationError> {
        let input = CalculationInput {
            federal_eod: parse_date(&self.federal_eod, InputRef::Calculation, "federal EOD date")?,
            break_days: BreakDays::try_from(self.break_days)?,
            performance: PerformanceRating::try_from(self.performance_rating)?,
        };

        let mut calculator = ScdCalculator::with_config(config);
        for (index, row) in self.military.iter().enumerate() {
            let source = InputRef::Military(index + 1);
            let entry = MilitaryEntry::new(
                parse_date(&row.start, source, "start date")?,
                parse_date(&row.end, source, "end date")?,
            )
            .with_buyback(row.buyback_paid)
            .with_combat_zone(row.combat_zone);
            calculator.add_military_entry(entry)?;
        }
        for (index, row) in self.lwop.iter().enumerate() {
            let source = InputRef::Lwop(index + 1);
            let entry = LwopEntry::new(
                parse_date(&row.start, source, "start date")?,
                parse_date(&row.end, source, "end date")?,
            );
            calculator.add_lwop_entry(entry)?;
        }

        Ok((calculator, input))
    }

    /// Validates the record and computes its SCDs.
    pub fn evaluate(&self, config: CalculationConfig) -> Result<ScdResult, ScdError> {
        let (calculator, input) = self.build(config)?;
        calculator.calculate(input.federal_eod, input.break_days, input.performance)
    }
}
