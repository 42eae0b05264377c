//! Calculation policy.

use serde::{Deserialize, Serialize};

/// How a zero day-of-month produced by the 360-day decomposition is resolved.
///
/// A remainder of zero days means "the last day of the previous synthetic
/// month". The two policies disagree on what that day is on a real calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayZeroPolicy {
    /// The 30th of the previous month, so every real date up to day 30
    /// survives a round trip through the converter.
    #[default]
    Thirtieth,
    /// The real last day of the previous month (Jan 31, Feb 28, ...).
    PreviousMonthEnd,
}

/// What happens when a day-of-month does not exist in the target month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthOverflow {
    /// Spill the excess days into the following month (Jan 31 + 1 month = Mar 3).
    #[default]
    Roll,
    /// Use the last day of the target month (Jan 31 + 1 month = Feb 28).
    Clamp,
}

/// Configuration for SCD calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Resolution of zero day-of-month results.
    pub day_zero: DayZeroPolicy,

    /// Overflow rule for real calendar month arithmetic.
    pub month_overflow: MonthOverflow,

    /// LWOP span tolerated before retirement credit is forfeited.
    /// Default: 180 days.
    pub lwop_threshold_days: i64,

    /// Breaks in service up to this many days are ignored.
    /// Default: 3 days.
    pub break_threshold_days: u32,

    /// Cap on RIF performance credit, in 360-day years.
    /// Default: 20.
    pub rif_cap_years: u32,

    /// Civilian service needed for TSP vesting, in calendar years.
    /// Default: 3.
    pub tsp_vesting_years: u32,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            day_zero: DayZeroPolicy::default(),
            month_overflow: MonthOverflow::default(),
            lwop_threshold_days: 180,
            break_threshold_days: 3,
            rif_cap_years: 20,
            tsp_vesting_years: 3,
        }
    }
}
