//! SCD aggregation.
//!
//! Collects military and LWOP entries and combines them with the EOD date,
//! break in service and performance rating into the four SCDs.
//!
//! # Algorithm Summary
//!
//! 1. Reduce military entries to leave credit (all service) and retirement
//!    credit (bought back or combat zone service only), in OPM days
//! 2. Leave and retirement SCDs are the EOD date moved earlier by their credit
//! 3. LWOP beyond the threshold pushes the retirement SCD later
//! 4. A break of more than 3 days pushes the retirement SCD later by whole
//!    calendar months
//! 5. RIF SCD is the leave SCD moved earlier by the capped performance credit
//! 6. TSP vesting is the EOD date plus 3 calendar years

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::config::CalculationConfig;
use crate::entry::{LwopEntry, MilitaryEntry};
use crate::error::ScdError;
use crate::opm::{OPM_DAYS_IN_MONTH, forfeit_lwop, from_opm_days, lwop_forfeited_days, to_opm_days};
use crate::scd_kind::ScdKind;
use crate::types::{BreakDays, InputRef, PerformanceRating, ValidationError, check_range};

/// Adjustments that went into a calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditSummary {
    /// Military service credited toward leave, in OPM days.
    pub leave_credit_days: i64,

    /// Military service credited toward retirement, in OPM days.
    pub retirement_credit_days: i64,

    /// LWOP days beyond the threshold.
    pub lwop_forfeited_days: i64,

    /// Calendar months added for a break in service.
    pub break_adjustment_months: u32,

    /// Performance credit toward RIF seniority, in OPM days.
    pub rif_credit_days: i64,
}

/// Result of an SCD calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScdResult {
    pub leave_scd: CalendarDate,
    pub retirement_scd: CalendarDate,
    pub tsp_scd: CalendarDate,
    pub rif_scd: CalendarDate,
    pub credits: CreditSummary,
}

impl ScdResult {
    /// Returns the date of the given kind.
    pub const fn date(&self, kind: ScdKind) -> CalendarDate {
        match kind {
            ScdKind::Leave => self.leave_scd,
            ScdKind::Retirement => self.retirement_scd,
            ScdKind::Tsp => self.tsp_scd,
            ScdKind::Rif => self.rif_scd,
        }
    }
}

/// Accumulates service entries and computes SCDs from them.
///
/// Entries are only ever summed, so the order they are added in does not
/// affect the result.
#[derive(Debug, Clone, Default)]
pub struct ScdCalculator {
    config: CalculationConfig,
    military: Vec<MilitaryEntry>,
    lwop: Vec<LwopEntry>,
}

impl ScdCalculator {
    /// Creates an empty calculator with the default OPM rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty calculator with the given rules.
    pub const fn with_config(config: CalculationConfig) -> Self {
        Self {
            config,
            military: Vec::new(),
            lwop: Vec::new(),
        }
    }

    pub const fn config(&self) -> &CalculationConfig {
        &self.config
    }

    /// Adds a military service entry.
    ///
    /// Fails with [`ValidationError::InvalidRange`] if the entry ends before
    /// it starts.
    pub fn add_military_entry(&mut self, entry: MilitaryEntry) -> Result<(), ValidationError> {
        check_range(
            InputRef::Military(self.military.len() + 1),
            entry.start,
            entry.end,
        )?;
        self.military.push(entry);
        Ok(())
    }

    /// Adds a leave-without-pay entry.
    ///
    /// Fails with [`ValidationError::InvalidRange`] if the entry ends before
    /// it starts.
    pub fn add_lwop_entry(&mut self, entry: LwopEntry) -> Result<(), ValidationError> {
        check_range(InputRef::Lwop(self.lwop.len() + 1), entry.start, entry.end)?;
        self.lwop.push(entry);
        Ok(())
    }

    pub fn military_entries(&self) -> &[MilitaryEntry] {
        &self.military
    }

    pub fn lwop_entries(&self) -> &[LwopEntry] {
        &self.lwop
    }

    /// Computes all four SCDs.
    ///
    /// Stored entries are left untouched, so calling this repeatedly with the
    /// same inputs gives the same result.
    pub fn calculate(
        &self,
        federal_eod: CalendarDate,
        break_days: BreakDays,
        performance: PerformanceRating,
    ) -> Result<ScdResult, ScdError> {
        let config = &self.config;
        let (leave_credit_days, retirement_credit_days) = military_credits(&self.military);
        tracing::debug!(
            %federal_eod,
            leave_credit_days,
            retirement_credit_days,
            "military credit"
        );

        let eod_days = to_opm_days(federal_eod);
        let leave_scd = from_opm_days(eod_days.offset(-leave_credit_days))
            .to_calendar(config)
            .ok_or(ScdError::OutOfRange { scd: ScdKind::Leave })?;
        let retirement_out_of_range = ScdError::OutOfRange {
            scd: ScdKind::Retirement,
        };
        let retirement_before_lwop = from_opm_days(eod_days.offset(-retirement_credit_days))
            .to_calendar(config)
            .ok_or_else(|| retirement_out_of_range.clone())?;

        let lwop_forfeited_days = lwop_forfeited_days(&self.lwop, config.lwop_threshold_days);
        let mut retirement_scd = forfeit_lwop(retirement_before_lwop, &self.lwop, config)
            .ok_or_else(|| retirement_out_of_range.clone())?;
        tracing::debug!(
            %retirement_before_lwop,
            %retirement_scd,
            lwop_forfeited_days,
            "LWOP adjustment"
        );

        let break_adjustment_months = break_adjustment_months(break_days, config);
        if break_adjustment_months > 0 {
            retirement_scd = retirement_scd
                .add_months(i64::from(break_adjustment_months), config.month_overflow)
                .ok_or(retirement_out_of_range)?;
            tracing::debug!(
                break_days = break_days.days(),
                break_adjustment_months,
                %retirement_scd,
                "break in service adjustment"
            );
        }

        let rif_credit_days = performance.credit_days(config.rif_cap_years);
        let rif_scd = from_opm_days(to_opm_days(leave_scd).offset(-rif_credit_days))
            .to_calendar(config)
            .ok_or(ScdError::OutOfRange { scd: ScdKind::Rif })?;
        tracing::debug!(rating = performance.value(), rif_credit_days, %rif_scd, "RIF credit");

        let tsp_scd = federal_eod
            .add_years(i64::from(config.tsp_vesting_years), config.month_overflow)
            .ok_or(ScdError::OutOfRange { scd: ScdKind::Tsp })?;

        Ok(ScdResult {
            leave_scd,
            retirement_scd,
            tsp_scd,
            rif_scd,
            credits: CreditSummary {
                leave_credit_days,
                retirement_credit_days,
                lwop_forfeited_days,
                break_adjustment_months,
                rif_credit_days,
            },
        })
    }
}

/// Sums military service into (leave, retirement) credit in OPM days.
fn military_credits(entries: &[MilitaryEntry]) -> (i64, i64) {
    entries.iter().fold((0, 0), |(leave, retirement), entry| {
        let total = entry.opm_days();
        let retirement = if entry.counts_for_retirement() {
            retirement + total
        } else {
            retirement
        };
        (leave + total, retirement)
    })
}

/// Whole months a break in service adds, ignoring breaks at or under the threshold.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "OPM_DAYS_IN_MONTH is a small positive constant"
)]
const fn break_adjustment_months(break_days: BreakDays, config: &CalculationConfig) -> u32 {
    if break_days.days() > config.break_threshold_days {
        break_days.days() / OPM_DAYS_IN_MONTH as u32
    } else {
        0
    }
}
