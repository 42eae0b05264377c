//! OPM 360-day calendar conversion.
//!
//! Service credit is computed on a synthetic calendar of twelve 30-day months.
//! A date maps to an [`OpmDays`] count with `year*360 + (month-1)*30 + day`,
//! credits are added or subtracted on that count, and the result is mapped
//! back through [`from_opm_days`] and [`OpmDate::to_calendar`].
//!
//! The count is not a Julian day number. Never mix it with real day
//! differences.

use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDate, days_in_month};
use crate::config::{CalculationConfig, DayZeroPolicy};
use crate::entry::LwopEntry;

pub const OPM_DAYS_IN_YEAR: i64 = 360;
pub const OPM_DAYS_IN_MONTH: i64 = 30;

/// Elapsed days on the 360-day calendar since its virtual epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpmDays(i64);

impl OpmDays {
    pub const fn new(days: i64) -> Self {
        Self(days)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Moves the count by `days` (negative moves earlier).
    #[must_use]
    pub const fn offset(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

impl Sub for OpmDays {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for OpmDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw decomposition of an [`OpmDays`] count.
///
/// Both `month_index` (0-11) and `day_of_month` (0-29) are zero-based. A
/// `day_of_month` of zero is the last day of the previous synthetic month and
/// is resolved by [`DayZeroPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpmDate {
    pub year: i64,
    pub month_index: u32,
    pub day_of_month: u32,
}

impl OpmDate {
    /// The count this date was decomposed from.
    pub fn to_opm_days(self) -> OpmDays {
        OpmDays(
            self.year * OPM_DAYS_IN_YEAR
                + i64::from(self.month_index) * OPM_DAYS_IN_MONTH
                + i64::from(self.day_of_month),
        )
    }

    /// Resolves the synthetic date onto the real calendar.
    ///
    /// Days that do not exist in the real month (Feb 29 in a common year, or
    /// Feb 30 under [`DayZeroPolicy::Thirtieth`]) follow the configured
    /// [`MonthOverflow`](crate::MonthOverflow) rule. Returns `None` if the year
    /// is outside the range chrono can represent.
    pub fn to_calendar(self, config: &CalculationConfig) -> Option<CalendarDate> {
        let year = i32::try_from(self.year).ok()?;
        let month = self.month_index + 1;
        if self.day_of_month > 0 {
            return CalendarDate::from_overflowing_ymd(
                year,
                month,
                self.day_of_month,
                config.month_overflow,
            );
        }

        let (year, month) = if month == 1 {
            (year.checked_sub(1)?, 12)
        } else {
            (year, month - 1)
        };
        let day = match config.day_zero {
            DayZeroPolicy::Thirtieth => 30,
            DayZeroPolicy::PreviousMonthEnd => days_in_month(year, month)?,
        };
        CalendarDate::from_overflowing_ymd(year, month, day, config.month_overflow)
    }
}

/// Converts raw year/month/day numbers to OPM days.
///
/// No range checks: out-of-range months and days still map linearly.
pub const fn opm_days_from_parts(year: i64, month: i64, day: i64) -> OpmDays {
    OpmDays(year * OPM_DAYS_IN_YEAR + (month - 1) * OPM_DAYS_IN_MONTH + day)
}

/// Converts a real calendar date to OPM days.
pub fn to_opm_days(date: CalendarDate) -> OpmDays {
    opm_days_from_parts(
        i64::from(date.year()),
        i64::from(date.month()),
        i64::from(date.day()),
    )
}

/// Decomposes an OPM day count with floored division.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "rem_euclid keeps the remainder within 0..360"
)]
pub const fn from_opm_days(days: OpmDays) -> OpmDate {
    let year = days.0.div_euclid(OPM_DAYS_IN_YEAR);
    let remainder = days.0.rem_euclid(OPM_DAYS_IN_YEAR);
    OpmDate {
        year,
        month_index: (remainder / OPM_DAYS_IN_MONTH) as u32,
        day_of_month: (remainder % OPM_DAYS_IN_MONTH) as u32,
    }
}

/// Total LWOP days beyond `threshold_days`, summed per entry.
pub fn lwop_forfeited_days(entries: &[LwopEntry], threshold_days: i64) -> i64 {
    entries
        .iter()
        .map(LwopEntry::span_days)
        .filter(|span| *span > threshold_days)
        .map(|span| span - threshold_days)
        .sum()
}

/// Pushes `base` later by the LWOP days that exceed the threshold.
///
/// The base is always converted through the 360-day calendar, even when no
/// entry crosses the threshold.
pub fn forfeit_lwop(
    base: CalendarDate,
    entries: &[LwopEntry],
    config: &CalculationConfig,
) -> Option<CalendarDate> {
    let forfeited = lwop_forfeited_days(entries, config.lwop_threshold_days);
    from_opm_days(to_opm_days(base).offset(forfeited)).to_calendar(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonthOverflow;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn round_trip(d: CalendarDate, config: &CalculationConfig) -> CalendarDate {
        from_opm_days(to_opm_days(d)).to_calendar(config).unwrap()
    }

    #[test]
    fn to_opm_days_is_linear() {
        assert_eq!(to_opm_days(date("2015-01-01")).value(), 2015 * 360 + 1);
        assert_eq!(to_opm_days(date("2015-03-15")).value(), 2015 * 360 + 60 + 15);
        assert_eq!(opm_days_from_parts(2015, 13, 1).value(), 2016 * 360 + 1);
        assert_eq!(opm_days_from_parts(2015, 1, 31), opm_days_from_parts(2015, 2, 1));
        assert_eq!(opm_days_from_parts(2015, 0, 0).value(), 2015 * 360 - 30);
    }

    #[test]
    fn from_opm_days_decomposes() {
        let opm = from_opm_days(OpmDays::new(2015 * 360 + 75));
        assert_eq!(
            opm,
            OpmDate {
                year: 2015,
                month_index: 2,
                day_of_month: 15
            }
        );
        assert_eq!(opm.to_opm_days().value(), 2015 * 360 + 75);
    }

    #[test]
    fn from_opm_days_floors_negative_counts() {
        let opm = from_opm_days(OpmDays::new(-1));
        assert_eq!(
            opm,
            OpmDate {
                year: -1,
                month_index: 11,
                day_of_month: 29
            }
        );
        let opm = from_opm_days(OpmDays::new(-360));
        assert_eq!((opm.year, opm.month_index, opm.day_of_month), (-1, 0, 0));
    }

    #[test]
    fn decomposition_inverts_every_synthetic_day() {
        for year in [-3_i64, 0, 1999, 2024] {
            for month in 1..=12_i64 {
                for day in 1..=29_i64 {
                    let opm = from_opm_days(opm_days_from_parts(year, month, day));
                    assert_eq!(opm.year, year);
                    assert_eq!(i64::from(opm.month_index), month - 1);
                    assert_eq!(i64::from(opm.day_of_month), day);
                }
            }
        }
    }

    #[test]
    fn round_trips_real_dates_up_to_day_30() {
        let config = CalculationConfig::default();
        for year in [2015, 2016, 2100] {
            for month in 1..=12 {
                for day in 1..=30 {
                    if let Some(d) = CalendarDate::from_ymd(year, month, day) {
                        assert_eq!(round_trip(d, &config), d, "round trip failed for {d}");
                    }
                }
            }
        }
    }

    #[test]
    fn to_opm_days_is_monotonic() {
        let mut previous: Option<OpmDays> = None;
        for year in [2019, 2020] {
            for month in 1..=12 {
                for day in 1..=30 {
                    let current = opm_days_from_parts(year, month, day);
                    if let Some(previous) = previous {
                        assert!(current > previous);
                    }
                    previous = Some(current);
                }
            }
        }
    }

    #[test]
    fn day_zero_thirtieth_policy() {
        let config = CalculationConfig::default();
        // 2015-04-30 decomposes to month index 4, day 0.
        assert_eq!(round_trip(date("2015-04-30"), &config), date("2015-04-30"));
        assert_eq!(round_trip(date("2015-01-30"), &config), date("2015-01-30"));
        assert_eq!(round_trip(date("2015-12-30"), &config), date("2015-12-30"));
    }

    #[test]
    fn day_zero_previous_month_end_policy() {
        let config = CalculationConfig {
            day_zero: DayZeroPolicy::PreviousMonthEnd,
            ..CalculationConfig::default()
        };
        assert_eq!(round_trip(date("2015-01-30"), &config), date("2015-01-31"));
        assert_eq!(round_trip(date("2015-12-30"), &config), date("2015-12-31"));
        assert_eq!(round_trip(date("2015-04-30"), &config), date("2015-04-30"));
    }

    #[test]
    fn day_31_spills_into_next_month() {
        let config = CalculationConfig::default();
        assert_eq!(round_trip(date("2015-01-31"), &config), date("2015-02-01"));
        assert_eq!(round_trip(date("2015-12-31"), &config), date("2016-01-01"));
    }

    #[test]
    fn february_overflow_follows_month_rule() {
        let feb_29 = OpmDate {
            year: 2015,
            month_index: 1,
            day_of_month: 29,
        };
        let feb_30 = OpmDate {
            year: 2015,
            month_index: 2,
            day_of_month: 0,
        };
        let roll = CalculationConfig::default();
        let clamp = CalculationConfig {
            month_overflow: MonthOverflow::Clamp,
            ..CalculationConfig::default()
        };
        assert_eq!(feb_29.to_calendar(&roll), Some(date("2015-03-01")));
        assert_eq!(feb_30.to_calendar(&roll), Some(date("2015-03-02")));
        assert_eq!(feb_29.to_calendar(&clamp), Some(date("2015-02-28")));
        assert_eq!(feb_30.to_calendar(&clamp), Some(date("2015-02-28")));
    }

    #[test]
    fn to_calendar_rejects_unrepresentable_years() {
        let opm = from_opm_days(OpmDays::new(i64::from(i32::MAX) * 360 + 5));
        assert_eq!(opm.to_calendar(&CalculationConfig::default()), None);
    }

    #[test]
    fn lwop_threshold_boundary() {
        let start = date("2020-01-01");
        let exactly_180 = LwopEntry::new(start, date("2020-06-29"));
        let exactly_181 = LwopEntry::new(start, date("2020-06-30"));
        assert_eq!(exactly_180.span_days(), 180);
        assert_eq!(exactly_181.span_days(), 181);
        assert_eq!(lwop_forfeited_days(&[exactly_180], 180), 0);
        assert_eq!(lwop_forfeited_days(&[exactly_181], 180), 1);
    }

    #[test]
    fn lwop_excess_is_summed_per_entry() {
        let long = LwopEntry::new(date("2018-01-01"), date("2018-12-31")); // 364 days
        let short = LwopEntry::new(date("2019-01-01"), date("2019-03-01")); // 59 days
        assert_eq!(lwop_forfeited_days(&[long, short], 180), 184);
    }

    #[test]
    fn forfeit_lwop_moves_base_later() {
        let config = CalculationConfig::default();
        let base = date("2015-01-01");
        let entry = LwopEntry::new(date("2020-01-01"), date("2020-07-30")); // 211 days
        assert_eq!(entry.span_days(), 211);
        assert_eq!(forfeit_lwop(base, &[entry], &config), Some(date("2015-02-02")));
    }

    #[test]
    fn forfeit_lwop_without_excess_round_trips_base() {
        let config = CalculationConfig::default();
        let base = date("2015-06-15");
        let entry = LwopEntry::new(date("2020-01-01"), date("2020-02-01"));
        assert_eq!(forfeit_lwop(base, &[entry], &config), Some(base));
        assert_eq!(forfeit_lwop(base, &[], &config), Some(base));
        // Day 31 is not preserved by the round trip.
        let month_end = date("2015-05-31");
        assert_eq!(forfeit_lwop(month_end, &[], &config), Some(date("2015-06-01")));
    }
}
