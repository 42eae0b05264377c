//! Real (Gregorian) calendar dates.
//!
//! These only appear at the boundary: inputs are parsed into a
//! [`CalendarDate`], converted to OPM days for the arithmetic, and resolved
//! back into a [`CalendarDate`] for output.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::MonthOverflow;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date on the real calendar.
///
/// Serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date, returning `None` if it does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Creates a date whose day may run past the end of the month.
    ///
    /// `day` must be at least 1. Excess days are rolled into the next month
    /// or clamped to the month's last day depending on `overflow`.
    pub fn from_overflowing_ymd(
        year: i32,
        month: u32,
        day: u32,
        overflow: MonthOverflow,
    ) -> Option<Self> {
        if day == 0 {
            return None;
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let date = match overflow {
            MonthOverflow::Roll => first.checked_add_days(Days::new(u64::from(day - 1)))?,
            MonthOverflow::Clamp => first.with_day(day.min(days_in_month(year, month)?))?,
        };
        Some(Self(date))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the underlying chrono date.
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Real elapsed days from `self` to `other` (negative if `other` is earlier).
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Adds calendar months, keeping the day-of-month where possible.
    pub fn add_months(self, months: i64, overflow: MonthOverflow) -> Option<Self> {
        let month_count = i64::from(self.0.year())
            .checked_mul(12)?
            .checked_add(i64::from(self.0.month0()))?
            .checked_add(months)?;
        let year = i32::try_from(month_count.div_euclid(12)).ok()?;
        let month = u32::try_from(month_count.rem_euclid(12)).ok()? + 1;
        Self::from_overflowing_ymd(year, month, self.0.day(), overflow)
    }

    /// Adds calendar years, keeping month and day where possible.
    pub fn add_years(self, years: i64, overflow: MonthOverflow) -> Option<Self> {
        self.add_months(years.checked_mul(12)?, overflow)
    }
}

/// Number of days in a real calendar month.
pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(Self)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = chrono::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
