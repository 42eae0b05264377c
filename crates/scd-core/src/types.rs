//! Validated input types.
//!
//! Everything that crosses into the calculator from outside is checked here,
//! before any arithmetic runs.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::CalendarDate;
use crate::opm::OPM_DAYS_IN_YEAR;

/// Identifies which input a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRef {
    /// A military service entry, numbered from 1 in insertion order.
    Military(usize),
    /// A leave-without-pay entry, numbered from 1 in insertion order.
    Lwop(usize),
    /// The EOD date and the scalar inputs to `calculate`.
    Calculation,
}

impl fmt::Display for InputRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Military(n) => write!(f, "military entry {n}"),
            Self::Lwop(n) => write!(f, "LWOP entry {n}"),
            Self::Calculation => write!(f, "calculation input"),
        }
    }
}

/// Validation errors for calculator inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value was missing, malformed or outside its domain.
    #[error("{input}: invalid {field} {value:?}: {reason}")]
    InvalidInput {
        input: InputRef,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// An entry ends before it starts.
    #[error("{input}: end date {end} precedes start date {start}")]
    InvalidRange {
        input: InputRef,
        start: CalendarDate,
        end: CalendarDate,
    },
}

impl ValidationError {
    fn invalid(
        input: InputRef,
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            input,
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// The input the error refers to.
    pub const fn input(&self) -> InputRef {
        match self {
            Self::InvalidInput { input, .. } | Self::InvalidRange { input, .. } => *input,
        }
    }
}

/// Parses a `YYYY-MM-DD` date supplied for `field` of `input`.
///
/// This is the only place date strings enter the core.
pub fn parse_date(
    value: &str,
    input: InputRef,
    field: &'static str,
) -> Result<CalendarDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::invalid(input, field, value, "date is missing"));
    }
    trimmed
        .parse()
        .map_err(|e: chrono::ParseError| ValidationError::invalid(input, field, value, e.to_string()))
}

/// Rejects an entry whose end precedes its start.
pub(crate) fn check_range(
    input: InputRef,
    start: CalendarDate,
    end: CalendarDate,
) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::InvalidRange { input, start, end });
    }
    Ok(())
}

/// Converts a caller-supplied number into a non-negative whole count.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is checked to be a whole number within u32 range"
)]
fn whole_number(value: f64, field: &'static str) -> Result<u32, ValidationError> {
    let reason = if !value.is_finite() {
        Some("must be a finite number")
    } else if value < 0.0 {
        Some("must not be negative")
    } else if value.fract() > 0.0 {
        Some("must be a whole number")
    } else if value > f64::from(u32::MAX) {
        Some("is too large")
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(ValidationError::invalid(
            InputRef::Calculation,
            field,
            value.to_string(),
            reason,
        ));
    }
    Ok(value as u32)
}

/// Days of break in service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u32")]
pub struct BreakDays(u32);

impl BreakDays {
    pub const ZERO: Self = Self(0);

    /// Creates a break length after validation.
    pub fn new(days: i64) -> Result<Self, ValidationError> {
        u32::try_from(days).map(Self).map_err(|_| {
            let reason = if days < 0 {
                "must not be negative"
            } else {
                "is too large"
            };
            ValidationError::invalid(InputRef::Calculation, "break days", days.to_string(), reason)
        })
    }

    pub const fn days(self) -> u32 {
        self.0
    }
}

impl TryFrom<f64> for BreakDays {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        whole_number(value, "break days").map(Self)
    }
}

impl From<BreakDays> for u32 {
    fn from(days: BreakDays) -> Self {
        days.0
    }
}

/// A performance rating used for RIF credit.
///
/// Each rating point is worth half a 360-day year of RIF seniority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u32")]
pub struct PerformanceRating(u32);

impl PerformanceRating {
    pub const fn new(rating: u32) -> Self {
        Self(rating)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// RIF credit in OPM days, capped at `cap_years` 360-day years.
    pub fn credit_days(self, cap_years: u32) -> i64 {
        let earned = i64::from(self.0) * OPM_DAYS_IN_YEAR / 2;
        earned.min(i64::from(cap_years) * OPM_DAYS_IN_YEAR)
    }
}

impl TryFrom<f64> for PerformanceRating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        whole_number(value, "performance rating").map(Self)
    }
}

impl From<PerformanceRating> for u32 {
    fn from(rating: PerformanceRating) -> Self {
        rating.0
    }
}
