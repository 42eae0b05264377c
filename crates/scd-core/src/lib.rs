//! Core domain logic for service computation dates.
//!
//! This crate contains:
//! - OPM calendar: converting dates to and from the 360-day/30-day convention
//! - Calculator: combining military, LWOP, break and performance adjustments
//!   into leave, retirement, TSP and RIF dates
//! - Records: validating plain string input at the boundary

mod calculator;
pub mod calendar;
mod config;
mod entry;
mod error;
pub mod opm;
pub mod record;
pub mod scd_kind;
pub mod types;

pub use calculator::{CreditSummary, ScdCalculator, ScdResult};
pub use calendar::CalendarDate;
pub use config::{CalculationConfig, DayZeroPolicy, MonthOverflow};
pub use entry::{LwopEntry, MilitaryEntry};
pub use error::ScdError;
pub use opm::{OpmDate, OpmDays, forfeit_lwop, from_opm_days, to_opm_days};
pub use record::{CalculationInput, LwopRecord, MilitaryRecord, ServiceRecord};
pub use scd_kind::{ScdKind, UnknownScdKind};
pub use types::{BreakDays, InputRef, PerformanceRating, ValidationError, parse_date};
