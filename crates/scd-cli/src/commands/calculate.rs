//! Calculate command for computing SCDs from command-line inputs.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use scd_core::ServiceRecord;

use super::report;
use super::util::{parse_lwop, parse_military};
use crate::Config;

#[derive(Debug, Args)]
pub struct CalculateArgs {
    /// Federal entry-on-duty date (YYYY-MM-DD).
    #[arg(long)]
    pub eod: String,

    /// Military service period, with optional :buyback and :combat flags.
    #[arg(long, value_name = "START..END[:FLAG]")]
    pub military: Vec<String>,

    /// Leave-without-pay period.
    #[arg(long, value_name = "START..END")]
    pub lwop: Vec<String>,

    /// Days of break in service.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub break_days: f64,

    /// Performance rating used for RIF credit.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub performance: f64,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

impl CalculateArgs {
    /// Collects the arguments into an unvalidated service record.
    pub fn to_record(&self) -> Result<ServiceRecord> {
        Ok(ServiceRecord {
            federal_eod: self.eod.clone(),
            break_days: self.break_days,
            performance_rating: self.performance,
            military: self
                .military
                .iter()
                .map(|arg| parse_military(arg))
                .collect::<Result<_>>()?,
            lwop: self
                .lwop
                .iter()
                .map(|arg| parse_lwop(arg))
                .collect::<Result<_>>()?,
        })
    }
}

pub fn run<W: Write>(writer: &mut W, args: &CalculateArgs, config: &Config) -> Result<()> {
    let record = args.to_record()?;
    tracing::debug!(
        military = record.military.len(),
        lwop = record.lwop.len(),
        "calculating from arguments"
    );
    let result = record.evaluate(config.calculation.clone())?;
    report::write_result(writer, &result, args.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use scd_core::{DayZeroPolicy, InputRef, ScdError, ValidationError};

    fn args(eod: &str) -> CalculateArgs {
        CalculateArgs {
            eod: eod.to_string(),
            military: Vec::new(),
            lwop: Vec::new(),
            break_days: 0.0,
            performance: 0.0,
            json: false,
        }
    }

    fn output(args: &CalculateArgs, config: &Config) -> String {
        let mut output = Vec::new();
        run(&mut output, args, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn calculate_prints_results_table() {
        let args = CalculateArgs {
            military: vec!["2010-01-01..2012-01-01:buyback".to_string()],
            performance: 2.0,
            ..args("2015-01-01")
        };

        assert_snapshot!(output(&args, &Config::default()), @r"
Computation Results

SCD Type          Estimated Date  Key Factors
Leave SCD         2013-01-01      Includes all military service periods
Retirement SCD    2013-01-01      Military buyback + LWOP adjustments
TSP Vesting Date  2018-01-01      3 years civilian service
RIF SCD           2012-01-01      Performance credit applied

Adjustments
  Military credit (leave):       720 OPM days
  Military credit (retirement):  720 OPM days
  LWOP forfeited:                0 days
  Break in service:              0 months
  RIF performance credit:        360 OPM days

Important Notes
- Combat zone service requires manual verification for buyback exceptions
- LWOP adjustments calculated per OPM 360-day year
- Always confirm with your HR specialist
");
    }

    #[test]
    fn calculate_json_output() {
        let args = CalculateArgs {
            lwop: vec!["2020-01-01..2020-07-30".to_string()],
            break_days: 30.0,
            json: true,
            ..args("2015-01-01")
        };

        let json: serde_json::Value =
            serde_json::from_str(&output(&args, &Config::default())).unwrap();
        assert_eq!(json["leave_scd"], "2015-01-01");
        assert_eq!(json["retirement_scd"], "2015-03-02");
        assert_eq!(json["tsp_scd"], "2018-01-01");
        assert_eq!(json["credits"]["lwop_forfeited_days"], 31);
        assert_eq!(json["credits"]["break_adjustment_months"], 1);
    }

    #[test]
    fn calculate_honors_day_zero_policy() {
        let mut config = Config::default();
        config.calculation.day_zero = DayZeroPolicy::PreviousMonthEnd;
        let args = CalculateArgs {
            json: true,
            ..args("2015-01-30")
        };

        let json: serde_json::Value = serde_json::from_str(&output(&args, &config)).unwrap();
        assert_eq!(json["leave_scd"], "2015-01-31");
    }

    #[test]
    fn calculate_rejects_reversed_military_period() {
        let args = CalculateArgs {
            military: vec!["2012-01-01..2010-01-01".to_string()],
            ..args("2015-01-01")
        };

        let err = run(&mut Vec::<u8>::new(), &args, &Config::default()).unwrap_err();
        let err = err.downcast::<ScdError>().unwrap();
        assert!(matches!(
            err,
            ScdError::Validation(ValidationError::InvalidRange {
                input: InputRef::Military(1),
                ..
            })
        ));
    }

    #[test]
    fn calculate_rejects_fractional_rating() {
        let args = CalculateArgs {
            performance: 2.5,
            ..args("2015-01-01")
        };

        let err = run(&mut Vec::<u8>::new(), &args, &Config::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "calculation input: invalid performance rating \"2.5\": must be a whole number"
        );
    }
}
