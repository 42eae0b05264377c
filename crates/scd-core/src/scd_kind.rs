//! The four computed dates, as the single source of truth for their names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A kind of service computation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScdKind {
    Leave,
    Retirement,
    Tsp,
    Rif,
}

impl ScdKind {
    /// All kinds, in report order.
    pub const ALL: [Self; 4] = [Self::Leave, Self::Retirement, Self::Tsp, Self::Rif];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Leave => "Leave SCD",
            Self::Retirement => "Retirement SCD",
            Self::Tsp => "TSP Vesting Date",
            Self::Rif => "RIF SCD",
        }
    }

    /// What drives the date, for display next to it.
    pub const fn key_factors(self) -> &'static str {
        match self {
            Self::Leave => "Includes all military service periods",
            Self::Retirement => "Military buyback + LWOP adjustments",
            Self::Tsp => "3 years civilian service",
            Self::Rif => "Performance credit applied",
        }
    }
}

impl fmt::Display for ScdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Leave => "leave",
            Self::Retirement => "retirement",
            Self::Tsp => "tsp",
            Self::Rif => "rif",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ScdKind {
    type Err = UnknownScdKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leave" => Ok(Self::Leave),
            "retirement" => Ok(Self::Retirement),
            "tsp" => Ok(Self::Tsp),
            "rif" => Ok(Self::Rif),
            _ => Err(UnknownScdKind(s.to_string())),
        }
    }
}

impl Serialize for ScdKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ScdKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown SCD kind strings.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown SCD kind: {0}")]
pub struct UnknownScdKind(String);
