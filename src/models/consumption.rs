//! Annual consumption bracket

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Lower volume anchor in kWh per year (2 GWh)
pub const LOWER_ANCHOR_KWH: f64 = 2_000_000.0;

/// Upper volume anchor in kWh per year (10 GWh)
pub const UPPER_ANCHOR_KWH: f64 = 10_000_000.0;

/// Coarse annual energy-volume category used to scale absolute savings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionBracket {
    /// Less than 2 GWh per year
    UnderTwoGwh,
    /// Between 2 and 10 GWh per year
    TwoToTenGwh,
    /// More than 10 GWh per year
    OverTenGwh,
}

impl ConsumptionBracket {
    /// All brackets, in tile order
    pub const ALL: [ConsumptionBracket; 3] = [
        ConsumptionBracket::UnderTwoGwh,
        ConsumptionBracket::TwoToTenGwh,
        ConsumptionBracket::OverTenGwh,
    ];

    /// Parse a bracket from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(' ', "").as_str() {
            "<2" | "<2gwh" | "lt2" | "small" => Some(Self::UnderTwoGwh),
            "2-10" | "2–10" | "2-10gwh" | "2–10gwh" | "medium" => Some(Self::TwoToTenGwh),
            ">10" | ">10gwh" | "gt10" | "large" => Some(Self::OverTenGwh),
            _ => None,
        }
    }
}

impl fmt::Display for ConsumptionBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderTwoGwh => write!(f, "<2 GWh"),
            Self::TwoToTenGwh => write!(f, "2–10 GWh"),
            Self::OverTenGwh => write!(f, ">10 GWh"),
        }
    }
}

impl FromStr for ConsumptionBracket {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            CalcError::Validation(format!(
                "unknown consumption bracket '{}', expected <2, 2-10 or >10",
                s
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(ConsumptionBracket::parse("<2 GWh"), Some(ConsumptionBracket::UnderTwoGwh));
        assert_eq!(ConsumptionBracket::parse("2-10"), Some(ConsumptionBracket::TwoToTenGwh));
        assert_eq!(ConsumptionBracket::parse("GT10"), Some(ConsumptionBracket::OverTenGwh));
        assert_eq!(ConsumptionBracket::parse("huge"), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for bracket in ConsumptionBracket::ALL {
            assert_eq!(ConsumptionBracket::parse(&bracket.to_string()), Some(bracket));
        }
    }
}
