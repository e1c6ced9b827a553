//! Shift model selection
//!
//! Collected for lead qualification only; it does not enter the price formula.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Operational shift pattern of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftModel {
    OneShift,
    TwoShift,
    ThreeShift,
}

impl ShiftModel {
    /// All shift models, in tile order
    pub const ALL: [ShiftModel; 3] = [
        ShiftModel::OneShift,
        ShiftModel::TwoShift,
        ShiftModel::ThreeShift,
    ];

    /// Number of shifts per day
    pub const fn shifts(&self) -> u8 {
        match self {
            Self::OneShift => 1,
            Self::TwoShift => 2,
            Self::ThreeShift => 3,
        }
    }

    /// Parse a shift model from user input
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        let count = lowered.strip_suffix("-shift").unwrap_or(lowered.as_str());
        match count {
            "1" | "one" => Some(Self::OneShift),
            "2" | "two" => Some(Self::TwoShift),
            "3" | "three" => Some(Self::ThreeShift),
            _ => None,
        }
    }
}

impl fmt::Display for ShiftModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-shift", self.shifts())
    }
}

impl FromStr for ShiftModel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            CalcError::Validation(format!("unknown shift model '{}', expected 1, 2 or 3", s))
        })
    }
}
