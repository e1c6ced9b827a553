//! Procurement year selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Year in which the energy is procured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Year {
    #[serde(rename = "2026")]
    Y2026,
    #[serde(rename = "2027")]
    Y2027,
    #[serde(rename = "2028")]
    Y2028,
}

impl Year {
    /// All selectable years, in tile order
    pub const ALL: [Year; 3] = [Year::Y2026, Year::Y2027, Year::Y2028];

    /// Calendar year as a number
    pub const fn number(&self) -> u16 {
        match self {
            Self::Y2026 => 2026,
            Self::Y2027 => 2027,
            Self::Y2028 => 2028,
        }
    }

    /// Parse a year from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "2026" | "26" => Some(Self::Y2026),
            "2027" | "27" => Some(Self::Y2027),
            "2028" | "28" => Some(Self::Y2028),
            _ => None,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Year {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            CalcError::Validation(format!("unknown year '{}', expected 2026, 2027 or 2028", s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Year::parse("2027"), Some(Year::Y2027));
        assert_eq!(Year::parse(" 28 "), Some(Year::Y2028));
        assert_eq!(Year::parse("2029"), None);
        assert!("2025".parse::<Year>().is_err());
    }

    #[test]
    fn test_serde_uses_calendar_year() {
        let json = serde_json::to_string(&Year::Y2026).unwrap();
        assert_eq!(json, "\"2026\"");
        let back: Year = serde_json::from_str("\"2028\"").unwrap();
        assert_eq!(back, Year::Y2028);
    }
}
