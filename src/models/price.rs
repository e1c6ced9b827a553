//! Unit price per kWh
//!
//! The value behind the price slider. Stored as a plain `f64` in currency
//! units per kWh (0.20 = 20 ct/kWh).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

use super::format::format_ct_per_kwh;

/// A user-supplied price per kWh, always within `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitPrice(f64);

impl UnitPrice {
    /// Lower slider bound
    pub const MIN: f64 = 0.0;

    /// Upper slider bound
    pub const MAX: f64 = 0.40;

    /// Slider position when the wizard opens
    pub const DEFAULT: f64 = 0.20;

    /// Create a unit price, rejecting values outside the slider range
    pub fn try_new(value: f64) -> CalcResult<Self> {
        if !value.is_finite() {
            return Err(CalcError::Validation(format!(
                "unit price must be a finite number, got {}",
                value
            )));
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(CalcError::Validation(format!(
                "unit price must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create a unit price, clamping into the slider range
    ///
    /// Non-finite input falls back to the default position.
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self(Self::DEFAULT)
        }
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the slider sits at zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Move the price by `delta`, staying within the slider range
    pub fn nudged(&self, delta: f64) -> Self {
        // Snap to 1/10000 so repeated nudges do not accumulate float noise
        let next = ((self.0 + delta) * 10_000.0).round() / 10_000.0;
        Self::clamped(next)
    }

    /// Position within the slider range as a fraction in `[0, 1]`
    pub fn ratio(&self) -> f64 {
        (self.0 - Self::MIN) / (Self::MAX - Self::MIN)
    }
}

impl Default for UnitPrice {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ct/kWh", format_ct_per_kwh(self.0))
    }
}

impl FromStr for UnitPrice {
    type Err = CalcError;

    /// Accepts "0.20" as well as "0,20"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(',', ".");
        let value: f64 = normalized
            .parse()
            .map_err(|_| CalcError::Validation(format!("invalid unit price '{}'", s)))?;
        Self::try_new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(UnitPrice::default().value(), 0.20);
    }

    #[test]
    fn test_try_new_bounds() {
        assert!(UnitPrice::try_new(0.0).is_ok());
        assert!(UnitPrice::try_new(0.40).is_ok());
        assert!(UnitPrice::try_new(0.41).is_err());
        assert!(UnitPrice::try_new(-0.01).is_err());
        assert!(UnitPrice::try_new(f64::NAN).is_err());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(UnitPrice::clamped(0.9).value(), 0.40);
        assert_eq!(UnitPrice::clamped(-1.0).value(), 0.0);
        assert_eq!(UnitPrice::clamped(f64::INFINITY).value(), 0.20);
    }

    #[test]
    fn test_nudged_stays_in_range() {
        let price = UnitPrice::try_new(0.39).unwrap();
        assert_eq!(price.nudged(0.05).value(), 0.40);

        let mut price = UnitPrice::default();
        for _ in 0..3 {
            price = price.nudged(0.01);
        }
        assert_eq!(price.value(), 0.23);
    }

    #[test]
    fn test_parse_with_comma() {
        let price: UnitPrice = "0,25".parse().unwrap();
        assert_eq!(price.value(), 0.25);
        assert!("abc".parse::<UnitPrice>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(UnitPrice::default().to_string(), "20,0 ct/kWh");
    }
}
