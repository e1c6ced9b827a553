//! Computed price quote
//!
//! The result of one pricing computation, together with the inputs it was
//! computed from.

use serde::{Deserialize, Serialize};

use super::consumption::ConsumptionBracket;
use super::format::{format_ct_per_kwh, format_euros, format_percent};
use super::price::UnitPrice;
use super::shift::ShiftModel;
use super::year::Year;

/// Annual savings range in currency units
///
/// `max == None` means the range is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl SavingsRange {
    /// A closed range
    pub const fn bounded(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// A range without upper bound
    pub const fn open(min: f64) -> Self {
        Self { min, max: None }
    }

    /// Check if the range has no upper bound
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Render the range for display, e.g. "20.000 € – 100.000 €"
    pub fn describe(&self) -> String {
        match self.max {
            None => format!("ab {} €", format_euros(self.min)),
            Some(max) if self.min == 0.0 => format!("bis {} €", format_euros(max)),
            Some(max) => format!("{} € – {} €", format_euros(self.min), format_euros(max)),
        }
    }
}

/// Result of a pricing computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Selected procurement year (`None` if the computation used the fallback)
    pub year: Option<Year>,
    /// Selected consumption bracket
    pub consumption: Option<ConsumptionBracket>,
    /// Selected shift model, carried along for display only
    pub shift: Option<ShiftModel>,
    /// Unit price entered by the user
    pub unit_price: UnitPrice,
    /// Computed price per kWh under the offered plan
    pub discounted_price: f64,
    /// Fractional saving; non-finite when the unit price is zero
    pub savings_percent: f64,
    /// Annual savings range
    pub total_savings: SavingsRange,
}

impl PriceQuote {
    /// Per-kWh difference between the user's price and the computed price
    pub fn per_unit_saving(&self) -> f64 {
        self.unit_price.value() - self.discounted_price
    }

    /// Check if the computed price undercuts the user's price
    pub fn is_saving(&self) -> bool {
        self.per_unit_saving() > 0.0
    }

    /// Discounted price in ct/kWh, e.g. "7,2"
    pub fn discounted_price_label(&self) -> String {
        format_ct_per_kwh(self.discounted_price)
    }

    /// Savings percentage, e.g. "64,0"
    pub fn savings_percent_label(&self) -> String {
        format_percent(self.savings_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_ranges() {
        assert_eq!(SavingsRange::bounded(0.0, 20_000.0).describe(), "bis 20.000 €");
        assert_eq!(
            SavingsRange::bounded(20_000.0, 100_000.0).describe(),
            "20.000 € – 100.000 €"
        );
        assert_eq!(SavingsRange::open(100_000.0).describe(), "ab 100.000 €");
    }

    #[test]
    fn test_labels() {
        let quote = PriceQuote {
            year: Some(Year::Y2027),
            consumption: Some(ConsumptionBracket::UnderTwoGwh),
            shift: Some(ShiftModel::OneShift),
            unit_price: UnitPrice::default(),
            discounted_price: 0.0715,
            savings_percent: 0.6431,
            total_savings: SavingsRange::bounded(0.0, 257_000.0),
        };
        assert_eq!(quote.discounted_price_label(), "7,2");
        assert_eq!(quote.savings_percent_label(), "64,3");
        assert!(quote.is_saving());
    }

    #[test]
    fn test_unbounded_range_serializes_null_max() {
        let json = serde_json::to_value(SavingsRange::open(5.0)).unwrap();
        assert_eq!(json["max"], serde_json::Value::Null);
    }
}
