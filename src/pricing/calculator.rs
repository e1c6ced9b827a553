//! Quote computation
//!
//! A pure function of the selections plus one jitter factor. It cannot fail:
//! a missing year falls back to the 2026 base, and a unit price of zero
//! produces a non-finite savings percentage instead of an error.

use tracing::{info, warn};

use crate::models::consumption::{LOWER_ANCHOR_KWH, UPPER_ANCHOR_KWH};
use crate::models::{ConsumptionBracket, PriceQuote, SavingsRange, Selections, Year};

use super::jitter::JitterSource;

/// Base reference price per kWh for a procurement year
///
/// `None` only happens when selections were set programmatically; it falls
/// back to the 2026 price.
pub fn base_reference_price(year: Option<Year>) -> f64 {
    match year {
        Some(Year::Y2027) => 0.072,
        Some(Year::Y2028) => 0.069,
        Some(Year::Y2026) | None => 0.078,
    }
}

/// Annual savings range for a per-kWh saving of `diff`
///
/// Without a bracket the range collapses to zero.
pub fn savings_range(bracket: Option<ConsumptionBracket>, diff: f64) -> SavingsRange {
    match bracket {
        Some(ConsumptionBracket::UnderTwoGwh) => SavingsRange::bounded(0.0, diff * LOWER_ANCHOR_KWH),
        Some(ConsumptionBracket::TwoToTenGwh) => {
            SavingsRange::bounded(diff * LOWER_ANCHOR_KWH, diff * UPPER_ANCHOR_KWH)
        }
        Some(ConsumptionBracket::OverTenGwh) => SavingsRange::open(diff * UPPER_ANCHOR_KWH),
        None => SavingsRange::bounded(0.0, 0.0),
    }
}

/// Compute a quote from the current selections
pub fn compute_quote<J>(selections: &Selections, jitter: &mut J) -> PriceQuote
where
    J: JitterSource + ?Sized,
{
    if selections.year.is_none() {
        warn!("No procurement year selected, using the 2026 base price");
    }

    let base = base_reference_price(selections.year);
    let factor = jitter.factor();
    let discounted_price = base * factor;

    let unit_price = selections.unit_price;
    // Unguarded: a zero slider yields -inf (or NaN) here
    let savings_percent = (unit_price.value() - discounted_price) / unit_price.value();
    let diff = unit_price.value() - discounted_price;
    let total_savings = savings_range(selections.consumption, diff);

    info!(
        year = ?selections.year,
        consumption = ?selections.consumption,
        unit_price = unit_price.value(),
        factor,
        discounted_price,
        savings_percent,
        "Computed price quote"
    );

    PriceQuote {
        year: selections.year,
        consumption: selections.consumption,
        shift: selections.shift,
        unit_price,
        discounted_price,
        savings_percent,
        total_savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftModel, UnitPrice};
    use crate::pricing::jitter::{FixedJitter, RandomJitter, JITTER_MAX, JITTER_MIN};

    fn selections(year: Year, bracket: ConsumptionBracket, price: f64) -> Selections {
        Selections {
            year: Some(year),
            consumption: Some(bracket),
            shift: Some(ShiftModel::TwoShift),
            unit_price: UnitPrice::try_new(price).unwrap(),
        }
    }

    #[test]
    fn test_base_prices() {
        assert_eq!(base_reference_price(Some(Year::Y2026)), 0.078);
        assert_eq!(base_reference_price(Some(Year::Y2027)), 0.072);
        assert_eq!(base_reference_price(Some(Year::Y2028)), 0.069);
        assert_eq!(base_reference_price(None), 0.078);
    }

    #[test]
    fn test_quote_with_neutral_jitter() {
        let s = selections(Year::Y2027, ConsumptionBracket::TwoToTenGwh, 0.20);
        let quote = compute_quote(&s, &mut FixedJitter::neutral());

        assert_eq!(quote.discounted_price, 0.072);
        assert!((quote.savings_percent - 0.64).abs() < 1e-9);
        assert_eq!(quote.shift, Some(ShiftModel::TwoShift));
    }

    #[test]
    fn test_savings_range_small_bracket() {
        let range = savings_range(Some(ConsumptionBracket::UnderTwoGwh), 0.01);
        assert_eq!(range, SavingsRange::bounded(0.0, 20_000.0));
    }

    #[test]
    fn test_savings_range_medium_bracket() {
        let range = savings_range(Some(ConsumptionBracket::TwoToTenGwh), 0.01);
        assert_eq!(range, SavingsRange::bounded(20_000.0, 100_000.0));
    }

    #[test]
    fn test_savings_range_large_bracket_is_open() {
        let range = savings_range(Some(ConsumptionBracket::OverTenGwh), 0.01);
        assert_eq!(range.min, 100_000.0);
        assert!(range.is_unbounded());
    }

    #[test]
    fn test_savings_range_without_bracket() {
        assert_eq!(savings_range(None, 0.5), SavingsRange::bounded(0.0, 0.0));
    }

    #[test]
    fn test_negative_diff_is_not_prevented() {
        let s = selections(Year::Y2026, ConsumptionBracket::UnderTwoGwh, 0.05);
        let quote = compute_quote(&s, &mut FixedJitter::neutral());

        assert!(quote.savings_percent < 0.0);
        assert!(!quote.is_saving());
        assert_eq!(quote.total_savings.min, 0.0);
        assert!(quote.total_savings.max.unwrap() < 0.0);
    }

    #[test]
    fn test_zero_unit_price_gives_non_finite_percent() {
        let s = selections(Year::Y2028, ConsumptionBracket::OverTenGwh, 0.0);
        let quote = compute_quote(&s, &mut FixedJitter::neutral());

        assert!(!quote.savings_percent.is_finite());
        assert_eq!(quote.savings_percent_label(), "–");
    }

    #[test]
    fn test_missing_year_falls_back_to_2026() {
        let s = Selections {
            year: None,
            ..selections(Year::Y2027, ConsumptionBracket::UnderTwoGwh, 0.20)
        };
        let quote = compute_quote(&s, &mut FixedJitter::neutral());
        assert_eq!(quote.discounted_price, 0.078);
        assert_eq!(quote.year, None);
    }

    #[test]
    fn test_random_jitter_stays_within_three_percent() {
        let s = selections(Year::Y2027, ConsumptionBracket::UnderTwoGwh, 0.20);
        let mut jitter = RandomJitter::seeded(2027);
        for _ in 0..100 {
            let quote = compute_quote(&s, &mut jitter);
            assert!(quote.discounted_price >= 0.072 * JITTER_MIN - 1e-12);
            assert!(quote.discounted_price <= 0.072 * JITTER_MAX + 1e-12);
        }
    }
}
