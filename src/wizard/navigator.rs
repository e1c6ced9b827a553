//! Step navigator
//!
//! Holds the selections and the current step, guards forward transitions,
//! and computes the quote when the user leaves the price slider.

use tracing::debug;

use crate::error::{CalcError, CalcResult, SelectionField};
use crate::models::{ConsumptionBracket, PriceQuote, Selections, ShiftModel, UnitPrice, Year};
use crate::pricing::{compute_quote, JitterSource, RandomJitter};

use super::step::Step;

/// The pricing wizard state machine
pub struct Wizard<J = RandomJitter> {
    step: Step,
    selections: Selections,
    jitter: J,
    calculations: usize,
}

impl Wizard<RandomJitter> {
    /// Create a wizard with entropy-seeded jitter
    pub fn new() -> Self {
        Self::with_jitter(RandomJitter::from_entropy())
    }
}

impl Default for Wizard<RandomJitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J: JitterSource> Wizard<J> {
    /// Create a wizard with a specific jitter source
    pub fn with_jitter(jitter: J) -> Self {
        Self::with_selections(Selections::default(), jitter)
    }

    /// Create a wizard at the first step with preset selections
    ///
    /// The guards still apply when advancing, but nothing stops the caller
    /// from handing in selections that the UI could not produce.
    pub fn with_selections(selections: Selections, jitter: J) -> Self {
        Self {
            step: Step::Year,
            selections,
            jitter,
            calculations: 0,
        }
    }

    /// Current step
    pub fn step(&self) -> &Step {
        &self.step
    }

    /// Selections made so far
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// The quote shown on the result step, if there
    pub fn quote(&self) -> Option<&PriceQuote> {
        self.step.quote()
    }

    /// Number of quotes computed by this wizard
    pub fn calculations(&self) -> usize {
        self.calculations
    }

    /// Move one step forward
    ///
    /// Steps 0 to 2 fail with [`CalcError::MissingSelection`] and leave the
    /// wizard untouched if their selection is unset. Leaving step 3 computes
    /// the quote. On the result step this is a no-op.
    pub fn advance(&mut self) -> CalcResult<&Step> {
        if let Some(field) = self.step.required_field() {
            self.require(field)?;
        }

        let next = match self.step {
            Step::Year => Step::Consumption,
            Step::Consumption => Step::Shift,
            Step::Shift => Step::UnitPrice,
            Step::UnitPrice => {
                let quote = compute_quote(&self.selections, &mut self.jitter);
                self.calculations += 1;
                Step::Result(quote)
            }
            Step::Result(_) => return Ok(&self.step),
        };

        debug!(from = self.step.index(), to = next.index(), "Advancing wizard");
        self.step = next;
        Ok(&self.step)
    }

    /// Move one step back; a no-op on the first step
    pub fn retreat(&mut self) -> &Step {
        let previous = match self.step {
            Step::Year => return &self.step,
            Step::Consumption => Step::Year,
            Step::Shift => Step::Consumption,
            Step::UnitPrice => Step::Shift,
            Step::Result(_) => Step::UnitPrice,
        };

        debug!(from = self.step.index(), to = previous.index(), "Retreating wizard");
        self.step = previous;
        &self.step
    }

    /// Select the year; only applies on the year step
    pub fn select_year(&mut self, year: Year) -> bool {
        if !matches!(self.step, Step::Year) {
            return false;
        }
        self.selections.year = Some(year);
        true
    }

    /// Select the consumption bracket; only applies on the consumption step
    pub fn select_consumption(&mut self, bracket: ConsumptionBracket) -> bool {
        if !matches!(self.step, Step::Consumption) {
            return false;
        }
        self.selections.consumption = Some(bracket);
        true
    }

    /// Select the shift model; only applies on the shift step
    pub fn select_shift(&mut self, shift: ShiftModel) -> bool {
        if !matches!(self.step, Step::Shift) {
            return false;
        }
        self.selections.shift = Some(shift);
        true
    }

    /// Set the unit price; only applies on the slider step
    pub fn set_unit_price(&mut self, price: UnitPrice) -> bool {
        if !matches!(self.step, Step::UnitPrice) {
            return false;
        }
        self.selections.unit_price = price;
        true
    }

    /// Move the slider by `delta`; only applies on the slider step
    pub fn nudge_unit_price(&mut self, delta: f64) -> bool {
        let next = self.selections.unit_price.nudged(delta);
        self.set_unit_price(next)
    }

    fn require(&self, field: SelectionField) -> CalcResult<()> {
        if self.selections.is_selected(field) {
            Ok(())
        } else {
            debug!(step = self.step.index(), ?field, "Blocked advance, selection missing");
            Err(CalcError::MissingSelection(field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::FixedJitter;

    fn wizard() -> Wizard<FixedJitter> {
        Wizard::with_jitter(FixedJitter::neutral())
    }

    /// Drive a wizard to the slider step with the given choices
    fn at_slider(year: Year, bracket: ConsumptionBracket) -> Wizard<FixedJitter> {
        let mut w = wizard();
        assert!(w.select_year(year));
        w.advance().unwrap();
        assert!(w.select_consumption(bracket));
        w.advance().unwrap();
        assert!(w.select_shift(ShiftModel::OneShift));
        w.advance().unwrap();
        w
    }

    #[test]
    fn test_starts_at_year_step() {
        let w = wizard();
        assert_eq!(w.step(), &Step::Year);
        assert_eq!(w.selections().unit_price, UnitPrice::default());
        assert!(w.quote().is_none());
    }

    #[test]
    fn test_advance_blocked_without_selection() {
        let mut w = wizard();
        let err = w.advance().unwrap_err();
        assert!(matches!(err, CalcError::MissingSelection(SelectionField::Year)));
        assert_eq!(err.to_string(), "Please select a year");
        assert_eq!(w.step().index(), 0);

        w.select_year(Year::Y2026);
        w.advance().unwrap();
        let err = w.advance().unwrap_err();
        assert_eq!(err.to_string(), "Please select a consumption bracket");
        assert_eq!(w.step().index(), 1);

        w.select_consumption(ConsumptionBracket::TwoToTenGwh);
        w.advance().unwrap();
        let err = w.advance().unwrap_err();
        assert_eq!(err.to_string(), "Please select a shift model");
        assert_eq!(w.step().index(), 2);
    }

    #[test]
    fn test_advance_from_slider_computes_exactly_once() {
        let mut w = at_slider(Year::Y2027, ConsumptionBracket::TwoToTenGwh);
        assert_eq!(w.calculations(), 0);

        let step = w.advance().unwrap();
        assert!(step.is_result());
        assert_eq!(w.calculations(), 1);

        let quote = w.quote().unwrap();
        assert_eq!(quote.discounted_price, 0.072);
        assert!((quote.savings_percent - 0.64).abs() < 1e-9);
    }

    #[test]
    fn test_result_step_has_no_forward_transition() {
        let mut w = at_slider(Year::Y2028, ConsumptionBracket::OverTenGwh);
        w.advance().unwrap();
        let before = w.quote().cloned();

        w.advance().unwrap();
        assert_eq!(w.step().index(), 4);
        assert_eq!(w.calculations(), 1);
        assert_eq!(w.quote().cloned(), before);
    }

    #[test]
    fn test_retreat() {
        let mut w = wizard();
        assert_eq!(w.retreat(), &Step::Year);

        let mut w = at_slider(Year::Y2026, ConsumptionBracket::UnderTwoGwh);
        w.advance().unwrap();
        for expected in (0..4).rev() {
            assert_eq!(w.retreat().index(), expected);
        }
        assert_eq!(w.retreat().index(), 0);
    }

    #[test]
    fn test_retreat_keeps_selections() {
        let mut w = wizard();
        w.select_year(Year::Y2028);
        w.advance().unwrap();
        w.retreat();
        assert_eq!(w.selections().year, Some(Year::Y2028));
        // Already selected, so no alert this time
        assert!(w.advance().is_ok());
    }

    #[test]
    fn test_recalculates_after_returning_to_slider() {
        let mut w = at_slider(Year::Y2027, ConsumptionBracket::UnderTwoGwh);
        w.advance().unwrap();
        w.retreat();
        assert!(w.quote().is_none());
        w.advance().unwrap();
        assert_eq!(w.calculations(), 2);
    }

    #[test]
    fn test_selection_only_on_own_step() {
        let mut w = wizard();
        assert!(!w.select_consumption(ConsumptionBracket::OverTenGwh));
        assert!(!w.select_shift(ShiftModel::TwoShift));
        assert!(!w.nudge_unit_price(0.01));
        assert!(w.selections().consumption.is_none());

        let mut w = at_slider(Year::Y2026, ConsumptionBracket::UnderTwoGwh);
        assert!(!w.select_year(Year::Y2027));
        assert!(w.nudge_unit_price(0.05));
        assert_eq!(w.selections().unit_price.value(), 0.25);
    }

    #[test]
    fn test_reselect_on_same_step() {
        let mut w = wizard();
        w.select_year(Year::Y2026);
        w.select_year(Year::Y2028);
        assert_eq!(w.selections().year, Some(Year::Y2028));
    }

    #[test]
    fn test_zero_price_reaches_result() {
        let mut w = at_slider(Year::Y2027, ConsumptionBracket::UnderTwoGwh);
        assert!(w.set_unit_price(UnitPrice::try_new(0.0).unwrap()));
        w.advance().unwrap();
        assert!(!w.quote().unwrap().savings_percent.is_finite());
    }
}
