//! Selections collected by the wizard

use serde::{Deserialize, Serialize};

use crate::error::SelectionField;

use super::consumption::ConsumptionBracket;
use super::price::UnitPrice;
use super::shift::ShiftModel;
use super::year::Year;

/// Everything the user has chosen so far
///
/// Choices stay in place when the user navigates back, so returning to a step
/// shows the earlier pick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Selections {
    pub year: Option<Year>,
    pub consumption: Option<ConsumptionBracket>,
    pub shift: Option<ShiftModel>,
    pub unit_price: UnitPrice,
}

impl Selections {
    /// Start with nothing selected and the slider at `unit_price`
    pub fn with_unit_price(unit_price: UnitPrice) -> Self {
        Self {
            unit_price,
            ..Self::default()
        }
    }

    /// Check if the given tile selection has been made
    pub fn is_selected(&self, field: SelectionField) -> bool {
        match field {
            SelectionField::Year => self.year.is_some(),
            SelectionField::Consumption => self.consumption.is_some(),
            SelectionField::Shift => self.shift.is_some(),
        }
    }
}
