//! Wizard steps
//!
//! The five positions of the wizard as a tagged enum. Only the final step
//! carries data: the quote computed when it was entered.

use std::fmt;

use crate::error::SelectionField;
use crate::models::PriceQuote;

/// Number of steps, including the result step
pub const STEP_COUNT: usize = 5;

/// Current position of the wizard
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Choose the procurement year
    Year,
    /// Choose the consumption bracket
    Consumption,
    /// Choose the shift model
    Shift,
    /// Adjust the unit price slider
    UnitPrice,
    /// Show the computed quote
    Result(PriceQuote),
}

impl Step {
    /// Zero-based position, 0 to 4
    pub fn index(&self) -> usize {
        match self {
            Self::Year => 0,
            Self::Consumption => 1,
            Self::Shift => 2,
            Self::UnitPrice => 3,
            Self::Result(_) => 4,
        }
    }

    /// Heading shown above the step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Year => "Procurement year",
            Self::Consumption => "Annual consumption",
            Self::Shift => "Shift model",
            Self::UnitPrice => "Current price per kWh",
            Self::Result(_) => "Your estimate",
        }
    }

    /// The selection that must be made before leaving this step
    pub fn required_field(&self) -> Option<SelectionField> {
        match self {
            Self::Year => Some(SelectionField::Year),
            Self::Consumption => Some(SelectionField::Consumption),
            Self::Shift => Some(SelectionField::Shift),
            Self::UnitPrice | Self::Result(_) => None,
        }
    }

    /// Check if this is the first step (no way back)
    pub fn is_first(&self) -> bool {
        matches!(self, Self::Year)
    }

    /// Check if this is the result step (no way forward)
    pub fn is_result(&self) -> bool {
        matches!(self, Self::Result(_))
    }

    /// The quote, if this is the result step
    pub fn quote(&self) -> Option<&PriceQuote> {
        match self {
            Self::Result(quote) => Some(quote),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.index() + 1, STEP_COUNT)
    }
}
