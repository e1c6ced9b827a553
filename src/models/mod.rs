//! Core data models for the pricing calculator
//!
//! Selections the user makes in the wizard, the slider value, and the quote
//! computed from them.

pub mod consumption;
pub mod format;
pub mod price;
pub mod quote;
pub mod selection;
pub mod shift;
pub mod year;

pub use consumption::ConsumptionBracket;
pub use price::UnitPrice;
pub use quote::{PriceQuote, SavingsRange};
pub use selection::Selections;
pub use shift::ShiftModel;
pub use year::Year;
