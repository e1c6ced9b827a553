//! Pricing computation
//!
//! Turns the wizard's selections into a [`PriceQuote`](crate::models::PriceQuote).

pub mod calculator;
pub mod jitter;

pub use calculator::{base_reference_price, compute_quote, savings_range};
pub use jitter::{FixedJitter, JitterSource, RandomJitter};
