//! ecoplanet-calc - Interactive electricity price calculator
//!
//! This library provides the core of the ecoplanet price panel: a five-step
//! wizard that collects a procurement year, a consumption bracket, a shift
//! model and the customer's current unit price, and then estimates the price
//! per kWh ecoplanet could offer together with the expected annual savings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Selection enums, unit price, quote and number formatting
//! - `pricing`: Price estimate and the randomization seam
//! - `wizard`: Step state machine with its guarded transitions
//! - `display`: Plain-text quote summary
//! - `export`: JSON and YAML quote export
//! - `cli`: One-shot command handlers
//! - `tui`: Interactive terminal panel
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use ecoplanet_calc::models::{ConsumptionBracket, ShiftModel, Year};
//! use ecoplanet_calc::pricing::FixedJitter;
//! use ecoplanet_calc::wizard::Wizard;
//!
//! let mut wizard = Wizard::with_jitter(FixedJitter::neutral());
//! wizard.select_year(Year::Y2027);
//! wizard.advance()?;
//! wizard.select_consumption(ConsumptionBracket::UnderTwoGwh);
//! wizard.advance()?;
//! wizard.select_shift(ShiftModel::OneShift);
//! wizard.advance()?;
//! wizard.advance()?;
//!
//! let quote = wizard.quote().unwrap();
//! assert_eq!(quote.discounted_price_label(), "7,2");
//! # Ok::<(), ecoplanet_calc::CalcError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod tui;
pub mod wizard;

pub use error::{CalcError, CalcResult};
