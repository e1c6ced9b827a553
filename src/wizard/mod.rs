//! Multi-step pricing wizard
//!
//! Linear flow: year, consumption, shift, price slider, result. Each of the
//! first three steps blocks until its selection is made.

pub mod navigator;
pub mod step;

pub use navigator::Wizard;
pub use step::{Step, STEP_COUNT};
