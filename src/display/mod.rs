//! Display formatting for terminal output
//!
//! Plain-text rendering used by the one-shot `quote` command.

pub mod quote;

pub use quote::format_quote;
