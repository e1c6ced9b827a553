//! CLI command handlers
//!
//! Bridges clap argument parsing with the wizard and the exporters.

pub mod quote;

pub use quote::{compute_from_args, handle_quote_command, QuoteArgs};
