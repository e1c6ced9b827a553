//! TUI Dialogs
//!
//! Modal overlays drawn on top of the panel.

pub mod alert;
pub mod help;
