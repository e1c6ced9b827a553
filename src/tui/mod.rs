//! Terminal User Interface module
//!
//! The interactive price panel: a five-step wizard rendered with ratatui,
//! with option tiles, a price slider and a result card.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
