//! Reusable widgets for the TUI

pub mod option_tile;

pub use option_tile::OptionTile;
