//! Configuration module
//!
//! Path resolution and the settings file.

pub mod paths;
pub mod settings;

pub use paths::CalcPaths;
pub use settings::Settings;
