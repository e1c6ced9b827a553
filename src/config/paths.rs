//! Path management for the calculator
//!
//! Resolves where the settings file and the log file live.
//!
//! ## Path Resolution Order
//!
//! 1. `ECOCALC_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ecoplanet-calc` or `~/.config/ecoplanet-calc`
//! 3. Windows: `%APPDATA%\ecoplanet-calc`

use std::path::PathBuf;

use crate::error::CalcError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "ECOCALC_CONFIG_DIR";

/// Manages all paths used by the calculator
#[derive(Debug, Clone)]
pub struct CalcPaths {
    base_dir: PathBuf,
}

impl CalcPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be
    /// determined.
    pub fn new() -> Result<Self, CalcError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("ecocalc.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CalcError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CalcError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default config directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CalcError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                CalcError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("ecoplanet-calc"))
}

/// Resolve the default config directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CalcError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CalcError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ecoplanet-calc"))
}
