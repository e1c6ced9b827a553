//! User settings for the calculator
//!
//! Everything here is presentation or ambient configuration; the price
//! formula itself is fixed.

use serde::{Deserialize, Serialize};

use super::paths::CalcPaths;
use crate::error::CalcError;
use crate::models::UnitPrice;

/// Settings stored in `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Link shown on the result step for requesting a demo
    #[serde(default = "default_demo_url")]
    pub demo_url: String,

    /// Slider position when the wizard opens, in currency per kWh
    #[serde(default = "default_unit_price")]
    pub default_unit_price: f64,

    /// Slider increment per arrow key, in currency per kWh
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,

    /// Event loop tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_demo_url() -> String {
    "https://www.ecoplanet.tech/demo".to_string()
}

fn default_unit_price() -> f64 {
    UnitPrice::DEFAULT
}

fn default_slider_step() -> f64 {
    0.01
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            demo_url: default_demo_url(),
            default_unit_price: default_unit_price(),
            slider_step: default_slider_step(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &CalcPaths) -> Result<Self, CalcError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CalcError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| CalcError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CalcPaths) -> Result<(), CalcError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CalcError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CalcError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the wizard cannot work with
    pub fn validate(&self) -> Result<(), CalcError> {
        if !(self.slider_step.is_finite() && self.slider_step > 0.0) {
            return Err(CalcError::Config(format!(
                "slider_step must be positive, got {}",
                self.slider_step
            )));
        }
        if self.tick_rate_ms == 0 {
            return Err(CalcError::Config("tick_rate_ms must be at least 1".into()));
        }
        if self.demo_url.trim().is_empty() {
            return Err(CalcError::Config("demo_url must not be empty".into()));
        }
        Ok(())
    }

    /// Initial slider position, clamped into the slider range
    pub fn initial_unit_price(&self) -> UnitPrice {
        UnitPrice::clamped(self.default_unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_unit_price, 0.20);
        assert_eq!(settings.slider_step, 0.01);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CalcPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CalcPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_unit_price: 0.31,
            slider_step: 0.005,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_unit_price, 0.31);
        assert_eq!(loaded.slider_step, 0.005);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CalcPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"demo_url": "https://example.com"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.demo_url, "https://example.com");
        assert_eq!(loaded.tick_rate_ms, 250);
    }

    #[test]
    fn test_invalid_slider_step_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CalcPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"slider_step": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));
    }

    #[test]
    fn test_initial_unit_price_is_clamped() {
        let settings = Settings {
            default_unit_price: 1.5,
            ..Settings::default()
        };
        assert_eq!(settings.initial_unit_price().value(), UnitPrice::MAX);
    }
}
