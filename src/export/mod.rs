//! Quote export
//!
//! Serializes a computed quote for machine consumption:
//! - JSON: compact, for scripts
//! - YAML: human-readable, with a comment header

pub mod json;
pub mod yaml;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::models::PriceQuote;

pub use json::export_quote_json;
pub use yaml::export_quote_yaml;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Output format for a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text summary
    #[default]
    Text,
    Json,
    Yaml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(CalcError::Validation(format!(
                "unknown format '{}', expected text, json or yaml",
                other
            ))),
        }
    }
}

/// Formatted figures as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLabels {
    /// Discounted price in ct/kWh, e.g. "7,2"
    pub discounted_price_ct: String,
    /// Savings in percent, e.g. "64,0"
    pub savings_percent: String,
    /// Annual savings range, e.g. "20.000 € – 100.000 €"
    pub total_savings: String,
}

/// A quote with metadata, as written by the exporters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteExport {
    /// Schema version for compatibility checking
    pub schema_version: String,
    /// Application version that produced the quote
    pub app_version: String,
    /// Link for requesting a demo
    pub demo_url: String,
    /// The raw quote
    pub quote: PriceQuote,
    /// Display strings for the quote
    pub labels: QuoteLabels,
}

impl QuoteExport {
    /// Wrap a quote for export
    pub fn new(quote: &PriceQuote, demo_url: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            demo_url: demo_url.to_string(),
            quote: quote.clone(),
            labels: QuoteLabels {
                discounted_price_ct: quote.discounted_price_label(),
                savings_percent: quote.savings_percent_label(),
                total_savings: quote.total_savings.describe(),
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("xml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Text);
    }

    #[test]
    fn test_export_labels() {
        let export = QuoteExport::new(&test_support::sample_quote(), "https://example.com/demo");
        assert_eq!(export.labels.discounted_price_ct, "7,2");
        assert_eq!(export.labels.savings_percent, "64,0");
        assert_eq!(export.labels.total_savings, "256.000 € – 1.280.000 €");
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
    }
}
