//! YAML export

use std::io::Write;

use crate::error::{CalcError, CalcResult};
use crate::models::PriceQuote;

use super::QuoteExport;

/// Write a quote as YAML with a short comment header
pub fn export_quote_yaml<W: Write>(
    quote: &PriceQuote,
    demo_url: &str,
    writer: &mut W,
) -> CalcResult<()> {
    let export = QuoteExport::new(quote, demo_url);

    writeln!(writer, "# ecoplanet price estimate")?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer, "# Prices are per kWh; savings are per year.")?;

    serde_yaml::to_writer(&mut *writer, &export)
        .map_err(|e| CalcError::Yaml(format!("Failed to serialize quote: {}", e)))?;

    Ok(())
}
