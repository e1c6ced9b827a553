//! JSON export

use std::io::Write;

use crate::error::{CalcError, CalcResult};
use crate::models::PriceQuote;

use super::QuoteExport;

/// Write a quote as pretty-printed JSON
///
/// A non-finite savings percentage is written as `null`.
pub fn export_quote_json<W: Write>(
    quote: &PriceQuote,
    demo_url: &str,
    writer: &mut W,
) -> CalcResult<()> {
    let export = QuoteExport::new(quote, demo_url);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| CalcError::Json(format!("Failed to serialize quote: {}", e)))?;
    writeln!(writer)?;

    Ok(())
}
