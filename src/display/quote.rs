//! Quote display formatting
//!
//! Renders a quote as an aligned plain-text summary for terminal output.

use crate::models::format::NOT_AVAILABLE;
use crate::models::PriceQuote;

/// Width of the label column
const LABEL_WIDTH: usize = 18;

/// Format a quote as a multi-line summary
pub fn format_quote(quote: &PriceQuote, demo_url: &str) -> String {
    let year = quote
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let consumption = quote
        .consumption
        .map(|c| c.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let shift = quote
        .shift
        .map(|s| s.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let rows = [
        ("Year", year),
        ("Consumption", consumption),
        ("Shift model", shift),
        ("Your price", quote.unit_price.to_string()),
        (
            "Estimated price",
            format!("{} ct/kWh", quote.discounted_price_label()),
        ),
        ("Savings", format!("{} %", quote.savings_percent_label())),
        ("Annual savings", quote.total_savings.describe()),
    ];

    let mut output = String::new();
    output.push_str("Your estimate\n");
    output.push_str("=============\n");
    for (label, value) in rows {
        output.push_str(&format!(
            "{:<width$}{}\n",
            format!("{}:", label),
            value,
            width = LABEL_WIDTH
        ));
    }

    if !quote.is_saving() {
        output.push_str("\nThe estimated price is not below your current price.\n");
    }

    output.push('\n');
    output.push_str(&format!("Request a demo: {}\n", demo_url));
    output
}
