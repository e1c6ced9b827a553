//! Number formatting for display
//!
//! All user-facing figures use a comma as decimal separator and a dot as
//! thousands separator. Rounding is half away from zero.

/// Placeholder shown for values that cannot be displayed
pub const NOT_AVAILABLE: &str = "–";

/// Format a price per kWh in ct/kWh with one decimal, e.g. 0.0715 -> "7,2"
pub fn format_ct_per_kwh(price: f64) -> String {
    format_tenths(price * 1000.0)
}

/// Format a fraction as a percentage with one decimal, e.g. 0.64 -> "64,0"
///
/// Non-finite fractions render as [`NOT_AVAILABLE`].
pub fn format_percent(fraction: f64) -> String {
    format_tenths(fraction * 1000.0)
}

/// Format a currency amount rounded to whole units, e.g. 20000.0 -> "20.000"
pub fn format_euros(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Round a value given in tenths and render it with one decimal
///
/// Callers scale with a single multiplication; scaling twice (by 100, then
/// by 10) lands 0.0725 on 72.4999... and rounds the wrong way.
fn format_tenths(scaled: f64) -> String {
    if !scaled.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let tenths = scaled.round();
    let negative = tenths < 0.0;
    let tenths = tenths.abs() as u64;
    let sign = if negative { "-" } else { "" };

    format!("{}{},{}", sign, tenths / 10, tenths % 10)
}

/// Insert a dot every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
