//! Quote CLI command
//!
//! Runs the wizard non-interactively: the selections come from arguments,
//! and the same guarded transitions apply as in the interactive panel.

use std::io::Write;

use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::display::format_quote;
use crate::error::{CalcError, CalcResult};
use crate::export::{export_quote_json, export_quote_yaml, ExportFormat};
use crate::models::{ConsumptionBracket, PriceQuote, ShiftModel, UnitPrice, Year};
use crate::pricing::{FixedJitter, JitterSource, RandomJitter};
use crate::wizard::Wizard;

/// Arguments for `ecocalc quote`
#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Procurement year (2026, 2027, 2028)
    #[arg(short, long)]
    pub year: Option<String>,
    /// Annual consumption bracket (<2, 2-10, >10)
    #[arg(short, long)]
    pub consumption: Option<String>,
    /// Shift model (1, 2, 3)
    #[arg(short, long)]
    pub shift: Option<String>,
    /// Current price per kWh, e.g. "0.20" (defaults to the configured slider position)
    #[arg(short, long)]
    pub price: Option<String>,
    /// Seed for the price randomization, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Pin the randomization factor (0.97 to 1.03)
    #[arg(long, hide = true)]
    pub jitter_factor: Option<f64>,
    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

impl QuoteArgs {
    fn jitter(&self) -> CalcResult<Box<dyn JitterSource>> {
        let jitter: Box<dyn JitterSource> = match (self.jitter_factor, self.seed) {
            (Some(factor), _) => Box::new(FixedJitter::try_new(factor)?),
            (None, Some(seed)) => Box::new(RandomJitter::seeded(seed)),
            (None, None) => Box::new(RandomJitter::from_entropy()),
        };
        Ok(jitter)
    }
}

/// Parse an optional argument, leaving it unset when absent
fn parse_opt<T>(value: Option<&str>) -> CalcResult<Option<T>>
where
    T: std::str::FromStr<Err = CalcError>,
{
    value.map(str::parse).transpose()
}

/// Walk the wizard with the given arguments and return the quote
///
/// A missing selection surfaces as the same error the panel shows as an
/// alert.
pub fn compute_from_args(args: &QuoteArgs, settings: &Settings) -> CalcResult<PriceQuote> {
    let year: Option<Year> = parse_opt(args.year.as_deref())?;
    let consumption: Option<ConsumptionBracket> = parse_opt(args.consumption.as_deref())?;
    let shift: Option<ShiftModel> = parse_opt(args.shift.as_deref())?;
    let price = match parse_opt::<UnitPrice>(args.price.as_deref())? {
        Some(price) => price,
        None => settings.initial_unit_price(),
    };

    let mut wizard = Wizard::with_jitter(args.jitter()?);

    if let Some(year) = year {
        wizard.select_year(year);
    }
    wizard.advance()?;

    if let Some(consumption) = consumption {
        wizard.select_consumption(consumption);
    }
    wizard.advance()?;

    if let Some(shift) = shift {
        wizard.select_shift(shift);
    }
    wizard.advance()?;

    wizard.set_unit_price(price);
    wizard.advance()?;

    wizard
        .quote()
        .cloned()
        .ok_or_else(|| CalcError::Validation("wizard finished without a quote".into()))
}

/// Handle the quote command, writing the result to `out`
pub fn handle_quote_command<W: Write>(
    args: &QuoteArgs,
    settings: &Settings,
    out: &mut W,
) -> CalcResult<()> {
    let format: ExportFormat = args.format.parse()?;
    let quote = compute_from_args(args, settings)?;
    info!(%format, "Writing quote");

    match format {
        ExportFormat::Text => write!(out, "{}", format_quote(&quote, &settings.demo_url))?,
        ExportFormat::Json => export_quote_json(&quote, &settings.demo_url, out)?,
        ExportFormat::Yaml => export_quote_yaml(&quote, &settings.demo_url, out)?,
    }

    Ok(())
}
