use anyhow::Result;
use clap::{Parser, Subcommand};

use ecoplanet_calc::cli::{handle_quote_command, QuoteArgs};
use ecoplanet_calc::config::{CalcPaths, Settings};
use ecoplanet_calc::logging::init_logging;
use ecoplanet_calc::pricing::{JitterSource, RandomJitter};

#[derive(Parser)]
#[command(
    name = "ecocalc",
    version,
    about = "Interactive electricity price calculator",
    long_about = "ecocalc estimates the price per kWh ecoplanet could offer for a \
                  procurement year, consumption bracket and shift model, and how \
                  much that would save against your current price."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive price panel (default)
    #[command(alias = "ui")]
    Tui {
        /// Compact panel without frame and status bar
        #[arg(long)]
        embed: bool,
        /// Seed for the price randomization
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compute a quote without the interactive panel
    Quote(QuoteArgs),

    /// Show current configuration and paths
    Config {
        /// Write the default settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CalcPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // The panel owns the terminal, so log records always go to the file
    if let Err(e) = init_logging(&paths.log_file()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match cli.command {
        None => run_panel(&settings, false, None)?,
        Some(Commands::Tui { embed, seed }) => run_panel(&settings, embed, seed)?,
        Some(Commands::Quote(args)) => {
            let mut stdout = std::io::stdout().lock();
            handle_quote_command(&args, &settings, &mut stdout)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }
            println!("ecocalc Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            let written = if paths.is_initialized() {
                ""
            } else {
                " (not written, using defaults)"
            };
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                written
            );
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Demo URL:           {}", settings.demo_url);
            println!("  Default unit price: {}", settings.initial_unit_price());
            println!("  Slider step:        {}", settings.slider_step);
            println!("  Tick rate (ms):     {}", settings.tick_rate_ms);
        }
    }

    Ok(())
}

fn run_panel(settings: &Settings, embed: bool, seed: Option<u64>) -> Result<()> {
    let jitter: Box<dyn JitterSource> = match seed {
        Some(seed) => Box::new(RandomJitter::seeded(seed)),
        None => Box::new(RandomJitter::from_entropy()),
    };

    if let Some(demo_url) = ecoplanet_calc::tui::run_tui(settings, jitter, embed)? {
        println!("Request a demo: {}", demo_url);
    }
    Ok(())
}
