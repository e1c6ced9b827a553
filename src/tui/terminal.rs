//! Terminal setup and teardown
//!
//! Initializes and restores the terminal state, including a panic hook that
//! restores the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::Settings;
use crate::error::CalcError;
use crate::pricing::JitterSource;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive wizard until the user quits
///
/// Returns the demo link if the user finished on the result step, so the
/// caller can print it after the screen is restored.
pub fn run_tui(settings: &Settings, jitter: Box<dyn JitterSource>, embed: bool) -> Result<Option<String>> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, jitter, embed);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    info!(embed, "Starting interactive wizard");

    let result = run_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;
    result?;

    info!(calculations = app.wizard.calculations(), "Wizard closed");
    Ok(app
        .step()
        .is_result()
        .then(|| settings.demo_url.clone()))
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        // The reader thread only stops when the terminal fails
        let event = events
            .next()
            .map_err(|_| CalcError::Tui("terminal event stream closed".into()))?;
        handle_event(app, event)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
