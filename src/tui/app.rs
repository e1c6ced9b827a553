//! Application state for the TUI
//!
//! The App struct wraps the wizard and holds the purely visual state needed
//! for rendering: which tile has focus, which dialog is open.

use tracing::{info, warn};

use crate::config::Settings;
use crate::models::{ConsumptionBracket, Selections, ShiftModel, UnitPrice, Year};
use crate::pricing::JitterSource;
use crate::wizard::{Step, Wizard};

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Blocking alert with a message
    Alert(String),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The wizard being driven
    pub wizard: Wizard<Box<dyn JitterSource>>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Index of the tile with keyboard focus on selection steps
    pub focused_tile: usize,

    /// Compact rendering without frame and status bar
    pub embed: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Opens a link in the user's browser
    pub open_link: fn(&str) -> std::io::Result<()>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, jitter: Box<dyn JitterSource>, embed: bool) -> Self {
        // The slider only accepts input on its own step, so the configured
        // start position goes in through the initial selections
        let selections = Selections::with_unit_price(settings.initial_unit_price());
        let wizard = Wizard::with_selections(selections, jitter);

        Self {
            settings,
            wizard,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            focused_tile: 0,
            embed,
            status_message: None,
            open_link: webbrowser::open,
        }
    }

    /// Current wizard step
    pub fn step(&self) -> &Step {
        self.wizard.step()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Next / Calculate
    ///
    /// A missing selection opens a blocking alert and leaves the wizard where
    /// it is.
    pub fn next(&mut self) {
        self.clear_status();
        let outcome = self.wizard.advance().map(|_| ());
        match outcome {
            Ok(()) => self.sync_focus(),
            Err(err) if err.is_missing_selection() => {
                self.open_dialog(ActiveDialog::Alert(err.to_string()));
            }
            Err(err) => {
                warn!(error = %err, "Unexpected error while advancing");
                self.set_status(err.to_string());
            }
        }
    }

    /// Back
    pub fn back(&mut self) {
        self.clear_status();
        self.wizard.retreat();
        self.sync_focus();
    }

    /// Open the demo page in a browser; only on the result step
    pub fn open_demo(&mut self) -> bool {
        if !self.step().is_result() {
            return false;
        }

        let settings = self.settings;
        let url = settings.demo_url.as_str();
        match (self.open_link)(url) {
            Ok(()) => {
                info!(url, "Opened demo page");
                self.set_status(format!("Opened {}", url));
                true
            }
            Err(err) => {
                warn!(url, error = %err, "Could not open browser");
                self.set_status(format!("Could not open browser: {}", err));
                false
            }
        }
    }

    /// Labels of the tiles on the current step; empty on non-tile steps
    pub fn tile_labels(&self) -> Vec<String> {
        match self.step() {
            Step::Year => Year::ALL.iter().map(|y| y.to_string()).collect(),
            Step::Consumption => ConsumptionBracket::ALL.iter().map(|c| c.to_string()).collect(),
            Step::Shift => ShiftModel::ALL.iter().map(|s| s.to_string()).collect(),
            Step::UnitPrice | Step::Result(_) => Vec::new(),
        }
    }

    /// Index of the tile currently selected on this step
    pub fn selected_tile(&self) -> Option<usize> {
        let selections = self.wizard.selections();
        match self.step() {
            Step::Year => selections
                .year
                .and_then(|y| Year::ALL.iter().position(|v| *v == y)),
            Step::Consumption => selections
                .consumption
                .and_then(|c| ConsumptionBracket::ALL.iter().position(|v| *v == c)),
            Step::Shift => selections
                .shift
                .and_then(|s| ShiftModel::ALL.iter().position(|v| *v == s)),
            Step::UnitPrice | Step::Result(_) => None,
        }
    }

    /// Select the tile at `index` on the current step
    pub fn select_tile(&mut self, index: usize) -> bool {
        let selected = match self.step() {
            Step::Year => Year::ALL.get(index).is_some_and(|&y| self.wizard.select_year(y)),
            Step::Consumption => ConsumptionBracket::ALL
                .get(index)
                .is_some_and(|&c| self.wizard.select_consumption(c)),
            Step::Shift => ShiftModel::ALL
                .get(index)
                .is_some_and(|&s| self.wizard.select_shift(s)),
            Step::UnitPrice | Step::Result(_) => false,
        };
        if selected {
            self.focused_tile = index;
        }
        selected
    }

    /// Select the tile that has focus
    pub fn select_focused(&mut self) -> bool {
        self.select_tile(self.focused_tile)
    }

    /// Move tile focus left
    pub fn focus_left(&mut self) {
        self.focused_tile = self.focused_tile.saturating_sub(1);
    }

    /// Move tile focus right
    pub fn focus_right(&mut self) {
        let count = self.tile_labels().len();
        if self.focused_tile + 1 < count {
            self.focused_tile += 1;
        }
    }

    /// Move the slider by a number of configured steps
    pub fn nudge_slider(&mut self, steps: i32) -> bool {
        self.wizard
            .nudge_unit_price(f64::from(steps) * self.settings.slider_step)
    }

    /// Move the slider to one of its ends
    pub fn slider_to_end(&mut self, max: bool) -> bool {
        let value = if max { UnitPrice::MAX } else { UnitPrice::MIN };
        self.wizard.set_unit_price(UnitPrice::clamped(value))
    }

    /// Put focus on the current selection after a step change
    fn sync_focus(&mut self) {
        self.focused_tile = self.selected_tile().unwrap_or(0);
    }
}
