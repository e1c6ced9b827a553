//! Event handler for the TUI
//!
//! Routes key events to the open dialog or to the current wizard step.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;
use crate::wizard::Step;

/// Slider steps moved by PgUp/PgDn
const SLIDER_PAGE: i32 = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('n') | KeyCode::Enter => {
            app.next();
            return Ok(());
        }
        KeyCode::Char('b') | KeyCode::Backspace => {
            app.back();
            return Ok(());
        }
        _ => {}
    }

    match app.step() {
        Step::Year | Step::Consumption | Step::Shift => handle_tile_key(app, key),
        Step::UnitPrice => handle_slider_key(app, key),
        Step::Result(_) => {
            if matches!(key.code, KeyCode::Char('o') | KeyCode::Char('O')) {
                app.open_demo();
            }
        }
    }

    Ok(())
}

/// Handle keys while a dialog is open
///
/// Alerts are modal: any key dismisses them and nothing else happens.
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Alert(_) => app.close_dialog(),
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
}

/// Handle keys on the selection steps
fn handle_tile_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.focus_left(),
        KeyCode::Right | KeyCode::Char('l') => app.focus_right(),
        KeyCode::Char(' ') => {
            app.select_focused();
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.select_tile(index);
        }
        _ => {}
    }
}

/// Handle keys on the price slider
fn handle_slider_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            app.nudge_slider(-1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.nudge_slider(1);
        }
        KeyCode::PageDown => {
            app.nudge_slider(-SLIDER_PAGE);
        }
        KeyCode::PageUp => {
            app.nudge_slider(SLIDER_PAGE);
        }
        KeyCode::Home => {
            app.slider_to_end(false);
        }
        KeyCode::End => {
            app.slider_to_end(true);
        }
        _ => {}
    }
}
