//! TUI Views module
//!
//! One view per part of the panel. The body view depends on the current
//! step: option tiles, the price slider, or the result.

pub mod controls;
pub mod header;
pub mod result;
pub mod selection;
pub mod slider;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::PanelLayout;
use crate::wizard::Step;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let outer = frame.area();
    let area = if app.embed {
        outer
    } else {
        let block = Block::default()
            .title(" ecoplanet price calculator ")
            .title_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(outer);
        frame.render_widget(block, outer);
        inner
    };

    let layout = PanelLayout::new(area, app.embed);

    header::render(frame, app, layout.header);

    match app.step() {
        Step::Year | Step::Consumption | Step::Shift => {
            selection::render(frame, app, layout.body);
        }
        Step::UnitPrice => {
            slider::render(frame, app, layout.body);
        }
        Step::Result(quote) => {
            result::render(frame, quote, &app.settings.demo_url, layout.body);
        }
    }

    controls::render(frame, app, layout.controls);

    if !app.embed {
        status_bar::render(frame, app, layout.status_bar);
    }

    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Alert(message) => dialogs::alert::render(frame, message),
    }
}
