//! Back / Next / Calculate controls

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::Step;

/// Render the navigation controls for the current step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.step();
    let key_style = Style::default().fg(Color::Yellow);
    let mut spans = Vec::new();

    if !step.is_first() {
        spans.push(Span::styled("[b]", key_style));
        spans.push(Span::raw(" Back   "));
    }

    match step {
        Step::Year | Step::Consumption | Step::Shift => {
            spans.push(Span::styled("[n]", key_style));
            spans.push(Span::raw(" Next"));
        }
        Step::UnitPrice => {
            spans.push(Span::styled("[Enter]", key_style));
            spans.push(Span::styled(
                " Calculate",
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        Step::Result(_) => {}
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
