//! Step header view
//!
//! Step indicator text plus the title of the current step.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::STEP_COUNT;

/// Render the step header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.step();

    // One dot per step, filled up to the current one
    let progress = (0..STEP_COUNT)
        .map(|i| if i <= step.index() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let lines = vec![
        Line::from(vec![
            Span::styled(step.to_string(), Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(progress, Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(
            step.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
