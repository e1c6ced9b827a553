//! Status bar view
//!
//! Summary of the selections so far, or the latest status message.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::format::NOT_AVAILABLE;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => {
            let selections = app.wizard.selections();
            let parts = [
                selections.year.map(|y| y.to_string()),
                selections.consumption.map(|c| c.to_string()),
                selections.shift.map(|s| s.to_string()),
                Some(selections.unit_price.to_string()),
            ];
            let summary = parts
                .iter()
                .map(|p| p.as_deref().unwrap_or(NOT_AVAILABLE))
                .collect::<Vec<_>>()
                .join(" │ ");

            Line::from(vec![
                Span::styled(summary, Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::styled("? help  q quit", Style::default().fg(Color::DarkGray)),
            ])
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::pricing::FixedJitter;
    use crate::tui::app::App;
    use crate::tui::views::test_support::render_to_string;

    #[test]
    fn test_summary_shows_selections() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Box::new(FixedJitter::neutral()), false);
        app.select_tile(2);

        let screen = render_to_string(&app, 100, 20);
        assert!(screen.contains("2028 │ – │ – │ 20,0 ct/kWh"));
    }

    #[test]
    fn test_status_message_replaces_summary() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Box::new(FixedJitter::neutral()), false);
        app.set_status("Something happened");

        let screen = render_to_string(&app, 100, 20);
        assert!(screen.contains("Something happened"));
        assert!(!screen.contains("20,0 ct/kWh"));
    }
}
