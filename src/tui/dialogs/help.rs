//! Help dialog
//!
//! Shows the keys for the current step

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{bindings_for, KeyContext};
use crate::tui::layout::centered_rect;
use crate::wizard::Step;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.step()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the given step: navigation first, then step keys
fn help_lines(step: &Step) -> Vec<Line<'static>> {
    let mut contexts = vec![KeyContext::Global];
    match step {
        Step::Year | Step::Consumption | Step::Shift => contexts.push(KeyContext::Tiles),
        Step::UnitPrice => contexts.push(KeyContext::Slider),
        Step::Result(_) => contexts.push(KeyContext::Result),
    }

    let mut lines = Vec::new();
    for context in contexts {
        lines.push(Line::from(Span::styled(
            context.title(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
        for binding in bindings_for(context) {
            lines.push(key_line(binding.keys, binding.description));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Create a key hint line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>16}", key), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::raw(description),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceQuote, SavingsRange, UnitPrice};

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_tile_step_help() {
        let help = text(&help_lines(&Step::Year));
        assert!(help.contains("Navigation"));
        assert!(help.contains("Select option directly"));
        assert!(!help.contains("Jump to minimum"));
    }

    #[test]
    fn test_slider_step_help() {
        let help = text(&help_lines(&Step::UnitPrice));
        assert!(help.contains("Price slider"));
        assert!(!help.contains("Select option directly"));
    }

    #[test]
    fn test_result_step_help_offers_demo_link() {
        let quote = PriceQuote {
            year: None,
            consumption: None,
            shift: None,
            unit_price: UnitPrice::default(),
            discounted_price: 0.078,
            savings_percent: 0.61,
            total_savings: SavingsRange::bounded(0.0, 0.0),
        };
        let help = text(&help_lines(&Step::Result(quote)));
        assert!(help.contains("Navigation"));
        assert!(help.contains("Open demo page in browser"));
        assert!(!help.contains("Selection"));
        assert!(!help.contains("Price slider"));
    }
}
