//! Result view
//!
//! Shows the computed quote and the demo link.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::PriceQuote;

/// Render the result step
pub fn render(frame: &mut Frame, quote: &PriceQuote, demo_url: &str, area: Rect) {
    let value_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        row(
            "Estimated price",
            format!("{} ct/kWh", quote.discounted_price_label()),
            value_style,
        ),
        row(
            "Savings",
            format!("{} %", quote.savings_percent_label()),
            value_style,
        ),
        row(
            "Annual savings",
            quote.total_savings.describe(),
            value_style,
        ),
        Line::from(""),
    ];

    if !quote.is_saving() {
        lines.push(Line::from(Span::styled(
            "The estimated price is not below your current price.",
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::raw("Request a demo: "),
        Span::styled(
            demo_url.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::raw("  "),
        Span::styled("[o]", Style::default().fg(Color::Yellow)),
        Span::raw(" open"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Your estimate ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn row(label: &str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<17}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, style),
    ])
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::pricing::FixedJitter;
    use crate::tui::app::App;
    use crate::tui::views::test_support::render_to_string;

    fn finished_app(settings: &Settings, year: usize, price_steps: i32) -> App<'_> {
        let mut app = App::new(settings, Box::new(FixedJitter::neutral()), false);
        app.select_tile(year);
        app.next();
        app.select_tile(0);
        app.next();
        app.select_tile(0);
        app.next();
        app.nudge_slider(price_steps);
        app.next();
        app
    }

    #[test]
    fn test_result_screen() {
        let settings = Settings {
            demo_url: "https://example.com/demo".into(),
            ..Settings::default()
        };
        let app = finished_app(&settings, 1, 0);
        let screen = render_to_string(&app, 90, 22);

        assert!(screen.contains("Step 5 of 5"));
        assert!(screen.contains("7,2 ct/kWh"));
        assert!(screen.contains("64,0 %"));
        assert!(screen.contains("bis"));
        assert!(screen.contains("https://example.com/demo"));
        assert!(screen.contains("Back"));
        assert!(!screen.contains("Calculate"));
    }

    #[test]
    fn test_note_when_not_saving() {
        let settings = Settings::default();
        // 2026 base is 7,8 ct; 20 ct minus 14 steps is 6 ct
        let app = finished_app(&settings, 0, -14);
        let screen = render_to_string(&app, 90, 22);

        assert!(screen.contains("not below your current price"));
    }
}
