//! Price slider view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::format::format_ct_per_kwh;
use crate::models::UnitPrice;
use crate::tui::app::App;

/// Render the unit price slider
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let price = app.wizard.selections().unit_price;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Gauge
            Constraint::Length(1), // Scale
            Constraint::Min(0),
        ])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Current price ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(price.ratio())
        .label(price.to_string());
    frame.render_widget(gauge, chunks[0]);

    let min_label = format!("{} ct/kWh", format_ct_per_kwh(UnitPrice::MIN));
    let max_label = format!("{} ct/kWh", format_ct_per_kwh(UnitPrice::MAX));
    let width = chunks[1].width as usize;
    let gap = width.saturating_sub(min_label.chars().count() + max_label.chars().count());

    let scale = Line::from(vec![
        Span::styled(min_label, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(gap)),
        Span::styled(max_label, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(scale), chunks[1]);
}
