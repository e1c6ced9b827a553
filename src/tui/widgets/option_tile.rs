//! Option tile widget
//!
//! A bordered box with a label. Pure presentation: whether it is selected
//! or focused is decided by the caller.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// A selectable tile
pub struct OptionTile<'a> {
    label: &'a str,
    hotkey: Option<char>,
    selected: bool,
    focused: bool,
}

impl<'a> OptionTile<'a> {
    /// Create a tile with a label
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            hotkey: None,
            selected: false,
            focused: false,
        }
    }

    /// Show a hotkey in the top-left corner
    pub fn hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    /// Mark as the current selection
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Mark as having keyboard focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn border_style(&self) -> Style {
        match (self.selected, self.focused) {
            (true, _) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Color::Cyan),
            (false, false) => Style::default().fg(Color::DarkGray),
        }
    }
}

impl<'a> Widget for OptionTile<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(self.border_style());
        if let Some(key) = self.hotkey {
            block = block.title(format!(" {} ", key));
        }

        let label_style = if self.selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if self.selected { "● " } else { "" };

        // Push the label to the vertical middle of the tile
        let inner_height = area.height.saturating_sub(2) as usize;
        let mut lines = vec![Line::from(""); inner_height.saturating_sub(1) / 2];
        lines.push(Line::styled(format!("{}{}", marker, self.label), label_style));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
