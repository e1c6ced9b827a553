//! Layout definitions for the TUI
//!
//! The panel is a single column: step header, step body, controls, and a
//! status bar. Embedded mode drops the status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions of the wizard panel
pub struct PanelLayout {
    /// Step indicator and title
    pub header: Rect,
    /// Tiles, slider or result
    pub body: Rect,
    /// Back / Next / Calculate
    pub controls: Rect,
    /// Status bar at the bottom (empty in embedded mode)
    pub status_bar: Rect,
}

impl PanelLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, embed: bool) -> Self {
        let status_height = if embed { 0 } else { 1 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),             // Header
                Constraint::Min(5),                // Body
                Constraint::Length(1),             // Controls
                Constraint::Length(status_height), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            controls: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Split an area into `count` equally wide columns
pub fn tile_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_has_no_status_bar() {
        let area = Rect::new(0, 0, 60, 20);
        assert_eq!(PanelLayout::new(area, true).status_bar.height, 0);
        assert_eq!(PanelLayout::new(area, false).status_bar.height, 1);
    }

    #[test]
    fn test_tile_columns() {
        let cols = tile_columns(Rect::new(0, 0, 60, 5), 3);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols.iter().map(|c| c.width).sum::<u16>(), 60);
        assert!(tile_columns(Rect::new(0, 0, 60, 5), 0).is_empty());
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(100, 10, Rect::new(0, 0, 40, 20));
        assert_eq!(r.width, 40);
        assert_eq!(r.y, 5);
    }
}
