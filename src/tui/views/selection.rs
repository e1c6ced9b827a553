//! Selection view
//!
//! A row of option tiles for the year, consumption and shift steps.

use ratatui::{layout::Rect, Frame};

use crate::tui::app::App;
use crate::tui::layout::tile_columns;
use crate::tui::widgets::OptionTile;

/// Tile height including borders
const TILE_HEIGHT: u16 = 5;

/// Render the option tiles for the current step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.tile_labels();
    let selected = app.selected_tile();

    let row = Rect {
        height: area.height.min(TILE_HEIGHT),
        ..area
    };

    for (index, (label, column)) in labels
        .iter()
        .zip(tile_columns(row, labels.len()))
        .enumerate()
    {
        let hotkey = char::from_digit(index as u32 + 1, 10).unwrap_or('?');
        let tile = OptionTile::new(label)
            .hotkey(hotkey)
            .selected(selected == Some(index))
            .focused(app.focused_tile == index);
        frame.render_widget(tile, column);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::pricing::FixedJitter;
    use crate::tui::app::App;
    use crate::tui::views::test_support::render_to_string;

    #[test]
    fn test_consumption_tiles() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Box::new(FixedJitter::neutral()), false);
        app.select_tile(0);
        app.next();
        app.select_tile(1);

        let screen = render_to_string(&app, 80, 20);
        assert!(screen.contains("<2 GWh"));
        assert!(screen.contains("● 2–10 GWh"));
        assert!(screen.contains(">10 GWh"));
    }
}
