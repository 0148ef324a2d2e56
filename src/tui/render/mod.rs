pub mod form_popup;
pub mod header_bar;
pub mod help_overlay;
pub mod status_row;
pub mod wall_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | wall | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // the wall
            Constraint::Length(1), // status row
        ])
        .split(area);

    header_bar::render_header_bar(frame, app, chunks[0]);
    wall_view::render_wall(frame, app, chunks[1]);

    // Overlays, on top of everything
    if app.form.is_some() {
        form_popup::render_form_popup(frame, app, frame.area());
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
