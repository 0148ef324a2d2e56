use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::group;
use crate::tui::app::App;

/// Render the header bar: app title + wall counts, with separator line below
pub fn render_header_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let groups = group::by_year(app.board.records());

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", Style::default().bg(bg)));
    spans.push(Span::styled(
        "[#]",
        Style::default().fg(app.theme.accent).bg(bg),
    ));
    spans.push(Span::styled(
        " tessera ",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let tiles = app.board.len();
    let years = groups.len();
    spans.push(Span::styled(
        format!(" {} tiles \u{00B7} {} years", tiles, years),
        Style::default().fg(app.theme.text).bg(bg),
    ));
    if app.board.has_more() {
        spans.push(Span::styled(
            " \u{00B7} more to load",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let line = Line::from(spans);
    let title = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(title, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let sep = "\u{2500}".repeat(area.width as usize);
    let widget = Paragraph::new(sep)
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_counts() {
        let app = sample_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_header_bar(frame, &app, area);
        });
        assert!(output.contains("tessera"));
        assert!(output.contains("4 tiles \u{00B7} 2 years"));
    }

    #[test]
    fn header_flags_unloaded_tiles() {
        let app = builtin_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_header_bar(frame, &app, area);
        });
        assert!(output.contains("more to load"));
    }
}
