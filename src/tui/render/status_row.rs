use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();

    match app.mode {
        // Clean in navigate mode, like vim normal mode
        Mode::Navigate => {}
        Mode::Drag => {
            spans.push(Span::styled(
                " MOVE ",
                Style::default()
                    .fg(app.theme.background)
                    .bg(app.theme.drag)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        Mode::Form => {
            spans.push(Span::styled(
                " ADD ",
                Style::default()
                    .fg(app.theme.background)
                    .bg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
    }

    if let Some(ref message) = app.status_message {
        let fg = if app.status_is_error {
            app.theme.error
        } else {
            app.theme.text
        };
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(fg).bg(bg),
        ));
    }

    let hint = match app.mode {
        Mode::Navigate => "? help  q quit",
        Mode::Drag => "Enter drop  Esc cancel",
        Mode::Form => "Enter submit  Esc close",
    };
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
