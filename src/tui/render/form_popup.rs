use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField, FormState};

const MAX_INNER_WIDTH: u16 = 46;

/// Render the add-tile form popup
pub fn render_form_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref form) = app.form else {
        return;
    };

    let bg = app.theme.background;
    let bright = app.theme.text_bright;
    let highlight = app.theme.highlight;
    let dim = app.theme.dim;

    let inner_w = area.width.saturating_sub(4).min(MAX_INNER_WIDTH) as usize;
    let popup_w = (inner_w as u16) + 2;

    let label_focused = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let label_blurred = Style::default().fg(dim).bg(bg);
    let input_style = Style::default().fg(bright).bg(bg);
    let cursor_style = Style::default().fg(highlight).bg(bg);
    let blank_style = Style::default().bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" ".repeat(inner_w), blank_style)));

    let date_focused = form.focus == FormField::Date;
    lines.push(Line::from(Span::styled(
        " Date (YYYY-MM-DD)",
        if date_focused { label_focused } else { label_blurred },
    )));
    lines.push(input_line(
        &form.date_input,
        date_focused,
        inner_w,
        input_style,
        cursor_style,
        blank_style,
    ));
    lines.push(Line::from(Span::styled(" ".repeat(inner_w), blank_style)));

    lines.push(Line::from(Span::styled(
        " Message",
        if date_focused { label_blurred } else { label_focused },
    )));
    lines.push(input_line(
        &form.message_input,
        !date_focused,
        inner_w,
        input_style,
        cursor_style,
        blank_style,
    ));
    lines.push(Line::from(Span::styled(" ".repeat(inner_w), blank_style)));

    if let Some(ref err) = form.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", err),
            Style::default().fg(app.theme.error).bg(bg),
        )));
        lines.push(Line::from(Span::styled(" ".repeat(inner_w), blank_style)));
    }

    lines.push(Line::from(Span::styled(
        " Enter submit \u{00B7} Tab switch \u{00B7} Esc close",
        Style::default().fg(dim).bg(bg),
    )));

    let popup_h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let title_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let block = Block::default()
        .title(Span::styled(" Add Tile ", title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, popup_area);
}

/// Input row: two-space gutter, the draft text, a block cursor when focused.
fn input_line<'a>(
    value: &'a str,
    focused: bool,
    inner_w: usize,
    input_style: Style,
    cursor_style: Style,
    blank_style: Style,
) -> Line<'a> {
    let mut spans = vec![
        Span::styled("  ", blank_style),
        Span::styled(value, input_style),
    ];
    let mut used = 2 + value.chars().count();
    if focused {
        spans.push(Span::styled("\u{258C}", cursor_style));
        used += 1;
    }
    if used < inner_w {
        spans.push(Span::styled(" ".repeat(inner_w - used), blank_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::*;

    fn app_with_form(form: FormState) -> App {
        let mut app = sample_app();
        app.mode = Mode::Form;
        app.form = Some(form);
        app
    }

    #[test]
    fn form_shows_both_fields_and_hints() {
        let app = app_with_form(FormState::default());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_form_popup(frame, &app, area);
        });
        assert!(output.contains("Add Tile"));
        assert!(output.contains("Date (YYYY-MM-DD)"));
        assert!(output.contains("Message"));
        assert!(output.contains("Enter submit"));
    }

    #[test]
    fn form_echoes_typed_input() {
        let form = FormState {
            date_input: "2024-03-0".to_string(),
            message_input: "draft text".to_string(),
            ..Default::default()
        };
        let app = app_with_form(form);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_form_popup(frame, &app, area);
        });
        assert!(output.contains("2024-03-0"));
        assert!(output.contains("draft text"));
    }

    #[test]
    fn form_shows_validation_error() {
        let form = FormState {
            error: Some("both fields are required".to_string()),
            ..Default::default()
        };
        let app = app_with_form(form);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_form_popup(frame, &app, area);
        });
        assert!(output.contains("both fields are required"));
    }

    #[test]
    fn absent_form_renders_nothing() {
        let app = sample_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_form_popup(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
