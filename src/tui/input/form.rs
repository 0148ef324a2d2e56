use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Message, message::parse_date};
use crate::ops::group;
use crate::tui::app::{App, FormField, Mode, TilePos};
use crate::util::unicode;

/// The add-tile form overlay. Two fields, end-of-line editing only.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.form = None;
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => submit_form(app),
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) | (_, KeyCode::Down) | (_, KeyCode::Up) => {
            if let Some(form) = &mut app.form {
                form.focus = match form.focus {
                    FormField::Date => FormField::Message,
                    FormField::Message => FormField::Date,
                };
            }
        }
        (_, KeyCode::Backspace) => {
            if let Some(form) = &mut app.form {
                unicode::pop_grapheme(form.focused_input_mut());
                form.error = None;
            }
        }
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            if let Some(form) = &mut app.form {
                form.focused_input_mut().push(c);
                form.error = None;
            }
        }
        _ => {}
    }
}

/// Validate and append. Both fields are required and the date must be a
/// real `YYYY-MM-DD` day; nothing reaches the store until both hold.
pub(super) fn submit_form(app: &mut App) {
    let Some(form) = &mut app.form else {
        return;
    };
    let date_input = form.date_input.trim().to_string();
    let message_input = form.message_input.trim().to_string();

    if date_input.is_empty() || message_input.is_empty() {
        form.error = Some("both fields are required".to_string());
        return;
    }
    let Some(date) = parse_date(&date_input) else {
        form.error = Some(format!("not a date: {date_input} (want YYYY-MM-DD)"));
        return;
    };

    app.board.push(Message::new(date, message_input));
    app.form = None;
    app.mode = Mode::Navigate;

    // Land the cursor on the new tile: last slot of its year group.
    let groups = group::by_year(app.board.records());
    if let Some(tiles) = groups.get(&date.year()) {
        app.select_tile(TilePos {
            year: date.year(),
            index: tiles.len() - 1,
        });
    }
    app.set_status(format!("added tile for {}", date.format("%Y-%m-%d")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::FormState;
    use crate::tui::render::test_helpers::sample_app;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// The sample wall with the add form open and empty.
    fn form_app() -> App {
        let mut app = sample_app();
        app.mode = Mode::Form;
        app.form = Some(FormState::default());
        app
    }

    #[test]
    fn typing_tab_and_backspace_edit_the_draft() {
        let mut app = form_app();

        handle_form(&mut app, key(KeyCode::Char('2')));
        handle_form(&mut app, key(KeyCode::Char('0')));
        handle_form(&mut app, key(KeyCode::Tab));
        handle_form(&mut app, key(KeyCode::Char('h')));
        handle_form(&mut app, key(KeyCode::Char('i')));
        handle_form(&mut app, key(KeyCode::Backspace));

        let form = app.form.as_ref().unwrap();
        assert_eq!(form.date_input, "20");
        assert_eq!(form.message_input, "h");
        assert_eq!(form.focus, FormField::Message);
    }

    #[test]
    fn editing_clears_a_stale_error() {
        let mut app = form_app();
        app.form.as_mut().unwrap().error = Some("both fields are required".to_string());

        handle_form(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.form.as_ref().unwrap().error, None);
    }

    #[test]
    fn submit_with_empty_fields_never_reaches_the_store() {
        let mut app = form_app();
        let before = app.board.len();

        submit_form(&mut app);

        assert_eq!(app.board.len(), before);
        assert_eq!(app.mode, Mode::Form);
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.error.as_deref(), Some("both fields are required"));
    }

    #[test]
    fn submit_with_impossible_date_never_reaches_the_store() {
        let mut app = form_app();
        let form = app.form.as_mut().unwrap();
        form.date_input = "2021-02-30".to_string();
        form.message_input = "no such day".to_string();
        let before = app.board.len();

        submit_form(&mut app);

        assert_eq!(app.board.len(), before);
        let err = app.form.as_ref().unwrap().error.as_deref().unwrap();
        assert!(err.starts_with("not a date"));
    }

    #[test]
    fn submit_appends_closes_and_selects_the_new_tile() {
        let mut app = form_app();
        let form = app.form.as_mut().unwrap();
        form.date_input = "2020-12-31".to_string();
        form.message_input = "message E".to_string();

        submit_form(&mut app);

        assert_eq!(app.board.len(), 5);
        assert_eq!(app.board.records().last().unwrap().message, "message E");
        assert!(app.form.is_none());
        assert_eq!(app.mode, Mode::Navigate);
        // Cursor lands on the appended tile: last slot of the 2020 group
        assert_eq!(
            app.cursor_tile(),
            Some(TilePos { year: 2020, index: 2 })
        );
    }

    #[test]
    fn esc_discards_the_draft() {
        let mut app = form_app();
        app.form.as_mut().unwrap().date_input = "2024-01-01".to_string();
        let before = app.board.records().to_vec();

        handle_form(&mut app, key(KeyCode::Esc));

        assert!(app.form.is_none());
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.board.records(), &before);
    }
}
