use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FormState, Mode};

use super::*;

/// How close the cursor can ride to the end of the wall before the next
/// page is pulled in. The TUI's stand-in for scrolling near the bottom.
const LOAD_AHEAD: usize = 3;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_is_error = false;

    match (key.modifiers, key.code) {
        // Quit
        (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Cursor movement
        (_, KeyCode::Char('h')) | (_, KeyCode::Left) => move_cursor(app, -1),
        (_, KeyCode::Char('l')) | (_, KeyCode::Right) => move_cursor(app, 1),
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor_row(app, 1),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor_row(app, -1),
        (_, KeyCode::Char('g')) => jump_top(app),
        (_, KeyCode::Char('G')) => jump_bottom(app),

        // Wall operations
        (_, KeyCode::Char('s')) => sort_wall(app),
        (_, KeyCode::Char('o')) => restore_wall(app),
        (_, KeyCode::Char('a')) => open_form(app),
        (_, KeyCode::Char('m')) | (_, KeyCode::Char(' ')) => grab_tile(app),

        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Cursor movement (shared with drag mode)

pub(super) fn move_cursor(app: &mut App, delta: i64) {
    let len = app.visible_tiles().len();
    if len == 0 {
        return;
    }
    let cursor = app.cursor as i64 + delta;
    app.cursor = cursor.clamp(0, len as i64 - 1) as usize;
    maybe_load_more(app);
}

/// Up/down move by one grid row: the column count from the last render.
pub(super) fn move_cursor_row(app: &mut App, direction: i64) {
    move_cursor(app, direction * app.grid_cols.max(1) as i64);
}

pub(super) fn jump_top(app: &mut App) {
    app.cursor = 0;
}

pub(super) fn jump_bottom(app: &mut App) {
    let len = app.visible_tiles().len();
    if len > 0 {
        app.cursor = len - 1;
    }
    maybe_load_more(app);
}

/// Pull in the next page once the cursor gets near the end of the wall.
pub(super) fn maybe_load_more(app: &mut App) {
    if app.board.has_more() && app.cursor + LOAD_AHEAD >= app.visible_tiles().len() {
        let n = app.board.load_more();
        if n > 0 {
            app.set_status(format!("{} more tiles", n));
        }
    }
}

// ---------------------------------------------------------------------------
// Wall operations

pub(super) fn sort_wall(app: &mut App) {
    app.board.sort_by_date();
    app.clamp_cursor();
    app.set_status("sorted by date");
}

pub(super) fn restore_wall(app: &mut App) {
    app.board.restore_original();
    app.clamp_cursor();
    app.set_status("original order restored");
}

pub(super) fn open_form(app: &mut App) {
    app.form = Some(FormState::default());
    app.mode = Mode::Form;
}

pub(super) fn grab_tile(app: &mut App) {
    if let Some(pos) = app.cursor_tile() {
        app.drag.grab(pos.year, pos.index);
        app.mode = Mode::Drag;
    }
}
