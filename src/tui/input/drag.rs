use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::reorder::DropOutcome;
use crate::tui::app::{App, Mode};

use super::*;

/// Drag mode: a tile is grabbed and the cursor chooses the drop target.
///
/// Only movement, drop, and cancel are bound here. Sort, restore, add and
/// quit don't exist while a drag is live, so a half-finished drag can
/// never interleave with another wall mutation.
pub(super) fn handle_drag(app: &mut App, key: KeyEvent) {
    app.status_message = None;
    app.status_is_error = false;

    match key.code {
        KeyCode::Esc => {
            app.drag.cancel();
            app.mode = Mode::Navigate;
            app.set_status("move cancelled");
        }
        KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char(' ') => drop_tile(app),

        KeyCode::Char('h') | KeyCode::Left => move_cursor(app, -1),
        KeyCode::Char('l') | KeyCode::Right => move_cursor(app, 1),
        KeyCode::Char('j') | KeyCode::Down => move_cursor_row(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor_row(app, -1),
        KeyCode::Char('g') => jump_top(app),
        KeyCode::Char('G') => jump_bottom(app),

        _ => {}
    }
}

fn drop_tile(app: &mut App) {
    let Some(pos) = app.cursor_tile() else {
        return;
    };
    match app.drag.drop_onto(&mut app.board, pos.year, pos.index) {
        DropOutcome::Swapped => {
            app.mode = Mode::Navigate;
            app.set_status("tile moved");
        }
        DropOutcome::RejectedCrossGroup => {
            // Not an error: the drag stays live and the user picks another
            // target. The store is untouched.
            app.set_status("tiles move within their own year");
        }
        DropOutcome::NoDrag | DropOutcome::OutOfRange => {
            app.drag.cancel();
            app.mode = Mode::Navigate;
        }
    }
}
