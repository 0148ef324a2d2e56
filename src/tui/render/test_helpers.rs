use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::dataset;
use crate::model::{Board, Message, message::parse_date};
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

pub fn msg(date: &str, text: &str) -> Message {
    Message::new(parse_date(date).unwrap(), text)
}

/// Four tiles across two years: 2021 holds [D, C], 2020 holds [A, B].
pub fn sample_app() -> App {
    let board = Board::new(vec![
        msg("2021-06-21", "message D"),
        msg("2020-06-18", "message A"),
        msg("2021-06-20", "message C"),
        msg("2020-06-19", "message B"),
    ]);
    App::new(board, Theme::default())
}

/// The built-in dataset: sixteen tiles, first page showing.
pub fn builtin_app() -> App {
    App::new(Board::new(dataset::builtin()), Theme::default())
}

pub fn empty_app() -> App {
    App::new(Board::new(Vec::new()), Theme::default())
}
