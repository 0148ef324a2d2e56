use indexmap::IndexMap;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::model::Message;
use crate::ops::group;
use crate::ops::reorder::DragState;
use crate::tui::app::{App, Mode, TilePos};
use crate::util::unicode;

/// Tile geometry: a bordered card with two content lines.
const TILE_H: u16 = 4;
const TILE_MIN_W: u16 = 26;
const TILE_MAX_W: u16 = 44;
const TILE_GAP: u16 = 2;

/// One virtual row of the wall. Rows are the scroll unit, so a tile row
/// is either fully on screen or not drawn at all.
struct WallRow {
    kind: RowKind,
    height: u16,
}

enum RowKind {
    YearHeader { year: i32, count: usize },
    /// `start..start + count` are group-local tile indices.
    Tiles { year: i32, start: usize, count: usize },
    Blank,
    Footer,
}

/// Render the wall: year groups newest-first, tiles in a grid.
pub fn render_wall(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let dim = app.theme.dim;

    if app.board.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tiles yet. Press a to add one.",
            Style::default().fg(dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        let msg_area = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(2), 1);
        frame.render_widget(empty, msg_area);
        return;
    }

    let (cols, tile_w) = grid_dimensions(area.width);
    app.grid_cols = cols as usize;

    let groups = group::by_year(app.board.records());
    let rows = build_rows(&groups, cols as usize);

    // Keep the cursor's row on screen
    if let Some(pos) = app.cursor_tile() {
        let cursor_row = rows.iter().position(|row| match row.kind {
            RowKind::Tiles { year, start, count } => {
                year == pos.year && pos.index >= start && pos.index < start + count
            }
            _ => false,
        });
        if let Some(cursor_row) = cursor_row {
            app.scroll_offset = adjust_scroll(&rows, app.scroll_offset, area.height, cursor_row);
        }
    }
    app.scroll_offset = app.scroll_offset.min(rows.len().saturating_sub(1));

    // Walk rows from the scroll position, stopping at the bottom edge
    let mut y = area.y;
    let mut drawn = app.scroll_offset;
    for row in rows.iter().skip(app.scroll_offset) {
        if y + row.height > area.y + area.height {
            break;
        }
        match row.kind {
            RowKind::YearHeader { year, count } => {
                render_year_header(frame, app, area, y, year, count);
            }
            RowKind::Tiles { year, start, count } => {
                render_tile_row(frame, app, &groups, area, y, tile_w, year, start, count);
            }
            RowKind::Blank => {}
            RowKind::Footer => render_footer(frame, app, area, y),
        }
        y += row.height;
        drawn += 1;
    }

    // Cut-off indicator: rows remain below the fold
    if drawn < rows.len() && area.height > 0 {
        let indicator = Paragraph::new(Line::from(Span::styled(
            "\u{2193} more",
            Style::default().fg(dim).bg(bg),
        )));
        let last_line = Rect::new(area.x + 1, area.y + area.height - 1, 6.min(area.width), 1);
        frame.render_widget(indicator, last_line);
    }
}

/// Column count and tile width for a given wall width.
fn grid_dimensions(width: u16) -> (u16, u16) {
    let usable = width.saturating_sub(2);
    let cols = ((usable + TILE_GAP) / (TILE_MIN_W + TILE_GAP)).max(1);
    let tile_w = ((usable - (cols - 1) * TILE_GAP) / cols).clamp(TILE_MIN_W, TILE_MAX_W);
    (cols, tile_w)
}

fn build_rows(groups: &IndexMap<i32, Vec<Message>>, cols: usize) -> Vec<WallRow> {
    let mut rows = Vec::new();
    for year in group::years_newest_first(groups) {
        let Some(tiles) = groups.get(&year) else {
            continue;
        };
        rows.push(WallRow {
            kind: RowKind::YearHeader {
                year,
                count: tiles.len(),
            },
            height: 1,
        });
        let mut start = 0;
        while start < tiles.len() {
            let count = cols.min(tiles.len() - start);
            rows.push(WallRow {
                kind: RowKind::Tiles { year, start, count },
                height: TILE_H,
            });
            start += count;
        }
        rows.push(WallRow {
            kind: RowKind::Blank,
            height: 1,
        });
    }
    rows.push(WallRow {
        kind: RowKind::Footer,
        height: 1,
    });
    rows
}

/// Scroll (in row units) so the cursor's row is fully visible.
fn adjust_scroll(rows: &[WallRow], scroll: usize, viewport: u16, cursor_row: usize) -> usize {
    let mut scroll = scroll.min(rows.len().saturating_sub(1));
    if cursor_row < scroll {
        return cursor_row;
    }
    loop {
        let visible: u32 = rows[scroll..=cursor_row]
            .iter()
            .map(|r| u32::from(r.height))
            .sum();
        if visible <= u32::from(viewport) || scroll == cursor_row {
            return scroll;
        }
        scroll += 1;
    }
}

fn render_year_header(frame: &mut Frame, app: &App, area: Rect, y: u16, year: i32, count: usize) {
    let bg = app.theme.background;
    let line = Line::from(vec![
        Span::styled(
            format!(" Year: {}", year),
            Style::default()
                .fg(app.theme.year_header)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  \u{00B7} {}", tile_count_label(count)),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    let row_area = Rect::new(area.x, y, area.width, 1);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), row_area);
}

fn tile_count_label(count: usize) -> String {
    if count == 1 {
        "1 tile".to_string()
    } else {
        format!("{} tiles", count)
    }
}

#[allow(clippy::too_many_arguments)]
fn render_tile_row(
    frame: &mut Frame,
    app: &App,
    groups: &IndexMap<i32, Vec<Message>>,
    area: Rect,
    y: u16,
    tile_w: u16,
    year: i32,
    start: usize,
    count: usize,
) {
    let Some(tiles) = groups.get(&year) else {
        return;
    };
    for i in 0..count {
        let index = start + i;
        let Some(message) = tiles.get(index) else {
            continue;
        };
        let x = area.x + 1 + (i as u16) * (tile_w + TILE_GAP);
        if x + tile_w > area.x + area.width {
            break;
        }
        let tile_area = Rect::new(x, y, tile_w, TILE_H);
        render_tile(frame, app, tile_area, TilePos { year, index }, message);
    }
}

fn render_tile(frame: &mut Frame, app: &App, area: Rect, pos: TilePos, message: &Message) {
    let theme = &app.theme;
    let bg = theme.background;
    let is_cursor = app.cursor_tile() == Some(pos);
    let is_source = matches!(
        app.drag,
        DragState::Dragging { year, index } if year == pos.year && index == pos.index
    );

    // Border tells the story: the grabbed tile keeps the drag color, the
    // cursor shows whether a drop here would land.
    let border = if is_source {
        theme.drag
    } else if is_cursor && app.mode == Mode::Drag {
        match app.drag {
            DragState::Dragging { year, .. } if year == pos.year => theme.accent,
            _ => theme.error,
        }
    } else if is_cursor {
        theme.highlight
    } else {
        theme.tile_border
    };

    let mut border_style = Style::default().fg(border).bg(bg);
    if is_cursor || is_source {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::bordered()
        .border_style(border_style)
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let date_style = Style::default().fg(theme.tile_date).bg(bg);
    let text_style = if is_cursor {
        Style::default().fg(theme.text_bright).bg(bg)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };

    let mut date_line = vec![Span::styled(
        unicode::truncate_to_width(&message.date_str(), width),
        date_style,
    )];
    // Grab marker: ◆ after the date
    if is_source && width > 12 {
        date_line.push(Span::styled(
            " \u{25C6}",
            Style::default().fg(theme.drag).bg(bg),
        ));
    }

    let lines = vec![
        Line::from(date_line),
        Line::from(Span::styled(
            unicode::truncate_to_width(&message.message, width),
            text_style,
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect, y: u16) {
    let bg = app.theme.background;
    let text = if app.board.has_more() {
        "\u{00B7} more tiles below \u{00B7}"
    } else {
        "\u{00B7} no more tiles to load \u{00B7}"
    };
    let line = Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    let row_area = Rect::new(area.x, y, area.width, 1);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), row_area);
}
