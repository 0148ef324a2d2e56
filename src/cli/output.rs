use serde::Serialize;

use crate::model::Message;
use crate::ops::group;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TileJson {
    pub date: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct YearGroupJson {
    pub year: i32,
    pub tiles: Vec<TileJson>,
}

#[derive(Serialize)]
pub struct WallJson {
    pub total: usize,
    pub years: Vec<YearGroupJson>,
}

#[derive(Serialize)]
pub struct YearStatsJson {
    pub year: i32,
    pub tiles: usize,
    pub first: String,
    pub last: String,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub years: Vec<YearStatsJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn tile_to_json(message: &Message) -> TileJson {
    TileJson {
        date: message.date_str(),
        message: message.message.clone(),
    }
}

/// The wall as JSON, grouped by year, newest year first.
pub fn wall_to_json(records: &[Message]) -> WallJson {
    let groups = group::by_year(records);
    let mut years = Vec::new();
    for year in group::years_newest_first(&groups) {
        let Some(tiles) = groups.get(&year) else {
            continue;
        };
        years.push(YearGroupJson {
            year,
            tiles: tiles.iter().map(tile_to_json).collect(),
        });
    }
    WallJson {
        total: records.len(),
        years,
    }
}

/// Per-year counts and date ranges, newest year first.
pub fn stats_to_json(records: &[Message]) -> StatsJson {
    let groups = group::by_year(records);
    let mut years = Vec::new();
    for year in group::years_newest_first(&groups) {
        let Some(tiles) = groups.get(&year) else {
            continue;
        };
        let (Some(first), Some(last)) = (
            tiles.iter().map(|m| m.date).min(),
            tiles.iter().map(|m| m.date).max(),
        ) else {
            continue;
        };
        years.push(YearStatsJson {
            year,
            tiles: tiles.len(),
            first: first.format("%Y-%m-%d").to_string(),
            last: last.format("%Y-%m-%d").to_string(),
        });
    }
    StatsJson {
        total: records.len(),
        years,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn tile_count(n: usize) -> String {
    if n == 1 {
        "1 tile".to_string()
    } else {
        format!("{} tiles", n)
    }
}

/// Format a single tile as a one-line summary
pub fn format_tile_line(message: &Message) -> String {
    format!("  {}  {}", message.date_str(), message.message)
}

/// Format a year group header
pub fn format_year_header(year: i32, count: usize) -> String {
    format!("== {} ({}) ==", year, tile_count(count))
}

/// Format the whole wall, grouped by year, newest year first
pub fn format_wall_listing(records: &[Message]) -> Vec<String> {
    if records.is_empty() {
        return vec!["(no tiles)".to_string()];
    }

    let groups = group::by_year(records);
    let mut lines = Vec::new();
    for (i, year) in group::years_newest_first(&groups).into_iter().enumerate() {
        let Some(tiles) = groups.get(&year) else {
            continue;
        };
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format_year_header(year, tiles.len()));
        for tile in tiles {
            lines.push(format_tile_line(tile));
        }
    }
    lines
}

/// Format per-year stats
pub fn format_stats(records: &[Message]) -> Vec<String> {
    let stats = stats_to_json(records);
    let mut lines = vec![format!(
        "{} across {}",
        tile_count(stats.total),
        if stats.years.len() == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", stats.years.len())
        }
    )];
    if !stats.years.is_empty() {
        lines.push(String::new());
        for y in &stats.years {
            lines.push(format!(
                "  {}  {:<8}  {} .. {}",
                y.year,
                tile_count(y.tiles),
                y.first,
                y.last
            ));
        }
    }
    lines
}
