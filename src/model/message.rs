use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single tile: a calendar date plus free text.
///
/// Tiles carry no identity beyond their position in the store; two tiles
/// with the same date and text are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Free text. No length or content constraints.
    pub message: String,
}

impl Message {
    pub fn new(date: NaiveDate, message: impl Into<String>) -> Self {
        Message {
            date,
            message: message.into(),
        }
    }

    /// The calendar year used as the grouping key.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The date in display form (`YYYY-MM-DD`).
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Parse a `YYYY-MM-DD` date string. This is the only accepted input form;
/// anything else (including real-but-differently-formatted dates) is None.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
