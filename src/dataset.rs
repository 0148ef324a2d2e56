//! Where tiles come from: the built-in dataset bundled with the binary,
//! or a JSON file named with `--data`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::Message;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load a dataset from a JSON file: an array of
/// `{"date": "YYYY-MM-DD", "message": "..."}` objects, in order.
///
/// A single malformed record fails the whole load, so nothing invalid
/// ever reaches the store.
pub fn load(path: &Path) -> Result<Vec<Message>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The dataset bundled with the binary: a small project memo wall,
/// deliberately not in date order so grouping and sorting have work to do.
pub fn builtin() -> Vec<Message> {
    vec![
        tile(2023, 3, 14, "Moved the build to the new CI runners"),
        tile(2021, 6, 21, "Sent beta invites to the first cohort"),
        tile(2023, 1, 9, "Kickoff for the v2 storage layout"),
        tile(2021, 2, 2, "First green run on the integration suite"),
        tile(2022, 11, 30, "Cut the 1.0 release candidate"),
        tile(2021, 9, 17, "Postmortem for the flaky import pipeline"),
        tile(2022, 4, 1, "Renamed the project (again)"),
        tile(2020, 7, 23, "Prototype demo for the whole team"),
        tile(2022, 4, 1, "April fools build shipped by accident"),
        tile(2020, 3, 16, "Went remote, moved standup to chat"),
        tile(2023, 8, 25, "Profiling week: render loop down 40%"),
        tile(2020, 12, 18, "Feature freeze for the winter release"),
        tile(2024, 2, 29, "Leap-day bug filed, fixed, and framed"),
        tile(2022, 9, 5, "Hired the first support engineer"),
        tile(2024, 5, 11, "Docs rewrite landed on the website"),
        tile(2021, 12, 3, "Turned off the legacy importer for good"),
    ]
}

fn tile(year: i32, month: u32, day: u32, text: &str) -> Message {
    // The table above only holds valid dates.
    Message::new(NaiveDate::from_ymd_opt(year, month, day).unwrap(), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_spans_multiple_years() {
        let data = builtin();
        assert!(data.len() > crate::model::PAGE_SIZE);
        let mut years: Vec<i32> = data.iter().map(|m| m.year()).collect();
        years.sort_unstable();
        years.dedup();
        assert!(years.len() >= 3);
    }

    #[test]
    fn test_load_reads_records_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiles.json");
        fs::write(
            &path,
            r#"[
                {"date": "2021-06-21", "message": "message D"},
                {"date": "2020-06-18", "message": "message A"}
            ]"#,
        )
        .unwrap();

        let data = load(&path).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].message, "message D");
        assert_eq!(data[0].date_str(), "2021-06-21");
        assert_eq!(data[1].message, "message A");
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = load(Path::new("/no/such/tiles.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiles.json");
        fs::write(&path, "{not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_bad_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiles.json");
        // 2021-02-30 does not exist; the whole load fails.
        fs::write(
            &path,
            r#"[{"date": "2021-02-30", "message": "never lands"}]"#,
        )
        .unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_non_iso_date_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiles.json");
        fs::write(
            &path,
            r#"[{"date": "06/21/2021", "message": "wrong shape"}]"#,
        )
        .unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_load_accepts_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiles.json");
        fs::write(&path, "[]").unwrap();
        assert_eq!(load(&path).unwrap(), Vec::new());
    }
}
