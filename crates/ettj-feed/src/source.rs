//! Loading parameter rows from files and URLs.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FeedError, FeedResult};
use crate::row::{normalize_date, NssRow};

/// Columns every parameter export must carry.
pub const REQUIRED_COLUMNS: [&str; 8] = ["type", "date", "b1", "b2", "b3", "b4", "l1", "l2"];

/// On-disk record shape; the date stays raw until normalized.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    curve_type: String,
    date: String,
    b1: f64,
    b2: f64,
    b3: f64,
    b4: f64,
    l1: f64,
    l2: f64,
}

/// Reads and validates parameter rows from any CSV reader.
///
/// The header must contain every column in [`REQUIRED_COLUMNS`]; extra
/// columns are ignored. Any malformed row or date aborts the load.
pub fn from_reader<R: Read>(input: R) -> FeedResult<Vec<NssRow>> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| FeedError::Parse {
            reason: e.to_string(),
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(FeedError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let record: RawRecord = result.map_err(|e| FeedError::Parse {
            reason: e.to_string(),
        })?;

        rows.push(NssRow {
            curve_type: record.curve_type,
            date: normalize_date(&record.date)?,
            b1: record.b1,
            b2: record.b2,
            b3: record.b3,
            b4: record.b4,
            l1: record.l1,
            l2: record.l2,
        });
    }

    log::debug!("loaded {} parameter rows", rows.len());
    Ok(rows)
}

/// Loads parameter rows from a local CSV file.
pub fn load_path(path: impl AsRef<Path>) -> FeedResult<Vec<NssRow>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| FeedError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    from_reader(file)
}

/// Fetches parameter rows from an HTTP URL.
///
/// Blocking; intended for the CLI boundary, not for library callers on an
/// async runtime.
pub fn load_url(url: &str) -> FeedResult<Vec<NssRow>> {
    let response = reqwest::blocking::get(url).map_err(|e| FeedError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if !response.status().is_success() {
        return Err(FeedError::Fetch {
            url: url.to_string(),
            reason: format!("HTTP status {}", response.status()),
        });
    }

    let body = response.text().map_err(|e| FeedError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    from_reader(body.as_bytes())
}

/// Picks the most recent row per curve-type tag.
pub fn latest_by_type(rows: &[NssRow]) -> HashMap<&str, &NssRow> {
    let mut latest: HashMap<&str, &NssRow> = HashMap::new();
    for row in rows {
        latest
            .entry(row.curve_type.as_str())
            .and_modify(|current| {
                if row.date > current.date {
                    *current = row;
                }
            })
            .or_insert(row);
    }

    latest
}
