//! CSV history loader.
//!
//! # CSV format
//!
//! One row per observed activity occurrence.  Column order is free and extra
//! columns are ignored.
//!
//! ```csv
//! hour,activity_code,activity_name
//! 7,0,Breakfast
//! 9,1,Work
//! 12,2,Lunch
//! ```
//!
//! | Column          | Alias               | Required for                   |
//! |-----------------|---------------------|--------------------------------|
//! | `hour`          |                     | time preferences               |
//! | `activity_code` | `ACTIVITY_NAME_ENC` | everything (the action set)    |
//! | `activity_name` | `ACTIVITY_NAME`     | display names only             |
//!
//! A missing column is recorded in [`Columns`] rather than rejected.  Without
//! an activity-code column no records are produced.  When a header row holds
//! both a canonical name and its alias, the canonical column is read and the
//! alias ignored.
//!
//! Cells are read by position.  Integral floats (`9.0`, as written by tools
//! that store integer columns with gaps as floats) are accepted for both
//! `hour` and `activity_code`.  An `hour` cell that is empty or not an
//! integer becomes `None`; an empty or non-integer activity code is a parse
//! error.

use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use ds_core::ActivityCode;

use crate::{Columns, HistoricalRecord, HistoryDataset, HistoryError, HistoryResult};

const HOUR_COLUMN: &str = "hour";
const CODE_COLUMNS: [&str; 2] = ["activity_code", "ACTIVITY_NAME_ENC"];
const NAME_COLUMNS: [&str; 2] = ["activity_name", "ACTIVITY_NAME"];

// ── Column layout ─────────────────────────────────────────────────────────────

/// Header position of each logical column, if present.
struct ColumnIndex {
    hour:          Option<usize>,
    activity_code: Option<usize>,
    activity_name: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        // Earlier entries in `names` win, so canonical names beat aliases.
        let find = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| headers.iter().position(|h| h == *name))
        };
        Self {
            hour:          find(&[HOUR_COLUMN]),
            activity_code: find(&CODE_COLUMNS),
            activity_name: find(&NAME_COLUMNS),
        }
    }

    fn columns(&self) -> Columns {
        Columns {
            hour:          self.hour.is_some(),
            activity_code: self.activity_code.is_some(),
            activity_name: self.activity_name.is_some(),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`HistoryDataset`] from a CSV file with a header row.
pub fn load_history_csv(path: &Path) -> HistoryResult<HistoryDataset> {
    let file = std::fs::File::open(path)?;
    load_history_reader(file)
}

/// Like [`load_history_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding sample data.
pub fn load_history_reader<R: Read>(reader: R) -> HistoryResult<HistoryDataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // ── Detect columns ────────────────────────────────────────────────────
    let headers = csv_reader.headers()?.clone();
    let index = ColumnIndex::from_headers(&headers);
    let columns = index.columns();

    let Some(code_idx) = index.activity_code else {
        warn!(headers = ?headers, "history has no activity code column; dataset is empty");
        return Ok(HistoryDataset::new(Vec::new(), columns));
    };
    if !columns.hour {
        warn!("history has no hour column; time preferences will use default scores");
    }

    // ── Parse rows ────────────────────────────────────────────────────────
    let mut records = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let row_no = i + 1;
        let row = result.map_err(|e| HistoryError::Parse { row: row_no, message: e.to_string() })?;
        let cell = |idx: Option<usize>| idx.and_then(|pos| row.get(pos)).filter(|c| !c.is_empty());

        let code = match cell(Some(code_idx)) {
            None => {
                return Err(HistoryError::Parse { row: row_no, message: "missing activity code".into() });
            }
            Some(raw) => parse_integral(raw)
                .and_then(|c| u32::try_from(c).ok())
                .ok_or_else(|| HistoryError::Parse {
                    row:     row_no,
                    message: format!("invalid activity code {raw:?}"),
                })?,
        };

        records.push(HistoricalRecord {
            hour:          cell(index.hour).and_then(parse_integral),
            activity_code: ActivityCode(code),
            activity_name: cell(index.activity_name).map(str::to_owned),
        });
    }

    info!(rows = records.len(), ?columns, "loaded activity history");
    Ok(HistoryDataset::new(records, columns))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse `9` or `9.0` as 9.  Fractional, non-finite, or non-numeric input
/// yields `None`.
fn parse_integral(raw: &str) -> Option<i64> {
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    let f = raw.parse::<f64>().ok()?;
    let in_range = f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64;
    in_range.then_some(f as i64)
}
