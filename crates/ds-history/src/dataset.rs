//! `HistoryDataset` — the full set of historical records plus column presence.

use crate::HistoricalRecord;

// ── Columns ───────────────────────────────────────────────────────────────────

/// Which logical columns the source table provided.
///
/// A missing column is not an error: the preference model degrades to an
/// empty table and the catalogue synthesizes display names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    pub hour:          bool,
    pub activity_code: bool,
    pub activity_name: bool,
}

impl Columns {
    /// Hour and activity code present, no name column.
    pub const REQUIRED: Columns = Columns { hour: true, activity_code: true, activity_name: false };

    /// Every column present.
    pub const ALL: Columns = Columns { hour: true, activity_code: true, activity_name: true };
}

// ── HistoryDataset ────────────────────────────────────────────────────────────

/// Read-only historical dataset.
#[derive(Clone, Debug)]
pub struct HistoryDataset {
    records: Vec<HistoricalRecord>,
    columns: Columns,
}

impl HistoryDataset {
    pub fn new(records: Vec<HistoricalRecord>, columns: Columns) -> Self {
        Self { records, columns }
    }

    /// Build from in-memory records.
    ///
    /// Hour and activity-code columns are marked present; the name column is
    /// present iff at least one record carries a name.
    pub fn from_records(records: Vec<HistoricalRecord>) -> Self {
        let activity_name = records.iter().any(|r| r.activity_name.is_some());
        Self {
            records,
            columns: Columns { activity_name, ..Columns::REQUIRED },
        }
    }

    /// A dataset with no records and no columns.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            columns: Columns { hour: false, activity_code: false, activity_name: false },
        }
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `true` when both columns needed for time preferences are present.
    #[inline]
    pub fn has_preference_columns(&self) -> bool {
        self.columns.hour && self.columns.activity_code
    }
}
