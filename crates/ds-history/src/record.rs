//! One observed activity occurrence.

use ds_core::ActivityCode;

/// A single row of historical activity data.
///
/// `hour` is kept as a signed, optional integer exactly as read: the dataset
/// may lack an hour column entirely, leave cells empty, or contain values
/// outside 0–23.  Consumers decide what to do with those.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoricalRecord {
    /// Hour of day the activity was observed at, if known.
    pub hour: Option<i64>,

    /// Encoded activity identifier.
    pub activity_code: ActivityCode,

    /// Human-readable activity name, if the dataset carries one.
    pub activity_name: Option<String>,
}

impl HistoricalRecord {
    /// A record with an hour and no name — the common case in tests.
    pub fn new(hour: i64, activity_code: ActivityCode) -> Self {
        Self { hour: Some(hour), activity_code, activity_name: None }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.activity_name = Some(name.into());
        self
    }

    /// The hour as a table index, or `None` if missing or outside 0..`hours`.
    #[inline]
    pub fn hour_index(&self, hours: usize) -> Option<usize> {
        self.hour
            .and_then(|h| usize::try_from(h).ok())
            .filter(|&h| h < hours)
    }
}
