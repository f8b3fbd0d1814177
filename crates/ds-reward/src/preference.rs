//! `ActivityPreferenceModel` — empirical hour-of-day distribution per activity.
//!
//! # Table construction
//!
//! For each distinct activity code, count its occurrences per hour bucket and
//! divide by the activity's number of valid observations:
//!
//! ```text
//! pref[a][h] = count(a, h) / Σ_h' count(a, h')
//! ```
//!
//! Rows with at least one valid observation sum to 1.0.  Observations with a
//! missing hour or an hour outside 0–23 are dropped before normalising; an
//! activity seen only with such hours keeps an all-zero row.  This departs
//! on purpose from normalising over every observation with an hour (where
//! out-of-range hours count in the denominator and rows can sum below 1.0):
//! rows here are always proper distributions.
//!
//! Lookups for activities absent from the table (or hours ≥ 24) return
//! [`DEFAULT_TIME_SCORE`] instead of zero so unseen activities are never
//! excluded outright.  Note the asymmetry: a *known* activity at an hour it
//! was never observed in scores 0.0.

use std::collections::HashMap;

use tracing::{debug, warn};

use ds_core::{ActivityCode, HOURS_PER_DAY};
use ds_history::HistoryDataset;

use crate::{NeutralSequence, SequenceScorer};

/// Score for activities or hours missing from the table.
pub const DEFAULT_TIME_SCORE: f64 = 0.01;

type HourRow = [f64; HOURS_PER_DAY];

/// Time-preference table plus the sequence-scoring strategy.
///
/// Built once from the history; immutable afterwards.
pub struct ActivityPreferenceModel<S: SequenceScorer = NeutralSequence> {
    time_prefs: HashMap<ActivityCode, HourRow>,
    sequence:   S,
}

impl ActivityPreferenceModel {
    /// Build from `dataset` with the neutral sequence scorer.
    pub fn from_dataset(dataset: &HistoryDataset) -> Self {
        Self::with_sequence_scorer(dataset, NeutralSequence)
    }
}

impl<S: SequenceScorer> ActivityPreferenceModel<S> {
    /// Build from `dataset`, scoring transitions with `sequence`.
    ///
    /// If the dataset lacks the hour or activity-code column the table is left
    /// empty and every lookup returns [`DEFAULT_TIME_SCORE`].
    pub fn with_sequence_scorer(dataset: &HistoryDataset, sequence: S) -> Self {
        if !dataset.has_preference_columns() {
            warn!(
                columns = ?dataset.columns(),
                "history lacks hour/activity columns; time preferences disabled"
            );
            return Self { time_prefs: HashMap::new(), sequence };
        }

        // ── Count per (activity, hour) ────────────────────────────────────
        let mut counts: HashMap<ActivityCode, [u64; HOURS_PER_DAY]> = HashMap::new();
        let mut dropped = 0usize;

        for record in dataset.records() {
            let row = counts.entry(record.activity_code).or_insert([0; HOURS_PER_DAY]);
            match record.hour_index(HOURS_PER_DAY) {
                Some(h) => row[h] += 1,
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(dropped, "ignored history rows with missing or out-of-range hour");
        }

        // ── Normalise ─────────────────────────────────────────────────────
        let time_prefs: HashMap<ActivityCode, HourRow> = counts
            .into_iter()
            .map(|(code, row)| (code, normalize(&row)))
            .collect();

        debug!(activities = time_prefs.len(), "built time preference table");
        Self { time_prefs, sequence }
    }

    /// Frequency of `activity` at `hour`, or [`DEFAULT_TIME_SCORE`] when the
    /// activity is unknown or `hour >= 24`.
    #[inline]
    pub fn time_preference_score(&self, activity: ActivityCode, hour: usize) -> f64 {
        match self.time_prefs.get(&activity) {
            Some(row) if hour < HOURS_PER_DAY => row[hour],
            _ => DEFAULT_TIME_SCORE,
        }
    }

    /// How well `next` follows `previous`, per the configured strategy.
    #[inline]
    pub fn activity_sequence_score(&self, previous: ActivityCode, next: ActivityCode) -> f64 {
        self.sequence.score(previous, next)
    }

    /// The full 24-hour row for `activity`, if it appears in the table.
    pub fn hour_distribution(&self, activity: ActivityCode) -> Option<&HourRow> {
        self.time_prefs.get(&activity)
    }

    /// Activities present in the table, ascending.
    pub fn activities(&self) -> Vec<ActivityCode> {
        let mut codes: Vec<ActivityCode> = self.time_prefs.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.time_prefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_prefs.is_empty()
    }

    pub fn sequence_scorer(&self) -> &S {
        &self.sequence
    }
}

fn normalize(counts: &[u64; HOURS_PER_DAY]) -> HourRow {
    let total: u64 = counts.iter().sum();
    let mut row = [0.0; HOURS_PER_DAY];
    if total > 0 {
        for (out, &c) in row.iter_mut().zip(counts) {
            *out = c as f64 / total as f64;
        }
    }
    row
}
