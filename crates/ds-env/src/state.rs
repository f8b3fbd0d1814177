//! Episode state and step results.

use ds_core::{ActivityCode, DayOfWeek};

use crate::Observation;

// ── EpisodeState ──────────────────────────────────────────────────────────────

/// Mutable per-episode bookkeeping.  Replaced wholesale by `reset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeState {
    /// Next slot to fill, `0..=num_slots`.  Equal to `num_slots` when the
    /// episode is over.
    pub current_slot: usize,

    /// Sampled once per episode.
    pub day_of_week: DayOfWeek,

    /// Most recently placed activity; `None` before the first step.
    pub last_activity: Option<ActivityCode>,
}

impl EpisodeState {
    pub(crate) fn new(day_of_week: DayOfWeek) -> Self {
        Self { current_slot: 0, day_of_week, last_activity: None }
    }
}

// ── StepResult ────────────────────────────────────────────────────────────────

/// Diagnostics attached to every step.  Not part of the reward contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepInfo {
    /// Slot pointer *after* the step.
    pub current_slot: usize,

    pub day_of_week: DayOfWeek,

    /// Action index actually taken (after any invalid-action substitution).
    pub activity: usize,

    /// Activity code the index resolved to.
    pub activity_code: ActivityCode,
}

/// Everything `step` hands back to the driver.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub reward:      f64,
    pub done:        bool,
    pub info:        StepInfo,
}
