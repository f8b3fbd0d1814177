//! The `ScheduleEnv` struct and its episode loop.

use std::path::Path;

use tracing::debug;

use ds_core::{ActivityCode, DayOfWeek, EnvRng};
use ds_history::{ActivityCatalogue, HistoryDataset, load_history_csv};
use ds_reward::{ActivityPreferenceModel, NeutralSequence, RewardShaper, SequenceScorer};

use crate::{
    BoxSpace, Discrete, EnvBuilder, EnvError, EnvResult, EpisodeState, Observation, StepInfo,
    StepResult,
};

// ── ScheduleEnv ───────────────────────────────────────────────────────────────

/// Plans one day, one activity per slot.
///
/// `ScheduleEnv<S>` owns the in-progress schedule, the episode state, and its
/// own RNG.  Two lifecycle states exist:
///
/// - **Active**: `current_slot < num_slots`; `step` fills the next slot.
/// - **Terminal**: `current_slot == num_slots`; `step` returns
///   [`EnvError::EpisodeFinished`] until [`reset`][Self::reset] is called.
///
/// Create via [`EnvBuilder`] or [`ScheduleEnv::new`].
pub struct ScheduleEnv<S: SequenceScorer = NeutralSequence> {
    pub(crate) num_slots: usize,

    /// Sorted activity codes; action `i` places `catalogue.codes()[i]`.
    pub(crate) catalogue: ActivityCatalogue,

    pub(crate) preferences: ActivityPreferenceModel<S>,

    pub(crate) shaper: RewardShaper,

    pub(crate) action_space: Discrete,

    pub(crate) observation_space: BoxSpace,

    /// Length `num_slots`.  Slots at or past `current_slot` hold
    /// `ActivityCode::UNFILLED`.
    pub(crate) schedule: Vec<ActivityCode>,

    pub(crate) state: EpisodeState,

    pub(crate) rng: EnvRng,
}

impl ScheduleEnv {
    /// Build with default reward weights, the neutral sequence scorer, and an
    /// entropy-seeded RNG.
    pub fn new(dataset: &HistoryDataset, num_slots: usize) -> EnvResult<Self> {
        EnvBuilder::new(dataset).num_slots(num_slots).build()
    }

    /// Load the history from a CSV file and build as in [`new`][Self::new].
    pub fn from_csv(path: &Path, num_slots: usize) -> EnvResult<Self> {
        let dataset = load_history_csv(path)?;
        Self::new(&dataset, num_slots)
    }
}

impl<S: SequenceScorer> ScheduleEnv<S> {
    // ── Episode lifecycle ─────────────────────────────────────────────────

    /// Start a new episode: clear the schedule, rewind the slot pointer, and
    /// sample a fresh day of the week.
    pub fn reset(&mut self) -> Observation {
        let day_index: usize = self.rng.gen_range(0..DayOfWeek::COUNT);
        let day = DayOfWeek::from_index(day_index).unwrap_or(DayOfWeek::Sunday);

        self.schedule.clear();
        self.schedule.resize(self.num_slots, ActivityCode::UNFILLED);
        self.state = EpisodeState::new(day);

        debug!(day = %day, "episode reset");
        self.observation()
    }

    /// Place an activity in the current slot.
    ///
    /// `action` is a catalogue index.  Out-of-range values (negative or
    /// `>= num_activities`) are replaced by a uniformly random valid index;
    /// `info.activity` reports the index actually used.
    ///
    /// Returns [`EnvError::EpisodeFinished`] if every slot is already filled.
    pub fn step(&mut self, action: i64) -> EnvResult<StepResult> {
        if self.is_done() {
            return Err(EnvError::EpisodeFinished { num_slots: self.num_slots });
        }

        // ── ① Resolve ─────────────────────────────────────────────────────
        let index = if self.action_space.contains(action) {
            action as usize
        } else {
            let substitute = self.action_space.sample(&mut self.rng);
            debug!(requested = action, substitute, "invalid action replaced");
            substitute
        };
        let code = self.catalogue.codes()[index];

        // ── ② Reward ──────────────────────────────────────────────────────
        let slot = self.state.current_slot;
        let previous = slot.checked_sub(1).map(|p| self.schedule[p]);
        let reward = self.shaper.reward(&self.preferences, code, slot, previous);

        // ── ③ Write ───────────────────────────────────────────────────────
        self.schedule[slot] = code;
        self.state.last_activity = Some(code);

        // ── ④ Advance ─────────────────────────────────────────────────────
        self.state.current_slot += 1;
        let done = self.is_done();

        debug!(slot, activity = %code, reward = reward.total, done, "step");

        Ok(StepResult {
            observation: self.observation(),
            reward:      reward.total,
            done,
            info: StepInfo {
                current_slot:  self.state.current_slot,
                day_of_week:   self.state.day_of_week,
                activity:      index,
                activity_code: code,
            },
        })
    }

    /// Observation for the current state (see [`Observation`] for layout).
    pub fn observation(&self) -> Observation {
        let n = self.catalogue.len();
        let last_fraction = match self.state.last_activity {
            Some(code) if n > 1 => {
                self.catalogue.index_of(code).unwrap_or(0) as f64 / (n - 1) as f64
            }
            _ => 0.0,
        };
        Observation::build(
            self.state.current_slot as f64 / self.num_slots as f64,
            self.state.day_of_week.normalized(),
            last_fraction,
            self.state.current_slot,
            self.num_slots,
        )
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.state.current_slot >= self.num_slots
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Display name for `code`, falling back to `"Activity {code}"`.
    pub fn activity_name(&self, code: ActivityCode) -> String {
        self.catalogue.name(code)
    }

    pub fn action_space(&self) -> Discrete {
        self.action_space
    }

    pub fn observation_space(&self) -> BoxSpace {
        self.observation_space
    }

    pub fn num_slots(&self) -> usize {
        self.num_slots
    }

    pub fn num_activities(&self) -> usize {
        self.catalogue.len()
    }

    pub fn state(&self) -> &EpisodeState {
        &self.state
    }

    /// The full schedule, including unfilled slots.
    pub fn schedule(&self) -> &[ActivityCode] {
        &self.schedule
    }

    pub fn catalogue(&self) -> &ActivityCatalogue {
        &self.catalogue
    }

    pub fn preferences(&self) -> &ActivityPreferenceModel<S> {
        &self.preferences
    }

    pub fn reward_shaper(&self) -> &RewardShaper {
        &self.shaper
    }
}
