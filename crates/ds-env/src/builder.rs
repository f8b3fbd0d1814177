//! Fluent builder for constructing a [`ScheduleEnv`].

use tracing::info;

use ds_core::{DayOfWeek, EnvConfig, EnvRng, RewardConfig};
use ds_history::{ActivityCatalogue, HistoryDataset};
use ds_reward::{ActivityPreferenceModel, NeutralSequence, RewardShaper, SequenceScorer};

use crate::{BoxSpace, Discrete, EnvError, EnvResult, EpisodeState, ScheduleEnv};

/// Fluent builder for [`ScheduleEnv<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                           |
/// |-------------------------|-----------------------------------|
/// | `.num_slots(n)`         | 24                                |
/// | `.seed(s)`              | OS entropy (not reproducible)     |
/// | `.reward(cfg)`          | `time_weight = 2`, `floor = 0.1`  |
/// | `.config(cfg)`          | `EnvConfig::default()`            |
/// | `.sequence_scorer(s)`   | [`NeutralSequence`]               |
///
/// # Example
///
/// ```rust,ignore
/// let mut env = EnvBuilder::new(&history)
///     .num_slots(24)
///     .seed(7)
///     .build()?;
/// ```
pub struct EnvBuilder<'a, S: SequenceScorer = NeutralSequence> {
    dataset:  &'a HistoryDataset,
    config:   EnvConfig,
    sequence: S,
}

impl<'a> EnvBuilder<'a> {
    pub fn new(dataset: &'a HistoryDataset) -> Self {
        Self { dataset, config: EnvConfig::default(), sequence: NeutralSequence }
    }
}

impl<'a, S: SequenceScorer> EnvBuilder<'a, S> {
    /// Slots per episode.  Must be > 0.
    pub fn num_slots(mut self, num_slots: usize) -> Self {
        self.config.num_slots = num_slots;
        self
    }

    /// Seed the environment's RNG so episodes are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn reward(mut self, reward: RewardConfig) -> Self {
        self.config.reward = reward;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EnvConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap the transition-scoring strategy.
    pub fn sequence_scorer<T: SequenceScorer>(self, sequence: T) -> EnvBuilder<'a, T> {
        EnvBuilder { dataset: self.dataset, config: self.config, sequence }
    }

    /// Validate inputs, derive the catalogue and preference table, and return
    /// an environment that has already been reset.
    pub fn build(self) -> EnvResult<ScheduleEnv<S>> {
        self.config.validate()?;

        let catalogue = ActivityCatalogue::from_dataset(self.dataset);
        if catalogue.is_empty() {
            return Err(EnvError::NoActivities);
        }

        let preferences = ActivityPreferenceModel::with_sequence_scorer(self.dataset, self.sequence);
        let shaper = RewardShaper::new(self.config.reward.clone())?;
        let num_slots = self.config.num_slots;

        info!(
            activities = catalogue.len(),
            num_slots,
            seeded = self.config.seed.is_some(),
            "scheduling environment ready"
        );

        let mut env = ScheduleEnv {
            action_space:      Discrete::new(catalogue.len()),
            observation_space: BoxSpace::unit(self.config.observation_dim()),
            rng:               EnvRng::from_seed_opt(self.config.seed),
            schedule:          Vec::new(),
            state:             EpisodeState::new(DayOfWeek::Sunday),
            num_slots,
            catalogue,
            preferences,
            shaper,
        };
        env.reset();
        Ok(env)
    }
}
