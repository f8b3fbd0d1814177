//! Environment and reward configuration.
//!
//! Typically built in code by the application, or deserialized from a
//! TOML/JSON file with the `serde` feature, and handed to the environment
//! builder.

use crate::{CoreError, CoreResult, DEFAULT_NUM_SLOTS};

// ── RewardConfig ──────────────────────────────────────────────────────────────

/// Weights applied when turning preference scores into a step reward.
///
/// ```text
/// reward = max(time_score * time_weight + sequence_score, reward_floor)
/// ```
///
/// The sequence term is only added from the second slot onward.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardConfig {
    /// Multiplier on the time-preference score.  Default: 2.0.
    pub time_weight: f64,

    /// Lower bound on every reward.  Default: 0.1.
    pub reward_floor: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self { time_weight: 2.0, reward_floor: 0.1 }
    }
}

impl RewardConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !self.time_weight.is_finite() || self.time_weight < 0.0 {
            return Err(CoreError::Config(format!(
                "time_weight must be finite and non-negative, got {}",
                self.time_weight
            )));
        }
        if !self.reward_floor.is_finite() || self.reward_floor <= 0.0 {
            return Err(CoreError::Config(format!(
                "reward_floor must be finite and positive, got {}",
                self.reward_floor
            )));
        }
        Ok(())
    }
}

// ── EnvConfig ─────────────────────────────────────────────────────────────────

/// Top-level environment configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvConfig {
    /// Slots per episode.  Default: 24 (one per hour).
    pub num_slots: usize,

    /// RNG seed.  `None` seeds from OS entropy and episodes are not
    /// reproducible.
    pub seed: Option<u64>,

    pub reward: RewardConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_slots: DEFAULT_NUM_SLOTS,
            seed:      None,
            reward:    RewardConfig::default(),
        }
    }
}

impl EnvConfig {
    /// Observation vector length: 3 scalar features + one flag per slot.
    #[inline]
    pub fn observation_dim(&self) -> usize {
        3 + self.num_slots
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.num_slots == 0 {
            return Err(CoreError::Config("num_slots must be > 0".into()));
        }
        self.reward.validate()
    }
}
