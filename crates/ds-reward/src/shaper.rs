//! `RewardShaper` — combines preference scores into a single step reward.

use ds_core::{ActivityCode, CoreResult, RewardConfig};

use crate::{ActivityPreferenceModel, SequenceScorer};

/// The terms that made up one reward, for diagnostics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RewardBreakdown {
    /// Raw time-preference score (before weighting).
    pub time_score: f64,

    /// Sequence score, or `None` for the first slot.
    pub sequence_score: Option<f64>,

    /// Final reward after weighting and flooring.
    pub total: f64,
}

/// Applies [`RewardConfig`] weights to preference-model scores.
#[derive(Clone, Debug)]
pub struct RewardShaper {
    config: RewardConfig,
}

impl RewardShaper {
    pub fn new(config: RewardConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Reward for placing `action` in `slot`.
    ///
    /// `previous` is the activity already stored in `slot - 1`, or `None` when
    /// `slot == 0`.  The result is never below `reward_floor` and has no upper
    /// bound.
    pub fn reward<S: SequenceScorer>(
        &self,
        model:    &ActivityPreferenceModel<S>,
        action:   ActivityCode,
        slot:     usize,
        previous: Option<ActivityCode>,
    ) -> RewardBreakdown {
        let time_score = model.time_preference_score(action, slot);
        let sequence_score = previous.map(|prev| model.activity_sequence_score(prev, action));

        let raw = time_score * self.config.time_weight + sequence_score.unwrap_or(0.0);
        RewardBreakdown {
            time_score,
            sequence_score,
            total: raw.max(self.config.reward_floor),
        }
    }
}

impl Default for RewardShaper {
    fn default() -> Self {
        Self { config: RewardConfig::default() }
    }
}
