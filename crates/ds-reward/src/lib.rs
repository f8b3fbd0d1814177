//! `ds-reward` — turns historical activity timing into step rewards.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`preference`] | `ActivityPreferenceModel` (per-activity hour distribution) |
//! | [`sequence`]   | `SequenceScorer` trait, `NeutralSequence`                  |
//! | [`shaper`]     | `RewardShaper`, `RewardBreakdown`                          |
//!
//! # Reward
//!
//! ```text
//! reward = time_score(action, slot) * time_weight
//!        + sequence_score(previous, action)        (slot > 0 only)
//! reward = max(reward, reward_floor)
//! ```

pub mod preference;
pub mod sequence;
pub mod shaper;


pub use preference::{ActivityPreferenceModel, DEFAULT_TIME_SCORE};
pub use sequence::{NEUTRAL_SEQUENCE_SCORE, NeutralSequence, SequenceScorer};
pub use shaper::{RewardBreakdown, RewardShaper};
