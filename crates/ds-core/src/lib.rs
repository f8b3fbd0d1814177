//! `ds-core` — foundational types for the `day_sched` scheduling environment.
//!
//! This crate is a dependency of every other `ds-*` crate.  It has no `ds-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `ActivityCode`                                             |
//! | [`time`]   | `DayOfWeek`, `HOURS_PER_DAY`, `DEFAULT_NUM_SLOTS`          |
//! | [`rng`]    | `EnvRng` (per-environment)                                 |
//! | [`config`] | `EnvConfig`, `RewardConfig`                                |
//! | [`error`]  | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config types.    |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EnvConfig, RewardConfig};
pub use error::{CoreError, CoreResult};
pub use ids::ActivityCode;
pub use rng::EnvRng;
pub use time::{DayOfWeek, DEFAULT_NUM_SLOTS, HOURS_PER_DAY};
