//! `ds-env` — single-agent environment for planning one day, hour by hour.
//!
//! # Episode loop
//!
//! ```text
//! obs = env.reset()                     day_of_week sampled, schedule zeroed
//! loop:
//!   ① Resolve  — invalid action index → uniformly random valid index
//!   ② Reward   — time_score(code, slot) * 2 + sequence(prev, code) [slot > 0]
//!   ③ Write    — schedule[slot] = code; last_activity = code
//!   ④ Advance  — slot += 1; done = slot == num_slots
//! ```
//!
//! Stepping a finished episode is an error ([`EnvError::EpisodeFinished`]);
//! call [`ScheduleEnv::reset`] to start the next day.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ds_env::EnvBuilder;
//! use ds_history::load_history_csv;
//!
//! let history = load_history_csv(path)?;
//! let mut env = EnvBuilder::new(&history).seed(42).build()?;
//! let mut obs = env.reset();
//! loop {
//!     let step = env.step(policy(&obs))?;
//!     obs = step.observation;
//!     if step.done { break; }
//! }
//! env.render()?;
//! ```

pub mod builder;
pub mod env;
pub mod error;
pub mod observation;
pub mod render;
pub mod spaces;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::EnvBuilder;
pub use env::ScheduleEnv;
pub use error::{EnvError, EnvResult};
pub use observation::Observation;
pub use render::ScheduleView;
pub use spaces::{BoxSpace, Discrete};
pub use state::{EpisodeState, StepInfo, StepResult};
