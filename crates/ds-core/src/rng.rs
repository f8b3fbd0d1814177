//! Per-environment RNG wrapper.
//!
//! Every environment instance owns exactly one `EnvRng`.  There is no
//! process-global random source: day-of-week sampling and invalid-action
//! substitution both draw from the instance's own stream, so two environments
//! built with the same seed replay identical episodes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG owned by a single environment.
pub struct EnvRng(SmallRng);

impl EnvRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        EnvRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Episodes are not reproducible.
    pub fn from_entropy() -> Self {
        EnvRng(SmallRng::from_entropy())
    }

    /// Build from an optional seed: `Some` → [`new`][Self::new], `None` →
    /// [`from_entropy`][Self::from_entropy].
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
