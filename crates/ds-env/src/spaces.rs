//! Action and observation space descriptors.
//!
//! Static metadata a training driver can introspect to size its policy
//! network; the environment itself only uses them for validation and
//! sampling.

use ds_core::EnvRng;

// ── Discrete ──────────────────────────────────────────────────────────────────

/// `n` actions labelled `0..n`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Discrete {
    pub n: usize,
}

impl Discrete {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// `true` iff `0 <= action < n`.
    #[inline]
    pub fn contains(&self, action: i64) -> bool {
        usize::try_from(action).is_ok_and(|a| a < self.n)
    }

    /// A uniformly random valid action.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`; the environment builder rejects empty action sets.
    #[inline]
    pub fn sample(&self, rng: &mut EnvRng) -> usize {
        rng.gen_range(0..self.n)
    }
}

// ── BoxSpace ──────────────────────────────────────────────────────────────────

/// A `dim`-dimensional box with the same bounds on every axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxSpace {
    pub low:  f64,
    pub high: f64,
    pub dim:  usize,
}

impl BoxSpace {
    pub fn new(low: f64, high: f64, dim: usize) -> Self {
        Self { low, high, dim }
    }

    /// The unit box `[0, 1]^dim`.
    pub fn unit(dim: usize) -> Self {
        Self::new(0.0, 1.0, dim)
    }

    /// `true` iff `v` has length `dim` and every entry lies in `[low, high]`.
    pub fn contains(&self, v: &[f64]) -> bool {
        v.len() == self.dim && v.iter().all(|x| (self.low..=self.high).contains(x))
    }
}
