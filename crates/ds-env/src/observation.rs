//! Observation vector.
//!
//! Layout (length `3 + num_slots`, every entry in [0, 1]):
//!
//! | Index       | Feature                                               |
//! |-------------|-------------------------------------------------------|
//! | 0           | `current_slot / num_slots`                            |
//! | 1           | `day_of_week / 6`                                     |
//! | 2           | `last_index / (num_activities - 1)`, 0 if one activity |
//! | 3 + i       | 1.0 if slot `i` is already planned, else 0.0          |

use std::ops::Deref;

/// A flat feature vector handed to the policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation(Vec<f64>);

impl Observation {
    /// Assemble from the three scalar features and the planned-slot count.
    pub(crate) fn build(
        slot_fraction:  f64,
        day_fraction:   f64,
        last_fraction:  f64,
        current_slot:   usize,
        num_slots:      usize,
    ) -> Self {
        let mut v = Vec::with_capacity(3 + num_slots);
        v.extend([slot_fraction, day_fraction, last_fraction]);
        v.extend((0..num_slots).map(|i| if i < current_slot { 1.0 } else { 0.0 }));
        Observation(v)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Per-slot planned flags (everything after the three scalar features).
    pub fn planned(&self) -> &[f64] {
        &self.0[3..]
    }
}

impl Deref for Observation {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}
