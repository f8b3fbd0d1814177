//! Strongly typed activity identifier.
//!
//! Activity codes come from the historical dataset (typically a label-encoded
//! activity column).  They are `Copy + Ord + Hash` so they can key maps and be
//! sorted into the environment's catalogue without ceremony.

use std::fmt;

/// Identifier of an activity type as it appears in the historical data.
///
/// `ActivityCode(0)` doubles as the "unfilled" value in a fresh schedule,
/// matching the zeroed schedule arrays training code expects.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityCode(pub u32);

impl ActivityCode {
    /// Value written into slots that have not been planned yet.
    pub const UNFILLED: ActivityCode = ActivityCode(0);
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ActivityCode {
    #[inline(always)]
    fn from(code: u32) -> ActivityCode {
        ActivityCode(code)
    }
}
