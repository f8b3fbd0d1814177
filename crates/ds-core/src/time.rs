//! Day and hour model.
//!
//! One simulated day is split into hourly slots.  The environment defaults to
//! [`DEFAULT_NUM_SLOTS`] slots so that slot index == hour of day; environments
//! configured with more slots than [`HOURS_PER_DAY`] simply get the default
//! time-preference score for the overflow slots.

use std::fmt;

/// Hour buckets in a day; the width of every time-preference row.
pub const HOURS_PER_DAY: usize = 24;

/// Slots per episode when none are configured.
pub const DEFAULT_NUM_SLOTS: usize = HOURS_PER_DAY;

// ── DayOfWeek ─────────────────────────────────────────────────────────────────

/// Day of the week, sampled once per episode.
///
/// Index 0 is Sunday, matching the week layout of the source activity data.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const COUNT: usize = 7;

    pub const ALL: [DayOfWeek; Self::COUNT] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Day for index `i` (0 = Sunday), or `None` if `i >= 7`.
    #[inline]
    pub fn from_index(i: usize) -> Option<DayOfWeek> {
        Self::ALL.get(i).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `index / 6`, in [0, 1].  Used directly as an observation feature.
    #[inline]
    pub fn normalized(self) -> f64 {
        self.index() as f64 / (Self::COUNT - 1) as f64
    }

    /// Three-letter label used by the text renderer.
    pub fn short_name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday    => "Sun",
            DayOfWeek::Monday    => "Mon",
            DayOfWeek::Tuesday   => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday  => "Thu",
            DayOfWeek::Friday    => "Fri",
            DayOfWeek::Saturday  => "Sat",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
