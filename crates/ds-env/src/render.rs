//! Plain-text rendering of the current schedule.
//!
//! ```text
//! Slot: 3/24
//! Day: Mon
//! Schedule:
//!   00:00 - Sleep
//!   01:00 - Sleep
//!   02:00 - Sleep
//!   03:00 - [unplanned]
//!   ...
//! ```

use std::fmt;
use std::io::{self, Write};

use ds_reward::SequenceScorer;

use crate::ScheduleEnv;

const UNPLANNED: &str = "[unplanned]";

// ── ScheduleView ──────────────────────────────────────────────────────────────

/// Borrowed `Display` view of an environment's schedule.
pub struct ScheduleView<'a, S: SequenceScorer> {
    env: &'a ScheduleEnv<S>,
}

impl<S: SequenceScorer> fmt::Display for ScheduleView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = &self.env.state;
        writeln!(f, "Slot: {}/{}", state.current_slot, self.env.num_slots)?;
        writeln!(f, "Day: {}", state.day_of_week)?;
        writeln!(f, "Schedule:")?;
        for (slot, &code) in self.env.schedule.iter().enumerate() {
            if slot < state.current_slot {
                writeln!(f, "  {slot:02}:00 - {}", self.env.activity_name(code))?;
            } else {
                writeln!(f, "  {slot:02}:00 - {UNPLANNED}")?;
            }
        }
        writeln!(f)
    }
}

// ── ScheduleEnv rendering ─────────────────────────────────────────────────────

impl<S: SequenceScorer> ScheduleEnv<S> {
    pub fn view(&self) -> ScheduleView<'_, S> {
        ScheduleView { env: self }
    }

    /// The rendered schedule as a `String`.
    pub fn render_string(&self) -> String {
        self.view().to_string()
    }

    /// Write the rendered schedule to `out`.
    pub fn render_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.view())
    }

    /// Print the rendered schedule to stdout.
    pub fn render(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.render_to(&mut lock)?;
        lock.flush()
    }
}
