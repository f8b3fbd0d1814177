//! `SequenceScorer` — how well one activity follows another.
//!
//! No transition model is derived from the history yet.  The shipped
//! [`NeutralSequence`] scores every pair identically, so the sequence term
//! only shifts rewards by a constant.  Plug a custom scorer into the
//! environment builder to experiment with transition shaping.

use ds_core::ActivityCode;

/// Score returned by [`NeutralSequence`] for every pair.
pub const NEUTRAL_SEQUENCE_SCORE: f64 = 0.5;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Scores the transition `previous → next` between consecutive slots.
///
/// # Contract
///
/// - Must be deterministic.
/// - Must not block or perform I/O.
/// - Should return a finite, non-negative value; the reward floor is applied
///   after this term is added.
pub trait SequenceScorer: Send + Sync {
    fn score(&self, previous: ActivityCode, next: ActivityCode) -> f64;
}

// ── Neutral ───────────────────────────────────────────────────────────────────

/// A scorer that rates every transition as neutral (0.5).
#[derive(Copy, Clone, Debug, Default)]
pub struct NeutralSequence;

impl SequenceScorer for NeutralSequence {
    #[inline]
    fn score(&self, _previous: ActivityCode, _next: ActivityCode) -> f64 {
        NEUTRAL_SEQUENCE_SCORE
    }
}

// ── Closures ──────────────────────────────────────────────────────────────────

impl<F> SequenceScorer for F
where
    F: Fn(ActivityCode, ActivityCode) -> f64 + Send + Sync,
{
    #[inline]
    fn score(&self, previous: ActivityCode, next: ActivityCode) -> f64 {
        self(previous, next)
    }
}
