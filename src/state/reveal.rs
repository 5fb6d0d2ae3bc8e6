//! Reveal scheduling for the stopping phase.
//!
//! One slot becomes permanently fixed every [`REVEAL_INTERVAL`], left to
//! right. The fixed count is derived from elapsed time since the phase
//! began, not from a tick counter, so a late or missed tick self-corrects
//! on the next one instead of desynchronizing the reveal order.

use std::time::{Duration, Instant};

use super::rng::SLOT_COUNT;

/// Time between successive slot reveals (200 ms per slot, 1 s total).
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(200);

/// Schedule for the left-to-right reveal, anchored at the instant the
/// stopping phase was entered.
///
/// The session holds this in an `Option` for exactly the duration of the
/// stopping phase; clearing it on exit is what cancels the reveal.
#[derive(Debug, Clone, Copy)]
pub struct RevealSchedule {
    started_at: Instant,
}

impl RevealSchedule {
    pub fn new(started_at: Instant) -> Self {
        Self { started_at }
    }

    /// Number of slots due to be fixed at `now`, capped at [`SLOT_COUNT`].
    ///
    /// A clock reading earlier than the anchor counts as zero elapsed.
    pub fn revealed(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started_at);
        let due = (elapsed.as_millis() / REVEAL_INTERVAL.as_millis()) as usize;
        due.min(SLOT_COUNT)
    }

    /// Whether every slot is due, i.e. elapsed time covers the full reveal.
    pub fn is_complete(&self, now: Instant) -> bool {
        self.revealed(now) == SLOT_COUNT
    }
}
