//! Game session state machine.
//!
//! Owns the single mutable session: phase, slot vector, stop target,
//! reveal schedule, and retry visibility. Hosts forward user intents
//! ([`GameSession::start`], [`GameSession::stop`], [`GameSession::retry`])
//! and call [`GameSession::tick`] on a recurring timer, passing a
//! monotonic timestamp. All writes to the slot vector happen here, and
//! each tick writes only through the fields its current phase owns, so a
//! stale spin can never overwrite a fixed slot.
//!
//! Invalid control invocations (start while running, stop while idle, and
//! so on) are ignored, not errors: the methods return `false` and leave
//! the session untouched.

use std::time::{Duration, Instant};

use super::outcome::Outcome;
use super::reveal::RevealSchedule;
use super::rng::{self, SLOT_COUNT};

/// Recommended host tick period while any slot is spinning.
pub const SPIN_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Delay before the retry control appears after a matched outcome, giving
/// the reward time on screen. Near misses and losses skip the delay.
pub const RETRY_DELAY: Duration = Duration::from_secs(3);

/// Session lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the player to start; slots are empty
    #[default]
    Idle,
    /// All slots spinning freely
    Running,
    /// Slots being fixed left to right against the stop target
    Stopping,
    /// All slots fixed; result available
    Finished,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Finished => "finished",
        }
    }

    /// Whether any slot content is still changing between ticks.
    pub fn is_spinning(&self) -> bool {
        matches!(self, Self::Running | Self::Stopping)
    }
}

/// The game session.
///
/// Created in `idle` with empty slots; the reveal drives `stopping` to
/// `finished` automatically once every slot is fixed, and `retry` resets
/// back to a fresh `idle`.
#[derive(Debug)]
pub struct GameSession {
    phase: GamePhase,

    /// Current display content; `None` is the empty placeholder
    slots: [Option<char>; SLOT_COUNT],

    /// Final permutation, fixed at the instant stop was pressed
    target: Option<[char; SLOT_COUNT]>,

    retry_visible: bool,

    /// Present exactly while stopping; dropping it cancels the reveal
    reveal: Option<RevealSchedule>,

    /// Pending one-shot deadline for showing the retry control
    retry_timer: Option<Instant>,

    rng: rand::rngs::ThreadRng,

    /// When this session was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// When the current game started
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,

    /// When the current game finished
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            slots: [None; SLOT_COUNT],
            target: None,
            retry_visible: false,
            reveal: None,
            retry_timer: None,
            rng: rand::rng(),
            created_at: chrono::Utc::now(),
            started_at: None,
            finished_at: None,
        }
    }

    /// Start spinning. Applies only in `idle`.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            log::debug!("start ignored in phase {}", self.phase.as_str());
            return false;
        }
        self.phase = GamePhase::Running;
        self.retry_visible = false;
        self.started_at = Some(chrono::Utc::now());
        log::debug!("phase idle -> running");
        true
    }

    /// Stop spinning. Applies only in `running`.
    ///
    /// The final permutation is drawn here, at the instant stop lands;
    /// the reveal only uncovers it.
    pub fn stop(&mut self, now: Instant) -> bool {
        if self.phase != GamePhase::Running {
            log::debug!("stop ignored in phase {}", self.phase.as_str());
            return false;
        }
        let target = rng::random_permutation(&mut self.rng);
        self.stop_with_target(target, now)
    }

    /// Stop spinning toward a predetermined target (scripted sequences).
    ///
    /// The target is not validated; a sequence outside the registry simply
    /// evaluates as a loss.
    pub fn stop_with_target(&mut self, target: [char; SLOT_COUNT], now: Instant) -> bool {
        if self.phase != GamePhase::Running {
            log::debug!("stop ignored in phase {}", self.phase.as_str());
            return false;
        }
        self.target = Some(target);
        self.reveal = Some(RevealSchedule::new(now));
        self.retry_visible = false;
        self.phase = GamePhase::Stopping;
        log::debug!(
            "phase running -> stopping, target {}",
            target.iter().collect::<String>()
        );
        true
    }

    /// Reset to a fresh `idle`. Applies only in `finished`.
    ///
    /// Clears the slot vector, the target, and every pending timer, so
    /// nothing from the previous game can fire into the next one.
    pub fn retry(&mut self) -> bool {
        if self.phase != GamePhase::Finished {
            log::debug!("retry ignored in phase {}", self.phase.as_str());
            return false;
        }
        self.phase = GamePhase::Idle;
        self.slots = [None; SLOT_COUNT];
        self.target = None;
        self.retry_visible = false;
        self.reveal = None;
        self.retry_timer = None;
        self.started_at = None;
        self.finished_at = None;
        log::debug!("phase finished -> idle");
        true
    }

    /// Advance time-driven behavior. Hosts call this roughly every
    /// [`SPIN_TICK_INTERVAL`] with a monotonic `now`.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            GamePhase::Idle => {}
            GamePhase::Running => {
                self.slots = rng::random_frame(&mut self.rng).map(Some);
            }
            GamePhase::Stopping => self.tick_stopping(now),
            GamePhase::Finished => {
                if let Some(due) = self.retry_timer {
                    if now >= due {
                        self.retry_visible = true;
                        self.retry_timer = None;
                    }
                }
            }
        }
    }

    fn tick_stopping(&mut self, now: Instant) {
        let (reveal, target) = match (self.reveal, self.target) {
            (Some(reveal), Some(target)) => (reveal, target),
            _ => return,
        };

        if reveal.is_complete(now) {
            // Authoritative write: the full target replaces whatever the
            // intermediate frames left behind.
            self.slots = target.map(Some);
            self.reveal = None;
            self.finish(now);
            return;
        }

        let fixed = reveal.revealed(now);
        self.slots = std::array::from_fn(|i| {
            if i < fixed {
                Some(target[i])
            } else {
                Some(rng::random_symbol(&mut self.rng))
            }
        });
    }

    fn finish(&mut self, now: Instant) {
        self.phase = GamePhase::Finished;
        self.finished_at = Some(chrono::Utc::now());

        let result = self.result_string();
        let outcome = Outcome::evaluate(&result);
        log::info!("reveal complete: {} ({})", result, outcome.as_str());

        if outcome.is_matched() {
            // Matched rewards get viewing time before retry appears
            self.retry_timer = Some(now + RETRY_DELAY);
        } else {
            self.retry_visible = true;
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn slots(&self) -> &[Option<char>; SLOT_COUNT] {
        &self.slots
    }

    pub fn target(&self) -> Option<[char; SLOT_COUNT]> {
        self.target
    }

    /// The slot contents joined in order, skipping empty slots.
    pub fn result_string(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// The result classification. `Some` only once `finished`; resolved
    /// from the slot vector on demand, never stored.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.phase != GamePhase::Finished {
            return None;
        }
        Some(Outcome::evaluate(&self.result_string()))
    }

    /// Whether the start control is exposed.
    pub fn can_start(&self) -> bool {
        self.phase == GamePhase::Idle
    }

    /// Whether the stop control is exposed.
    pub fn can_stop(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Whether the retry control is exposed.
    pub fn can_retry(&self) -> bool {
        self.phase == GamePhase::Finished && self.retry_visible
    }

    /// Full snapshot for the rendering layer, taken each tick.
    pub fn to_json(&self) -> serde_json::Value {
        let slots: Vec<String> = self
            .slots
            .iter()
            .map(|slot| slot.map(String::from).unwrap_or_default())
            .collect();

        serde_json::json!({
            "phase": self.phase.as_str(),
            "slots": slots,
            "controls": {
                "start": self.can_start(),
                "stop": self.can_stop(),
                "retry": self.can_retry(),
            },
            "outcome": match self.outcome() {
                Some(outcome) => outcome.to_json(),
                None => serde_json::Value::Null,
            },
            "created_at": self.created_at.to_rfc3339(),
            "started_at": self.started_at.map(|t| t.to_rfc3339()),
            "finished_at": self.finished_at.map(|t| t.to_rfc3339()),
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::rng::ALPHABET;
    use pretty_assertions::assert_eq;

    const PRIMARY: [char; SLOT_COUNT] = ['ス', 'ガ', 'シ', 'カ', 'オ'];
    // Starts with スガ but matches no pattern
    const NEAR: [char; SLOT_COUNT] = ['ス', 'ガ', 'オ', 'カ', 'シ'];
    // Matches no pattern, no near-miss prefix
    const LOSING: [char; SLOT_COUNT] = ['オ', 'ガ', 'シ', 'カ', 'ス'];

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    /// Start, stop toward `target`, and tick past the full reveal.
    /// Returns the session and the completion instant.
    fn run_to_finish(target: [char; SLOT_COUNT]) -> (GameSession, Instant) {
        let base = Instant::now();
        let mut session = GameSession::new();
        assert!(session.start());
        session.tick(base);
        assert!(session.stop_with_target(target, base));
        let done = at(base, 1000);
        session.tick(done);
        assert_eq!(session.phase(), GamePhase::Finished);
        (session, done)
    }

    #[test]
    fn test_initial_state() {
        let session = GameSession::new();
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.slots(), &[None; SLOT_COUNT]);
        assert_eq!(session.result_string(), "");
        assert!(session.outcome().is_none());
        assert!(session.can_start());
        assert!(!session.can_stop());
        assert!(!session.can_retry());
    }

    #[test]
    fn test_tick_in_idle_is_a_noop() {
        let mut session = GameSession::new();
        session.tick(Instant::now());
        assert_eq!(session.slots(), &[None; SLOT_COUNT]);
    }

    #[test]
    fn test_start_spins_all_slots() {
        let mut session = GameSession::new();
        assert!(session.start());
        assert_eq!(session.phase(), GamePhase::Running);
        assert!(session.started_at.is_some());

        session.tick(Instant::now());
        for slot in session.slots() {
            assert!(slot.is_some_and(|c| ALPHABET.contains(&c)));
        }
    }

    #[test]
    fn test_start_ignored_outside_idle() {
        let mut session = GameSession::new();
        session.start();
        assert!(!session.start());
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_stop_ignored_outside_running() {
        let base = Instant::now();
        let mut session = GameSession::new();

        assert!(!session.stop(base));
        assert_eq!(session.phase(), GamePhase::Idle);
        assert!(session.target().is_none());

        session.start();
        session.stop_with_target(PRIMARY, base);

        // Already stopping; a second stop must not rearm the reveal
        assert!(!session.stop(at(base, 100)));
        assert!(!session.stop_with_target(LOSING, at(base, 100)));
        assert_eq!(session.target(), Some(PRIMARY));
    }

    #[test]
    fn test_retry_ignored_outside_finished() {
        let mut session = GameSession::new();
        assert!(!session.retry());
        session.start();
        assert!(!session.retry());
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_stop_draws_a_full_permutation() {
        let mut session = GameSession::new();
        session.start();
        assert!(session.stop(Instant::now()));
        assert_eq!(session.phase(), GamePhase::Stopping);

        let mut target = session.target().unwrap();
        target.sort();
        let mut expected = ALPHABET;
        expected.sort();
        assert_eq!(target, expected);
    }

    #[test]
    fn test_reveal_fixes_slots_left_to_right() {
        let base = Instant::now();
        let mut session = GameSession::new();
        session.start();
        session.stop_with_target(PRIMARY, base);

        for fixed in 0..SLOT_COUNT {
            session.tick(at(base, 200 * fixed as u64 + 100));
            assert_eq!(session.phase(), GamePhase::Stopping);

            let slots = session.slots();
            for (i, expected) in PRIMARY.iter().enumerate().take(fixed) {
                assert_eq!(slots[i], Some(*expected), "slot {} at step {}", i, fixed);
            }
            for slot in &slots[fixed..] {
                assert!(slot.is_some_and(|c| ALPHABET.contains(&c)));
            }
        }
    }

    #[test]
    fn test_reveal_self_corrects_after_missed_ticks() {
        let base = Instant::now();
        let mut session = GameSession::new();
        session.start();
        session.stop_with_target(PRIMARY, base);

        // No ticks at all until 450 ms in; two slots are due
        session.tick(at(base, 450));
        assert_eq!(session.slots()[0], Some(PRIMARY[0]));
        assert_eq!(session.slots()[1], Some(PRIMARY[1]));
        assert_eq!(session.phase(), GamePhase::Stopping);
    }

    #[test]
    fn test_completion_writes_target_exactly() {
        let (session, _) = run_to_finish(PRIMARY);
        assert_eq!(session.slots(), &PRIMARY.map(Some));
        assert_eq!(session.result_string(), "スガシカオ");
        assert!(session.finished_at.is_some());
        assert!(session.outcome().unwrap().is_matched());
    }

    #[test]
    fn test_completion_from_a_single_late_tick() {
        let base = Instant::now();
        let mut session = GameSession::new();
        session.start();
        session.stop_with_target(LOSING, base);

        // Host stalled through the entire reveal window
        session.tick(at(base, 10_000));
        assert_eq!(session.phase(), GamePhase::Finished);
        assert_eq!(session.slots(), &LOSING.map(Some));
    }

    #[test]
    fn test_finished_slots_are_frozen() {
        let (mut session, done) = run_to_finish(PRIMARY);
        session.tick(at(done, 100));
        session.tick(at(done, 200));
        assert_eq!(session.phase(), GamePhase::Finished);
        assert_eq!(session.slots(), &PRIMARY.map(Some));
    }

    #[test]
    fn test_matched_outcome_delays_retry() {
        let (mut session, done) = run_to_finish(PRIMARY);
        assert!(!session.can_retry());

        session.tick(at(done, 2999));
        assert!(!session.can_retry());

        session.tick(at(done, 3000));
        assert!(session.can_retry());
    }

    #[test]
    fn test_loss_shows_retry_immediately() {
        let (session, _) = run_to_finish(LOSING);
        assert_eq!(session.outcome(), Some(Outcome::Loss));
        assert!(session.can_retry());
    }

    #[test]
    fn test_near_miss_shows_retry_immediately() {
        let (session, _) = run_to_finish(NEAR);
        assert_eq!(session.outcome(), Some(Outcome::NearMiss));
        assert!(session.can_retry());
    }

    #[test]
    fn test_retry_resets_the_session() {
        let (mut session, _) = run_to_finish(LOSING);
        assert!(session.retry());
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.slots(), &[None; SLOT_COUNT]);
        assert!(session.target().is_none());
        assert!(session.started_at.is_none());
        assert!(session.can_start());
        assert!(!session.can_retry());
    }

    #[test]
    fn test_reset_cancels_pending_retry_timer() {
        let (mut session, done) = run_to_finish(PRIMARY);

        // Reset while the 3 s retry deadline is still pending
        assert!(session.retry());
        assert!(session.start());

        // The old deadline passing must not surface the retry control
        session.tick(at(done, 3100));
        assert_eq!(session.phase(), GamePhase::Running);
        assert!(!session.can_retry());
    }

    #[test]
    fn test_controls_follow_phase() {
        let base = Instant::now();
        let mut session = GameSession::new();
        assert!((session.can_start(), session.can_stop()) == (true, false));

        session.start();
        assert!((session.can_start(), session.can_stop()) == (false, true));

        session.stop_with_target(LOSING, base);
        assert!((session.can_start(), session.can_stop()) == (false, false));
        assert!(!session.can_retry());

        session.tick(at(base, 1000));
        assert!((session.can_start(), session.can_stop()) == (false, false));
        assert!(session.can_retry());
    }

    #[test]
    fn test_phase_predicates() {
        assert_eq!(GamePhase::Idle.as_str(), "idle");
        assert_eq!(GamePhase::Stopping.as_str(), "stopping");
        assert!(GamePhase::Running.is_spinning());
        assert!(GamePhase::Stopping.is_spinning());
        assert!(!GamePhase::Idle.is_spinning());
        assert!(!GamePhase::Finished.is_spinning());
    }

    #[test]
    fn test_snapshot_idle() {
        let session = GameSession::new();
        let json = session.to_json();
        assert_eq!(json["phase"], "idle");
        assert_eq!(json["slots"], serde_json::json!(["", "", "", "", ""]));
        assert_eq!(json["controls"]["start"], true);
        assert_eq!(json["controls"]["retry"], false);
        assert!(json["outcome"].is_null());
        assert!(json["started_at"].is_null());
    }

    #[test]
    fn test_snapshot_finished() {
        let (session, _) = run_to_finish(PRIMARY);
        let json = session.to_json();
        assert_eq!(json["phase"], "finished");
        assert_eq!(
            json["slots"],
            serde_json::json!(["ス", "ガ", "シ", "カ", "オ"])
        );
        assert_eq!(json["outcome"]["result"], "matched");
        assert_eq!(json["outcome"]["reward"]["kind"], "video");
        // Retry delay still pending for a matched outcome
        assert_eq!(json["controls"]["retry"], false);
        assert!(!json["finished_at"].is_null());
    }
}
