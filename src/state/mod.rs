//! State management module for KanaRoulette.
//!
//! This module provides the game core:
//!
//! - `session` - Game state machine (phase lifecycle, slot vector, controls)
//! - `reveal` - Timed left-to-right reveal during the stopping phase
//! - `rng` - Symbol alphabet, spin frames, outcome permutations
//! - `pattern` - Winning pattern registry
//! - `outcome` - Result evaluation and presentation mapping
//!
//! # Lifecycle
//!
//! ```text
//! ┌──────┐  start   ┌─────────┐  stop    ┌──────────┐  reveal   ┌──────────┐
//! │ idle │─────────▶│ running │─────────▶│ stopping │──────────▶│ finished │
//! └──────┘          └─────────┘          └──────────┘ complete  └──────────┘
//!     ▲                                                               │
//!     └─────────────────────────── retry ─────────────────────────────┘
//! ```
//!
//! `start`, `stop`, and `retry` are user intents; the `stopping → finished`
//! edge fires automatically once the reveal covers all five slots. Any
//! intent invoked outside its phase is ignored.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kana_roulette_state::state::GameSession;
//! use std::time::Instant;
//!
//! let mut session = GameSession::new();
//! session.start();
//!
//! // Host timer loop, ~50 ms cadence
//! session.tick(Instant::now());
//!
//! session.stop(Instant::now());
//! // ...keep ticking; one slot fixes every 200 ms, then the session
//! // finishes and `session.outcome()` classifies the result.
//! ```

pub mod outcome;
pub mod pattern;
pub mod reveal;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use outcome::Outcome;
pub use pattern::{PatternEntry, RewardKind, NEAR_MISS_PREFIX, PATTERNS, PRIMARY_PATTERN};
pub use reveal::{RevealSchedule, REVEAL_INTERVAL};
pub use rng::{ALPHABET, SLOT_COUNT};
pub use session::{GamePhase, GameSession, RETRY_DELAY, SPIN_TICK_INTERVAL};
