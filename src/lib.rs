//! KanaRoulette State Library
//!
//! This crate provides the game core for the KanaRoulette slot machine:
//! five kana slots spin, stop left to right on a timed reveal, and the
//! final five-symbol string is checked against a fixed registry of
//! winning patterns.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Game State Machine** - Owns the session lifecycle (idle, running,
//!   stopping, finished) and the slot vector, with invalid control
//!   invocations ignored rather than surfaced.
//!
//! - **Reveal Scheduler** - Fixes one slot every 200 ms during the
//!   stopping phase, computing progress from elapsed time so timer jitter
//!   self-corrects.
//!
//! - **Randomizer** - Uniform spin frames plus fair full-alphabet
//!   permutations for final outcomes.
//!
//! - **Pattern Registry & Evaluation** - Compiled-in winning patterns
//!   with reward metadata, and result classification (match, near miss,
//!   loss).
//!
//! # Design Principles
//!
//! 1. **Pure state** - No rendering, no I/O, no async runtime. A host
//!    forwards user intents and drives `tick` on its own timer.
//!
//! 2. **Time is injected** - Every time-driven behavior takes a monotonic
//!    `Instant`, so all timing properties are testable with simulated
//!    clocks.
//!
//! 3. **One writer** - The session exclusively owns the slot vector; each
//!    tick writes only through the fields its current phase owns, and
//!    pending deadlines are cleared on every phase exit.
//!
//! 4. **Serialization-ready** - Snapshots convert to JSON for the
//!    rendering layer each tick.
//!
//! # Example
//!
//! ```rust
//! use kana_roulette_state::state::{GamePhase, GameSession};
//! use std::time::{Duration, Instant};
//!
//! let mut session = GameSession::new();
//! session.start();
//!
//! let now = Instant::now();
//! session.tick(now);
//! session.stop(now);
//!
//! // One slot fixes every 200 ms; after a second the reveal is complete.
//! session.tick(now + Duration::from_millis(1000));
//! assert_eq!(session.phase(), GamePhase::Finished);
//! assert!(session.outcome().is_some());
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
