//! Symbol alphabet and randomization.
//!
//! Two kinds of randomness with different guarantees:
//!
//! - Spin frames ([`random_frame`]) sample each slot independently, so
//!   repeats are allowed. Frames are cosmetic and never evaluated.
//! - Final outcomes ([`random_permutation`]) are a full shuffle of the
//!   alphabet, so the finished reel is always the 5 symbols with no
//!   repeats, each of the 120 orderings equally likely.

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of slots on the reel.
pub const SLOT_COUNT: usize = 5;

/// The fixed symbol alphabet, in display order.
pub const ALPHABET: [char; SLOT_COUNT] = ['ス', 'ガ', 'シ', 'カ', 'オ'];

/// Pick one alphabet symbol uniformly at random.
pub fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.random_range(0..SLOT_COUNT)]
}

/// A uniformly random permutation of the full alphabet.
///
/// Uses the library Fisher-Yates shuffle, so every ordering has equal
/// probability.
pub fn random_permutation<R: Rng + ?Sized>(rng: &mut R) -> [char; SLOT_COUNT] {
    let mut symbols = ALPHABET;
    symbols.shuffle(rng);
    symbols
}

/// One cosmetic spin frame: five independent symbol draws.
pub fn random_frame<R: Rng + ?Sized>(rng: &mut R) -> [char; SLOT_COUNT] {
    std::array::from_fn(|_| random_symbol(rng))
}
