//! Deterministic pseudorandom engines
//!
//! An engine owns a 64-bit state word and turns it into a stream of
//! fixed-width integers via a mixing strategy chosen at compile time.
//! Engines are purely sequential: `&mut self` enforces exclusive use, and
//! independent engines with independent seeds scale across threads with no
//! shared state.

mod unrolled;
mod word;

pub use unrolled::{BufferedRng, DefaultRng, RngEngine};
pub use word::Word;

/// Seed substituted when a caller supplies zero.
///
/// The mixing steps walk a low-quality cycle from an all-zero state, so a
/// zero seed is never used directly.
pub const DEFAULT_SEED: u64 = 1337;

/// Replace a zero seed with [`DEFAULT_SEED`].
pub(crate) const fn normalize_seed(seed: u64) -> u64 {
    if seed == 0 {
        DEFAULT_SEED
    } else {
        seed
    }
}
