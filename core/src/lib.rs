//! Unirand Core - Fast uniform pseudorandom generation
//!
//! Non-cryptographic pseudorandom number generation built on multiplicative
//! integer mixing, with a bulk routine that fills float buffers with values
//! uniformly distributed in [0, 1).
//!
//! # Architecture
//!
//! - **mix**: Pure mixing steps (wyhash-style and xxh3-derived strategies)
//! - **engine**: Stateful generators with optional output buffering
//! - **fill**: Bulk uniform fill for `f32`/`f64` slices, with a vectorized
//!   fast path
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic: same seed, same sequence, bit for bit
//! 2. A zero seed is always substituted with [`DEFAULT_SEED`]
//! 3. Filled floats are always in [0.0, 1.0), never 1.0 or above
//! 4. The vectorized fill path produces exactly the scalar path's output
//!
//! This crate is NOT cryptographically secure. Use it for simulation,
//! sampling, and other workloads where speed and reproducibility matter
//! more than unpredictability.

// Module declarations
pub mod engine;
pub mod fill;
pub mod mix;

// Re-exports for convenience
pub use engine::{BufferedRng, DefaultRng, RngEngine, Word, DEFAULT_SEED};
pub use fill::{fill_path, fill_uniform, fill_uniform_with, FillPath, UnitFloat, FILL_UNROLL};
pub use mix::{
    wyhash_mix, wymum_mix, xxh3_mix, Mix, Mixer, ParseMixerError, WyHash, WyMum, Xxh3,
};
