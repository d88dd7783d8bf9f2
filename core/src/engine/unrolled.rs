//! Unrolled pseudorandom engine
//!
//! The engine has two modes, fixed at compile time by the `UNROLL`
//! parameter:
//!
//! - `UNROLL <= 1`: unbuffered. Every draw invokes the mixing step
//!   directly.
//! - `UNROLL > 1`: buffered. Draws are served byte-wise out of a buffer of
//!   `UNROLL` 64-bit words; when a draw would cross the buffer end, the
//!   whole buffer is regenerated in one batch of mixing steps first. A
//!   draw is never split across a refill, so up to `size_of::<T>() - 1`
//!   trailing bytes of the old buffer may go unused. That wastage is
//!   accepted, not a bug.
//!
//! # Determinism
//!
//! Same seed, same draw sequence. This is CRITICAL for reproducing
//! simulation runs and for the pinned-vector tests.

use std::marker::PhantomData;

use super::{normalize_seed, Word};
use crate::mix::{Mix, WyHash};

/// Deterministic pseudorandom engine over a fixed-width output type.
///
/// `T` is the output type served by [`next`](Self::next), `UNROLL` the
/// compile-time buffer size in 64-bit words (0 or 1 means unbuffered), and
/// `M` the mixing strategy.
///
/// # Example
/// ```
/// use unirand_core_rs::RngEngine;
///
/// let mut rng = RngEngine::<u64, 0>::new(12345);
/// let a = rng.next();
/// let b = rng.next();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct RngEngine<T: Word, const UNROLL: usize, M: Mix = WyHash> {
    /// Internal state (64-bit)
    state: u64,
    /// Precomputed outputs, served byte-wise (buffered mode only)
    buf: [u64; UNROLL],
    /// Byte offset of the next unserved buffer byte
    offset: usize,
    _out: PhantomData<T>,
    _mix: PhantomData<M>,
}

/// Unbuffered 64-bit engine with the default strategy.
pub type DefaultRng = RngEngine<u64, 0>;

/// Buffered 64-bit engine refilling eight words per batch.
pub type BufferedRng = RngEngine<u64, 8>;

impl<T: Word, const UNROLL: usize, M: Mix> RngEngine<T, UNROLL, M> {
    const BUF_BYTES: usize = UNROLL * 8;
    const BUFFERED: bool = UNROLL > 1;

    /// Create a new engine with the given seed.
    ///
    /// A zero seed is substituted with [`DEFAULT_SEED`](super::DEFAULT_SEED).
    /// In buffered mode the buffer starts exhausted, so the first draw
    /// triggers a refill rather than serving stale zero bytes.
    ///
    /// # Example
    /// ```
    /// use unirand_core_rs::{RngEngine, DEFAULT_SEED};
    ///
    /// let rng = RngEngine::<u32, 0>::new(0);
    /// assert_eq!(rng.get_state(), DEFAULT_SEED);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            state: normalize_seed(seed),
            buf: [0; UNROLL],
            offset: Self::BUF_BYTES,
            _out: PhantomData,
            _mix: PhantomData,
        }
    }

    /// Reset the engine to a new seed.
    ///
    /// A zero seed is substituted exactly as in [`new`](Self::new). In
    /// buffered mode the buffer is marked exhausted, forcing the next draw
    /// to refill from the new state.
    pub fn reseed(&mut self, seed: u64) {
        self.state = normalize_seed(seed);
        self.offset = Self::BUF_BYTES;
    }

    /// Draw the next value, advancing the internal state.
    ///
    /// # Example
    /// ```
    /// use unirand_core_rs::RngEngine;
    ///
    /// let mut rng1 = RngEngine::<u16, 4>::new(7);
    /// let mut rng2 = RngEngine::<u16, 4>::new(7);
    /// assert_eq!(rng1.next(), rng2.next());
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> T {
        if Self::BUFFERED {
            if self.offset + T::BYTES > Self::BUF_BYTES {
                self.refill();
            }
            let value = T::read_le(&self.buf, self.offset);
            self.offset += T::BYTES;
            value
        } else {
            let (state, value) = T::draw::<M>(self.state);
            self.state = state;
            value
        }
    }

    /// Regenerate every buffer word in one batch of mixing steps.
    fn refill(&mut self) {
        let mut state = self.state;
        for slot in self.buf.iter_mut() {
            let (next, value) = M::mix(state);
            state = next;
            *slot = value;
        }
        self.state = state;
        self.offset = 0;
    }

    /// Get the current engine state.
    ///
    /// In buffered mode this is the state the NEXT refill will start from;
    /// already-buffered but unserved values are not reflected here.
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Smallest representable output value.
    ///
    /// Reports the range of `T`, not the achievable output range; coverage
    /// of every value of `T` is approximate, not guaranteed.
    pub const fn min() -> T {
        T::MIN
    }

    /// Largest representable output value.
    pub const fn max() -> T {
        T::MAX
    }
}

impl<T: Word, const UNROLL: usize, M: Mix> Default for RngEngine<T, UNROLL, M> {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(feature = "rand_core")]
impl<const UNROLL: usize, M: Mix> rand_core::RngCore for RngEngine<u64, UNROLL, M> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next().to_le_bytes());
        }
        let rem = chunks.into_remainder();
        if !rem.is_empty() {
            let bytes = self.next().to_le_bytes();
            rem.copy_from_slice(&bytes[..rem.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
