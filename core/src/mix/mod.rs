//! Mixing strategies
//!
//! A mixing step advances a 64-bit state word and derives one 64-bit
//! pseudorandom output. Three interchangeable strategies are exposed:
//!
//! - [`WyHash`]: 128-bit multiply-and-fold, two rounds (the default)
//! - [`WyMum`]: 128-bit multiply-and-fold, single round
//! - [`Xxh3`]: shift/multiply/xor avalanche derived from a well-known
//!   string hash
//!
//! The strategies produce mutually incompatible output streams; they are
//! never interchangeable after the fact. Call sites that fix the strategy
//! at compile time use the [`Mix`] trait bound; call sites that select at
//! run time (the bulk fill entry points) use the [`Mixer`] enum and
//! dispatch once per call.

mod wyhash;
mod xxh3;

pub use wyhash::{wyhash_mix, wymum_mix, WyHash, WyMum};
pub use xxh3::{xxh3_mix, Xxh3};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pure mixing step: `(state) -> (new_state, output)`.
///
/// Implementations are stateless zero-sized types; all state lives with the
/// caller. Given the same input state, `mix` always returns the same pair.
pub trait Mix {
    /// Advance `state` by one step and derive one 64-bit output.
    fn mix(state: u64) -> (u64, u64);
}

/// Runtime selection of a mixing strategy.
///
/// # Example
/// ```
/// use unirand_core_rs::Mixer;
///
/// let mixer: Mixer = "xxh3".parse().unwrap();
/// assert_eq!(mixer, Mixer::Xxh3);
/// assert_eq!(Mixer::default(), Mixer::WyHash);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mixer {
    /// Two-round multiply-and-fold ([`WyHash`]). The default.
    #[default]
    WyHash,
    /// Single-round multiply-and-fold ([`WyMum`])
    WyMum,
    /// Shift/multiply/xor avalanche ([`Xxh3`])
    Xxh3,
}

impl Mixer {
    /// Perform one mixing step with the selected strategy.
    pub fn mix(self, state: u64) -> (u64, u64) {
        match self {
            Mixer::WyHash => wyhash_mix(state),
            Mixer::WyMum => wymum_mix(state),
            Mixer::Xxh3 => xxh3_mix(state),
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Mixer::WyHash => "wyhash",
            Mixer::WyMum => "wymum",
            Mixer::Xxh3 => "xxh3",
        }
    }
}

impl fmt::Display for Mixer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mixing strategy {name:?}, expected one of \"wyhash\", \"wymum\", \"xxh3\"")]
pub struct ParseMixerError {
    name: String,
}

impl FromStr for Mixer {
    type Err = ParseMixerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wyhash" => Ok(Mixer::WyHash),
            "wymum" => Ok(Mixer::WyMum),
            "xxh3" => Ok(Mixer::Xxh3),
            _ => Err(ParseMixerError {
                name: s.to_string(),
            }),
        }
    }
}
