//! Output word types for [`RngEngine`](super::RngEngine)
//!
//! A [`Word`] is a fixed-width integer an engine can produce. Types no
//! wider than 64 bits are a truncating cast of one mix output; 128-bit
//! types concatenate two successive outputs, least-significant first.

use crate::mix::Mix;

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width integer output type of an engine.
///
/// Sealed: implemented for `u8`..`u128` and `i8`..`i128`.
pub trait Word: sealed::Sealed + Copy + std::fmt::Debug {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Width in bytes.
    const BYTES: usize;

    /// Read one value from a word buffer at the given byte offset.
    ///
    /// The offset is always a multiple of `BYTES`, so reads never straddle
    /// a 64-bit word except for the 128-bit types, which span exactly two
    /// words.
    #[doc(hidden)]
    fn read_le(buf: &[u64], offset: usize) -> Self;

    /// Derive one value directly from the mixing stream.
    #[doc(hidden)]
    fn draw<M: Mix>(state: u64) -> (u64, Self);
}

macro_rules! impl_word_narrow {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Word for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const BYTES: usize = std::mem::size_of::<$t>();

            #[inline]
            fn read_le(buf: &[u64], offset: usize) -> Self {
                let word = buf[offset / 8];
                (word >> ((offset % 8) * 8)) as $t
            }

            #[inline]
            fn draw<M: Mix>(state: u64) -> (u64, Self) {
                let (state, output) = M::mix(state);
                (state, output as $t)
            }
        }
    )*};
}

impl_word_narrow!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! impl_word_wide {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Word for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const BYTES: usize = std::mem::size_of::<$t>();

            #[inline]
            fn read_le(buf: &[u64], offset: usize) -> Self {
                let index = offset / 8;
                let value = (buf[index] as u128) | ((buf[index + 1] as u128) << 64);
                value as $t
            }

            #[inline]
            fn draw<M: Mix>(state: u64) -> (u64, Self) {
                let (state, low) = M::mix(state);
                let (state, high) = M::mix(state);
                let value = (low as u128) | ((high as u128) << 64);
                (state, value as $t)
            }
        }
    )*};
}

impl_word_wide!(u128, i128);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix::WyHash;

    #[test]
    fn test_read_le_packs_least_significant_first() {
        let buf = [0x0807060504030201u64, 0x100f0e0d0c0b0a09];
        assert_eq!(u8::read_le(&buf, 0), 0x01);
        assert_eq!(u8::read_le(&buf, 7), 0x08);
        assert_eq!(u16::read_le(&buf, 2), 0x0403);
        assert_eq!(u32::read_le(&buf, 4), 0x08070605);
        assert_eq!(u64::read_le(&buf, 8), 0x100f0e0d0c0b0a09);
        assert_eq!(
            u128::read_le(&buf, 0),
            0x100f0e0d0c0b0a09_0807060504030201
        );
    }

    #[test]
    fn test_draw_wide_concatenates_in_generation_order() {
        let (s1, low) = u64::draw::<WyHash>(42);
        let (s2, high) = u64::draw::<WyHash>(s1);
        let (s3, wide) = u128::draw::<WyHash>(42);
        assert_eq!(s3, s2);
        assert_eq!(wide, (low as u128) | ((high as u128) << 64));
    }

    #[test]
    fn test_signed_types_reuse_the_same_bits() {
        let (_, unsigned) = u32::draw::<WyHash>(9);
        let (_, signed) = i32::draw::<WyHash>(9);
        assert_eq!(signed as u32, unsigned);
    }
}
