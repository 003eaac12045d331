//! Reference DCT by direct cosine-matrix summation
//!
//! 64 multiplies per 1-D transform. Slow, but the arithmetic is plain
//! enough to audit by eye; the fast transform must agree with this one
//! after quantization for every input and quality factor.
//!
//! The cosine matrix and norm factors use the 2^20 base scale. Smaller
//! scales (2^11 matrices with 724/1024 norms exist in the wild) lose
//! precision on the outer products and do not produce identical
//! coefficients; do not mix them with these tables.

use crate::consts::{div_round, SCALE};

const SCALE_SQ: i64 = SCALE * SCALE;
/// 1/sqrt(8) * 2^20
const NORM_0: i64 = 370_728;
/// sqrt(2/8) * 2^20 (exactly 2^19)
const NORM_K: i64 = 524_288;
const NORM: [i64; 8] = [NORM_0, NORM_K, NORM_K, NORM_K, NORM_K, NORM_K, NORM_K, NORM_K];

/// cos(pi * k * (2n + 1) / 16) * 2^20
#[rustfmt::skip]
const COS: [[i64; 8]; 8] = [
    [ 1_048_576,  1_048_576,  1_048_576,  1_048_576,  1_048_576,  1_048_576,  1_048_576,  1_048_576],
    [ 1_028_428,    871_859,    582_558,    204_567,   -204_567,   -582_558,   -871_859, -1_028_428],
    [   968_758,    401_273,   -401_273,   -968_758,   -968_758,   -401_273,    401_273,    968_758],
    [   871_859,   -204_567, -1_028_428,   -582_558,    582_558,  1_028_428,    204_567,   -871_859],
    [   741_455,   -741_455,   -741_455,    741_455,    741_455,   -741_455,   -741_455,    741_455],
    [   582_558, -1_028_428,    204_567,    871_859,   -871_859,   -204_567,  1_028_428,   -582_558],
    [   401_273,   -968_758,    968_758,   -401_273,   -401_273,    968_758,   -968_758,    401_273],
    [   204_567,   -582_558,    871_859, -1_028_428,  1_028_428,   -871_859,    582_558,   -204_567],
];

/// Forward 1-D DCT: reads `src[i * stride]`, writes `dst[0..8]`
pub(crate) fn forward_1d(src: &[i32], stride: usize, dst: &mut [i32]) {
    for (k, out) in dst.iter_mut().take(8).enumerate() {
        let row = &COS[k];
        let mut sum = 0i64;
        for (n, &c) in row.iter().enumerate() {
            sum += i64::from(src[n * stride]) * c;
        }
        *out = div_round(sum * NORM[k], SCALE_SQ) as i32;
    }
}

/// Inverse 1-D DCT: reads `src[0..8]`, writes `dst[i * stride]`
pub(crate) fn inverse_1d(src: &[i32], dst: &mut [i32], stride: usize) {
    for n in 0..8 {
        let mut sum = 0i64;
        for k in 0..8 {
            sum += i64::from(src[k]) * NORM[k] * COS[k][n];
        }
        dst[n * stride] = div_round(sum, SCALE_SQ) as i32;
    }
}
