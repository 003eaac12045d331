//! Fast DCT with 11 multiplications per 1-D transform (Loeffler 1989)
//!
//! Implements the exact DCT-II with orthonormal scaling via the even/odd
//! butterfly decomposition: sums and differences of symmetric samples feed
//! a 4-point even subproblem (one rotation by 6*pi/16, one sqrt(2) scaling
//! for the DC/coefficient-4 pair) and a 4-point odd subproblem (a full
//! rotation using C1, S1, C3, S3).
//!
//! The inverse defers division: even-path intermediates are carried at the
//! 2^20 scale with no intermediate division, the odd path divides once to
//! land on the same scale, and each output sample is divided exactly once
//! by 8 * scale with rounding. Dividing at every butterfly stage instead
//! leaks cascading truncation errors into the reconstructed image.

use crate::consts::{div_round, C1, C3, C6, S1, S3, S6, SCALE, SQRT2};

/// Forward 1-D DCT: reads `src[i * stride]`, writes `dst[0..8]`
pub(crate) fn forward_1d(src: &[i32], stride: usize, dst: &mut [i32]) {
    let x = |i: usize| i64::from(src[i * stride]);

    let (s07, d07) = (x(0) + x(7), x(0) - x(7));
    let (s16, d16) = (x(1) + x(6), x(1) - x(6));
    let (s25, d25) = (x(2) + x(5), x(2) - x(5));
    let (s34, d34) = (x(3) + x(4), x(3) - x(4));

    let (e0, e3) = (s07 + s34, s07 - s34);
    let (e1, e2) = (s16 + s25, s16 - s25);
    let (o0, o1) = (d07 + d34, d16 + d25);
    let (o2, o3) = (d16 - d25, d07 - d34);

    dst[0] = div_round((e0 + e1) * SCALE, SQRT2 * 2) as i32;
    dst[4] = div_round((e0 - e1) * SCALE, SQRT2 * 2) as i32;
    dst[2] = div_round(C6 * e2 + S6 * e3, SCALE * 2) as i32;
    dst[6] = div_round(-S6 * e2 + C6 * e3, SCALE * 2) as i32;
    dst[1] = div_round(C3 * o0 + C1 * o1 + S1 * o2 + S3 * o3, SQRT2 * 2) as i32;
    dst[3] = div_round(S1 * o0 - C3 * o1 + S3 * o2 + C1 * o3, SQRT2 * 2) as i32;
    dst[5] = div_round(C1 * o0 - S3 * o1 - C3 * o2 - S1 * o3, SQRT2 * 2) as i32;
    dst[7] = div_round(-S3 * o0 + S1 * o1 - C1 * o2 + C3 * o3, SQRT2 * 2) as i32;
}

/// Inverse 1-D DCT: reads `src[0..8]`, writes `dst[i * stride]`
pub(crate) fn inverse_1d(src: &[i32], dst: &mut [i32], stride: usize) {
    let z = |i: usize| i64::from(src[i]) * 2;

    // even part: every value below carries the 2^20 scale, no divisions
    let t0 = z(0) * SQRT2;
    let t4 = z(4) * SQRT2;
    let e0 = t0 + t4;
    let e1 = t0 - t4;
    let e2 = 2 * (C6 * z(2) - S6 * z(6));
    let e3 = 2 * (S6 * z(2) + C6 * z(6));
    let s07 = e0 + e3;
    let s34 = e0 - e3;
    let s16 = e1 + e2;
    let s25 = e1 - e2;

    // odd part: one rounding division to match the even-part scale
    let n0 = C3 * z(1) + S1 * z(3) + C1 * z(5) - S3 * z(7);
    let n1 = C1 * z(1) - C3 * z(3) - S3 * z(5) + S1 * z(7);
    let n2 = S1 * z(1) + S3 * z(3) - C3 * z(5) - C1 * z(7);
    let n3 = S3 * z(1) + C1 * z(3) - S1 * z(5) + C3 * z(7);

    let d07 = div_round(2 * SCALE * (n0 + n3), SQRT2);
    let d34 = div_round(2 * SCALE * (n0 - n3), SQRT2);
    let d16 = div_round(2 * SCALE * (n1 + n2), SQRT2);
    let d25 = div_round(2 * SCALE * (n1 - n2), SQRT2);

    // final butterfly: single rounding division per output sample
    let den = 8 * SCALE;
    dst[0] = div_round(s07 + d07, den) as i32;
    dst[7 * stride] = div_round(s07 - d07, den) as i32;
    dst[stride] = div_round(s16 + d16, den) as i32;
    dst[6 * stride] = div_round(s16 - d16, den) as i32;
    dst[2 * stride] = div_round(s25 + d25, den) as i32;
    dst[5 * stride] = div_round(s25 - d25, den) as i32;
    dst[3 * stride] = div_round(s34 + d34, den) as i32;
    dst[4 * stride] = div_round(s34 - d34, den) as i32;
}
