//! Fixed-point constants and canonical tables.
//!
//! All exact transforms and the color conversion share a single base scale
//! of 2^20. The trigonometric constants below are `cos`/`sin` values
//! pre-multiplied by that scale and rounded once; every multiply against
//! them must accumulate in 64 bits.

/// DCT block dimension
pub const DCTSIZE: usize = 8;

/// DCT block size (8x8 = 64)
pub const DCTSIZE2: usize = 64;

/// Base scale for fixed-point arithmetic (2^20)
pub const SCALE: i64 = 1_048_576;

/// cos(pi/16) * 2^20
pub const C1: i64 = 1_028_428;
/// sin(pi/16) * 2^20
pub const S1: i64 = 204_567;
/// cos(3*pi/16) * 2^20
pub const C3: i64 = 871_859;
/// sin(3*pi/16) * 2^20
pub const S3: i64 = 582_558;
/// cos(6*pi/16) * 2^20
pub const C6: i64 = 401_273;
/// sin(6*pi/16) * 2^20
pub const S6: i64 = 968_758;
/// sqrt(2) * 2^20
pub const SQRT2: i64 = 1_482_910;

/// Signed division rounding to nearest, ties away from zero.
///
/// The denominator must be positive. Used by every transform and by the
/// quantization-table norm correction; truncating instead of rounding at
/// these points shows up as cascading errors in the reconstruction.
#[inline]
pub(crate) fn div_round(num: i64, den: i64) -> i64 {
    if num >= 0 {
        (num + den / 2) / den
    } else {
        (num - den / 2) / den
    }
}

/// Standard JPEG Annex K luminance quantization table (Q=50)
#[rustfmt::skip]
pub const Q50_LUMA: [i32; DCTSIZE2] = [
    16, 11, 10, 16,  24,  40,  51,  61,
    12, 12, 14, 19,  26,  58,  60,  55,
    14, 13, 16, 24,  40,  57,  69,  56,
    14, 17, 22, 29,  51,  87,  80,  62,
    18, 22, 37, 56,  68, 109, 103,  77,
    24, 35, 55, 64,  81, 104, 113,  92,
    49, 64, 78, 87, 103, 121, 120, 101,
    72, 92, 95, 98, 112, 100, 103,  99,
];

/// Standard JPEG Annex K chrominance quantization table (Q=50)
#[rustfmt::skip]
pub const Q50_CHROMA: [i32; DCTSIZE2] = [
    17, 18, 24, 47, 99, 99, 99, 99,
    18, 21, 26, 66, 99, 99, 99, 99,
    24, 26, 56, 99, 99, 99, 99, 99,
    47, 66, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
];

/// Zig-zag scan order: maps scan position to natural (row-major) index.
/// Example: `natural_pos = ZIGZAG[scan_pos]`
#[rustfmt::skip]
pub const ZIGZAG: [usize; DCTSIZE2] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Row norms of the approximate transform matrix, scaled by 1024:
/// sqrt(8), sqrt(6), sqrt(4), repeated per the row pattern of T.
pub(crate) const APPROX_NORM_1024: [i64; DCTSIZE] =
    [2896, 2508, 2048, 2508, 2896, 2508, 2048, 2508];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_is_permutation() {
        let mut seen = [false; DCTSIZE2];
        for &pos in &ZIGZAG {
            assert!(!seen[pos], "duplicate natural index {} in zig-zag", pos);
            seen[pos] = true;
        }
    }

    #[test]
    fn test_div_round_symmetry() {
        assert_eq!(div_round(7, 2), 4);
        assert_eq!(div_round(-7, 2), -4);
        assert_eq!(div_round(6, 4), 2);
        assert_eq!(div_round(-6, 4), -2);
        assert_eq!(div_round(5, 10), 1);
        assert_eq!(div_round(-5, 10), -1);
        assert_eq!(div_round(4, 10), 0);
    }

    #[test]
    fn test_trig_constants_match_scale() {
        // c^2 + s^2 == SCALE^2 within rounding of the stored constants
        for (c, s) in [(C1, S1), (C3, S3), (C6, S6)] {
            let norm = c * c + s * s;
            let diff = (norm - SCALE * SCALE).abs();
            assert!(diff < 4 * SCALE, "c^2+s^2 off by {}", diff);
        }
        let sq = SQRT2 * SQRT2;
        assert!((sq - 2 * SCALE * SCALE).abs() < 4 * SCALE);
    }
}
