//! Quantization tables and block quantization
//!
//! Tables start from the standard Q=50 pair and are scaled by the quality
//! factor in 10-bit fixed point, clamping every entry to at least 1 so
//! division is always defined. For the approximate transform the table is
//! additionally pre-multiplied by the transform's 2-D row norms, so one
//! quality scale governs all transforms.
//!
//! Two quantizers are provided: a plain division form, and a reciprocal
//! form that replaces the per-coefficient division with a multiply and
//! shift. The codec runs the reciprocal form.

use crate::consts::{APPROX_NORM_1024, DCTSIZE, DCTSIZE2, Q50_CHROMA, Q50_LUMA};
use crate::types::Transform;

/// Shift of the reciprocal fixed-point representation
const RECIP_SHIFT: u32 = 16;

/// A quality-scaled quantization table for one channel class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantTable {
    values: [i32; DCTSIZE2],
}

impl QuantTable {
    /// Luminance table for `transform` at quality factor `k`
    #[must_use]
    pub fn luma(k: f32, transform: Transform) -> Self {
        Self::for_channel(&Q50_LUMA, k, transform)
    }

    /// Chrominance table for `transform` at quality factor `k`,
    /// shared by Cb and Cr
    #[must_use]
    pub fn chroma(k: f32, transform: Transform) -> Self {
        Self::for_channel(&Q50_CHROMA, k, transform)
    }

    fn for_channel(base: &[i32; DCTSIZE2], k: f32, transform: Transform) -> Self {
        let mut table = Self::scaled(base, k);
        if transform == Transform::Approx {
            table.apply_approx_norms();
        }
        table
    }

    /// Scale a base table by quality factor `k` (10-bit fixed point),
    /// flooring every entry at 1
    #[must_use]
    pub fn scaled(base: &[i32; DCTSIZE2], k: f32) -> Self {
        let k_fixed = (k * 1024.0).round() as i64;
        let mut values = [0i32; DCTSIZE2];
        for (v, &b) in values.iter_mut().zip(base) {
            *v = ((i64::from(b) * k_fixed) >> 10).max(1) as i32;
        }
        Self { values }
    }

    /// Pre-multiply by the approximate transform's row norms.
    ///
    /// The forward approximation leaves coefficient (i, j) scaled by
    /// ||row_i|| * ||row_j|| relative to the orthonormal DCT; multiplying
    /// the table entry by the same factor makes the quantization step
    /// equivalent. Must run before [`QuantTable::reciprocals`].
    pub fn apply_approx_norms(&mut self) {
        for i in 0..DCTSIZE {
            for j in 0..DCTSIZE {
                let n = APPROX_NORM_1024[i] * APPROX_NORM_1024[j];
                let scaled = (i64::from(self.values[i * DCTSIZE + j]) * n + (1 << 19)) >> 20;
                self.values[i * DCTSIZE + j] = scaled.max(1) as i32;
            }
        }
    }

    /// Table entries in natural order
    #[must_use]
    pub fn values(&self) -> &[i32; DCTSIZE2] {
        &self.values
    }

    /// Precompute the reciprocal table for [`quantize_fast`]
    #[must_use]
    pub fn reciprocals(&self) -> ReciprocalTable {
        let mut recip = [0u32; DCTSIZE2];
        for (r, &q) in recip.iter_mut().zip(&self.values) {
            let q = q as u32;
            *r = ((1u32 << RECIP_SHIFT) + q / 2) / q;
        }
        ReciprocalTable { recip }
    }
}

/// Rounded reciprocals of a quantization table, for the divisionless path
#[derive(Debug, Clone)]
pub struct ReciprocalTable {
    recip: [u32; DCTSIZE2],
}

/// Quantize one tile: `out[i] = sign(c) * (|c| + q/2) / q`, division form
pub fn quantize(coeffs: &[i32], table: &QuantTable, out: &mut [i32]) {
    debug_assert_eq!(coeffs.len(), DCTSIZE2);
    debug_assert_eq!(out.len(), DCTSIZE2);
    for i in 0..DCTSIZE2 {
        let c = coeffs[i];
        let q = table.values[i];
        out[i] = if c >= 0 {
            (c + (q >> 1)) / q
        } else {
            (c - (q >> 1)) / q
        };
    }
}

/// Quantize one tile with the reciprocal multiply instead of a division
pub fn quantize_fast(
    coeffs: &[i32],
    table: &QuantTable,
    recip: &ReciprocalTable,
    out: &mut [i32],
) {
    debug_assert_eq!(coeffs.len(), DCTSIZE2);
    debug_assert_eq!(out.len(), DCTSIZE2);
    for i in 0..DCTSIZE2 {
        let c = coeffs[i];
        let q = table.values[i];
        let r = i64::from(recip.recip[i]);
        let magnitude = ((i64::from(c.abs()) + i64::from(q >> 1)) * r) >> RECIP_SHIFT;
        out[i] = if c >= 0 {
            magnitude as i32
        } else {
            -(magnitude as i32)
        };
    }
}

/// Dequantize one tile: plain multiply
pub fn dequantize(quantized: &[i32], table: &QuantTable, out: &mut [i32]) {
    debug_assert_eq!(quantized.len(), DCTSIZE2);
    debug_assert_eq!(out.len(), DCTSIZE2);
    for i in 0..DCTSIZE2 {
        out[i] = (i64::from(quantized[i]) * i64::from(table.values[i])) as i32;
    }
}
