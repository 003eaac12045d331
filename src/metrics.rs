//! Quality metrics: PSNR and a zig-zag bitrate proxy
//!
//! The bitrate figure is an estimator over quantized tiles, not the size
//! of any real entropy-coded stream: each tile contributes 8 bits per
//! coefficient up to the last non-zero position in zig-zag order. It is a
//! monotone function of post-quantization sparsity, useful for comparing
//! configurations against each other, not as an absolute rate.

use crate::consts::{DCTSIZE2, ZIGZAG};
use crate::types::{CompressedImage, RasterImage};

/// Peak signal-to-noise ratio in dB between two rasters of identical
/// shape, against a peak of 255. Effectively identical buffers (MSE below
/// 1e-10) report the 100 dB sentinel; mismatched shapes report 0.
#[must_use]
pub fn psnr(original: &RasterImage, reconstructed: &RasterImage) -> f64 {
    if original.width() != reconstructed.width()
        || original.height() != reconstructed.height()
        || original.data().len() != reconstructed.data().len()
    {
        return 0.0;
    }

    let mut sum_sq = 0.0f64;
    for (&a, &b) in original.data().iter().zip(reconstructed.data()) {
        let diff = f64::from(a) - f64::from(b);
        sum_sq += diff * diff;
    }
    let mse = sum_sq / original.data().len() as f64;

    if mse < 1e-10 {
        return 100.0;
    }
    10.0 * (255.0 * 255.0 / mse).log10()
}

/// Bits contributed by one tile: 8 per coefficient up to the last
/// non-zero zig-zag position; all-zero tiles contribute nothing
fn tile_bits(tile: &[i32]) -> u64 {
    for pos in (0..DCTSIZE2).rev() {
        if tile[ZIGZAG[pos]] != 0 {
            return (pos as u64 + 1) * 8;
        }
    }
    0
}

fn channel_bits(channel: &[i32]) -> (u64, usize) {
    let mut bits = 0u64;
    let mut tiles = 0usize;
    for tile in channel.chunks_exact(DCTSIZE2) {
        bits += tile_bits(tile);
        tiles += 1;
    }
    (bits, tiles)
}

/// Bitrate proxy in bits per pixel over all three channels
#[must_use]
pub fn bitrate(compressed: &CompressedImage) -> f64 {
    let mut total_bits = 0u64;
    let mut total_tiles = 0usize;
    for channel in [
        compressed.y_quantized(),
        compressed.cb_quantized(),
        compressed.cr_quantized(),
    ] {
        let (bits, tiles) = channel_bits(channel);
        total_bits += bits;
        total_tiles += tiles;
    }
    let total_pixels = total_tiles * DCTSIZE2;
    if total_pixels == 0 {
        return 0.0;
    }
    total_bits as f64 / total_pixels as f64
}

/// Bitrate proxy restricted to the luminance channel, for grayscale
/// sources whose all-zero chroma planes would dilute the figure
#[must_use]
pub fn bitrate_luma(compressed: &CompressedImage) -> f64 {
    let (bits, tiles) = channel_bits(compressed.y_quantized());
    let pixels = tiles * DCTSIZE2;
    if pixels == 0 {
        return 0.0;
    }
    bits as f64 / pixels as f64
}
