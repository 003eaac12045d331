//! Compression and decompression pipeline
//!
//! Compress: RGB (or grayscale) raster -> three level-shifted integer
//! planes -> 8x8 tiles -> forward transform -> quantize, luma table for Y
//! and the chroma table for both Cb and Cr. Decompress reverses the steps
//! and always produces an RGB raster.
//!
//! The pipeline holds no shared mutable state: tables are built per call,
//! scratch buffers die before return, and the only allocation that
//! outlives a call is the returned value. Two threads may run these
//! functions concurrently on their own inputs.

use imgref::Img;
use rgb::FromSlice;

use crate::blocks::{extract_tiles, reconstruct_plane, tile_count};
use crate::color::{rgb_to_ycbcr_batch, ycbcr_to_rgb_batch};
use crate::consts::DCTSIZE2;
use crate::dct;
use crate::error::{Error, Result};
use crate::quant::{self, QuantTable};
use crate::types::{ColorSpace, CompressedImage, Params, RasterImage, Transform};

/// Lowest accepted quality factor (finest quantization)
pub const QUALITY_MIN: f32 = 1.0;
/// Highest accepted quality factor (coarsest quantization)
pub const QUALITY_MAX: f32 = 8.0;

fn check_quality(k: f32) -> Result<()> {
    if !(QUALITY_MIN..=QUALITY_MAX).contains(&k) {
        return Err(Error::InvalidQuality {
            value: k,
            min: QUALITY_MIN,
            max: QUALITY_MAX,
        });
    }
    Ok(())
}

/// Transform and quantize every tile of one channel
fn compress_channel(tiles: &[i32], table: &QuantTable, params: &Params, out: &mut [i32]) {
    let recip = table.reciprocals();
    let mut coeffs = [0i32; DCTSIZE2];

    for (tile, q_out) in tiles
        .chunks_exact(DCTSIZE2)
        .zip(out.chunks_exact_mut(DCTSIZE2))
    {
        dct::forward(params.transform, tile, &mut coeffs);
        // identity is a validation path and never quantizes; quantizing a
        // pass-through tile would destroy its exactness for no gain
        if params.transform == Transform::Identity || params.skip_quantization {
            q_out.copy_from_slice(&coeffs);
        } else {
            quant::quantize_fast(&coeffs, table, &recip, q_out);
        }
    }
}

/// Dequantize and inverse-transform every tile of one channel
fn decompress_channel(
    quantized: &[i32],
    table: &QuantTable,
    transform: Transform,
    out: &mut [i32],
) {
    let mut coeffs = [0i32; DCTSIZE2];

    for (q_tile, tile_out) in quantized
        .chunks_exact(DCTSIZE2)
        .zip(out.chunks_exact_mut(DCTSIZE2))
    {
        if transform == Transform::Identity {
            tile_out.copy_from_slice(q_tile);
        } else {
            quant::dequantize(q_tile, table, &mut coeffs);
            dct::inverse(transform, &coeffs, tile_out);
        }
    }
}

/// Compress a raster into quantized frequency-domain coefficients.
///
/// The returned [`CompressedImage`] records the quality factor and
/// transform so [`decompress`] can reconstruct without extra context.
pub fn compress(image: &RasterImage, params: &Params) -> Result<CompressedImage> {
    check_quality(params.quality_factor)?;

    let (w, h) = (image.width(), image.height());
    let total = w * h;

    let luma = QuantTable::luma(params.quality_factor, params.transform);
    let chroma = QuantTable::chroma(params.quality_factor, params.transform);

    let mut y_plane = vec![0i32; total];
    let mut cb_plane = vec![0i32; total];
    let mut cr_plane = vec![0i32; total];

    match image.colorspace() {
        ColorSpace::Rgb => {
            rgb_to_ycbcr_batch(
                image.data().as_rgb(),
                &mut y_plane,
                &mut cb_plane,
                &mut cr_plane,
            );
        }
        ColorSpace::Gray => {
            // level shift only; chroma planes stay zero
            for (y, &px) in y_plane.iter_mut().zip(image.data()) {
                *y = i32::from(px) - 128;
            }
        }
    }

    let y_tiles = extract_tiles(Img::new(y_plane.as_slice(), w, h));
    let cb_tiles = extract_tiles(Img::new(cb_plane.as_slice(), w, h));
    let cr_tiles = extract_tiles(Img::new(cr_plane.as_slice(), w, h));

    let num_tiles = tile_count(w, h);
    let mut y_q = vec![0i32; num_tiles * DCTSIZE2];
    let mut cb_q = vec![0i32; num_tiles * DCTSIZE2];
    let mut cr_q = vec![0i32; num_tiles * DCTSIZE2];

    compress_channel(&y_tiles, &luma, params, &mut y_q);
    compress_channel(&cb_tiles, &chroma, params, &mut cb_q);
    compress_channel(&cr_tiles, &chroma, params, &mut cr_q);

    Ok(CompressedImage::from_channels_unchecked(
        w,
        h,
        params.quality_factor,
        params.transform,
        num_tiles,
        y_q,
        cb_q,
        cr_q,
    ))
}

/// Reconstruct an RGB raster from quantized coefficients.
///
/// Output is always RGB, regardless of the source color space.
pub fn decompress(compressed: &CompressedImage) -> Result<RasterImage> {
    let (w, h) = (compressed.width(), compressed.height());
    if w == 0 || h == 0 {
        return Err(Error::InvalidDimensions {
            width: w,
            height: h,
            reason: "width and height must be positive",
        });
    }
    let num_tiles = tile_count(w, h);
    if compressed.num_tiles() != num_tiles {
        return Err(Error::InvalidDimensions {
            width: w,
            height: h,
            reason: "tile count does not match dimensions",
        });
    }
    let expected = num_tiles * DCTSIZE2;
    for channel in [
        compressed.y_quantized(),
        compressed.cb_quantized(),
        compressed.cr_quantized(),
    ] {
        if channel.len() != expected {
            return Err(Error::InvalidDimensions {
                width: w,
                height: h,
                reason: "coefficient array length does not match tile count",
            });
        }
    }

    let transform = compressed.transform();
    let luma = QuantTable::luma(compressed.quality_factor(), transform);
    let chroma = QuantTable::chroma(compressed.quality_factor(), transform);

    let mut y_tiles = vec![0i32; expected];
    let mut cb_tiles = vec![0i32; expected];
    let mut cr_tiles = vec![0i32; expected];
    decompress_channel(compressed.y_quantized(), &luma, transform, &mut y_tiles);
    decompress_channel(compressed.cb_quantized(), &chroma, transform, &mut cb_tiles);
    decompress_channel(compressed.cr_quantized(), &chroma, transform, &mut cr_tiles);

    let total = w * h;
    let mut y_plane = vec![0i32; total];
    let mut cb_plane = vec![0i32; total];
    let mut cr_plane = vec![0i32; total];
    reconstruct_plane(&y_tiles, Img::new(y_plane.as_mut_slice(), w, h));
    reconstruct_plane(&cb_tiles, Img::new(cb_plane.as_mut_slice(), w, h));
    reconstruct_plane(&cr_tiles, Img::new(cr_plane.as_mut_slice(), w, h));

    let mut rgb = vec![0u8; total * 3];
    ycbcr_to_rgb_batch(&y_plane, &cb_plane, &cr_plane, rgb.as_rgb_mut());

    RasterImage::new_rgb(rgb, w, h)
}
