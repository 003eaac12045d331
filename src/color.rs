//! Color space conversion (ITU-R BT.601, fixed-point)
//!
//! Coefficients are scaled by 1000 with a +500 rounding bias; division
//! truncates toward zero, matching the reference captures bit for bit.
//! Y is level-shifted by -128 here, not in the block pipeline, so planes
//! leave this module already centered for the transforms.

use rgb::RGB8;

#[inline]
fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Convert one RGB pixel to level-shifted YCbCr
#[inline]
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (i32, i32, i32) {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    let y = (299 * r + 587 * g + 114 * b + 500) / 1000 - 128;
    let cb = (-169 * r - 331 * g + 500 * b + 500) / 1000;
    let cr = (500 * r - 419 * g - 81 * b + 500) / 1000;
    (y, cb, cr)
}

/// Convert one level-shifted YCbCr sample back to RGB, saturating to [0, 255]
#[inline]
pub fn ycbcr_to_rgb(y: i32, cb: i32, cr: i32) -> (u8, u8, u8) {
    let yv = y + 128;
    let r = yv + (1402 * cr + 500) / 1000;
    let g = yv - (344 * cb + 714 * cr + 500) / 1000;
    let b = yv + (1772 * cb + 500) / 1000;
    (clamp_u8(r), clamp_u8(g), clamp_u8(b))
}

/// Convert a whole RGB buffer into three level-shifted integer planes.
///
/// Produces exactly the same values as [`rgb_to_ycbcr`] per pixel; the
/// codec uses this form so the conversion is one pass over the plane.
pub fn rgb_to_ycbcr_batch(rgb: &[RGB8], y: &mut [i32], cb: &mut [i32], cr: &mut [i32]) {
    assert_eq!(rgb.len(), y.len());
    assert_eq!(rgb.len(), cb.len());
    assert_eq!(rgb.len(), cr.len());

    for (((px, y), cb), cr) in rgb.iter().zip(y).zip(cb).zip(cr) {
        let (r, g, b) = (i32::from(px.r), i32::from(px.g), i32::from(px.b));
        *y = (299 * r + 587 * g + 114 * b + 500) / 1000 - 128;
        *cb = (-169 * r - 331 * g + 500 * b + 500) / 1000;
        *cr = (500 * r - 419 * g - 81 * b + 500) / 1000;
    }
}

/// Convert three level-shifted integer planes back into an RGB buffer
pub fn ycbcr_to_rgb_batch(y: &[i32], cb: &[i32], cr: &[i32], rgb: &mut [RGB8]) {
    assert_eq!(rgb.len(), y.len());
    assert_eq!(rgb.len(), cb.len());
    assert_eq!(rgb.len(), cr.len());

    for (((px, &y), &cb), &cr) in rgb.iter_mut().zip(y).zip(cb).zip(cr) {
        let yv = y + 128;
        px.r = clamp_u8(yv + (1402 * cr + 500) / 1000);
        px.g = clamp_u8(yv - (344 * cb + 714 * cr + 500) / 1000);
        px.b = clamp_u8(yv + (1772 * cb + 500) / 1000);
    }
}

/// Expand big-endian RGB565 framebuffer bytes (as camera DMA delivers
/// them: `RRRRRGGG GGGBBBBB`) into RGB888 pixels.
#[must_use]
pub fn rgb565_to_rgb888(raw: &[u8]) -> Vec<RGB8> {
    raw.chunks_exact(2)
        .map(|pair| {
            let (hb, lb) = (pair[0], pair[1]);
            RGB8 {
                r: hb & 0xF8,
                g: (hb & 0x07) << 5 | (lb & 0xE0) >> 3,
                b: (lb & 0x1F) << 3,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_gray_maps_to_zero_chroma() {
        for v in [0u8, 1, 127, 128, 200, 255] {
            let (_, cb, cr) = rgb_to_ycbcr(v, v, v);
            assert_eq!(cb, 0, "cb for gray {}", v);
            assert_eq!(cr, 0, "cr for gray {}", v);
        }
    }

    #[test]
    fn test_rgb_ycbcr_roundtrip_error_bounded() {
        // Truncating chroma toward zero costs up to one unit, and the
        // inverse gains (1.402/1.772) stretch that; saturated primaries
        // land the furthest out but stay within a few codes.
        let colors = [
            (0, 0, 0),
            (255, 255, 255),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (128, 128, 128),
            (12, 200, 77),
        ];
        for (r, g, b) in colors {
            let (y, cb, cr) = rgb_to_ycbcr(r, g, b);
            let (r2, g2, b2) = ycbcr_to_rgb(y, cb, cr);
            assert!((i16::from(r) - i16::from(r2)).abs() <= 4, "R: {} vs {}", r, r2);
            assert!((i16::from(g) - i16::from(g2)).abs() <= 4, "G: {} vs {}", g, g2);
            assert!((i16::from(b) - i16::from(b2)).abs() <= 4, "B: {} vs {}", b, b2);
        }
    }

    #[test]
    fn test_batch_matches_single_pixel() {
        // every (r, g) at a few b values; batch and scalar must agree exactly
        for b in [0u8, 77, 255] {
            let pixels: Vec<RGB8> = (0..=255u8)
                .flat_map(|r| (0..=255u8).step_by(17).map(move |g| RGB8 { r, g, b }))
                .collect();
            let n = pixels.len();
            let (mut y, mut cb, mut cr) = (vec![0; n], vec![0; n], vec![0; n]);
            rgb_to_ycbcr_batch(&pixels, &mut y, &mut cb, &mut cr);
            for (i, px) in pixels.iter().enumerate() {
                let single = rgb_to_ycbcr(px.r, px.g, px.b);
                assert_eq!((y[i], cb[i], cr[i]), single);
            }

            let mut rgb_out = vec![RGB8::new(0, 0, 0); n];
            ycbcr_to_rgb_batch(&y, &cb, &cr, &mut rgb_out);
            for i in 0..n {
                let (r2, g2, b2) = ycbcr_to_rgb(y[i], cb[i], cr[i]);
                assert_eq!((rgb_out[i].r, rgb_out[i].g, rgb_out[i].b), (r2, g2, b2));
            }
        }
    }

    #[test]
    fn test_rgb565_expansion() {
        // 0xF800 big-endian -> pure red, 0x07E0 -> pure green, 0x001F -> pure blue
        let raw = [0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F];
        let px = rgb565_to_rgb888(&raw);
        assert_eq!(px[0], RGB8 { r: 0xF8, g: 0, b: 0 });
        assert_eq!(px[1], RGB8 { r: 0, g: 0xFC, b: 0 });
        assert_eq!(px[2], RGB8 { r: 0, g: 0, b: 0xF8 });
    }
}
