//! Compress/decompress round-trip tests across transforms and image shapes

use fourdct::{compress, decompress, metrics, Params, RasterImage, Transform};

/// The pseudo-random generator used for reproducible noise images
fn lcg_bytes(mut seed: u32, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        out.push((seed >> 16) as u8);
    }
    out
}

fn create_noise_rgb(width: usize, height: usize, seed: u32) -> RasterImage {
    RasterImage::new_rgb(lcg_bytes(seed, width * height * 3), width, height).unwrap()
}

fn create_noise_gray(width: usize, height: usize, seed: u32) -> RasterImage {
    RasterImage::new_gray(lcg_bytes(seed, width * height), width, height).unwrap()
}

fn create_uniform_rgb(width: usize, height: usize, value: u8) -> RasterImage {
    RasterImage::new_rgb(vec![value; width * height * 3], width, height).unwrap()
}

fn create_gradient_rgb(width: usize, height: usize) -> RasterImage {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width) as u8);
            pixels.push((y * 255 / height) as u8);
            pixels.push(((x + y) * 255 / (width + height)) as u8);
        }
    }
    RasterImage::new_rgb(pixels, width, height).unwrap()
}

/// Expand a grayscale raster to RGB for comparison against decompressed
/// output, which is always RGB
fn gray_as_rgb(gray: &RasterImage) -> RasterImage {
    let mut rgb = Vec::with_capacity(gray.data().len() * 3);
    for &v in gray.data() {
        rgb.extend_from_slice(&[v, v, v]);
    }
    RasterImage::new_rgb(rgb, gray.width(), gray.height()).unwrap()
}

#[test]
fn test_identity_grayscale_skip_quantization_is_byte_exact() {
    let gray = create_noise_gray(64, 64, 54_321);
    let params = Params {
        quality_factor: 1.0,
        transform: Transform::Identity,
        skip_quantization: true,
        ..Params::default()
    };

    let compressed = compress(&gray, &params).unwrap();
    let restored = decompress(&compressed).unwrap();

    // the gray path has no color conversion loss: every output triple
    // must equal the source sample exactly
    for (px, &v) in restored.data().chunks_exact(3).zip(gray.data()) {
        assert_eq!(px, [v, v, v]);
    }
    assert_eq!(metrics::psnr(&gray_as_rgb(&gray), &restored), 100.0);
}

#[test]
fn test_identity_skips_quantization_even_when_not_asked_to() {
    let gray = create_noise_gray(16, 16, 54_321);
    let with_skip = Params {
        quality_factor: 4.0,
        transform: Transform::Identity,
        skip_quantization: true,
        ..Params::default()
    };
    let without_skip = Params {
        skip_quantization: false,
        ..with_skip
    };

    let a = compress(&gray, &with_skip).unwrap();
    let b = compress(&gray, &without_skip).unwrap();
    assert_eq!(a.y_quantized(), b.y_quantized());

    let restored = decompress(&b).unwrap();
    for (px, &v) in restored.data().chunks_exact(3).zip(gray.data()) {
        assert_eq!(px, [v, v, v]);
    }
}

#[test]
fn test_identity_rgb_skip_quantization_leaves_color_rounding_only() {
    let image = create_noise_rgb(64, 64, 12_345);
    let params = Params {
        quality_factor: 1.0,
        transform: Transform::Identity,
        skip_quantization: true,
        ..Params::default()
    };

    let compressed = compress(&image, &params).unwrap();
    let restored = decompress(&compressed).unwrap();

    let psnr = metrics::psnr(&image, &restored);
    assert!(psnr >= 40.0, "psnr = {}", psnr);
}

#[test]
fn test_uniform_gray_single_tile() {
    let image = create_uniform_rgb(8, 8, 128);
    let params = Params {
        quality_factor: 2.0,
        transform: Transform::Loeffler,
        ..Params::default()
    };

    let compressed = compress(&image, &params).unwrap();
    assert_eq!(compressed.num_tiles(), 1);

    let restored = decompress(&compressed).unwrap();
    let psnr = metrics::psnr(&image, &restored);
    assert!(psnr >= 48.0, "psnr = {}", psnr);
}

#[test]
fn test_uniform_gray_approx_keeps_only_dc() {
    // 200 maps to Y = 72; neutral gray always maps to zero chroma
    let image = create_uniform_rgb(64, 64, 200);
    let params = Params {
        quality_factor: 1.0,
        transform: Transform::Approx,
        ..Params::default()
    };

    let compressed = compress(&image, &params).unwrap();
    assert_eq!(compressed.num_tiles(), 64);

    for tile in compressed.y_quantized().chunks_exact(64) {
        assert_ne!(tile[0], 0, "DC should survive quantization");
        assert!(tile[1..].iter().all(|&c| c == 0), "AC should quantize away");
    }
    assert!(compressed.cb_quantized().iter().all(|&c| c == 0));
    assert!(compressed.cr_quantized().iter().all(|&c| c == 0));

    // one DC per luma tile: (0 + 1) * 8 bits over 64 samples
    let bpp = metrics::bitrate_luma(&compressed);
    assert!((bpp - 0.125).abs() < 1e-12, "bitrate = {}", bpp);
}

#[test]
fn test_uniform_midpoint_gray_quantizes_to_nothing() {
    // 128 lands exactly on the level-shift midpoint: Y, Cb, Cr are all
    // zero and every tile is empty, so the proxy reports zero bits
    let image = create_uniform_rgb(64, 64, 128);
    let params = Params {
        quality_factor: 1.0,
        transform: Transform::Approx,
        ..Params::default()
    };

    let compressed = compress(&image, &params).unwrap();
    assert!(compressed.y_quantized().iter().all(|&c| c == 0));
    assert_eq!(metrics::bitrate(&compressed), 0.0);
}

#[test]
fn test_skip_quantization_noise_is_dense() {
    let image = create_noise_rgb(64, 64, 12_345);
    let params = Params {
        quality_factor: 1.0,
        transform: Transform::Loeffler,
        skip_quantization: true,
        ..Params::default()
    };

    let compressed = compress(&image, &params).unwrap();
    let bpp = metrics::bitrate(&compressed);
    assert!(bpp > 7.0, "bitrate = {}", bpp);
    assert!(bpp <= 8.0, "bitrate = {}", bpp);
}

#[test]
fn test_padded_edges_stay_out_of_the_output() {
    // 9x9 pads three tiles; the padding must be zeros on the way in and
    // be discarded on the way out
    let gray = create_noise_gray(9, 9, 777);
    let params = Params {
        quality_factor: 1.0,
        transform: Transform::Identity,
        skip_quantization: true,
        ..Params::default()
    };

    let compressed = compress(&gray, &params).unwrap();
    assert_eq!(compressed.num_tiles(), 4);

    // top-right tile of the Y channel: columns 1..8 are padding
    let tr = &compressed.y_quantized()[64..128];
    for row in 0..8 {
        assert!(tr[row * 8 + 1..row * 8 + 8].iter().all(|&c| c == 0));
    }

    let restored = decompress(&compressed).unwrap();
    assert_eq!((restored.width(), restored.height()), (9, 9));
    for (px, &v) in restored.data().chunks_exact(3).zip(gray.data()) {
        assert_eq!(px, [v, v, v]);
    }
}

#[test]
fn test_assorted_shapes_roundtrip() {
    for (w, h) in [(1, 1), (7, 3), (8, 8), (9, 9), (17, 5), (64, 64), (100, 100)] {
        for transform in [
            Transform::Loeffler,
            Transform::Matrix,
            Transform::Approx,
            Transform::Identity,
        ] {
            let image = create_gradient_rgb(w, h);
            let params = Params {
                quality_factor: 2.0,
                transform,
                ..Params::default()
            };
            let compressed = compress(&image, &params).unwrap();
            let restored = decompress(&compressed).unwrap();
            assert_eq!(
                (restored.width(), restored.height()),
                (w, h),
                "{} {}x{}",
                transform.name(),
                w,
                h
            );
        }
    }
}

#[test]
fn test_coarser_quality_never_costs_more_bits() {
    let image = create_gradient_rgb(64, 64);
    let mut last = f64::INFINITY;
    for k in [1.0f32, 2.0, 4.0, 8.0] {
        let params = Params {
            quality_factor: k,
            transform: Transform::Loeffler,
            ..Params::default()
        };
        let compressed = compress(&image, &params).unwrap();
        let bpp = metrics::bitrate(&compressed);
        assert!(bpp <= last, "k = {}: {} > {}", k, bpp, last);
        last = bpp;
    }
}

#[test]
fn test_reconstruction_quality_tracks_quality_factor() {
    let image = create_gradient_rgb(64, 64);
    let fine = Params {
        quality_factor: 1.0,
        ..Params::default()
    };
    let coarse = Params {
        quality_factor: 8.0,
        ..Params::default()
    };

    let psnr_fine = metrics::psnr(&image, &decompress(&compress(&image, &fine).unwrap()).unwrap());
    let psnr_coarse =
        metrics::psnr(&image, &decompress(&compress(&image, &coarse).unwrap()).unwrap());
    assert!(
        psnr_fine > psnr_coarse,
        "fine {} vs coarse {}",
        psnr_fine,
        psnr_coarse
    );
    assert!(psnr_fine > 30.0, "psnr at k=1 is {}", psnr_fine);
}
