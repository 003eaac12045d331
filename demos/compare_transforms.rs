//! Compare the four block transforms on one synthetic input.
//!
//! Compresses the same image with every transform across a range of
//! quality factors and prints the PSNR / bitrate-proxy table that the
//! quality-versus-cost comparison is usually plotted from.
//!
//! Run with: cargo run --example compare_transforms

use fourdct::{compress, decompress, metrics, Params, RasterImage, Transform};

/// Smooth gradient with a little deterministic noise on top, so every
/// frequency band has energy without the image being pure noise
fn build_test_image(width: usize, height: usize) -> RasterImage {
    let mut seed = 12_345u32;
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let noise = ((seed >> 16) & 0x1F) as usize;
            pixels.push(((x * 224 / width) + noise).min(255) as u8);
            pixels.push(((y * 224 / height) + noise).min(255) as u8);
            pixels.push((((x + y) * 224 / (width + height)) + noise).min(255) as u8);
        }
    }
    RasterImage::new_rgb(pixels, width, height).unwrap()
}

fn main() {
    let image = build_test_image(320, 240);
    println!(
        "fourdct {} - {}x{} synthetic input",
        fourdct::version(),
        image.width(),
        image.height()
    );

    let transforms = [
        Transform::Loeffler,
        Transform::Matrix,
        Transform::Approx,
        Transform::Identity,
    ];

    for k in [1.0f32, 2.0, 4.0, 8.0] {
        println!("\nquality factor {k}");
        println!("{:<12} | {:>10} | {:>12}", "transform", "PSNR (dB)", "bpp (proxy)");
        println!("-------------|------------|-------------");
        for transform in transforms {
            let params = Params {
                quality_factor: k,
                transform,
                ..Params::default()
            };
            let compressed = compress(&image, &params).expect("compress");
            let restored = decompress(&compressed).expect("decompress");
            println!(
                "{:<12} | {:>10.2} | {:>12.4}",
                transform.name(),
                metrics::psnr(&image, &restored),
                metrics::bitrate(&compressed),
            );
        }
    }
}
