//! # fourdct - Multi-Transform Fixed-Point Image Codec
//!
//! fourdct is a lossy still-image codec built on the JPEG baseline
//! pipeline, parameterized over four interchangeable 8x8 block transforms
//! so that quality, arithmetic cost, and multiplier count can be compared
//! on identical inputs through an identical surrounding pipeline:
//!
//! - **Loeffler**: exact DCT-II, 11 multiplications per 1-D transform
//! - **Matrix**: exact DCT-II by direct cosine-matrix summation
//!   (correctness reference; quantized output is identical to Loeffler)
//! - **Approx**: multiplierless Cintra-Bayer 2011 approximation
//! - **Identity**: pass-through, isolating the non-transform error
//!   sources of the pipeline
//!
//! All arithmetic is fixed-point integer; there is no floating-point
//! path through the transforms or the quantizer. The codec stops at
//! quantized coefficients - no entropy coding, no file format.
//!
//! ## Usage
//!
//! ```rust
//! use fourdct::{compress, decompress, metrics, Params, RasterImage, Transform};
//!
//! let pixels = vec![128u8; 64 * 64 * 3];
//! let image = RasterImage::new_rgb(pixels, 64, 64)?;
//!
//! let params = Params {
//!     quality_factor: 2.0,
//!     transform: Transform::Loeffler,
//!     ..Params::default()
//! };
//! let compressed = compress(&image, &params)?;
//! let restored = decompress(&compressed)?;
//!
//! println!("psnr    = {:.2} dB", metrics::psnr(&image, &restored));
//! println!("bitrate = {:.3} bpp", metrics::bitrate(&compressed));
//! # Ok::<(), fourdct::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod blocks;
pub mod codec;
pub mod color;
pub mod consts;
pub mod dct;
mod dct_approx;
mod dct_loeffler;
mod dct_matrix;
pub mod error;
pub mod metrics;
pub mod quant;
pub mod types;

pub use codec::{compress, decompress, QUALITY_MAX, QUALITY_MIN};
pub use error::{Error, Result};
pub use types::{ColorSpace, CompressedImage, Params, RasterImage, Transform};

/// Library version string
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
