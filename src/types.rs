//! Core types for fourdct

use rgb::{FromSlice, RGB8};

use crate::blocks::tile_count;
use crate::consts::DCTSIZE2;
use crate::error::{Error, Result};

/// Color space of an input raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// 8-bit RGB, 3 bytes per pixel
    #[default]
    Rgb,
    /// 8-bit grayscale, 1 byte per pixel
    Gray,
}

impl ColorSpace {
    /// Bytes per pixel for this color space
    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            ColorSpace::Rgb => 3,
            ColorSpace::Gray => 1,
        }
    }
}

/// Block transform selection.
///
/// All four share the same 8x8 pipeline; they differ in arithmetic cost
/// and accuracy. `Loeffler` and `Matrix` compute the exact DCT-II and must
/// produce identical quantized coefficients; `Approx` trades multiplies
/// for additions; `Identity` passes samples through untouched so the rest
/// of the pipeline can be validated in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Fast exact DCT, 11 multiplications per 1-D transform
    #[default]
    Loeffler,
    /// Exact DCT by direct cosine-matrix summation (reference)
    Matrix,
    /// Multiplierless Cintra-Bayer 2011 approximation
    Approx,
    /// Pass-through, for pipeline validation only
    Identity,
}

impl Transform {
    /// Stable numeric tag used in the serialized form
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Transform::Loeffler => 0,
            Transform::Matrix => 1,
            Transform::Approx => 2,
            Transform::Identity => 3,
        }
    }

    /// Inverse of [`Transform::tag`]
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Transform::Loeffler),
            1 => Ok(Transform::Matrix),
            2 => Ok(Transform::Approx),
            3 => Ok(Transform::Identity),
            other => Err(Error::UnknownTransform(other)),
        }
    }

    /// Short lowercase name, as used by query parameters and reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Transform::Loeffler => "loeffler",
            Transform::Matrix => "matrix",
            Transform::Approx => "approx",
            Transform::Identity => "identity",
        }
    }
}

/// Compression parameters, constructed per call
#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// Quality factor in [1.0, 8.0]; smaller means finer quantization
    pub quality_factor: f32,
    /// Which block transform to run
    pub transform: Transform,
    /// Use the standard Q=50 tables (custom tables are not implemented;
    /// this knob exists for parity with captures that recorded it)
    pub use_standard_tables: bool,
    /// Pass transform output through unquantized
    pub skip_quantization: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            quality_factor: 2.0,
            transform: Transform::Loeffler,
            use_standard_tables: true,
            skip_quantization: false,
        }
    }
}

/// A rectangular raster image, row-major from the top-left
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: usize,
    height: usize,
    colorspace: ColorSpace,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGB pixel buffer of exactly `width * height * 3` bytes
    pub fn new_rgb(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        Self::new(data, width, height, ColorSpace::Rgb)
    }

    /// Wrap a grayscale pixel buffer of exactly `width * height` bytes
    pub fn new_gray(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        Self::new(data, width, height, ColorSpace::Gray)
    }

    fn new(data: Vec<u8>, width: usize, height: usize, colorspace: ColorSpace) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width,
                height,
                reason: "width and height must be positive",
            });
        }
        let expected = width * height * colorspace.bytes_per_pixel();
        if data.len() != expected {
            return Err(Error::InvalidPixelData {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            colorspace,
            data,
        })
    }

    /// Image width in pixels
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color space of the stored pixels
    #[must_use]
    pub fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Raw pixel bytes, row-major
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixels as RGB triplets; `None` for grayscale images
    #[must_use]
    pub fn pixels_rgb(&self) -> Option<&[RGB8]> {
        match self.colorspace {
            ColorSpace::Rgb => Some(self.data.as_rgb()),
            ColorSpace::Gray => None,
        }
    }

    /// Consume the image, returning the pixel buffer
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Serialized header: width, height, num_tiles (u32 LE each),
/// transform tag (u8), quality factor (f32 LE).
const WIRE_HEADER_LEN: usize = 4 + 4 + 4 + 1 + 4;

/// Quantized frequency-domain coefficients for one image.
///
/// Three channels (Y, Cb, Cr), each `num_tiles * 64` values in row-major
/// tile order, natural order within each tile. The quality factor and
/// transform used to produce them are carried along because decompression
/// needs both to rebuild the quantization tables and pick the inverse.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    width: usize,
    height: usize,
    quality_factor: f32,
    transform: Transform,
    num_tiles: usize,
    y_quantized: Vec<i32>,
    cb_quantized: Vec<i32>,
    cr_quantized: Vec<i32>,
}

impl CompressedImage {
    /// Assemble from parts, validating channel lengths against the
    /// dimensions. Intended for callers reassembling received data;
    /// [`crate::compress`] builds this directly.
    pub fn from_parts(
        width: usize,
        height: usize,
        quality_factor: f32,
        transform: Transform,
        y_quantized: Vec<i32>,
        cb_quantized: Vec<i32>,
        cr_quantized: Vec<i32>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width,
                height,
                reason: "width and height must be positive",
            });
        }
        let num_tiles = tile_count(width, height);
        let expected = num_tiles * DCTSIZE2;
        for channel in [&y_quantized, &cb_quantized, &cr_quantized] {
            if channel.len() != expected {
                return Err(Error::InvalidDimensions {
                    width,
                    height,
                    reason: "coefficient array length does not match tile count",
                });
            }
        }
        Ok(Self {
            width,
            height,
            quality_factor,
            transform,
            num_tiles,
            y_quantized,
            cb_quantized,
            cr_quantized,
        })
    }

    pub(crate) fn from_channels_unchecked(
        width: usize,
        height: usize,
        quality_factor: f32,
        transform: Transform,
        num_tiles: usize,
        y_quantized: Vec<i32>,
        cb_quantized: Vec<i32>,
        cr_quantized: Vec<i32>,
    ) -> Self {
        debug_assert_eq!(num_tiles, tile_count(width, height));
        debug_assert_eq!(y_quantized.len(), num_tiles * DCTSIZE2);
        Self {
            width,
            height,
            quality_factor,
            transform,
            num_tiles,
            y_quantized,
            cb_quantized,
            cr_quantized,
        }
    }

    /// Source image width in pixels
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Source image height in pixels
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Quality factor the tables were scaled with
    #[must_use]
    pub fn quality_factor(&self) -> f32 {
        self.quality_factor
    }

    /// Transform that produced the coefficients
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Number of 8x8 tiles per channel
    #[must_use]
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    /// Quantized luminance coefficients
    #[must_use]
    pub fn y_quantized(&self) -> &[i32] {
        &self.y_quantized
    }

    /// Quantized Cb coefficients
    #[must_use]
    pub fn cb_quantized(&self) -> &[i32] {
        &self.cb_quantized
    }

    /// Quantized Cr coefficients
    #[must_use]
    pub fn cr_quantized(&self) -> &[i32] {
        &self.cr_quantized
    }

    /// Serialize to the wire form: a small little-endian header followed
    /// by the three channels packed as i16 (quantized values always fit).
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let channel_bytes = self.num_tiles * DCTSIZE2 * 2;
        let mut out = Vec::with_capacity(WIRE_HEADER_LEN + 3 * channel_bytes);
        out.extend_from_slice(&(self.width as u32).to_le_bytes());
        out.extend_from_slice(&(self.height as u32).to_le_bytes());
        out.extend_from_slice(&(self.num_tiles as u32).to_le_bytes());
        out.push(self.transform.tag());
        out.extend_from_slice(&self.quality_factor.to_le_bytes());
        for channel in [&self.y_quantized, &self.cb_quantized, &self.cr_quantized] {
            for &v in channel.iter() {
                out.extend_from_slice(&(v as i16).to_le_bytes());
            }
        }
        out
    }

    /// Deserialize the wire form produced by [`CompressedImage::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < WIRE_HEADER_LEN {
            return Err(Error::InvalidPixelData {
                expected: WIRE_HEADER_LEN,
                actual: bytes.len(),
            });
        }
        let read_u32 =
            |off: usize| u32::from_le_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]]);
        let width = read_u32(0) as usize;
        let height = read_u32(4) as usize;
        let num_tiles = read_u32(8) as usize;
        let transform = Transform::from_tag(bytes[12])?;
        let quality_factor =
            f32::from_le_bytes([bytes[13], bytes[14], bytes[15], bytes[16]]);

        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width,
                height,
                reason: "width and height must be positive",
            });
        }
        if num_tiles != tile_count(width, height) {
            return Err(Error::InvalidDimensions {
                width,
                height,
                reason: "tile count does not match dimensions",
            });
        }
        let channel_len = num_tiles * DCTSIZE2;
        let expected = WIRE_HEADER_LEN + 3 * channel_len * 2;
        if bytes.len() != expected {
            return Err(Error::InvalidPixelData {
                expected,
                actual: bytes.len(),
            });
        }

        let mut read_channel = {
            let mut off = WIRE_HEADER_LEN;
            move || -> Vec<i32> {
                let mut channel = Vec::with_capacity(channel_len);
                for _ in 0..channel_len {
                    channel.push(i32::from(i16::from_le_bytes([bytes[off], bytes[off + 1]])));
                    off += 2;
                }
                channel
            }
        };
        let y_quantized = read_channel();
        let cb_quantized = read_channel();
        let cr_quantized = read_channel();

        Ok(Self {
            width,
            height,
            quality_factor,
            transform,
            num_tiles,
            y_quantized,
            cb_quantized,
            cr_quantized,
        })
    }
}
