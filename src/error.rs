//! Error types for fourdct

use std::fmt;

/// Result type for fourdct operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for fourdct operations
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Invalid image dimensions, or compressed data inconsistent with them
    InvalidDimensions {
        width: usize,
        height: usize,
        reason: &'static str,
    },
    /// Pixel buffer length does not match the declared dimensions
    InvalidPixelData {
        expected: usize,
        actual: usize,
    },
    /// Quality factor outside the supported range
    InvalidQuality {
        value: f32,
        min: f32,
        max: f32,
    },
    /// Unrecognized transform tag in serialized data
    UnknownTransform(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions { width, height, reason } => {
                write!(f, "Invalid dimensions {}x{}: {}", width, height, reason)
            }
            Error::InvalidPixelData { expected, actual } => {
                write!(f, "Expected {} bytes of pixel data, got {}", expected, actual)
            }
            Error::InvalidQuality { value, min, max } => {
                write!(f, "Quality factor {} out of range [{}, {}]", value, min, max)
            }
            Error::UnknownTransform(tag) => {
                write!(f, "Unknown transform tag {}", tag)
            }
        }
    }
}

impl std::error::Error for Error {}
