use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reason a PPM header was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("missing magic number (empty input)")]
    MissingMagic,

    #[error("magic number is not `P6`")]
    BadMagic,

    #[error("header ended before the dimension line")]
    MissingDimensions,

    #[error("dimension line does not start with two unsigned integers")]
    InvalidDimensions,

    #[error("image has a zero dimension ({width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("missing or unreadable color depth")]
    MissingColorDepth,

    /// Only `255` (8 bits per channel) is supported.
    #[error("unsupported color depth {0}; only 255 is supported")]
    UnsupportedColorDepth(u32),

    #[error("pixel payload of {width}x{height} does not fit in memory")]
    TooLarge { width: u32, height: u32 },
}

/// Error returned by [`decode`](crate::decode) and [`Image::open`](crate::Image::open).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid PPM header: {0}")]
    Format(#[from] FormatError),

    #[error("pixel data truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("`{}` is not a .ppm file", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("failed to read image")]
    Io(#[from] io::Error),
}
