//! Error types for DDS encoding.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when encoding DDS files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Width or height cannot be described by an uncompressed 32-bit header.
    #[error("invalid texture dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer does not hold whole 4-byte pixels.
    #[error("malformed pixel buffer: {len} bytes is not a multiple of 4")]
    MalformedPixels { len: usize },

    /// Pixel buffer length disagrees with the image dimensions.
    #[error("pixel buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Source image does not exist.
    #[error("source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Source image could not be decoded.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Destination could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, Error>;
