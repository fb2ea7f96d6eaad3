//! Error types for asset preparation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when preparing icon assets.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// DDS encoding error.
    #[error(transparent)]
    Dds(#[from] iconbake_dds::Error),

    /// Image encoding error while saving a cell.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Source file does not exist.
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Grid with no rows or no columns.
    #[error("invalid grid: {rows}x{columns}")]
    InvalidGrid { rows: u32, columns: u32 },

    /// Sheet is smaller than one pixel per cell.
    #[error("sprite sheet {width}x{height} is too small for a {rows}x{columns} grid")]
    SheetTooSmall {
        width: u32,
        height: u32,
        rows: u32,
        columns: u32,
    },

    /// Cell number outside the grid.
    #[error("cell {index} out of range (1..={count})")]
    CellOutOfRange { index: u32, count: u32 },
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, Error>;
