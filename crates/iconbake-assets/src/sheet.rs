//! Sprite-sheet slicing.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::template::TemplateSet;
use crate::{Error, Result};

/// Output format for extracted cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFormat {
    /// Save each cell as `<prefix><n>.png`.
    #[default]
    Png,
    /// Convert each cell straight to `<prefix><n>.dds`.
    Dds,
}

/// A sprite sheet laid out as an evenly spaced grid of icons.
///
/// Cells are numbered row-major from 1. When the sheet size is not a
/// multiple of the grid, the leftover pixels on the right and bottom edges
/// belong to no cell.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: DynamicImage,
    rows: u32,
    columns: u32,
}

impl SpriteSheet {
    /// Default grid size (3x3).
    pub const DEFAULT_GRID: u32 = 3;

    /// Wrap a decoded sheet with a 3x3 grid.
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            rows: Self::DEFAULT_GRID,
            columns: Self::DEFAULT_GRID,
        }
    }

    /// Decode a sheet from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }
        let image = image::open(path).map_err(|source| iconbake_dds::Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), width = image.width(), height = image.height(), "loaded sprite sheet");
        Ok(Self::new(image))
    }

    /// Use a `rows` x `columns` grid instead.
    pub fn with_grid(mut self, rows: u32, columns: u32) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Number of cells in the grid, saturating at `u32::MAX`.
    pub fn cell_count(&self) -> u32 {
        self.rows.saturating_mul(self.columns)
    }

    /// Width and height of one cell.
    pub fn cell_size(&self) -> Result<(u32, u32)> {
        let (rows, columns) = (self.rows, self.columns);
        if rows == 0 || columns == 0 || rows.checked_mul(columns).is_none() {
            return Err(Error::InvalidGrid { rows, columns });
        }

        let (width, height) = self.image.dimensions();
        let size = (width / columns, height / rows);
        if size.0 == 0 || size.1 == 0 {
            return Err(Error::SheetTooSmall {
                width,
                height,
                rows,
                columns,
            });
        }
        Ok(size)
    }

    /// Crop cell `index` (1-based, row-major).
    pub fn cell(&self, index: u32) -> Result<DynamicImage> {
        let (cell_width, cell_height) = self.cell_size()?;
        let count = self.cell_count();
        if index == 0 || index > count {
            return Err(Error::CellOutOfRange { index, count });
        }

        let row = (index - 1) / self.columns;
        let col = (index - 1) % self.columns;
        Ok(self
            .image
            .crop_imm(col * cell_width, row * cell_height, cell_width, cell_height))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> Result<Vec<DynamicImage>> {
        self.cell_size()?;
        (1..=self.cell_count()).map(|n| self.cell(n)).collect()
    }

    /// Write every cell into `set`, one file per cell.
    ///
    /// Cell `n` goes to the set's icon `n`; the set's own count is ignored.
    /// Returns the written paths in cell order.
    pub fn extract_to(&self, set: &TemplateSet, format: CellFormat) -> Result<Vec<PathBuf>> {
        let (cell_width, cell_height) = self.cell_size()?;
        debug!(cell_width, cell_height, cells = self.cell_count(), "slicing sprite sheet");

        fs::create_dir_all(set.dir())?;

        let mut written = Vec::with_capacity(self.cell_count() as usize);
        for (n, cell) in (1..).zip(self.cells()?) {
            let path = match format {
                CellFormat::Png => {
                    let path = set.png_path(n);
                    cell.save(&path)?;
                    path
                }
                CellFormat::Dds => {
                    let path = set.dds_path(n);
                    iconbake_dds::write_dds_file(&path, &cell.into_rgba8())?;
                    path
                }
            };
            debug!(path = %path.display(), "saved cell");
            written.push(path);
        }

        Ok(written)
    }
}
