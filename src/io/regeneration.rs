//! Regeneration masks selecting which grid cells to resample on a later pass

use crate::io::error::{QuiltError, Result};
use crate::spatial::Grid;
use ndarray::Array2;
use std::path::Path;

/// Per-cell flags indexed `[col, row]`; `true` means resample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerationMask {
    flags: Array2<bool>,
}

impl RegenerationMask {
    /// Parse a mask image where pixel `(x, y)` stands for cell `(x, y)`
    ///
    /// Pure black pixels (alpha ignored) flag their cell for regeneration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image cannot be loaded
    /// - The image flags no cell at all
    pub fn from_png(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| QuiltError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        let mut flags = Array2::from_elem((width as usize, height as usize), false);
        for (x, y, pixel) in rgba_img.enumerate_pixels() {
            let [r, g, b, _] = pixel.0;
            if r == 0
                && g == 0
                && b == 0
                && let Some(flag) = flags.get_mut((x as usize, y as usize))
            {
                *flag = true;
            }
        }

        let mask = Self { flags };
        if mask.flagged() == 0 {
            return Err(QuiltError::InvalidSourceData {
                reason: "Regeneration mask flags no cells".to_string(),
            });
        }
        Ok(mask)
    }

    /// Build a mask of `cols`×`rows` with the listed `(col, row)` cells flagged
    ///
    /// Cells outside the mask are ignored.
    pub fn from_cells(cols: usize, rows: usize, cells: &[(usize, usize)]) -> Self {
        let mut flags = Array2::from_elem((cols, rows), false);
        for &(col, row) in cells {
            if let Some(flag) = flags.get_mut((col, row)) {
                *flag = true;
            }
        }
        Self { flags }
    }

    /// Whether cell `(col, row)` should be resampled
    pub fn is_flagged(&self, col: usize, row: usize) -> bool {
        self.flags.get((col, row)).copied().unwrap_or(false)
    }

    /// Number of flagged cells
    pub fn flagged(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Clear every flagged cell from `grid`, returning how many were cleared
    pub fn apply(&self, grid: &mut Grid) -> usize {
        let mut cleared = 0;
        for ((col, row), &flag) in self.flags.indexed_iter() {
            if flag && grid.clear(col, row) {
                cleared += 1;
            }
        }
        cleared
    }
}
