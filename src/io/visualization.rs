//! Frame capture and GIF generation showing the order cells are placed in

use crate::io::configuration::{MAX_VISUALIZATION_FRAMES, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{QuiltError, Result};
use crate::spatial::surface::{Surface, to_rgba_image};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Captures canvas snapshots while a quilt is being built
///
/// Keeps every `stride`-th cell so long runs stay within
/// [`MAX_VISUALIZATION_FRAMES`]; the final cell is always kept.
pub struct VisualizationCapture {
    frames: Vec<RgbaImage>,
    stride: usize,
    total_cells: usize,
}

impl VisualizationCapture {
    /// Prepare to capture a run of `total_cells` cells
    pub fn new(total_cells: usize) -> Self {
        let stride = total_cells.div_ceil(MAX_VISUALIZATION_FRAMES).max(1);
        Self {
            frames: Vec::with_capacity(total_cells.min(MAX_VISUALIZATION_FRAMES) + 1),
            stride,
            total_cells,
        }
    }

    /// Record the canvas after cell number `placed` (1-based) was written
    pub fn record_cell<S: Surface + ?Sized>(&mut self, canvas: &S, placed: usize) {
        if placed % self.stride == 0 || placed == self.total_cells {
            self.frames.push(to_rgba_image(canvas));
        }
    }

    /// Number of frames captured so far
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export captured frames as an animated GIF
    ///
    /// Delays shorter than viewers support are raised to
    /// [`VIEWER_MIN_FRAME_DELAY_MS`], and the last frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(QuiltError::InvalidSourceData {
                reason: "No frames captured for visualization".to_string(),
            });
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, img)| {
            let hold = if index == last { 25 } else { 1 };
            Frame::from_parts(
                img.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * hold, 1),
            )
        });

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| QuiltError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| QuiltError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| QuiltError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
