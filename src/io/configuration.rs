//! Quilting constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Defaults for the command-line driver
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Output width when none is given
pub const DEFAULT_OUTPUT_WIDTH: u32 = 300;
/// Output height when none is given
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 300;
/// Side length of sampled blocks
pub const DEFAULT_BLOCK_SIZE: u32 = 100;
/// Default overlap is `block_size / OVERLAP_DIVISOR`
pub const OVERLAP_DIVISOR: u32 = 6;
/// Candidate blocks sampled per cell
pub const DEFAULT_CANDIDATES: usize = 20;
/// Number of synthesis passes over the same canvas
pub const DEFAULT_PASSES: usize = 1;

/// Flat colour written over seam pixels when seams are shown
pub const SEAM_MARKER_COLOR: [u8; 4] = [255, 0, 0, 255];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Suffix of the regeneration mask looked up next to each input
pub const REGENERATION_MASK_SUFFIX: &str = "_mask";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Visualization settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on frames kept for one animation
pub const MAX_VISUALIZATION_FRAMES: usize = 200;

/// Default overlap for a block size
pub const fn default_overlap(block_size: u32) -> u32 {
    block_size / OVERLAP_DIVISOR
}

/// Parameters for one synthesis run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuiltConfig {
    /// Side length of every block
    pub block_size: u32,
    /// Width of the band shared with previously placed blocks
    pub overlap: u32,
    /// Candidate blocks sampled for each unpinned cell
    pub candidates: usize,
    /// Paint seams with [`SEAM_MARKER_COLOR`] instead of blending them
    pub show_seam: bool,
}

impl Default for QuiltConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            overlap: default_overlap(DEFAULT_BLOCK_SIZE),
            candidates: DEFAULT_CANDIDATES,
            show_seam: false,
        }
    }
}

impl QuiltConfig {
    /// Configuration with the default overlap for `block_size`
    pub fn with_block_size(block_size: u32) -> Self {
        Self {
            block_size,
            overlap: default_overlap(block_size),
            ..Self::default()
        }
    }

    /// Distance between the origins of neighbouring cells
    pub const fn pitch(&self) -> u32 {
        self.block_size.saturating_sub(self.overlap)
    }

    /// Check the parameters describe a usable run
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the block size is zero, the overlap is not
    /// smaller than the block size, or no candidates are requested.
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(invalid_parameter(
                "block_size",
                &self.block_size,
                &"must be positive",
            ));
        }
        if self.overlap >= self.block_size {
            return Err(invalid_parameter(
                "overlap",
                &self.overlap,
                &format!("must be smaller than block size {}", self.block_size),
            ));
        }
        if self.candidates == 0 {
            return Err(invalid_parameter(
                "candidates",
                &self.candidates,
                &"at least one candidate is required",
            ));
        }
        Ok(())
    }
}
