//! Command-line interface for batch quilting of PNG textures

use crate::algorithm::executor::QuiltEngine;
use crate::io::configuration::{
    DEFAULT_BLOCK_SIZE, DEFAULT_CANDIDATES, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH,
    DEFAULT_PASSES, DEFAULT_SEED, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX, QuiltConfig,
    REGENERATION_MASK_SUFFIX, default_overlap,
};
use crate::io::error::Result;
use crate::io::image::{blank_canvas, export_canvas, load_rgba};
use crate::io::progress::ProgressManager;
use crate::io::regeneration::RegenerationMask;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::Grid;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quiltseam")]
#[command(
    author,
    version,
    about = "Synthesize large textures by quilting patches of a source image"
)]
/// Command-line arguments for the quilting tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: u32,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: u32,

    /// Side length of sampled blocks
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: u32,

    /// Overlap between neighbouring blocks (defaults to a sixth of the block size)
    #[arg(short, long)]
    pub overlap: Option<u32>,

    /// Candidate blocks sampled per cell
    #[arg(short, long, default_value_t = DEFAULT_CANDIDATES)]
    pub candidates: usize,

    /// Paint seams in a flat marker colour instead of blending them
    #[arg(long)]
    pub show_seam: bool,

    /// Number of passes over the same canvas
    #[arg(short, long, default_value_t = DEFAULT_PASSES)]
    pub passes: usize,

    /// Resample cells flagged in <input>_mask.png between passes
    #[arg(short, long)]
    pub regenerate: bool,

    /// Export an animated GIF of the placement order
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Quilting parameters selected on the command line
    pub fn quilt_config(&self) -> QuiltConfig {
        QuiltConfig {
            block_size: self.block_size,
            overlap: self
                .overlap
                .unwrap_or_else(|| default_overlap(self.block_size)),
            candidates: self.candidates,
            show_seam: self.show_seam,
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.quilt_config().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_png(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_png(&path) && !is_derived(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path, self.cli.passes, self.cli.passes);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback for missing regeneration mask
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let source = load_rgba(input_path)?;
        let mut canvas = blank_canvas(self.cli.width, self.cli.height)?;
        let config = self.cli.quilt_config();
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        let regeneration = if self.cli.regenerate {
            let mask_path = Self::get_mask_path(input_path);
            if mask_path.exists() {
                Some(RegenerationMask::from_png(&mask_path)?)
            } else {
                if !self.cli.quiet {
                    eprintln!(
                        "No regeneration mask found at: {} (continuing without mask)",
                        mask_path.display()
                    );
                }
                None
            }
        } else {
            None
        };

        let passes = self.cli.passes.max(1);
        let mut visualization = None;
        let mut preset: Option<Grid> = None;

        for pass in 1..=passes {
            let mut engine =
                QuiltEngine::new(&source, canvas.width(), canvas.height(), config, preset.take())?;
            let total_cells = engine.total_cells();

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_pass(index, input_path, pass, total_cells);
            }
            if self.cli.visualize && pass == passes {
                visualization = Some(VisualizationCapture::new(total_cells));
            }

            while engine.place_next(&mut canvas, &mut rng)?.is_some() {
                let placed = engine.placed_cells();
                if let Some(ref mut pm) = self.progress_manager {
                    pm.update_cells(index, placed);
                }
                if let Some(ref mut viz) = visualization {
                    viz.record_cell(&canvas, placed);
                }
            }

            export_canvas(&canvas, Self::get_output_path(input_path, pass, passes))?;

            let mut grid = engine.into_grid();
            if let Some(ref mask) = regeneration {
                mask.apply(&mut grid);
            }
            preset = Some(grid);
        }

        if let Some(ref viz) = visualization {
            viz.export_gif(&Self::get_visualization_path(input_path), GIF_FRAME_DELAY_MS)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    /// Output path for `pass` of `passes`
    ///
    /// Single-pass runs write `<stem>_result.<ext>`; multi-pass runs number
    /// each pass, `<stem>_result_<pass>.<ext>`.
    pub fn get_output_path(input_path: &Path, pass: usize, passes: usize) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = if passes > 1 {
            format!(
                "{}{OUTPUT_SUFFIX}_{pass}.{}",
                stem.to_string_lossy(),
                extension.to_string_lossy()
            )
        } else {
            format!(
                "{}{OUTPUT_SUFFIX}.{}",
                stem.to_string_lossy(),
                extension.to_string_lossy()
            )
        };
        sibling(input_path, &output_name)
    }

    /// Regeneration mask path, `<stem>_mask.png`
    pub fn get_mask_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        sibling(
            input_path,
            &format!("{}{REGENERATION_MASK_SUFFIX}.png", stem.to_string_lossy()),
        )
    }

    fn get_visualization_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        sibling(
            input_path,
            &format!("{}_visualization.gif", stem.to_string_lossy()),
        )
    }
}

fn sibling(input_path: &Path, name: &str) -> PathBuf {
    input_path
        .parent()
        .map_or_else(|| PathBuf::from(name), |parent| parent.join(name))
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

// Results and masks sitting next to their inputs are not sources themselves
fn is_derived(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.contains(OUTPUT_SUFFIX) || stem.ends_with(REGENERATION_MASK_SUFFIX))
}
