//! Grid traversal combining sampling, selection, seam finding and compositing

use crate::algorithm::compositor::{SeamCut, composite};
use crate::algorithm::dijkstra::{extract_path, seam_endpoints, shortest_paths};
use crate::algorithm::mask::{CutType, OverlapMask, build_mask};
use crate::algorithm::partition::{border_candidates, classify_segments, remove_cut};
use crate::algorithm::sampler::{RandomSource, ensure_source_fits, sample};
use crate::algorithm::seam::build_graph;
use crate::algorithm::selection::{select_best, select_first};
use crate::io::configuration::{QuiltConfig, SEAM_MARKER_COLOR};
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::spatial::surface::{Surface, SurfaceMut};
use crate::spatial::{Block, BlockOffset, Grid};
use image::Rgba;

/// Outcome of placing a single grid cell
#[derive(Clone, Debug)]
pub struct CellReport {
    /// Grid column
    pub col: usize,
    /// Grid row
    pub row: usize,
    /// Overlap shape derived from the cell position
    pub cut_type: CutType,
    /// Source offset of the placed block
    pub offset: BlockOffset,
    /// Whether the offset came from the preset grid
    pub reused_preset: bool,
    /// Seam data, present only where two blocks actually overlapped
    pub seam: Option<SeamCut>,
}

/// Find the seam for `block` placed at `origin` and classify the overlap
///
/// Returns `None` for [`CutType::None`]. The seam graph is dropped before
/// returning.
///
/// # Errors
///
/// Returns `UnreachableEnd` if the seam end cannot be reached from its start.
pub fn find_seam<C, S>(
    canvas: &C,
    origin: BlockOffset,
    block: &Block<'_, S>,
    mask: &OverlapMask,
    cut_type: CutType,
    overlap: usize,
) -> Result<Option<SeamCut>>
where
    C: Surface + ?Sized,
    S: Surface + ?Sized,
{
    let size = mask.size();
    let Some((start, end)) = seam_endpoints(cut_type, size, overlap) else {
        return Ok(None);
    };

    let graph = build_graph(canvas, origin, block, mask);
    let paths = shortest_paths(&graph, start);
    let path = extract_path(end, &paths)?;
    let remaining = remove_cut(&graph, &path);
    let original_segment = classify_segments(&remaining, &border_candidates(cut_type, size));

    Ok(Some(SeamCut {
        path,
        original_segment,
    }))
}

/// Image quilting executor
///
/// Visits cells column by column, top to bottom within each column. Later
/// cells read pixels written by earlier ones, so the order is fixed.
pub struct QuiltEngine<'a, S: Surface + ?Sized> {
    source: &'a S,
    config: QuiltConfig,
    preset: Option<Grid>,
    grid: Grid,
    next_cell: usize,
}

impl<'a, S: Surface + ?Sized> QuiltEngine<'a, S> {
    /// Create an engine covering a `canvas_width`×`canvas_height` canvas
    ///
    /// Preset cells outside the new grid are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The source texture is smaller than the block size
    /// - A preset offset would read outside the source texture
    pub fn new(
        source: &'a S,
        canvas_width: u32,
        canvas_height: u32,
        config: QuiltConfig,
        preset: Option<Grid>,
    ) -> Result<Self> {
        config.validate()?;
        ensure_source_fits(source, config.block_size)?;

        if let Some(preset) = &preset {
            for (col, row, offset) in preset.iter() {
                if !Block::new(source, offset, config.block_size).fits() {
                    return Err(invalid_parameter(
                        "preset",
                        &format!("({col}, {row}) -> ({}, {})", offset.x, offset.y),
                        &"offset reads outside the source texture",
                    ));
                }
            }
        }

        let (cols, rows) = Grid::dimensions_for(
            canvas_width,
            canvas_height,
            config.block_size,
            config.overlap,
        );

        Ok(Self {
            source,
            config,
            preset,
            grid: Grid::new(cols, rows),
            next_cell: 0,
        })
    }

    /// Run parameters
    pub const fn config(&self) -> &QuiltConfig {
        &self.config
    }

    /// Offsets recorded so far
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the engine and return the recorded offsets
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Number of cells in the grid
    pub fn total_cells(&self) -> usize {
        self.grid.cols() * self.grid.rows()
    }

    /// Number of cells placed so far
    pub const fn placed_cells(&self) -> usize {
        self.next_cell
    }

    /// Place the next cell in traversal order
    ///
    /// Returns `Ok(None)` once every cell has been placed.
    ///
    /// # Errors
    ///
    /// Returns an error if seam computation fails for the cell; the canvas
    /// keeps whatever earlier cells wrote.
    pub fn place_next<C, R>(&mut self, canvas: &mut C, rng: &mut R) -> Result<Option<CellReport>>
    where
        C: SurfaceMut + ?Sized,
        R: RandomSource + ?Sized,
    {
        let rows = self.grid.rows();
        if rows == 0 || self.next_cell >= self.total_cells() {
            return Ok(None);
        }

        let col = self.next_cell / rows;
        let row = self.next_cell % rows;
        let report = self.place_cell(canvas, rng, col, row).with_cell(col, row)?;
        self.next_cell += 1;

        Ok(Some(report))
    }

    fn place_cell<C, R>(
        &mut self,
        canvas: &mut C,
        rng: &mut R,
        col: usize,
        row: usize,
    ) -> Result<CellReport>
    where
        C: SurfaceMut + ?Sized,
        R: RandomSource + ?Sized,
    {
        let block_size = self.config.block_size;
        let size = block_size as usize;
        let overlap = self.config.overlap as usize;
        let pitch = self.config.pitch();
        let origin = BlockOffset::new(
            (col as u32).saturating_mul(pitch),
            (row as u32).saturating_mul(pitch),
        );

        let cut_type = CutType::from_position(col, row);
        let mask = build_mask(cut_type, size, overlap);

        let preset_offset = self.preset.as_ref().and_then(|preset| preset.get(col, row));
        let (block, reused_preset) = if let Some(offset) = preset_offset {
            (Block::new(self.source, offset, block_size), true)
        } else {
            let candidates = sample(self.source, block_size, self.config.candidates, rng)?;
            let chosen = if cut_type == CutType::None {
                select_first(&candidates)?
            } else {
                let existing = Block::new(&*canvas, origin, block_size);
                select_best(&candidates, &existing, &mask)?
            };
            (chosen, false)
        };

        // Without an overlap band there is nothing to seam
        let seam = if overlap > 0 {
            find_seam(&*canvas, origin, &block, &mask, cut_type, overlap)?
        } else {
            None
        };

        let marker = self.config.show_seam.then_some(Rgba(SEAM_MARKER_COLOR));
        composite(canvas, &block, origin, seam.as_ref(), marker);

        let offset = block.offset();
        self.grid.set(col, row, offset);

        Ok(CellReport {
            col,
            row,
            cut_type,
            offset,
            reused_preset,
            seam,
        })
    }
}

/// Fill `canvas` with a quilt of blocks from `source`
///
/// Cells present in `preset` reuse their recorded offset without sampling;
/// all others are sampled from `rng`. Returns the offsets used for every cell,
/// suitable as the preset of a later run.
///
/// # Errors
///
/// Returns an error if validation fails or any cell cannot be placed. The
/// canvas is left partially filled in that case.
pub fn construct_quilt<S, C, R>(
    source: &S,
    canvas: &mut C,
    config: QuiltConfig,
    preset: Option<Grid>,
    rng: &mut R,
) -> Result<Grid>
where
    S: Surface + ?Sized,
    C: SurfaceMut + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut engine = QuiltEngine::new(source, canvas.width(), canvas.height(), config, preset)?;
    while engine.place_next(canvas, rng)?.is_some() {}
    Ok(engine.into_grid())
}
