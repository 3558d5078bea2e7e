//! Column-major record of the source offset chosen for every output cell
//!
//! The same structure serves as the engine's working state, its returned
//! result, and the optional preset fed into a later run.

use ndarray::Array2;

/// Top-left position of a block within the source texture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockOffset {
    /// Column offset in pixels
    pub x: u32,
    /// Row offset in pixels
    pub y: u32,
}

impl BlockOffset {
    /// Create an offset from pixel coordinates
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Sparse grid of recorded offsets indexed `[col, row]`
///
/// Absent cells are resampled when the grid is used as a preset; present
/// cells are reused verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Option<BlockOffset>>,
}

impl Grid {
    /// Create an empty grid with the given dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cells: Array2::from_elem((cols, rows), None),
        }
    }

    /// Grid dimensions required to cover a canvas
    ///
    /// Each axis needs `ceil(extent / pitch)` cells, with `pitch = block_size - overlap`.
    /// A zero pitch yields an empty grid.
    pub const fn dimensions_for(
        canvas_width: u32,
        canvas_height: u32,
        block_size: u32,
        overlap: u32,
    ) -> (usize, usize) {
        let pitch = block_size.saturating_sub(overlap);
        if pitch == 0 {
            return (0, 0);
        }
        (
            canvas_width.div_ceil(pitch) as usize,
            canvas_height.div_ceil(pitch) as usize,
        )
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.dim().1
    }

    /// Offset recorded at `(col, row)`, if any
    pub fn get(&self, col: usize, row: usize) -> Option<BlockOffset> {
        self.cells.get((col, row)).copied().flatten()
    }

    /// Record an offset at `(col, row)`
    ///
    /// Returns `false` when the cell lies outside the grid.
    pub fn set(&mut self, col: usize, row: usize, offset: BlockOffset) -> bool {
        self.cells
            .get_mut((col, row))
            .map(|cell| *cell = Some(offset))
            .is_some()
    }

    /// Forget the offset at `(col, row)` so the cell is resampled next run
    ///
    /// Returns `true` when a recorded offset was removed.
    pub fn clear(&mut self, col: usize, row: usize) -> bool {
        self.cells
            .get_mut((col, row))
            .and_then(Option::take)
            .is_some()
    }

    /// Number of cells holding an offset
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over `(col, row, offset)` for every recorded cell
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, BlockOffset)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((col, row), cell)| cell.map(|offset| (col, row, offset)))
    }
}
