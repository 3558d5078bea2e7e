//! Overlap masks marking which block pixels coincide with already-placed content

use bitvec::prelude::*;

/// Shape of the overlap between a new block and the canvas
///
/// Derived purely from the cell's grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CutType {
    /// Top-left cell, nothing placed yet
    None,
    /// First column below the first row: overlap with the block above
    Vertical,
    /// First row right of the first column: overlap with the block to the left
    Horizontal,
    /// Interior cell: L-shaped overlap with the blocks above and to the left
    Both,
}

impl CutType {
    /// Cut type for the cell at `(col, row)`
    pub const fn from_position(col: usize, row: usize) -> Self {
        match (col, row) {
            (0, 0) => Self::None,
            (_, 0) => Self::Horizontal,
            (0, _) => Self::Vertical,
            _ => Self::Both,
        }
    }

    const fn covers_rows(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    const fn covers_cols(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }
}

/// Boolean `size`×`size` matrix stored row-major
///
/// Bit `row * size + col` is set when that block pixel overlaps placed content,
/// so set bits coincide with seam graph node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlapMask {
    bits: BitVec,
    size: usize,
}

impl OverlapMask {
    /// Side length of the mask
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether local `(row, col)` overlaps placed content
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size
            && col < self.size
            && self.bits.get(row * self.size + col).as_deref() == Some(&true)
    }

    /// Number of set pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no pixel is set
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Set pixels as `(row, col)` pairs in row-major order
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.bits
            .iter_ones()
            .map(move |index| (index / size, index % size))
    }
}

/// Build the overlap mask for a cut type
///
/// `Vertical` sets the first `overlap` rows, `Horizontal` the first `overlap`
/// columns, `Both` their union, and `None` nothing.
pub fn build_mask(cut_type: CutType, block_size: usize, overlap: usize) -> OverlapMask {
    let mut bits = bitvec![0; block_size * block_size];
    for row in 0..block_size {
        for col in 0..block_size {
            let set = (cut_type.covers_rows() && row < overlap)
                || (cut_type.covers_cols() && col < overlap);
            if set {
                bits.set(row * block_size + col, true);
            }
        }
    }

    OverlapMask {
        bits,
        size: block_size,
    }
}
