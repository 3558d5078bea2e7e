//! Masked dissimilarity between two equally sized pixel regions

use crate::algorithm::mask::OverlapMask;
use crate::io::error::{QuiltError, Result};
use crate::spatial::Block;
use crate::spatial::surface::{Surface, squared_difference};

/// Sum of squared channel differences over the set pixels of `mask`
///
/// Each masked pixel contributes `(|dR| + |dG| + |dB|)²`. Integer
/// arithmetic keeps the result bit-reproducible.
///
/// # Errors
///
/// Returns `SizeMismatch` if the blocks differ in size.
pub fn cost<A, B>(block_a: &Block<'_, A>, block_b: &Block<'_, B>, mask: &OverlapMask) -> Result<u64>
where
    A: Surface + ?Sized,
    B: Surface + ?Sized,
{
    if block_a.size() != block_b.size() {
        return Err(QuiltError::SizeMismatch {
            left: block_a.size(),
            right: block_b.size(),
        });
    }

    let total = mask
        .coordinates()
        .filter(|&(row, col)| row < block_a.size() as usize && col < block_a.size() as usize)
        .map(|(row, col)| {
            let (x, y) = (col as u32, row as u32);
            squared_difference(block_a.pixel(x, y), block_b.pixel(x, y))
        })
        .fold(0u64, u64::saturating_add);

    Ok(total)
}
