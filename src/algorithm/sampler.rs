//! Uniform random sampling of candidate blocks from the source texture

use crate::io::error::{QuiltError, Result};
use crate::spatial::surface::Surface;
use crate::spatial::{Block, BlockOffset};
use rand::Rng;

/// Injectable source of uniform integers
///
/// Every `rand` generator implements this, so a seeded `StdRng` gives
/// reproducible runs.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`; `bound` must be positive
    fn next_int(&mut self, bound: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_int(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        self.random_range(0..bound)
    }
}

/// Reject a source texture that cannot hold a single block
///
/// # Errors
///
/// Returns `SourceTooSmall` if either dimension is below `block_size`.
pub fn ensure_source_fits<S: Surface + ?Sized>(source: &S, block_size: u32) -> Result<()> {
    if source.width() < block_size || source.height() < block_size {
        return Err(QuiltError::SourceTooSmall {
            width: source.width(),
            height: source.height(),
            block_size,
        });
    }
    Ok(())
}

/// Draw `count` blocks with offsets uniform in `[0, w - size] × [0, h - size]`
///
/// Offsets are drawn with replacement, x before y for each block.
///
/// # Errors
///
/// Returns `SourceTooSmall` if the texture is smaller than `block_size`.
pub fn sample<'a, S, R>(
    source: &'a S,
    block_size: u32,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Block<'a, S>>>
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    ensure_source_fits(source, block_size)?;

    let x_bound = source.width() - block_size + 1;
    let y_bound = source.height() - block_size + 1;

    let blocks = (0..count)
        .map(|_| {
            let x = rng.next_int(x_bound);
            let y = rng.next_int(y_bound);
            Block::new(source, BlockOffset::new(x, y), block_size)
        })
        .collect();

    Ok(blocks)
}
