//! Best-candidate selection against the content already on the canvas

use crate::algorithm::cost::cost;
use crate::algorithm::mask::OverlapMask;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Block;
use crate::spatial::surface::Surface;

/// Pick the candidate whose masked overlap best matches `existing`
///
/// The argmin is stable: among equal costs the earliest candidate wins.
///
/// # Errors
///
/// Returns an error if `candidates` is empty or a candidate differs in size
/// from `existing`.
pub fn select_best<'a, S, C>(
    candidates: &[Block<'a, S>],
    existing: &Block<'_, C>,
    mask: &OverlapMask,
) -> Result<Block<'a, S>>
where
    S: Surface + ?Sized,
    C: Surface + ?Sized,
{
    let mut best: Option<(u64, Block<'a, S>)> = None;

    for candidate in candidates {
        let candidate_cost = cost(candidate, existing, mask)?;
        // Strict comparison keeps the first of equal-cost candidates
        if best.is_none_or(|(best_cost, _)| candidate_cost < best_cost) {
            best = Some((candidate_cost, *candidate));
        }
    }

    best.map(|(_, block)| block).ok_or_else(no_candidates)
}

/// Accept the first candidate without evaluating cost
///
/// Used for the top-left cell where nothing has been placed yet.
///
/// # Errors
///
/// Returns an error if `candidates` is empty.
pub fn select_first<'a, S: Surface + ?Sized>(candidates: &[Block<'a, S>]) -> Result<Block<'a, S>> {
    candidates
        .first()
        .copied()
        .ok_or_else(no_candidates)
}

fn no_candidates() -> crate::io::error::QuiltError {
    invalid_parameter("candidates", &0, &"at least one candidate block is required")
}
