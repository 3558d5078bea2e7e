//! Writing one block into the canvas along its seam

use crate::algorithm::dijkstra::CutPath;
use crate::algorithm::seam::{NodeSet, node_id};
use crate::spatial::surface::{Surface, SurfaceMut, blend_opaque};
use crate::spatial::{Block, BlockOffset};
use image::Rgba;

/// Seam data produced for cells that overlap placed content
#[derive(Clone, Debug)]
pub struct SeamCut {
    /// Minimum-cost cut through the overlap
    pub path: CutPath,
    /// Overlap pixels that keep the existing canvas content
    pub original_segment: NodeSet,
}

/// Composite `block` onto `canvas` with its top-left at `origin`
///
/// Without a seam every pixel is copied verbatim. With one, cut pixels get
/// either `marker` or the opaque average of block and canvas, pixels in the
/// original segment are left alone, and everything else is copied verbatim
/// including alpha. Pixels falling outside the canvas are skipped.
pub fn composite<C, S>(
    canvas: &mut C,
    block: &Block<'_, S>,
    origin: BlockOffset,
    seam: Option<&SeamCut>,
    marker: Option<Rgba<u8>>,
) where
    C: SurfaceMut + ?Sized,
    S: Surface + ?Sized,
{
    let size = block.size();
    let cut = seam.map(|seam| seam.path.membership((size as usize).pow(2)));

    for y in 0..size {
        for x in 0..size {
            let (Some(cx), Some(cy)) = (origin.x.checked_add(x), origin.y.checked_add(y)) else {
                continue;
            };
            if !canvas.contains(cx, cy) {
                continue;
            }

            let node = node_id(y as usize, x as usize, size as usize);
            let color = block.pixel(x, y);

            match (seam, &cut) {
                (Some(_), Some(cut)) if cut.contains(node) => {
                    let seam_color = marker.unwrap_or_else(|| blend_opaque(color, canvas.pixel(cx, cy)));
                    canvas.set_pixel(cx, cy, seam_color);
                }
                (Some(seam), _) if seam.original_segment.contains(node) => {}
                _ => canvas.set_pixel(cx, cy, color),
            }
        }
    }
}
