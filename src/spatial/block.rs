//! Square patch views into a pixel surface

use crate::spatial::grid::BlockOffset;
use crate::spatial::surface::Surface;
use image::Rgba;

/// Fixed-size square view into a surface at an integer offset
///
/// Blocks borrow their surface immutably, so any number of them can share
/// the same source texture. Local coordinates are `(x, y)` with `x` the column.
#[derive(Debug)]
pub struct Block<'a, S: Surface + ?Sized> {
    surface: &'a S,
    offset: BlockOffset,
    size: u32,
}

impl<S: Surface + ?Sized> Clone for Block<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Surface + ?Sized> Copy for Block<'_, S> {}

impl<'a, S: Surface + ?Sized> Block<'a, S> {
    /// Create a view of `size`×`size` pixels starting at `offset`
    pub const fn new(surface: &'a S, offset: BlockOffset, size: u32) -> Self {
        Self {
            surface,
            offset,
            size,
        }
    }

    /// Side length in pixels
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Offset of the top-left pixel within the underlying surface
    pub const fn offset(&self) -> BlockOffset {
        self.offset
    }

    /// Pixel at local column `x`, row `y`
    ///
    /// Coordinates past the surface edge read as transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        match (self.offset.x.checked_add(x), self.offset.y.checked_add(y)) {
            (Some(sx), Some(sy)) => self.surface.pixel(sx, sy),
            _ => crate::spatial::surface::TRANSPARENT,
        }
    }

    /// Check whether the whole block lies inside its surface
    pub fn fits(&self) -> bool {
        u64::from(self.offset.x) + u64::from(self.size) <= u64::from(self.surface.width())
            && u64::from(self.offset.y) + u64::from(self.size) <= u64::from(self.surface.height())
    }
}
