//! Pixel surface abstractions shared by the source texture and the output canvas

use image::{Rgba, RgbaImage};

/// Colour returned for coordinates outside a surface
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Read-only 2D pixel surface
pub trait Surface {
    /// Surface width in pixels
    fn width(&self) -> u32;

    /// Surface height in pixels
    fn height(&self) -> u32;

    /// Pixel at `(x, y)`, or [`TRANSPARENT`] when outside the surface
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8>;

    /// Check whether `(x, y)` lies inside the surface
    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }
}

/// Mutable pixel surface the quilt is written into
pub trait SurfaceMut: Surface {
    /// Overwrite the pixel at `(x, y)`
    ///
    /// Writes outside the surface are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>);
}

impl Surface for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        self.get_pixel_checked(x, y).copied().unwrap_or(TRANSPARENT)
    }
}

impl SurfaceMut for RgbaImage {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if let Some(pixel) = self.get_pixel_mut_checked(x, y) {
            *pixel = color;
        }
    }
}

/// Copy any surface into an owned RGBA buffer
pub fn to_rgba_image<S: Surface + ?Sized>(surface: &S) -> RgbaImage {
    RgbaImage::from_fn(surface.width(), surface.height(), |x, y| surface.pixel(x, y))
}

/// Sum of absolute R, G and B differences between two pixels
///
/// Alpha is ignored.
pub fn channel_difference(a: Rgba<u8>, b: Rgba<u8>) -> u64 {
    a.0.iter()
        .zip(b.0.iter())
        .take(3)
        .map(|(&lhs, &rhs)| u64::from(lhs.abs_diff(rhs)))
        .sum()
}

/// Squared channel difference, the per-pixel mismatch used by cost and seam weights
pub fn squared_difference(a: Rgba<u8>, b: Rgba<u8>) -> u64 {
    let diff = channel_difference(a, b);
    diff * diff
}

/// Rounded per-channel average of two colours with opaque alpha
pub fn blend_opaque(a: Rgba<u8>, b: Rgba<u8>) -> Rgba<u8> {
    let mut out = [0, 0, 0, u8::MAX];
    for (channel, (&lhs, &rhs)) in out.iter_mut().zip(a.0.iter().zip(b.0.iter())).take(3) {
        *channel = (u16::from(lhs) + u16::from(rhs)).div_ceil(2) as u8;
    }
    Rgba(out)
}
