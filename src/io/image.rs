//! PNG decoding of source textures and export of finished canvases

use crate::io::error::{QuiltError, Result};
use image::RgbaImage;
use std::path::Path;

/// Load an image from disk as an RGBA buffer
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| QuiltError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Fully transparent canvas of the given size
///
/// # Errors
///
/// Returns an error if either dimension is zero.
pub fn blank_canvas(width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(QuiltError::InvalidParameter {
            parameter: "dimensions",
            value: format!("{width}x{height}"),
            reason: "canvas must be at least 1x1".to_string(),
        });
    }
    Ok(RgbaImage::new(width, height))
}

/// Save a canvas, creating the parent directory if needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_canvas<P: AsRef<Path>>(canvas: &RgbaImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| QuiltError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| QuiltError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
