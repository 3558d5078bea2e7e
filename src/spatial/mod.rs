//! Spatial data structures shared by the quilting stages
//!
//! This module contains:
//! - Pixel surface traits and colour arithmetic
//! - Square block views into a surface
//! - The column-major offset grid

/// Square block views into a surface
pub mod block;
/// Offset grid recording the chosen source patch per cell
pub mod grid;
/// Pixel surface traits implemented for `image` buffers
pub mod surface;

pub use block::Block;
pub use grid::{BlockOffset, Grid};
pub use surface::{Surface, SurfaceMut};
