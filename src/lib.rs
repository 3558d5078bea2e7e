//! Image quilting texture synthesis
//!
//! Square blocks sampled from a source texture are laid out on an
//! overlapping grid. Each new block is chosen to match what is already on
//! the canvas and joined to it along a minimum-cost seam through the overlap.

#![forbid(unsafe_code)]

/// Block selection, seam finding and the quilting engine
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Pixel surfaces, block views and the offset grid
pub mod spatial;

pub use io::error::{QuiltError, Result};
