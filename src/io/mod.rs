/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and run parameters
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Image loading and export
pub mod image;
/// Terminal progress display
pub mod progress;
/// Regeneration masks for multi-pass runs
pub mod regeneration;
/// Animated capture of cell placement
pub mod visualization;
