//! Error types and context management for quilting operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all quilting operations
#[derive(Debug)]
pub enum QuiltError {
    /// Two compared blocks have different side lengths
    SizeMismatch {
        /// Side length of the first block
        left: u32,
        /// Side length of the second block
        right: u32,
    },

    /// Source texture cannot hold a single block
    ///
    /// Raised before any sampling takes place.
    SourceTooSmall {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
        /// Requested block size
        block_size: u32,
    },

    /// Seam end node was not reached by the shortest-path search
    ///
    /// Indicates a malformed mask or graph for the cell being placed.
    UnreachableEnd {
        /// Node id of the seam end
        node: usize,
        /// Grid cell `(col, row)` being placed, when known
        cell: Option<(usize, usize)>,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input data doesn't meet requirements
    InvalidSourceData {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for QuiltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { left, right } => {
                write!(f, "Cannot compare blocks of size {left} and {right}")
            }
            Self::SourceTooSmall {
                width,
                height,
                block_size,
            } => {
                write!(
                    f,
                    "Source texture {width}x{height} is smaller than block size {block_size}"
                )
            }
            Self::UnreachableEnd { node, cell } => match cell {
                Some((col, row)) => write!(
                    f,
                    "Seam end node {node} is unreachable in cell ({col}, {row})"
                ),
                None => write!(f, "Seam end node {node} is unreachable"),
            },
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for QuiltError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for quilting results
pub type Result<T> = std::result::Result<T, QuiltError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Grid cell `(col, row)` where the error occurred
    pub cell: Option<(usize, usize)>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches errors with the state of the run that produced them
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the grid cell context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the cell context applied
    fn with_cell(self, col: usize, row: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<QuiltError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only cell-scoped failures carry a position
            if let QuiltError::UnreachableEnd { cell, .. } = &mut error
                && context.cell.is_some()
            {
                *cell = context.cell;
            }
            error
        })
    }

    fn with_cell(self, col: usize, row: usize) -> Result<T> {
        self.with_context(ErrorContext {
            cell: Some((col, row)),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for QuiltError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for QuiltError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QuiltError {
    QuiltError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid path error for CLI target handling
pub fn io_error(msg: &str) -> QuiltError {
    QuiltError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
