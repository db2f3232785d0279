//! Error types for map generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and export operations
#[derive(Debug)]
pub enum GenerationError {
    /// Map dimensions are zero or beyond the allocation safety limit
    InvalidDimensions {
        /// Requested or actual row count
        rows: usize,
        /// Requested or actual column count
        cols: usize,
    },

    /// Floor density outside the unit interval
    InvalidDensity {
        /// Provided density value
        value: f64,
    },

    /// Failed to save a generated map image
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

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid map dimensions {rows}x{cols}")
            }
            Self::InvalidDensity { value } => {
                write!(f, "Density {value} is outside the range [0, 1]")
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

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;
