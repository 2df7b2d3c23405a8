//! Error types for pattern generation and image export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum CamoError {
    /// Colour string is not six hex digits after stripping `#` and whitespace
    InvalidColorFormat {
        /// The rejected input
        value: String,
    },

    /// Pattern name does not match any known style
    InvalidPatternType {
        /// The rejected input
        value: String,
    },

    /// Palette name does not match any built-in preset
    UnknownPalette {
        /// The rejected input
        name: String,
    },

    /// Canvas has a zero-length side
    ///
    /// Derived low-resolution grids are clamped to at least one cell, so only
    /// an empty canvas is rejected.
    DegenerateDimensions {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or write a generated image
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

    /// Worker pool for batch generation could not be built
    ThreadPool {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for CamoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat { value } => {
                write!(
                    f,
                    "Invalid colour '{value}': expected six hex digits such as #1C1C1C"
                )
            }
            Self::InvalidPatternType { value } => {
                write!(
                    f,
                    "Invalid pattern type '{value}': expected one of organic, jagged, m90, brush"
                )
            }
            Self::UnknownPalette { name } => {
                write!(
                    f,
                    "Unknown palette '{name}': expected one of piedmont, clay, concrete"
                )
            }
            Self::DegenerateDimensions { width, height } => {
                write!(f, "Canvas {width}x{height} has no pixels")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::ThreadPool { reason } => {
                write!(f, "Failed to build worker pool: {reason}")
            }
        }
    }
}

impl std::error::Error for CamoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, CamoError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CamoError {
    CamoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
