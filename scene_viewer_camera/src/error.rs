//! Error types for the scene viewer camera
//!
//! This module defines the error types used throughout the crate:
//! projection preconditions, checked indexing, matrix inversion,
//! degenerate view configurations and rendering backend failures.

use std::fmt;

/// Result type for camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Precondition violated (non-positive viewport size, fov outside (0, π), ...)
    InvalidArgument(String),

    /// Component or column index outside the vector/matrix bounds
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of addressable elements
        len: usize,
    },

    /// Matrix has no usable inverse (determinant is zero or not finite)
    SingularMatrix(String),

    /// Geometric configuration that cannot define a view (eye == center, w == 0, ...)
    DegenerateGeometry(String),

    /// Rendering backend reported a failure (context binding, matrix upload)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: {} (len = {})", index, len)
            }
            Error::SingularMatrix(msg) => write!(f, "Singular matrix: {}", msg),
            Error::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
