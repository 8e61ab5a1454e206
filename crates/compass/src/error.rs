//! Compass Error Types
//!
//! Errors raised while rendering or exporting the compass image. Rendering
//! itself is infallible pixel work; the fallible surface is PNG encoding and
//! file delivery.

use thiserror::Error;

/// Error type for compass rendering and export
#[derive(Error, Debug)]
pub enum CompassError {
    /// PNG encoding errors
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for compass errors
pub type CompassResult<T> = Result<T, CompassError>;

// The draw target never fails; this keeps `?` usable on drawing calls.
impl From<std::convert::Infallible> for CompassError {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}
