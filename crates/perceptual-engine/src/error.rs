//! Engine error types.

use std::path::PathBuf;

use perceptual_icc::IccError;
use thiserror::Error;

/// Result type for engine construction.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why an [`RgbColorSpace`](crate::RgbColorSpace) could not be built.
///
/// Per-color queries never fail; only construction does.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The path does not name a regular file.
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Loading the profile or building a transform failed.
    #[error(transparent)]
    Icc(#[from] IccError),

    /// The profile does not describe RGB data.
    #[error("not an RGB profile: color space {0}")]
    NotRgb(String),

    /// The profile class cannot describe an RGB device.
    #[error("unsupported profile class: {0}")]
    UnsupportedClass(String),

    /// No lightness on the gray axis maps into the RGB cube.
    #[error("profile has no displayable gray axis")]
    NoGrayAxis,
}
