//! ICC error types.

use thiserror::Error;

/// Result type for ICC operations.
pub type IccResult<T> = Result<T, IccError>;

/// Errors that can occur during ICC operations.
#[derive(Debug, Error)]
pub enum IccError {
    /// The profile bytes were rejected by lcms2.
    #[error("failed to load profile: {0}")]
    LoadFailed(String),

    /// Building a profile in memory failed.
    #[error("failed to create profile: {0}")]
    CreateFailed(String),

    /// Building a transform between two profiles failed.
    #[error("failed to create transform: {0}")]
    TransformFailed(String),

    /// Profile color space mismatch.
    #[error("color space mismatch: expected {expected}, got {actual}")]
    ColorSpaceMismatch {
        /// Expected color space.
        expected: String,
        /// Actual color space.
        actual: String,
    },

    /// I/O error while reading a profile file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
