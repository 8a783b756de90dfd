//! Error types for perceptual-core.
//!
//! Only string-level lookups can fail in this crate. Numeric conversions
//! are total and never produce an [`Error`].

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from perceptual-core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A color model name did not match any [`ColorModel`](crate::ColorModel).
    #[error("unknown color model: {0}")]
    UnknownModel(String),

    /// A hex string could not be read as an 8-bit pixel.
    #[error("invalid hex pixel: {0}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownModel("cmyk".into());
        assert_eq!(err.to_string(), "unknown color model: cmyk");
    }
}
