//! Error types for the combined API.

use perceptual_core::ColorModel;
use perceptual_css::CssPredefinedRgbColorSpace;
use perceptual_engine::EngineError;
use thiserror::Error;

/// Why a color could not be resolved to absolute models.
#[derive(Debug, Error)]
pub enum ColorError {
    /// The CSS value failed to parse.
    #[error("invalid color value")]
    InvalidColor,

    /// The model depends on an RGB space that was not given.
    #[error("{model} needs an RGB color space")]
    MissingRgbSpace {
        /// Model of the value.
        model: ColorModel,
    },

    /// No engine can be built for this RGB space.
    #[error("no engine for RGB color space '{0}'")]
    UnsupportedRgbSpace(CssPredefinedRgbColorSpace),

    /// Building the engine failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type for the combined API.
pub type ColorResult<T> = Result<T, ColorError>;
