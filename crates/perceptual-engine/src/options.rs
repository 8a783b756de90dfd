//! Engine tunables.

use perceptual_icc::Intent;

/// Numeric settings of an [`RgbColorSpace`](crate::RgbColorSpace).
///
/// The defaults suit interactive color pickers; they rarely need changing.
///
/// ```rust
/// use perceptual_engine::EngineOptions;
///
/// let options = EngineOptions::default().with_cielab_precision(0.01);
/// assert_eq!(options.cielab_precision, 0.01);
/// assert_eq!(options.oklab_precision, 0.00001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Search resolution for CIELab chroma and lightness.
    pub cielab_precision: f64,
    /// Search resolution for Oklab chroma and lightness.
    pub oklab_precision: f64,
    /// Largest CIELab round-trip error (Lab → RGB → Lab) for a color
    /// still to count as in gamut.
    pub cielab_deviation_limit: f64,
    /// Margin added to the sampled Oklch maximum chroma.
    pub oklab_deviation_limit: f64,
    /// Factor applied to the sampled maximum chroma.
    pub max_chroma_headroom: f64,
    /// Fixed maximum CIELCh chroma of the built-in sRGB engine.
    pub srgb_max_cielch_chroma: f64,
    /// Rendering intent of both transforms.
    pub intent: Intent,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            cielab_precision: 0.001,
            oklab_precision: 0.00001,
            cielab_deviation_limit: 0.5,
            oklab_deviation_limit: 0.005,
            max_chroma_headroom: 1.02,
            srgb_max_cielch_chroma: 132.0,
            intent: Intent::AbsoluteColorimetric,
        }
    }
}

impl EngineOptions {
    /// Sets [`cielab_precision`](Self::cielab_precision).
    pub fn with_cielab_precision(mut self, value: f64) -> Self {
        self.cielab_precision = value;
        self
    }

    /// Sets [`oklab_precision`](Self::oklab_precision).
    pub fn with_oklab_precision(mut self, value: f64) -> Self {
        self.oklab_precision = value;
        self
    }

    /// Sets [`cielab_deviation_limit`](Self::cielab_deviation_limit).
    pub fn with_cielab_deviation_limit(mut self, value: f64) -> Self {
        self.cielab_deviation_limit = value;
        self
    }

    /// Sets [`intent`](Self::intent).
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }
}
