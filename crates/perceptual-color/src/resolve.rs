//! From parsed CSS values to absolute color models.
//!
//! RGB-based CSS colors (`rgb()`, `hsl()`, `hwb()`, hex, named colors and
//! `color(<rgb space> ...)`) only mean something together with an RGB
//! profile. A [`CssResolver`] builds one [`RgbColorSpace`] per predefined
//! space on first use and keeps it for later calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use perceptual_convert::{all_conversions, rgb};
use perceptual_core::{ColorModel, GenericColor};
use perceptual_css::{CssColorValue, CssPredefinedRgbColorSpace};
use perceptual_engine::RgbColorSpace;
use perceptual_icc::StandardProfile;
use tracing::debug;

use crate::error::{ColorError, ColorResult};

/// The ICC profile standard behind a predefined CSS RGB space.
///
/// ```rust
/// use perceptual_color::{standard_profile, StandardProfile};
/// use perceptual_color::css::CssPredefinedRgbColorSpace;
///
/// assert_eq!(standard_profile(CssPredefinedRgbColorSpace::DisplayP3), Some(StandardProfile::DisplayP3));
/// assert_eq!(standard_profile(CssPredefinedRgbColorSpace::Invalid), None);
/// ```
pub const fn standard_profile(space: CssPredefinedRgbColorSpace) -> Option<StandardProfile> {
    match space {
        CssPredefinedRgbColorSpace::Invalid => None,
        CssPredefinedRgbColorSpace::Srgb => Some(StandardProfile::Srgb),
        CssPredefinedRgbColorSpace::SrgbLinear => Some(StandardProfile::SrgbLinear),
        CssPredefinedRgbColorSpace::DisplayP3 => Some(StandardProfile::DisplayP3),
        CssPredefinedRgbColorSpace::A98Rgb => Some(StandardProfile::A98Rgb),
        CssPredefinedRgbColorSpace::ProphotoRgb => Some(StandardProfile::ProphotoRgb),
        CssPredefinedRgbColorSpace::Rec2020 => Some(StandardProfile::Rec2020),
    }
}

/// Builds a new engine for a predefined CSS RGB space.
///
/// `srgb` uses the built-in sRGB profile; the others are synthesized from
/// their primaries and transfer curves.
pub fn create_rgb_color_space(space: CssPredefinedRgbColorSpace) -> ColorResult<Arc<RgbColorSpace>> {
    match standard_profile(space) {
        None => Err(ColorError::UnsupportedRgbSpace(space)),
        Some(StandardProfile::Srgb) => Ok(RgbColorSpace::create_srgb()?),
        Some(standard) => Ok(RgbColorSpace::from_standard(standard)?),
    }
}

/// Device RGB in `[0, 1]` for the RGB-based models.
fn to_rgb1(model: ColorModel, color: &GenericColor) -> Option<GenericColor> {
    match model {
        ColorModel::Rgb1 => Some(*color),
        ColorModel::Hsl360_1_1 => Some(rgb::hsl_to_rgb(color)),
        ColorModel::Hsv360_1_1 => Some(rgb::hsv_to_rgb(color)),
        ColorModel::Hwb360_1_1 => Some(rgb::hwb_to_rgb(color)),
        _ => None,
    }
}

/// Resolves CSS values to absolute models, caching one engine per space.
///
/// Thread-safe; engines are shared between threads through `Arc`.
///
/// # Example
///
/// ```rust
/// use perceptual_color::{ColorModel, CssResolver};
/// use perceptual_color::css::CssColor;
///
/// let resolver = CssResolver::new();
/// let models = resolver.resolve(&CssColor::parse("white")).unwrap();
/// let lab = models[&ColorModel::CielabD50];
/// assert!((lab.first - 100.0).abs() < 0.5);
/// ```
#[derive(Default)]
pub struct CssResolver {
    engines: Mutex<HashMap<CssPredefinedRgbColorSpace, Arc<RgbColorSpace>>>,
}

impl CssResolver {
    /// Creates a resolver with no engines built yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine for `space`, built on first request.
    pub fn rgb_color_space(&self, space: CssPredefinedRgbColorSpace) -> ColorResult<Arc<RgbColorSpace>> {
        // The map is never left half-updated.
        let mut engines = self.engines.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(engine) = engines.get(&space) {
            return Ok(Arc::clone(engine));
        }
        debug!(space = %space, "building RGB color space");
        let engine = create_rgb_color_space(space)?;
        engines.insert(space, Arc::clone(&engine));
        Ok(engine)
    }

    /// Number of engines built so far.
    pub fn cached_len(&self) -> usize {
        self.engines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Every absolute model of a parsed CSS color.
    ///
    /// Absolute CSS functions (`lab()`, `oklch()`, `color(xyz-d50 ...)`)
    /// go straight through the conversion graph. RGB-based values are
    /// first converted to CIELab D50 by the engine of their space. The
    /// result also carries `Rgb1` for RGB-based input.
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidColor`] for a failed parse
    /// - [`ColorError::MissingRgbSpace`] for an RGB-based model without space
    /// - [`ColorError::Engine`] if the engine cannot be built
    pub fn resolve(&self, value: &CssColorValue) -> ColorResult<HashMap<ColorModel, GenericColor>> {
        let model = value.model;
        if model == ColorModel::Invalid {
            return Err(ColorError::InvalidColor);
        }
        let Some(rgb1) = to_rgb1(model, &value.color) else {
            return Ok(all_conversions(model, value.color));
        };
        if value.rgb_color_space == CssPredefinedRgbColorSpace::Invalid {
            return Err(ColorError::MissingRgbSpace { model });
        }
        let engine = self.rgb_color_space(value.rgb_color_space)?;
        let lab = engine.to_cielab_d50(rgb1.to_array3());
        let mut models = all_conversions(ColorModel::CielabD50, lab);
        models.insert(ColorModel::Rgb1, rgb1);
        Ok(models)
    }
}

impl std::fmt::Debug for CssResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CssResolver")
            .field("cached", &self.cached_len())
            .finish_non_exhaustive()
    }
}
