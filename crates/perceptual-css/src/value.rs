//! Parsed CSS color values.

use std::fmt;

use perceptual_core::{ColorModel, GenericColor};

/// The RGB spaces CSS Color 4 predefines for `color()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CssPredefinedRgbColorSpace {
    /// Not an RGB color.
    #[default]
    Invalid,
    /// `srgb`, also used by `rgb()`, `hsl()`, `hwb()`, hex and named colors.
    Srgb,
    /// `srgb-linear`.
    SrgbLinear,
    /// `display-p3`.
    DisplayP3,
    /// `a98-rgb`.
    A98Rgb,
    /// `prophoto-rgb`.
    ProphotoRgb,
    /// `rec2020`.
    Rec2020,
}

impl CssPredefinedRgbColorSpace {
    /// The six valid spaces.
    pub const ALL: [CssPredefinedRgbColorSpace; 6] = [
        Self::Srgb,
        Self::SrgbLinear,
        Self::DisplayP3,
        Self::A98Rgb,
        Self::ProphotoRgb,
        Self::Rec2020,
    ];

    /// Looks up a `color()` identifier. Case-sensitive.
    pub fn from_css_ident(ident: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|space| space.css_ident() == ident)
    }

    /// The `color()` identifier, empty for `Invalid`.
    pub const fn css_ident(self) -> &'static str {
        match self {
            Self::Invalid => "",
            Self::Srgb => "srgb",
            Self::SrgbLinear => "srgb-linear",
            Self::DisplayP3 => "display-p3",
            Self::A98Rgb => "a98-rgb",
            Self::ProphotoRgb => "prophoto-rgb",
            Self::Rec2020 => "rec2020",
        }
    }
}

impl fmt::Display for CssPredefinedRgbColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_ident())
    }
}

/// Result of parsing one CSS color.
///
/// `model == ColorModel::Invalid` marks a failed parse; every other field
/// is then zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CssColorValue {
    /// How to read `color`.
    pub model: ColorModel,
    /// The RGB space for RGB-based models, otherwise `Invalid`.
    pub rgb_color_space: CssPredefinedRgbColorSpace,
    /// Color components. `fourth` is always zero.
    pub color: GenericColor,
    /// Opacity in `[0, 1]`.
    pub alpha1: f64,
}

impl CssColorValue {
    /// The failed-parse sentinel.
    pub const INVALID: Self = Self {
        model: ColorModel::Invalid,
        rgb_color_space: CssPredefinedRgbColorSpace::Invalid,
        color: GenericColor::ZERO,
        alpha1: 0.0,
    };

    /// Returns `true` unless this is a failed parse.
    pub fn is_valid(&self) -> bool {
        self.model != ColorModel::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_roundtrip() {
        for space in CssPredefinedRgbColorSpace::ALL {
            assert_eq!(CssPredefinedRgbColorSpace::from_css_ident(space.css_ident()), Some(space));
        }
        assert_eq!(CssPredefinedRgbColorSpace::from_css_ident(""), None);
        assert_eq!(CssPredefinedRgbColorSpace::from_css_ident("Display-P3"), None);
        assert_eq!(CssPredefinedRgbColorSpace::DisplayP3.to_string(), "display-p3");
    }

    #[test]
    fn test_default_is_invalid() {
        let value = CssColorValue::default();
        assert!(!value.is_valid());
        assert_eq!(value, CssColorValue::INVALID);
    }
}
