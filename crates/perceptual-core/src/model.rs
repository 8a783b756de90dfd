//! Color model tags.
//!
//! A [`ColorModel`] is the dictionary key that says how the components of a
//! [`GenericColor`](crate::GenericColor) are to be interpreted.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifies how a [`GenericColor`](crate::GenericColor) is interpreted.
///
/// The absolute models (`XyzD50`, `XyzD65`, `OklabD65`, `OklchD65`,
/// `CielabD50`, `CielchD50`) are device independent. `Rgb1` and the
/// HSL/HSV/HWB models depend on an RGB profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ColorModel {
    /// No valid model. Marks parse failures.
    #[default]
    Invalid,
    /// Device RGB with channels in `[0, 1]`.
    Rgb1,
    /// CIE XYZ relative to the D50 white point.
    XyzD50,
    /// CIE XYZ relative to the D65 white point.
    XyzD65,
    /// Oklab (D65).
    OklabD65,
    /// Oklch, the polar form of Oklab.
    OklchD65,
    /// CIELab relative to D50.
    CielabD50,
    /// CIELCh, the polar form of CIELab D50.
    CielchD50,
    /// HSL with hue in degrees and saturation/lightness in `[0, 1]`.
    Hsl360_1_1,
    /// HSV with hue in degrees and saturation/value in `[0, 1]`.
    Hsv360_1_1,
    /// HWB with hue in degrees and whiteness/blackness in `[0, 1]`.
    Hwb360_1_1,
}

impl ColorModel {
    /// Every model, `Invalid` included.
    pub const ALL: [ColorModel; 11] = [
        ColorModel::Invalid,
        ColorModel::Rgb1,
        ColorModel::XyzD50,
        ColorModel::XyzD65,
        ColorModel::OklabD65,
        ColorModel::OklchD65,
        ColorModel::CielabD50,
        ColorModel::CielchD50,
        ColorModel::Hsl360_1_1,
        ColorModel::Hsv360_1_1,
        ColorModel::Hwb360_1_1,
    ];

    /// Stable identifier, also accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ColorModel::Invalid => "invalid",
            ColorModel::Rgb1 => "rgb1",
            ColorModel::XyzD50 => "xyz-d50",
            ColorModel::XyzD65 => "xyz-d65",
            ColorModel::OklabD65 => "oklab-d65",
            ColorModel::OklchD65 => "oklch-d65",
            ColorModel::CielabD50 => "cielab-d50",
            ColorModel::CielchD50 => "cielch-d50",
            ColorModel::Hsl360_1_1 => "hsl",
            ColorModel::Hsv360_1_1 => "hsv",
            ColorModel::Hwb360_1_1 => "hwb",
        }
    }

    /// Returns `true` for device-independent models.
    pub const fn is_absolute(self) -> bool {
        matches!(
            self,
            ColorModel::XyzD50
                | ColorModel::XyzD65
                | ColorModel::OklabD65
                | ColorModel::OklchD65
                | ColorModel::CielabD50
                | ColorModel::CielchD50
        )
    }

    /// Returns `true` for models whose third component is a hue angle.
    pub const fn is_polar(self) -> bool {
        matches!(self, ColorModel::OklchD65 | ColorModel::CielchD50)
    }

    /// Returns `true` unless this is [`ColorModel::Invalid`].
    #[inline]
    pub const fn is_valid(self) -> bool {
        !matches!(self, ColorModel::Invalid)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(ColorModel::default(), ColorModel::Invalid);
        assert!(!ColorModel::Invalid.is_valid());
    }

    #[test]
    fn test_absolute_models() {
        let absolute: Vec<_> = ColorModel::ALL.into_iter().filter(|m| m.is_absolute()).collect();
        assert_eq!(absolute.len(), 6);
        assert!(!ColorModel::Rgb1.is_absolute());
        assert!(!ColorModel::Hwb360_1_1.is_absolute());
    }

    #[test]
    fn test_name_roundtrip() {
        for model in ColorModel::ALL {
            assert_eq!(model.name().parse::<ColorModel>(), Ok(model));
        }
        assert_eq!("  OKLCH-D65 ".parse::<ColorModel>(), Ok(ColorModel::OklchD65));
        assert!("cmyk".parse::<ColorModel>().is_err());
    }
}
