//! # perceptual-css
//!
//! CSS Color 4 text for the perceptual color models.
//!
//! # Features
//!
//! - Hex colors (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
//! - All CSS named colors and `transparent`, case-insensitive
//! - `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `lab()`, `lch()`,
//!   `oklab()`, `oklch()` and `color()` with the predefined RGB and XYZ
//!   spaces, in legacy and standard syntax, with `none`
//! - Serialization of absolute colors to `oklch()`, `oklab()`, `lch()`,
//!   `lab()` and `color(xyz-…)` at a chosen number of significant figures
//!
//! Parsing never fails loudly: an invalid fragment gives a value whose
//! model is [`ColorModel::Invalid`](perceptual_core::ColorModel::Invalid).
//!
//! # Example
//!
//! ```rust
//! use perceptual_core::ColorModel;
//! use perceptual_css::CssColor;
//!
//! let value = CssColor::parse("oklch(0.1 0.2 0.75turn / 0.5)");
//! assert_eq!(value.model, ColorModel::OklchD65);
//! assert_eq!(value.color.third, 270.0);
//! assert_eq!(value.alpha1, 0.5);
//!
//! // Hue does not take percentages
//! assert!(!CssColor::parse("lch(30% 50% 0.8% / 0.5)").is_valid());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::collections::HashMap;

use perceptual_core::{ColorModel, GenericColor};

mod generate;
mod named;
mod parse;
mod value;

pub use named::named_color;
pub use value::{CssColorValue, CssPredefinedRgbColorSpace};

/// Entry points for reading and writing CSS colors.
#[derive(Debug, Clone, Copy)]
pub struct CssColor;

impl CssColor {
    /// Parses one CSS color value.
    ///
    /// Surrounding whitespace and one trailing `;` are ignored. Returns
    /// [`CssColorValue::INVALID`] if the text is not a color.
    pub fn parse(text: &str) -> CssColorValue {
        parse::parse(text)
    }

    /// Writes CSS for every absolute model present in `input`.
    ///
    /// Output order is `oklch`, `oklab`, `lch`, `lab`, `color(xyz-d50 …)`,
    /// `color(xyz-d65 …)`; models missing from `input` are skipped. RGB-based
    /// notations are never produced since a wide-gamut color may not fit
    /// into sRGB. The alpha clause `/ P%` appears only when `opacity1 < 1`.
    ///
    /// Decimal places are chosen per field so that a value at the field's
    /// full scale (1 for Oklab, 100 for lightness, 255 for CIELab a/b and
    /// chroma, 360 for hue) shows `significant_figures` digits.
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use perceptual_core::{ColorModel, GenericColor};
    /// use perceptual_css::CssColor;
    ///
    /// let mut input = HashMap::new();
    /// input.insert(ColorModel::OklchD65, GenericColor::new3(0.5, 0.2, 10.0));
    /// assert_eq!(CssColor::generate_css(&input, 1.0, 3), ["oklch(0.50 0.20 10)"]);
    /// assert_eq!(CssColor::generate_css(&input, 0.5, 3), ["oklch(0.50 0.20 10 / 50%)"]);
    /// ```
    pub fn generate_css(
        input: &HashMap<ColorModel, GenericColor>,
        opacity1: f64,
        significant_figures: u32,
    ) -> Vec<String> {
        generate::generate_css(input, opacity1, significant_figures)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CssColor, CssColorValue, CssPredefinedRgbColorSpace};
}
