//! # perceptual-color
//!
//! Perceptual color models, ICC gamut engine and CSS Color 4 in one API.
//!
//! This crate re-exports the workspace crates and adds the glue between
//! parsed CSS values and RGB profiles:
//!
//! - **Conversion graph** - XYZ, CIELab/CIELCh D50, Oklab/Oklch
//! - **Gamut engine** - in-gamut checks, chroma reduction, boundary colors
//! - **ICC profiles** - built-in sRGB, CSS predefined spaces, ICC files
//! - **CSS Color 4** - parsing and serialization of absolute colors
//!
//! # Architecture
//!
//! ```text
//!                   perceptual-color
//!                          |
//!        +-----------------+-----------------+
//!        |                 |                 |
//!  perceptual-css   perceptual-engine        |
//!        |                 |                 |
//!        |        +--------+--------+        |
//!        |        |                 |        |
//!        |  perceptual-icc   perceptual-convert
//!        |        |                 |
//!        +--------+--------+--------+
//!                          |
//!          perceptual-math, perceptual-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use perceptual_color::prelude::*;
//!
//! let srgb = RgbColorSpace::create_srgb().unwrap();
//!
//! // A vivid Oklch color outside sRGB, pulled back at constant L and h
//! let wanted = GenericColor::new3(0.7, 0.35, 150.0);
//! assert!(!srgb.is_oklch_in_gamut(&wanted));
//! let fitted = srgb.reduce_oklch_chroma_to_fit_into_gamut(&wanted);
//! assert!(fitted.second < wanted.second);
//!
//! // Serialize every absolute model of the result
//! let models = all_conversions(ColorModel::OklchD65, fitted);
//! let css = CssColor::generate_css(&models, 1.0, 4);
//! assert_eq!(css.len(), 6);
//! assert!(css[0].starts_with("oklch(0.700 "));
//! ```
//!
//! # Dependencies
//!
//! - `perceptual-core` - `GenericColor`, `ColorModel`, `Rgba8` (re-exported at the root)
//! - [`perceptual-math`](math) - matrices, polar helpers, rounding
//! - [`perceptual-convert`](convert) - the conversion graph
//! - [`perceptual-icc`](icc) - lcms2 wrapper
//! - [`perceptual-engine`](engine) - `RgbColorSpace`
//! - [`perceptual-css`](css) - CSS parser and serializer

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod resolve;

pub use error::{ColorError, ColorResult};
pub use resolve::{CssResolver, create_rgb_color_space, standard_profile};

pub use perceptual_core::{ColorModel, GenericColor, Rgba8};
pub use perceptual_engine::{EngineOptions, RgbColorSpace};
pub use perceptual_icc::StandardProfile;

// Re-export sub-crates for convenience
pub use perceptual_convert as convert;
pub use perceptual_css as css;
pub use perceptual_engine as engine;
pub use perceptual_icc as icc;
pub use perceptual_math as math;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{ColorError, ColorResult, CssResolver, create_rgb_color_space, standard_profile};

    pub use perceptual_core::{ColorModel, GenericColor, Rgba8};

    pub use perceptual_convert::{all_conversions, convert};

    pub use perceptual_icc::{Intent, StandardProfile};

    pub use perceptual_engine::{EngineOptions, ProfileInfo, RgbColorSpace};

    pub use perceptual_css::{CssColor, CssColorValue, CssPredefinedRgbColorSpace};
}
