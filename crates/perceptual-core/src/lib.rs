//! # perceptual-core
//!
//! Core value types shared by every perceptual-color crate.
//!
//! - [`GenericColor`] - Four anonymous `f64` components, the value carrier
//!   between all conversions
//! - [`ColorModel`] - Tag telling how a [`GenericColor`] is to be read
//! - [`Rgba8`] - An 8-bit device pixel with alpha
//! - [`Error`] - Error type for the few fallible operations here
//!
//! ## Design
//!
//! A [`GenericColor`] carries no unit or range information. The meaning of
//! `first..fourth` comes entirely from the [`ColorModel`] it is paired with:
//!
//! ```
//! use perceptual_core::{ColorModel, GenericColor};
//!
//! // CIELab D50: L, a, b
//! let lab = GenericColor::new3(50.0, 20.0, -30.0);
//! let pair = (ColorModel::CielabD50, lab);
//! assert_eq!(pair.1.first, 50.0);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! perceptual-core (this crate)
//!    ^
//!    +-- perceptual-math (matrices, polar helpers)
//!    +-- perceptual-convert (conversion graph)
//!    +-- perceptual-engine (ICC-backed gamut engine)
//!    +-- perceptual-css (CSS Color 4 parser)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod model;
pub mod pixel;

pub use color::GenericColor;
pub use error::{Error, Result};
pub use model::ColorModel;
pub use pixel::Rgba8;

/// Prelude module for convenient imports.
///
/// ```
/// use perceptual_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::GenericColor;
    pub use crate::error::{Error, Result};
    pub use crate::model::ColorModel;
    pub use crate::pixel::Rgba8;
}
