//! # perceptual-convert
//!
//! Conversions between absolute (device independent) color models.
//!
//! # Graph
//!
//! The absolute models form a small fixed graph of ten directed edges,
//! each one a pure function on [`GenericColor`]:
//!
//! ```text
//!  CielchD50 <-> CielabD50 <-> XyzD50 <-> XyzD65 <-> OklabD65 <-> OklchD65
//! ```
//!
//! [`all_conversions`] walks the graph from a seed and returns every model
//! it reaches. [`convert`] answers a single point-to-point query and
//! returns `None` when there is no path.
//!
//! ```rust
//! use perceptual_convert::{all_conversions, convert};
//! use perceptual_core::{ColorModel, GenericColor};
//!
//! let white = GenericColor::new3(100.0, 0.0, 0.0);
//! let all = all_conversions(ColorModel::CielabD50, white);
//! assert_eq!(all.len(), 6);
//!
//! let oklch = convert(ColorModel::CielabD50, white, ColorModel::OklchD65).unwrap();
//! assert!((oklch.first - 1.0).abs() < 1e-3);
//! assert!(convert(ColorModel::CielabD50, white, ColorModel::Rgb1).is_none());
//! ```
//!
//! RGB and the HSL/HSV/HWB models are not part of the graph; they need a
//! device profile. The profile-free helpers for them live in [`rgb`].
//!
//! # Dependencies
//!
//! - `perceptual-core` - [`GenericColor`], [`ColorModel`](perceptual_core::ColorModel)
//! - `perceptual-math` - Matrices and polar coordinates
//!
//! # Used By
//!
//! - `perceptual-engine` - Oklch gamut queries go through XYZ and CIELab
//! - `perceptual-css` - Serialization of every absolute model

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapt;
pub mod cielab;
pub mod graph;
pub mod oklab;
pub mod rgb;

pub use graph::{Conversion, all_conversions, convert, conversions};

use perceptual_core::GenericColor;
use perceptual_math::{Mat3, PolarPoint};

/// Inverse of one of the fixed conversion matrices. All of them are
/// non-singular; a singular input yields the zero matrix.
pub(crate) fn constant_inverse(m: &Mat3) -> Mat3 {
    m.inverse().unwrap_or(Mat3::ZERO)
}

/// Cartesian `(first, second, third)` to polar `(first, radius, angle)`.
///
/// `first` and `fourth` pass through unchanged. Shared by the
/// Lab → LCh and Oklab → Oklch edges.
pub fn cartesian_to_polar(value: &GenericColor) -> GenericColor {
    let polar = PolarPoint::from_cartesian(value.second, value.third);
    GenericColor::new(value.first, polar.radius, polar.angle_degree, value.fourth)
}

/// Polar `(first, radius, angle)` to Cartesian `(first, x, y)`.
pub fn polar_to_cartesian(value: &GenericColor) -> GenericColor {
    let (x, y) = PolarPoint::new(value.second, value.third).to_cartesian();
    GenericColor::new(value.first, x, y, value.fourth)
}
