//! # perceptual-math
//!
//! Numeric primitives for the perceptual color crates.
//!
//! - [`Mat3`] - Row-major 3x3 `f64` matrix for the fixed linear steps of the
//!   conversion graph (Oklab, chromatic adaptation)
//! - [`Vec3`] - `f64` triple, an alias of [`glam::DVec3`]
//! - [`PolarPoint`] - Polar/Cartesian conversion used by LCh-style models
//! - Interpolation and range helpers ([`lerp`], [`is_in_range`],
//!   [`normalize_angle_360`], [`decimal_places`])
//!
//! # Design
//!
//! Everything is double precision. Matrices are **row-major** and multiply
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! ```rust
//! use perceptual_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 3.0, 0.0],
//!     [0.0, 0.0, 4.0],
//! ]);
//! assert_eq!(m * Vec3::ONE, Vec3::new(2.0, 3.0, 4.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `DVec3`/`DMat3` storage and arithmetic
//!
//! # Used By
//!
//! - `perceptual-convert` - Oklab and adaptation matrices, polar edges
//! - `perceptual-engine` - Gamut bounds and hue interpolation
//! - `perceptual-css` - Angle normalization and rounding

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod polar;

pub use interp::*;
pub use mat3::*;
pub use polar::*;

/// Double-precision 3-vector.
pub type Vec3 = glam::DVec3;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
