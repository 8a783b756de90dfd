//! # perceptual-engine
//!
//! Gamut engine for RGB display profiles.
//!
//! An [`RgbColorSpace`] wraps one ICC profile and answers the questions a
//! color picker asks: is this CIELCh or Oklch color displayable, what is
//! the most chromatic displayable color at this hue, and what is the
//! closest displayable color at the same lightness and hue.
//!
//! # Features
//!
//! - Built-in sRGB, the CSS predefined RGB spaces, or any RGB ICC file
//! - Transform-based gamut checks with a round-trip deviation bound
//! - Chroma reduction that never changes hue and never jumps lightness
//! - Hue boundary tables sampled from the saturated edges of the RGB cube
//! - Profile metadata: text tags, header fields, XYZ tags
//!
//! # Example
//!
//! ```rust
//! use perceptual_core::GenericColor;
//! use perceptual_engine::RgbColorSpace;
//!
//! let srgb = RgbColorSpace::create_srgb().unwrap();
//!
//! // Pure red sits on the boundary
//! let red = srgb.max_chroma_color_by_cielch_d50_hue_360(40.0);
//! assert!(red.r == 255 || red.g == 0 || red.b == 0);
//!
//! // Files that are not RGB profiles give None
//! assert!(RgbColorSpace::try_create_from_file("/no/such/profile.icc").is_none());
//! ```
//!
//! # Construction Cost
//!
//! Building an engine loads the profile, creates two transforms, and
//! samples 1530 colors into each boundary table (in parallel with rayon).
//! Build once and share the returned [`Arc`](std::sync::Arc).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod boundary;
mod error;
mod info;
mod options;
mod space;

pub use boundary::{BOUNDARY_TABLE_LEN, BoundaryEntry, BoundaryTable};
pub use error::{EngineError, EngineResult};
pub use info::ProfileInfo;
pub use options::EngineOptions;
pub use space::{RgbColorSpace, cielab_d50_to_oklab, oklab_to_cielab_d50};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{EngineError, EngineOptions, EngineResult, ProfileInfo, RgbColorSpace};
}
