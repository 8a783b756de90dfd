//! # perceptual-icc
//!
//! ICC profile access for the perceptual color engine, built on Little CMS 2.
//!
//! # Features
//!
//! - Load RGB profiles from files or raw bytes, or use the built-in sRGB
//! - Build the CSS Color 4 predefined RGB spaces from primaries and curves
//! - Double-precision RGB ⇄ Lab transforms that can be shared across threads
//! - Header metadata through lcms2: version, device class, creation date, tags
//! - Text tags decoded from wide characters without assuming UTF-16 or UTF-32
//!
//! # Example
//!
//! ```rust
//! use perceptual_icc::{Intent, PixelLayout, Profile, Transform};
//!
//! let srgb = Profile::srgb();
//! let lab = Profile::lab_d50().unwrap();
//! let to_lab = Transform::new(
//!     &srgb,
//!     PixelLayout::Rgb,
//!     &lab,
//!     PixelLayout::Lab,
//!     Intent::AbsoluteColorimetric,
//! )
//! .unwrap();
//!
//! let white = to_lab.apply_one([1.0, 1.0, 1.0]);
//! assert!((white[0] - 100.0).abs() < 0.1);
//! ```
//!
//! # Thread Safety
//!
//! [`Transform`] is created with the lcms2 cache disabled, so one instance
//! can be used from many threads at once.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod fields;
mod profile;
mod standard;
mod text;
mod transform;

pub use error::{IccError, IccResult};
pub use fields::{IccDateTime, Signature};
pub use profile::{Profile, TextTag, XyzTag};
pub use standard::StandardProfile;
pub use text::decode_wide_text;
pub use transform::{PixelLayout, Transform};

/// Rendering intent for color transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    /// Compresses the source gamut to fit the destination.
    Perceptual,

    /// Maps media white to media white, clips everything else.
    RelativeColorimetric,

    /// Keeps saturation at the expense of accuracy.
    Saturation,

    /// Keeps measured colorimetry without white point adaptation.
    ///
    /// Gamut questions need exact colorimetry, so this is the default.
    #[default]
    AbsoluteColorimetric,
}

impl Intent {
    /// All four intents.
    pub const ALL: [Intent; 4] = [
        Intent::Perceptual,
        Intent::RelativeColorimetric,
        Intent::Saturation,
        Intent::AbsoluteColorimetric,
    ];
}

/// The directions in which a profile supports one rendering intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntentDirections {
    /// Usable as transform input.
    pub input: bool,
    /// Usable as transform output.
    pub output: bool,
    /// Usable for proofing.
    pub proof: bool,
}

impl IntentDirections {
    /// Returns `true` if at least one direction is supported.
    pub fn any(self) -> bool {
        self.input || self.output || self.proof
    }
}

impl From<Intent> for lcms2::Intent {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Perceptual => lcms2::Intent::Perceptual,
            Intent::RelativeColorimetric => lcms2::Intent::RelativeColorimetric,
            Intent::Saturation => lcms2::Intent::Saturation,
            Intent::AbsoluteColorimetric => lcms2::Intent::AbsoluteColorimetric,
        }
    }
}
