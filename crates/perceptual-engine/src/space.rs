//! The RGB color space engine.

use std::path::Path;
use std::sync::Arc;

use perceptual_convert::cielab::{cielab_to_xyz_d50, xyz_d50_to_cielab};
use perceptual_convert::oklab::{oklab_to_xyz_d65, xyz_d65_to_oklab};
use perceptual_convert::{adapt, cartesian_to_polar, polar_to_cartesian};
use perceptual_core::{GenericColor, Rgba8};
use perceptual_icc::{PixelLayout, Profile, StandardProfile, Transform};
use perceptual_math::{is_in_range, normalize_angle_360};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::boundary::{BoundaryEntry, BoundaryTable, hue_ring};
use crate::{EngineError, EngineOptions, EngineResult, ProfileInfo};

/// Upper bound on gray-axis nudges before giving up.
const MAX_GRAY_STEPS: usize = 100_000;

/// Slack around the unit RGB cube for lcms2 round-trip noise.
const RGB_CUBE_TOLERANCE: f64 = 1e-6;

/// Relative slack on the lightness range, for the same noise.
const LIGHTNESS_TOLERANCE: f64 = 1e-6;

fn lightness_in_range(l: f64, max: f64) -> bool {
    let slack = max * LIGHTNESS_TOLERANCE;
    is_in_range(-slack, l, max + slack)
}

/// CIELab-D50 to Oklab, through XYZ.
pub fn cielab_d50_to_oklab(lab: &GenericColor) -> GenericColor {
    let xyz_d65 = adapt::xyz_d50_to_xyz_d65(&cielab_to_xyz_d50(lab));
    xyz_d65_to_oklab(&xyz_d65)
}

/// Oklab to CIELab-D50, through XYZ.
pub fn oklab_to_cielab_d50(oklab: &GenericColor) -> GenericColor {
    let xyz_d50 = adapt::xyz_d65_to_xyz_d50(&oklab_to_xyz_d65(oklab));
    xyz_d50_to_cielab(&xyz_d50)
}

/// Which built-in profile an engine was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    BuiltinSrgb,
    Standard,
    File,
}

/// Gamut engine for one RGB display profile.
///
/// Built once, then shared through [`Arc`]. All queries take `&self`, never
/// fail, and may run concurrently.
///
/// # Example
///
/// ```rust
/// use perceptual_core::GenericColor;
/// use perceptual_engine::RgbColorSpace;
///
/// let srgb = RgbColorSpace::create_srgb().unwrap();
/// let vivid = GenericColor::new3(50.0, 120.0, 30.0);
/// assert!(!srgb.is_cielch_d50_in_gamut(&vivid));
///
/// let fitted = srgb.reduce_cielch_d50_chroma_to_fit_into_gamut(&vivid);
/// assert!(srgb.is_cielch_d50_in_gamut(&fitted));
/// assert_eq!(fitted.third, vivid.third);
/// ```
pub struct RgbColorSpace {
    to_lab: Transform,
    from_lab: Transform,
    options: EngineOptions,
    info: ProfileInfo,
    cielch_boundary: BoundaryTable,
    oklch_boundary: BoundaryTable,
}

impl RgbColorSpace {
    /// Engine for the built-in sRGB profile with default options.
    pub fn create_srgb() -> EngineResult<Arc<Self>> {
        Self::create_srgb_with(EngineOptions::default())
    }

    /// Engine for the built-in sRGB profile.
    pub fn create_srgb_with(options: EngineOptions) -> EngineResult<Arc<Self>> {
        Self::build(&Profile::srgb(), options, Origin::BuiltinSrgb, None)
    }

    /// Engine for one of the predefined RGB spaces.
    pub fn from_standard(standard: StandardProfile) -> EngineResult<Arc<Self>> {
        let profile = Profile::from_standard(standard)?;
        Self::build(&profile, EngineOptions::default(), Origin::Standard, None)
    }

    /// Engine for an ICC file, or `None` if it cannot be used.
    ///
    /// Missing paths, directories, unparsable bytes and non-RGB profiles
    /// all give `None`. Use [`create_from_file`](Self::create_from_file)
    /// to learn why.
    pub fn try_create_from_file(path: impl AsRef<Path>) -> Option<Arc<Self>> {
        let path = path.as_ref();
        match Self::create_from_file(path) {
            Ok(space) => Some(space),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "rejected ICC profile");
                None
            }
        }
    }

    /// Engine for an ICC file with default options.
    pub fn create_from_file(path: impl AsRef<Path>) -> EngineResult<Arc<Self>> {
        Self::create_from_file_with(path, EngineOptions::default())
    }

    /// Engine for an ICC file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotAFile`] if `path` is not a regular file
    /// - [`EngineError::Icc`] if the bytes are no ICC profile or a
    ///   transform cannot be built
    /// - [`EngineError::NotRgb`] / [`EngineError::UnsupportedClass`] if
    ///   the profile does not describe an RGB device
    /// - [`EngineError::NoGrayAxis`] if no gray maps into the RGB cube
    pub fn create_from_file_with(path: impl AsRef<Path>, options: EngineOptions) -> EngineResult<Arc<Self>> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(EngineError::NotAFile(path.to_path_buf()));
        }
        let profile = Profile::from_file(path)?;
        Self::build(&profile, options, Origin::File, Some(path))
    }

    fn build(profile: &Profile, options: EngineOptions, origin: Origin, path: Option<&Path>) -> EngineResult<Arc<Self>> {
        if !profile.is_rgb() {
            return Err(EngineError::NotRgb(profile.color_space().to_string()));
        }
        if !profile.is_device_class() {
            return Err(EngineError::UnsupportedClass(profile.device_class().to_string()));
        }

        let lab = Profile::lab_d50()?;
        let to_lab = Transform::new(profile, PixelLayout::Rgb, &lab, PixelLayout::Lab, options.intent)?;
        let from_lab = Transform::new(&lab, PixelLayout::Lab, profile, PixelLayout::Rgb, options.intent)?;

        let mut info = ProfileInfo::from_profile(profile, options.intent, path);
        if origin == Origin::BuiltinSrgb {
            info.manufacturer = "LittleCMS".to_string();
            info.name = "sRGB color space".to_string();
        }

        let mut space = Self {
            to_lab,
            from_lab,
            options,
            info,
            cielch_boundary: BoundaryTable::from_samples(std::iter::empty()),
            oklch_boundary: BoundaryTable::from_samples(std::iter::empty()),
        };

        let (black, white) = space.gray_axis()?;
        space.info.cielab_d50_blackpoint_l = black;
        space.info.cielab_d50_whitepoint_l = white;
        space.info.oklab_blackpoint_l = cielab_d50_to_oklab(&GenericColor::new3(black, 0.0, 0.0)).first.max(0.0);
        space.info.oklab_whitepoint_l = cielab_d50_to_oklab(&GenericColor::new3(white, 0.0, 0.0)).first.min(1.0);
        debug!(black, white, "gray axis");

        let (cielch, oklch) = space.sample_boundaries();
        space.info.max_cielch_d50_chroma = match origin {
            Origin::BuiltinSrgb => options.srgb_max_cielch_chroma,
            _ => cielch.max_chroma() * options.max_chroma_headroom + options.cielab_deviation_limit,
        };
        space.info.max_oklch_chroma = oklch.max_chroma() * options.max_chroma_headroom + options.oklab_deviation_limit;
        space.cielch_boundary = cielch;
        space.oklch_boundary = oklch;
        debug!(
            entries = space.cielch_boundary.len(),
            max_cielch = space.info.max_cielch_d50_chroma,
            max_oklch = space.info.max_oklch_chroma,
            "boundary tables built"
        );

        Ok(Arc::new(space))
    }

    // Darkest and lightest L whose gray is in gamut. The lightest stays
    // strictly below 100.
    fn gray_axis(&self) -> EngineResult<(f64, f64)> {
        let step = self.options.cielab_precision;
        let mut black = self.to_cielab_d50([0.0, 0.0, 0.0]).first.max(0.0);
        let mut white = self.to_cielab_d50([1.0, 1.0, 1.0]).first.min(100.0);
        if !black.is_finite() || !white.is_finite() {
            return Err(EngineError::NoGrayAxis);
        }
        let gray = |l: f64| GenericColor::new3(l, 0.0, 0.0);

        let mut steps = 0;
        while !self.is_lab_in_gamut_unbounded(&gray(black)) {
            black += step;
            steps += 1;
            if black > white || steps > MAX_GRAY_STEPS {
                return Err(EngineError::NoGrayAxis);
            }
        }
        steps = 0;
        while white >= 100.0 || !self.is_lab_in_gamut_unbounded(&gray(white)) {
            white -= step;
            steps += 1;
            if white < black || steps > MAX_GRAY_STEPS {
                return Err(EngineError::NoGrayAxis);
            }
        }
        Ok((black, white))
    }

    fn sample_boundaries(&self) -> (BoundaryTable, BoundaryTable) {
        let samples: Vec<(BoundaryEntry, BoundaryEntry)> = hue_ring()
            .into_par_iter()
            .map(|rgb| {
                let lab = self.to_cielab_d50(Rgba8::opaque(rgb[0], rgb[1], rgb[2]).to_rgb1());
                let lch = cartesian_to_polar(&lab);
                let oklch = cartesian_to_polar(&cielab_d50_to_oklab(&lab));
                (
                    BoundaryEntry {
                        hue: lch.third,
                        chroma: lch.second,
                        rgb,
                    },
                    BoundaryEntry {
                        hue: oklch.third,
                        chroma: oklch.second,
                        rgb,
                    },
                )
            })
            .collect();
        let (cielch, oklch): (Vec<_>, Vec<_>) = samples.into_iter().unzip();
        (BoundaryTable::from_samples(cielch), BoundaryTable::from_samples(oklch))
    }

    /// Metadata of the underlying profile.
    pub fn info(&self) -> &ProfileInfo {
        &self.info
    }

    /// Options the engine was built with.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Maximum CIELCh-D50 chroma of this gamut.
    pub fn max_cielch_d50_chroma(&self) -> f64 {
        self.info.max_cielch_d50_chroma
    }

    /// Maximum Oklch chroma of this gamut.
    pub fn max_oklch_chroma(&self) -> f64 {
        self.info.max_oklch_chroma
    }

    /// CIELCh-D50 boundary table.
    pub fn boundary_cielch_d50(&self) -> &BoundaryTable {
        &self.cielch_boundary
    }

    /// Oklch boundary table.
    pub fn boundary_oklch(&self) -> &BoundaryTable {
        &self.oklch_boundary
    }

    // ========================================================================
    // Device to absolute
    // ========================================================================

    /// Device RGB (`[0, 1]`) to CIELab-D50.
    pub fn to_cielab_d50(&self, rgb1: [f64; 3]) -> GenericColor {
        GenericColor::from(self.to_lab.apply_one(rgb1))
    }

    /// Device RGB (`[0, 1]`) to CIELCh-D50.
    pub fn to_cielch_d50(&self, rgb1: [f64; 3]) -> GenericColor {
        cartesian_to_polar(&self.to_cielab_d50(rgb1))
    }

    /// Device RGB (`[0, 1]`) to Oklab.
    pub fn to_oklab(&self, rgb1: [f64; 3]) -> GenericColor {
        cielab_d50_to_oklab(&self.to_cielab_d50(rgb1))
    }

    /// Device RGB (`[0, 1]`) to Oklch.
    pub fn to_oklch(&self, rgb1: [f64; 3]) -> GenericColor {
        cartesian_to_polar(&self.to_oklab(rgb1))
    }

    // ========================================================================
    // Absolute to device
    // ========================================================================

    /// CIELab-D50 to device RGB, unclamped.
    pub fn from_cielab_d50_to_rgb1(&self, lab: &GenericColor) -> [f64; 3] {
        self.from_lab.apply_one(lab.to_array3())
    }

    /// CIELCh-D50 to device RGB, unclamped.
    pub fn from_cielch_d50_to_rgb1(&self, lch: &GenericColor) -> [f64; 3] {
        self.from_cielab_d50_to_rgb1(&polar_to_cartesian(lch))
    }

    /// CIELCh-D50 to an opaque pixel, clamping out-of-gamut channels.
    pub fn from_cielch_d50_to_rgba_bound(&self, lch: &GenericColor) -> Rgba8 {
        Rgba8::from_rgb1(self.from_cielch_d50_to_rgb1(lch))
    }

    /// Oklch to an opaque pixel, clamping out-of-gamut channels.
    pub fn from_oklch_to_rgba_bound(&self, oklch: &GenericColor) -> Rgba8 {
        let lab = oklab_to_cielab_d50(&polar_to_cartesian(oklch));
        Rgba8::from_rgb1(self.from_cielab_d50_to_rgb1(&lab))
    }

    /// CIELab-D50 to a pixel, or [`Rgba8::TRANSPARENT`] when out of gamut.
    pub fn from_cielab_d50_to_rgba_or_transparent(&self, lab: &GenericColor) -> Rgba8 {
        if !self.is_lab_in_gamut_unbounded(lab) {
            return Rgba8::TRANSPARENT;
        }
        Rgba8::from_rgb1(self.from_cielab_d50_to_rgb1(lab))
    }

    /// Oklch to a pixel, or [`Rgba8::TRANSPARENT`] when out of gamut.
    pub fn from_oklch_to_rgba_or_transparent(&self, oklch: &GenericColor) -> Rgba8 {
        let lab = oklab_to_cielab_d50(&polar_to_cartesian(oklch));
        self.from_cielab_d50_to_rgba_or_transparent(&lab)
    }

    // ========================================================================
    // Gamut checks
    // ========================================================================

    // Maps into the unit cube and survives the round trip back to Lab.
    fn is_lab_in_gamut_unbounded(&self, lab: &GenericColor) -> bool {
        if !lab.is_finite() {
            return false;
        }
        let rgb = self.from_cielab_d50_to_rgb1(lab);
        if !rgb
            .iter()
            .all(|&c| is_in_range(-RGB_CUBE_TOLERANCE, c, 1.0 + RGB_CUBE_TOLERANCE))
        {
            return false;
        }
        let back = self.to_cielab_d50(rgb);
        let limit = self.options.cielab_deviation_limit;
        back.distance_squared3(lab) <= limit * limit
    }

    /// Returns `true` if a CIELab-D50 color is displayable.
    pub fn is_cielab_d50_in_gamut(&self, lab: &GenericColor) -> bool {
        if !lightness_in_range(lab.first, 100.0) {
            return false;
        }
        if lab.second.hypot(lab.third) > self.info.max_cielch_d50_chroma {
            return false;
        }
        self.is_lab_in_gamut_unbounded(lab)
    }

    /// Returns `true` if a CIELCh-D50 color is displayable.
    ///
    /// Lightness outside `[0, 100]`, hue outside `[0, 360)` and
    /// non-finite values give `false`.
    pub fn is_cielch_d50_in_gamut(&self, lch: &GenericColor) -> bool {
        if !lightness_in_range(lch.first, 100.0)
            || lch.second.abs() > self.info.max_cielch_d50_chroma
            || !(0.0..360.0).contains(&lch.third)
        {
            return false;
        }
        self.is_lab_in_gamut_unbounded(&polar_to_cartesian(lch))
    }

    /// Returns `true` if an Oklch color is displayable.
    ///
    /// Lightness outside `[0, 1]`, hue outside `[0, 360)` and non-finite
    /// values give `false`.
    pub fn is_oklch_in_gamut(&self, oklch: &GenericColor) -> bool {
        if !lightness_in_range(oklch.first, 1.0)
            || oklch.second.abs() > self.info.max_oklch_chroma
            || !(0.0..360.0).contains(&oklch.third)
        {
            return false;
        }
        let lab = oklab_to_cielab_d50(&polar_to_cartesian(oklch));
        self.is_lab_in_gamut_unbounded(&lab)
    }

    // ========================================================================
    // Chroma reduction
    // ========================================================================

    /// Lowers CIELCh-D50 chroma until the color is displayable.
    ///
    /// Lightness is clamped to the displayable gray axis; hue and the
    /// fourth component come back unchanged.
    pub fn reduce_cielch_d50_chroma_to_fit_into_gamut(&self, lch: &GenericColor) -> GenericColor {
        let fits = |l: f64, c: f64, h: f64| self.is_lab_in_gamut_unbounded(&polar_to_cartesian(&GenericColor::new3(l, c, h)));
        let bounds = (self.info.cielab_d50_blackpoint_l, self.info.cielab_d50_whitepoint_l);
        let (l, c) = reduce_chroma(
            lch,
            bounds,
            self.info.max_cielch_d50_chroma,
            self.options.cielab_precision,
            fits,
        );
        trace!(l, c, hue = lch.third, "reduced CIELCh chroma");
        GenericColor::new(l, c, lch.third, lch.fourth)
    }

    /// Lowers Oklch chroma until the color is displayable.
    ///
    /// Lightness is clamped to the displayable gray axis; hue and the
    /// fourth component come back unchanged.
    pub fn reduce_oklch_chroma_to_fit_into_gamut(&self, oklch: &GenericColor) -> GenericColor {
        let fits = |l: f64, c: f64, h: f64| {
            let lab = oklab_to_cielab_d50(&polar_to_cartesian(&GenericColor::new3(l, c, h)));
            self.is_lab_in_gamut_unbounded(&lab)
        };
        let bounds = (self.info.oklab_blackpoint_l, self.info.oklab_whitepoint_l);
        let (l, c) = reduce_chroma(oklch, bounds, self.info.max_oklch_chroma, self.options.oklab_precision, fits);
        trace!(l, c, hue = oklch.third, "reduced Oklch chroma");
        GenericColor::new(l, c, oklch.third, oklch.fourth)
    }

    // ========================================================================
    // Boundary lookups
    // ========================================================================

    /// The most chromatic displayable color of a CIELCh-D50 hue.
    pub fn max_chroma_color_by_cielch_d50_hue_360(&self, hue_degree: f64) -> Rgba8 {
        self.cielch_boundary.max_chroma_color(hue_degree)
    }

    /// The most chromatic displayable color of an Oklch hue.
    pub fn max_chroma_color_by_oklch_hue_360(&self, hue_degree: f64) -> Rgba8 {
        self.oklch_boundary.max_chroma_color(hue_degree)
    }
}

/// Binary search on the chroma axis at fixed lightness and hue.
///
/// Returns the lightness and chroma to use. `fits` decides gamut
/// membership for `(lightness, chroma, normalized hue)`.
fn reduce_chroma(
    color: &GenericColor,
    (black, white): (f64, f64),
    max_chroma: f64,
    precision: f64,
    fits: impl Fn(f64, f64, f64) -> bool,
) -> (f64, f64) {
    let hue = if color.third.is_finite() { normalize_angle_360(color.third) } else { 0.0 };
    let mut l = if color.first.is_nan() { black } else { color.first.clamp(black, white) };
    let chroma = if color.second.is_nan() { 0.0 } else { color.second };
    let sign = if chroma < 0.0 { -1.0 } else { 1.0 };
    let magnitude = chroma.abs().min(max_chroma);

    if fits(l, sign * magnitude, hue) {
        return (l, sign * magnitude);
    }

    // Move lightness toward mid-gray until the gray itself fits.
    let mid = (black + white) / 2.0;
    let mut steps = 0;
    while !fits(l, 0.0, hue) && steps < MAX_GRAY_STEPS {
        l += if l < mid { precision } else { -precision };
        steps += 1;
    }

    let mut low = 0.0;
    let mut high = magnitude;
    while high - low > precision {
        let candidate = (low + high) / 2.0;
        if fits(l, sign * candidate, hue) {
            low = candidate;
        } else {
            high = candidate;
        }
    }
    (l, sign * low)
}

impl std::fmt::Debug for RgbColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbColorSpace")
            .field("name", &self.info.name)
            .field("max_cielch_d50_chroma", &self.info.max_cielch_d50_chroma)
            .field("max_oklch_chroma", &self.info.max_oklch_chroma)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn srgb() -> Arc<RgbColorSpace> {
        RgbColorSpace::create_srgb().unwrap()
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RgbColorSpace>();
        assert_send_sync::<Arc<RgbColorSpace>>();
    }

    #[test]
    fn test_reduce_chroma_linear_gamut() {
        // Gamut is the disc c <= 10 for every lightness.
        let fits = |_l: f64, c: f64, _h: f64| c.abs() <= 10.0;
        let color = GenericColor::new3(50.0, 25.0, 400.0);
        let (l, c) = reduce_chroma(&color, (0.0, 100.0), 132.0, 0.001, fits);
        assert_eq!(l, 50.0);
        assert!(c <= 10.0 && c > 9.99, "{c}");
    }

    #[test]
    fn test_reduce_chroma_clamps_lightness() {
        let fits = |_l: f64, c: f64, _h: f64| c <= 1.0;
        let (l, c) = reduce_chroma(&GenericColor::new3(120.0, 0.5, 0.0), (2.0, 98.0), 132.0, 0.001, fits);
        assert_eq!(l, 98.0);
        assert_eq!(c, 0.5);
        let (l, _) = reduce_chroma(&GenericColor::new3(f64::NAN, 0.5, 0.0), (2.0, 98.0), 132.0, 0.001, fits);
        assert_eq!(l, 2.0);
    }

    #[test]
    fn test_reduce_chroma_caps_at_max() {
        let fits = |_l: f64, _c: f64, _h: f64| true;
        let (_, c) = reduce_chroma(&GenericColor::new3(50.0, 500.0, 0.0), (0.0, 100.0), 132.0, 0.001, fits);
        assert_eq!(c, 132.0);
    }

    #[test]
    fn test_srgb_gray_axis() {
        let space = srgb();
        let info = space.info();
        assert!(info.cielab_d50_blackpoint_l < 1.0);
        assert!(info.cielab_d50_whitepoint_l > 99.0 && info.cielab_d50_whitepoint_l < 100.0);
        assert!(info.oklab_whitepoint_l > 0.99 && info.oklab_whitepoint_l <= 1.0);
        assert!(info.oklab_blackpoint_l < 0.05);
    }

    #[test]
    fn test_srgb_builtin_names() {
        let space = srgb();
        assert_eq!(space.info().manufacturer, "LittleCMS");
        assert_eq!(space.info().name, "sRGB color space");
        assert_eq!(space.max_cielch_d50_chroma(), 132.0);
    }

    #[test]
    fn test_lab_oklab_helpers_invert() {
        let lab = GenericColor::new3(60.0, 20.0, -30.0);
        let back = oklab_to_cielab_d50(&cielab_d50_to_oklab(&lab));
        assert_abs_diff_eq!(back.first, lab.first, epsilon = 1e-6);
        assert_abs_diff_eq!(back.second, lab.second, epsilon = 1e-6);
        assert_abs_diff_eq!(back.third, lab.third, epsilon = 1e-6);
    }

    #[test]
    fn test_cube_corners_are_in_gamut() {
        let space = srgb();
        for rgb in [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 1.0, 0.0]] {
            let lch = space.to_cielch_d50(rgb);
            assert!(space.is_cielch_d50_in_gamut(&lch), "{rgb:?}: {lch:?}");
        }
    }

    #[test]
    fn test_out_of_range_is_not_in_gamut() {
        let space = srgb();
        assert!(!space.is_cielch_d50_in_gamut(&GenericColor::new3(200.0, 0.0, 0.0)));
        assert!(!space.is_cielch_d50_in_gamut(&GenericColor::new3(50.0, 0.0, -10.0)));
        assert!(!space.is_cielch_d50_in_gamut(&GenericColor::new3(50.0, 0.0, 360.0)));
        assert!(!space.is_cielch_d50_in_gamut(&GenericColor::new3(f64::NAN, 0.0, 0.0)));
        assert!(!space.is_oklch_in_gamut(&GenericColor::new3(1.5, 0.0, 0.0)));
        assert!(!space.is_oklch_in_gamut(&GenericColor::new3(0.5, 0.0, f64::INFINITY)));
        assert!(!space.is_cielab_d50_in_gamut(&GenericColor::new3(-1.0, 0.0, 0.0)));
    }
}
