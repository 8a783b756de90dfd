//! Double-precision color transforms between ICC profiles.

use crate::{IccError, IccResult, Intent, Profile};
use lcms2::{DisallowCache, Flags, GlobalContext, PixelFormat, Transform as LcmsTransform};

/// Channel layout of one side of a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// Device RGB, each channel nominally in `[0, 1]`.
    Rgb,
    /// CIELab with L in `[0, 100]`.
    Lab,
}

impl PixelLayout {
    fn format(self) -> PixelFormat {
        match self {
            PixelLayout::Rgb => PixelFormat::RGB_DBL,
            PixelLayout::Lab => PixelFormat::Lab_DBL,
        }
    }
}

/// A color transform between two ICC profiles on `[f64; 3]` triples.
///
/// Built with caching disabled, so a shared reference can be used from
/// several threads at once.
pub struct Transform {
    inner: LcmsTransform<[f64; 3], [f64; 3], GlobalContext, DisallowCache>,
    source: PixelLayout,
    dest: PixelLayout,
}

impl Transform {
    /// Creates a transform between two profiles.
    pub fn new(
        source: &Profile,
        source_layout: PixelLayout,
        dest: &Profile,
        dest_layout: PixelLayout,
        intent: Intent,
    ) -> IccResult<Self> {
        let inner: LcmsTransform<[f64; 3], [f64; 3], GlobalContext, DisallowCache> = LcmsTransform::new_flags_context(
            GlobalContext::new(),
            &source.inner,
            source_layout.format(),
            &dest.inner,
            dest_layout.format(),
            intent.into(),
            Flags::NO_CACHE,
        )
        .map_err(|e| IccError::TransformFailed(e.to_string()))?;

        Ok(Self {
            inner,
            source: source_layout,
            dest: dest_layout,
        })
    }

    /// Transforms a single triple.
    pub fn apply_one(&self, value: [f64; 3]) -> [f64; 3] {
        let mut out = [[0.0; 3]];
        self.inner.transform_pixels(&[value], &mut out);
        out[0]
    }

    /// Transforms a slice of triples into `dest`.
    ///
    /// Only the common prefix of both slices is processed.
    pub fn apply(&self, source: &[[f64; 3]], dest: &mut [[f64; 3]]) {
        let n = source.len().min(dest.len());
        self.inner.transform_pixels(&source[..n], &mut dest[..n]);
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("source", &self.source)
            .field("dest", &self.dest)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rgb_to_lab() -> Transform {
        Transform::new(
            &Profile::srgb(),
            PixelLayout::Rgb,
            &Profile::lab_d50().unwrap(),
            PixelLayout::Lab,
            Intent::AbsoluteColorimetric,
        )
        .unwrap()
    }

    #[test]
    fn test_white_and_black() {
        let t = rgb_to_lab();
        let white = t.apply_one([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(white[0], 100.0, epsilon = 0.1);
        assert_abs_diff_eq!(white[1], 0.0, epsilon = 0.1);
        assert_abs_diff_eq!(white[2], 0.0, epsilon = 0.1);
        let black = t.apply_one([0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(black[0], 0.0, epsilon = 0.1);
    }

    #[test]
    fn test_roundtrip() {
        let to_lab = rgb_to_lab();
        let to_rgb = Transform::new(
            &Profile::lab_d50().unwrap(),
            PixelLayout::Lab,
            &Profile::srgb(),
            PixelLayout::Rgb,
            Intent::AbsoluteColorimetric,
        )
        .unwrap();
        let rgb = [0.2, 0.5, 0.8];
        let back = to_rgb.apply_one(to_lab.apply_one(rgb));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-3);
        }
    }

    #[test]
    fn test_batch_matches_single() {
        let t = rgb_to_lab();
        let input = [[0.1, 0.2, 0.3], [0.9, 0.1, 0.4]];
        let mut out = [[0.0; 3]; 2];
        t.apply(&input, &mut out);
        assert_eq!(out[1], t.apply_one(input[1]));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transform>();
    }
}
