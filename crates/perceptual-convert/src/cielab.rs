//! CIELab ⇄ XYZ, both relative to the D50 white point.
//!
//! These are the CIE 1976 formulas in the form LittleCMS uses for its
//! `cmsXYZ2Lab`/`cmsLab2XYZ`, with the same D50 white and the same
//! `(24/116)³` threshold, so results agree with the color-management library
//! to rounding error.

use perceptual_core::GenericColor;

/// D50 reference white in XYZ, as used by LittleCMS.
pub const D50_WHITE: [f64; 3] = [0.9642, 1.0, 0.8249];

const THRESHOLD: f64 = 24.0 / 116.0;

fn f(t: f64) -> f64 {
    if t <= THRESHOLD * THRESHOLD * THRESHOLD {
        (841.0 / 108.0) * t + 16.0 / 116.0
    } else {
        t.cbrt()
    }
}

fn f_inverse(t: f64) -> f64 {
    if t <= THRESHOLD {
        (108.0 / 841.0) * (t - 16.0 / 116.0)
    } else {
        t * t * t
    }
}

/// XYZ D50 → CIELab D50. `fourth` passes through.
pub fn xyz_d50_to_cielab(value: &GenericColor) -> GenericColor {
    let fx = f(value.first / D50_WHITE[0]);
    let fy = f(value.second / D50_WHITE[1]);
    let fz = f(value.third / D50_WHITE[2]);
    GenericColor::new(
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
        value.fourth,
    )
}

/// CIELab D50 → XYZ D50. `fourth` passes through.
pub fn cielab_to_xyz_d50(value: &GenericColor) -> GenericColor {
    let fy = (value.first + 16.0) / 116.0;
    let fx = fy + 0.002 * value.second;
    let fz = fy - 0.005 * value.third;
    GenericColor::new(
        f_inverse(fx) * D50_WHITE[0],
        f_inverse(fy) * D50_WHITE[1],
        f_inverse(fz) * D50_WHITE[2],
        value.fourth,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white_and_black() {
        let white = xyz_d50_to_cielab(&GenericColor::from(D50_WHITE));
        assert_abs_diff_eq!(white.first, 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(white.second, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(white.third, 0.0, epsilon = 1e-12);

        let black = xyz_d50_to_cielab(&GenericColor::ZERO);
        assert_abs_diff_eq!(black.first, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mid_gray() {
        // Y = 0.18 is L* ≈ 49.5
        let lab = xyz_d50_to_cielab(&GenericColor::new3(0.9642 * 0.18, 0.18, 0.8249 * 0.18));
        assert_abs_diff_eq!(lab.first, 49.496, epsilon = 1e-3);
    }

    #[test]
    fn test_roundtrip_across_threshold() {
        for lab in [[50.0, 20.0, -30.0], [2.0, 1.0, -1.0], [95.0, -80.0, 90.0], [0.5, 0.0, 0.0]] {
            let back = xyz_d50_to_cielab(&cielab_to_xyz_d50(&GenericColor::from(lab)));
            assert_abs_diff_eq!(back.first, lab[0], epsilon = 1e-9);
            assert_abs_diff_eq!(back.second, lab[1], epsilon = 1e-9);
            assert_abs_diff_eq!(back.third, lab[2], epsilon = 1e-9);
        }
    }
}
