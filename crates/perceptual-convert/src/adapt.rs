//! XYZ chromatic adaptation between the D65 and D50 white points.
//!
//! The forward matrix is a fixed Bradford-style adaptation. Its inverse is
//! computed once on first use and cached for the process lifetime.

use std::sync::OnceLock;

use perceptual_core::GenericColor;
use perceptual_math::Mat3;

use crate::constant_inverse;

/// XYZ D65 → XYZ D50 adaptation matrix.
pub const XYZ_D65_TO_D50: Mat3 = Mat3::from_rows([
    [1.047886, 0.022919, -0.050216],
    [0.029582, 0.990484, -0.017079],
    [-0.009252, 0.015073, 0.751678],
]);

static XYZ_D50_TO_D65: OnceLock<Mat3> = OnceLock::new();

/// XYZ D50 → XYZ D65, the inverse of [`XYZ_D65_TO_D50`].
pub fn xyz_d50_to_d65_matrix() -> &'static Mat3 {
    XYZ_D50_TO_D65.get_or_init(|| constant_inverse(&XYZ_D65_TO_D50))
}

/// Adapts XYZ from D65 to D50. `fourth` passes through.
pub fn xyz_d65_to_xyz_d50(value: &GenericColor) -> GenericColor {
    let [x, y, z] = XYZ_D65_TO_D50.transform_array(value.to_array3());
    GenericColor::new(x, y, z, value.fourth)
}

/// Adapts XYZ from D50 to D65. `fourth` passes through.
pub fn xyz_d50_to_xyz_d65(value: &GenericColor) -> GenericColor {
    let [x, y, z] = xyz_d50_to_d65_matrix().transform_array(value.to_array3());
    GenericColor::new(x, y, z, value.fourth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_d65_white_maps_near_d50_white() {
        let d65 = GenericColor::new3(0.95047, 1.0, 1.08883);
        let d50 = xyz_d65_to_xyz_d50(&d65);
        assert_abs_diff_eq!(d50.first, 0.9642, epsilon = 1e-3);
        assert_abs_diff_eq!(d50.second, 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(d50.third, 0.8249, epsilon = 1e-3);
    }

    #[test]
    fn test_roundtrip() {
        let xyz = GenericColor::new3(0.3, 0.4, 0.5);
        let back = xyz_d50_to_xyz_d65(&xyz_d65_to_xyz_d50(&xyz));
        assert_abs_diff_eq!(back.first, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(back.second, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(back.third, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_fourth_passes_through() {
        let xyz = GenericColor::new(0.3, 0.4, 0.5, 0.75);
        assert_eq!(xyz_d65_to_xyz_d50(&xyz).fourth, 0.75);
        assert_eq!(xyz_d50_to_xyz_d65(&xyz).fourth, 0.75);
    }
}
