//! The pure CIELab formulas agree with Little CMS.

use approx::assert_abs_diff_eq;
use lcms2_sys::{CIELab, CIEXYZ, cmsLab2XYZ, cmsXYZ2Lab};
use perceptual_convert::cielab::{cielab_to_xyz_d50, xyz_d50_to_cielab};
use perceptual_core::GenericColor;

const SAMPLES: [[f64; 3]; 6] = [
    [0.9642, 1.0, 0.8249],
    [0.4360, 0.2225, 0.0139],
    [0.1431, 0.0606, 0.7141],
    [0.0010, 0.0008, 0.0005],
    [0.2000, 0.3000, 0.1000],
    [0.0, 0.0, 0.0],
];

#[test]
fn xyz_to_lab_matches_lcms() {
    for [x, y, z] in SAMPLES {
        let xyz = CIEXYZ { X: x, Y: y, Z: z };
        let mut lab = CIELab { L: 0.0, a: 0.0, b: 0.0 };
        // A null white point selects D50.
        unsafe { cmsXYZ2Lab(std::ptr::null(), &mut lab, &xyz) };

        let ours = xyz_d50_to_cielab(&GenericColor::new3(x, y, z));
        assert_abs_diff_eq!(ours.first, lab.L, epsilon = 1e-6);
        assert_abs_diff_eq!(ours.second, lab.a, epsilon = 1e-6);
        assert_abs_diff_eq!(ours.third, lab.b, epsilon = 1e-6);
    }
}

#[test]
fn lab_to_xyz_matches_lcms() {
    for [l, a, b] in [[50.0, 20.0, -30.0], [5.0, 1.0, 1.0], [95.0, -10.0, 40.0], [0.0, 0.0, 0.0]] {
        let lab = CIELab { L: l, a, b };
        let mut xyz = CIEXYZ { X: 0.0, Y: 0.0, Z: 0.0 };
        unsafe { cmsLab2XYZ(std::ptr::null(), &mut xyz, &lab) };

        let ours = cielab_to_xyz_d50(&GenericColor::new3(l, a, b));
        assert_abs_diff_eq!(ours.first, xyz.X, epsilon = 1e-9);
        assert_abs_diff_eq!(ours.second, xyz.Y, epsilon = 1e-9);
        assert_abs_diff_eq!(ours.third, xyz.Z, epsilon = 1e-9);
    }
}
