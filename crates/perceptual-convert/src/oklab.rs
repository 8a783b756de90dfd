//! Oklab ⇄ XYZ D65.
//!
//! Forward: `lms = M1 · xyz`, `lms' = cbrt(lms)`, `lab = M2 · lms'`.
//! Inverse: `lms' = M2⁻¹ · lab`, `lms = lms'³`, `xyz = M1⁻¹ · lms`.
//!
//! The cube root is the real cube root ([`f64::cbrt`]) so negative LMS
//! values from imaginary colors stay invertible instead of turning into NaN.

use std::sync::OnceLock;

use perceptual_core::GenericColor;
use perceptual_math::{Mat3, Vec3};

use crate::constant_inverse;

/// XYZ D65 → LMS.
pub const M1: Mat3 = Mat3::from_rows([
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
]);

/// Nonlinear LMS → Oklab.
pub const M2: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

static M1_INVERSE: OnceLock<Mat3> = OnceLock::new();
static M2_INVERSE: OnceLock<Mat3> = OnceLock::new();

/// Inverse of [`M1`], computed once.
pub fn m1_inverse() -> &'static Mat3 {
    M1_INVERSE.get_or_init(|| constant_inverse(&M1))
}

/// Inverse of [`M2`], computed once.
pub fn m2_inverse() -> &'static Mat3 {
    M2_INVERSE.get_or_init(|| constant_inverse(&M2))
}

/// XYZ D65 → Oklab. `fourth` passes through.
pub fn xyz_d65_to_oklab(value: &GenericColor) -> GenericColor {
    let lms = M1 * Vec3::from_array(value.to_array3());
    let lms = Vec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
    let lab = M2 * lms;
    GenericColor::new(lab.x, lab.y, lab.z, value.fourth)
}

/// Oklab → XYZ D65. `fourth` passes through.
pub fn oklab_to_xyz_d65(value: &GenericColor) -> GenericColor {
    let lms = *m2_inverse() * Vec3::from_array(value.to_array3());
    let lms = lms * lms * lms;
    let xyz = *m1_inverse() * lms;
    GenericColor::new(xyz.x, xyz.y, xyz.z, value.fourth)
}
