//! Interpolation, range and rounding helpers.
//!
//! ```rust
//! use perceptual_math::{lerp, normalize_angle_360};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(normalize_angle_360(-5.0), 355.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0` and `b` when `t = 1.0`. Values of `t` outside
/// `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Returns `0.0` if `a == b`.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    (value - a) / (b - a)
}

/// Returns `true` if `low <= x <= high`. NaN is never in range.
#[inline]
pub fn is_in_range(low: f64, x: f64, high: f64) -> bool {
    low <= x && x <= high
}

/// Wraps an angle in degrees into `[0, 360)`.
///
/// ```rust
/// use perceptual_math::normalize_angle_360;
///
/// assert_eq!(normalize_angle_360(500.0), 140.0);
/// assert_eq!(normalize_angle_360(360.0), 0.0);
/// assert_eq!(normalize_angle_360(-720.0), 0.0);
/// ```
#[inline]
pub fn normalize_angle_360(angle_degree: f64) -> f64 {
    let wrapped = angle_degree.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Number of decimal places that gives `significant_figures` digits for a
/// value whose full scale is `range`.
///
/// ```rust
/// use perceptual_math::decimal_places;
///
/// assert_eq!(decimal_places(1.0, 3), 2);
/// assert_eq!(decimal_places(100.0, 3), 0);
/// assert_eq!(decimal_places(360.0, 5), 2);
/// ```
pub fn decimal_places(range: f64, significant_figures: u32) -> usize {
    if range <= 0.0 || !range.is_finite() {
        return significant_figures as usize;
    }
    let integer_digits = range.log10().floor() as i64 + 1;
    (i64::from(significant_figures) - integer_digits).max(0) as usize
}

/// Rounds to a fixed number of decimal places.
#[inline]
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(inverse_lerp(2.0, 4.0, 3.0), 0.5);
        assert_eq!(inverse_lerp(2.0, 2.0, 3.0), 0.0);
    }

    #[test]
    fn test_is_in_range() {
        assert!(is_in_range(0.0, 0.0, 1.0));
        assert!(is_in_range(0.0, 1.0, 1.0));
        assert!(!is_in_range(0.0, 1.0001, 1.0));
        assert!(!is_in_range(0.0, f64::NAN, 1.0));
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle_360(0.0), 0.0);
        assert_eq!(normalize_angle_360(359.5), 359.5);
        assert_eq!(normalize_angle_360(-5.0), 355.0);
        assert_eq!(normalize_angle_360(720.0 + 90.0), 90.0);
        assert!(normalize_angle_360(-1e-20) < 360.0);
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places(255.0, 3), 0);
        assert_eq!(decimal_places(255.0, 4), 1);
        assert_eq!(decimal_places(0.4, 3), 3);
        assert_eq!(decimal_places(0.0, 3), 3);
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(1.23456, 2), 1.23);
        assert_eq!(round_to_decimals(99.5, 0), 100.0);
    }
}
