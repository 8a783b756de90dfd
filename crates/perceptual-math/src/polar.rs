//! Polar ⇄ Cartesian conversion for LCh-style color models.
//!
//! Both CIELCh ⇄ CIELab and Oklch ⇄ Oklab use the same rule: the chroma is
//! the radius, the hue is the angle in degrees. A radius of exactly zero
//! gets the canonical angle 0°.

use crate::normalize_angle_360;

/// A point in polar coordinates with the angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarPoint {
    /// Distance from the origin. May be negative if built by hand.
    pub radius: f64,
    /// Angle in degrees.
    pub angle_degree: f64,
}

impl PolarPoint {
    /// Creates a polar point.
    #[inline]
    pub const fn new(radius: f64, angle_degree: f64) -> Self {
        Self {
            radius,
            angle_degree,
        }
    }

    /// Converts Cartesian `(x, y)` to polar.
    ///
    /// The angle is in `[0, 360)` for finite input:
    ///
    /// ```rust
    /// use perceptual_math::PolarPoint;
    ///
    /// let p = PolarPoint::from_cartesian(0.0, -2.0);
    /// assert_eq!(p.radius, 2.0);
    /// assert_eq!(p.angle_degree, 270.0);
    /// assert_eq!(PolarPoint::from_cartesian(0.0, 0.0).angle_degree, 0.0);
    /// ```
    ///
    /// A tiny negative `y` whose angle rounds to 360° gives 0°.
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        let radius = x.hypot(y);
        if radius == 0.0 {
            return Self::new(0.0, 0.0);
        }
        // Rounding can push |x / radius| a hair past 1.
        let cos = (x / radius).clamp(-1.0, 1.0);
        let angle = cos.acos().to_degrees();
        if y >= 0.0 {
            Self::new(radius, angle)
        } else {
            Self::new(radius, normalize_angle_360(360.0 - angle))
        }
    }

    /// Converts to Cartesian `(x, y)`.
    #[inline]
    pub fn to_cartesian(&self) -> (f64, f64) {
        let (sin, cos) = self.angle_degree.to_radians().sin_cos();
        (self.radius * cos, self.radius * sin)
    }
}
