//! The four-component color value carrier.
//!
//! [`GenericColor`] holds four ordered `f64` values named `first` through
//! `fourth`. Which physical quantity each slot stands for is decided by the
//! [`ColorModel`](crate::ColorModel) the value travels with:
//!
//! | Model | first | second | third | fourth |
//! |-------|-------|--------|-------|--------|
//! | `Rgb1` | R `[0,1]` | G `[0,1]` | B `[0,1]` | unused |
//! | `XyzD50`, `XyzD65` | X | Y | Z | unused |
//! | `CielabD50` | L `[0,100]` | a | b | unused |
//! | `CielchD50` | L `[0,100]` | C | h `[0,360)` | unused |
//! | `OklabD65` | L `[0,1]` | a | b | unused |
//! | `OklchD65` | L `[0,1]` | C | h `[0,360)` | unused |
//! | `Hsl360_1_1` | H `[0,360)` | S `[0,1]` | L `[0,1]` | unused |
//! | `Hsv360_1_1` | H `[0,360)` | S `[0,1]` | V `[0,1]` | unused |
//! | `Hwb360_1_1` | H `[0,360)` | W `[0,1]` | B `[0,1]` | unused |
//!
//! No range is enforced. Equality is exact `f64` equality on all four slots.

/// Four ordered double-precision components with no fixed meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenericColor {
    /// First component.
    pub first: f64,
    /// Second component.
    pub second: f64,
    /// Third component.
    pub third: f64,
    /// Fourth component. Unused by all three-channel models.
    pub fourth: f64,
}

impl GenericColor {
    /// All-zero color.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from four components.
    #[inline]
    pub const fn new(first: f64, second: f64, third: f64, fourth: f64) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
        }
    }

    /// Creates a color from three components, leaving `fourth` at zero.
    #[inline]
    pub const fn new3(first: f64, second: f64, third: f64) -> Self {
        Self::new(first, second, third, 0.0)
    }

    /// Returns the first three components.
    #[inline]
    pub const fn to_array3(&self) -> [f64; 3] {
        [self.first, self.second, self.third]
    }

    /// Returns all four components.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.first, self.second, self.third, self.fourth]
    }

    /// Squared Euclidean distance over the first three components.
    #[inline]
    pub fn distance_squared3(&self, other: &Self) -> f64 {
        let d1 = self.first - other.first;
        let d2 = self.second - other.second;
        let d3 = self.third - other.third;
        d1 * d1 + d2 * d2 + d3 * d3
    }

    /// Returns `true` if all four components are finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 3]> for GenericColor {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Self::new3(v[0], v[1], v[2])
    }
}

impl From<[f64; 4]> for GenericColor {
    #[inline]
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<GenericColor> for [f64; 3] {
    #[inline]
    fn from(c: GenericColor) -> Self {
        c.to_array3()
    }
}
