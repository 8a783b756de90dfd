//! 8-bit device pixels.

use std::fmt;

use crate::error::Error;

/// A device RGB pixel with 8 bits per channel plus alpha.
///
/// `a == 0` is the fully transparent sentinel returned by the
/// "or transparent" conversions of the gamut engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha. 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black, `0x00000000`.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a pixel from four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque pixel.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Packs into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks from `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb32(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8, (v >> 24) as u8)
    }

    /// Returns `true` if alpha is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// RGB channels as `[0, 1]` floats.
    pub fn to_rgb1(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|v| f64::from(v) / 255.0)
    }

    /// Builds an opaque pixel from `[0, 1]` floats, clamping and rounding.
    pub fn from_rgb1(rgb: [f64; 3]) -> Self {
        let [r, g, b] = rgb.map(unit_to_u8);
        Self::opaque(r, g, b)
    }

    /// Parses `#RRGGBB` or `#AARRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_string()));
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidHex(s.to_string()))?;
        match digits.len() {
            6 => Ok(Self::from_argb32(0xff00_0000 | value)),
            8 => Ok(Self::from_argb32(value)),
            _ => Err(Error::InvalidHex(s.to_string())),
        }
    }
}

#[inline]
fn unit_to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_packing() {
        let p = Rgba8::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(p.to_argb32(), 0x4411_2233);
        assert_eq!(Rgba8::from_argb32(0x4411_2233), p);
        assert_eq!(Rgba8::TRANSPARENT.to_argb32(), 0);
    }

    #[test]
    fn test_from_rgb1_clamps() {
        let p = Rgba8::from_rgb1([-0.5, 0.5, 2.0]);
        assert_eq!(p, Rgba8::opaque(0, 128, 255));
        assert_eq!(Rgba8::from_rgb1([f64::NAN, 0.0, 0.0]).r, 0);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgba8::from_hex("#112233").map(|p| p.to_argb32()), Ok(0xff11_2233));
        assert_eq!(Rgba8::from_hex("44112233"), Ok(Rgba8::new(0x11, 0x22, 0x33, 0x44)));
        assert!(Rgba8::from_hex("#123").is_err());
        assert!(Rgba8::from_hex("#zzzzzz").is_err());
        assert_eq!(Rgba8::opaque(1, 2, 3).to_string(), "#ff010203");
    }
}
