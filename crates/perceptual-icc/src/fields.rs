//! Value types for ICC header fields.
//!
//! lcms2 reads the header; these types only give its raw signatures and
//! dates a printable, comparable form.

use std::fmt;

use lcms2::{ColorSpaceSignature, ProfileClassSignature, TagSignature};

/// A four-character ICC signature such as `mntr` or `RGB `.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(pub [u8; 4]);

impl Signature {
    /// `mntr`: display device.
    pub const DISPLAY: Self = Self(*b"mntr");
    /// `scnr`: input device.
    pub const INPUT: Self = Self(*b"scnr");
    /// `prtr`: output device.
    pub const OUTPUT: Self = Self(*b"prtr");
    /// `spac`: color space conversion.
    pub const COLOR_SPACE: Self = Self(*b"spac");
    /// `RGB `: RGB data.
    pub const RGB: Self = Self(*b"RGB ");
    /// `XYZ `: XYZ data or tag type.
    pub const XYZ: Self = Self(*b"XYZ ");
    /// `Lab `: Lab data.
    pub const LAB: Self = Self(*b"Lab ");
    /// `wtpt`: media white point tag.
    pub const WHITE_POINT_TAG: Self = Self(*b"wtpt");

    /// Builds a signature from its big-endian integer form.
    #[inline]
    pub const fn from_u32(v: u32) -> Self {
        Self(v.to_be_bytes())
    }

    /// Big-endian integer form.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl From<ColorSpaceSignature> for Signature {
    fn from(sig: ColorSpaceSignature) -> Self {
        Self::from_u32(sig as u32)
    }
}

impl From<ProfileClassSignature> for Signature {
    fn from(sig: ProfileClassSignature) -> Self {
        Self::from_u32(sig as u32)
    }
}

impl From<TagSignature> for Signature {
    fn from(sig: TagSignature) -> Self {
        Self::from_u32(sig as u32)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Signatures are space padded; control bytes would garble logs.
        let text: String = self
            .0
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect();
        f.write_str(text.trim_end())
    }
}

/// Profile creation time from the header, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IccDateTime {
    /// Year.
    pub year: u16,
    /// Month, 1 to 12.
    pub month: u8,
    /// Day, 1 to 31.
    pub day: u8,
    /// Hour, 0 to 23.
    pub hour: u8,
    /// Minute, 0 to 59.
    pub minute: u8,
    /// Second, 0 to 59. Leap seconds are clamped to 59.
    pub second: u8,
}

impl IccDateTime {
    /// Builds a date from calendar fields as lcms2 decodes them
    /// (`year` in full, `month` from 1).
    ///
    /// Returns `None` for an all-zero or out-of-range date.
    pub fn from_fields(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Option<Self> {
        let valid = (1..=12).contains(&month)
            && (1..=31).contains(&day)
            && (0..24).contains(&hour)
            && (0..60).contains(&minute)
            && (0..=60).contains(&second);
        if !valid {
            return None;
        }
        Some(Self {
            year: u16::try_from(year).ok()?,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second: second.min(59) as u8,
        })
    }
}

impl fmt::Display for IccDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
