//! Queries that need the raw lcms2 API: wide-character text tags and the
//! header creation date.
//!
//! lcms2 hands out profile text as `wchar_t`, which is 16 bits on Windows
//! and 32 bits elsewhere. The units are decoded without committing to either
//! encoding: values above U+FFFF are taken as UTF-32 scalars, surrogate
//! pairs are joined, and anything unpaired or invalid becomes U+FFFD.

use lcms2_sys::InfoType;
use tracing::trace;

use crate::IccDateTime;

/// Decodes wide-character units into a `String`.
///
/// Decoding stops at the first NUL unit.
///
/// ```rust
/// use perceptual_icc::decode_wide_text;
///
/// // UTF-16 surrogate pair for U+1F600
/// assert_eq!(decode_wide_text([0x41, 0xD83D, 0xDE00]), "A\u{1F600}");
/// // The same code point as a single UTF-32 unit
/// assert_eq!(decode_wide_text([0x41, 0x1F600]), "A\u{1F600}");
/// // A lone surrogate
/// assert_eq!(decode_wide_text([0xDC00, 0x42]), "\u{FFFD}B");
/// ```
pub fn decode_wide_text<I>(units: I) -> String
where
    I: IntoIterator<Item = u32>,
{
    let mut out = String::new();
    let mut iter = units.into_iter().take_while(|&u| u != 0).peekable();
    while let Some(unit) = iter.next() {
        let decoded = match unit {
            0xD800..=0xDBFF => match iter.peek() {
                Some(&low @ 0xDC00..=0xDFFF) => {
                    iter.next();
                    char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                }
                _ => None,
            },
            0xDC00..=0xDFFF => None,
            _ => char::from_u32(unit),
        };
        out.push(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
    }
    out
}

/// An lcms2 profile handle opened straight from bytes, for the queries the
/// safe wrapper does not expose.
struct RawProfile(lcms2_sys::HPROFILE);

impl RawProfile {
    fn open(data: &[u8]) -> Option<Self> {
        let len = u32::try_from(data.len()).ok()?;
        // SAFETY: lcms2 copies what it needs from the buffer during the call.
        let handle = unsafe { lcms2_sys::cmsOpenProfileFromMem(data.as_ptr().cast(), len) };
        if handle.is_null() {
            None
        } else {
            Some(Self(handle))
        }
    }

    fn info(&self, info: InfoType) -> Option<String> {
        let language = c"en";
        let country = c"US";
        // SAFETY: a null buffer with size 0 only queries the required size.
        let bytes = unsafe {
            lcms2_sys::cmsGetProfileInfo(
                self.0,
                info,
                language.as_ptr().cast(),
                country.as_ptr().cast(),
                std::ptr::null_mut(),
                0,
            )
        };
        if bytes == 0 {
            return None;
        }

        let unit_size = std::mem::size_of::<libc::wchar_t>();
        let mut buffer: Vec<libc::wchar_t> = vec![0; (bytes as usize).div_ceil(unit_size)];
        let capacity = u32::try_from(buffer.len() * unit_size).ok()?;
        // SAFETY: the buffer holds `capacity` bytes.
        let written = unsafe {
            lcms2_sys::cmsGetProfileInfo(
                self.0,
                info,
                language.as_ptr().cast(),
                country.as_ptr().cast(),
                buffer.as_mut_ptr().cast(),
                capacity,
            )
        };
        if written == 0 {
            return None;
        }

        let text = decode_wide_text(buffer.iter().map(|&u| u as u32));
        trace!(units = buffer.len(), "decoded profile text");
        (!text.is_empty()).then_some(text)
    }
}

impl RawProfile {
    fn creation_date_time(&self) -> Option<IccDateTime> {
        // SAFETY: `tm` is plain old data; lcms2 fills every calendar field.
        let mut tm: libc::tm = unsafe { std::mem::zeroed() };
        // SAFETY: the pointer is valid for one `tm` for the whole call.
        let ok = unsafe { lcms2_sys::cmsGetHeaderCreationDateTime(self.0, (&raw mut tm).cast()) };
        if ok == 0 {
            return None;
        }
        IccDateTime::from_fields(
            tm.tm_year + 1900,
            tm.tm_mon + 1,
            tm.tm_mday,
            tm.tm_hour,
            tm.tm_min,
            tm.tm_sec,
        )
    }
}

impl Drop for RawProfile {
    fn drop(&mut self) {
        // SAFETY: the handle came from cmsOpenProfileFromMem and is closed once.
        unsafe {
            lcms2_sys::cmsCloseProfile(self.0);
        }
    }
}

/// Reads one text tag from raw profile bytes in the `en`/`US` locale.
///
/// Returns `None` when the bytes are not a profile or the tag is missing.
pub(crate) fn read_info(data: &[u8], info: InfoType) -> Option<String> {
    RawProfile::open(data)?.info(info)
}

/// Reads the header creation date from raw profile bytes.
pub(crate) fn read_creation_date(data: &[u8]) -> Option<IccDateTime> {
    RawProfile::open(data)?.creation_date_time()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii() {
        let units = "sRGB color space".chars().map(|c| c as u32);
        assert_eq!(decode_wide_text(units), "sRGB color space");
    }

    #[test]
    fn test_stops_at_nul() {
        assert_eq!(decode_wide_text([0x61, 0x62, 0, 0x63]), "ab");
        assert_eq!(decode_wide_text([0u32; 4]), "");
    }

    #[test]
    fn test_high_surrogate_at_end() {
        assert_eq!(decode_wide_text([0x61, 0xD83D]), "a\u{FFFD}");
    }

    #[test]
    fn test_high_surrogate_followed_by_non_surrogate() {
        assert_eq!(decode_wide_text([0xD83D, 0x62]), "\u{FFFD}b");
    }

    #[test]
    fn test_out_of_range_scalar() {
        assert_eq!(decode_wide_text([0x11_0000, 0x41]), "\u{FFFD}A");
    }

    #[test]
    fn test_bmp_non_ascii() {
        assert_eq!(decode_wide_text([0x00E9, 0x4E2D]), "é中");
    }

    #[test]
    fn test_read_info_rejects_garbage() {
        assert_eq!(read_info(b"garbage", InfoType::Description), None);
        assert_eq!(read_creation_date(b"garbage"), None);
    }
}
