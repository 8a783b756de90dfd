//! ICC profile wrapper.

use std::path::Path;

use lcms2::{ColorSpaceSignature, Profile as LcmsProfile, Tag, TagSignature};
use tracing::debug;

use crate::standard::d50_white;
use crate::text::{read_creation_date, read_info};
use crate::{IccDateTime, IccError, IccResult, Intent, IntentDirections, Signature, StandardProfile};

// lcms2 direction flags for cmsIsCLUT / cmsIsIntentSupported.
const USED_AS_INPUT: u32 = 0;
const USED_AS_OUTPUT: u32 = 1;
const USED_AS_PROOF: u32 = 2;

/// The text tags a profile can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTag {
    /// Profile description, shown to users as the profile name.
    Description,
    /// Device manufacturer.
    Manufacturer,
    /// Device model.
    Model,
    /// Copyright notice.
    Copyright,
}

/// The XYZ-valued tags exposed as profile metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XyzTag {
    /// Media white point (`wtpt`).
    WhitePoint,
    /// Media black point (`bkpt`).
    BlackPoint,
    /// Red colorant (`rXYZ`).
    RedColorant,
    /// Green colorant (`gXYZ`).
    GreenColorant,
    /// Blue colorant (`bXYZ`).
    BlueColorant,
}

impl From<XyzTag> for TagSignature {
    fn from(tag: XyzTag) -> Self {
        match tag {
            XyzTag::WhitePoint => TagSignature::MediaWhitePointTag,
            XyzTag::BlackPoint => TagSignature::MediaBlackPointTag,
            XyzTag::RedColorant => TagSignature::RedColorantTag,
            XyzTag::GreenColorant => TagSignature::GreenColorantTag,
            XyzTag::BlueColorant => TagSignature::BlueColorantTag,
        }
    }
}

impl From<TextTag> for lcms2_sys::InfoType {
    fn from(tag: TextTag) -> Self {
        match tag {
            TextTag::Description => lcms2_sys::InfoType::Description,
            TextTag::Manufacturer => lcms2_sys::InfoType::Manufacturer,
            TextTag::Model => lcms2_sys::InfoType::Model,
            TextTag::Copyright => lcms2_sys::InfoType::Copyright,
        }
    }
}

/// An ICC color profile together with its serialized bytes.
///
/// lcms2 does all color work and header reading; the bytes back the text
/// and creation-date queries.
///
/// # Example
///
/// ```rust
/// use perceptual_icc::{Profile, TextTag};
///
/// let srgb = Profile::srgb();
/// assert!(srgb.is_rgb());
/// assert!(srgb.is_device_class());
/// assert!(srgb.text(TextTag::Description).is_some());
/// ```
pub struct Profile {
    /// Internal lcms2 profile handle.
    pub(crate) inner: LcmsProfile,
    data: Vec<u8>,
}

impl Profile {
    /// Loads a profile from an ICC file.
    ///
    /// # Errors
    ///
    /// [`IccError::Io`] if the file cannot be read (missing, a directory,
    /// no permission), [`IccError::LoadFailed`] if lcms2 rejects the bytes.
    pub fn from_file(path: &Path) -> IccResult<Self> {
        let data = std::fs::read(path)?;
        let profile = Self::from_icc(&data)
            .map_err(|e| IccError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), bytes = data.len(), "loaded ICC profile");
        Ok(profile)
    }

    /// Creates a profile from raw ICC data.
    pub fn from_icc(data: &[u8]) -> IccResult<Self> {
        let inner = LcmsProfile::new_icc(data).map_err(|e| IccError::LoadFailed(e.to_string()))?;
        Ok(Self {
            inner,
            data: data.to_vec(),
        })
    }

    /// The built-in lcms2 sRGB profile.
    pub fn srgb() -> Self {
        Self::from_lcms(LcmsProfile::new_srgb())
    }

    /// Creates a profile for one of the predefined RGB spaces.
    pub fn from_standard(standard: StandardProfile) -> IccResult<Self> {
        standard.to_profile()
    }

    /// CIELab v4 profile relative to D50.
    pub fn lab_d50() -> IccResult<Self> {
        let inner = LcmsProfile::new_lab4_context(lcms2::GlobalContext::new(), &d50_white())
            .map_err(|e| IccError::CreateFailed(e.to_string()))?;
        Ok(Self::from_lcms(inner))
    }

    /// Wraps an in-memory lcms2 profile, serializing it for the byte
    /// level queries. A profile that fails to serialize keeps working for
    /// transforms and header fields but reports no text or date.
    pub(crate) fn from_lcms(inner: LcmsProfile) -> Self {
        let data = inner.icc().unwrap_or_default();
        Self { inner, data }
    }

    /// Serialized profile bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// ICC version as a decimal number, e.g. `4.3`.
    pub fn version(&self) -> f64 {
        self.inner.version()
    }

    /// ICC version as `(major, minor)`.
    pub fn version_parts(&self) -> (u8, u8) {
        let encoded = self.inner.encoded_icc_version();
        ((encoded >> 24) as u8, ((encoded >> 20) & 0x0F) as u8)
    }

    /// Device class, e.g. [`Signature::DISPLAY`].
    pub fn device_class(&self) -> Signature {
        self.inner.device_class().into()
    }

    /// Data color space, e.g. [`Signature::RGB`].
    pub fn color_space(&self) -> Signature {
        self.inner.color_space().into()
    }

    /// Profile connection space, [`Signature::XYZ`] or [`Signature::LAB`].
    pub fn pcs(&self) -> Signature {
        self.inner.pcs().into()
    }

    /// Signatures of every tag in the profile, in directory order.
    pub fn tag_signatures(&self) -> Vec<Signature> {
        self.inner.tag_signatures().into_iter().map(Signature::from).collect()
    }

    /// Header creation date, or `None` if unset or invalid.
    pub fn creation_date_time(&self) -> Option<IccDateTime> {
        read_creation_date(&self.data)
    }

    /// Returns `true` for device classes that can describe an RGB device:
    /// display, input, output and color space profiles.
    pub fn is_device_class(&self) -> bool {
        [
            Signature::DISPLAY,
            Signature::INPUT,
            Signature::OUTPUT,
            Signature::COLOR_SPACE,
        ]
        .contains(&self.device_class())
    }

    /// A text tag in the `en`/`US` locale, or `None` if missing.
    pub fn text(&self, tag: TextTag) -> Option<String> {
        read_info(&self.data, tag.into())
    }

    /// Returns true if this is an RGB profile.
    pub fn is_rgb(&self) -> bool {
        matches!(self.inner.color_space(), ColorSpaceSignature::RgbData)
    }

    /// Returns true if the profile is a matrix/shaper profile.
    pub fn is_matrix_shaper(&self) -> bool {
        self.inner.is_matrix_shaper()
    }

    /// Returns true if the profile carries a lookup table in either
    /// direction for the given intent.
    pub fn has_clut(&self, intent: Intent) -> bool {
        self.inner.is_clut(intent.into(), USED_AS_INPUT) || self.inner.is_clut(intent.into(), USED_AS_OUTPUT)
    }

    /// Directions in which `intent` is supported.
    pub fn intent_directions(&self, intent: Intent) -> IntentDirections {
        let lcms_intent: lcms2::Intent = intent.into();
        IntentDirections {
            input: self.inner.is_intent_supported(lcms_intent, USED_AS_INPUT),
            output: self.inner.is_intent_supported(lcms_intent, USED_AS_OUTPUT),
            proof: self.inner.is_intent_supported(lcms_intent, USED_AS_PROOF),
        }
    }

    /// Reads an XYZ tag, or `None` if the profile lacks it.
    pub fn xyz_tag(&self, tag: XyzTag) -> Option<[f64; 3]> {
        match self.inner.read_tag(tag.into()) {
            Tag::CIEXYZ(xyz) => Some([xyz.X, xyz.Y, xyz.Z]),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("bytes", &self.data.len())
            .field("rgb", &self.is_rgb())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb() {
        let profile = Profile::srgb();
        assert!(profile.is_rgb());
        assert!(profile.is_matrix_shaper());
        assert!(!profile.as_bytes().is_empty());
    }

    #[test]
    fn test_srgb_header() {
        let srgb = Profile::srgb();
        assert_eq!(srgb.color_space(), Signature::RGB);
        assert_eq!(srgb.device_class(), Signature::DISPLAY);
        assert_eq!(srgb.pcs(), Signature::XYZ);
        assert!(srgb.is_device_class());
        assert!(srgb.tag_signatures().contains(&Signature::WHITE_POINT_TAG));
    }

    #[test]
    fn test_header_survives_failed_serialization() {
        // Header fields come from lcms2, not from the serialized bytes.
        let srgb = Profile {
            inner: LcmsProfile::new_srgb(),
            data: Vec::new(),
        };
        assert!(srgb.is_device_class());
        assert_eq!(srgb.color_space(), Signature::RGB);
        assert_eq!(srgb.creation_date_time(), None);
    }

    #[test]
    fn test_version_parts_match_version() {
        let srgb = Profile::srgb();
        let (major, minor) = srgb.version_parts();
        assert!(major >= 2);
        assert!((srgb.version() - (f64::from(major) + f64::from(minor) / 10.0)).abs() < 0.1);
    }

    #[test]
    fn test_lab_is_not_device_class() {
        let lab = Profile::lab_d50().unwrap();
        assert_eq!(lab.color_space(), Signature::LAB);
        assert!(!lab.is_device_class());
    }

    #[test]
    fn test_srgb_text_tags() {
        let profile = Profile::srgb();
        let description = profile.text(TextTag::Description).unwrap();
        assert!(description.contains("sRGB"), "{description}");
    }

    #[test]
    fn test_srgb_white_point_tag() {
        let wtpt = Profile::srgb().xyz_tag(XyzTag::WhitePoint).unwrap();
        assert!((wtpt[1] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_srgb_supports_colorimetric_output() {
        let directions = Profile::srgb().intent_directions(Intent::RelativeColorimetric);
        assert!(directions.output);
        assert!(directions.any());
    }

    #[test]
    fn test_lab() {
        assert!(!Profile::lab_d50().unwrap().is_rgb());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let data = Profile::srgb().as_bytes().to_vec();
        let reloaded = Profile::from_icc(&data).unwrap();
        assert!(reloaded.is_rgb());
        assert_eq!(reloaded.as_bytes(), &data[..]);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(Profile::from_icc(b"garbage"), Err(IccError::LoadFailed(_))));
    }
}
