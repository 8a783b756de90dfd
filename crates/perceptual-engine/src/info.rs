//! Read-only profile metadata gathered at engine construction.

use std::path::{Path, PathBuf};

use perceptual_icc::{IccDateTime, Intent, IntentDirections, Profile, Signature, TextTag, XyzTag};

/// Metadata of the ICC profile behind an [`RgbColorSpace`](crate::RgbColorSpace).
///
/// Every field is filled once; missing tags give empty strings or `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileInfo {
    /// Profile description.
    pub name: String,
    /// Device manufacturer.
    pub manufacturer: String,
    /// Device model.
    pub model: String,
    /// Copyright notice.
    pub copyright: String,
    /// ICC version as `(major, minor)`.
    pub icc_version: (u8, u8),
    /// Header creation date, UTC.
    pub creation_date_time: Option<IccDateTime>,
    /// Device class, usually `mntr`.
    pub device_class: Signature,
    /// Data color space, `RGB ` for every engine.
    pub color_model: Signature,
    /// Profile connection space.
    pub pcs: Signature,
    /// The profile carries a lookup table for the engine's intent.
    pub has_clut: bool,
    /// The profile is a matrix/shaper profile.
    pub has_matrix_shaper: bool,
    /// Supported directions for every rendering intent.
    pub rendering_intent_directions: Vec<(Intent, IntentDirections)>,
    /// Size of the source file in bytes.
    pub file_size: Option<u64>,
    /// Canonical path of the source file.
    pub absolute_file_path: Option<PathBuf>,
    /// Sorted four-character tag signatures.
    pub tag_signatures: Vec<String>,
    /// `wtpt` tag.
    pub tag_whitepoint: Option<[f64; 3]>,
    /// `bkpt` tag.
    pub tag_blackpoint: Option<[f64; 3]>,
    /// `rXYZ` tag.
    pub tag_red_primary: Option<[f64; 3]>,
    /// `gXYZ` tag.
    pub tag_green_primary: Option<[f64; 3]>,
    /// `bXYZ` tag.
    pub tag_blue_primary: Option<[f64; 3]>,
    /// Largest CIELCh-D50 chroma any in-gamut color can have.
    pub max_cielch_d50_chroma: f64,
    /// Largest Oklch chroma any in-gamut color can have.
    pub max_oklch_chroma: f64,
    /// Darkest displayable gray, CIELab L.
    pub cielab_d50_blackpoint_l: f64,
    /// Lightest displayable gray, CIELab L.
    pub cielab_d50_whitepoint_l: f64,
    /// Darkest displayable gray, Oklab L.
    pub oklab_blackpoint_l: f64,
    /// Lightest displayable gray, Oklab L.
    pub oklab_whitepoint_l: f64,
}

impl ProfileInfo {
    /// Collects the profile-derived fields. Gamut fields stay zero.
    pub(crate) fn from_profile(profile: &Profile, intent: Intent, path: Option<&Path>) -> Self {
        let text = |tag| profile.text(tag).unwrap_or_default();
        let mut tag_signatures: Vec<String> = profile.tag_signatures().iter().map(ToString::to_string).collect();
        tag_signatures.sort();

        let rendering_intent_directions = Intent::ALL
            .iter()
            .map(|&i| (i, profile.intent_directions(i)))
            .collect();

        Self {
            name: text(TextTag::Description),
            manufacturer: text(TextTag::Manufacturer),
            model: text(TextTag::Model),
            copyright: text(TextTag::Copyright),
            icc_version: profile.version_parts(),
            creation_date_time: profile.creation_date_time(),
            device_class: profile.device_class(),
            color_model: profile.color_space(),
            pcs: profile.pcs(),
            has_clut: profile.has_clut(intent),
            has_matrix_shaper: profile.is_matrix_shaper(),
            rendering_intent_directions,
            file_size: path.and_then(|p| std::fs::metadata(p).ok()).map(|m| m.len()),
            absolute_file_path: path.and_then(|p| p.canonicalize().ok()),
            tag_signatures,
            tag_whitepoint: profile.xyz_tag(XyzTag::WhitePoint),
            tag_blackpoint: profile.xyz_tag(XyzTag::BlackPoint),
            tag_red_primary: profile.xyz_tag(XyzTag::RedColorant),
            tag_green_primary: profile.xyz_tag(XyzTag::GreenColorant),
            tag_blue_primary: profile.xyz_tag(XyzTag::BlueColorant),
            ..Self::default()
        }
    }

    /// Directions supported for `intent`.
    pub fn intent_directions(&self, intent: Intent) -> IntentDirections {
        self.rendering_intent_directions
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, d)| *d)
            .unwrap_or_default()
    }

    /// ICC version formatted as `major.minor`.
    pub fn icc_version_string(&self) -> String {
        let (major, minor) = self.icc_version;
        format!("{major}.{minor}")
    }
}
