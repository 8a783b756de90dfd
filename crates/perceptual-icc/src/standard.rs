//! The predefined RGB spaces of CSS Color 4 as ICC profiles.

use crate::{IccError, IccResult, Profile};
use lcms2::{CIExyY, CIExyYTRIPLE, Profile as LcmsProfile, ToneCurve};

/// Predefined RGB color spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardProfile {
    /// IEC 61966-2-1 sRGB.
    Srgb,
    /// sRGB primaries with a linear transfer curve.
    SrgbLinear,
    /// Display P3: P3 primaries, D65, sRGB curve.
    DisplayP3,
    /// Adobe RGB (1998) compatible.
    A98Rgb,
    /// ProPhoto RGB (ROMM), D50 white.
    ProphotoRgb,
    /// ITU-R BT.2020.
    Rec2020,
}

impl StandardProfile {
    /// Every standard profile.
    pub const ALL: [StandardProfile; 6] = [
        StandardProfile::Srgb,
        StandardProfile::SrgbLinear,
        StandardProfile::DisplayP3,
        StandardProfile::A98Rgb,
        StandardProfile::ProphotoRgb,
        StandardProfile::Rec2020,
    ];

    /// Creates an ICC profile from this standard.
    pub fn to_profile(self) -> IccResult<Profile> {
        let (white, primaries, curve) = match self {
            StandardProfile::Srgb => return Ok(Profile::srgb()),
            StandardProfile::SrgbLinear => (d65_white(), srgb_primaries(), ToneCurve::new(1.0)),
            StandardProfile::DisplayP3 => (d65_white(), p3_primaries(), srgb_curve()?),
            StandardProfile::A98Rgb => {
                let primaries = primaries([0.64, 0.33], [0.21, 0.71], [0.15, 0.06]);
                (d65_white(), primaries, ToneCurve::new(563.0 / 256.0))
            }
            StandardProfile::ProphotoRgb => {
                let primaries = primaries([0.734699, 0.265301], [0.159597, 0.840403], [0.036598, 0.000105]);
                // Linear toe below 1/32 encoded, gamma 1.8 above.
                let curve = parametric(&[1.8, 1.0, 0.0, 1.0 / 16.0, 1.0 / 32.0])?;
                (d50_white(), primaries, curve)
            }
            StandardProfile::Rec2020 => {
                let primaries = primaries([0.708, 0.292], [0.170, 0.797], [0.131, 0.046]);
                let curve = parametric(&[1.0 / 0.45, 1.0 / 1.099, 0.099 / 1.099, 1.0 / 4.5, 0.081])?;
                (d65_white(), primaries, curve)
            }
        };
        let inner = LcmsProfile::new_rgb(&white, &primaries, &[&curve, &curve, &curve])
            .map_err(|e| IccError::CreateFailed(format!("{self:?}: {e}")))?;
        Ok(Profile::from_lcms(inner))
    }
}

fn parametric(params: &[f64]) -> IccResult<ToneCurve> {
    ToneCurve::new_parametric(4, params).map_err(|e| IccError::CreateFailed(e.to_string()))
}

fn srgb_curve() -> IccResult<ToneCurve> {
    parametric(&[2.4, 1.0 / 1.055, 0.055 / 1.055, 1.0 / 12.92, 0.04045])
}

fn d65_white() -> CIExyY {
    CIExyY { x: 0.3127, y: 0.3290, Y: 1.0 }
}

/// The lcms2 D50 white (XYZ 0.9642, 1.0, 0.8249) as chromaticity.
pub(crate) fn d50_white() -> CIExyY {
    let [x, y, z] = [0.9642, 1.0, 0.8249];
    let sum = x + y + z;
    CIExyY { x: x / sum, y: y / sum, Y: 1.0 }
}

fn primaries(r: [f64; 2], g: [f64; 2], b: [f64; 2]) -> CIExyYTRIPLE {
    CIExyYTRIPLE {
        Red: CIExyY { x: r[0], y: r[1], Y: 1.0 },
        Green: CIExyY { x: g[0], y: g[1], Y: 1.0 },
        Blue: CIExyY { x: b[0], y: b[1], Y: 1.0 },
    }
}

fn srgb_primaries() -> CIExyYTRIPLE {
    primaries([0.64, 0.33], [0.30, 0.60], [0.15, 0.06])
}

fn p3_primaries() -> CIExyYTRIPLE {
    primaries([0.680, 0.320], [0.265, 0.690], [0.150, 0.060])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_standards_are_rgb() {
        for standard in StandardProfile::ALL {
            let profile = standard.to_profile().unwrap();
            assert!(profile.is_rgb(), "{standard:?} should be RGB");
            assert!(profile.is_device_class(), "{standard:?}");
            assert!(!profile.as_bytes().is_empty(), "{standard:?} should serialize");
        }
    }
}
