//! Profile-free RGB helper models: HSL, HSV and HWB.
//!
//! All of them are plain reparametrizations of [`ColorModel::Rgb1`]
//! (`[0, 1]` channels). They sit outside the absolute graph because the
//! RGB they describe only has meaning together with a device profile.
//!
//! Achromatic inputs have no defined hue. The `hue_fallback` argument keeps
//! the hue a caller had before, so a gray does not snap a hue slider to 0°.
//!
//! [`ColorModel::Rgb1`]: perceptual_core::ColorModel::Rgb1

use perceptual_core::GenericColor;
use perceptual_math::normalize_angle_360;

fn hue_from_rgb(rgb: &GenericColor, max: f64, delta: f64, hue_fallback: f64) -> f64 {
    if delta == 0.0 {
        return normalize_angle_360(hue_fallback);
    }
    let (r, g, b) = (rgb.first, rgb.second, rgb.third);
    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    normalize_angle_360(sector * 60.0)
}

fn max_min(rgb: &GenericColor) -> (f64, f64) {
    let max = rgb.first.max(rgb.second).max(rgb.third);
    let min = rgb.first.min(rgb.second).min(rgb.third);
    (max, min)
}

// Chroma and hue back to RGB with the given offset added to every channel.
fn chroma_hue_to_rgb(c: f64, hue: f64, m: f64) -> GenericColor {
    let h_prime = normalize_angle_360(hue) / 60.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    GenericColor::new3(r1 + m, g1 + m, b1 + m)
}

/// `Rgb1` → `Hsv360_1_1`.
pub fn rgb_to_hsv(rgb: &GenericColor, hue_fallback: f64) -> GenericColor {
    let (max, min) = max_min(rgb);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    GenericColor::new3(hue_from_rgb(rgb, max, delta, hue_fallback), s, max)
}

/// `Hsv360_1_1` → `Rgb1`.
pub fn hsv_to_rgb(hsv: &GenericColor) -> GenericColor {
    let c = hsv.third * hsv.second;
    chroma_hue_to_rgb(c, hsv.first, hsv.third - c)
}

/// `Rgb1` → `Hsl360_1_1`.
pub fn rgb_to_hsl(rgb: &GenericColor, hue_fallback: f64) -> GenericColor {
    let (max, min) = max_min(rgb);
    let delta = max - min;
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    GenericColor::new3(hue_from_rgb(rgb, max, delta, hue_fallback), s, l)
}

/// `Hsl360_1_1` → `Rgb1`.
pub fn hsl_to_rgb(hsl: &GenericColor) -> GenericColor {
    let l = hsl.third;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * hsl.second;
    chroma_hue_to_rgb(c, hsl.first, l - c / 2.0)
}

/// `Hsv360_1_1` → `Hwb360_1_1`.
pub fn hsv_to_hwb(hsv: &GenericColor) -> GenericColor {
    let (s, v) = (hsv.second, hsv.third);
    GenericColor::new3(hsv.first, (1.0 - s) * v, 1.0 - v)
}

/// `Hwb360_1_1` → `Hsv360_1_1`.
///
/// When whiteness and blackness add up to more than 1 both are scaled down
/// proportionally first, which yields a gray.
pub fn hwb_to_hsv(hwb: &GenericColor) -> GenericColor {
    let (mut w, mut b) = (hwb.second, hwb.third);
    let sum = w + b;
    if sum > 1.0 {
        w /= sum;
        b /= sum;
    }
    let v = 1.0 - b;
    let s = if v == 0.0 { 0.0 } else { 1.0 - w / v };
    GenericColor::new3(hwb.first, s, v)
}

/// `Rgb1` → `Hwb360_1_1`.
pub fn rgb_to_hwb(rgb: &GenericColor, hue_fallback: f64) -> GenericColor {
    hsv_to_hwb(&rgb_to_hsv(rgb, hue_fallback))
}

/// `Hwb360_1_1` → `Rgb1`.
pub fn hwb_to_rgb(hwb: &GenericColor) -> GenericColor {
    hsv_to_rgb(&hwb_to_hsv(hwb))
}
