//! CSS Color 4 parsing.
//!
//! Accepts hex colors, named colors, and the absolute color functions
//! `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `lab()`, `lch()`,
//! `oklab()`, `oklch()` and `color()`. Context-dependent values such as
//! `currentcolor` and relative color syntax are not accepted.

use std::sync::LazyLock;

use perceptual_core::{ColorModel, GenericColor, Rgba8};
use perceptual_math::normalize_angle_360;
use regex::Regex;
use tracing::trace;

use crate::named::named_color;
use crate::{CssColorValue, CssPredefinedRgbColorSpace};

static FUNCTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*\((.*)\)$").expect("valid function pattern"));

/// Argument syntaxes a color function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FunctionSyntax {
    /// Whitespace separated with an optional `/ alpha`.
    Standard,
    /// Comma separated, alpha as an optional fourth argument.
    Legacy,
    /// Either of the above.
    Both,
}

/// Trims and collapses every whitespace run into one space.
fn simplified(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A finite CSS number. Rejects `inf` and `NaN` spellings.
fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub(crate) fn parse_hex_color(hex_color: &str) -> Option<Rgba8> {
    if hex_color.len() > 9 {
        return None;
    }
    let digits = hex_color.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let mut expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };
    if expanded.len() == 6 {
        expanded.push_str("ff");
    }
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgba8::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?))
}

/// Trims one argument. Empty arguments and ones that still contain
/// whitespace, a comma or a slash are rejected.
fn clean_argument(argument: &str) -> Option<String> {
    let clean = simplified(argument);
    let bad = clean.is_empty() || clean.contains([' ', ',', '/']);
    (!bad).then_some(clean)
}

/// Applies [`clean_argument`] to every argument.
pub(crate) fn validate_arguments(arguments: &[&str]) -> Option<Vec<String>> {
    arguments.iter().map(|argument| clean_argument(argument)).collect()
}

/// Splits a function's argument list.
///
/// `count` includes the alpha argument, which is optional; when missing it
/// is returned as `none`.
pub(crate) fn parse_all_function_arguments(arguments: &str, mode: FunctionSyntax, count: usize) -> Option<Vec<String>> {
    if arguments.contains(',') {
        if mode == FunctionSyntax::Standard || arguments.contains('/') {
            return None;
        }
        let mut result: Vec<&str> = arguments.split(',').collect();
        if result.len() + 1 == count {
            result.push("none");
        }
        if result.len() != count {
            return None;
        }
        return validate_arguments(&result);
    }

    if mode == FunctionSyntax::Legacy {
        return None;
    }
    let parts: Vec<&str> = arguments.split('/').collect();
    if parts.len() > 2 {
        return None;
    }
    let alpha = parts.get(1).copied().unwrap_or("none");
    let channels = simplified(parts[0]);
    let mut result: Vec<&str> = channels.split(' ').collect();
    result.push(alpha);
    if result.len() != count {
        return None;
    }
    validate_arguments(&result)
}

/// Parses a number, a percentage of `full`, or `none` (which gives `none_value`).
pub(crate) fn parse_argument_percent_number_none(argument: &str, full: f64, none_value: f64) -> Option<f64> {
    let clean = clean_argument(argument)?;
    if clean == "none" {
        return Some(none_value);
    }
    match clean.strip_suffix('%') {
        Some(percent) => parse_number(percent).map(|v| v / 100.0 * full),
        None => parse_number(&clean),
    }
}

/// Parses a percentage (100% is 1) or `none` (0). Plain numbers are rejected.
pub(crate) fn parse_argument_percent_none_to_1(argument: &str) -> Option<f64> {
    let clean = clean_argument(argument)?;
    if clean == "none" {
        return Some(0.0);
    }
    parse_number(clean.strip_suffix('%')?).map(|v| v / 100.0)
}

/// Parses a hue with optional `deg`, `grad`, `rad` or `turn` unit, or
/// `none` (0). The result is wrapped into `[0, 360)`.
pub(crate) fn parse_argument_hue_none_to_360(argument: &str) -> Option<f64> {
    let clean = clean_argument(argument)?;
    if clean == "none" {
        return Some(0.0);
    }
    let (number, factor) = if let Some(n) = clean.strip_suffix("deg") {
        (n, 1.0)
    } else if let Some(n) = clean.strip_suffix("grad") {
        (n, 360.0 / 400.0)
    } else if let Some(n) = clean.strip_suffix("rad") {
        (n, 360.0 / std::f64::consts::TAU)
    } else if let Some(n) = clean.strip_suffix("turn") {
        (n, 360.0)
    } else {
        (clean.as_str(), 1.0)
    };
    parse_number(number).map(|v| normalize_angle_360(v * factor))
}

/// Parses an absolute color function such as `oklch(0.5 0.1 30 / 50%)`.
pub(crate) fn parse_function(color_function: &str) -> CssColorValue {
    let Some(captures) = FUNCTION_PATTERN.captures(color_function) else {
        return CssColorValue::INVALID;
    };
    let ident = simplified(&captures[1]);
    let argument_string = simplified(&captures[2]);

    let parsed = match ident.as_str() {
        "rgb" | "hsl" => parse_all_function_arguments(&argument_string, FunctionSyntax::Both, 4),
        "rgba" | "hsla" => parse_all_function_arguments(&argument_string, FunctionSyntax::Legacy, 4),
        "hwb" | "lab" | "lch" | "oklab" | "oklch" => {
            parse_all_function_arguments(&argument_string, FunctionSyntax::Standard, 4)
        }
        // The first argument of color() names the space.
        "color" => parse_all_function_arguments(&argument_string, FunctionSyntax::Standard, 5),
        _ => None,
    };
    let Some(mut arguments) = parsed else {
        return CssColorValue::INVALID;
    };
    let ident = if ident == "color" { arguments.remove(0) } else { ident };

    let Some((model, rgb_color_space, channels)) = parse_channels(&ident, &arguments) else {
        return CssColorValue::INVALID;
    };
    let Some(alpha1) = parse_argument_percent_number_none(&arguments[3], 1.0, 1.0) else {
        return CssColorValue::INVALID;
    };

    CssColorValue {
        model,
        rgb_color_space,
        color: GenericColor::from(channels),
        alpha1: alpha1.clamp(0.0, 1.0),
    }
}

// The three channel arguments of a function with known identifier.
fn parse_channels(ident: &str, arguments: &[String]) -> Option<(ColorModel, CssPredefinedRgbColorSpace, [f64; 3])> {
    let arg = |i: usize| arguments[i].as_str();
    let numbers = |full: [f64; 3]| -> Option<[f64; 3]> {
        Some([
            parse_argument_percent_number_none(arg(0), full[0], 0.0)?,
            parse_argument_percent_number_none(arg(1), full[1], 0.0)?,
            parse_argument_percent_number_none(arg(2), full[2], 0.0)?,
        ])
    };

    if let Some(space) = CssPredefinedRgbColorSpace::from_css_ident(ident) {
        let [r, g, b] = numbers([1.0; 3])?;
        return Some((ColorModel::Rgb1, space, [r, g, b]));
    }

    match ident {
        "rgb" | "rgba" => {
            let rgb = numbers([255.0; 3])?.map(|v| v / 255.0);
            Some((ColorModel::Rgb1, CssPredefinedRgbColorSpace::Srgb, rgb))
        }
        "xyz" | "xyz-d65" | "xyz-d50" => {
            let model = if ident == "xyz-d50" { ColorModel::XyzD50 } else { ColorModel::XyzD65 };
            Some((model, CssPredefinedRgbColorSpace::Invalid, numbers([1.0; 3])?))
        }
        "hsl" | "hsla" | "hwb" => {
            let model = if ident == "hwb" { ColorModel::Hwb360_1_1 } else { ColorModel::Hsl360_1_1 };
            let channels = [
                parse_argument_hue_none_to_360(arg(0))?,
                parse_argument_percent_none_to_1(arg(1))?,
                parse_argument_percent_none_to_1(arg(2))?,
            ];
            Some((model, CssPredefinedRgbColorSpace::Srgb, channels))
        }
        "lab" => Some((ColorModel::CielabD50, CssPredefinedRgbColorSpace::Invalid, numbers([100.0, 125.0, 125.0])?)),
        "oklab" => Some((ColorModel::OklabD65, CssPredefinedRgbColorSpace::Invalid, numbers([1.0, 0.4, 0.4])?)),
        "lch" | "oklch" => {
            let (model, full) = if ident == "lch" {
                (ColorModel::CielchD50, [100.0, 150.0])
            } else {
                (ColorModel::OklchD65, [1.0, 0.4])
            };
            let channels = [
                parse_argument_percent_number_none(arg(0), full[0], 0.0)?,
                parse_argument_percent_number_none(arg(1), full[1], 0.0)?,
                parse_argument_hue_none_to_360(arg(2))?,
            ];
            Some((model, CssPredefinedRgbColorSpace::Invalid, channels))
        }
        _ => None,
    }
}

/// Parses one CSS color.
///
/// Leading and trailing whitespace and one trailing `;` are ignored.
/// Named colors are matched case-insensitively, function names are not.
/// Failure gives [`CssColorValue::INVALID`].
pub(crate) fn parse(text: &str) -> CssColorValue {
    let mut clean = simplified(text);
    if let Some(stripped) = clean.strip_suffix(';') {
        clean = simplified(stripped);
    }

    if let Some(rgba) = named_color(&clean).or_else(|| parse_hex_color(&clean)) {
        let [r, g, b] = rgba.to_rgb1();
        return CssColorValue {
            model: ColorModel::Rgb1,
            rgb_color_space: CssPredefinedRgbColorSpace::Srgb,
            color: GenericColor::new3(r, g, b),
            alpha1: f64::from(rgba.a) / 255.0,
        };
    }

    let value = parse_function(&clean);
    if !value.is_valid() {
        trace!(text = %clean, "not a CSS color");
    }
    value
}
