//! Serialized CSS parses back to the same color.

use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use perceptual_core::{ColorModel, GenericColor};
use perceptual_css::{CssColor, CssPredefinedRgbColorSpace};

// ============================================================================
// Generate then parse
// ============================================================================

#[test]
fn oklch_roundtrip() {
    let mut input = HashMap::new();
    input.insert(ColorModel::OklchD65, GenericColor::new3(0.5, 0.2, 10.0));

    let css = CssColor::generate_css(&input, 0.5, 3);
    assert_eq!(css[0], "oklch(0.50 0.20 10 / 50%)");

    let back = CssColor::parse(&css[0]);
    assert_eq!(back.model, ColorModel::OklchD65);
    assert_eq!(back.rgb_color_space, CssPredefinedRgbColorSpace::Invalid);
    assert_eq!(back.alpha1, 0.5);
    assert_eq!(back.color, GenericColor::new3(0.5, 0.2, 10.0));
}

#[test]
fn every_generated_model_parses_back() {
    let mut input = HashMap::new();
    input.insert(ColorModel::OklchD65, GenericColor::new3(0.6231, 0.1234, 123.4));
    input.insert(ColorModel::OklabD65, GenericColor::new3(0.6231, -0.0521, 0.1119));
    input.insert(ColorModel::CielchD50, GenericColor::new3(61.87, 54.32, 123.4));
    input.insert(ColorModel::CielabD50, GenericColor::new3(61.87, -29.9, 45.3));
    input.insert(ColorModel::XyzD50, GenericColor::new3(0.2301, 0.3012, 0.0812));
    input.insert(ColorModel::XyzD65, GenericColor::new3(0.2201, 0.3012, 0.1012));

    let css = CssColor::generate_css(&input, 0.75, 6);
    assert_eq!(css.len(), 6);

    let expected_order = [
        ColorModel::OklchD65,
        ColorModel::OklabD65,
        ColorModel::CielchD50,
        ColorModel::CielabD50,
        ColorModel::XyzD50,
        ColorModel::XyzD65,
    ];
    for (text, model) in css.iter().zip(expected_order) {
        let back = CssColor::parse(text);
        assert_eq!(back.model, model, "{text}");
        assert_abs_diff_eq!(back.alpha1, 0.75, epsilon = 1e-9);
        let original = input[&model];
        // Six significant figures at full scale.
        let tolerance = if matches!(model, ColorModel::CielchD50 | ColorModel::CielabD50) { 1e-2 } else { 1e-4 };
        assert_abs_diff_eq!(back.color.first, original.first, epsilon = tolerance);
        assert_abs_diff_eq!(back.color.second, original.second, epsilon = tolerance);
        assert_abs_diff_eq!(back.color.third, original.third, epsilon = 1e-2);
    }
}

// ============================================================================
// Named colors
// ============================================================================

#[test]
fn named_colors_ignore_case() {
    let lower = CssColor::parse("aliceblue");
    assert!(lower.is_valid());
    assert_eq!(CssColor::parse("AliceBlue"), lower);
    assert_eq!(CssColor::parse("ALICEBLUE"), lower);
    assert!(!CssColor::parse("AliceBlueX").is_valid());
    assert!(!CssColor::parse("XAliceBlue").is_valid());
}

#[test]
fn named_and_hex_agree() {
    for (name, hex) in [("red", "#f00"), ("rebeccapurple", "#663399"), ("transparent", "#0000")] {
        assert_eq!(CssColor::parse(name), CssColor::parse(hex), "{name}");
    }
}

// ============================================================================
// Examples
// ============================================================================

#[test]
fn documented_examples() {
    let v = CssColor::parse("rgb(1 2 3 / 0.5)");
    assert_eq!(v.model, ColorModel::Rgb1);
    assert_eq!(v.color, GenericColor::new3(1.0 / 255.0, 2.0 / 255.0, 3.0 / 255.0));
    assert_eq!(v.alpha1, 0.5);

    let v = CssColor::parse("oklch(0.1 0.2 0.75turn / 0.5)");
    assert_eq!(v.color.third, 270.0);
    assert_eq!(v.alpha1, 0.5);

    let v = CssColor::parse("lch(30% 50% 0.8% / 0.5)");
    assert_eq!(v.model, ColorModel::Invalid);
    assert_eq!(v.color, GenericColor::ZERO);
    assert_eq!(v.alpha1, 0.0);
}

#[test]
fn multiline_whitespace_is_collapsed() {
    let v = CssColor::parse("\n  oklab(\t0.5   0.1\n-0.1 )  ;  ");
    assert_eq!(v.model, ColorModel::OklabD65);
    assert_eq!(v.color, GenericColor::new3(0.5, 0.1, -0.1));
}
