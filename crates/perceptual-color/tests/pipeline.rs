//! CSS text through the engine and back to CSS.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use approx::assert_abs_diff_eq;
use perceptual_color::prelude::*;

// ============================================================================
// Resolving parsed CSS
// ============================================================================

#[test]
fn hex_red_resolves_to_srgb_red() {
    let resolver = CssResolver::new();
    let models = resolver.resolve(&CssColor::parse("#ff0000")).unwrap();

    let lch = models[&ColorModel::CielchD50];
    assert!((53.0..56.0).contains(&lch.first), "{lch:?}");
    assert!((100.0..110.0).contains(&lch.second), "{lch:?}");

    let oklch = models[&ColorModel::OklchD65];
    assert_abs_diff_eq!(oklch.first, 0.628, epsilon = 0.01);
    assert_eq!(models[&ColorModel::Rgb1], GenericColor::new3(1.0, 0.0, 0.0));
}

#[test]
fn rgb_spellings_agree() {
    let resolver = CssResolver::new();
    let lab = |text: &str| resolver.resolve(&CssColor::parse(text)).unwrap()[&ColorModel::CielabD50];

    let reference = lab("rgb(255 0 0)");
    for text in ["red", "#f00", "rgba(255, 0, 0, 1)", "hsl(0 100% 50%)", "hwb(0 0% 0%)", "color(srgb 1 0 0)"] {
        let value = lab(text);
        assert_abs_diff_eq!(value.first, reference.first, epsilon = 1e-6);
        assert_abs_diff_eq!(value.second, reference.second, epsilon = 1e-6);
        assert_abs_diff_eq!(value.third, reference.third, epsilon = 1e-6);
    }
    // All of them share one engine.
    assert_eq!(resolver.cached_len(), 1);
}

#[test]
fn absolute_functions_skip_engines() {
    let resolver = CssResolver::new();
    let models = resolver.resolve(&CssColor::parse("lab(50 20 -30)")).unwrap();
    assert_eq!(models.len(), 6);
    assert!(!models.contains_key(&ColorModel::Rgb1));
    assert_eq!(resolver.cached_len(), 0);
}

#[test]
fn wide_gamut_red_is_more_chromatic() {
    let resolver = CssResolver::new();
    let chroma = |text: &str| resolver.resolve(&CssColor::parse(text)).unwrap()[&ColorModel::OklchD65].second;

    let srgb = chroma("color(srgb 1 0 0)");
    let p3 = chroma("color(display-p3 1 0 0)");
    let rec2020 = chroma("color(rec2020 1 0 0)");
    assert!(p3 > srgb, "{p3} <= {srgb}");
    assert!(rec2020 > p3, "{rec2020} <= {p3}");
    assert_eq!(resolver.cached_len(), 3);
}

#[test]
fn invalid_css_is_an_error() {
    let resolver = CssResolver::new();
    assert!(matches!(resolver.resolve(&CssColor::parse("nonsense")), Err(ColorError::InvalidColor)));
}

// ============================================================================
// Gamut mapping
// ============================================================================

#[test]
fn p3_color_fits_after_reduction() {
    let resolver = CssResolver::new();
    let srgb = resolver.rgb_color_space(CssPredefinedRgbColorSpace::Srgb).unwrap();
    let models = resolver.resolve(&CssColor::parse("color(display-p3 0 1 0)")).unwrap();

    let oklch = models[&ColorModel::OklchD65];
    assert!(!srgb.is_oklch_in_gamut(&oklch), "{oklch:?}");

    let fitted = srgb.reduce_oklch_chroma_to_fit_into_gamut(&oklch);
    assert!(srgb.is_oklch_in_gamut(&fitted));
    assert_eq!(fitted.third.to_bits(), oklch.third.to_bits());
    assert!(fitted.second < oklch.second);
}

#[test]
fn every_predefined_space_has_an_engine() {
    let resolver = CssResolver::new();
    for space in CssPredefinedRgbColorSpace::ALL {
        let engine = resolver.rgb_color_space(space).unwrap();
        let white = engine.to_cielab_d50([1.0, 1.0, 1.0]);
        assert!(white.first > 95.0, "{space}: {white:?}");
    }
    assert_eq!(resolver.cached_len(), 6);
}

#[test]
fn srgb_space_uses_builtin_profile() {
    let engine = create_rgb_color_space(CssPredefinedRgbColorSpace::Srgb).unwrap();
    assert_eq!(engine.info().manufacturer, "LittleCMS");
    assert_eq!(engine.info().name, "sRGB color space");
}

// ============================================================================
// Back to CSS
// ============================================================================

#[test]
fn generated_css_parses_back() {
    let resolver = CssResolver::new();
    let models = resolver.resolve(&CssColor::parse("rebeccapurple")).unwrap();
    let absolute: HashMap<_, _> = models.into_iter().filter(|(model, _)| *model != ColorModel::Rgb1).collect();

    let css = CssColor::generate_css(&absolute, 0.8, 6);
    assert_eq!(css.len(), 6);
    for text in &css {
        let back = CssColor::parse(text);
        assert!(back.is_valid(), "{text}");
        assert_abs_diff_eq!(back.alpha1, 0.8, epsilon = 1e-9);
        let original = absolute[&back.model];
        assert_abs_diff_eq!(back.color.first, original.first, epsilon = 0.01);
    }
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn resolver_is_shared_between_threads() {
    let resolver = Arc::new(CssResolver::new());
    let handles: Vec<_> = ["red", "lime", "blue", "white"]
        .into_iter()
        .map(|name| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || resolver.resolve(&CssColor::parse(name)).map(|m| m.len()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 7);
    }
    assert_eq!(resolver.cached_len(), 1);
}
