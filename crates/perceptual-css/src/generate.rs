//! CSS serialization of absolute colors.

use std::collections::HashMap;

use perceptual_core::{ColorModel, GenericColor};
use perceptual_math::{decimal_places, round_to_decimals};

/// Fixed-point text without a negative zero.
fn fixed(value: f64, decimals: usize) -> String {
    let rounded = round_to_decimals(value, decimals) + 0.0;
    format!("{rounded:.decimals$}")
}

/// Backs [`CssColor::generate_css`](crate::CssColor::generate_css).
pub(crate) fn generate_css(input: &HashMap<ColorModel, GenericColor>, opacity1: f64, significant_figures: u32) -> Vec<String> {
    let d1 = decimal_places(1.0, significant_figures);
    let d100 = decimal_places(100.0, significant_figures);
    let d255 = decimal_places(255.0, significant_figures);
    let d360 = decimal_places(360.0, significant_figures);

    let alpha = if opacity1 < 1.0 {
        format!(" / {}%", fixed(opacity1 * 100.0, d100))
    } else {
        String::new()
    };

    let layouts: [(ColorModel, &str, [usize; 3]); 6] = [
        (ColorModel::OklchD65, "oklch(", [d1, d1, d360]),
        (ColorModel::OklabD65, "oklab(", [d1, d1, d1]),
        (ColorModel::CielchD50, "lch(", [d100, d255, d360]),
        (ColorModel::CielabD50, "lab(", [d100, d255, d255]),
        (ColorModel::XyzD50, "color(xyz-d50 ", [d1, d1, d1]),
        (ColorModel::XyzD65, "color(xyz-d65 ", [d1, d1, d1]),
    ];

    layouts
        .iter()
        .filter_map(|(model, prefix, decimals)| {
            let color = input.get(model)?;
            let [a, b, c] = color.to_array3();
            Some(format!(
                "{prefix}{} {} {}{alpha})",
                fixed(a, decimals[0]),
                fixed(b, decimals[1]),
                fixed(c, decimals[2]),
            ))
        })
        .collect()
}
