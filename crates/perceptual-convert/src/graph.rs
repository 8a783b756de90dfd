//! The fixed conversion graph and its traversal.

use std::collections::HashMap;

use perceptual_core::{ColorModel, GenericColor};

use crate::adapt::{xyz_d50_to_xyz_d65, xyz_d65_to_xyz_d50};
use crate::cielab::{cielab_to_xyz_d50, xyz_d50_to_cielab};
use crate::oklab::{oklab_to_xyz_d65, xyz_d65_to_oklab};
use crate::{cartesian_to_polar, polar_to_cartesian};

/// One directed edge: a pure conversion from one model to another.
#[derive(Clone, Copy)]
pub struct Conversion {
    /// Source model.
    pub from: ColorModel,
    /// Destination model.
    pub to: ColorModel,
    /// The conversion itself.
    pub function: fn(&GenericColor) -> GenericColor,
}

impl std::fmt::Debug for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversion")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

const fn edge(
    from: ColorModel,
    to: ColorModel,
    function: fn(&GenericColor) -> GenericColor,
) -> Conversion {
    Conversion { from, to, function }
}

static CONVERSIONS: [Conversion; 10] = [
    edge(ColorModel::XyzD50, ColorModel::XyzD65, xyz_d50_to_xyz_d65),
    edge(ColorModel::XyzD65, ColorModel::XyzD50, xyz_d65_to_xyz_d50),
    edge(ColorModel::OklabD65, ColorModel::XyzD65, oklab_to_xyz_d65),
    edge(ColorModel::XyzD65, ColorModel::OklabD65, xyz_d65_to_oklab),
    edge(ColorModel::XyzD50, ColorModel::CielabD50, xyz_d50_to_cielab),
    edge(ColorModel::CielabD50, ColorModel::XyzD50, cielab_to_xyz_d50),
    edge(ColorModel::CielchD50, ColorModel::CielabD50, polar_to_cartesian),
    edge(ColorModel::OklchD65, ColorModel::OklabD65, polar_to_cartesian),
    edge(ColorModel::CielabD50, ColorModel::CielchD50, cartesian_to_polar),
    edge(ColorModel::OklabD65, ColorModel::OklchD65, cartesian_to_polar),
];

/// The full edge list.
pub fn conversions() -> &'static [Conversion] {
    &CONVERSIONS
}

/// Every model reachable from `(model, value)`, with its converted value.
///
/// The result always contains the seed pair itself. Each reachable model
/// is computed along the first path that reaches it; a model already in
/// the map is never recomputed, which also keeps the bidirectional edges
/// from looping.
pub fn all_conversions(model: ColorModel, value: GenericColor) -> HashMap<ColorModel, GenericColor> {
    let mut result = HashMap::with_capacity(CONVERSIONS.len());
    result.insert(model, value);
    expand(model, &mut result);
    result
}

fn expand(model: ColorModel, result: &mut HashMap<ColorModel, GenericColor>) {
    let Some(source) = result.get(&model).copied() else {
        return;
    };
    for conversion in CONVERSIONS.iter().filter(|c| c.from == model) {
        if result.contains_key(&conversion.to) {
            continue;
        }
        result.insert(conversion.to, (conversion.function)(&source));
        expand(conversion.to, result);
    }
}

/// Converts `value` from one model to another.
///
/// Returns `None` when `to` is not reachable from `from`.
pub fn convert(from: ColorModel, value: GenericColor, to: ColorModel) -> Option<GenericColor> {
    all_conversions(from, value).get(&to).copied()
}
