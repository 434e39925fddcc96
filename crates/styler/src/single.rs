//! Single-variable choropleth styling.

use classifier::{classify, Breakpoints};
use cropmap_common::{Color, Feature};

use crate::palette::ColorRamp;

/// Fill color for one feature from one classified attribute.
///
/// Pure function of its inputs; safe to call per render, per feature,
/// arbitrarily often. Missing values and absent breakpoints (empty sample)
/// style as the neutral no-data fill.
pub fn style_single(
    feature: &Feature,
    field: &str,
    breaks: Option<&Breakpoints>,
    ramp: &ColorRamp,
) -> Color {
    ramp.color_for(classify(breaks, feature.number(field)))
}
