//! Legend data derived from the computed classification state.
//!
//! Legends are built only from a [`ModeStyle`], never from a fresh sample,
//! so the legend always shows exactly the breakpoints and colors the map was
//! styled with.

use serde::Serialize;

use classifier::{Breakpoints, ClassIndex};

use crate::dots::dot_radius;
use crate::layer::ModeStyle;
use crate::options::RenderOptions;
use crate::palette::{ColorRamp, DOT_FILL, NO_DATA_FILL};
use cropmap_common::Color;

/// One class swatch in a ramp legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RampEntry {
    pub lower: f64,
    pub upper: f64,
    pub color: Color,
}

/// One row of the bivariate legend: the yield range plus the row's colors in
/// area-share order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub lower: f64,
    pub upper: f64,
    pub colors: Vec<Color>,
}

/// One dot-size swatch: the area range and the rendered radius of its upper
/// bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeEntry {
    pub lower: f64,
    pub upper: f64,
    pub radius: f64,
}

/// Legend contents for one (mode, year) selection.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LegendSpec {
    Ramp {
        title: String,
        no_data: Color,
        entries: Vec<RampEntry>,
    },
    Matrix {
        title: String,
        rows: Vec<MatrixRow>,
    },
    DotDensity {
        color_title: String,
        size_title: String,
        dot_fill: Color,
        entries: Vec<RampEntry>,
        sizes: Vec<SizeEntry>,
    },
}

impl LegendSpec {
    /// Legend for an already-computed style state.
    pub fn for_style(style: &ModeStyle, options: &RenderOptions) -> LegendSpec {
        match style {
            ModeStyle::Yield { breaks, ramp, .. } => LegendSpec::Ramp {
                title: "Yield (tons/ha)".to_string(),
                no_data: NO_DATA_FILL,
                entries: ramp_entries(breaks.as_ref(), ramp),
            },
            ModeStyle::Bivariate {
                ybreaks, matrix, ..
            } => {
                let rows = match ybreaks {
                    Some(breaks) => (0..matrix.dim())
                        .filter_map(|row| {
                            let (lower, upper) =
                                breaks.class_bounds(row.min(breaks.class_count() - 1))?;
                            Some(MatrixRow {
                                lower,
                                upper,
                                colors: (0..matrix.dim())
                                    .map(|col| {
                                        matrix
                                            .color_for(ClassIndex::Class(row), ClassIndex::Class(col))
                                    })
                                    .collect(),
                            })
                        })
                        .collect(),
                    None => Vec::new(),
                };
                LegendSpec::Matrix {
                    title: "Yield (t/ha)".to_string(),
                    rows,
                }
            }
            ModeStyle::DotDensity {
                breaks,
                ramp,
                size_breaks,
                ..
            } => LegendSpec::DotDensity {
                color_title: "Yield (t/ha)".to_string(),
                size_title: "Dot Size: Area Harvested (ha)".to_string(),
                dot_fill: DOT_FILL,
                entries: ramp_entries(breaks.as_ref(), ramp),
                sizes: size_entries(size_breaks.as_ref(), options.dot_scale),
            },
        }
    }
}

/// Swatch entries for a classified ramp; empty when the field had no sample.
fn ramp_entries(breaks: Option<&Breakpoints>, ramp: &ColorRamp) -> Vec<RampEntry> {
    let Some(breaks) = breaks else {
        return Vec::new();
    };

    (0..breaks.class_count())
        .filter_map(|i| {
            let (lower, upper) = breaks.class_bounds(i)?;
            Some(RampEntry {
                lower,
                upper,
                color: ramp.color_for(ClassIndex::Class(i)),
            })
        })
        .collect()
}

/// Dot-size entries: one per class, radius taken at the class upper bound
/// with the same scaling the symbols use.
fn size_entries(breaks: Option<&Breakpoints>, scale: f64) -> Vec<SizeEntry> {
    let Some(breaks) = breaks else {
        return Vec::new();
    };

    (0..breaks.class_count())
        .filter_map(|i| {
            let (lower, upper) = breaks.class_bounds(i)?;
            Some(SizeEntry {
                lower,
                upper,
                radius: dot_radius(upper, scale),
            })
        })
        .collect()
}
