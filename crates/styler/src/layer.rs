//! Layer building: from a feature collection and a (mode, year) selection to
//! per-feature visual properties.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use classifier::{area_share, Breakpoints};
use cropmap_common::{fields, Color, Feature, FeatureCollection, MapMode};

use crate::bivariate::style_bivariate;
use crate::dots::{dot_symbol, DotSymbol};
use crate::options::RenderOptions;
use crate::palette::{
    self, ColorMatrix, ColorRamp, BIVARIATE_STROKE, DOT_FILL, DOT_STROKE, POLYGON_STROKE,
    STROKE_WIDTH,
};
use crate::single::style_single;

/// Outline style shared by every polygon (or dot) in one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

/// The computed classification state for one (mode, year) selection.
///
/// Holds the breakpoints and color tables every styling call reads. Computed
/// wholesale and immutable afterwards, so a style pass can never observe a
/// half-updated classification; plain data, safely shared read-only across
/// threads.
#[derive(Debug, Clone)]
pub enum ModeStyle {
    Yield {
        year: u16,
        field: String,
        breaks: Option<Breakpoints>,
        ramp: ColorRamp,
    },
    Bivariate {
        year: u16,
        yield_field: String,
        area_field: String,
        ybreaks: Option<Breakpoints>,
        abreaks: Option<Breakpoints>,
        matrix: ColorMatrix,
    },
    DotDensity {
        year: u16,
        yield_field: String,
        area_field: String,
        breaks: Option<Breakpoints>,
        ramp: ColorRamp,
        /// Breaks over the raw area sample, used only for the size legend.
        size_breaks: Option<Breakpoints>,
    },
}

impl ModeStyle {
    /// Compute the classification state for a selection. Breakpoint class
    /// counts come from the palette dimensions, so ramp and breaks cannot
    /// disagree.
    pub fn compute(
        mode: MapMode,
        year: u16,
        collection: &FeatureCollection,
        options: &RenderOptions,
    ) -> ModeStyle {
        match mode {
            MapMode::Yield => {
                let field = fields::yield_field(year);
                let ramp = palette::yield_ramp();
                let sample = classifier::extract_sample(collection, &field);
                let breaks = Breakpoints::compute(&sample, ramp.len());
                ModeStyle::Yield {
                    year,
                    field,
                    breaks,
                    ramp,
                }
            }
            MapMode::Bivariate => {
                let yield_field = fields::yield_field(year);
                let area_field = fields::area_field(year);
                let matrix = palette::bivariate_matrix();

                let ysample = classifier::extract_sample(collection, &yield_field);
                let asample = classifier::extract_ratio_sample(collection, year);

                ModeStyle::Bivariate {
                    year,
                    ybreaks: Breakpoints::compute(&ysample, matrix.dim()),
                    abreaks: Breakpoints::compute(&asample, matrix.dim()),
                    yield_field,
                    area_field,
                    matrix,
                }
            }
            MapMode::DotDensity => {
                let yield_field = fields::yield_field(year);
                let area_field = fields::area_field(year);
                let ramp = palette::dot_density_ramp();

                let ysample = classifier::extract_sample(collection, &yield_field);
                let area_sample = classifier::extract_sample(collection, &area_field);

                ModeStyle::DotDensity {
                    year,
                    breaks: Breakpoints::compute(&ysample, ramp.len()),
                    size_breaks: Breakpoints::compute(&area_sample, options.dot_size_classes),
                    yield_field,
                    area_field,
                    ramp,
                }
            }
        }
    }

    pub fn mode(&self) -> MapMode {
        match self {
            ModeStyle::Yield { .. } => MapMode::Yield,
            ModeStyle::Bivariate { .. } => MapMode::Bivariate,
            ModeStyle::DotDensity { .. } => MapMode::DotDensity,
        }
    }

    pub fn year(&self) -> u16 {
        match self {
            ModeStyle::Yield { year, .. }
            | ModeStyle::Bivariate { year, .. }
            | ModeStyle::DotDensity { year, .. } => *year,
        }
    }

    /// Fill color for one feature. Pure lookup against the computed state.
    pub fn fill(&self, feature: &Feature) -> Color {
        match self {
            ModeStyle::Yield {
                field,
                breaks,
                ramp,
                ..
            } => style_single(feature, field, breaks.as_ref(), ramp),
            ModeStyle::Bivariate {
                yield_field,
                area_field,
                ybreaks,
                abreaks,
                matrix,
                ..
            } => style_bivariate(
                feature,
                yield_field,
                |f| area_share(f.number(area_field), f.number(fields::TOTAL_AREA)),
                ybreaks.as_ref(),
                abreaks.as_ref(),
                matrix,
            ),
            ModeStyle::DotDensity {
                yield_field,
                breaks,
                ramp,
                ..
            } => style_single(feature, yield_field, breaks.as_ref(), ramp),
        }
    }

    /// Polygon outline for this mode.
    pub fn stroke(&self) -> StrokeStyle {
        let color = match self {
            ModeStyle::Bivariate { .. } => BIVARIATE_STROKE,
            _ => POLYGON_STROKE,
        };
        StrokeStyle {
            color,
            width: STROKE_WIDTH,
        }
    }
}

/// A fully styled render pass for one map.
///
/// `fills` is index-aligned with the source collection's features; `dots` is
/// sparse (only features that earn a symbol) and empty outside dot-density
/// mode.
#[derive(Debug, Clone, Serialize)]
pub struct StyledLayer {
    pub mode: MapMode,
    pub year: u16,
    pub stroke: StrokeStyle,
    pub fills: Vec<Color>,
    pub dots: Vec<DotSymbol>,
    pub dot_fill: Option<Color>,
    pub dot_stroke: Option<StrokeStyle>,
}

/// Build the styled layer for a selection, or `None` when the collection is
/// empty and no layer can be produced.
pub fn build_layer(
    mode: MapMode,
    year: u16,
    collection: &FeatureCollection,
    options: &RenderOptions,
) -> Option<StyledLayer> {
    if collection.is_empty() {
        info!(%mode, year, "no features, no layer produced");
        return None;
    }

    let style = ModeStyle::compute(mode, year, collection, options);
    Some(styled_layer(&style, collection, options))
}

/// Style every feature against an already-computed classification state.
pub fn styled_layer(
    style: &ModeStyle,
    collection: &FeatureCollection,
    options: &RenderOptions,
) -> StyledLayer {
    let fills: Vec<Color> = collection
        .features
        .par_iter()
        .map(|f| style.fill(f))
        .collect();

    let (dots, dot_fill, dot_stroke) = match style {
        ModeStyle::DotDensity { area_field, .. } => {
            let dots: Vec<DotSymbol> = collection
                .features
                .par_iter()
                .filter_map(|f| dot_symbol(f, area_field, options.dot_scale))
                .collect();
            (
                dots,
                Some(DOT_FILL),
                Some(StrokeStyle {
                    color: DOT_STROKE,
                    width: STROKE_WIDTH,
                }),
            )
        }
        _ => (Vec::new(), None, None),
    };

    debug!(
        mode = %style.mode(),
        year = style.year(),
        features = fills.len(),
        dots = dots.len(),
        "styled layer"
    );

    StyledLayer {
        mode: style.mode(),
        year: style.year(),
        stroke: style.stroke(),
        fills,
        dots,
        dot_fill,
        dot_stroke,
    }
}
