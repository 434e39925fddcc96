//! Sample extraction from feature collections.
//!
//! A sample is the ordered list of finite values one attribute takes across
//! a collection, recomputed per mode/year change. Filtering happens here so
//! breakpoint computation always sees clean input.

use cropmap_common::feature::FeatureCollection;
use cropmap_common::fields;
use tracing::debug;

use crate::derive::area_share;

/// Collect the finite values of one attribute across the collection.
pub fn extract_sample(collection: &FeatureCollection, field: &str) -> Vec<f64> {
    let sample: Vec<f64> = collection
        .features
        .iter()
        .filter_map(|f| f.number(field))
        .collect();
    debug!(
        field,
        values = sample.len(),
        features = collection.len(),
        "extracted sample"
    );
    sample
}

/// Collect the derived area-share ratio for a year across the collection.
///
/// Per feature: `Area_<year> / Total_Area_Total_Area(ha)` via
/// [`area_share`]; features where the ratio is undefined contribute nothing.
pub fn extract_ratio_sample(collection: &FeatureCollection, year: u16) -> Vec<f64> {
    let area = fields::area_field(year);
    collection
        .features
        .iter()
        .filter_map(|f| area_share(f.number(&area), f.number(fields::TOTAL_AREA)))
        .collect()
}
