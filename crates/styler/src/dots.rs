//! Dot-density symbol geometry.

use serde::{Deserialize, Serialize};

use cropmap_common::Feature;

/// Default radius scale. Chosen so dots stay legible at the map's
/// projection units; a visual tuning knob, not a derived statistic.
pub const DOT_RADIUS_SCALE: f64 = 0.0035;

/// A sized point symbol at the center of a feature's extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotSymbol {
    /// Center of the feature's bounding extent, in projection units.
    pub center: (f64, f64),
    /// Symbol radius in projection pixels.
    pub radius: f64,
}

/// Radius for an area value: `sqrt(area) * scale`. Shared by the symbol
/// builder and the dot-size legend so both stay in step.
pub fn dot_radius(area: f64, scale: f64) -> f64 {
    area.sqrt() * scale
}

/// Dot symbol for one feature, or `None` when no dot should be drawn:
/// missing, zero, or negative area, or a feature without a geometry.
pub fn dot_symbol(feature: &Feature, area_field: &str, scale: f64) -> Option<DotSymbol> {
    let area = feature.number(area_field).filter(|a| *a > 0.0)?;
    let extent = feature.extent()?;

    Some(DotSymbol {
        center: extent.center(),
        radius: dot_radius(area, scale),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropmap_common::feature::FeatureCollection;

    fn collection(area: &str, with_geometry: bool) -> FeatureCollection {
        let geometry = if with_geometry {
            r##"{"type": "Polygon", "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 6.0], [0.0, 6.0], [0.0, 0.0]]]}"##
        } else {
            "null"
        };
        FeatureCollection::from_json(&format!(
            r##"{{
                "type": "FeatureCollection",
                "features": [{{"properties": {{"Area_2019": {area}}}, "geometry": {geometry}}}]
            }}"##
        ))
        .unwrap()
    }

    #[test]
    fn test_radius_scaling() {
        let c = collection("10000", true);
        let dot = dot_symbol(&c.features[0], "Area_2019", DOT_RADIUS_SCALE).unwrap();

        assert!((dot.radius - 0.35).abs() < 1e-9);
        assert_eq!(dot.center, (5.0, 3.0));
    }

    #[test]
    fn test_zero_area_no_dot() {
        let c = collection("0", true);
        assert!(dot_symbol(&c.features[0], "Area_2019", DOT_RADIUS_SCALE).is_none());
    }

    #[test]
    fn test_negative_area_no_dot() {
        let c = collection("-5", true);
        assert!(dot_symbol(&c.features[0], "Area_2019", DOT_RADIUS_SCALE).is_none());
    }

    #[test]
    fn test_missing_area_no_dot() {
        let c = collection("null", true);
        assert!(dot_symbol(&c.features[0], "Area_2019", DOT_RADIUS_SCALE).is_none());
    }

    #[test]
    fn test_missing_geometry_no_dot() {
        let c = collection("10000", false);
        assert!(dot_symbol(&c.features[0], "Area_2019", DOT_RADIUS_SCALE).is_none());
    }
}
