//! Per-feature summary data, the shape the hover tooltip displays.

use serde::Serialize;

use classifier::area_share;
use cropmap_common::{fields, Feature};

/// Raw and derived values for one feature in one year. Missing values stay
/// `None`; the display layer renders them as an em dash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSummary {
    /// `Country`, falling back to `ADMIN`, empty when neither is present.
    pub name: String,
    pub year: u16,
    pub area: Option<f64>,
    pub production: Option<f64>,
    #[serde(rename = "yield")]
    pub yield_value: Option<f64>,
    /// Harvested share of total area, in [0, 1].
    pub area_share: Option<f64>,
}

impl FeatureSummary {
    pub fn for_feature(feature: &Feature, year: u16) -> FeatureSummary {
        let area = feature.number(&fields::area_field(year));
        FeatureSummary {
            name: feature.display_name().unwrap_or_default().to_string(),
            year,
            area,
            production: feature.number(&fields::prod_field(year)),
            yield_value: feature.number(&fields::yield_field(year)),
            area_share: area_share(area, feature.number(fields::TOTAL_AREA)),
        }
    }

    /// Area share formatted as a percentage, e.g. `"12.34%"`.
    pub fn area_share_percent(&self) -> Option<String> {
        self.area_share.map(|s| format!("{:.2}%", s * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropmap_common::feature::FeatureCollection;

    #[test]
    fn test_summary_values() {
        let collection = FeatureCollection::from_json(
            r##"{
                "type": "FeatureCollection",
                "features": [{
                    "properties": {
                        "Country": "Freedonia",
                        "Yield_2019": 3.5,
                        "Area_2019": 1234,
                        "Prod_2019": 4319,
                        "Total_Area_Total_Area(ha)": 10000
                    },
                    "geometry": null
                }]
            }"##,
        )
        .unwrap();

        let summary = FeatureSummary::for_feature(&collection.features[0], 2019);
        assert_eq!(summary.name, "Freedonia");
        assert_eq!(summary.yield_value, Some(3.5));
        assert_eq!(summary.production, Some(4319.0));
        assert_eq!(summary.area_share_percent().as_deref(), Some("12.34%"));
    }

    #[test]
    fn test_summary_missing_values() {
        let collection = FeatureCollection::from_json(
            r##"{"type": "FeatureCollection", "features": [{"properties": {}, "geometry": null}]}"##,
        )
        .unwrap();

        let summary = FeatureSummary::for_feature(&collection.features[0], 2019);
        assert_eq!(summary.name, "");
        assert_eq!(summary.area, None);
        assert_eq!(summary.area_share_percent(), None);
    }
}
