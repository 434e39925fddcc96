//! Bivariate matrix styling.

use classifier::{classify, Breakpoints};
use cropmap_common::{Color, Feature};

use crate::palette::{ColorMatrix, NO_DATA_FILL};

/// Fill color from two independently classified values.
///
/// The first axis reads `yield_field` directly; the second comes from
/// `ratio_fn` (typically the derived area share). Either value missing makes
/// the feature no-data before classification is consulted, and both class
/// indices clamp to the matrix dimension to guard against a degraded class
/// count.
pub fn style_bivariate<F>(
    feature: &Feature,
    yield_field: &str,
    ratio_fn: F,
    ybreaks: Option<&Breakpoints>,
    abreaks: Option<&Breakpoints>,
    matrix: &ColorMatrix,
) -> Color
where
    F: Fn(&Feature) -> Option<f64>,
{
    let y = feature.number(yield_field);
    let a = ratio_fn(feature);
    if y.is_none() || a.is_none() {
        return NO_DATA_FILL;
    }

    matrix.color_for(classify(ybreaks, y), classify(abreaks, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use classifier::area_share;
    use cropmap_common::feature::FeatureCollection;
    use cropmap_common::fields;

    fn feature_with(yield_v: &str, area: &str, total: &str) -> FeatureCollection {
        FeatureCollection::from_json(&format!(
            r##"{{
                "type": "FeatureCollection",
                "features": [{{
                    "properties": {{
                        "Yield_2019": {yield_v},
                        "Area_2019": {area},
                        "Total_Area_Total_Area(ha)": {total}
                    }},
                    "geometry": null
                }}]
            }}"##
        ))
        .unwrap()
    }

    fn ratio_2019(f: &Feature) -> Option<f64> {
        area_share(f.number("Area_2019"), f.number(fields::TOTAL_AREA))
    }

    #[test]
    fn test_matrix_cell_selection() {
        let collection = feature_with("5.0", "3000", "10000");
        let matrix = palette::bivariate_matrix();

        // Yield 5.0 falls in class 2, area share 0.3 in class 1.
        let ybreaks: Breakpoints = serde_json::from_str("[0, 2, 4, 6, 8, 10]").unwrap();
        let abreaks: Breakpoints = serde_json::from_str("[0, 0.2, 0.4, 0.6, 0.8, 1]").unwrap();

        assert_eq!(ybreaks.classify(Some(5.0)), classifier::ClassIndex::Class(2));
        assert_eq!(abreaks.classify(Some(0.3)), classifier::ClassIndex::Class(1));

        let fill = style_bivariate(
            &collection.features[0],
            "Yield_2019",
            ratio_2019,
            Some(&ybreaks),
            Some(&abreaks),
            &matrix,
        );

        assert_eq!(
            fill,
            matrix.color_for(
                classifier::ClassIndex::Class(2),
                classifier::ClassIndex::Class(1)
            )
        );
    }

    #[test]
    fn test_missing_yield_is_no_data() {
        let collection = feature_with("null", "3000", "10000");
        let matrix = palette::bivariate_matrix();
        let breaks = Breakpoints::compute(&[1.0, 9.0], 5);

        let fill = style_bivariate(
            &collection.features[0],
            "Yield_2019",
            ratio_2019,
            breaks.as_ref(),
            breaks.as_ref(),
            &matrix,
        );
        assert_eq!(fill, palette::NO_DATA_FILL);
    }

    #[test]
    fn test_zero_total_area_is_no_data() {
        let collection = feature_with("5.0", "3000", "0");
        let matrix = palette::bivariate_matrix();
        let breaks = Breakpoints::compute(&[1.0, 9.0], 5);

        let fill = style_bivariate(
            &collection.features[0],
            "Yield_2019",
            ratio_2019,
            breaks.as_ref(),
            breaks.as_ref(),
            &matrix,
        );
        assert_eq!(fill, palette::NO_DATA_FILL);
    }
}
