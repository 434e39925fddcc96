//! Attribute field naming contract.
//!
//! Source data carries one column per statistic per year (`Yield_2019`,
//! `Area_2019`, ...). The exact spellings below, including the doubled
//! total-area name, come from the dataset and must not be normalized.

use crate::error::{MapError, MapResult};
use crate::feature::FeatureCollection;

/// Total harvested area across all years, in hectares.
pub const TOTAL_AREA: &str = "Total_Area_Total_Area(ha)";

/// Primary display-name attribute.
pub const COUNTRY: &str = "Country";

/// Fallback display-name attribute.
pub const ADMIN: &str = "ADMIN";

/// Yield column for a year (tons/ha).
pub fn yield_field(year: u16) -> String {
    format!("Yield_{year}")
}

/// Harvested-area column for a year (ha).
pub fn area_field(year: u16) -> String {
    format!("Area_{year}")
}

/// Production column for a year.
pub fn prod_field(year: u16) -> String {
    format!("Prod_{year}")
}

/// Check that the year's columns exist somewhere in the collection.
///
/// A field counts as present when at least one feature carries a numeric
/// value for it. This catches a typo'd or out-of-range year at load time;
/// per-feature gaps at style time still render as no-data.
pub fn validate_fields(collection: &FeatureCollection, year: u16) -> MapResult<()> {
    for field in [yield_field(year), area_field(year), TOTAL_AREA.to_string()] {
        let present = collection
            .features
            .iter()
            .any(|f| f.number(&field).is_some());
        if !present {
            return Err(MapError::FieldNotFound(field));
        }
    }
    Ok(())
}
