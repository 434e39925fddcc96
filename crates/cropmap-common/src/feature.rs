//! GeoJSON feature collection model.
//!
//! The classification core only needs read access to named attributes and
//! bounding-extent queries, so geometries keep their raw coordinate arrays
//! and no topology is computed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bbox::BoundingBox;
use crate::error::{MapError, MapResult};
use crate::fields;

/// A GeoJSON position. Extra dimensions beyond x/y are carried but ignored.
pub type Position = Vec<f64>;

/// Geometry with raw GeoJSON coordinate arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
}

impl Geometry {
    /// Bounding extent over every position in the geometry.
    pub fn extent(&self) -> Option<BoundingBox> {
        BoundingBox::of_points(self.positions().filter_map(|p| {
            if p.len() >= 2 {
                Some((p[0], p[1]))
            } else {
                None
            }
        }))
    }

    fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Geometry::Point { coordinates } => Box::new(std::iter::once(coordinates)),
            Geometry::MultiPoint { coordinates } | Geometry::LineString { coordinates } => {
                Box::new(coordinates.iter())
            }
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                Box::new(coordinates.iter().flatten())
            }
            Geometry::MultiPolygon { coordinates } => {
                Box::new(coordinates.iter().flatten().flatten())
            }
        }
    }
}

/// A single GeoJSON feature: a property map plus an optional geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,

    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// Look up a numeric attribute. Missing, non-numeric, and non-finite
    /// values all read as `None`.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.properties
            .get(field)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
    }

    /// Look up a string attribute.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.properties.get(field).and_then(Value::as_str)
    }

    /// Display name: `Country`, falling back to `ADMIN`.
    pub fn display_name(&self) -> Option<&str> {
        self.text(fields::COUNTRY).or_else(|| self.text(fields::ADMIN))
    }

    /// Bounding extent of the feature's geometry.
    pub fn extent(&self) -> Option<BoundingBox> {
        self.geometry.as_ref().and_then(Geometry::extent)
    }
}

/// A parsed GeoJSON feature collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parse a GeoJSON document. An empty `features` array parses fine;
    /// downstream layer building reports it as "no layer produced".
    pub fn from_json(json: &str) -> MapResult<Self> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        if collection.kind != "FeatureCollection" {
            return Err(MapError::InvalidGeoJson(format!(
                "expected FeatureCollection, got {}",
                collection.kind
            )));
        }
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
