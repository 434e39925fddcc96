//! Error types for the cropmap crates.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Primary error type for classification and styling operations.
#[derive(Debug, Error)]
pub enum MapError {
    /// The input document is not a usable GeoJSON feature collection.
    #[error("invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    /// A required attribute field is absent from every feature.
    #[error("field not found in any feature: {0}")]
    FieldNotFound(String),

    /// The mode string is not one of the supported visualization modes.
    #[error("invalid map mode: {0}")]
    InvalidMode(String),

    /// The feature collection contains no features.
    #[error("feature collection is empty")]
    EmptyCollection,

    /// A color table failed validation (bad hex, wrong length, non-square).
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// Filesystem error while reading input data.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        MapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::InvalidGeoJson(err.to_string())
    }
}
