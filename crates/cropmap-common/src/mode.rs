//! Visualization mode selector.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MapError;

/// The three supported visualization modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    /// Single-variable choropleth on yield.
    Yield,
    /// 5x5 matrix choropleth on yield and area share.
    Bivariate,
    /// Yield choropleth background with area-sized dot overlay.
    DotDensity,
}

impl MapMode {
    pub const ALL: &'static [MapMode] = &[Self::Yield, Self::Bivariate, Self::DotDensity];

    /// The wire name, matching the UI mode selector values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yield => "yield",
            Self::Bivariate => "bivariate",
            Self::DotDensity => "dotdensity",
        }
    }
}

impl FromStr for MapMode {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yield" => Ok(Self::Yield),
            "bivariate" => Ok(Self::Bivariate),
            "dotdensity" => Ok(Self::DotDensity),
            other => Err(MapError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for MapMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
