//! Rendering options.

use serde::{Deserialize, Serialize};

use crate::dots::DOT_RADIUS_SCALE;

/// Tunable visual parameters. Class counts are not here: they are fixed by
/// the palette lengths so ramp and breakpoints can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Multiplier applied to `sqrt(area)` for dot radii.
    pub dot_scale: f64,

    /// Class count for the dot-size legend entries.
    pub dot_size_classes: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dot_scale: DOT_RADIUS_SCALE,
            dot_size_classes: 8,
        }
    }
}

impl RenderOptions {
    /// Load options from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Ok(val) = std::env::var("CROPMAP_DOT_SCALE") {
            if let Ok(scale) = val.parse() {
                options.dot_scale = scale;
            }
        }

        if let Ok(val) = std::env::var("CROPMAP_DOT_SIZE_CLASSES") {
            if let Ok(classes) = val.parse() {
                options.dot_size_classes = classes;
            }
        }

        options
    }

    /// Validate the options.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.dot_scale.is_finite() && self.dot_scale > 0.0) {
            return Err("dot_scale must be a positive number".to_string());
        }
        if self.dot_size_classes < 2 {
            return Err("dot_size_classes must be >= 2".to_string());
        }
        Ok(())
    }
}
