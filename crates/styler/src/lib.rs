//! Styling engine for the crop statistics maps.
//!
//! Turns classified attribute values into visual properties: choropleth
//! fills, bivariate matrix fills, and sized dot symbols, plus the layer,
//! legend, and view state built on top of them.

pub mod bivariate;
pub mod dots;
pub mod layer;
pub mod legend;
pub mod options;
pub mod palette;
pub mod single;
pub mod summary;
pub mod view;

pub use bivariate::style_bivariate;
pub use dots::{dot_radius, dot_symbol, DotSymbol};
pub use layer::{build_layer, ModeStyle, StrokeStyle, StyledLayer};
pub use legend::LegendSpec;
pub use options::RenderOptions;
pub use palette::{ColorMatrix, ColorRamp};
pub use single::style_single;
pub use summary::FeatureSummary;
pub use view::{CompareView, MapView};
