//! Fixed color tables and the ramp/matrix types that index into them.
//!
//! The hex values are part of the visual contract with the legend; changing
//! them changes the product, so they live here as constants rather than in
//! runtime configuration.

use classifier::ClassIndex;
use cropmap_common::{Color, MapError, MapResult};

/// Neutral fill for features with no usable data. Not part of any ramp.
pub const NO_DATA_FILL: Color = Color::new(0xcc, 0xcc, 0xcc);

/// Polygon outline for the single-variable and dot-density backgrounds.
pub const POLYGON_STROKE: Color = Color::new(0x55, 0x55, 0x55);

/// Polygon outline for the bivariate mode.
pub const BIVARIATE_STROKE: Color = Color::new(0x44, 0x44, 0x44);

/// Dot symbol fill (saddle brown).
pub const DOT_FILL: Color = Color::new(0x8b, 0x45, 0x13);

/// Dot symbol outline.
pub const DOT_STROKE: Color = Color::new(0x33, 0x33, 0x33);

/// Outline width shared by every layer, in projection pixels.
pub const STROKE_WIDTH: f64 = 0.5;

/// 5-class sequential greens for the yield choropleth.
const YIELD_COLORS: [Color; 5] = [
    Color::new(0xed, 0xf8, 0xe9),
    Color::new(0xba, 0xe4, 0xb3),
    Color::new(0x74, 0xc4, 0x76),
    Color::new(0x31, 0xa3, 0x54),
    Color::new(0x00, 0x6d, 0x2c),
];

/// 10-class sequential blues for the dot-density background; finer than the
/// 5-class ramp since this mode layers two signals.
const DOT_DENSITY_COLORS: [Color; 10] = [
    Color::new(0xf7, 0xfb, 0xff),
    Color::new(0xe3, 0xee, 0xf7),
    Color::new(0xd0, 0xe2, 0xef),
    Color::new(0xbc, 0xd5, 0xe7),
    Color::new(0xa9, 0xc9, 0xdf),
    Color::new(0x95, 0xbc, 0xd6),
    Color::new(0x82, 0xb0, 0xce),
    Color::new(0x6e, 0xa3, 0xc6),
    Color::new(0x5b, 0x97, 0xbe),
    Color::new(0x47, 0x8a, 0xb6),
];

/// 5x5 bivariate table. Rows index the yield class, columns the area-share
/// class; the diagonal runs green (high yield, low share) to yellow.
const BIVARIATE_COLORS: [[Color; 5]; 5] = [
    [
        Color::new(0x0d, 0x80, 0x40),
        Color::new(0x2c, 0x7d, 0x3d),
        Color::new(0x51, 0x79, 0x38),
        Color::new(0x75, 0x75, 0x30),
        Color::new(0x99, 0x71, 0x2a),
    ],
    [
        Color::new(0x18, 0xa5, 0x4a),
        Color::new(0x44, 0xa3, 0x47),
        Color::new(0x71, 0xa1, 0x41),
        Color::new(0x9d, 0x9b, 0x0b),
        Color::new(0xc9, 0x98, 0x2c),
    ],
    [
        Color::new(0x50, 0xb9, 0x5a),
        Color::new(0x76, 0xc0, 0x49),
        Color::new(0xa3, 0xc6, 0x3a),
        Color::new(0xd5, 0xc3, 0x28),
        Color::new(0xf9, 0xc3, 0x14),
    ],
    [
        Color::new(0x81, 0xc6, 0x73),
        Color::new(0xa7, 0xd0, 0x60),
        Color::new(0xd8, 0xe1, 0x46),
        Color::new(0xff, 0xe7, 0x2e),
        Color::new(0xff, 0xda, 0x04),
    ],
    [
        Color::new(0xd0, 0xe6, 0xc3),
        Color::new(0xdc, 0xe8, 0xa4),
        Color::new(0xea, 0xeb, 0x85),
        Color::new(0xf5, 0xee, 0x69),
        Color::new(0xf7, 0xed, 0x43),
    ],
];

/// An ordered color ramp, index-aligned with the classes of one
/// breakpoint sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRamp(Vec<Color>);

impl ColorRamp {
    /// A ramp from explicit colors. Empty ramps are a configuration error.
    pub fn new(colors: Vec<Color>) -> MapResult<Self> {
        if colors.is_empty() {
            return Err(MapError::InvalidPalette("ramp has no colors".to_string()));
        }
        Ok(Self(colors))
    }

    /// A ramp parsed from hex strings.
    pub fn from_hex(hex: &[&str]) -> MapResult<Self> {
        let colors = hex
            .iter()
            .map(|h| {
                Color::from_hex(h)
                    .ok_or_else(|| MapError::InvalidPalette(format!("bad hex color: {h}")))
            })
            .collect::<MapResult<Vec<Color>>>()?;
        Self::new(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Color for a class, clamped to the ramp length; `NoData` gets the
    /// neutral fill.
    pub fn color_for(&self, class: ClassIndex) -> Color {
        match class.clamp(self.0.len() - 1) {
            ClassIndex::Class(i) => self.0[i],
            ClassIndex::NoData => NO_DATA_FILL,
        }
    }
}

/// A square bivariate color table indexed by two class indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMatrix {
    rows: Vec<Vec<Color>>,
}

impl ColorMatrix {
    /// Build from rows, validating squareness. A non-square table would
    /// desynchronize the two classification axes.
    pub fn new(rows: Vec<Vec<Color>>) -> MapResult<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(MapError::InvalidPalette("matrix has no rows".to_string()));
        }
        for row in &rows {
            if row.len() != dim {
                return Err(MapError::InvalidPalette(format!(
                    "matrix is not square: {dim} rows but a row of {} colors",
                    row.len()
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Rows-of-hex constructor for custom tables.
    pub fn from_hex(rows: &[&[&str]]) -> MapResult<Self> {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|h| {
                        Color::from_hex(h)
                            .ok_or_else(|| MapError::InvalidPalette(format!("bad hex color: {h}")))
                    })
                    .collect::<MapResult<Vec<Color>>>()
            })
            .collect::<MapResult<Vec<Vec<Color>>>>()?;
        Self::new(rows)
    }

    /// Matrix dimension; equals the class count on both axes.
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Color for a (row, column) class pair. Either axis `NoData` gives the
    /// neutral fill; indices clamp to the matrix dimension.
    pub fn color_for(&self, row: ClassIndex, col: ClassIndex) -> Color {
        let max = self.dim() - 1;
        match (row.clamp(max), col.clamp(max)) {
            (ClassIndex::Class(r), ClassIndex::Class(c)) => self.rows[r][c],
            _ => NO_DATA_FILL,
        }
    }
}

/// The 5-class yield greens ramp.
pub fn yield_ramp() -> ColorRamp {
    ColorRamp(YIELD_COLORS.to_vec())
}

/// The 10-class dot-density blues ramp.
pub fn dot_density_ramp() -> ColorRamp {
    ColorRamp(DOT_DENSITY_COLORS.to_vec())
}

/// The 5x5 bivariate yield/area-share matrix.
pub fn bivariate_matrix() -> ColorMatrix {
    ColorMatrix {
        rows: BIVARIATE_COLORS.iter().map(|row| row.to_vec()).collect(),
    }
}
