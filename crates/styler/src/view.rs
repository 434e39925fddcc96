//! View state: the current (mode, year) selection and its classification
//! cache.
//!
//! Changing the selection invalidates the cache; `refresh` recomputes it
//! wholesale from a feature collection. A styling or legend call can only
//! ever see a complete, internally consistent state.

use tracing::info;

use cropmap_common::{Color, Feature, FeatureCollection, MapMode};

use crate::layer::{styled_layer, ModeStyle, StyledLayer};
use crate::legend::LegendSpec;
use crate::options::RenderOptions;
use crate::palette::NO_DATA_FILL;

/// State for one map pane.
#[derive(Debug, Clone)]
pub struct MapView {
    mode: MapMode,
    year: u16,
    options: RenderOptions,
    style: Option<ModeStyle>,
}

impl MapView {
    pub fn new(mode: MapMode, year: u16, options: RenderOptions) -> Self {
        Self {
            mode,
            year,
            options,
            style: None,
        }
    }

    pub fn mode(&self) -> MapMode {
        self.mode
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// Switch mode, dropping the now-stale classification cache.
    pub fn set_mode(&mut self, mode: MapMode) {
        if self.mode != mode {
            self.mode = mode;
            self.style = None;
        }
    }

    /// Switch year, dropping the now-stale classification cache.
    pub fn set_year(&mut self, year: u16) {
        if self.year != year {
            self.year = year;
            self.style = None;
        }
    }

    /// Recompute the classification cache from a collection. Replaces the
    /// previous state in one assignment.
    pub fn refresh(&mut self, collection: &FeatureCollection) {
        info!(mode = %self.mode, year = self.year, "recomputing classification");
        self.style = Some(ModeStyle::compute(
            self.mode,
            self.year,
            collection,
            &self.options,
        ));
    }

    /// The cached classification state, if `refresh` has run since the last
    /// selection change.
    pub fn style(&self) -> Option<&ModeStyle> {
        self.style.as_ref()
    }

    /// Fill for one feature from the cached state; neutral fill when the
    /// cache is cold.
    pub fn fill(&self, feature: &Feature) -> Color {
        match &self.style {
            Some(style) => style.fill(feature),
            None => NO_DATA_FILL,
        }
    }

    /// Build the styled layer, refreshing the cache if needed.
    pub fn layer(&mut self, collection: &FeatureCollection) -> Option<StyledLayer> {
        if collection.is_empty() {
            return None;
        }
        match &self.style {
            Some(style) => Some(styled_layer(style, collection, &self.options)),
            None => {
                self.refresh(collection);
                // Cache is warm now; style again from it.
                self.style
                    .as_ref()
                    .map(|style| styled_layer(style, collection, &self.options))
            }
        }
    }

    /// Legend for the cached state. `None` until `refresh` has run, so the
    /// legend can never be built from different breakpoints than the map.
    pub fn legend(&self) -> Option<LegendSpec> {
        self.style
            .as_ref()
            .map(|style| LegendSpec::for_style(style, &self.options))
    }
}

/// Two synchronized map panes: one shared mode, independent years.
#[derive(Debug, Clone)]
pub struct CompareView {
    pane_a: MapView,
    pane_b: MapView,
}

impl CompareView {
    pub fn new(mode: MapMode, year_a: u16, year_b: u16, options: RenderOptions) -> Self {
        Self {
            pane_a: MapView::new(mode, year_a, options.clone()),
            pane_b: MapView::new(mode, year_b, options),
        }
    }

    pub fn mode(&self) -> MapMode {
        self.pane_a.mode()
    }

    /// Change the mode on both panes.
    pub fn set_mode(&mut self, mode: MapMode) {
        self.pane_a.set_mode(mode);
        self.pane_b.set_mode(mode);
    }

    pub fn set_year_a(&mut self, year: u16) {
        self.pane_a.set_year(year);
    }

    pub fn set_year_b(&mut self, year: u16) {
        self.pane_b.set_year(year);
    }

    pub fn pane_a(&self) -> &MapView {
        &self.pane_a
    }

    pub fn pane_b(&self) -> &MapView {
        &self.pane_b
    }

    /// Rebuild both panes against a collection.
    pub fn layers(
        &mut self,
        collection: &FeatureCollection,
    ) -> (Option<StyledLayer>, Option<StyledLayer>) {
        (
            self.pane_a.layer(collection),
            self.pane_b.layer(collection),
        )
    }

    /// The legend follows pane A, as the reference pane.
    pub fn legend(&self) -> Option<LegendSpec> {
        self.pane_a.legend()
    }
}
