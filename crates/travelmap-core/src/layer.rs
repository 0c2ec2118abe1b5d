// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tile layer descriptions.
//!
//! A [`TileLayer`] only declares where tiles come from and where they are
//! valid. Fetching and drawing them is left to whichever map engine consumes
//! the description.

use serde::Serialize;

use crate::geo::{LatLngBounds, TileCoord};

/// Default zoom range of a tile layer with no explicit limits.
pub const DEFAULT_MIN_ZOOM: u8 = 0;
pub const DEFAULT_MAX_ZOOM: u8 = 18;

/// Data credit shown alongside a tile layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attribution {
    /// Plain-text credit line
    pub text: &'static str,
    /// Where the credit line links to
    pub url: &'static str,
    /// Markup form with every source linked, for HTML front-ends
    pub html: &'static str,
}

/// A raster layer addressed by `{z}/{x}/{y}` URL templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    url_template: String,
    attribution: Option<Attribution>,
    class_name: Option<String>,
    min_zoom: u8,
    max_zoom: u8,
    bounds: Option<LatLngBounds>,
}

impl TileLayer {
    /// Create a layer for the given URL template with default options.
    #[must_use]
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            attribution: None,
            class_name: None,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            bounds: None,
        }
    }

    #[must_use]
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Restrict the layer to an inclusive zoom range.
    #[must_use]
    pub fn with_zoom_range(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom.max(min_zoom);
        self
    }

    /// Only request tiles overlapping `bounds`.
    #[must_use]
    pub fn with_bounds(mut self, bounds: LatLngBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    #[must_use]
    pub fn attribution(&self) -> Option<&Attribution> {
        self.attribution.as_ref()
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    #[must_use]
    pub const fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    #[must_use]
    pub const fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    #[must_use]
    pub fn bounds(&self) -> Option<&LatLngBounds> {
        self.bounds.as_ref()
    }

    /// Whether the layer draws anything at a (possibly fractional) zoom level.
    #[must_use]
    pub fn is_visible_at(&self, zoom: f64) -> bool {
        zoom >= f64::from(self.min_zoom) && zoom <= f64::from(self.max_zoom)
    }

    /// Whether a tile falls inside the layer's zoom range and bounds.
    #[must_use]
    pub fn covers(&self, tile: TileCoord) -> bool {
        if tile.zoom < self.min_zoom || tile.zoom > self.max_zoom {
            return false;
        }

        self.bounds
            .as_ref()
            .is_none_or(|bounds| bounds.overlaps(&tile.bounds()))
    }

    /// URL for a tile, or `None` if the layer does not cover it.
    #[must_use]
    pub fn tile_url(&self, tile: TileCoord) -> Option<String> {
        if !self.covers(tile) {
            return None;
        }

        Some(
            self.url_template
                .replace("{z}", &tile.zoom.to_string())
                .replace("{x}", &tile.x.to_string())
                .replace("{y}", &tile.y.to_string()),
        )
    }

    /// Resolve a relative template (`./tiles/...`) against `base_url`.
    ///
    /// Templates that already carry a scheme are returned unchanged.
    #[must_use]
    pub fn resolved_against(&self, base_url: &str) -> Self {
        Self {
            url_template: resolve_template(&self.url_template, base_url),
            ..self.clone()
        }
    }
}

fn resolve_template(template: &str, base_url: &str) -> String {
    if template.contains("://") || base_url.is_empty() {
        return template.to_string();
    }

    let relative = template.trim_start_matches("./").trim_start_matches('/');
    format!("{}/{}", base_url.trim_end_matches('/'), relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_layer() -> TileLayer {
        TileLayer::new("./tiles/visited/{z}/{x}/{y}.png")
            .with_zoom_range(6, 13)
            .with_bounds(LatLngBounds::from([[51.083107, 23.411576], [56.293815, 33.712001]]))
    }

    #[test]
    fn test_tile_url_substitutes_coordinates() {
        let layer = TileLayer::new("https://a.tile.openstreetmap.org/{z}/{x}/{y}.png");
        assert_eq!(
            layer.tile_url(TileCoord::new(36, 20, 6)).as_deref(),
            Some("https://a.tile.openstreetmap.org/6/36/20.png")
        );
    }

    #[test]
    fn test_tile_url_respects_zoom_range() {
        let layer = data_layer();
        assert!(layer.tile_url(TileCoord::new(18, 10, 5)).is_none());
        assert!(layer.tile_url(TileCoord::new(4628, 2600, 13)).is_some());
        assert!(layer.tile_url(TileCoord::new(9257, 5200, 14)).is_none());
    }

    #[test]
    fn test_tile_url_respects_bounds() {
        let layer = data_layer();
        assert_eq!(
            layer.tile_url(TileCoord::new(36, 20, 6)).as_deref(),
            Some("./tiles/visited/6/36/20.png")
        );
        // West of 23.41E at zoom 6
        assert!(layer.tile_url(TileCoord::new(35, 20, 6)).is_none());
        assert!(layer.tile_url(TileCoord::new(0, 0, 6)).is_none());
    }

    #[test]
    fn test_visibility_at_fractional_zoom() {
        let layer = data_layer();
        assert!(!layer.is_visible_at(5.5));
        assert!(layer.is_visible_at(6.0));
        assert!(layer.is_visible_at(12.9));
        assert!(!layer.is_visible_at(13.1));
    }

    #[test]
    fn test_zoom_range_is_ordered() {
        let layer = TileLayer::new("{z}/{x}/{y}").with_zoom_range(13, 6);
        assert_eq!((layer.min_zoom(), layer.max_zoom()), (6, 13));
    }

    #[test]
    fn test_resolve_relative_template() {
        let layer = data_layer();
        let with_slash = layer.resolved_against("http://localhost:8000/");
        let without_slash = layer.resolved_against("http://localhost:8000");
        assert_eq!(
            with_slash.url_template(),
            "http://localhost:8000/tiles/visited/{z}/{x}/{y}.png"
        );
        assert_eq!(with_slash.url_template(), without_slash.url_template());
        assert_eq!(with_slash.min_zoom(), 6);
        assert!(with_slash.bounds().is_some());
    }

    #[test]
    fn test_resolve_keeps_absolute_template() {
        let layer = TileLayer::new("https://a.tile.openstreetmap.org/{z}/{x}/{y}.png");
        let resolved = layer.resolved_against("http://localhost:8000/");
        assert_eq!(resolved.url_template(), layer.url_template());
    }
}
