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

//! The fixed set of layers and legends shown on the travel map.

use crate::geo::{LatLng, LatLngBounds};
use crate::layer::{Attribution, TileLayer};
use crate::legend::{LegendControl, LegendEntry};
use crate::overlay::Overlay;

pub const BASE_TILE_URL: &str = "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const BASE_LAYER_CLASS: &str = "base-map-tile";

pub const OSM_ATTRIBUTION: Attribution = Attribution {
    text: "Map data © OpenStreetMap contributors, CC-BY-SA",
    url: "https://www.openstreetmap.org/copyright",
    html: "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, \
           <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>",
};

pub const INITIAL_ZOOM: f64 = 7.0;
pub const INITIAL_CENTER: LatLng = LatLng::new(53.893009, 27.567444);

/// Zoom levels the overlay tile sets were rendered for
pub const DATA_MIN_ZOOM: u8 = 6;
pub const DATA_MAX_ZOOM: u8 = 13;

/// Extent of the overlay tile sets (Belarus)
pub const DATA_BOUNDS: [[f64; 2]; 2] = [[51.083107, 23.411576], [56.293815, 33.712001]];

pub const VISITED_ID: &str = "visited";
pub const HEAT_ID: &str = "heat";
pub const POPULAR_ID: &str = "popular";

/// OpenStreetMap base tiles.
#[must_use]
pub fn build_base_layer() -> TileLayer {
    TileLayer::new(BASE_TILE_URL)
        .with_class_name(BASE_LAYER_CLASS)
        .with_attribution(OSM_ATTRIBUTION)
}

/// Legend with `description` on top and one swatch per grade below.
#[must_use]
pub fn build_legend(description: &str, grades: Vec<LegendEntry>) -> LegendControl {
    LegendControl::new(description, grades)
}

fn data_tile_layer(url_template: &str) -> TileLayer {
    TileLayer::new(url_template)
        .with_zoom_range(DATA_MIN_ZOOM, DATA_MAX_ZOOM)
        .with_bounds(LatLngBounds::from(DATA_BOUNDS))
}

#[must_use]
pub fn build_visited_data_layer() -> Overlay {
    Overlay::new(
        VISITED_ID,
        "Наведаныя рэгіёны",
        data_tile_layer("./tiles/visited/{z}/{x}/{y}.png"),
        build_legend(
            "Наведаныя рэгіёны",
            vec![
                LegendEntry::new("gray", "нікога"),
                LegendEntry::new("orange", "1 падарожнік"),
                LegendEntry::new("green", ">1 падарожніка"),
            ],
        ),
    )
}

#[must_use]
pub fn build_heat_data_layer() -> Overlay {
    Overlay::new(
        HEAT_ID,
        "Наведаныя рэгіёны па папулярнасці",
        data_tile_layer("./tiles/heat/{z}/{x}/{y}.png"),
        build_legend(
            "Наведанныя рэгіёны па папулярнасці",
            vec![
                LegendEntry::new("gray", "нікога"),
                LegendEntry::new("red", "1 падарожнік"),
                LegendEntry::new("orange", "1-3 падарожнікаў"),
                LegendEntry::new("yellow", "3-10 падарожнікаў"),
                LegendEntry::new("green", "10-30 падарожнікаў"),
                LegendEntry::new("aqua", "30-50 падарожнікаў"),
                LegendEntry::new("blue", "50-100 падарожнікаў"),
                LegendEntry::new("violet", "100-200 падарожнікаў"),
                LegendEntry::new("indigo", "200+ падарожнікаў"),
            ],
        ),
    )
}

#[must_use]
pub fn build_pop_data_layer() -> Overlay {
    Overlay::new(
        POPULAR_ID,
        "Самыя папулярныя рэгіёны",
        data_tile_layer("./tiles/popular/{z}/{x}/{y}.png"),
        build_legend(
            "Самыя папулярныя рэгіёны",
            vec![LegendEntry::new("red", "30+ падарожнікаў")],
        ),
    )
}

/// All overlays in display order. The first one is active on start-up.
#[must_use]
pub fn build_data_layers() -> Vec<Overlay> {
    vec![
        build_visited_data_layer(),
        build_heat_data_layer(),
        build_pop_data_layer(),
    ]
}
