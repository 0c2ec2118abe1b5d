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

//! Travel map configuration independent of any rendering engine.
//!
//! The crate declares what the travel map shows: an OpenStreetMap base layer,
//! three thematic overlays (visited regions, visit heat, most popular
//! regions), one legend per overlay, and a layer switch. It keeps the visible
//! legend in step with the active overlay. Drawing tiles and widgets is the
//! job of a front-end that reads the [`Map`] state every frame.
//!
//! # Quick Start
//!
//! ```
//! use travelmap_core::{init, OverlayId};
//!
//! let mut map = init("map").expect("valid container id");
//! assert_eq!(map.attached_legends().len(), 1);
//!
//! // The user picks another overlay in the layer switch
//! map.select_overlay(&OverlayId::from("heat")).expect("known overlay");
//! assert_eq!(
//!     map.attached_legends()[0].description(),
//!     "Наведанныя рэгіёны па папулярнасці"
//! );
//! ```
//!
//! # Building Blocks
//!
//! The individual builders are public for front-ends that compose their own
//! map:
//!
//! ```
//! use travelmap_core::{build_legend, LegendEntry, LegendLine};
//!
//! let legend = build_legend("Visited", vec![LegendEntry::new("green", "yes")]);
//! assert_eq!(legend.render()[0], LegendLine::Description("Visited"));
//! ```

pub mod catalog;
pub mod color;
pub mod control;
pub mod geo;
pub mod initializer;
pub mod layer;
pub mod legend;
pub mod map;
pub mod overlay;

mod error;

pub use catalog::{
    build_base_layer, build_data_layers, build_heat_data_layer, build_legend,
    build_pop_data_layer, build_visited_data_layer,
};
pub use color::{parse_css_color, Rgb};
pub use control::{LayersControl, LayersControlEntry};
pub use error::MapError;
pub use geo::{LatLng, LatLngBounds, TileCoord};
pub use initializer::{init, init_layers_control, init_with, show_layer_legend, MapOptions};
pub use layer::{Attribution, TileLayer};
pub use legend::{ControlPosition, LegendControl, LegendEntry, LegendLine};
pub use map::{LayerChangeEvent, LayerChangeHandler, Map, MapSummary, MapView, OverlaySummary};
pub use overlay::{Overlay, OverlayId};
