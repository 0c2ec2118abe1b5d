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

//! Map start-up: layers, switch control and legend synchronisation.

use std::sync::Arc;

use log::{info, warn};

use crate::catalog::{build_base_layer, build_data_layers, INITIAL_CENTER, INITIAL_ZOOM};
use crate::control::LayersControl;
use crate::error::MapError;
use crate::map::{Map, MapView};
use crate::overlay::Overlay;

/// Options for [`init_with`].
#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    /// Base URL that relative overlay tile templates resolve against.
    /// `None` keeps the templates as they are.
    pub tiles_base_url: Option<String>,
}

/// Attach a layer switch offering every overlay, keyed by overlay id.
///
/// Overlays sharing an id collapse into one entry; the last one wins.
pub fn init_layers_control(map: &mut Map, overlays: &[Overlay]) {
    let mut control = LayersControl::new();
    for overlay in overlays {
        control.insert(overlay.id.clone(), overlay.name.clone(), Arc::clone(&overlay.layer));
    }
    map.set_layers_control(control);
}

/// Show `active`'s legend and hide every other overlay's legend.
///
/// Safe to call repeatedly: detaching a hidden legend and attaching a shown
/// one are both no-ops.
pub fn show_layer_legend(map: &mut Map, active: &Overlay, overlays: &[Overlay]) {
    for overlay in overlays.iter().filter(|o| o.id != active.id) {
        map.remove_control(&overlay.legend);
    }
    map.add_control(Arc::clone(&active.legend));
}

/// Build the travel map bound to `container_id` with default options.
pub fn init(container_id: &str) -> Result<Map, MapError> {
    init_with(container_id, &MapOptions::default())
}

/// Build the travel map bound to `container_id`.
///
/// The result has the base layer and the first overlay on it, that overlay's
/// legend attached, and a layer switch whose changes keep the legend in sync.
pub fn init_with(container_id: &str, options: &MapOptions) -> Result<Map, MapError> {
    if container_id.trim().is_empty() {
        return Err(MapError::InvalidContainer(container_id.to_string()));
    }

    let mut map = Map::new(container_id, MapView::new(INITIAL_CENTER, INITIAL_ZOOM));

    let overlays: Vec<Overlay> = match options.tiles_base_url.as_deref() {
        Some(base_url) => build_data_layers()
            .iter()
            .map(|overlay| overlay.with_tiles_base_url(base_url))
            .collect(),
        None => build_data_layers(),
    };
    let overlays: Arc<[Overlay]> = overlays.into();

    map.add_layer(Arc::new(build_base_layer()));
    init_layers_control(&mut map, &overlays);

    let known = Arc::clone(&overlays);
    map.on_layer_change(Box::new(move |map, event| {
        let Some(active) = known.iter().find(|overlay| overlay.id == event.id) else {
            warn!(
                "Layer change to unknown overlay '{}' ({}), legend left as is",
                event.id, event.name
            );
            return Err(MapError::UnknownOverlay(event.id.clone()));
        };
        show_layer_legend(map, active, &known);
        Ok(())
    }));

    if let Some(default_overlay) = overlays.first() {
        map.add_layer(Arc::clone(&default_overlay.layer));
        map.add_control(Arc::clone(&default_overlay.legend));
        if let Some(control) = map.layers_control_mut() {
            control.select(&default_overlay.id);
        }
    }

    info!(
        "Initialized map '{}' with {} overlays",
        map.container_id(),
        overlays.len()
    );

    Ok(map)
}
