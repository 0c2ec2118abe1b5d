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

//! Map state: which layers and controls are attached, and who listens for
//! layer changes.
//!
//! A [`Map`] does not draw anything. A front-end reads it every frame and
//! reports user selections back through [`Map::select_overlay`].

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::control::LayersControl;
use crate::error::MapError;
use crate::geo::LatLng;
use crate::layer::TileLayer;
use crate::legend::LegendControl;
use crate::overlay::OverlayId;

/// Initial camera of a map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: f64,
}

impl MapView {
    #[must_use]
    pub const fn new(center: LatLng, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

/// Raised when the active overlay of the layer switch changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerChangeEvent {
    pub id: OverlayId,
    /// Display name of the newly active overlay
    pub name: String,
}

/// Callback invoked for every [`LayerChangeEvent`].
pub type LayerChangeHandler = Box<dyn FnMut(&mut Map, &LayerChangeEvent) -> Result<(), MapError>>;

/// A map bound to a container, with its attached layers and controls.
pub struct Map {
    container_id: String,
    view: MapView,
    layers: Vec<Arc<TileLayer>>,
    legends: Vec<Arc<LegendControl>>,
    layers_control: Option<LayersControl>,
    layer_change_handlers: Vec<LayerChangeHandler>,
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("container_id", &self.container_id)
            .field("view", &self.view)
            .field("layers", &self.layers.len())
            .field("legends", &self.legends.len())
            .field("layers_control", &self.layers_control)
            .finish_non_exhaustive()
    }
}

impl Map {
    #[must_use]
    pub fn new(container_id: impl Into<String>, view: MapView) -> Self {
        Self {
            container_id: container_id.into(),
            view,
            layers: Vec::new(),
            legends: Vec::new(),
            layers_control: None,
            layer_change_handlers: Vec::new(),
        }
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[must_use]
    pub const fn view(&self) -> MapView {
        self.view
    }

    /// Tile layers currently on the map, bottom to top.
    #[must_use]
    pub fn layers(&self) -> &[Arc<TileLayer>] {
        &self.layers
    }

    #[must_use]
    pub fn has_layer(&self, layer: &Arc<TileLayer>) -> bool {
        self.layers.iter().any(|l| Arc::ptr_eq(l, layer))
    }

    /// Put a layer on the map. Adding the same handle twice is a no-op.
    pub fn add_layer(&mut self, layer: Arc<TileLayer>) {
        if !self.has_layer(&layer) {
            debug!("Adding tile layer {}", layer.url_template());
            self.layers.push(layer);
        }
    }

    /// Take a layer off the map. Returns false if it was not attached.
    pub fn remove_layer(&mut self, layer: &Arc<TileLayer>) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| !Arc::ptr_eq(l, layer));
        before != self.layers.len()
    }

    /// Legends currently attached, in attach order.
    #[must_use]
    pub fn attached_legends(&self) -> &[Arc<LegendControl>] {
        &self.legends
    }

    #[must_use]
    pub fn has_control(&self, legend: &Arc<LegendControl>) -> bool {
        self.legends.iter().any(|l| Arc::ptr_eq(l, legend))
    }

    /// Attach a legend. Attaching an already attached legend changes nothing.
    pub fn add_control(&mut self, legend: Arc<LegendControl>) {
        if !self.has_control(&legend) {
            debug!("Attaching legend '{}'", legend.description());
            self.legends.push(legend);
        }
    }

    /// Detach a legend. Returns false if it was not attached.
    pub fn remove_control(&mut self, legend: &Arc<LegendControl>) -> bool {
        let before = self.legends.len();
        self.legends.retain(|l| !Arc::ptr_eq(l, legend));
        before != self.legends.len()
    }

    pub fn set_layers_control(&mut self, control: LayersControl) {
        self.layers_control = Some(control);
    }

    #[must_use]
    pub fn layers_control(&self) -> Option<&LayersControl> {
        self.layers_control.as_ref()
    }

    pub fn layers_control_mut(&mut self) -> Option<&mut LayersControl> {
        self.layers_control.as_mut()
    }

    /// Distinct tile layers known to the map: those on it plus those offered
    /// by the layer switch.
    #[must_use]
    pub fn registered_layer_count(&self) -> usize {
        let offered = self
            .layers_control
            .iter()
            .flat_map(LayersControl::entries)
            .filter(|entry| !self.has_layer(&entry.layer))
            .count();
        self.layers.len() + offered
    }

    /// Register a callback for layer-change events.
    pub fn on_layer_change(&mut self, handler: LayerChangeHandler) {
        self.layer_change_handlers.push(handler);
    }

    /// Dispatch `event` to every handler in registration order.
    ///
    /// All handlers run even if one fails; the first error is returned.
    pub fn fire_layer_change(&mut self, event: &LayerChangeEvent) -> Result<(), MapError> {
        let mut handlers = std::mem::take(&mut self.layer_change_handlers);
        let mut result = Ok(());

        for handler in &mut handlers {
            if let Err(err) = handler(self, event) {
                if result.is_ok() {
                    result = Err(err);
                }
            }
        }

        // Handlers registered while dispatching go after the existing ones.
        handlers.append(&mut self.layer_change_handlers);
        self.layer_change_handlers = handlers;

        result
    }

    /// Make `id` the active overlay of the layer switch.
    ///
    /// Swaps the overlay tile layer on the map and fires a
    /// [`LayerChangeEvent`]. Returns `Ok(false)` when `id` is already active.
    ///
    /// A handler error is returned after the switch: the selection and the
    /// layer swap stay in place.
    pub fn select_overlay(&mut self, id: &OverlayId) -> Result<bool, MapError> {
        let control = self
            .layers_control
            .as_mut()
            .ok_or(MapError::NoLayersControl)?;

        let entry = control
            .entry(id)
            .cloned()
            .ok_or_else(|| MapError::UnknownOverlay(id.clone()))?;

        if control.selected() == Some(id) {
            return Ok(false);
        }

        let previous = control.selected_entry().map(|e| Arc::clone(&e.layer));
        control.select(id);

        if let Some(previous) = previous {
            self.remove_layer(&previous);
        }
        self.add_layer(Arc::clone(&entry.layer));

        self.fire_layer_change(&LayerChangeEvent {
            id: entry.id,
            name: entry.name,
        })?;

        Ok(true)
    }

    /// Serializable snapshot of the map configuration.
    #[must_use]
    pub fn summary(&self) -> MapSummary<'_> {
        MapSummary {
            container_id: &self.container_id,
            view: self.view,
            layers: self.layers.iter().map(AsRef::as_ref).collect(),
            legends: self.legends.iter().map(AsRef::as_ref).collect(),
            overlays: self
                .layers_control
                .iter()
                .flat_map(LayersControl::entries)
                .map(|entry| OverlaySummary {
                    id: &entry.id,
                    name: &entry.name,
                    layer: &entry.layer,
                })
                .collect(),
            active_overlay: self.layers_control.as_ref().and_then(LayersControl::selected),
        }
    }
}

/// Snapshot produced by [`Map::summary`].
#[derive(Debug, Serialize)]
pub struct MapSummary<'a> {
    pub container_id: &'a str,
    pub view: MapView,
    pub layers: Vec<&'a TileLayer>,
    pub legends: Vec<&'a LegendControl>,
    pub overlays: Vec<OverlaySummary<'a>>,
    pub active_overlay: Option<&'a OverlayId>,
}

/// Layer-switch entry within a [`MapSummary`].
#[derive(Debug, Serialize)]
pub struct OverlaySummary<'a> {
    pub id: &'a OverlayId,
    pub name: &'a str,
    pub layer: &'a TileLayer,
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn map() -> Map {
        Map::new("map", MapView::new(LatLng::new(0.0, 0.0), 3.0))
    }

    fn control_with(ids: &[&str]) -> LayersControl {
        let mut control = LayersControl::new();
        for id in ids {
            control.insert((*id).into(), id.to_uppercase(), Arc::new(TileLayer::new(*id)));
        }
        control
    }

    #[test]
    fn test_add_layer_is_idempotent() {
        let mut map = map();
        let layer = Arc::new(TileLayer::new("a"));
        map.add_layer(Arc::clone(&layer));
        map.add_layer(Arc::clone(&layer));
        assert_eq!(map.layers().len(), 1);

        // Equal value, different handle
        map.add_layer(Arc::new(TileLayer::new("a")));
        assert_eq!(map.layers().len(), 2);
    }

    #[test]
    fn test_control_attach_detach() {
        let mut map = map();
        let legend = Arc::new(LegendControl::new("x", Vec::new()));

        assert!(!map.remove_control(&legend));
        map.add_control(Arc::clone(&legend));
        map.add_control(Arc::clone(&legend));
        assert_eq!(map.attached_legends().len(), 1);
        assert!(map.remove_control(&legend));
        assert!(!map.has_control(&legend));
    }

    #[test]
    fn test_select_without_control() {
        let mut map = map();
        assert_eq!(
            map.select_overlay(&"a".into()),
            Err(MapError::NoLayersControl)
        );
    }

    #[test]
    fn test_select_swaps_layers_and_fires() {
        let mut map = map();
        map.set_layers_control(control_with(&["a", "b"]));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        map.on_layer_change(Box::new(move |_, event| {
            sink.borrow_mut().push(event.clone());
            Ok(())
        }));

        assert_eq!(map.select_overlay(&"a".into()), Ok(true));
        assert_eq!(map.select_overlay(&"b".into()), Ok(true));

        let control = map.layers_control().unwrap();
        let b_layer = &control.entry(&"b".into()).unwrap().layer;
        assert_eq!(map.layers().len(), 1);
        assert!(map.has_layer(b_layer));

        let names: Vec<String> = seen.borrow().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_reselect_fires_nothing() {
        let mut map = map();
        map.set_layers_control(control_with(&["a"]));

        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        map.on_layer_change(Box::new(move |_, _| {
            *sink.borrow_mut() += 1;
            Ok(())
        }));

        assert_eq!(map.select_overlay(&"a".into()), Ok(true));
        assert_eq!(map.select_overlay(&"a".into()), Ok(false));
        assert_eq!(*count.borrow(), 1);
        assert_eq!(map.layers().len(), 1);
    }

    #[test]
    fn test_select_unknown_leaves_state() {
        let mut map = map();
        map.set_layers_control(control_with(&["a"]));
        map.select_overlay(&"a".into()).unwrap();

        let err = map.select_overlay(&"zzz".into()).unwrap_err();
        assert_eq!(err, MapError::UnknownOverlay("zzz".into()));
        assert_eq!(
            map.layers_control().and_then(LayersControl::selected),
            Some(&OverlayId::from("a"))
        );
        assert_eq!(map.layers().len(), 1);
    }

    #[test]
    fn test_select_stays_switched_on_handler_error() {
        let mut map = map();
        map.set_layers_control(control_with(&["a", "b"]));
        map.select_overlay(&"a".into()).unwrap();
        map.on_layer_change(Box::new(|_, event| Err(MapError::UnknownOverlay(event.id.clone()))));

        assert_eq!(
            map.select_overlay(&"b".into()),
            Err(MapError::UnknownOverlay("b".into()))
        );

        let control = map.layers_control().unwrap();
        assert_eq!(control.selected(), Some(&OverlayId::from("b")));
        assert_eq!(map.layers().len(), 1);
        assert!(map.has_layer(&control.entry(&"b".into()).unwrap().layer));
    }

    #[test]
    fn test_all_handlers_run_first_error_wins() {
        let mut map = map();
        let ran = Rc::new(RefCell::new(0));

        map.on_layer_change(Box::new(|_, event| Err(MapError::UnknownOverlay(event.id.clone()))));
        let sink = Rc::clone(&ran);
        map.on_layer_change(Box::new(move |_, _| {
            *sink.borrow_mut() += 1;
            Err(MapError::NoLayersControl)
        }));

        let event = LayerChangeEvent {
            id: "x".into(),
            name: "X".to_string(),
        };
        assert_eq!(
            map.fire_layer_change(&event),
            Err(MapError::UnknownOverlay("x".into()))
        );
        assert_eq!(*ran.borrow(), 1);

        // Handlers survive dispatch
        let _ = map.fire_layer_change(&event);
        assert_eq!(*ran.borrow(), 2);
    }

    #[test]
    fn test_handler_can_mutate_map() {
        let mut map = map();
        let legend = Arc::new(LegendControl::new("x", Vec::new()));
        let attach = Arc::clone(&legend);
        map.on_layer_change(Box::new(move |map, _| {
            map.add_control(Arc::clone(&attach));
            Ok(())
        }));

        map.fire_layer_change(&LayerChangeEvent {
            id: "x".into(),
            name: "X".to_string(),
        })
        .unwrap();
        assert!(map.has_control(&legend));
    }

    #[test]
    fn test_registered_layer_count_dedups() {
        let mut map = map();
        map.add_layer(Arc::new(TileLayer::new("base")));
        map.set_layers_control(control_with(&["a", "b", "c"]));
        assert_eq!(map.registered_layer_count(), 4);

        map.select_overlay(&"a".into()).unwrap();
        assert_eq!(map.registered_layer_count(), 4);
    }
}
