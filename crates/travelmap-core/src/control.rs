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

//! Layer-switch control.
//!
//! Holds the overlays the user can choose between. Selection is exclusive:
//! exactly one entry is active once the map has been initialised.

use std::sync::Arc;

use log::warn;

use crate::layer::TileLayer;
use crate::legend::ControlPosition;
use crate::overlay::OverlayId;

/// One selectable entry of the switch.
#[derive(Debug, Clone)]
pub struct LayersControlEntry {
    pub id: OverlayId,
    /// Label shown to the user
    pub name: String,
    pub layer: Arc<TileLayer>,
}

/// Exclusive layer switch, keyed by [`OverlayId`] in insertion order.
#[derive(Debug, Clone)]
pub struct LayersControl {
    entries: Vec<LayersControlEntry>,
    selected: Option<OverlayId>,
    position: ControlPosition,
    collapsed: bool,
}

impl Default for LayersControl {
    fn default() -> Self {
        Self::new()
    }
}

impl LayersControl {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            position: ControlPosition::TopRight,
            collapsed: true,
        }
    }

    /// Add an entry. An existing entry with the same id is replaced in place
    /// and returned.
    pub fn insert(
        &mut self,
        id: OverlayId,
        name: impl Into<String>,
        layer: Arc<TileLayer>,
    ) -> Option<LayersControlEntry> {
        let entry = LayersControlEntry {
            id,
            name: name.into(),
            layer,
        };

        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            warn!(
                "Layer switch already has an entry for '{}', replacing '{}' with '{}'",
                entry.id, existing.name, entry.name
            );
            return Some(std::mem::replace(existing, entry));
        }

        self.entries.push(entry);
        None
    }

    #[must_use]
    pub fn entries(&self) -> &[LayersControlEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, id: &OverlayId) -> Option<&LayersControlEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&OverlayId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&LayersControlEntry> {
        self.selected.as_ref().and_then(|id| self.entry(id))
    }

    /// Mark `id` as the active entry. Returns false if there is no such entry.
    pub(crate) fn select(&mut self, id: &OverlayId) -> bool {
        if self.entry(id).is_none() {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    #[must_use]
    pub const fn position(&self) -> ControlPosition {
        self.position
    }

    /// Collapsed switches show only a toggle until expanded by the user.
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }
}
