//! Named, switchable overlays: a tile layer paired with its legend.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::layer::TileLayer;
use crate::legend::LegendControl;

/// Stable identifier of an overlay, independent of its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OverlayId(String);

impl OverlayId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OverlayId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A thematic layer the user can switch to.
///
/// `layer` and `legend` are shared handles: a map attaches exactly these
/// instances, so attachment is tracked by identity rather than by value.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub id: OverlayId,
    /// Human-readable label shown in the layer switch
    pub name: String,
    pub layer: Arc<TileLayer>,
    pub legend: Arc<LegendControl>,
}

impl Overlay {
    #[must_use]
    pub fn new(
        id: impl Into<OverlayId>,
        name: impl Into<String>,
        layer: TileLayer,
        legend: LegendControl,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layer: Arc::new(layer),
            legend: Arc::new(legend),
        }
    }

    /// Copy of this overlay whose relative tile template points at `base_url`.
    ///
    /// The legend handle is shared with `self`; the layer handle is new.
    #[must_use]
    pub fn with_tiles_base_url(&self, base_url: &str) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            layer: Arc::new(self.layer.resolved_against(base_url)),
            legend: Arc::clone(&self.legend),
        }
    }
}
