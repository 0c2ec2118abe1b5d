use thiserror::Error;

use crate::overlay::OverlayId;

/// Errors raised while building or driving a map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("invalid map container id: {0:?}")]
    InvalidContainer(String),

    #[error("no overlay with id '{0}'")]
    UnknownOverlay(OverlayId),

    #[error("map has no layer switch control")]
    NoLayersControl,
}
