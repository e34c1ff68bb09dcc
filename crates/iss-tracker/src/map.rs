//! Map view model for the dashboard.
//!
//! A `MapView` is built fresh on every refresh cycle, so markers can never
//! accumulate across cycles: the previous view is replaced wholesale.

use crate::position::Position;
use serde::Serialize;

/// Default map center when no position is available.
pub const DEFAULT_CENTER: Position = Position::new(0.0, 0.0);

/// Default zoom level (whole-world view).
pub const DEFAULT_ZOOM: u8 = 2;

/// Label shown on the position marker.
pub const MARKER_LABEL: &str = "ISS";

/// A labeled marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Position,
    pub label: String,
}

/// One cycle's map: center, zoom, and at most one marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Position,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

impl MapView {
    /// Build the view for one refresh cycle.
    ///
    /// With a position: exactly one marker there, center moved to it.
    /// Without: no markers, default center, silently.
    pub fn render(position: Option<Position>) -> Self {
        let mut view = Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            markers: Vec::new(),
        };
        if let Some(position) = position {
            view.markers.push(Marker {
                position,
                label: MARKER_LABEL.to_string(),
            });
            view.center = position;
        }
        view
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::render(None)
    }
}
