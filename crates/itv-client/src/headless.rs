//! In-memory [`MapView`] for environments without a rendered map.

use std::collections::BTreeMap;

use itv_core::LatLng;

use crate::map::{LatLngBounds, MapView, Marker, MarkerId, Viewport};

/// A map that only records what would be drawn.
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    markers: BTreeMap<MarkerId, Marker>,
    next_id: MarkerId,
    viewport: Viewport,
}

impl HeadlessMap {
    #[must_use]
    pub fn new() -> Self {
        Self {
            markers: BTreeMap::new(),
            next_id: 0,
            viewport: Viewport::Centered {
                center: LatLng::new(0.0, 0.0),
                zoom: 0,
            },
        }
    }

    /// Markers currently on the map, in placement order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapView for HeadlessMap {
    fn add_marker(&mut self, marker: &Marker) -> MarkerId {
        let id = self.next_id;
        self.next_id += 1;
        self.markers.insert(id, marker.clone());
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        if self.markers.remove(&id).is_none() {
            tracing::warn!(id, "remove_marker called with unknown marker id");
        }
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.viewport = Viewport::Centered { center, zoom };
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.viewport = Viewport::Fitted(bounds);
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
