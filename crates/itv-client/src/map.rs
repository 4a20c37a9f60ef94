//! Keeps a map's markers in step with the displayed stations.
//!
//! The marker set is never patched: every new collection removes all existing
//! markers and plots the new ones. Rendering goes through the [`MapView`]
//! trait so the same reconciliation drives a browser map, the headless view
//! used by the CLI, or a test double.

use itv_core::{LatLng, Station, StationCollection};
use serde::Serialize;

/// Handle a [`MapView`] hands out for a placed marker.
pub type MarkerId = u64;

/// Visual style of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerStyle {
    /// Small filled circle used for the initial overview.
    Circle,
    /// Standard pin used for search results.
    Pin,
}

/// A marker to place on the map, with its popup label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    /// Popup heading: the station name.
    pub title: String,
    /// Popup body: the locality, plus the postal code for search results.
    pub detail: String,
    pub style: MarkerStyle,
}

impl Marker {
    /// Overview marker for the initial plot.
    #[must_use]
    pub fn overview(station: &Station) -> Self {
        Self {
            position: station.position(),
            title: station.name.clone(),
            detail: station.locality.clone(),
            style: MarkerStyle::Circle,
        }
    }

    /// Marker for a search result.
    #[must_use]
    pub fn result(station: &Station) -> Self {
        Self {
            position: station.position(),
            title: station.name.clone(),
            detail: format!("{} ({})", station.locality, station.postal_code),
            style: MarkerStyle::Pin,
        }
    }
}

/// Axis-aligned box in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    #[must_use]
    pub fn from_point(p: LatLng) -> Self {
        Self {
            south: p.lat,
            west: p.lng,
            north: p.lat,
            east: p.lng,
        }
    }

    /// Smallest box containing every point, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |mut bounds, p| {
            bounds.extend(p);
            bounds
        }))
    }

    pub fn extend(&mut self, p: LatLng) {
        self.south = self.south.min(p.lat);
        self.north = self.north.max(p.lat);
        self.west = self.west.min(p.lng);
        self.east = self.east.max(p.lng);
    }

    #[must_use]
    pub fn contains(&self, p: LatLng) -> bool {
        (self.south..=self.north).contains(&p.lat) && (self.west..=self.east).contains(&p.lng)
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// What part of the world the map is showing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Viewport {
    Centered { center: LatLng, zoom: u8 },
    Fitted(LatLngBounds),
}

/// The rendering surface the synchronizer drives.
pub trait MapView {
    /// Places a marker and returns its handle.
    fn add_marker(&mut self, marker: &Marker) -> MarkerId;

    /// Removes a previously placed marker. Unknown handles are ignored.
    fn remove_marker(&mut self, id: MarkerId);

    fn set_view(&mut self, center: LatLng, zoom: u8);

    fn fit_bounds(&mut self, bounds: LatLngBounds);

    fn viewport(&self) -> Viewport;
}

/// Owns the marker set and the view it is drawn on.
pub struct MapSynchronizer<V: MapView> {
    view: V,
    markers: Vec<(MarkerId, Marker)>,
}

impl<V: MapView> MapSynchronizer<V> {
    /// Takes ownership of `view` and centers it on the default position.
    pub fn new(mut view: V, center: LatLng, zoom: u8) -> Self {
        view.set_view(center, zoom);
        Self {
            view,
            markers: Vec::new(),
        }
    }

    /// Initial plot: replaces all markers with overview markers and leaves
    /// the viewport alone. Returns the number of markers placed.
    pub fn render(&mut self, stations: &StationCollection) -> usize {
        self.clear();
        let placed = self.plot(stations, Marker::overview);
        tracing::debug!(placed, skipped = stations.len() - placed, "rendered stations");
        placed
    }

    /// Query redraw: replaces all markers with result markers and fits the
    /// view to them. With no plottable station the previous viewport is kept.
    /// Returns the number of markers placed.
    pub fn replace(&mut self, stations: &StationCollection) -> usize {
        self.clear();
        let placed = self.plot(stations, Marker::result);

        let bounds = LatLngBounds::from_points(self.markers.iter().map(|(_, m)| m.position));
        if let Some(bounds) = bounds {
            self.view.fit_bounds(bounds);
        }
        tracing::debug!(placed, skipped = stations.len() - placed, "replaced markers");
        placed
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().map(|(_, m)| m)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.view.viewport()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    fn clear(&mut self) {
        for (id, _) in self.markers.drain(..) {
            self.view.remove_marker(id);
        }
    }

    fn plot(&mut self, stations: &StationCollection, make: fn(&Station) -> Marker) -> usize {
        for station in stations.iter().filter(|s| s.has_coordinates()) {
            let marker = make(station);
            let id = self.view.add_marker(&marker);
            self.markers.push((id, marker));
        }
        self.markers.len()
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
