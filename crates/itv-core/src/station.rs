use serde::Serialize;

use crate::geo::LatLng;
use crate::region::Region;

/// Placeholder shown for descriptive fields no provider supplied.
pub const NOT_AVAILABLE: &str = "N/D";

/// Station type assumed when a provider does not say ("fixed" station).
pub const DEFAULT_KIND: &str = "Fija";

/// Maximum number of stations handed to the map and the results table.
pub const RESULT_CAP: usize = 50;

/// An inspection station in canonical form.
///
/// Every descriptive field is always populated: either with provider data or
/// with [`NOT_AVAILABLE`] (`schedule` falls back to an empty string and
/// `kind` to [`DEFAULT_KIND`]). Coordinates are `NaN` when they could not be
/// resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub name: String,
    /// Station type or operator category, e.g. `"Fija"` or `"Móvil"`.
    pub kind: String,
    pub address: String,
    pub locality: String,
    pub postal_code: String,
    pub province: String,
    /// Free-text opening hours.
    pub schedule: String,
    pub lat: f64,
    pub lng: f64,
    /// Provider the record came from; `None` for canonical search results.
    pub region: Option<Region>,
}

impl Station {
    #[must_use]
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Returns `true` if both coordinates resolved to real numbers.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.position().is_finite()
    }
}

/// Ordered stations from a single response, capped at [`RESULT_CAP`].
///
/// Order is the provider's response order. `total` keeps the count before the
/// cap was applied so callers can report truncation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StationCollection {
    stations: Vec<Station>,
    total: usize,
}

impl StationCollection {
    /// Builds a collection, keeping only the first [`RESULT_CAP`] stations.
    #[must_use]
    pub fn new(mut stations: Vec<Station>) -> Self {
        let total = stations.len();
        stations.truncate(RESULT_CAP);
        Self { stations, total }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of stations in the response before capping.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total > self.stations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Station] {
        &self.stations
    }
}

impl FromIterator<Station> for StationCollection {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StationCollection {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str) -> Station {
        Station {
            name: name.to_owned(),
            kind: DEFAULT_KIND.to_owned(),
            address: NOT_AVAILABLE.to_owned(),
            locality: NOT_AVAILABLE.to_owned(),
            postal_code: NOT_AVAILABLE.to_owned(),
            province: NOT_AVAILABLE.to_owned(),
            schedule: String::new(),
            lat: 41.0,
            lng: 2.0,
            region: Some(Region::Cat),
        }
    }

    #[test]
    fn collection_caps_at_result_cap_and_keeps_total() {
        let stations: StationCollection = (0..75).map(|i| station(&format!("ITV {i}"))).collect();
        assert_eq!(stations.len(), RESULT_CAP);
        assert_eq!(stations.total(), 75);
        assert!(stations.is_truncated());
        assert_eq!(stations.as_slice()[0].name, "ITV 0");
        assert_eq!(stations.as_slice()[RESULT_CAP - 1].name, "ITV 49");
    }

    #[test]
    fn collection_under_cap_is_not_truncated() {
        let stations = StationCollection::new(vec![station("A"), station("B")]);
        assert_eq!(stations.len(), 2);
        assert_eq!(stations.total(), 2);
        assert!(!stations.is_truncated());
    }

    #[test]
    fn station_without_coordinates_reports_so() {
        let mut s = station("A");
        s.lng = f64::NAN;
        assert!(!s.has_coordinates());
    }

    #[test]
    fn nan_coordinates_serialize_as_null() {
        let mut s = station("A");
        s.lat = f64::NAN;
        let json = serde_json::to_value(&s).unwrap();
        assert!(json["lat"].is_null());
        assert_eq!(json["lng"], 2.0);
        assert_eq!(json["region"], "Cat");
    }
}
