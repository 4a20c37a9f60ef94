use serde::Serialize;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` when both axes are finite numbers.
    ///
    /// Unresolved coordinates are carried as `NaN`, so this is the check the
    /// map layer uses to decide whether a station gets a marker.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl std::str::FromStr for LatLng {
    type Err = String;

    /// Parses `"lat,lng"`, e.g. `"41,1.5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected \"lat,lng\", got \"{s}\""))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("latitude: {e}"))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("longitude: {e}"))?;
        Ok(Self { lat, lng })
    }
}
