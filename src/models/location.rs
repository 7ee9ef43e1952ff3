// Location model representing WGS-84 coordinates

use geo::Point;
use serde::Serialize;

/// Represents a location with (lon, lat) coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub lon: f64,
    pub lat: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Builds a location from optional coordinates.
    /// Returns None when either coordinate is missing or NaN.
    pub fn from_parts(lon: Option<f64>, lat: Option<f64>) -> Option<Self> {
        match (lon, lat) {
            (Some(lon), Some(lat)) if !lon.is_nan() && !lat.is_nan() => Some(Self::new(lon, lat)),
            _ => None,
        }
    }
}

impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        Point::new(location.lon, location.lat)
    }
}
