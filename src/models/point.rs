// Point records for the base map layers

use crate::models::{Location, Population};
use serde::{Deserialize, Serialize};

/// A lon/lat pair as read from a CSV row. Either coordinate may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPoint {
    pub lon: Option<f64>,
    pub lat: Option<f64>,
}

impl RawPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon: Some(lon),
            lat: Some(lat),
        }
    }

    /// Location of this row, or None if a coordinate is missing
    pub fn location(&self) -> Option<Location> {
        Location::from_parts(self.lon, self.lat)
    }
}

/// A currently operating charging site
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExistingStation {
    pub point: RawPoint,
}

/// An aggregated demand location, e.g. a census-tract centroid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandPoint {
    pub point: RawPoint,

    /// Population weight, present only when the weight column exists
    pub weight: Option<Population>,
}

/// A feasible new-site location considered by the optimizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidatePoint {
    pub point: RawPoint,
}
