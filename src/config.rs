// Dashboard configuration: data sources, map view and control defaults

use crate::models::K;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `EV_DASHBOARD__DATA__DIR=./data`
pub const ENV_PREFIX: &str = "EV_DASHBOARD";

/// Locations of the six input tables
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// Directory every file name below is resolved against
    pub dir: PathBuf,
    pub existing_stations: String,
    pub demand_points: String,
    pub candidate_points: String,
    pub results_curve: String,
    pub ilp_selection: String,
    pub greedy_selection: String,

    /// Optional population-weight column of the demand table
    pub weight_column: String,

    /// k that the base ilp/greedy selection files were computed for
    pub selection_k: K,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            existing_stations: String::from("existing_stations.csv"),
            demand_points: String::from("demand_points.csv"),
            candidate_points: String::from("candidate_points.csv"),
            results_curve: String::from("results_curve.csv"),
            ilp_selection: String::from("ilp_selection.csv"),
            greedy_selection: String::from("greedy_selection.csv"),
            weight_column: String::from("B01003_001E"),
            selection_k: 5,
        }
    }
}

impl DataSources {
    /// Default file names inside the given directory
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

/// Initial view of the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub map_style: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        // San Francisco
        Self {
            center_lat: 37.775,
            center_lon: -122.44,
            zoom: 11.0,
            map_style: String::from(
                "https://basemaps.cartocdn.com/gl/positron-gl-style/style.json",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub data: DataSources,
    pub map: MapConfig,

    /// Initial K slider value, clamped into [1, max k]
    pub default_k: K,
    pub output_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: String::from("EV Charging Station Location Optimization (SF)"),
            data: DataSources::default(),
            map: MapConfig::default(),
            default_k: 5,
            output_dir: PathBuf::from("dashboard_out"),
        }
    }
}

impl DashboardConfig {
    /// Layers serde defaults, an optional TOML file and environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }
}
