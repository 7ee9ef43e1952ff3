// Error types for loading, selecting and rendering

use crate::models::{CurveError, Method, K};
use std::path::PathBuf;

/// A required input file is absent or cannot be parsed
#[derive(thiserror::Error, Debug)]
pub enum DataLoadError {
    #[error("required file {path} not found")]
    MissingFile { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed row in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },
    #[error("invalid value in {path} at row {row}: {message}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        message: String,
    },
    #[error("invalid coverage table {path}: {source}")]
    Curve {
        path: PathBuf,
        #[source]
        source: CurveError,
    },
}

/// The selected (k, method) has no row in the coverage table
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("No results found for k={k}, method={method}. Check results_curve.csv values.")]
pub struct NoResultError {
    pub k: K,
    pub method: Method,
}

/// Failures while writing a rendered page to disk
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("failed to draw {target}: {message}")]
    Drawing { target: String, message: String },
}

#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
