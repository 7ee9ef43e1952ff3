// Public modules
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod render;
pub mod session;
pub mod views;

// Re-exports for convenience
pub use config::{DashboardConfig, DataSources, MapConfig};
pub use data::StudyData;
pub use error::{DashboardError, DataLoadError, NoResultError, RenderError};
pub use models::{Method, PerformanceRow, PerformanceTable};
pub use views::{build_page, Page, UiState};
