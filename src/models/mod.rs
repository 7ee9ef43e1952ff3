// Models module - exports all model types

mod location;
mod method;
mod performance;
mod point;
mod selection;

// Re-export model types
pub use self::location::Location;
pub use self::method::{normalize_method, Method};
pub use self::performance::{CurveError, PerformanceRow, PerformanceTable};
pub use self::point::{CandidatePoint, DemandPoint, ExistingStation, RawPoint};
pub use self::selection::{SelectionRow, SelectionSet, SelectionTable};

// Common type aliases for improved code readability
pub type K = u32;
pub type Population = f64;
pub type PointCount = f64;
