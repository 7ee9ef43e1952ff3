// Data layer: CSV readers, the study tables and the process-wide load cache

pub mod cache;
mod reader;
mod study;

pub use self::cache::{clear, invalidate, load_cached};
pub use self::reader::{read_curve, read_points, read_weighted_points};
pub use self::study::StudyData;
