// Read-through cache so repeated interactions do not re-read disk

use crate::config::DataSources;
use crate::data::StudyData;
use crate::error::DataLoadError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

type Cache = HashMap<DataSources, Arc<StudyData>>;

static CACHE: OnceLock<Mutex<Cache>> = OnceLock::new();

fn cache() -> MutexGuard<'static, Cache> {
    CACHE
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Returns the cached tables for these sources, loading them on first use.
/// Failed loads are not cached.
pub fn load_cached(sources: &DataSources) -> Result<Arc<StudyData>, DataLoadError> {
    if let Some(data) = cache().get(sources) {
        log::debug!("study tables for {} served from cache", sources.dir.display());
        return Ok(Arc::clone(data));
    }

    // loaded without holding the lock; a concurrent first load keeps whichever finished first
    let data = Arc::new(StudyData::load(sources)?);
    Ok(Arc::clone(
        cache().entry(sources.clone()).or_insert(data),
    ))
}

/// Drops the cached tables for these sources. Returns true if an entry existed.
pub fn invalidate(sources: &DataSources) -> bool {
    cache().remove(sources).is_some()
}

/// Drops every cached entry
pub fn clear() {
    cache().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_sources(weight_column: &str) -> DataSources {
        let mut sources = DataSources::in_dir(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("tests")
                .join("data")
                .join("sample"),
        );
        // distinct keys keep tests independent of each other
        sources.weight_column = weight_column.to_string();
        sources
    }

    #[test]
    fn test_second_load_is_cached() {
        let sources = sample_sources("cache_hit");
        let first = load_cached(&sources).unwrap();
        let second = load_cached(&sources).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let sources = sample_sources("cache_invalidate");
        let first = load_cached(&sources).unwrap();
        assert!(invalidate(&sources));
        assert!(!invalidate(&sources));
        let second = load_cached(&sources).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.curve, second.curve);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let sources = DataSources::in_dir("/nonexistent/ev_dashboard_cache");
        assert!(load_cached(&sources).is_err());
        assert!(!invalidate(&sources));
    }
}
