// Loading of the complete set of study tables

use crate::config::DataSources;
use crate::data::reader::{read_curve, read_points, read_weighted_points};
use crate::error::DataLoadError;
use crate::models::{
    CandidatePoint, DemandPoint, ExistingStation, Method, PerformanceTable, SelectionSet,
    SelectionTable, K,
};
use std::fs;
use std::path::Path;

/// Everything the dashboard displays, loaded once and never mutated
#[derive(Debug, Clone)]
pub struct StudyData {
    pub existing: Vec<ExistingStation>,
    pub demand: Vec<DemandPoint>,
    pub candidates: Vec<CandidatePoint>,
    pub curve: PerformanceTable,
    pub selections: SelectionSet,
}

impl StudyData {
    /// Reads all tables from disk. The independent files are read concurrently.
    pub fn load(sources: &DataSources) -> Result<Self, DataLoadError> {
        log::info!("loading study tables from {}", sources.dir.display());

        let ((existing, demand), (candidates, (curve, selections))) = rayon::join(
            || {
                rayon::join(
                    || load_existing(sources),
                    || load_demand(sources),
                )
            },
            || {
                rayon::join(
                    || load_candidates(sources),
                    || rayon::join(|| load_curve(sources), || load_selections(sources)),
                )
            },
        );

        let data = Self {
            existing: existing?,
            demand: demand?,
            candidates: candidates?,
            curve: curve?,
            selections: selections?,
        };

        log::info!(
            "loaded {} existing stations, {} demand points, {} candidate points, {} curve rows",
            data.existing.len(),
            data.demand.len(),
            data.candidates.len(),
            data.curve.rows().len()
        );
        log::debug!("methods in coverage table: {:?}", data.curve.methods());
        for method in Method::CHART_ORDER {
            if !data.curve.is_monotonic(method) {
                log::warn!("coverage curve for {} decreases as k grows", method);
            }
        }

        Ok(data)
    }
}

fn load_existing(sources: &DataSources) -> Result<Vec<ExistingStation>, DataLoadError> {
    let points = read_points(&sources.resolve(&sources.existing_stations))?;
    Ok(points
        .into_iter()
        .map(|point| ExistingStation { point })
        .collect())
}

fn load_demand(sources: &DataSources) -> Result<Vec<DemandPoint>, DataLoadError> {
    let path = sources.resolve(&sources.demand_points);
    let points = read_weighted_points(&path, &sources.weight_column)?;
    Ok(points
        .into_iter()
        .map(|(point, weight)| DemandPoint { point, weight })
        .collect())
}

fn load_candidates(sources: &DataSources) -> Result<Vec<CandidatePoint>, DataLoadError> {
    let points = read_points(&sources.resolve(&sources.candidate_points))?;
    Ok(points
        .into_iter()
        .map(|point| CandidatePoint { point })
        .collect())
}

fn load_curve(sources: &DataSources) -> Result<PerformanceTable, DataLoadError> {
    let path = sources.resolve(&sources.results_curve);
    let rows = read_curve(&path)?;
    PerformanceTable::new(rows).map_err(|source| DataLoadError::Curve { path, source })
}

/// Loads the two required selection files plus any `<stem>_k<K>.csv` extras
fn load_selections(sources: &DataSources) -> Result<SelectionSet, DataLoadError> {
    let mut selections = SelectionSet::new();
    for (method, file_name) in [
        (Method::Ilp, &sources.ilp_selection),
        (Method::Greedy, &sources.greedy_selection),
    ] {
        let points = read_points(&sources.resolve(file_name))?;
        selections.insert(SelectionTable::new(method, sources.selection_k, points));
    }

    for (method, k, path) in find_extra_selections(&sources.dir)? {
        if k == sources.selection_k {
            log::warn!(
                "{} duplicates the base selection for k={}, using it instead",
                path.display(),
                k
            );
        }
        let points = read_points(&path)?;
        log::debug!("{} selection for k={}: {} sites", method, k, points.len());
        selections.insert(SelectionTable::new(method, k, points));
    }

    Ok(selections)
}

fn find_extra_selections(
    dir: &Path,
) -> Result<Vec<(Method, K, std::path::PathBuf)>, DataLoadError> {
    let io_error = |source: std::io::Error| DataLoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if let Some((method, k)) = parse_selection_file_name(file_name) {
            found.push((method, k, path));
        }
    }
    found.sort_by_key(|(method, k, _)| (*method, *k));
    Ok(found)
}

/// Parses names like `greedy_selection_k3.csv` into (GREEDY, 3)
fn parse_selection_file_name(file_name: &str) -> Option<(Method, K)> {
    let stem = file_name.strip_suffix(".csv")?;
    [Method::Ilp, Method::Greedy].into_iter().find_map(|method| {
        let k = stem
            .strip_prefix(method.selection_stem())?
            .strip_prefix("_k")?
            .parse::<K>()
            .ok()?;
        Some((method, k))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_sources() -> DataSources {
        DataSources::in_dir(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("tests")
                .join("data")
                .join("sample"),
        )
    }

    #[test]
    fn test_parse_selection_file_name() {
        assert_eq!(
            parse_selection_file_name("greedy_selection_k3.csv"),
            Some((Method::Greedy, 3))
        );
        assert_eq!(
            parse_selection_file_name("ilp_selection_k10.csv"),
            Some((Method::Ilp, 10))
        );
        assert_eq!(parse_selection_file_name("ilp_selection.csv"), None);
        assert_eq!(parse_selection_file_name("ilp_selection_kx.csv"), None);
        assert_eq!(parse_selection_file_name("results_curve.csv"), None);
    }

    #[test]
    fn test_load_sample() {
        let data = StudyData::load(&sample_sources()).unwrap();
        assert_eq!(data.existing.len(), 5);
        assert_eq!(data.demand.len(), 6);
        assert_eq!(data.candidates.len(), 4);
        assert_eq!(data.curve.max_k(), 8);
        assert_eq!(data.selections.supported_ks(Method::Ilp), vec![5]);
        assert_eq!(data.selections.supported_ks(Method::Greedy), vec![5]);
        assert!(data.demand.iter().any(|d| d.weight.is_some()));
    }

    #[test]
    fn test_missing_directory() {
        let sources = DataSources::in_dir("/nonexistent/ev_dashboard_data");
        assert!(StudyData::load(&sources).is_err());
    }
}
