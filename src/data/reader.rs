// CSV readers for the study tables

use crate::error::DataLoadError;
use crate::models::{normalize_method, PerformanceRow, RawPoint};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

pub const POINT_COLUMNS: [&str; 2] = ["lon", "lat"];
pub const CURVE_COLUMNS: [&str; 4] = ["k", "method", "added_pop", "added_pts"];

/// A CSV file opened with its header row
struct Table {
    path: PathBuf,
    reader: Reader<File>,
    headers: StringRecord,
}

impl Table {
    fn open(path: &Path) -> Result<Self, DataLoadError> {
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DataLoadError::MissingFile {
                path: path.to_path_buf(),
            },
            _ => DataLoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);
        let headers = reader
            .headers()
            .map_err(|source| DataLoadError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .clone();

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            headers,
        })
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    fn require_columns(&self, columns: &[&str]) -> Result<(), DataLoadError> {
        match columns.iter().find(|c| self.column_index(c).is_none()) {
            Some(column) => Err(DataLoadError::MissingColumn {
                path: self.path.clone(),
                column: column.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn csv_error(&self, source: csv::Error) -> DataLoadError {
        DataLoadError::Csv {
            path: self.path.clone(),
            source,
        }
    }

    /// Reads every remaining record, handing each to `f` with its line number
    fn for_each_record<F>(&mut self, mut f: F) -> Result<(), DataLoadError>
    where
        F: FnMut(&StringRecord, &StringRecord, usize) -> Result<(), DataLoadError>,
    {
        let mut record = StringRecord::new();
        loop {
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
                    f(&record, &self.headers, line)?;
                }
                Ok(false) => return Ok(()),
                Err(source) => return Err(self.csv_error(source)),
            }
        }
    }
}

/// Reads a lon/lat table. Rows with empty or NaN coordinates are kept.
pub fn read_points(path: &Path) -> Result<Vec<RawPoint>, DataLoadError> {
    let mut table = Table::open(path)?;
    table.require_columns(&POINT_COLUMNS)?;

    let mut points = Vec::new();
    let path = table.path.clone();
    table.for_each_record(|record, headers, _| {
        let point: RawPoint =
            record
                .deserialize(Some(headers))
                .map_err(|source| DataLoadError::Csv {
                    path: path.clone(),
                    source,
                })?;
        points.push(point);
        Ok(())
    })?;

    Ok(points)
}

/// Reads the demand table, attaching the optional weight column when present
pub fn read_weighted_points(
    path: &Path,
    weight_column: &str,
) -> Result<Vec<(RawPoint, Option<f64>)>, DataLoadError> {
    let mut table = Table::open(path)?;
    table.require_columns(&POINT_COLUMNS)?;
    let weight_index = table.column_index(weight_column);
    if weight_index.is_none() {
        log::debug!(
            "{} has no '{}' column, demand points are unweighted",
            path.display(),
            weight_column
        );
    }

    let mut points = Vec::new();
    let path = table.path.clone();
    table.for_each_record(|record, headers, line| {
        let point: RawPoint =
            record
                .deserialize(Some(headers))
                .map_err(|source| DataLoadError::Csv {
                    path: path.clone(),
                    source,
                })?;
        let weight = match weight_index.and_then(|i| record.get(i)) {
            None | Some("") => None,
            Some(raw) => {
                let value = raw
                    .parse::<f64>()
                    .map_err(|e| DataLoadError::InvalidValue {
                        path: path.clone(),
                        row: line,
                        message: format!("{} '{}': {}", weight_column, raw, e),
                    })?;
                Some(value).filter(|v| !v.is_nan())
            }
        };
        points.push((point, weight));
        Ok(())
    })?;

    Ok(points)
}

/// Reads results_curve.csv, normalizing every method label
pub fn read_curve(path: &Path) -> Result<Vec<PerformanceRow>, DataLoadError> {
    let mut table = Table::open(path)?;
    table.require_columns(&CURVE_COLUMNS)?;

    let mut rows = Vec::new();
    let path = table.path.clone();
    table.for_each_record(|record, headers, _| {
        let mut row: PerformanceRow =
            record
                .deserialize(Some(headers))
                .map_err(|source| DataLoadError::Csv {
                    path: path.clone(),
                    source,
                })?;
        row.method = normalize_method(&row.method);
        rows.push(row);
        Ok(())
    })?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("ev_dashboard_reader_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_points_keeps_missing_coordinates() {
        let path = write_temp(
            "points.csv",
            "id,lon,lat\n1,-122.41,37.78\n2,,37.70\n3,-122.45,NaN\n",
        );
        let points = read_points(&path).unwrap();
        assert_eq!(points.len(), 3);
        assert!(points[0].location().is_some());
        assert!(points[1].location().is_none());
        assert!(points[2].location().is_none());
    }

    #[test]
    fn test_missing_column() {
        let path = write_temp("no_lat.csv", "lon,latitude\n-122.41,37.78\n");
        match read_points(&path) {
            Err(DataLoadError::MissingColumn { column, .. }) => assert_eq!(column, "lat"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("ev_dashboard_reader_test/does_not_exist.csv");
        assert!(matches!(
            read_points(&path),
            Err(DataLoadError::MissingFile { .. })
        ));
    }

    #[test]
    fn test_unparsable_coordinate() {
        let path = write_temp("bad_lon.csv", "lon,lat\nwest,37.78\n");
        assert!(matches!(read_points(&path), Err(DataLoadError::Csv { .. })));
    }

    #[test]
    fn test_read_weighted_points() {
        let path = write_temp(
            "demand.csv",
            "lon,lat,B01003_001E\n-122.41,37.78,4200\n-122.42,37.79,\n",
        );
        let points = read_weighted_points(&path, "B01003_001E").unwrap();
        assert_eq!(points[0].1, Some(4200.0));
        assert_eq!(points[1].1, None);

        let unweighted = read_weighted_points(&path, "population").unwrap();
        assert!(unweighted.iter().all(|(_, w)| w.is_none()));
    }

    #[test]
    fn test_invalid_weight() {
        let path = write_temp(
            "bad_weight.csv",
            "lon,lat,B01003_001E\n-122.41,37.78,many\n",
        );
        match read_weighted_points(&path, "B01003_001E") {
            Err(DataLoadError::InvalidValue { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_read_curve_normalizes_methods() {
        let path = write_temp(
            "curve.csv",
            "k,method,added_pop,added_pts\n5,greedy,12000,340\n5,\" ILP \",13500,360\n",
        );
        let rows = read_curve(&path).unwrap();
        assert_eq!(rows[0].method, "GREEDY");
        assert_eq!(rows[1].method, "ILP");
        assert_eq!(rows[1].added_pop, 13500.0);
    }
}
