// Coverage curve model: one row per (k, method) pair

use crate::models::{normalize_method, Method, PointCount, Population, K};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One point of a coverage curve as stored in results_curve.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRow {
    /// Number of newly sited facilities
    pub k: K,

    /// Normalized method label (trimmed, upper-cased)
    pub method: String,

    /// Population newly covered with k added sites
    pub added_pop: Population,

    /// Demand points newly covered with k added sites
    pub added_pts: PointCount,
}

impl PerformanceRow {
    /// Creates a row, normalizing the method label
    pub fn new<S: AsRef<str>>(
        k: K,
        method: S,
        added_pop: Population,
        added_pts: PointCount,
    ) -> Self {
        Self {
            k,
            method: normalize_method(method.as_ref()),
            added_pop,
            added_pts,
        }
    }

    /// Checks whether this row belongs to the given method
    pub fn is_method(&self, method: Method) -> bool {
        self.method == method.as_str()
    }
}

/// Problems that make a set of rows unusable as a coverage table
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("table has no rows")]
    Empty,
    #[error("k must be at least 1, found {0}")]
    InvalidK(K),
    #[error("duplicate row for k={k}, method={method}")]
    Duplicate { k: K, method: String },
}

/// The full coverage table for both methods, in file order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceTable {
    rows: Vec<PerformanceRow>,
    max_k: K,
}

impl PerformanceTable {
    /// Builds a table, rejecting empty input, k = 0 and duplicate (k, method) rows
    pub fn new(rows: Vec<PerformanceRow>) -> Result<Self, CurveError> {
        let mut seen = HashSet::new();
        for row in &rows {
            if row.k < 1 {
                return Err(CurveError::InvalidK(row.k));
            }
            if !seen.insert((row.k, row.method.as_str())) {
                return Err(CurveError::Duplicate {
                    k: row.k,
                    method: row.method.clone(),
                });
            }
        }

        let max_k = rows.iter().map(|row| row.k).max().ok_or(CurveError::Empty)?;
        Ok(Self { rows, max_k })
    }

    /// All rows in file order
    pub fn rows(&self) -> &[PerformanceRow] {
        &self.rows
    }

    /// Largest k present in the table
    pub fn max_k(&self) -> K {
        self.max_k
    }

    /// The unique row for (k, method), if present
    pub fn find(&self, k: K, method: Method) -> Option<&PerformanceRow> {
        self.rows
            .iter()
            .find(|row| row.k == k && row.is_method(method))
    }

    /// Rows of one method sorted by k
    pub fn curve(&self, method: Method) -> Vec<&PerformanceRow> {
        self.rows
            .iter()
            .filter(|row| row.is_method(method))
            .sorted_by_key(|row| row.k)
            .collect()
    }

    /// Normalized method labels present in the table, sorted
    pub fn methods(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.method.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// Checks that both gains never decrease as k grows for the given method
    pub fn is_monotonic(&self, method: Method) -> bool {
        self.curve(method).windows(2).all(|pair| {
            pair[1].added_pop >= pair[0].added_pop && pair[1].added_pts >= pair[0].added_pts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<PerformanceRow> {
        vec![
            PerformanceRow::new(2, "ilp", 9000.0, 250.0),
            PerformanceRow::new(1, " ILP ", 5000.0, 150.0),
            PerformanceRow::new(1, "greedy", 4800.0, 140.0),
            PerformanceRow::new(2, "Greedy", 8700.0, 240.0),
        ]
    }

    #[test]
    fn test_new_normalizes_method() {
        let row = PerformanceRow::new(5, " Ilp ", 1.0, 2.0);
        assert_eq!(row.method, "ILP");
        assert!(row.is_method(Method::Ilp));
    }

    #[test]
    fn test_max_k_and_find() {
        let table = PerformanceTable::new(sample_rows()).unwrap();
        assert_eq!(table.max_k(), 2);
        let row = table.find(1, Method::Ilp).unwrap();
        assert_eq!(row.added_pop, 5000.0);
        assert!(table.find(3, Method::Ilp).is_none());
        assert_eq!(table.find(2, Method::Greedy).map(|r| r.added_pts), Some(240.0));
    }

    #[test]
    fn test_curve_sorted_by_k() {
        let table = PerformanceTable::new(sample_rows()).unwrap();
        let ks: Vec<K> = table.curve(Method::Ilp).iter().map(|r| r.k).collect();
        assert_eq!(ks, vec![1, 2]);
        assert!(table.is_monotonic(Method::Ilp));
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut rows = sample_rows();
        rows.push(PerformanceRow::new(2, "ILP", 1.0, 1.0));
        assert_eq!(
            PerformanceTable::new(rows),
            Err(CurveError::Duplicate {
                k: 2,
                method: "ILP".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_empty_and_zero_k() {
        assert_eq!(PerformanceTable::new(vec![]), Err(CurveError::Empty));
        assert_eq!(
            PerformanceTable::new(vec![PerformanceRow::new(0, "ILP", 1.0, 1.0)]),
            Err(CurveError::InvalidK(0))
        );
    }

    #[test]
    fn test_detects_non_monotonic_curve() {
        let table = PerformanceTable::new(vec![
            PerformanceRow::new(1, "GREEDY", 10.0, 5.0),
            PerformanceRow::new(2, "GREEDY", 8.0, 6.0),
        ])
        .unwrap();
        assert!(!table.is_monotonic(Method::Greedy));
        assert_eq!(table.methods(), vec!["GREEDY"]);
    }
}
