// Site selections produced by the optimizers

use crate::models::{Method, RawPoint, K};
use serde::Serialize;
use std::collections::BTreeMap;

/// A recommended site, tagged with the method that chose it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionRow {
    pub point: RawPoint,

    /// Type label, e.g. "Recommended (ILP)"
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// All sites one method selected for one value of k
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionTable {
    pub method: Method,
    pub k: K,
    pub rows: Vec<SelectionRow>,
}

impl SelectionTable {
    /// Tags every point with the method's recommendation label
    pub fn new(method: Method, k: K, points: Vec<RawPoint>) -> Self {
        let rows = points
            .into_iter()
            .map(|point| SelectionRow {
                point,
                kind: method.recommendation_label(),
            })
            .collect();
        Self { method, k, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every selection table found in the data directory, keyed by (method, k)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionSet {
    tables: BTreeMap<(Method, K), SelectionTable>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table, replacing any earlier table for the same (method, k)
    pub fn insert(&mut self, table: SelectionTable) -> Option<SelectionTable> {
        self.tables.insert((table.method, table.k), table)
    }

    pub fn get(&self, method: Method, k: K) -> Option<&SelectionTable> {
        self.tables.get(&(method, k))
    }

    /// Values of k for which the method has a selection, ascending
    pub fn supported_ks(&self, method: Method) -> Vec<K> {
        self.tables
            .keys()
            .filter(|(m, _)| *m == method)
            .map(|(_, k)| *k)
            .collect()
    }
}
