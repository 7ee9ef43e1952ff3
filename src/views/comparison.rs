// Greedy vs ILP comparison: raw table and the two coverage curves

use crate::models::{Method, PerformanceRow, PerformanceTable, K};
use serde::Serialize;

/// One line of a chart: (k, value) pairs sorted by k
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSeries {
    pub method: Method,
    pub points: Vec<(K, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<CurveSeries>,
}

impl LineChart {
    /// Smallest and largest k over all series
    pub fn k_bounds(&self) -> Option<(K, K)> {
        let ks = self.series.iter().flat_map(|s| s.points.iter().map(|(k, _)| *k));
        let min = ks.clone().min()?;
        let max = ks.max()?;
        Some((min, max))
    }

    /// Largest value over all series
    pub fn max_value(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|(_, v)| *v))
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }
}

/// Table and charts shown under "Performance vs K"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    /// Full coverage table in file order
    pub table: Vec<PerformanceRow>,
    pub added_points: LineChart,
    pub added_population: LineChart,
}

pub fn build_comparison(table: &PerformanceTable) -> ComparisonView {
    let series = |value: fn(&PerformanceRow) -> f64| -> Vec<CurveSeries> {
        Method::CHART_ORDER
            .iter()
            .map(|&method| CurveSeries {
                method,
                points: table
                    .curve(method)
                    .into_iter()
                    .map(|row| (row.k, value(row)))
                    .collect(),
            })
            .collect()
    };

    ComparisonView {
        table: table.rows().to_vec(),
        added_points: LineChart {
            title: "Greedy vs ILP: Added Demand Points",
            x_label: "Number of new facilities (k)",
            y_label: "Added covered demand points",
            series: series(|row| row.added_pts),
        },
        added_population: LineChart {
            title: "Greedy vs ILP: Added Population Coverage",
            x_label: "Number of new facilities (k)",
            y_label: "Added covered population",
            series: series(|row| row.added_pop),
        },
    }
}
