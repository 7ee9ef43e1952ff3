// KPI selection for the chosen (k, method)

use crate::error::NoResultError;
use crate::models::{Method, PerformanceTable, PointCount, Population, K};
use crate::views::format::format_thousands;
use serde::Serialize;

/// The two headline metrics for one (k, method) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub k: K,
    pub method: Method,
    pub added_pop: Population,
    pub added_pts: PointCount,
}

impl Kpi {
    /// "Added covered population", formatted for display
    pub fn added_pop_display(&self) -> String {
        format_thousands(self.added_pop)
    }

    /// "Added covered demand points", formatted for display
    pub fn added_pts_display(&self) -> String {
        format_thousands(self.added_pts)
    }
}

/// Finds the coverage row for (k, method). Zero matches is a NoResultError.
pub fn select_kpi(table: &PerformanceTable, k: K, method: Method) -> Result<Kpi, NoResultError> {
    // the table rejects duplicate (k, method) rows, so at most one matches
    let row = table.find(k, method).ok_or(NoResultError { k, method })?;

    Ok(Kpi {
        k,
        method,
        added_pop: row.added_pop,
        added_pts: row.added_pts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerformanceRow;

    fn scenario_table() -> PerformanceTable {
        PerformanceTable::new(vec![
            PerformanceRow::new(5, "greedy", 12000.0, 340.0),
            PerformanceRow::new(5, " ILP ", 13500.0, 360.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_select_kpi() {
        let kpi = select_kpi(&scenario_table(), 5, Method::Ilp).unwrap();
        assert_eq!(kpi.added_pop, 13500.0);
        assert_eq!(kpi.added_pts, 360.0);
        assert_eq!(kpi.added_pop_display(), "13,500");
        assert_eq!(kpi.added_pts_display(), "360");
    }

    #[test]
    fn test_no_result() {
        let err = select_kpi(&scenario_table(), 6, Method::Greedy).unwrap_err();
        assert_eq!(
            err,
            NoResultError {
                k: 6,
                method: Method::Greedy
            }
        );
        assert_eq!(
            err.to_string(),
            "No results found for k=6, method=GREEDY. Check results_curve.csv values."
        );
    }
}
