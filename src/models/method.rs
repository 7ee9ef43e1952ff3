// Site-selection method labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalizes a method label: trims whitespace and upper-cases.
/// Idempotent, so `"  ilp"`, `"Ilp"` and `"ILP "` all become `"ILP"`.
pub fn normalize_method(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// The optimizer that produced a coverage curve or a site selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Ilp,
    Greedy,
}

impl Method {
    /// Display order used by the comparison charts
    pub const CHART_ORDER: [Method; 2] = [Method::Greedy, Method::Ilp];

    /// Normalized label as it appears in results_curve.csv
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Ilp => "ILP",
            Method::Greedy => "GREEDY",
        }
    }

    /// Type label attached to the sites this method recommends
    pub fn recommendation_label(&self) -> &'static str {
        match self {
            Method::Ilp => "Recommended (ILP)",
            Method::Greedy => "Recommended (Greedy)",
        }
    }

    /// File stem of the selection table written by this method
    pub fn selection_stem(&self) -> &'static str {
        match self {
            Method::Ilp => "ilp_selection",
            Method::Greedy => "greedy_selection",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_method(s).as_str() {
            "ILP" => Ok(Method::Ilp),
            "GREEDY" => Ok(Method::Greedy),
            other => Err(format!("unknown method '{}', expected ILP or GREEDY", other)),
        }
    }
}
