// Map layers: base point layers plus the optional recommended-site overlay

use crate::config::MapConfig;
use crate::data::StudyData;
use crate::models::{Location, Method, RawPoint, SelectionSet, SelectionTable, K};
use crate::views::UiState;
use geo::{BoundingRect, MultiPoint, Point, Rect};
use itertools::Itertools;
use serde::Serialize;

pub const TOOLTIP: &str = "{type}\nlon: {lon}\nlat: {lat}";

/// Which set of points a layer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerKind {
    Existing,
    Demand,
    Candidate,
    Recommended(Method),
}

impl LayerKind {
    /// Value shown for `{type}` in the tooltip
    pub fn type_label(&self) -> &'static str {
        match self {
            LayerKind::Existing => "Existing station",
            LayerKind::Demand => "Demand point",
            LayerKind::Candidate => "Candidate point",
            LayerKind::Recommended(method) => method.recommendation_label(),
        }
    }

    /// RGBA fill color
    pub fn fill_color(&self) -> [u8; 4] {
        match self {
            LayerKind::Existing => [0, 0, 0, 160],
            LayerKind::Demand => [0, 0, 255, 80],
            LayerKind::Candidate => [255, 0, 0, 140],
            LayerKind::Recommended(_) => [255, 140, 0, 255],
        }
    }

    /// Marker radius in meters
    pub fn radius(&self) -> f64 {
        match self {
            LayerKind::Existing => 50.0,
            LayerKind::Demand => 60.0,
            LayerKind::Candidate => 80.0,
            LayerKind::Recommended(_) => 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub location: Location,

    /// Population weight, demand points only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A scatter layer. Only rows with both coordinates present are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayer {
    pub kind: LayerKind,
    pub type_label: &'static str,
    pub fill_color: [u8; 4],
    pub radius: f64,
    pub points: Vec<MapPoint>,
}

impl MapLayer {
    fn new<I>(kind: LayerKind, rows: I) -> Self
    where
        I: IntoIterator<Item = (RawPoint, Option<f64>)>,
    {
        let mut dropped = 0usize;
        let points = rows
            .into_iter()
            .filter_map(|(point, weight)| match point.location() {
                Some(location) => Some(MapPoint { location, weight }),
                None => {
                    dropped += 1;
                    None
                }
            })
            .collect();
        if dropped > 0 {
            log::debug!(
                "{} layer: dropped {} rows without coordinates",
                kind.type_label(),
                dropped
            );
        }

        Self {
            kind,
            type_label: kind.type_label(),
            fill_color: kind.fill_color(),
            radius: kind.radius(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub symbol: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn legend() -> Vec<LegendEntry> {
    vec![
        LegendEntry {
            symbol: "⚫",
            name: "Existing stations",
            description: "current public charging stations",
        },
        LegendEntry {
            symbol: "🔵",
            name: "Demand points",
            description: "population tract centroids (proxy for charging demand)",
        },
        LegendEntry {
            symbol: "🔴",
            name: "Candidate points",
            description: "uncovered demand points used as candidate locations",
        },
        LegendEntry {
            symbol: "🟠",
            name: "Recommended points",
            description: "recommended next location to build",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub view_state: ViewState,
    pub map_style: String,
    pub layers: Vec<MapLayer>,

    /// Shown in place of the overlay when recommendations are unavailable for k
    pub notice: Option<String>,
    pub legend: Vec<LegendEntry>,
    pub tooltip: &'static str,
}

impl MapView {
    pub fn layer(&self, kind: LayerKind) -> Option<&MapLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn has_recommended_overlay(&self) -> bool {
        self.layers
            .iter()
            .any(|layer| matches!(layer.kind, LayerKind::Recommended(_)))
    }

    /// Bounding box of every drawn point, if any
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let points: Vec<Point<f64>> = self
            .layers
            .iter()
            .flat_map(|layer| layer.points.iter().map(|p| Point::from(p.location)))
            .collect();
        MultiPoint::from(points).bounding_rect()
    }
}

/// Outcome of the recommended-sites gate
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay<'a> {
    Shown(&'a SelectionTable),
    Unavailable(String),
    Hidden,
}

/// The overlay is shown iff the toggle is on and a selection exists for (method, k)
pub fn recommended_overlay<'a>(selections: &'a SelectionSet, state: &UiState) -> Overlay<'a> {
    if !state.show_recommended {
        return Overlay::Hidden;
    }
    match selections.get(state.method, state.k) {
        Some(table) => Overlay::Shown(table),
        None => Overlay::Unavailable(unavailable_notice(
            &selections.supported_ks(state.method),
            state.method,
        )),
    }
}

fn unavailable_notice(supported: &[K], method: Method) -> String {
    match supported {
        [] => format!("Recommended sites are not available for method {}.", method),
        [k] => format!(
            "Recommended sites are currently available for K={} only. Set K={} to view selected locations.",
            k, k
        ),
        ks => format!(
            "Recommended sites are currently available for K={} only. Set K to one of these values to view selected locations.",
            ks.iter().join(", ")
        ),
    }
}

pub fn build_map(data: &StudyData, state: &UiState, config: &MapConfig) -> MapView {
    let mut layers = vec![
        MapLayer::new(
            LayerKind::Existing,
            data.existing.iter().map(|s| (s.point, None)),
        ),
        MapLayer::new(
            LayerKind::Demand,
            data.demand.iter().map(|d| (d.point, d.weight)),
        ),
        MapLayer::new(
            LayerKind::Candidate,
            data.candidates.iter().map(|c| (c.point, None)),
        ),
    ];

    let mut notice = None;
    match recommended_overlay(&data.selections, state) {
        Overlay::Shown(table) => layers.push(MapLayer::new(
            LayerKind::Recommended(table.method),
            table.rows.iter().map(|row| (row.point, None)),
        )),
        Overlay::Unavailable(message) => notice = Some(message),
        Overlay::Hidden => {}
    }

    MapView {
        view_state: ViewState {
            latitude: config.center_lat,
            longitude: config.center_lon,
            zoom: config.zoom,
        },
        map_style: config.map_style.clone(),
        layers,
        notice,
        legend: legend(),
        tooltip: TOOLTIP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selections() -> SelectionSet {
        let mut set = SelectionSet::new();
        set.insert(SelectionTable::new(
            Method::Ilp,
            5,
            vec![RawPoint::new(-122.41, 37.77), RawPoint::default()],
        ));
        set.insert(SelectionTable::new(Method::Greedy, 5, vec![]));
        set
    }

    fn state(k: K, method: Method, show_recommended: bool) -> UiState {
        UiState {
            k,
            method,
            show_recommended,
        }
    }

    #[test]
    fn test_overlay_gate() {
        let set = selections();
        assert!(matches!(
            recommended_overlay(&set, &state(5, Method::Ilp, true)),
            Overlay::Shown(table) if table.method == Method::Ilp
        ));
        assert_eq!(
            recommended_overlay(&set, &state(5, Method::Ilp, false)),
            Overlay::Hidden
        );
        assert_eq!(
            recommended_overlay(&set, &state(4, Method::Greedy, true)),
            Overlay::Unavailable(
                "Recommended sites are currently available for K=5 only. Set K=5 to view selected locations."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_notice_lists_supported_ks() {
        assert_eq!(
            unavailable_notice(&[3, 5], Method::Greedy),
            "Recommended sites are currently available for K=3, 5 only. Set K to one of these values to view selected locations."
        );
        assert!(unavailable_notice(&[], Method::Ilp).contains("method ILP"));
    }

    #[test]
    fn test_layer_drops_missing_coordinates() {
        let layer = MapLayer::new(
            LayerKind::Candidate,
            vec![
                (RawPoint::new(-122.4, 37.7), None),
                (RawPoint { lon: None, lat: Some(37.7) }, None),
                (RawPoint::new(-122.5, f64::NAN), None),
            ],
        );
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.fill_color, [255, 0, 0, 140]);
        assert_eq!(layer.type_label, "Candidate point");
    }
}
