// Page assembly: controls, KPIs, comparison and map, or an error banner

use crate::config::DashboardConfig;
use crate::data::StudyData;
use crate::models::{Method, K};
use crate::views::{
    build_comparison, build_map, select_kpi, ComparisonView, KSlider, Kpi, MapView, UiState,
};
use serde::Serialize;

/// Sidebar controls as rendered for the current state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub slider: KSlider,
    pub method: Method,
    pub methods: [Method; 2],
    pub show_recommended: bool,

    /// Values of k with recommendations for the selected method
    pub recommended_ks: Vec<K>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub kpi: Kpi,
    pub comparison: ComparisonView,
    pub map: MapView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageBody {
    Ready(Box<Dashboard>),
    /// Rendering stopped after the banner; nothing below it is shown
    Halted { banner: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub controls: Controls,
    pub body: PageBody,
}

impl Page {
    pub fn is_halted(&self) -> bool {
        matches!(self.body, PageBody::Halted { .. })
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.body {
            PageBody::Ready(dashboard) => Some(dashboard),
            PageBody::Halted { .. } => None,
        }
    }

    pub fn kpi(&self) -> Option<&Kpi> {
        self.dashboard().map(|dashboard| &dashboard.kpi)
    }
}

/// Builds the whole page for one interaction. Pure: no I/O.
pub fn build_page(data: &StudyData, state: &UiState, config: &DashboardConfig) -> Page {
    let controls = Controls {
        slider: KSlider {
            value: state.k,
            ..KSlider::new(data.curve.max_k(), config.default_k)
        },
        method: state.method,
        methods: [Method::Ilp, Method::Greedy],
        show_recommended: state.show_recommended,
        recommended_ks: data.selections.supported_ks(state.method),
    };
    if !controls.slider.contains(state.k) {
        log::debug!(
            "k={} is outside the slider range {}..={}",
            state.k,
            controls.slider.min,
            controls.slider.max
        );
    }

    let body = match select_kpi(&data.curve, state.k, state.method) {
        Ok(kpi) => PageBody::Ready(Box::new(Dashboard {
            kpi,
            comparison: build_comparison(&data.curve),
            map: build_map(data, state, &config.map),
        })),
        Err(e) => {
            log::warn!("{}", e);
            PageBody::Halted {
                banner: e.to_string(),
            }
        }
    };

    Page {
        title: config.title.clone(),
        controls,
        body,
    }
}
