// Pure view layer: (study tables, UI state) -> page

mod comparison;
mod format;
mod kpi;
mod map;
mod page;
mod state;

pub use self::comparison::{build_comparison, ComparisonView, CurveSeries, LineChart};
pub use self::format::format_thousands;
pub use self::kpi::{select_kpi, Kpi};
pub use self::map::{
    build_map, legend, recommended_overlay, LayerKind, LegendEntry, MapLayer, MapPoint, MapView,
    Overlay, ViewState, TOOLTIP,
};
pub use self::page::{build_page, Controls, Dashboard, Page, PageBody};
pub use self::state::{KSlider, UiState};
