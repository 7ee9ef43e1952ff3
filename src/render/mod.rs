// Writes a built Page to an output directory

mod charts;
mod layers;
mod html;

pub use self::charts::{draw_line_chart, draw_map};
pub use self::layers::map_to_feature_collection;
pub use self::html::{
    escape, render_html, ADDED_POINTS_SVG, ADDED_POPULATION_SVG, MAP_GEOJSON, MAP_SVG,
};

use crate::error::RenderError;
use crate::views::{Page, PageBody};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const INDEX_HTML: &str = "index.html";
pub const PAGE_JSON: &str = "page.json";

/// Files that only a ready page produces
const DASHBOARD_FILES: [&str; 4] = [ADDED_POINTS_SVG, ADDED_POPULATION_SVG, MAP_SVG, MAP_GEOJSON];

/// Deletes charts and map left by an earlier render into the same directory
fn remove_dashboard_files(output_dir: &Path) -> Result<(), RenderError> {
    for name in DASHBOARD_FILES {
        match fs::remove_file(output_dir.join(name)) {
            Ok(()) => log::debug!("removed stale {}", name),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Writes the page files and returns their paths.
/// Charts and map are only written when the page was not halted; a halted
/// page removes any left over from a previous render.
pub fn write_page(page: &Page, output_dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();

    let json_path = output_dir.join(PAGE_JSON);
    fs::write(&json_path, serde_json::to_string_pretty(page)?)?;
    written.push(json_path);

    match &page.body {
        PageBody::Halted { .. } => remove_dashboard_files(output_dir)?,
        PageBody::Ready(dashboard) => {
            let points_path = output_dir.join(ADDED_POINTS_SVG);
            draw_line_chart(&dashboard.comparison.added_points, &points_path)?;
            written.push(points_path);

            let population_path = output_dir.join(ADDED_POPULATION_SVG);
            draw_line_chart(&dashboard.comparison.added_population, &population_path)?;
            written.push(population_path);

            let map_path = output_dir.join(MAP_SVG);
            draw_map(&dashboard.map, &map_path)?;
            written.push(map_path);

            let geojson_path = output_dir.join(MAP_GEOJSON);
            let collection = map_to_feature_collection(&dashboard.map);
            fs::write(&geojson_path, serde_json::to_string_pretty(&collection)?)?;
            written.push(geojson_path);
        }
    }

    let html_path = output_dir.join(INDEX_HTML);
    fs::write(&html_path, render_html(page))?;
    written.push(html_path);

    log::info!("wrote {} files to {}", written.len(), output_dir.display());
    Ok(written)
}

/// Plain-text rendering of the page for the terminal
pub fn summary(page: &Page) -> String {
    let mut lines = vec![page.title.clone()];
    lines.push(format!(
        "k={} method={} recommended={}",
        page.controls.slider.value,
        page.controls.method,
        if page.controls.show_recommended { "on" } else { "off" }
    ));

    match &page.body {
        PageBody::Halted { banner } => lines.push(format!("ERROR: {}", banner)),
        PageBody::Ready(dashboard) => {
            lines.push(format!(
                "  Added covered population:    {}",
                dashboard.kpi.added_pop_display()
            ));
            lines.push(format!(
                "  Added covered demand points: {}",
                dashboard.kpi.added_pts_display()
            ));
            for layer in &dashboard.map.layers {
                lines.push(format!("  {:<22} {} points", layer.type_label, layer.len()));
            }
            if let Some(notice) = &dashboard.map.notice {
                lines.push(format!("  NOTE: {}", notice));
            }
        }
    }

    lines.join("\n")
}
